use crate::FileEntry;

/// How full the server disk is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    Elevated,
    High,
    Critical,
}

impl UsageLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            UsageLevel::Critical
        } else if percentage >= 75.0 {
            UsageLevel::High
        } else if percentage >= 50.0 {
            UsageLevel::Elevated
        } else {
            UsageLevel::Normal
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            UsageLevel::Normal => "usage-normal",
            UsageLevel::Elevated => "usage-elevated",
            UsageLevel::High => "usage-high",
            UsageLevel::Critical => "usage-critical",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            UsageLevel::Normal => "#a6e3a1",   // green
            UsageLevel::Elevated => "#f9e2af", // yellow
            UsageLevel::High => "#fab387",     // peach
            UsageLevel::Critical => "#f38ba8", // red
        }
    }
}

/// Width of the usage bar in percent, clamped to 0..=100.
pub fn bar_width(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

pub fn format_gb(gb: f64) -> String {
    format!("{:.2} GB", gb)
}

pub fn files_badge(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}

pub fn delete_prompt(filename: &str) -> String {
    format!("Are you sure you want to delete {}?", filename)
}

/// Filter by name. `#ext` matches by extension instead.
pub fn filter_files(files: &[FileEntry], query: &str) -> Vec<FileEntry> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return files.to_vec();
    }

    if let Some(extension) = query.strip_prefix('#') {
        return files
            .iter()
            .filter(|file| file_extension(&file.name).as_deref() == Some(extension))
            .cloned()
            .collect();
    }

    files
        .iter()
        .filter(|file| file.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

fn file_extension(name: &str) -> Option<String> {
    name.rfind('.')
        .filter(|i| *i > 0)
        .map(|i| name[i + 1..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names.iter().map(|name| FileEntry::new(*name)).collect()
    }

    #[test]
    fn usage_thresholds() {
        assert_eq!(UsageLevel::from_percentage(92.3), UsageLevel::Critical);
        assert_eq!(UsageLevel::from_percentage(90.0), UsageLevel::Critical);
        assert_eq!(UsageLevel::from_percentage(89.9), UsageLevel::High);
        assert_eq!(UsageLevel::from_percentage(75.0), UsageLevel::High);
        assert_eq!(UsageLevel::from_percentage(50.0), UsageLevel::Elevated);
        assert_eq!(UsageLevel::from_percentage(49.99), UsageLevel::Normal);
        assert_eq!(UsageLevel::from_percentage(0.0), UsageLevel::Normal);
        assert_eq!(UsageLevel::Critical.css_class(), "usage-critical");
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(105.0), 100.0);
        assert_eq!(bar_width(92.3), 92.3);
        assert_eq!(bar_width(-3.0), 0.0);
        assert_eq!(bar_width(f64::NAN), 0.0);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_percentage(92.34), "92.3%");
        assert_eq!(format_gb(12.0), "12.00 GB");
        assert_eq!(format_gb(0.125), "0.13 GB");
    }

    #[test]
    fn badge_counts_files() {
        assert_eq!(files_badge(2), "2 files");
        assert_eq!(files_badge(1), "1 file");
        assert_eq!(files_badge(0), "0 files");
    }

    #[test]
    fn prompt_names_the_file() {
        assert_eq!(
            delete_prompt("a.txt"),
            "Are you sure you want to delete a.txt?"
        );
    }

    #[test]
    fn blank_query_keeps_everything_in_order() {
        let files = entries(&["b.txt", "a.txt"]);
        assert_eq!(filter_files(&files, "  "), files);
    }

    #[test]
    fn name_query_is_case_insensitive() {
        let files = entries(&["Report.PDF", "notes.txt", "old-report.doc"]);
        assert_eq!(
            filter_files(&files, "REPORT"),
            entries(&["Report.PDF", "old-report.doc"])
        );
    }

    #[test]
    fn hash_query_matches_extension() {
        let files = entries(&["a.txt", "b.TXT", "c.txt.gz", ".txt", "txt"]);
        assert_eq!(filter_files(&files, "#txt"), entries(&["a.txt", "b.TXT"]));
    }
}
