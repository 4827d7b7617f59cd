//! Cached server state and its invalidation.
//!
//! Each panel owns a [`QueryState`] fed by its own poll loop. Mutations
//! bump the epoch of the keys they affect in the shared [`QueryClient`];
//! a panel refetches whenever the epoch of its key changes, so the two
//! panels agree after an upload or delete without waiting for a tick.

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Files,
    DiskUsage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Upload,
    Delete,
}

impl Mutation {
    /// Keys that go stale when this mutation succeeds.
    pub fn invalidates(self) -> &'static [QueryKey] {
        match self {
            Mutation::Upload | Mutation::Delete => &[QueryKey::Files, QueryKey::DiskUsage],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryClient {
    files: u64,
    disk_usage: u64,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch(&self, key: QueryKey) -> u64 {
        match key {
            QueryKey::Files => self.files,
            QueryKey::DiskUsage => self.disk_usage,
        }
    }

    /// Force an immediate refetch of `key`.
    pub fn invalidate(&mut self, key: QueryKey) {
        let epoch = match key {
            QueryKey::Files => &mut self.files,
            QueryKey::DiskUsage => &mut self.disk_usage,
        };
        *epoch = epoch.wrapping_add(1);
        log::debug!("invalidated {:?}", key);
    }

    /// Record the outcome of a mutation. Only success invalidates; returns
    /// whether anything was invalidated.
    pub fn settle(&mut self, mutation: Mutation, succeeded: bool) -> bool {
        if !succeeded {
            return false;
        }
        for key in mutation.invalidates() {
            self.invalidate(*key);
        }
        true
    }
}

/// What a panel should render.
#[derive(Debug, PartialEq)]
pub enum QueryStatus<'a, T> {
    Loading,
    Failed(&'a str),
    Ready(&'a T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    data: Option<T>,
    error: Option<String>,
    in_flight: usize,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: 0,
        }
    }
}

impl<T> QueryState<T> {
    /// A fetch has been started.
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    /// A fetch finished. Whichever response arrives last wins.
    pub fn resolve(&mut self, result: Result<T, ApiError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> QueryStatus<'_, T> {
        match (&self.error, &self.data) {
            (Some(error), _) => QueryStatus::Failed(error),
            (None, Some(data)) => QueryStatus::Ready(data),
            (None, None) => QueryStatus::Loading,
        }
    }
}
