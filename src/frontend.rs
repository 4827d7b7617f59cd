use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_file::{Blob, File, ObjectUrl};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::{provide_meta_context, Style, Title};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlAnchorElement, SubmitEvent};

use crate::api::{ApiClient, FetchTransport, Upload};
use crate::auth::AuthStore;
use crate::config::ClientConfig;
use crate::error::{ApiError, Operation};
use crate::logging;
use crate::query::{Mutation, QueryClient, QueryKey, QueryState, QueryStatus};
use crate::storage::LocalStore;
use crate::view::{
    bar_width, delete_prompt, files_badge, filter_files, format_gb, format_percentage,
    UsageLevel,
};
use crate::{DiskUsage, FileEntry};

/// API client as wired up in the browser.
pub type BrowserClient = ApiClient<FetchTransport, LocalStore>;

/// How long the upload confirmation stays on screen.
const BANNER_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy)]
struct AuthContext(RwSignal<AuthStore<LocalStore>>);

#[derive(Clone)]
struct ApiContext(Rc<BrowserClient>);

#[derive(Clone, Copy)]
struct PollIntervals {
    files_ms: u32,
    disk_usage_ms: u32,
}

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let auth = create_rw_signal(AuthStore::new(LocalStore, config.secret.clone()));
    provide_context(AuthContext(auth));
    provide_context(ApiContext(Rc::new(ApiClient::new(
        &config.api_base_url,
        FetchTransport,
        LocalStore,
    ))));
    provide_context(create_rw_signal(QueryClient::new()));
    provide_context(PollIntervals {
        files_ms: config.files_refresh_ms,
        disk_usage_ms: config.disk_usage_refresh_ms,
    });

    let is_authenticated = create_memo(move |_| auth.with(|store| store.is_authenticated()));

    view! {
        <Title text="filegate" />
        <Style>{MAIN_STYLES}</Style>
        <div class="app">
            <Show
                when=move || is_authenticated.get()
                fallback=|| view! { <LoginForm /> }
            >
                <Dashboard />
            </Show>
        </div>
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let AuthContext(auth) = expect_context::<AuthContext>();
    let (show_secret, set_show_secret) = create_signal(false);
    let error = create_memo(move |_| auth.with(|store| store.error().to_string()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        auth.update(|store| {
            if let Err(e) = store.submit() {
                log::debug!("login rejected: {}", e);
            }
        });
    };

    view! {
        <div class="login-grid">
            <div class="login-header border-container">
                <h1 style="color: #cdd6f4; margin: 0 0 10px 0; font-size: 2.5rem; font-weight: 500;">
                    "filegate"
                </h1>
                <p style="color: #bac2de; font-size: 1.1rem; margin: 0;">
                    "enter your secret key to access the files"
                </p>
            </div>

            <div class="login-form-section border-container">
                <Show when=move || !error.get().is_empty()>
                    <div class="login-error border-container">
                        {move || error.get()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-field">
                        <label class="field-label" for="secret-key">"secret key"</label>
                        <div class="secret-row">
                            <input
                                id="secret-key"
                                type=move || if show_secret.get() { "text" } else { "password" }
                                class="login-input secret-input border-container"
                                prop:value=move || auth.with(|store| store.input().to_string())
                                on:input=move |e| {
                                    let value = event_target_value(&e);
                                    auth.update(|store| store.set_input(value));
                                }
                                placeholder="enter secret key"
                                required
                            />
                            <button
                                type="button"
                                class="toggle-btn border-container"
                                on:click=move |_| set_show_secret.update(|shown| *shown = !*shown)
                            >
                                {move || if show_secret.get() { "hide" } else { "show" }}
                            </button>
                        </div>
                    </div>

                    <div class="login-actions">
                        <button type="submit" class="login-btn border-container">
                            "authenticate"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="main-grid">
            <div class="header-section border-container">
                <AuthPanel />
            </div>

            <div class="storage-section border-container">
                <DiskUsagePanel />
            </div>

            <div class="files-section border-container">
                <FileManager />
            </div>
        </div>
    }
}

#[component]
pub fn AuthPanel() -> impl IntoView {
    let AuthContext(auth) = expect_context::<AuthContext>();

    view! {
        <div style="display: flex; justify-content: space-between; align-items: center;">
            <div style="text-align: left;">
                <h1 style="color: #a6e3a1; margin: 0; font-size: 2.5rem; font-weight: 500;">
                    "authenticated"
                </h1>
                <p style="color: #bac2de; font-size: 1.1rem; margin: 10px 0 0 0;">
                    "welcome to the secure area "
                    <span class="access-badge">"access granted"</span>
                </p>
            </div>
            <button
                type="button"
                class="logout-btn border-container"
                on:click=move |_| auth.update(|store| store.logout())
            >
                "logout"
            </button>
        </div>
    }
}

#[component]
pub fn DiskUsagePanel() -> impl IntoView {
    let ApiContext(api) = expect_context::<ApiContext>();
    let intervals = expect_context::<PollIntervals>();

    let usage = use_query(QueryKey::DiskUsage, intervals.disk_usage_ms, move || {
        let api = Rc::clone(&api);
        async move { api.disk_usage().await }
    });

    view! {
        <div class="disk-usage">
            {move || usage.with(|state| match state.status() {
                QueryStatus::Loading => view! {
                    <div class="panel-note">"loading disk usage..."</div>
                }.into_view(),
                QueryStatus::Failed(message) => view! {
                    <div class="alert alert-error border-container">
                        {format!("Failed to load disk usage: {}", message)}
                    </div>
                }.into_view(),
                QueryStatus::Ready(disk) => disk_usage_view(disk),
            })}
        </div>
    }
}

fn disk_usage_view(disk: &DiskUsage) -> View {
    let level = UsageLevel::from_percentage(disk.used_percentage);

    view! {
        <div class="usage-header">
            <span class="stat-label">"server storage"</span>
            <span class=format!("usage-badge {}", level.css_class())>
                {format_percentage(disk.used_percentage)}
            </span>
        </div>

        <div class="progress-bar">
            <div
                class=format!("progress-fill {}", level.css_class())
                style=format!("width: {:.1}%", bar_width(disk.used_percentage))
            ></div>
        </div>

        <div class="storage-stats-grid">
            <div class="stat-box border-container">
                <div class="stat-value">{format_gb(disk.used_gb)}</div>
                <div class="stat-label">"used"</div>
            </div>
            <div class="stat-box border-container">
                <div class="stat-value">{format_gb(disk.free_gb)}</div>
                <div class="stat-label">"free"</div>
            </div>
            <div class="stat-box border-container">
                <div class="stat-value">{format_gb(disk.total_gb)}</div>
                <div class="stat-label">"total"</div>
            </div>
        </div>
    }
    .into_view()
}

/// Coarse state of the file list. Only changes when the panel has to swap
/// between loading, error and list views.
#[derive(Debug, Clone, PartialEq)]
enum ListPhase {
    Loading,
    Failed(String),
    Ready,
}

#[component]
pub fn FileManager() -> impl IntoView {
    let ApiContext(api) = expect_context::<ApiContext>();
    let queries = expect_context::<RwSignal<QueryClient>>();
    let intervals = expect_context::<PollIntervals>();

    let files = {
        let api = Rc::clone(&api);
        use_query(QueryKey::Files, intervals.files_ms, move || {
            let api = Rc::clone(&api);
            async move { api.list_files().await }
        })
    };
    let api = store_value(api);

    let upload_success = create_rw_signal(None::<String>);
    let (upload_error, set_upload_error) = create_signal(None::<String>);
    let (download_error, set_download_error) = create_signal(None::<String>);
    let (is_uploading, set_is_uploading) = create_signal(false);
    let (is_deleting, set_is_deleting) = create_signal(false);
    let (search_term, set_search_term) = create_signal(String::new());
    let file_input_ref = create_node_ref::<leptos::html::Input>();

    let phase = create_memo(move |_| {
        files.with(|state| match state.status() {
            QueryStatus::Loading => ListPhase::Loading,
            QueryStatus::Failed(message) => ListPhase::Failed(message.to_string()),
            QueryStatus::Ready(_) => ListPhase::Ready,
        })
    });
    let total = create_memo(move |_| files.with(|state| state.data().map_or(0, Vec::len)));
    let visible_files = create_memo(move |_| {
        let search = search_term.get();
        files.with(|state| {
            state
                .data()
                .map(|list| filter_files(list, &search))
                .unwrap_or_default()
        })
    });

    let on_file_change = move |_ev: Event| {
        let Some(input) = file_input_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            log::debug!("no file selected");
            return;
        };
        let file = File::from(file);

        set_is_uploading.set(true);
        spawn_local(async move {
            let result = match gloo_file::futures::read_as_bytes(&file).await {
                Ok(bytes) => {
                    let upload = Upload {
                        filename: file.name(),
                        bytes,
                    };
                    api.get_value().upload_file(upload).await
                }
                Err(e) => Err(ApiError::Request {
                    operation: Operation::UploadFile,
                    message: e.to_string(),
                }),
            };

            let succeeded = result.is_ok();
            match result {
                Ok(message) => {
                    log::info!("uploaded {}", file.name());
                    set_upload_error.set(None);
                    upload_success.set(Some(message.clone()));
                    if let Some(input) = file_input_ref.get_untracked() {
                        input.set_value("");
                    }
                    dismiss_later(upload_success, message);
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    upload_success.set(None);
                    set_upload_error.set(Some(e.to_string()));
                }
            }
            queries.update(|q| {
                q.settle(Mutation::Upload, succeeded);
            });
            set_is_uploading.set(false);
        });
    };

    let on_choose_file = move |_| {
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };

    let on_delete = move |filename: String| {
        let confirmed = window()
            .confirm_with_message(&delete_prompt(&filename))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_is_deleting.set(true);
        spawn_local(async move {
            let result = api.get_value().delete_file(&filename).await;
            match &result {
                Ok(_) => log::info!("deleted {}", filename),
                // Not shown to the user.
                Err(e) => log::error!("Delete failed: {}", e),
            }
            queries.update(|q| {
                q.settle(Mutation::Delete, result.is_ok());
            });
            set_is_deleting.set(false);
        });
    };

    let on_download = move |filename: String| {
        spawn_local(async move {
            match api.get_value().download_file(&filename).await {
                Ok(bytes) => match save_bytes(&filename, &bytes) {
                    Ok(()) => set_download_error.set(None),
                    Err(e) => {
                        log::error!("Download failed: {:?}", e);
                        set_download_error.set(Some(format!("Failed to save {}", filename)));
                    }
                },
                Err(e) => {
                    log::error!("Download failed: {}", e);
                    set_download_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="file-manager">
            <div class="upload-row">
                <input
                    type="file"
                    node_ref=file_input_ref
                    on:change=on_file_change
                    disabled=move || is_uploading.get()
                    style="display: none;"
                />
                <button
                    type="button"
                    class="upload-files-btn border-container"
                    disabled=move || is_uploading.get()
                    on:click=on_choose_file
                >
                    {move || if is_uploading.get() { "uploading..." } else { "upload file" }}
                </button>
                <input
                    type="text"
                    class="search-input border-container"
                    placeholder="search files... (#ext filters by type)"
                    prop:value=search_term
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || upload_error.get().is_some()>
                <div class="alert alert-error border-container">
                    {move || upload_error.get().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || upload_success.get().is_some()>
                <div class="alert alert-success border-container">
                    {move || upload_success.get().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || download_error.get().is_some()>
                <div class="alert alert-error border-container">
                    {move || download_error.get().unwrap_or_default()}
                </div>
            </Show>

            {move || match phase.get() {
                ListPhase::Loading => view! {
                    <div class="panel-note">"loading files..."</div>
                }.into_view(),
                ListPhase::Failed(message) => view! {
                    <div class="alert alert-error border-container">
                        {format!("Failed to load files: {}", message)}
                    </div>
                }.into_view(),
                ListPhase::Ready => view! {
                    <div class="files-header">
                        <span class="files-title">"files"</span>
                        <span class="count-badge">{move || files_badge(total.get())}</span>
                    </div>
                    <Show
                        when=move || total.get() > 0
                        fallback=|| view! {
                            <div class="empty-state">
                                <div style="font-size: 32px; margin-bottom: 10px;">"[ ]"</div>
                                <div>"no files uploaded yet"</div>
                                <div style="color: #6c7086; font-size: 14px; margin-top: 5px;">
                                    "upload your first file to get started"
                                </div>
                            </div>
                        }
                    >
                        <div class="files-list">
                            <For
                                each=move || visible_files.get()
                                key=|file| file.name.clone()
                                let:file
                            >
                                <FileRow
                                    file=file
                                    on_download=on_download
                                    on_delete=on_delete
                                    is_deleting=is_deleting
                                />
                            </For>
                        </div>
                    </Show>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn FileRow<D, X>(
    file: FileEntry,
    on_download: D,
    on_delete: X,
    is_deleting: ReadSignal<bool>,
) -> impl IntoView
where
    D: Fn(String) + Copy + 'static,
    X: Fn(String) + Copy + 'static,
{
    let name = store_value(file.name);

    view! {
        <div class="file-item">
            <span class="file-name">{name.get_value()}</span>
            <div class="file-actions">
                <button
                    type="button"
                    class="action-btn border-container"
                    on:click=move |_| on_download(name.get_value())
                >
                    "download"
                </button>
                <button
                    type="button"
                    class="action-btn delete-btn border-container"
                    disabled=move || is_deleting.get()
                    on:click=move |_| on_delete(name.get_value())
                >
                    {move || if is_deleting.get() { "deleting..." } else { "delete" }}
                </button>
            </div>
        </div>
    }
}

/// Keep `key` fresh for as long as the calling view lives.
///
/// Fetches once on mount, again whenever the key is invalidated through the
/// shared [`QueryClient`], and on every tick of `interval_ms`. Cleanup stops
/// the ticker and drops responses that land afterwards.
fn use_query<T, F, Fut>(key: QueryKey, interval_ms: u32, fetch: F) -> RwSignal<QueryState<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = create_rw_signal(QueryState::<T>::default());
    let queries = expect_context::<RwSignal<QueryClient>>();
    let alive = Rc::new(Cell::new(true));

    let run = {
        let alive = Rc::clone(&alive);
        Rc::new(move || {
            if !alive.get() {
                return;
            }
            let alive = Rc::clone(&alive);
            let request = fetch();
            state.update(QueryState::begin);
            spawn_local(async move {
                let result = request.await;
                if alive.get() {
                    state.update(|s| s.resolve(result));
                } else {
                    log::debug!("dropping {:?} response for a closed view", key);
                }
            });
        })
    };

    let epoch = create_memo(move |_| queries.with(|q| q.epoch(key)));
    let on_epoch = Rc::clone(&run);
    create_effect(move |_| {
        epoch.track();
        on_epoch();
    });

    let on_tick = Rc::clone(&run);
    let ticker = Interval::new(interval_ms, move || on_tick());

    on_cleanup(move || {
        alive.set(false);
        ticker.cancel();
    });

    state
}

/// Clear the success banner unless it has been replaced in the meantime.
fn dismiss_later(banner: RwSignal<Option<String>>, message: String) {
    spawn_local(async move {
        TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
        banner.update(|current| {
            if current.as_deref() == Some(message.as_str()) {
                *current = None;
            }
        });
    });
}

/// Hand `bytes` to the browser as a download named `filename`.
fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let url = ObjectUrl::from(Blob::new(bytes));
    let document = document();
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    link.set_href(&url);
    link.set_download(filename);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

#[wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("filegate client for {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}

// CSS-in-Rust: Catppuccin Mocha palette on a bordered grid
const MAIN_STYLES: &str = r#"
@import url("https://fonts.googleapis.com/css2?family=DM+Mono:ital,wght@0,300;0,400;0,500&display=swap");

body {
    font-family: "DM Mono", monospace;
    letter-spacing: -0.05ch;
    background-color: #1e1e2e;
    color: #cdd6f4;
    margin: 0;
    padding: 20px;
}

.app {
    max-width: 1200px;
    margin: 0 auto;
}

.main-grid {
    display: grid;
    grid-template-columns: repeat(6, 1fr);
    grid-template-rows: auto auto auto;
    gap: 20px;
    margin: 20px 0;
}

.border-container {
    position: relative;
    padding: 20px;
    border: 2px solid #45475a;
    transition: border-color 0.2s ease-out;
    text-align: center;
    background-color: #1e1e2e;
}

.border-container::before {
    position: absolute;
    top: -12px;
    left: 20px;
    background-color: #1e1e2e;
    padding: 0 8px;
    font-size: 16px;
    color: #45475a;
    transition: color 0.2s ease-out;
}

.header-section {
    grid-column: 1 / span 6;
    grid-row: 1;
}
.header-section::before {
    content: "session";
}
.header-section:hover {
    border-color: #cba6f7;
}
.header-section:hover::before {
    color: #cba6f7;
}

.storage-section {
    grid-column: 1 / span 6;
    grid-row: 2;
}
.storage-section::before {
    content: "disk usage";
}
.storage-section:hover {
    border-color: #89b4fa;
}
.storage-section:hover::before {
    color: #89b4fa;
}

.files-section {
    grid-column: 1 / span 6;
    grid-row: 3;
}
.files-section::before {
    content: "file manager";
}
.files-section:hover {
    border-color: #f38ba8;
}
.files-section:hover::before {
    color: #f38ba8;
}

.access-badge {
    color: #a6e3a1;
    border: 1px solid #a6e3a1;
    padding: 2px 6px;
    font-size: 12px;
    text-transform: uppercase;
}

.usage-header, .files-header, .upload-row {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 15px;
}

.usage-badge, .count-badge {
    font-size: 12px;
    padding: 2px 6px;
    border: 1px solid #45475a;
    font-weight: 500;
}

.usage-badge.usage-normal { color: #a6e3a1; border-color: #a6e3a1; }
.usage-badge.usage-elevated { color: #f9e2af; border-color: #f9e2af; }
.usage-badge.usage-high { color: #fab387; border-color: #fab387; }
.usage-badge.usage-critical { color: #f38ba8; border-color: #f38ba8; }

.progress-bar {
    width: 100%;
    background-color: #313244;
    height: 8px;
    margin: 15px 0;
}

.progress-fill {
    height: 100%;
    transition: width 0.75s ease;
}

.progress-fill.usage-normal { background-color: #a6e3a1; }
.progress-fill.usage-elevated { background-color: #f9e2af; }
.progress-fill.usage-high { background-color: #fab387; }
.progress-fill.usage-critical { background-color: #f38ba8; }

.storage-stats-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 15px;
    margin: 15px 0 0 0;
}

.stat-box {
    text-align: center;
    padding: 15px;
}

.stat-box .stat-value {
    color: #cdd6f4;
    font-weight: 500;
    font-size: 18px;
    margin-bottom: 5px;
}

.stat-label {
    color: #bac2de;
    font-size: 12px;
    text-transform: lowercase;
}

.panel-note {
    color: #bac2de;
    padding: 20px;
}

.alert {
    margin: 15px 0;
    padding: 16px;
    font-size: 14px;
    text-align: left;
}

.alert-error {
    color: #f38ba8;
    border-color: #f38ba8;
}
.alert-error::before {
    content: "error";
    color: #f38ba8;
    font-size: 12px;
}

.alert-success {
    color: #a6e3a1;
    border-color: #a6e3a1;
}
.alert-success::before {
    content: "ok";
    color: #a6e3a1;
    font-size: 12px;
}

.upload-files-btn, .action-btn, .logout-btn, .toggle-btn {
    background-color: #1e1e2e;
    border: 2px solid #45475a;
    color: #cdd6f4;
    padding: 20px 16px 8px 16px;
    cursor: pointer;
    font-family: "DM Mono", monospace;
    font-size: 14px;
    transition: border-color 0.2s ease-out;
    margin: 4px;
}

.upload-files-btn.border-container::before,
.action-btn.border-container::before,
.toggle-btn.border-container::before {
    content: "btn";
    left: 10px;
    font-size: 12px;
}

.upload-files-btn:hover:not(:disabled), .action-btn:hover:not(:disabled) {
    border-color: #89b4fa;
}

.upload-files-btn:disabled, .action-btn:disabled {
    border-color: #313244;
    color: #6c7086;
    cursor: not-allowed;
}

.delete-btn.border-container::before {
    content: "del";
}
.delete-btn:hover:not(:disabled) {
    border-color: #f38ba8;
}

.logout-btn.border-container::before {
    content: "logout";
    left: 10px;
    font-size: 12px;
}
.logout-btn:hover {
    border-color: #f38ba8;
}

.search-input {
    flex: 1;
    color: #cdd6f4;
    padding: 20px 15px 10px 15px;
    font-family: "DM Mono", monospace;
    font-size: 16px;
    box-sizing: border-box;
}
.search-input:focus {
    outline: none;
    border-color: #fab387;
}
.search-input::placeholder {
    color: #6c7086;
}

.files-header {
    margin: 20px 0 10px 0;
}

.files-title {
    font-size: 1.2rem;
}

.files-list {
    display: grid;
    gap: 10px;
}

.file-item {
    display: flex;
    justify-content: space-between;
    align-items: center;
    border: 2px solid #45475a;
    padding: 10px 15px;
    transition: border-color 0.2s ease-out;
}
.file-item:hover {
    border-color: #f38ba8;
}

.file-name {
    word-break: break-word;
    text-align: left;
}

.empty-state {
    text-align: center;
    padding: 40px 20px;
    color: #bac2de;
}

.login-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 20px;
    padding: 40px 20px;
    max-width: 500px;
    margin: 0 auto;
    min-height: 100vh;
    align-content: center;
}

.login-header {
    padding: 30px;
}
.login-header::before {
    content: "system";
}
.login-header:hover {
    border-color: #cba6f7;
}

.login-form-section {
    padding: 30px;
}
.login-form-section::before {
    content: "authenticate";
}
.login-form-section:hover {
    border-color: #89b4fa;
}

.form-field {
    margin-bottom: 20px;
}

.field-label {
    display: block;
    color: #cdd6f4;
    font-size: 14px;
    font-weight: 500;
    margin-bottom: 8px;
    text-transform: lowercase;
}

.secret-row {
    display: flex;
    gap: 10px;
    align-items: stretch;
}

.login-input {
    flex: 1;
    color: #cdd6f4;
    padding: 20px 16px 12px 16px;
    font-family: "DM Mono", monospace;
    font-size: 16px;
    box-sizing: border-box;
}
.login-input:focus {
    outline: none;
    border-color: #89b4fa;
}
.login-input::placeholder {
    color: #6c7086;
    font-style: italic;
}

.login-actions {
    margin-top: 25px;
}

.login-btn {
    width: 100%;
    color: #cdd6f4;
    padding: 20px 20px 14px 20px;
    font-family: "DM Mono", monospace;
    font-size: 16px;
    font-weight: 500;
    cursor: pointer;
    text-transform: lowercase;
}
.login-btn.border-container::before {
    content: "auth";
    left: 15px;
    font-size: 12px;
}
.login-btn:hover {
    border-color: #89b4fa;
}

.login-error {
    color: #f38ba8;
    padding: 20px 16px 12px 16px;
    margin-bottom: 20px;
    font-size: 14px;
    font-weight: 500;
    border-color: #f38ba8;
}
.login-error.border-container::before {
    content: "error";
    left: 15px;
    font-size: 12px;
    color: #f38ba8;
}

@media (max-width: 768px) {
    .main-grid {
        grid-template-columns: 1fr;
    }

    .header-section, .storage-section, .files-section {
        grid-column: 1;
    }

    .storage-stats-grid {
        grid-template-columns: 1fr;
    }
}
"#;
