use ganttcal_core::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state.
///
/// The session sits behind a mutex: edits are serialized, and a load
/// builds its full task list before taking the lock, so overlapping loads
/// resolve last-writer-wins with no partially replaced list ever visible.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub http: reqwest::Client,
    /// Host string stamped into exported UIDs (the serving address).
    pub origin_host: String,
}

impl AppState {
    pub fn new(origin_host: String) -> Self {
        AppState {
            session: Arc::new(Mutex::new(Session::new())),
            http: reqwest::Client::new(),
            origin_host,
        }
    }
}
