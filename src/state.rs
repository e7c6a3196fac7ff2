use crate::journal::Journal;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct AppState {
    pub journal: Arc<Mutex<Journal>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            journal: Arc::new(Mutex::new(Journal::new())),
        }
    }
}
