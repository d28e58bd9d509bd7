use keyforge_core::Session;
use std::sync::Arc;

pub struct AppState {
    pub session: Arc<Session>,
}
