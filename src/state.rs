use std::sync::Arc;

use crate::{config::Config, store::CourseStore};

/// Shared application state handed to every route handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CourseStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn CourseStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
