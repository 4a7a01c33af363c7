pub mod config;
pub mod error;
pub mod handlers;
pub mod item;
pub mod store;
pub mod types;
pub mod users;

use std::sync::Arc;

use config::Config;
use store::UserStore;

/// Shared application state, built once per Lambda container.
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub table_name: String,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, config: &Config) -> Arc<Self> {
        Arc::new(Self {
            store,
            table_name: config.table_name.clone(),
        })
    }
}
