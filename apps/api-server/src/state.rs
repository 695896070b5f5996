//! Application state - shared across all handlers.

use std::sync::Arc;

use chirp_core::domain::{Post, UserRecord};
use chirp_core::service::{PostService, UserService};
use chirp_infra::JsonFileStore;

use crate::config::AppConfig;

/// Shared application state: one service per collection.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Build the services over the configured collection files.
    pub fn new(config: &AppConfig) -> Self {
        let user_store = Arc::new(JsonFileStore::<UserRecord>::new(config.users_file.clone()));
        let post_store = Arc::new(JsonFileStore::<Post>::new(config.posts_file.clone()));

        Self {
            users: Arc::new(UserService::new(user_store)),
            posts: Arc::new(PostService::new(post_store)),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over in-memory stores, for handler tests.
    pub fn in_memory() -> Self {
        use chirp_infra::MemoryStore;

        Self {
            users: Arc::new(UserService::new(Arc::new(MemoryStore::<UserRecord>::new()))),
            posts: Arc::new(PostService::new(Arc::new(MemoryStore::<Post>::new()))),
        }
    }
}
