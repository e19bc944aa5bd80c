use axum::extract::FromRef;

use crate::catalog_store::SinglesStore;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use super::ServerConfig;

pub type GuardedSinglesStore = Arc<Mutex<Box<dyn SinglesStore>>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub singles_store: GuardedSinglesStore,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, singles_store: Box<dyn SinglesStore>) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            singles_store: Arc::new(Mutex::new(singles_store)),
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedSinglesStore {
    fn from_ref(input: &ServerState) -> Self {
        input.singles_store.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
