use std::sync::Arc;

use sqlx::PgPool;

use crate::chat::ChatEngine;
use crate::config::Config;
use crate::profile::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// The orchestrator. Also owns the in-memory chat session store.
    pub engine: Arc<ChatEngine>,
    pub profile: Arc<Profile>,
    pub config: Config,
}
