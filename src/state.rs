// src/state.rs
use crate::{config::Config, services::session_codec::SessionCodec};
use sqlx::SqlitePool;
use std::sync::Arc;

// Sem estado mutável partilhado entre pedidos: só o pool e configuração imutável
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: Arc<Config>,
    pub session_codec: SessionCodec,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: Config) -> Self {
        let session_codec = SessionCodec::new(config.jwt_secret.as_bytes());
        Self {
            db_pool,
            config: Arc::new(config),
            session_codec,
        }
    }

    pub fn secure_cookies(&self) -> bool {
        self.config.secure_cookies()
    }
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
