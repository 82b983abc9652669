// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Ambiente de execução. Em produção o cookie de sessão leva a flag `Secure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn from_str_lossy(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            AppEnv::Production
        } else {
            AppEnv::Development
        }
    }
}

/// Configuração lida uma vez no arranque (ficheiro .env + variáveis de ambiente).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub app_env: AppEnv,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok(); // Carrega .env se existir

        let database_url = required_var("DATABASE_URL")?;
        let jwt_secret = required_var("JWT_SECRET")?;
        if jwt_secret.len() < 32 {
            tracing::warn!("⚠️ JWT_SECRET é curta, considere usar uma chave mais longa e aleatória!");
        }

        let app_env = env::var("APP_ENV")
            .map(|v| AppEnv::from_str_lossy(&v))
            .unwrap_or(AppEnv::Development);

        let bind_raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| AppError::ConfigError(format!("BIND_ADDR inválido '{}': {}", bind_raw, e)))?;

        Ok(Self {
            database_url,
            jwt_secret,
            app_env,
            bind_addr,
        })
    }

    pub fn secure_cookies(&self) -> bool {
        self.app_env == AppEnv::Production
    }
}

fn required_var(name: &str) -> AppResult<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::ConfigError(format!(
            "variável de ambiente {} não definida",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_env_reconhece_producao() {
        assert_eq!(AppEnv::from_str_lossy("production"), AppEnv::Production);
        assert_eq!(AppEnv::from_str_lossy(" PRODUCTION "), AppEnv::Production);
        assert_eq!(AppEnv::from_str_lossy("development"), AppEnv::Development);
        assert_eq!(AppEnv::from_str_lossy(""), AppEnv::Development);
    }

    #[test]
    fn secure_cookies_so_em_producao() {
        let mut config = Config {
            database_url: "sqlite::memory:".into(),
            jwt_secret: "x".repeat(32),
            app_env: AppEnv::Development,
            bind_addr: DEFAULT_BIND_ADDR.parse().unwrap(),
        };
        assert!(!config.secure_cookies());
        config.app_env = AppEnv::Production;
        assert!(config.secure_cookies());
    }
}
