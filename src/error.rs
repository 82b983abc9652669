// src/error.rs
use crate::templates::ErroPage;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de configuração: {0}")]
    ConfigError(String),

    #[error("Erro ao processar senha")]
    PasswordHashingError,

    #[error("Erro ao gerar token de sessão: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    // Mensagem genérica: não revela se foi o email ou a senha
    #[error("Email ou senha incorretos")]
    InvalidCredentials,

    // Erros de formulário; o texto vai tal e qual para o utilizador
    #[error("{0}")]
    Validation(String),

    #[error("Usuário não autenticado")]
    Unauthorized,

    #[error("Erro interno inesperado")]
    InternalServerError,
}

impl AppError {
    /// Texto seguro para devolver ao cliente. Erros de persistência e internos
    /// nunca expõem o detalhe; usam a mensagem `fallback` da operação.
    pub fn mensagem_publica(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidCredentials | AppError::Unauthorized => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl AppError {
    // Status e mensagem genérica; o detalhe fica só no log
    fn status_e_mensagem(&self) -> (StatusCode, String) {
        match self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro ao aceder aos dados.".to_string())
            }
            AppError::ConfigError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro de configuração.".to_string())
            }
            AppError::PasswordHashingError | AppError::TokenError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro ao processar credenciais.".to_string())
            }
            // Mensagem genérica, igual para email e senha
            AppError::InvalidCredentials | AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalServerError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.".to_string())
            }
        }
    }
}

// Como converter AppError numa resposta HTTP (endpoints JSON)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let (status, user_message) = self.status_e_mensagem();
        (status, Json(json!({ "error": user_message }))).into_response()
    }
}

/// Erro das páginas HTML: mesmo status e mensagem, mas como página de erro.
#[derive(Debug)]
pub struct PaginaErro(pub AppError);

// Permite usar `?` com AppError nos handlers de páginas
impl From<AppError> for PaginaErro {
    fn from(err: AppError) -> Self {
        PaginaErro(err)
    }
}

impl IntoResponse for PaginaErro {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Erro processado (página): {:?}", self.0);

        let (status, user_message) = self.0.status_e_mensagem();
        let pagina = ErroPage {
            status: status.as_u16(),
            mensagem: user_message,
        };
        match pagina.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                // Sem template, fica só o texto
                tracing::error!("Falha ao renderizar template ErroPage: {}", e);
                (status, pagina.mensagem).into_response()
            }
        }
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensagem_publica_esconde_erros_de_base_de_dados() {
        let err = AppError::SqlxError(sqlx::Error::RowNotFound);
        assert_eq!(err.mensagem_publica("Falha ao registrar voto"), "Falha ao registrar voto");
    }

    #[test]
    fn mensagem_publica_mantem_validacao_e_autenticacao() {
        let err = AppError::Validation("As senhas não coincidem".into());
        assert_eq!(err.mensagem_publica("x"), "As senhas não coincidem");
        assert_eq!(AppError::InvalidCredentials.mensagem_publica("x"), "Email ou senha incorretos");
        assert_eq!(AppError::Unauthorized.mensagem_publica("x"), "Usuário não autenticado");
    }

    #[test]
    fn unauthorized_responde_401() {
        let resp = AppError::Unauthorized.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn erro_de_pagina_responde_html_sem_detalhe_interno() {
        let resp = PaginaErro(AppError::SqlxError(sqlx::Error::PoolClosed)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = resp.headers()[axum::http::header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"), "{}", content_type);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Erro 500"));
        assert!(html.contains("Erro ao aceder aos dados."));
        assert!(!html.contains("closed"), "detalhe do sqlx não pode aparecer: {}", html);
    }

    #[tokio::test]
    async fn mensagem_de_validacao_e_escapada_na_pagina() {
        let resp = PaginaErro(AppError::Validation("<b>x</b>".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!html.contains("<b>x</b>"), "{}", html);
        assert!(html.contains("Erro 400"));
    }
}
