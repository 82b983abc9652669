// src/models/session.rs
use super::user::UsuarioLogado;
use serde::{Deserialize, Serialize};

/// Conteúdo da sessão. Não existe do lado do servidor: vive apenas no cookie assinado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub user: UsuarioLogado,
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
}

impl SessionData {
    pub fn logged_in(user: UsuarioLogado) -> Self {
        Self {
            user,
            is_logged_in: true,
        }
    }
}
