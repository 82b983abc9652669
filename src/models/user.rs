// src/models/user.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa um usuário lido da tabela 'usuarios'
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha_hash: String,
    pub data_cadastro: NaiveDateTime,
}

/// Dados para criar um usuário. A senha chega em texto simples e só sai daqui como hash.
#[derive(Debug, Clone)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// Identidade guardada no token de sessão (sem o hash da senha).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioLogado {
    pub id: i64,
    pub nome: String,
    pub email: String,
}

impl From<&Usuario> for UsuarioLogado {
    fn from(usuario: &Usuario) -> Self {
        Self {
            id: usuario.id,
            nome: usuario.nome.clone(),
            email: usuario.email.clone(),
        }
    }
}
