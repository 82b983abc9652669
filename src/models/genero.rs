// src/models/genero.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Dados de referência, só leitura na aplicação
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Genero {
    pub id: i64,
    pub nome: String,
}
