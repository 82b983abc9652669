// src/models/mod.rs
pub mod filme;
pub mod genero;
pub mod session;
pub mod user;
pub mod voto;
