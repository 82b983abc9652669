// src/services/mod.rs
pub mod auth_service;
pub mod filme_service;
pub mod genero_service;
pub mod session_codec;
pub mod user_service;
pub mod voto_service;
