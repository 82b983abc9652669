// src/web/mod.rs
pub mod action_handlers;
pub mod api_handlers;
pub mod auth_handlers;
pub mod mw_auth;
pub mod page_handlers;
pub mod routes;
