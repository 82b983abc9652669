// src/web/routes.rs
use crate::{
    state::AppState,
    web::{action_handlers, api_handlers, auth_handlers, page_handlers},
};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder; // Para empilhar as camadas
use tower_cookies::CookieManagerLayer; // Gestão dos cookies (leitura + Set-Cookie)
use tower_http::trace::TraceLayer; // Logging dos pedidos HTTP

pub fn create_router(app_state: AppState) -> Router {
    // --- Endpoints JSON (só leitura) ---
    let api_routes = Router::new()
        .route("/filmes", get(api_handlers::listar_filmes))
        .route("/filmes/{id}/meu-voto", get(api_handlers::meu_voto))
        .route("/generos", get(api_handlers::listar_generos))
        .route("/session", get(api_handlers::sessao_atual))
        .route("/estatisticas", get(api_handlers::estatisticas));

    // --- Actions (formulários) ---
    // A verificação de sessão é feita em cada action, porque a resposta
    // a um pedido sem login continua a ser {success: false, message}
    let action_routes = Router::new()
        .route("/votar", post(action_handlers::handle_votar))
        .route("/filmes", post(action_handlers::handle_cadastrar_filme))
        .route("/registro", post(auth_handlers::handle_registro))
        .route("/login", post(auth_handlers::handle_login))
        .route("/logout", post(auth_handlers::handle_logout))
        .route("/logout-client", post(auth_handlers::handle_logout_client));

    Router::new()
        .route("/", get(page_handlers::pagina_catalogo)) // Página HTML
        .nest("/api", api_routes)
        .nest("/actions", action_routes)
        .with_state(app_state)
}

/// Router completo com as camadas de tracing e de cookies.
pub fn create_app(app_state: AppState) -> Router {
    create_router(app_state).layer(
        // ServiceBuilder aplica de cima para baixo: o trace envolve tudo,
        // incluindo o Set-Cookie escrito pelo CookieManagerLayer
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CookieManagerLayer::new()),
    )
}
