// src/web/api_handlers.rs
//
// Endpoints JSON só de leitura consumidos pelo cliente.
use crate::{
    services::{auth_service, filme_service, genero_service, voto_service},
    state::AppState,
    web::mw_auth::exigir_sessao,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tower_cookies::Cookies;

pub const NO_CACHE_HEADERS: [(HeaderName, &str); 3] = [
    (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
];

fn erro_json(status: StatusCode, mensagem: &str) -> Response {
    (status, NO_CACHE_HEADERS, Json(json!({ "error": mensagem }))).into_response()
}

#[derive(Deserialize, Debug)]
pub struct FiltroFilmes {
    genero: Option<String>,
}

// GET /api/filmes[?genero=Drama]
pub async fn listar_filmes(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroFilmes>,
) -> Response {
    let genero = filtro.genero.as_deref().map(str::trim).filter(|g| !g.is_empty());
    match filme_service::listar_filmes_com_votos(&state.db_pool, genero).await {
        Ok(filmes) => (NO_CACHE_HEADERS, Json(filmes)).into_response(),
        Err(e) => {
            tracing::error!("Erro ao buscar filmes: {:?}", e);
            erro_json(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao buscar filmes")
        }
    }
}

// GET /api/generos
pub async fn listar_generos(State(state): State<AppState>) -> Response {
    match genero_service::listar_generos(&state.db_pool).await {
        Ok(generos) => Json(generos).into_response(),
        Err(e) => {
            tracing::error!("Erro ao buscar gêneros: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Erro ao buscar gêneros" })),
            )
                .into_response()
        }
    }
}

// GET /api/session
pub async fn sessao_atual(State(state): State<AppState>, cookies: Cookies) -> Response {
    let corpo = match auth_service::get_session(&cookies, &state.session_codec) {
        Some(session) if session.is_logged_in => json!({ "isLoggedIn": true, "user": session.user }),
        _ => json!({ "isLoggedIn": false }),
    };
    (NO_CACHE_HEADERS, Json(corpo)).into_response()
}

// GET /api/estatisticas
pub async fn estatisticas(State(state): State<AppState>) -> Response {
    match filme_service::estatisticas(&state.db_pool).await {
        Ok(stats) => (NO_CACHE_HEADERS, Json(stats)).into_response(),
        Err(e) => {
            tracing::error!("Erro ao buscar estatísticas: {:?}", e);
            erro_json(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao buscar estatísticas")
        }
    }
}

// GET /api/filmes/{id}/meu-voto
pub async fn meu_voto(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(filme_id): Path<i64>,
) -> Response {
    let session = match exigir_sessao(&cookies, &state.session_codec) {
        Ok(s) => s,
        Err(e) => return erro_json(StatusCode::UNAUTHORIZED, &e.to_string()),
    };

    match voto_service::buscar_voto_usuario(&state.db_pool, filme_id, session.user.id).await {
        Ok(voto) => (NO_CACHE_HEADERS, Json(json!({ "tipoVoto": voto }))).into_response(),
        Err(e) => {
            tracing::error!("Erro ao buscar voto do usuário: {:?}", e);
            erro_json(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao buscar voto")
        }
    }
}
