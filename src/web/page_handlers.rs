// src/web/page_handlers.rs
use crate::{
    error::{AppError, PaginaErro}, // Erros das páginas saem em HTML
    services::{auth_service, filme_service, genero_service},
    state::AppState,
    templates::{CatalogoPage, GeneroFiltro},
};
use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tower_cookies::Cookies;

#[derive(Deserialize, Debug)]
pub struct CatalogoQuery {
    genero: Option<String>,
}

// GET /: catálogo com filtro por género
pub async fn pagina_catalogo(
    State(state): State<AppState>,
    cookies: Cookies,
    Query(params): Query<CatalogoQuery>,
) -> Result<Html<String>, PaginaErro> {
    let genero = params.genero.as_deref().map(str::trim).filter(|g| !g.is_empty());
    tracing::debug!("GET /: Carregando catálogo (género: {:?})", genero);

    // Sessão só serve para mostrar o nome; sem login a página abre na mesma
    let usuario = auth_service::get_session(&cookies, &state.session_codec)
        .filter(|s| s.is_logged_in)
        .map(|s| s.user);
    let filmes = filme_service::listar_filmes_com_votos(&state.db_pool, genero).await?;
    let generos = genero_service::listar_generos(&state.db_pool)
        .await?
        .into_iter()
        .map(|g| GeneroFiltro {
            id: g.id,
            ativo: genero == Some(g.nome.as_str()),
            nome: g.nome,
        })
        .collect();

    let template = CatalogoPage {
        usuario,
        filmes,
        generos,
        sem_filtro: genero.is_none(),
    };

    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Falha ao renderizar template CatalogoPage: {}", e);
            Err(AppError::InternalServerError.into())
        }
    }
}
