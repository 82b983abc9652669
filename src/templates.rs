// src/templates.rs
use crate::models::{filme::FilmeComVotos, user::UsuarioLogado};
use askama::Template;

/// Entrada do filtro de géneros na página do catálogo.
#[derive(Clone, Debug)]
pub struct GeneroFiltro {
    pub id: i64,
    pub nome: String,
    pub ativo: bool,
}

#[derive(Template)]
#[template(path = "catalogo.html")]
pub struct CatalogoPage {
    pub usuario: Option<UsuarioLogado>,
    pub filmes: Vec<FilmeComVotos>,
    pub generos: Vec<GeneroFiltro>,
    // Sem filtro => "Todos" fica ativo
    pub sem_filtro: bool,
}

/// Página de erro das rotas HTML.
#[derive(Template)]
#[template(path = "erro.html")]
pub struct ErroPage {
    pub status: u16,
    pub mensagem: String,
}
