// src/web/action_handlers.rs
//
// Actions de formulário: cada uma executa uma operação e responde sempre
// `{success, message}`. Falhas nunca escapam como erro HTTP.
use crate::{
    error::{AppError, AppResult},
    models::{filme::NovoFilme, voto::TipoVoto},
    services::{filme_service, voto_service},
    state::AppState,
    web::mw_auth::exigir_sessao,
};
use axum::{
    extract::{Form, State}, // Form: campos chegam url-encoded
    Json,
};
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies; // Para validar a sessão em cada action

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn ok_sem_mensagem() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn falha(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// Converte o erro numa resposta de falha, com a mensagem pública adequada.
    pub fn de_erro(erro: &AppError, fallback: &str) -> Self {
        match erro {
            AppError::Validation(_) | AppError::Unauthorized | AppError::InvalidCredentials => {
                tracing::warn!("Action rejeitada: {}", erro);
            }
            _ => tracing::error!("❌ Action falhou: {:?}", erro),
        }
        Self::falha(erro.mensagem_publica(fallback))
    }
}

/// Não há cache do lado do servidor: as vistas de leitura respondem com no-cache,
/// por isso "invalidar" é só registar que ficaram desatualizadas.
pub fn invalidar_vistas(caminhos: &[&str]) {
    tracing::debug!("♻️ Vistas invalidadas: {:?}", caminhos);
}

fn campo_obrigatorio(valor: &str) -> Option<String> {
    let valor = valor.trim();
    (!valor.is_empty()).then(|| valor.to_string())
}

// --- Votar ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VotoForm {
    #[serde(default)]
    filme_id: String,
    #[serde(default)]
    tipo_voto: String,
}

// POST /actions/votar
pub async fn handle_votar(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<VotoForm>,
) -> Json<ActionResult> {
    tracing::info!("🗳️ Processando voto: filme={} tipo={}", form.filme_id, form.tipo_voto);

    match votar(&state, &cookies, &form).await {
        Ok(()) => {
            invalidar_vistas(&["/", "/api/filmes", "/api/estatisticas"]);
            Json(ActionResult::ok("Voto registrado com sucesso!"))
        }
        // Erro de base de dados vira a mensagem genérica
        Err(e) => Json(ActionResult::de_erro(&e, "Falha ao registrar voto")),
    }
}

async fn votar(state: &AppState, cookies: &Cookies, form: &VotoForm) -> AppResult<()> {
    // Só usuários autenticados chegam à persistência
    let session = exigir_sessao(cookies, &state.session_codec)?;

    // filmeId tem de ser um inteiro; se o filme não existir, a FK falha mais à frente
    let filme_id = form
        .filme_id
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation("Filme inválido".to_string()))?;
    // Texto -> i64 -> TipoVoto: só 1 e -1 passam
    let tipo_voto = form
        .tipo_voto
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|v| TipoVoto::try_from(v).ok())
        .ok_or_else(|| AppError::Validation("Tipo de voto inválido".to_string()))?;

    voto_service::registrar_voto(&state.db_pool, filme_id, session.user.id, tipo_voto).await
}

// --- Cadastrar filme ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CadastroFilmeForm {
    #[serde(default)]
    titulo: String,
    #[serde(default)]
    descricao: String,
    #[serde(default)]
    imagem_url: String,
    #[serde(default)]
    banner_top_url: String,
    #[serde(default)]
    genero_id: String,
}

// POST /actions/filmes
pub async fn handle_cadastrar_filme(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<CadastroFilmeForm>,
) -> Json<ActionResult> {
    tracing::info!("POST /actions/filmes: cadastro de '{}'", form.titulo);

    match cadastrar_filme(&state, &cookies, &form).await {
        Ok(()) => {
            invalidar_vistas(&["/", "/api/filmes", "/api/estatisticas"]);
            Json(ActionResult::ok("Filme cadastrado com sucesso!"))
        }
        Err(e) => Json(ActionResult::de_erro(&e, "Falha ao criar filme")),
    }
}

async fn cadastrar_filme(state: &AppState, cookies: &Cookies, form: &CadastroFilmeForm) -> AppResult<()> {
    exigir_sessao(cookies, &state.session_codec)?;

    let dados_em_falta = || AppError::Validation("Dados obrigatórios não fornecidos".to_string());
    let titulo = campo_obrigatorio(&form.titulo).ok_or_else(dados_em_falta)?;
    let imagem_url = campo_obrigatorio(&form.imagem_url).ok_or_else(dados_em_falta)?;
    let genero_id = form
        .genero_id
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(dados_em_falta)?;

    let novo = NovoFilme {
        titulo,
        descricao: campo_obrigatorio(&form.descricao),
        imagem_url,
        banner_top_url: campo_obrigatorio(&form.banner_top_url),
        genero_id,
    };
    filme_service::criar_filme(&state.db_pool, &novo).await?;
    Ok(())
}
