// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{NovoUsuario, UsuarioLogado},
    services::{auth_service, user_service},
    state::AppState,
    web::action_handlers::{invalidar_vistas, ActionResult},
};
use axum::{
    extract::{Form, State},
    response::Redirect,
    Json,
};
use serde::Deserialize;
use tower_cookies::Cookies;

const SENHA_MIN_LEN: usize = 6;

#[derive(Deserialize, Debug)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    senha: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegistroForm {
    #[serde(default)]
    nome: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    senha: String,
    #[serde(default)]
    confirmar_senha: String,
}

// POST /actions/login
pub async fn handle_login(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Json<ActionResult> {
    tracing::info!("Tentativa de login para: {}", form.email);

    match autenticar(&state, &cookies, &form).await {
        Ok(()) => Json(ActionResult::ok("Login realizado com sucesso!")),
        Err(e) => Json(ActionResult::de_erro(&e, "Erro ao fazer login")),
    }
}

async fn autenticar(state: &AppState, cookies: &Cookies, form: &LoginForm) -> AppResult<()> {
    let email = form.email.trim();
    if email.is_empty() || form.senha.is_empty() {
        return Err(AppError::Validation("Email e senha são obrigatórios".to_string()));
    }

    // Email desconhecido e senha errada dão exatamente o mesmo erro
    let usuario = user_service::buscar_usuario_por_email(&state.db_pool, email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !auth_service::verify_password(&form.senha, &usuario.senha_hash).await {
        tracing::warn!("Senha incorreta para: {}", email);
        return Err(AppError::InvalidCredentials);
    }

    auth_service::login(
        cookies,
        &state.session_codec,
        state.secure_cookies(),
        UsuarioLogado::from(&usuario),
    )
}

// POST /actions/registro
pub async fn handle_registro(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<RegistroForm>,
) -> Json<ActionResult> {
    tracing::info!("POST /actions/registro: novo registo para {}", form.email);

    match registrar(&state, &cookies, &form).await {
        Ok(()) => Json(ActionResult::ok("Usuário registrado com sucesso!")),
        Err(e) => Json(ActionResult::de_erro(&e, "Falha ao criar usuário")),
    }
}

/// Valida o formulário de registo, na ordem: campos obrigatórios,
/// confirmação da senha, tamanho mínimo.
fn validar_registro(form: &RegistroForm) -> AppResult<NovoUsuario> {
    let nome = form.nome.trim();
    let email = form.email.trim();
    if nome.is_empty() || email.is_empty() || form.senha.is_empty() || form.confirmar_senha.is_empty() {
        return Err(AppError::Validation("Todos os campos são obrigatórios".to_string()));
    }
    if form.senha != form.confirmar_senha {
        return Err(AppError::Validation("As senhas não coincidem".to_string()));
    }
    if form.senha.chars().count() < SENHA_MIN_LEN {
        return Err(AppError::Validation(format!(
            "A senha deve ter pelo menos {} caracteres",
            SENHA_MIN_LEN
        )));
    }
    Ok(NovoUsuario {
        nome: nome.to_string(),
        email: email.to_string(),
        senha: form.senha.clone(),
    })
}

async fn registrar(state: &AppState, cookies: &Cookies, form: &RegistroForm) -> AppResult<()> {
    let novo = validar_registro(form)?;

    if user_service::email_ja_existe(&state.db_pool, &novo.email).await? {
        return Err(AppError::Validation("Este email já está cadastrado".to_string()));
    }

    let usuario = user_service::criar_usuario(&state.db_pool, &novo).await?;

    // Login automático após o registo
    auth_service::login(
        cookies,
        &state.session_codec,
        state.secure_cookies(),
        UsuarioLogado::from(&usuario),
    )
}

// POST /actions/logout: limpa a sessão e navega para a página inicial
pub async fn handle_logout(State(state): State<AppState>, cookies: Cookies) -> Redirect {
    auth_service::logout(&cookies, state.secure_cookies());
    Redirect::to("/")
}

// POST /actions/logout-client: limpa a sessão; a navegação fica a cargo do cliente
pub async fn handle_logout_client(State(state): State<AppState>, cookies: Cookies) -> Json<ActionResult> {
    auth_service::logout(&cookies, state.secure_cookies());
    invalidar_vistas(&["/"]);
    Json(ActionResult::ok_sem_mensagem())
}
