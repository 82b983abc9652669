// src/services/auth_service.rs
//
// Único ponto de acesso ao cookie de sessão: login, logout e leitura.
// Também guarda o hash/verificação de senhas (bcrypt).
use crate::{
    error::{AppError, AppResult},
    models::{session::SessionData, user::UsuarioLogado},
    services::session_codec::{SessionCodec, SESSION_TTL_DAYS},
};
use time::{Duration, OffsetDateTime};
use tower_cookies::{cookie::SameSite, Cookie, Cookies};

pub const SESSION_COOKIE: &str = "session";

/// Custo do bcrypt usado para novas senhas.
pub const BCRYPT_COST: u32 = 10;

fn session_cookie(value: String, expires: OffsetDateTime, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .expires(expires)
        .build()
}

// Mesmos atributos do cookie emitido, senão o browser trata-o como outro cookie
fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), OffsetDateTime::UNIX_EPOCH, secure);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

/// Cria a sessão (isLoggedIn = true) e grava-a no cookie.
/// A validade de 7 dias conta a partir daqui; nada a prolonga.
pub fn login(cookies: &Cookies, codec: &SessionCodec, secure: bool, user: UsuarioLogado) -> AppResult<()> {
    let user_id = user.id;
    let token = codec.encrypt(&SessionData::logged_in(user))?;
    let mut cookie = session_cookie(
        token,
        OffsetDateTime::now_utc() + Duration::days(SESSION_TTL_DAYS),
        secure,
    );
    cookie.set_max_age(Duration::days(SESSION_TTL_DAYS));
    cookies.add(cookie);
    tracing::info!("✅ Sessão iniciada para usuário {}", user_id);
    Ok(())
}

/// Sobrescreve o cookie com um valor vazio já expirado (Max-Age=0).
/// Chamadas repetidas não fazem mal.
pub fn logout(cookies: &Cookies, secure: bool) {
    cookies.add(removal_cookie(secure));
    tracing::info!("🚪 Sessão terminada.");
}

/// Lê o cookie e devolve a sessão descodificada, ou None.
pub fn get_session(cookies: &Cookies, codec: &SessionCodec) -> Option<SessionData> {
    let token = cookies.get(SESSION_COOKIE)?;
    codec.decrypt(token.value())
}

/// Verifica se a senha fornecida corresponde ao hash guardado.
/// Qualquer falha interna conta como "não corresponde".
pub async fn verify_password(password: &str, stored_hash: &str) -> bool {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    let result = tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&password, &stored_hash)
    })
    .await;

    match result {
        Ok(Ok(valid)) => valid,
        Ok(Err(e)) => {
            tracing::warn!("Erro bcrypt ao verificar senha: {:?}", e);
            false
        }
        Err(e) => {
            tracing::error!("Erro na task spawn_blocking (verify_password): {:?}", e);
            false
        }
    }
}

/// Gera um hash bcrypt para uma senha.
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt...");
        bcrypt::hash(&password, BCRYPT_COST)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashingError
    })
}
