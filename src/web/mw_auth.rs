// src/web/mw_auth.rs
use crate::{
    error::{AppError, AppResult}, // Nosso tipo de erro
    models::session::SessionData,
    services::{auth_service, session_codec::SessionCodec},
};
use tower_cookies::Cookies; // Para ler o cookie de sessão

/// Sessão ativa ou `AppError::Unauthorized`. Usado pelas actions que exigem login.
pub fn exigir_sessao(cookies: &Cookies, codec: &SessionCodec) -> AppResult<SessionData> {
    match auth_service::get_session(cookies, codec) {
        Some(session) if session.is_logged_in => {
            // Utilizador está logado!
            tracing::debug!("Autenticação: usuário {} autenticado.", session.user.id);
            Ok(session)
        }
        _ => {
            // Sem cookie, token inválido/expirado ou isLoggedIn = false
            tracing::debug!("Autenticação: pedido sem sessão válida.");
            Err(AppError::Unauthorized)
        }
    }
}
