// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{NovoUsuario, Usuario},
    services::auth_service,
};
use sqlx::SqlitePool;

/// Busca um usuário pelo email.
pub async fn buscar_usuario_por_email(db_pool: &SqlitePool, email: &str) -> AppResult<Option<Usuario>> {
    tracing::debug!("👤 Buscando usuário por email: {}", email);
    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        SELECT id, nome, email, senha_hash, data_cadastro
        FROM usuarios
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(db_pool)
    .await?;

    tracing::debug!(
        "Busca de usuário concluída: {}",
        if usuario.is_some() { "encontrado" } else { "não encontrado" }
    );
    Ok(usuario)
}

/// Indica se já existe um usuário com este email.
pub async fn email_ja_existe(db_pool: &SqlitePool, email: &str) -> AppResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuarios WHERE email = ?1")
        .bind(email)
        .fetch_one(db_pool)
        .await?;
    tracing::debug!("📧 Email {} já existe? {}", email, count > 0);
    Ok(count > 0)
}

/// Cria o usuário guardando apenas o hash bcrypt da senha.
pub async fn criar_usuario(db_pool: &SqlitePool, novo: &NovoUsuario) -> AppResult<Usuario> {
    tracing::info!("👤 Criando novo usuário: {}", novo.email);
    let senha_hash = auth_service::hash_password(&novo.senha).await?;

    let resultado = sqlx::query_as::<_, Usuario>(
        r#"
        INSERT INTO usuarios (nome, email, senha_hash)
        VALUES (?1, ?2, ?3)
        RETURNING id, nome, email, senha_hash, data_cadastro
        "#,
    )
    .bind(&novo.nome)
    .bind(&novo.email)
    .bind(&senha_hash)
    .fetch_one(db_pool)
    .await;

    match resultado {
        Ok(usuario) => {
            tracing::info!("✅ Usuário criado com ID: {}", usuario.id);
            Ok(usuario)
        }
        // Dois registos concorrentes com o mesmo email: a restrição UNIQUE decide
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("Falha ao criar usuário: email '{}' já existe.", novo.email);
            Err(AppError::Validation("Este email já está cadastrado".to_string()))
        }
        Err(e) => {
            tracing::error!("Erro ao criar usuário: {:?}", e);
            Err(e.into())
        }
    }
}
