// src/services/voto_service.rs
use crate::{error::AppResult, models::voto::TipoVoto};
use sqlx::SqlitePool;

/// Regista (ou substitui) o voto do usuário neste filme.
///
/// Upsert atómico na base de dados: fica sempre uma única linha por
/// (filme, usuário) e o último voto ganha. Sem retry.
pub async fn registrar_voto(
    db_pool: &SqlitePool,
    filme_id: i64,
    usuario_id: i64,
    tipo_voto: TipoVoto,
) -> AppResult<()> {
    tracing::info!("🗳️ Registrando voto: filme={} usuario={} tipo={}", filme_id, usuario_id, tipo_voto.valor());
    sqlx::query(
        r#"
        INSERT INTO votos (filme_id, usuario_id, tipo_voto)
        VALUES (?1, ?2, ?3)
        ON CONFLICT (filme_id, usuario_id) -- UNIQUE da tabela votos
        DO UPDATE SET tipo_voto = excluded.tipo_voto, data_voto = CURRENT_TIMESTAMP
        "#,
    )
    .bind(filme_id)
    .bind(usuario_id)
    .bind(tipo_voto.valor())
    .execute(db_pool)
    .await
    .map_err(|e| {
        tracing::error!("Erro ao registrar voto: {:?}", e);
        e
    })?;

    tracing::info!("✅ Voto registrado com sucesso");
    Ok(())
}

/// Voto atual do usuário num filme, se existir.
pub async fn buscar_voto_usuario(
    db_pool: &SqlitePool,
    filme_id: i64,
    usuario_id: i64,
) -> AppResult<Option<TipoVoto>> {
    let valor: Option<i64> = sqlx::query_scalar(
        "SELECT tipo_voto FROM votos WHERE filme_id = ?1 AND usuario_id = ?2",
    )
    .bind(filme_id)
    .bind(usuario_id)
    .fetch_optional(db_pool)
    .await?;

    // A restrição CHECK garante +1/-1; outro valor seria ignorado
    Ok(valor.and_then(|v| TipoVoto::try_from(v).ok()))
}
