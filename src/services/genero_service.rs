// src/services/genero_service.rs
use crate::{error::AppResult, models::genero::Genero};
use sqlx::SqlitePool;

/// Todos os géneros, ordenados por nome.
pub async fn listar_generos(db_pool: &SqlitePool) -> AppResult<Vec<Genero>> {
    tracing::debug!("🎭 Buscando gêneros...");
    let generos = sqlx::query_as::<_, Genero>("SELECT id, nome FROM generos ORDER BY nome")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Gêneros encontrados: {}", generos.len());
    Ok(generos)
}

/// Devolve o género com este nome, criando-o se ainda não existir.
/// Uma única instrução, por isso não há janela entre "verificar" e "inserir".
pub async fn garantir_genero(db_pool: &SqlitePool, nome: &str) -> AppResult<Genero> {
    let genero = sqlx::query_as::<_, Genero>(
        r#"
        INSERT INTO generos (nome) VALUES (?1)
        ON CONFLICT (nome) DO UPDATE SET nome = excluded.nome
        RETURNING id, nome
        "#,
    )
    .bind(nome)
    .fetch_one(db_pool)
    .await?;
    Ok(genero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn generos_semeados_vem_ordenados() {
        let pool = create_memory_pool().await.unwrap();
        let generos = listar_generos(&pool).await.unwrap();

        assert!(!generos.is_empty());
        let nomes: Vec<&str> = generos.iter().map(|g| g.nome.as_str()).collect();
        let mut ordenados = nomes.clone();
        ordenados.sort();
        assert_eq!(nomes, ordenados);
        assert!(nomes.contains(&"Drama"));
    }

    #[tokio::test]
    async fn garantir_genero_e_idempotente() {
        let pool = create_memory_pool().await.unwrap();
        let a = garantir_genero(&pool, "Faroeste").await.unwrap();
        let b = garantir_genero(&pool, "Faroeste").await.unwrap();
        assert_eq!(a, b);

        let drama = garantir_genero(&pool, "Drama").await.unwrap();
        let existentes = listar_generos(&pool).await.unwrap();
        assert_eq!(existentes.iter().filter(|g| g.nome == "Drama").count(), 1);
        assert!(existentes.contains(&drama));
    }
}
