// src/services/filme_service.rs
use crate::{
    error::AppResult,
    models::filme::{Estatisticas, Filme, FilmeComVotos, NovoFilme},
};
use sqlx::SqlitePool;

/// Todos os filmes com o nome do género e a contagem de votos, ordenados por título.
///
/// Filmes sem votos aparecem com 0/0. Com `genero` só entram filmes desse género.
pub async fn listar_filmes_com_votos(
    db_pool: &SqlitePool,
    genero: Option<&str>,
) -> AppResult<Vec<FilmeComVotos>> {
    tracing::debug!("🎬 Buscando filmes com votos (género: {:?})...", genero);
    let filmes = sqlx::query_as::<_, FilmeComVotos>(
        r#"
        SELECT
            f.id,
            f.titulo,
            f.descricao,
            f.imagem_url,
            f.banner_top_url,
            g.nome AS genero,
            COALESCE(SUM(CASE WHEN v.tipo_voto = 1 THEN 1 ELSE 0 END), 0) AS gostei,
            COALESCE(SUM(CASE WHEN v.tipo_voto = -1 THEN 1 ELSE 0 END), 0) AS nao_gostei
        FROM filmes f
        LEFT JOIN generos g ON f.genero_id = g.id
        LEFT JOIN votos v ON f.id = v.filme_id
        WHERE ?1 IS NULL OR g.nome = ?1
        GROUP BY f.id, g.nome
        ORDER BY f.titulo
        "#,
    )
    .bind(genero)
    .fetch_all(db_pool)
    .await?;

    tracing::debug!("Filmes encontrados: {}", filmes.len());
    Ok(filmes)
}

pub async fn criar_filme(db_pool: &SqlitePool, novo: &NovoFilme) -> AppResult<Filme> {
    tracing::info!("🎬 Criando novo filme: {}", novo.titulo);
    let filme = sqlx::query_as::<_, Filme>(
        r#"
        INSERT INTO filmes (titulo, descricao, imagem_url, banner_top_url, genero_id)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, titulo, descricao, imagem_url, banner_top_url, data_cadastro, genero_id
        "#,
    )
    .bind(&novo.titulo)
    .bind(&novo.descricao)
    .bind(&novo.imagem_url)
    .bind(&novo.banner_top_url)
    .bind(novo.genero_id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Filme criado com ID: {}", filme.id);
    Ok(filme)
}

/// Totais para o painel de estatísticas.
pub async fn estatisticas(db_pool: &SqlitePool) -> AppResult<Estatisticas> {
    let stats = sqlx::query_as::<_, Estatisticas>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM filmes) AS total_filmes,
            (SELECT COUNT(*) FROM votos WHERE tipo_voto = 1) AS total_gostei,
            (SELECT COUNT(*) FROM votos WHERE tipo_voto = -1) AS total_nao_gostei
        "#,
    )
    .fetch_one(db_pool)
    .await?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::create_memory_pool,
        models::{user::NovoUsuario, voto::TipoVoto},
        services::{genero_service, user_service, voto_service},
    };

    fn novo_filme(titulo: &str, genero_id: i64) -> NovoFilme {
        NovoFilme {
            titulo: titulo.into(),
            descricao: None,
            imagem_url: format!("https://img/{}.jpg", titulo),
            banner_top_url: None,
            genero_id,
        }
    }

    #[tokio::test]
    async fn criar_filme_guarda_campos_opcionais() {
        let pool = create_memory_pool().await.unwrap();
        let drama = genero_service::garantir_genero(&pool, "Drama").await.unwrap();

        let filme = criar_filme(
            &pool,
            &NovoFilme {
                titulo: "À Procura da Felicidade".into(),
                descricao: Some("Baseado numa história real".into()),
                imagem_url: "https://img/felicidade.jpg".into(),
                banner_top_url: Some("https://img/felicidade-banner.jpg".into()),
                genero_id: drama.id,
            },
        )
        .await
        .unwrap();

        assert!(filme.id > 0);
        assert_eq!(filme.genero_id, drama.id);
        assert_eq!(filme.descricao.as_deref(), Some("Baseado numa história real"));
        assert_eq!(filme.banner_top_url.as_deref(), Some("https://img/felicidade-banner.jpg"));
    }

    #[tokio::test]
    async fn criar_filme_com_genero_inexistente_falha() {
        let pool = create_memory_pool().await.unwrap();
        assert!(criar_filme(&pool, &novo_filme("Fantasma", 9999)).await.is_err());
    }

    #[tokio::test]
    async fn filmes_sem_votos_aparecem_com_zero() {
        let pool = create_memory_pool().await.unwrap();
        let drama = genero_service::garantir_genero(&pool, "Drama").await.unwrap();
        criar_filme(&pool, &novo_filme("Test Film", drama.id)).await.unwrap();

        let filmes = listar_filmes_com_votos(&pool, None).await.unwrap();
        assert_eq!(filmes.len(), 1);
        assert_eq!(filmes[0].genero.as_deref(), Some("Drama"));
        assert_eq!(filmes[0].gostei, 0);
        assert_eq!(filmes[0].nao_gostei, 0);
    }

    #[tokio::test]
    async fn lista_ordenada_por_titulo_e_filtrada_por_genero() {
        let pool = create_memory_pool().await.unwrap();
        let drama = genero_service::garantir_genero(&pool, "Drama").await.unwrap();
        let scifi = genero_service::garantir_genero(&pool, "Ficção Científica").await.unwrap();
        criar_filme(&pool, &novo_filme("Matrix", scifi.id)).await.unwrap();
        criar_filme(&pool, &novo_filme("Hachiko", drama.id)).await.unwrap();
        criar_filme(&pool, &novo_filme("Amélie", drama.id)).await.unwrap();

        let todos = listar_filmes_com_votos(&pool, None).await.unwrap();
        let titulos: Vec<&str> = todos.iter().map(|f| f.titulo.as_str()).collect();
        assert_eq!(titulos, vec!["Amélie", "Hachiko", "Matrix"]);

        let dramas = listar_filmes_com_votos(&pool, Some("Drama")).await.unwrap();
        assert_eq!(dramas.len(), 2);
        assert!(dramas.iter().all(|f| f.genero.as_deref() == Some("Drama")));

        assert!(listar_filmes_com_votos(&pool, Some("Terror")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cenario_completo_de_votacao() {
        let pool = create_memory_pool().await.unwrap();
        let drama = genero_service::garantir_genero(&pool, "Drama").await.unwrap();
        let filme = criar_filme(&pool, &novo_filme("Test Film", drama.id)).await.unwrap();

        let antes = listar_filmes_com_votos(&pool, None).await.unwrap();
        assert_eq!((antes[0].gostei, antes[0].nao_gostei), (0, 0));

        let usuario = user_service::criar_usuario(
            &pool,
            &NovoUsuario {
                nome: "A".into(),
                email: "a@example.com".into(),
                senha: "segredo123".into(),
            },
        )
        .await
        .unwrap();

        voto_service::registrar_voto(&pool, filme.id, usuario.id, TipoVoto::Gostei).await.unwrap();
        let depois_gostei = listar_filmes_com_votos(&pool, None).await.unwrap();
        assert_eq!((depois_gostei[0].gostei, depois_gostei[0].nao_gostei), (1, 0));

        voto_service::registrar_voto(&pool, filme.id, usuario.id, TipoVoto::NaoGostei).await.unwrap();
        let depois_nao = listar_filmes_com_votos(&pool, None).await.unwrap();
        assert_eq!((depois_nao[0].gostei, depois_nao[0].nao_gostei), (0, 1));

        let stats = estatisticas(&pool).await.unwrap();
        assert_eq!(stats.total_filmes, 1);
        assert_eq!(stats.total_gostei, 0);
        assert_eq!(stats.total_nao_gostei, 1);
    }
}
