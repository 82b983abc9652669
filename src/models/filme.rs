// src/models/filme.rs
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use sqlx::FromRow;

// Estrutura que espelha a tabela 'filmes'
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filme {
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub imagem_url: String,
    pub banner_top_url: Option<String>,
    pub data_cadastro: NaiveDateTime,
    pub genero_id: i64,
}

/// Dados de cadastro. Os campos obrigatórios são validados pela action antes de chegar aqui.
#[derive(Debug, Clone)]
pub struct NovoFilme {
    pub titulo: String,
    pub descricao: Option<String>,
    pub imagem_url: String,
    pub banner_top_url: Option<String>,
    pub genero_id: i64,
}

/// Filme + nome do género + contagem de votos. Calculado pela query de agregação.
///
/// As contagens vão para o JSON como texto ("0", "1", ...), que é o formato
/// que os clientes existentes esperam.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmeComVotos {
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub imagem_url: String,
    pub banner_top_url: Option<String>,
    pub genero: Option<String>,
    #[serde(serialize_with = "contagem_como_texto")]
    pub gostei: i64,
    #[serde(serialize_with = "contagem_como_texto")]
    pub nao_gostei: i64,
}

#[derive(Debug, Clone, Default, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estatisticas {
    pub total_filmes: i64,
    pub total_gostei: i64,
    pub total_nao_gostei: i64,
}

fn contagem_como_texto<S: Serializer>(valor: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(valor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contagens_serializadas_como_texto() {
        let filme = FilmeComVotos {
            id: 1,
            titulo: "Matrix".into(),
            descricao: None,
            imagem_url: "https://img/matrix.jpg".into(),
            banner_top_url: None,
            genero: Some("Ficção Científica".into()),
            gostei: 0,
            nao_gostei: 3,
        };
        let json = serde_json::to_value(&filme).unwrap();
        assert_eq!(json["gostei"], "0");
        assert_eq!(json["naoGostei"], "3");
        assert_eq!(json["imagemUrl"], "https://img/matrix.jpg");
        assert!(json["descricao"].is_null());
    }
}
