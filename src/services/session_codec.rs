// src/services/session_codec.rs
use crate::{
    error::AppResult,
    models::{session::SessionData, user::UsuarioLogado},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Validade fixa de um token de sessão.
pub const SESSION_TTL_DAYS: i64 = 7;

// Claims do JWT: o payload da sessão mais iat/exp
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    user: UsuarioLogado,
    #[serde(rename = "isLoggedIn")]
    is_logged_in: bool,
    iat: i64,
    exp: i64,
}

/// Assina e verifica tokens de sessão (JWT HS256) com a chave derivada do segredo do servidor.
#[derive(Clone)]
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    pub fn encrypt(&self, payload: &SessionData) -> AppResult<String> {
        self.encrypt_at(payload, Utc::now())
    }

    /// Mesmo que `encrypt`, mas com o instante de emissão explícito.
    /// Mesma chave + mesmo instante => mesmo token.
    pub fn encrypt_at(&self, payload: &SessionData, issued_at: DateTime<Utc>) -> AppResult<String> {
        let claims = SessionClaims {
            user: payload.user.clone(),
            is_logged_in: payload.is_logged_in,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(SESSION_TTL_DAYS)).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verifica assinatura e expiração. Qualquer falha (token malformado,
    /// assinatura errada, expirado) é tratada como "sem sessão".
    pub fn decrypt(&self, token: &str) -> Option<SessionData> {
        let validation = Validation::new(Algorithm::HS256);

        match decode::<SessionClaims>(token, &self.decoding_key, &validation) {
            Ok(data) => Some(SessionData {
                user: data.claims.user,
                is_logged_in: data.claims.is_logged_in,
            }),
            Err(e) => {
                tracing::debug!("Token de sessão rejeitado: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> SessionCodec {
        SessionCodec::new(b"segredo-de-teste-com-tamanho-suficiente-para-hs256")
    }

    fn payload() -> SessionData {
        SessionData::logged_in(UsuarioLogado {
            id: 42,
            nome: "Ana".into(),
            email: "ana@example.com".into(),
        })
    }

    #[test]
    fn decrypt_devolve_o_payload_original() {
        let codec = codec();
        let token = codec.encrypt(&payload()).unwrap();
        assert_eq!(codec.decrypt(&token), Some(payload()));
    }

    #[test]
    fn encrypt_e_deterministico_para_o_mesmo_instante() {
        let codec = codec();
        let agora = Utc::now();
        let a = codec.encrypt_at(&payload(), agora).unwrap();
        let b = codec.encrypt_at(&payload(), agora).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn assinatura_alterada_e_rejeitada() {
        let codec = codec();
        let token = codec.encrypt(&payload()).unwrap();
        let inicio_assinatura = token.rfind('.').unwrap() + 1;

        // Os últimos caracteres podem carregar bits de enchimento; alteramos os restantes
        for pos in inicio_assinatura..token.len() - 2 {
            let mut bytes = token.clone().into_bytes();
            bytes[pos] = if bytes[pos] == b'A' { b'B' } else { b'A' };
            let adulterado = String::from_utf8(bytes).unwrap();
            assert_eq!(codec.decrypt(&adulterado), None, "posição {}", pos);
        }
    }

    #[test]
    fn token_de_outra_chave_e_rejeitado() {
        let outro = SessionCodec::new(b"outra-chave-completamente-diferente-da-primeira");
        let token = outro.encrypt(&payload()).unwrap();
        assert_eq!(codec().decrypt(&token), None);
    }

    #[test]
    fn token_expirado_e_rejeitado() {
        let codec = codec();
        let emitido = Utc::now() - Duration::days(SESSION_TTL_DAYS + 1);
        let token = codec.encrypt_at(&payload(), emitido).unwrap();
        assert_eq!(codec.decrypt(&token), None);
    }

    #[test]
    fn lixo_e_rejeitado() {
        let codec = codec();
        assert_eq!(codec.decrypt(""), None);
        assert_eq!(codec.decrypt("invalid.token.here"), None);
        assert_eq!(codec.decrypt("nem-sequer-tem-pontos"), None);
    }
}
