// src/models/voto.rs
use serde::Serialize;

/// Os dois resultados possíveis de um voto. Guardado na DB como +1 / -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i64")]
pub enum TipoVoto {
    Gostei,
    NaoGostei,
}

impl TipoVoto {
    pub fn valor(self) -> i64 {
        match self {
            TipoVoto::Gostei => 1,
            TipoVoto::NaoGostei => -1,
        }
    }
}

impl From<TipoVoto> for i64 {
    fn from(tipo: TipoVoto) -> i64 {
        tipo.valor()
    }
}

impl TryFrom<i64> for TipoVoto {
    type Error = i64;

    fn try_from(valor: i64) -> Result<Self, Self::Error> {
        match valor {
            1 => Ok(TipoVoto::Gostei),
            -1 => Ok(TipoVoto::NaoGostei),
            outro => Err(outro),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converte_valores_validos() {
        assert_eq!(TipoVoto::try_from(1), Ok(TipoVoto::Gostei));
        assert_eq!(TipoVoto::try_from(-1), Ok(TipoVoto::NaoGostei));
        assert_eq!(i64::from(TipoVoto::NaoGostei), -1);
    }

    #[test]
    fn rejeita_outros_valores() {
        assert_eq!(TipoVoto::try_from(0), Err(0));
        assert_eq!(TipoVoto::try_from(2), Err(2));
    }

    #[test]
    fn serializa_como_numero() {
        assert_eq!(serde_json::to_string(&TipoVoto::Gostei).unwrap(), "1");
    }
}
