//! Currencies accepted by the gateway.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// ISO-4217 currency supported for checkout.
///
/// PagSeguro only settles in Brazilian reais.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Brl,
}

impl Currency {
    /// The three-letter code sent to the provider.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(ValidationError::empty_field("currency"));
        }
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "currency",
                "expected a three-letter ISO-4217 code",
            ));
        }

        match code.to_ascii_uppercase().as_str() {
            "BRL" => Ok(Currency::Brl),
            other => Err(ValidationError::unsupported_currency(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_brl_in_any_case() {
        assert_eq!("BRL".parse::<Currency>().unwrap(), Currency::Brl);
        assert_eq!("brl".parse::<Currency>().unwrap(), Currency::Brl);
        assert_eq!(" Brl ".parse::<Currency>().unwrap(), Currency::Brl);
    }

    #[test]
    fn rejects_well_formed_but_unsupported_code() {
        assert_eq!(
            "USD".parse::<Currency>(),
            Err(ValidationError::unsupported_currency("USD"))
        );
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(matches!(
            "BR".parse::<Currency>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "B4L".parse::<Currency>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "".parse::<Currency>(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn displays_iso_code() {
        assert_eq!(Currency::Brl.to_string(), "BRL");
    }
}
