//! Markets: the root entity. A market is a store location that owns products.

use super::error::DomainError;
use super::id::MarketId;

const MARKET_FIELDS_REQUIRED: &str = "Nome e endereço são obrigatórios.";

/// A persisted market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    pub id: MarketId,
    pub name: String,
    pub address: String,
}

/// The fields returned when a single market is looked up by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketDetails {
    pub name: String,
    pub address: String,
}

/// Validated market fields, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMarket {
    name: String,
    address: String,
}

impl NewMarket {
    /// Validate market fields.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingFields`] if either field is absent or
    /// blank.
    pub fn try_new(name: Option<String>, address: Option<String>) -> Result<Self, DomainError> {
        match (non_blank(name), non_blank(address)) {
            (Some(name), Some(address)) => Ok(Self { name, address }),
            _ => Err(DomainError::MissingFields {
                message: MARKET_FIELDS_REQUIRED,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Keep a text field only if it has non-whitespace content.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
