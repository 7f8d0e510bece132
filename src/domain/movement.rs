//! Stock movements: append-only history scoped to a (market, product) pair.
//!
//! There is no update or delete for a movement. Neither identifier is
//! checked for existence, and the product is not checked to belong to the
//! market.

use chrono::NaiveDate;

use super::error::DomainError;
use super::id::{MarketId, ProductId};
use super::market::non_blank;

const MOVEMENT_FIELDS_REQUIRED: &str = "Tipo, quantidade e data de movimentação são obrigatórios.";

/// Date format accepted and produced for `data_movimentacao`.
pub const MOVEMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded movement as returned by listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    /// Free-text classification such as `entrada` or `saida`.
    pub kind: String,
    pub quantity: i32,
    pub date: NaiveDate,
}

/// Validated fields for a movement about to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovement {
    market_id: MarketId,
    product_id: ProductId,
    kind: String,
    quantity: i32,
    date: NaiveDate,
}

impl NewMovement {
    /// Validate movement fields.
    ///
    /// A zero quantity counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingFields`] if type, quantity or date is
    /// absent, and [`DomainError::InvalidField`] if the date is not a
    /// `YYYY-MM-DD` calendar date.
    pub fn try_new(
        market_id: MarketId,
        product_id: ProductId,
        kind: Option<String>,
        quantity: Option<i32>,
        date: Option<String>,
    ) -> Result<Self, DomainError> {
        let quantity = quantity.filter(|q| *q != 0);
        let (Some(kind), Some(quantity), Some(date)) = (non_blank(kind), quantity, non_blank(date))
        else {
            return Err(DomainError::MissingFields {
                message: MOVEMENT_FIELDS_REQUIRED,
            });
        };
        let date = NaiveDate::parse_from_str(date.trim(), MOVEMENT_DATE_FORMAT).map_err(|e| {
            DomainError::InvalidField {
                field: "data_movimentacao",
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            market_id,
            product_id,
            kind,
            quantity,
            date,
        })
    }

    #[must_use]
    pub fn market_id(&self) -> MarketId {
        self.market_id
    }

    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
