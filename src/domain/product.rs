//! Products: items for sale, each owned by exactly one market.
//!
//! `quantity` is the stored stock figure. It is written on creation and is
//! not recomputed from movements; nothing here reconciles the two.

use super::error::DomainError;
use super::id::{MarketId, ProductId};
use super::market::non_blank;

const PRODUCT_FIELDS_REQUIRED: &str = "Nome, preço e quantidade são obrigatórios.";

/// A persisted product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub market_id: MarketId,
}

/// Validated fields for a product about to be inserted under a market.
///
/// The owning market is not checked for existence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    market_id: MarketId,
    name: String,
    description: Option<String>,
    price: f64,
    quantity: i32,
}

impl NewProduct {
    /// Validate product fields.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingFields`] if the name is absent or blank,
    /// or if price or quantity is absent, and [`DomainError::InvalidField`]
    /// if the price is not a finite number.
    pub fn try_new(
        market_id: MarketId,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
        quantity: Option<i32>,
    ) -> Result<Self, DomainError> {
        let (Some(name), Some(price), Some(quantity)) = (non_blank(name), price, quantity) else {
            return Err(DomainError::MissingFields {
                message: PRODUCT_FIELDS_REQUIRED,
            });
        };
        if !price.is_finite() {
            return Err(DomainError::InvalidField {
                field: "preco",
                reason: format!("{price} não é um valor numérico válido"),
            });
        }

        Ok(Self {
            market_id,
            name,
            description,
            price,
            quantity,
        })
    }

    #[must_use]
    pub fn market_id(&self) -> MarketId {
        self.market_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}
