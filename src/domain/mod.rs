//! Persistence- and transport-agnostic domain types.
//!
//! - [`market`] - the root entity
//! - [`product`] - items owned by a market
//! - [`movement`] - append-only stock history per (market, product)
//! - [`id`] - store-assigned identifiers
//! - [`error`] - validation failures

use std::fmt;

pub mod error;
pub mod id;
pub mod market;
pub mod movement;
pub mod product;

pub use id::{MarketId, MovementId, ProductId};
pub use market::{Market, MarketDetails, NewMarket};
pub use movement::{Movement, NewMovement};
pub use product::{NewProduct, Product};

/// Entities that can be addressed by a path identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Market,
    Product,
}

impl Entity {
    /// Caller-facing message for a lookup that matched no row.
    #[must_use]
    pub const fn not_found_message(self) -> &'static str {
        match self {
            Self::Market => "Mercado não encontrado.",
            Self::Product => "Produto não encontrado.",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "mercado"),
            Self::Product => write!(f, "produto"),
        }
    }
}
