//! Persistence ports for markets, products and movements.
//!
//! Each method is exactly one store round trip. Mutations report whether a
//! row was affected instead of failing, so callers decide what "nothing
//! matched" means. Method names are unique across the three traits so a
//! single gateway can implement all of them.

use std::future::Future;

use crate::domain::{
    Market, MarketDetails, MarketId, Movement, MovementId, NewMarket, NewMovement, NewProduct,
    Product, ProductId,
};
use crate::error::Result;

/// Storage operations for markets.
pub trait MarketStore: Send + Sync {
    /// Insert a market and return its generated id.
    fn insert_market(&self, market: &NewMarket) -> impl Future<Output = Result<MarketId>> + Send;

    /// List every market in store order.
    fn list_markets(&self) -> impl Future<Output = Result<Vec<Market>>> + Send;

    /// Get a market's name and address by id.
    fn get_market(&self, id: MarketId)
        -> impl Future<Output = Result<Option<MarketDetails>>> + Send;

    /// Overwrite name and address. Returns false if no row matched.
    fn update_market(
        &self,
        id: MarketId,
        market: &NewMarket,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Delete a market. Dependent products and movements are left alone.
    /// Returns false if no row matched.
    fn delete_market(&self, id: MarketId) -> impl Future<Output = Result<bool>> + Send;
}

/// Storage operations for products.
pub trait ProductStore: Send + Sync {
    /// Insert a product and return its generated id.
    fn insert_product(&self, product: &NewProduct)
        -> impl Future<Output = Result<ProductId>> + Send;

    /// List the products whose owning market is `market_id`.
    fn list_products(&self, market_id: MarketId)
        -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Delete a product only if it belongs to `market_id`.
    /// Returns false if no row matched both identifiers.
    fn delete_product(
        &self,
        market_id: MarketId,
        product_id: ProductId,
    ) -> impl Future<Output = Result<bool>> + Send;
}

/// Storage operations for stock movements.
pub trait MovementStore: Send + Sync {
    /// Record a movement and return its generated id.
    fn insert_movement(
        &self,
        movement: &NewMovement,
    ) -> impl Future<Output = Result<MovementId>> + Send;

    /// List the movements matching both the market and the product.
    fn list_movements(
        &self,
        market_id: MarketId,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Vec<Movement>>> + Send;
}

/// Every store port at once, as required by the HTTP router state.
pub trait CatalogStore: MarketStore + ProductStore + MovementStore + 'static {}

impl<T> CatalogStore for T where T: MarketStore + ProductStore + MovementStore + 'static {}
