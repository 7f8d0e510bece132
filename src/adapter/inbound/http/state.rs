//! Router state shared by every handler.

use std::sync::Arc;

use crate::application::{MarketService, MovementService, ProductService};
use crate::port::outbound::store::CatalogStore;

/// The three resource services, all backed by the same store.
pub struct AppState<S> {
    pub markets: MarketService<S>,
    pub products: ProductService<S>,
    pub movements: MovementService<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            markets: self.markets.clone(),
            products: self.products.clone(),
            movements: self.movements.clone(),
        }
    }
}

impl<S: CatalogStore> AppState<S> {
    /// Build the services over one shared store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            markets: MarketService::new(Arc::clone(&store)),
            products: ProductService::new(Arc::clone(&store)),
            movements: MovementService::new(store),
        }
    }
}
