//! Product use cases, always scoped to an owning market.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Entity, MarketId, NewProduct, Product, ProductId};
use crate::error::{Error, Result};
use crate::port::outbound::store::ProductStore;

/// Fields of a product creation request, before validation.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

/// Create, list and delete products under a market.
pub struct ProductService<S> {
    store: Arc<S>,
}

impl<S> Clone for ProductService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ProductStore> ProductService<S> {
    /// Create a new product service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Add a product to a market. The market is not checked for existence.
    ///
    /// # Errors
    /// Returns a domain error on invalid input, or the store error.
    pub async fn create(&self, market_id: MarketId, draft: ProductDraft) -> Result<ProductId> {
        let product = NewProduct::try_new(
            market_id,
            draft.name,
            draft.description,
            draft.price,
            draft.quantity,
        )?;
        let id = self.store.insert_product(&product).await?;
        info!(market_id = %market_id, product_id = %id, "Product created");
        Ok(id)
    }

    /// List a market's products. An unknown market yields an empty list.
    ///
    /// # Errors
    /// Returns the store error.
    pub async fn list_by_market(&self, market_id: MarketId) -> Result<Vec<Product>> {
        self.store.list_products(market_id).await
    }

    /// Delete a product only if it belongs to `market_id`.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the product does not exist or belongs
    /// to another market.
    pub async fn delete(&self, market_id: MarketId, product_id: ProductId) -> Result<()> {
        if !self.store.delete_product(market_id, product_id).await? {
            return Err(Error::NotFound(Entity::Product));
        }
        info!(market_id = %market_id, product_id = %product_id, "Product deleted");
        Ok(())
    }
}
