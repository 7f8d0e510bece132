//! Market use cases.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Entity, Market, MarketDetails, MarketId, NewMarket};
use crate::error::{Error, Result};
use crate::port::outbound::store::MarketStore;

/// Create, read, replace and delete markets.
pub struct MarketService<S> {
    store: Arc<S>,
}

impl<S> Clone for MarketService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: MarketStore> MarketService<S> {
    /// Create a new market service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Register a market. Both fields are required and non-blank.
    ///
    /// # Errors
    /// Returns a domain error on invalid input, or the store error.
    pub async fn create(&self, name: Option<String>, address: Option<String>) -> Result<MarketId> {
        let market = NewMarket::try_new(name, address)?;
        let id = self.store.insert_market(&market).await?;
        info!(market_id = %id, "Market created");
        Ok(id)
    }

    /// List every market.
    ///
    /// # Errors
    /// Returns the store error.
    pub async fn list(&self) -> Result<Vec<Market>> {
        self.store.list_markets().await
    }

    /// Look up a market's name and address.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no market has this id.
    pub async fn get(&self, id: MarketId) -> Result<MarketDetails> {
        self.store
            .get_market(id)
            .await?
            .ok_or(Error::NotFound(Entity::Market))
    }

    /// Replace a market's name and address.
    ///
    /// # Errors
    /// Returns a domain error on invalid input, or [`Error::NotFound`] if no
    /// market has this id.
    pub async fn update(
        &self,
        id: MarketId,
        name: Option<String>,
        address: Option<String>,
    ) -> Result<()> {
        let market = NewMarket::try_new(name, address)?;
        if !self.store.update_market(id, &market).await? {
            return Err(Error::NotFound(Entity::Market));
        }
        info!(market_id = %id, "Market updated");
        Ok(())
    }

    /// Delete a market. Its products and movements are not removed.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no market has this id.
    pub async fn delete(&self, id: MarketId) -> Result<()> {
        if !self.store.delete_market(id).await? {
            return Err(Error::NotFound(Entity::Market));
        }
        info!(market_id = %id, "Market deleted");
        Ok(())
    }
}
