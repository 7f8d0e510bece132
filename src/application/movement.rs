//! Stock movement use cases. History is append-only.

use std::sync::Arc;

use tracing::info;

use crate::domain::{MarketId, Movement, MovementId, NewMovement, ProductId};
use crate::error::Result;
use crate::port::outbound::store::MovementStore;

/// Fields of a movement creation request, before validation.
#[derive(Debug, Clone, Default)]
pub struct MovementDraft {
    pub kind: Option<String>,
    pub quantity: Option<i32>,
    pub date: Option<String>,
}

/// Record and list the movements of a product within a market.
pub struct MovementService<S> {
    store: Arc<S>,
}

impl<S> Clone for MovementService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: MovementStore> MovementService<S> {
    /// Create a new movement service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record a movement. Neither identifier is checked, and the product's
    /// stored quantity is left as it is.
    ///
    /// # Errors
    /// Returns a domain error on invalid input, or the store error.
    pub async fn create(
        &self,
        market_id: MarketId,
        product_id: ProductId,
        draft: MovementDraft,
    ) -> Result<MovementId> {
        let movement =
            NewMovement::try_new(market_id, product_id, draft.kind, draft.quantity, draft.date)?;
        let id = self.store.insert_movement(&movement).await?;
        info!(
            market_id = %market_id,
            product_id = %product_id,
            movement_id = %id,
            kind = movement.kind(),
            "Movement recorded"
        );
        Ok(id)
    }

    /// List the movements recorded for a product within a market.
    ///
    /// # Errors
    /// Returns the store error.
    pub async fn list_for_product(
        &self,
        market_id: MarketId,
        product_id: ProductId,
    ) -> Result<Vec<Movement>> {
        self.store.list_movements(market_id, product_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::{create_pool, run_migrations, SqliteStore};
    use crate::error::Error;

    fn service() -> MovementService<SqliteStore> {
        let pool = create_pool(":memory:", 1).unwrap();
        run_migrations(&pool).unwrap();
        MovementService::new(Arc::new(SqliteStore::new(pool)))
    }

    fn ids() -> (MarketId, ProductId) {
        (MarketId::new(1), ProductId::new(1))
    }

    #[tokio::test]
    async fn create_missing_quantity_stores_nothing() {
        let movements = service();
        let (market, product) = ids();
        let draft = MovementDraft {
            kind: Some("entrada".into()),
            quantity: None,
            date: Some("2024-01-01".into()),
        };

        let result = movements.create(market, product, draft).await;

        assert!(matches!(result, Err(Error::Domain(_))));
        assert!(movements
            .list_for_product(market, product)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn create_then_list_returns_movement() {
        let movements = service();
        let (market, product) = ids();
        let draft = MovementDraft {
            kind: Some("entrada".into()),
            quantity: Some(5),
            date: Some("2024-01-01".into()),
        };

        let id = movements.create(market, product, draft).await.unwrap();
        let listed = movements.list_for_product(market, product).await.unwrap();

        assert_eq!(id, MovementId::new(1));
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].kind, "entrada");
        assert_eq!(listed[0].quantity, 5);
        assert_eq!(listed[0].date.to_string(), "2024-01-01");
    }
}
