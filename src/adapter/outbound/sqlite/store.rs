//! SQLite catalog store implementation.
//!
//! Implements the market, product and movement store ports over a single
//! Diesel connection pool. Diesel is synchronous, so each operation checks
//! out a connection and runs on the blocking thread pool.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    MarketRow, MovementRow, NewMarketRow, NewMovementRow, NewProductRow, ProductRow,
};
use crate::adapter::outbound::sqlite::database::schema::{mercados, movimentacoes, produtos};
use crate::domain::{
    Market, MarketDetails, MarketId, Movement, MovementId, NewMarket, NewMovement, NewProduct,
    Product, ProductId,
};
use crate::error::Result;
use crate::port::outbound::store::{MarketStore, MovementStore, ProductStore};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    #[diesel(column_name = "id")]
    id: i32,
}

/// SQLite-backed store for markets, products and movements.
#[derive(Clone)]
pub struct SqliteStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteStore {
    /// Create a new SQLite store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run `op` on a pooled connection on the blocking thread pool.
    async fn with_conn<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<T> {
            let mut conn = pool.get()?;
            Ok(op(&mut conn)?)
        })
        .await?
    }
}

/// Insert one row and read back its generated id on the same connection.
fn insert_returning_id<F>(conn: &mut SqliteConnection, insert: F) -> QueryResult<i32>
where
    F: FnOnce(&mut SqliteConnection) -> QueryResult<usize>,
{
    conn.transaction(|conn| {
        insert(conn)?;
        diesel::sql_query("SELECT last_insert_rowid() AS id")
            .get_result::<LastInsertRowId>(conn)
            .map(|row| row.id)
    })
}

impl MarketStore for SqliteStore {
    async fn insert_market(&self, market: &NewMarket) -> Result<MarketId> {
        let row = NewMarketRow::from(market);
        let id = self
            .with_conn(move |conn| {
                insert_returning_id(conn, |conn| {
                    diesel::insert_into(mercados::table).values(&row).execute(conn)
                })
            })
            .await?;
        Ok(MarketId::new(id))
    }

    async fn list_markets(&self) -> Result<Vec<Market>> {
        let rows: Vec<MarketRow> = self
            .with_conn(|conn| {
                mercados::table
                    .select(MarketRow::as_select())
                    .order(mercados::id.asc())
                    .load(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Market::from).collect())
    }

    async fn get_market(&self, id: MarketId) -> Result<Option<MarketDetails>> {
        let row: Option<(String, String)> = self
            .with_conn(move |conn| {
                mercados::table
                    .find(id.get())
                    .select((mercados::nome, mercados::endereco))
                    .first(conn)
                    .optional()
            })
            .await?;
        Ok(row.map(|(name, address)| MarketDetails { name, address }))
    }

    async fn update_market(&self, id: MarketId, market: &NewMarket) -> Result<bool> {
        let row = NewMarketRow::from(market);
        let updated = self
            .with_conn(move |conn| {
                diesel::update(mercados::table.find(id.get()))
                    .set(&row)
                    .execute(conn)
            })
            .await?;
        Ok(updated > 0)
    }

    async fn delete_market(&self, id: MarketId) -> Result<bool> {
        let deleted = self
            .with_conn(move |conn| diesel::delete(mercados::table.find(id.get())).execute(conn))
            .await?;
        Ok(deleted > 0)
    }
}

impl ProductStore for SqliteStore {
    async fn insert_product(&self, product: &NewProduct) -> Result<ProductId> {
        let row = NewProductRow::from(product);
        let id = self
            .with_conn(move |conn| {
                insert_returning_id(conn, |conn| {
                    diesel::insert_into(produtos::table).values(&row).execute(conn)
                })
            })
            .await?;
        Ok(ProductId::new(id))
    }

    async fn list_products(&self, market_id: MarketId) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> = self
            .with_conn(move |conn| {
                produtos::table
                    .filter(produtos::mercado_id.eq(market_id.get()))
                    .select(ProductRow::as_select())
                    .order(produtos::id.asc())
                    .load(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn delete_product(&self, market_id: MarketId, product_id: ProductId) -> Result<bool> {
        let deleted = self
            .with_conn(move |conn| {
                diesel::delete(
                    produtos::table
                        .filter(produtos::id.eq(product_id.get()))
                        .filter(produtos::mercado_id.eq(market_id.get())),
                )
                .execute(conn)
            })
            .await?;
        Ok(deleted > 0)
    }
}

impl MovementStore for SqliteStore {
    async fn insert_movement(&self, movement: &NewMovement) -> Result<MovementId> {
        let row = NewMovementRow::from(movement);
        let id = self
            .with_conn(move |conn| {
                insert_returning_id(conn, |conn| {
                    diesel::insert_into(movimentacoes::table)
                        .values(&row)
                        .execute(conn)
                })
            })
            .await?;
        Ok(MovementId::new(id))
    }

    async fn list_movements(
        &self,
        market_id: MarketId,
        product_id: ProductId,
    ) -> Result<Vec<Movement>> {
        let rows: Vec<MovementRow> = self
            .with_conn(move |conn| {
                movimentacoes::table
                    .filter(movimentacoes::mercado_id.eq(market_id.get()))
                    .filter(movimentacoes::produto_id.eq(product_id.get()))
                    .select(MovementRow::as_select())
                    .order(movimentacoes::id.asc())
                    .load(conn)
            })
            .await?;
        Ok(rows.into_iter().map(Movement::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
    use crate::error::Error;

    fn setup_store() -> SqliteStore {
        let pool = create_pool(":memory:", 1).unwrap();
        run_migrations(&pool).unwrap();
        SqliteStore::new(pool)
    }

    fn new_market(name: &str, address: &str) -> NewMarket {
        NewMarket::try_new(Some(name.to_string()), Some(address.to_string())).unwrap()
    }

    fn new_product(market_id: i32, name: &str) -> NewProduct {
        NewProduct::try_new(
            MarketId::new(market_id),
            Some(name.to_string()),
            Some("d".to_string()),
            Some(10.0),
            Some(5),
        )
        .unwrap()
    }

    fn new_movement(market_id: i32, product_id: i32, kind: &str, quantity: i32) -> NewMovement {
        NewMovement::try_new(
            MarketId::new(market_id),
            ProductId::new(product_id),
            Some(kind.to_string()),
            Some(quantity),
            Some("2024-01-01".to_string()),
        )
        .unwrap()
    }

    // -------------------------------------------------------------------------
    // Markets
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn insert_market_assigns_sequential_ids() {
        let store = setup_store();

        let first = store.insert_market(&new_market("A", "X")).await.unwrap();
        let second = store.insert_market(&new_market("B", "Y")).await.unwrap();

        assert_eq!(first, MarketId::new(1));
        assert_eq!(second, MarketId::new(2));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn memory_store_serves_overlapping_requests() {
        let pool = create_pool(":memory:", 10).unwrap();
        run_migrations(&pool).unwrap();
        let store = SqliteStore::new(pool);
        store.insert_market(&new_market("A", "X")).await.unwrap();

        let market_b = new_market("B", "Y");
        let (a, b, c, d) = tokio::join!(
            store.list_markets(),
            store.list_markets(),
            store.get_market(MarketId::new(1)),
            store.insert_market(&market_b),
        );

        assert!(a.unwrap().len() >= 1);
        assert!(b.unwrap().len() >= 1);
        assert!(c.unwrap().is_some());
        assert_eq!(d.unwrap(), MarketId::new(2));
    }

    #[tokio::test]
    async fn get_market_returns_stored_fields() {
        let store = setup_store();
        let id = store.insert_market(&new_market("A", "X")).await.unwrap();

        let details = store.get_market(id).await.unwrap().unwrap();

        assert_eq!(
            details,
            MarketDetails {
                name: "A".to_string(),
                address: "X".to_string(),
            }
        );
        assert!(store.get_market(MarketId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_markets_returns_insertion_order() {
        let store = setup_store();
        assert!(store.list_markets().await.unwrap().is_empty());

        store.insert_market(&new_market("A", "X")).await.unwrap();
        store.insert_market(&new_market("B", "Y")).await.unwrap();

        let names: Vec<String> = store
            .list_markets()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn update_market_reports_affected_row() {
        let store = setup_store();
        let id = store.insert_market(&new_market("A", "X")).await.unwrap();

        assert!(store.update_market(id, &new_market("A2", "X2")).await.unwrap());
        assert!(!store
            .update_market(MarketId::new(42), &new_market("Z", "Z"))
            .await
            .unwrap());

        let details = store.get_market(id).await.unwrap().unwrap();
        assert_eq!(details.name, "A2");
        assert_eq!(details.address, "X2");
    }

    #[tokio::test]
    async fn delete_market_twice_reports_missing_second_time() {
        let store = setup_store();
        let id = store.insert_market(&new_market("A", "X")).await.unwrap();

        assert!(store.delete_market(id).await.unwrap());
        assert!(!store.delete_market(id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_market_leaves_products_in_place() {
        let store = setup_store();
        let market = store.insert_market(&new_market("A", "X")).await.unwrap();
        store
            .insert_product(&new_product(market.get(), "P"))
            .await
            .unwrap();

        store.delete_market(market).await.unwrap();

        assert_eq!(store.list_products(market).await.unwrap().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn insert_product_accepts_dangling_market() {
        let store = setup_store();

        let id = store.insert_product(&new_product(77, "P")).await.unwrap();

        let products = store.list_products(MarketId::new(77)).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, id);
        assert_eq!(products[0].description.as_deref(), Some("d"));
        assert_eq!(products[0].price, 10.0);
        assert_eq!(products[0].quantity, 5);
    }

    #[tokio::test]
    async fn insert_product_stores_missing_description_as_null() {
        let store = setup_store();
        let product =
            NewProduct::try_new(MarketId::new(1), Some("P".into()), None, Some(2.5), Some(1))
                .unwrap();

        store.insert_product(&product).await.unwrap();

        let products = store.list_products(MarketId::new(1)).await.unwrap();
        assert_eq!(products[0].description, None);
    }

    #[tokio::test]
    async fn list_products_filters_by_market() {
        let store = setup_store();
        store.insert_product(&new_product(1, "P1")).await.unwrap();
        store.insert_product(&new_product(2, "P2")).await.unwrap();
        store.insert_product(&new_product(1, "P3")).await.unwrap();

        let names: Vec<String> = store
            .list_products(MarketId::new(1))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["P1", "P3"]);
        assert!(store.list_products(MarketId::new(3)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_product_requires_matching_market() {
        let store = setup_store();
        let id = store.insert_product(&new_product(1, "P")).await.unwrap();

        assert!(!store.delete_product(MarketId::new(2), id).await.unwrap());
        assert_eq!(store.list_products(MarketId::new(1)).await.unwrap().len(), 1);

        assert!(store.delete_product(MarketId::new(1), id).await.unwrap());
        assert!(store.list_products(MarketId::new(1)).await.unwrap().is_empty());
    }

    // -------------------------------------------------------------------------
    // Movements
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn list_movements_filters_by_market_and_product() {
        let store = setup_store();
        store
            .insert_movement(&new_movement(1, 1, "entrada", 5))
            .await
            .unwrap();
        store
            .insert_movement(&new_movement(1, 2, "entrada", 7))
            .await
            .unwrap();
        store
            .insert_movement(&new_movement(2, 1, "saida", 1))
            .await
            .unwrap();
        store
            .insert_movement(&new_movement(1, 1, "saida", 2))
            .await
            .unwrap();

        let movements = store
            .list_movements(MarketId::new(1), ProductId::new(1))
            .await
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            movements,
            vec![
                Movement {
                    kind: "entrada".to_string(),
                    quantity: 5,
                    date,
                },
                Movement {
                    kind: "saida".to_string(),
                    quantity: 2,
                    date,
                },
            ]
        );
    }

    #[tokio::test]
    async fn insert_movement_does_not_touch_product_quantity() {
        let store = setup_store();
        let product = store.insert_product(&new_product(1, "P")).await.unwrap();

        store
            .insert_movement(&new_movement(1, product.get(), "entrada", 50))
            .await
            .unwrap();

        let products = store.list_products(MarketId::new(1)).await.unwrap();
        assert_eq!(products[0].quantity, 5);
    }

    #[tokio::test]
    async fn operations_fail_with_database_error_without_schema() {
        let pool = create_pool(":memory:", 1).unwrap();
        let store = SqliteStore::new(pool);

        let result = store.list_markets().await;

        assert!(matches!(result, Err(Error::Database(_))));
    }
}
