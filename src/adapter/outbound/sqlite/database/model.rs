//! Database model types for Diesel ORM.
//!
//! Rows carry the column names of the store schema; conversion to domain
//! types happens here so the store module only deals in queries.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{mercados, movimentacoes, produtos};
use crate::domain::{
    Market, MarketId, Movement, NewMarket, NewMovement, NewProduct, Product, ProductId,
};

/// Database row for a market.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = mercados)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MarketRow {
    pub id: i32,
    pub nome: String,
    pub endereco: String,
}

/// Database row for a market (insertable and used for full updates).
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = mercados)]
pub struct NewMarketRow {
    pub nome: String,
    pub endereco: String,
}

/// Database row for a product (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = produtos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub preco: f64,
    pub quantidade: i32,
    pub mercado_id: i32,
}

/// Database row for a product (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = produtos)]
pub struct NewProductRow {
    pub nome: String,
    pub descricao: Option<String>,
    pub preco: f64,
    pub quantidade: i32,
    pub mercado_id: i32,
}

/// The columns of a movement that listing returns.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = movimentacoes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MovementRow {
    pub tipo: String,
    pub quantidade: i32,
    pub data_movimentacao: NaiveDate,
}

/// Database row for a movement (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movimentacoes)]
pub struct NewMovementRow {
    pub tipo: String,
    pub quantidade: i32,
    pub data_movimentacao: NaiveDate,
    pub produto_id: i32,
    pub mercado_id: i32,
}

impl From<MarketRow> for Market {
    fn from(row: MarketRow) -> Self {
        Self {
            id: MarketId::new(row.id),
            name: row.nome,
            address: row.endereco,
        }
    }
}

impl From<&NewMarket> for NewMarketRow {
    fn from(market: &NewMarket) -> Self {
        Self {
            nome: market.name().to_string(),
            endereco: market.address().to_string(),
        }
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.nome,
            description: row.descricao,
            price: row.preco,
            quantity: row.quantidade,
            market_id: MarketId::new(row.mercado_id),
        }
    }
}

impl From<&NewProduct> for NewProductRow {
    fn from(product: &NewProduct) -> Self {
        Self {
            nome: product.name().to_string(),
            descricao: product.description().map(String::from),
            preco: product.price(),
            quantidade: product.quantity(),
            mercado_id: product.market_id().get(),
        }
    }
}

impl From<MovementRow> for Movement {
    fn from(row: MovementRow) -> Self {
        Self {
            kind: row.tipo,
            quantity: row.quantidade,
            date: row.data_movimentacao,
        }
    }
}

impl From<&NewMovement> for NewMovementRow {
    fn from(movement: &NewMovement) -> Self {
        Self {
            tipo: movement.kind().to_string(),
            quantidade: movement.quantity(),
            data_movimentacao: movement.date(),
            produto_id: movement.product_id().get(),
            mercado_id: movement.market_id().get(),
        }
    }
}
