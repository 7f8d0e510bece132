//! Application services (use cases).
//!
//! Each service validates its input through the domain constructors, issues
//! a single store call, and turns "no row matched" into
//! [`Error::NotFound`](crate::error::Error::NotFound). None of them know
//! about HTTP.

pub mod market;
pub mod movement;
pub mod product;

pub use market::MarketService;
pub use movement::{MovementDraft, MovementService};
pub use product::{ProductDraft, ProductService};
