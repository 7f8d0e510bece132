//! Domain validation errors.
//!
//! Returned by the `try_new` constructors of the request-side domain types
//! and by identifier parsing. Every variant maps to a 400 at the HTTP edge.
//!
//! # Examples
//!
//! ```
//! use mercado::domain::error::DomainError;
//! use mercado::domain::market::NewMarket;
//!
//! let result = NewMarket::try_new(Some("Centro".into()), None);
//! assert!(matches!(result, Err(DomainError::MissingFields { .. })));
//! ```

use thiserror::Error;

use super::Entity;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// One or more required fields were absent or blank.
    #[error("{message}")]
    MissingFields {
        /// Caller-facing description of the required fields.
        message: &'static str,
    },

    /// A path identifier was not an integer.
    #[error("identificador de {entity} inválido: {value}")]
    InvalidId {
        /// Entity the identifier was meant for.
        entity: Entity,
        /// The raw segment as received.
        value: String,
    },

    /// A field was present but its value is unusable.
    #[error("campo {field} inválido: {reason}")]
    InvalidField {
        /// Wire name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
