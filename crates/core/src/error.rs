//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A field value rejected by a validated setter.
///
/// Whenever one of these is returned, the entity keeps the prior value of
/// that field.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidValue {
    /// Price must be strictly positive.
    #[error("price must be greater than 0 (got {0})")]
    Price(f64),

    /// Quantity must not be negative.
    #[error("quantity must be greater than or equal to 0 (got {0})")]
    Quantity(i64),
}

/// Catalog-level error.
///
/// Keep this focused on deterministic domain failures (uniqueness,
/// existence, validation). Presentation concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// `add` rejected: another product already uses this name.
    #[error("product '{0}' already exists")]
    DuplicateName(String),

    /// `update`/`remove` rejected: no product has this name.
    #[error("product '{0}' does not exist")]
    NotFound(String),

    /// One or more field values failed validation. Fields that did validate
    /// were still applied.
    #[error("{}", render_rejections(.0))]
    InvalidValue(Vec<InvalidValue>),
}

impl CatalogError {
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

impl From<InvalidValue> for CatalogError {
    fn from(rejection: InvalidValue) -> Self {
        Self::InvalidValue(vec![rejection])
    }
}

fn render_rejections(rejections: &[InvalidValue]) -> String {
    rejections
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
