use stockroom_core::{CatalogError, CatalogResult, Entity, InvalidValue};

use crate::product::Product;

/// Partial update for a product: a field left as `None` is not touched.
///
/// One explicit option per field, so a legitimate value is never overloaded
/// as an "absent" sentinel (zero is a valid quantity).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProductPatch {
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.quantity.is_none()
    }
}

/// In-memory product repository.
///
/// Holds products in insertion order and enforces the catalog invariants:
/// at most one product per name (case-sensitive), and price/quantity
/// validity on update. Products are owned by the catalog once added; all
/// later interaction goes through the operations here.
///
/// Single-writer by construction: mutating operations take `&mut self` and
/// complete before returning. `add` (check-then-insert) and
/// `update`/`remove` (find-then-mutate) are compound steps, so a concurrent
/// caller must wrap the catalog in its own lock.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products currently held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Add a product.
    ///
    /// Fails with [`CatalogError::DuplicateName`] when a product with the
    /// same name is already present, leaving the catalog unchanged. On
    /// success the product is appended at the end of the iteration order.
    pub fn add(&mut self, product: Product) -> CatalogResult<()> {
        if self.products.iter().any(|existing| existing.id() == product.id()) {
            return Err(CatalogError::duplicate_name(product.name()));
        }
        self.products.push(product);
        Ok(())
    }

    /// Look up a product by exact name. Never mutates.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name() == name)
    }

    /// Apply a partial update to the named product.
    ///
    /// Fails with [`CatalogError::NotFound`] when no product has that name;
    /// nothing is mutated in that case. Otherwise each supplied field is
    /// validated and applied on its own merits: a rejected price does not
    /// stop the quantity from being attempted, and vice versa. When any
    /// field was rejected the call returns [`CatalogError::InvalidValue`]
    /// carrying every rejection, with the accepted fields already applied.
    pub fn update(&mut self, name: &str, patch: ProductPatch) -> CatalogResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|product| product.name() == name)
            .ok_or_else(|| CatalogError::not_found(name))?;

        let mut rejections: Vec<InvalidValue> = Vec::new();
        if let Some(price) = patch.price {
            if let Err(rejection) = product.set_price(price) {
                rejections.push(rejection);
            }
        }
        if let Some(quantity) = patch.quantity {
            if let Err(rejection) = product.set_quantity(quantity) {
                rejections.push(rejection);
            }
        }

        if rejections.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::InvalidValue(rejections))
        }
    }

    /// Remove the named product, preserving the relative order of the rest.
    ///
    /// Fails with [`CatalogError::NotFound`] when no product has that name.
    /// Returns the removed product so the caller can still render it.
    pub fn remove(&mut self, name: &str) -> CatalogResult<Product> {
        let index = self
            .products
            .iter()
            .position(|product| product.name() == name)
            .ok_or_else(|| CatalogError::not_found(name))?;
        Ok(self.products.remove(index))
    }

    /// Iterate products in insertion order. An empty catalog yields an
    /// empty iterator, not an error.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
