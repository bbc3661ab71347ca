//! Scripted walkthrough of the catalog: seed ten products, update a few,
//! look one up, remove two, list what is left.
//!
//! This binary is a presentation-layer caller of the catalog core; all
//! printing and logging happens here, never inside the repository.

use anyhow::Context;

use stockroom_catalog::{Catalog, Product, ProductPatch};
use stockroom_core::CatalogError;

fn seed() -> Vec<Product> {
    vec![
        Product::new("Laptop", "Electrónica", 1200.99, 10),
        Product::new("Mouse", "Accesorios", 25.50, 100),
        Product::new("Teclado", "Accesorios", 45.99, 50),
        Product::new("Monitor", "Electrónica", 300.00, 20),
        Product::new("Impresora", "Oficina", 150.00, 15),
        Product::new("Silla Gamer", "Muebles", 250.00, 5),
        Product::new("Cámara", "Fotografía", 800.00, 8),
        Product::new("Auriculares", "Audio", 60.00, 30),
        Product::new("Smartphone", "Electrónica", 900.00, 25),
        Product::new("Cargador", "Accesorios", 20.00, 150),
    ]
}

fn print_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("The catalog is empty.");
        return;
    }
    for product in catalog {
        println!("{product}");
    }
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let mut catalog = Catalog::new();
    for product in seed() {
        let name = product.name().to_owned();
        catalog
            .add(product)
            .with_context(|| format!("seeding product '{name}'"))?;
    }
    tracing::info!(products = catalog.len(), "catalog seeded");

    println!("Initial catalog:");
    print_catalog(&catalog);

    // A second "Mouse" must bounce off the uniqueness constraint.
    match catalog.add(Product::new("Mouse", "Accesorios", 19.99, 10)) {
        Err(CatalogError::DuplicateName(name)) => {
            tracing::info!(%name, "duplicate add rejected");
        }
        other => anyhow::bail!("expected a duplicate-name rejection, got {other:?}"),
    }

    catalog.update(
        "Mouse",
        ProductPatch {
            quantity: Some(95),
            ..ProductPatch::default()
        },
    )?;
    catalog.update(
        "Monitor",
        ProductPatch {
            price: Some(280.00),
            ..ProductPatch::default()
        },
    )?;
    catalog.update(
        "Cargador",
        ProductPatch {
            price: Some(18.00),
            quantity: Some(160),
        },
    )?;
    tracing::info!("applied price/quantity updates");

    if let Some(product) = catalog.find("Auriculares") {
        println!("Found: {}", serde_json::to_string(product)?);
    }

    for name in ["Laptop", "Silla Gamer"] {
        let removed = catalog.remove(name)?;
        tracing::info!(name = removed.name(), "product removed");
    }

    println!("Final catalog:");
    print_catalog(&catalog);

    Ok(())
}
