//! End-to-end exercise of the catalog: seed, update, look up, remove, list.

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

#[test]
fn full_catalog_walkthrough() {
    let mut catalog = Catalog::new();
    for product in seed() {
        catalog.add(product).unwrap();
    }
    assert_eq!(catalog.len(), 10);

    // Partial updates: one field, the other field, then both at once.
    catalog
        .update(
            "Mouse",
            ProductPatch {
                quantity: Some(95),
                ..ProductPatch::default()
            },
        )
        .unwrap();
    catalog
        .update(
            "Monitor",
            ProductPatch {
                price: Some(280.00),
                ..ProductPatch::default()
            },
        )
        .unwrap();
    catalog
        .update(
            "Cargador",
            ProductPatch {
                price: Some(18.00),
                quantity: Some(160),
            },
        )
        .unwrap();

    let found = catalog.find("Auriculares").expect("Auriculares is present");
    assert_eq!(found.category(), "Audio");
    assert_eq!(found.price(), 60.00);

    let removed = catalog.remove("Laptop").unwrap();
    assert_eq!(removed.name(), "Laptop");
    catalog.remove("Silla Gamer").unwrap();

    assert_eq!(catalog.len(), 8);
    let names: Vec<&str> = catalog.iter().map(Product::name).collect();
    assert_eq!(
        names,
        [
            "Mouse",
            "Teclado",
            "Monitor",
            "Impresora",
            "Cámara",
            "Auriculares",
            "Smartphone",
            "Cargador",
        ]
    );

    assert_eq!(catalog.find("Mouse").unwrap().quantity(), 95);
    assert_eq!(catalog.find("Monitor").unwrap().price(), 280.00);
    let cargador = catalog.find("Cargador").unwrap();
    assert_eq!(cargador.price(), 18.00);
    assert_eq!(cargador.quantity(), 160);
}

#[test]
fn walkthrough_error_paths_leave_the_catalog_intact() {
    let mut catalog = Catalog::new();
    for product in seed() {
        catalog.add(product).unwrap();
    }

    assert_eq!(
        catalog.add(Product::new("Mouse", "Oficina", 1.0, 1)),
        Err(CatalogError::DuplicateName("Mouse".to_string()))
    );
    assert_eq!(
        catalog.update(
            "Ghost",
            ProductPatch {
                price: Some(10.0),
                ..ProductPatch::default()
            },
        ),
        Err(CatalogError::NotFound("Ghost".to_string()))
    );
    assert_eq!(
        catalog.remove("Ghost"),
        Err(CatalogError::NotFound("Ghost".to_string()))
    );

    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.find("Mouse").unwrap().category(), "Accesorios");
}
