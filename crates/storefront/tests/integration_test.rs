use pretty_assertions::assert_eq;
use std::sync::Arc;
use store_framework::{Change, FileStorage, MemoryStorage, Storage};
use storefront::catalog::{Catalog, InMemoryCatalog};
use storefront::lifecycle::StorefrontSystem;
use storefront::model::{FilterCriteria, Product, ProductId, SortMode};

fn catalog() -> Arc<InMemoryCatalog> {
    Arc::new(InMemoryCatalog::new(vec![
        Product::new(1, "Leather Backpack", 109.95)
            .with_description("Fits a 15 inch laptop")
            .with_category("men's clothing")
            .with_rating(3.9, 120),
        Product::new(2, "Slim T-Shirt", 22.3)
            .with_category("men's clothing")
            .with_rating(4.1, 259),
        Product::new(5, "Dragon Ring", 9.99)
            .with_category("jewelery")
            .with_rating(4.6, 400),
        Product::new(7, "Desk Lamp", 20.0)
            .with_category("electronics")
            .with_rating(3.3, 203),
    ]))
}

fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().map(|p| p.id.0).collect()
}

async fn product(system: &StorefrontSystem, id: u64) -> Product {
    system
        .catalog
        .get_product(ProductId(id))
        .await
        .expect("Product not in catalog")
}

/// Full end-to-end run with real stores over in-memory storage.
#[tokio::test]
async fn test_full_storefront_flow() {
    let storage = Arc::new(MemoryStorage::new());
    let system = StorefrontSystem::start(catalog(), storage.clone());

    // Browse
    let listing = system
        .browse(&FilterCriteria::default().with_sort(SortMode::PriceLow))
        .await;
    assert_eq!(ids(&listing), vec![5, 7, 2, 1]);

    // Add the lamp three times over
    let lamp = product(&system, 7).await;
    let change = system
        .cart
        .add_to_cart(lamp, 3)
        .await
        .expect("Failed to add to cart");
    assert_eq!(change, Change::Applied);

    let items = system.cart.items().await.expect("Failed to read cart");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), ProductId(7));
    assert_eq!(items[0].quantity, 3);
    assert_eq!(system.cart.total_items().await.unwrap(), 3);
    assert_eq!(system.cart.total_price().await.unwrap(), 60.0);

    // Save the ring, then move it to the cart
    let ring = product(&system, 5).await;
    system
        .wishlist
        .add_to_wishlist(ring)
        .await
        .expect("Failed to add to wishlist");
    let change = system
        .add_wishlist_item_to_cart(ProductId(5))
        .await
        .expect("Failed to move to cart");
    assert_eq!(change, Change::Applied);
    assert!(system.wishlist.is_in_wishlist(ProductId(5)).await.unwrap());
    assert_eq!(system.cart.total_items().await.unwrap(), 4);

    // Product page reflects both stores
    let detail = system
        .product_detail(ProductId(5))
        .await
        .expect("Failed to load detail")
        .expect("Product not found");
    assert!(detail.in_wishlist);
    assert_eq!(detail.in_cart, 1);

    system.shutdown().await.expect("Failed to shut down");

    let stored: serde_json::Value =
        serde_json::from_str(&storage.get("cart").expect("Cart was not persisted")).unwrap();
    assert_eq!(stored[0]["id"], 7);
    assert_eq!(stored[0]["quantity"], 3);
    assert_eq!(stored[1]["id"], 5);
    assert_eq!(stored[1]["quantity"], 1);
}

#[tokio::test]
async fn test_adding_twice_merges_into_one_line() {
    let system = StorefrontSystem::start(catalog(), Arc::new(MemoryStorage::new()));
    let backpack = product(&system, 1).await;

    system.cart.add_to_cart(backpack.clone(), 1).await.unwrap();
    system.cart.add_to_cart(backpack, 1).await.unwrap();

    let items = system.cart.items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
}

#[tokio::test]
async fn test_rejected_cart_updates_change_nothing() {
    let storage = Arc::new(MemoryStorage::new());
    let system = StorefrontSystem::start(catalog(), storage.clone());
    let backpack = product(&system, 1).await;

    system.cart.add_to_cart(backpack.clone(), 2).await.unwrap();
    let persisted = storage.get("cart");

    assert_eq!(
        system.cart.update_quantity(ProductId(1), 0).await.unwrap(),
        Change::Ignored
    );
    assert_eq!(
        system.cart.add_to_cart(backpack, 0).await.unwrap(),
        Change::Ignored
    );
    assert_eq!(
        system.cart.remove_from_cart(ProductId(99)).await.unwrap(),
        Change::Ignored
    );

    assert_eq!(system.cart.total_items().await.unwrap(), 2);
    assert_eq!(storage.get("cart"), persisted);
}

#[tokio::test]
async fn test_wishlist_round() {
    let system = StorefrontSystem::start(catalog(), Arc::new(MemoryStorage::new()));
    let ring = product(&system, 5).await;

    system.wishlist.add_to_wishlist(ring.clone()).await.unwrap();
    assert_eq!(
        system.wishlist.add_to_wishlist(ring.clone()).await.unwrap(),
        Change::Ignored
    );
    assert_eq!(system.wishlist.total_items().await.unwrap(), 1);

    system.wishlist.remove_from_wishlist(ProductId(5)).await.unwrap();
    assert_eq!(system.wishlist.total_items().await.unwrap(), 0);
    assert!(!system.wishlist.is_in_wishlist(ProductId(5)).await.unwrap());

    assert!(system.wishlist.toggle_wishlist(ring.clone()).await.unwrap());
    assert!(!system.wishlist.toggle_wishlist(ring).await.unwrap());
}

#[tokio::test]
async fn test_move_to_cart_ignores_unsaved_products() {
    let system = StorefrontSystem::start(catalog(), Arc::new(MemoryStorage::new()));

    let change = system.add_wishlist_item_to_cart(ProductId(1)).await.unwrap();
    assert_eq!(change, Change::Ignored);
    assert!(system.cart.items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_product_detail_for_unknown_product() {
    let system = StorefrontSystem::start(catalog(), Arc::new(MemoryStorage::new()));
    assert_eq!(system.product_detail(ProductId(404)).await.unwrap(), None);
}

#[tokio::test]
async fn test_state_survives_restart() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

    let system = StorefrontSystem::start(catalog(), storage.clone());
    let lamp = product(&system, 7).await;
    let ring = product(&system, 5).await;
    system.cart.add_to_cart(lamp, 2).await.unwrap();
    system.wishlist.add_to_wishlist(ring).await.unwrap();
    system.shutdown().await.unwrap();

    let system = StorefrontSystem::start(catalog(), storage);
    let items = system.cart.items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].product.title, "Desk Lamp");
    assert!(system.wishlist.is_in_wishlist(ProductId(5)).await.unwrap());
}

#[tokio::test]
async fn test_file_storage_survives_restart() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let system = StorefrontSystem::start(catalog(), Arc::new(FileStorage::new(dir.path())));
    let backpack = product(&system, 1).await;
    system.cart.add_to_cart(backpack.clone(), 1).await.unwrap();
    system.wishlist.add_to_wishlist(backpack).await.unwrap();
    system.shutdown().await.unwrap();

    assert!(dir.path().join("cart.json").exists());
    assert!(dir.path().join("wishlist.json").exists());

    let system = StorefrontSystem::start(catalog(), Arc::new(FileStorage::new(dir.path())));
    assert_eq!(system.cart.total_price().await.unwrap(), 109.95);
    assert_eq!(system.wishlist.total_items().await.unwrap(), 1);
}

#[tokio::test]
async fn test_malformed_cart_resets_to_empty() {
    let storage = Arc::new(MemoryStorage::with_entry("cart", "{\"not\": \"a cart\"}"));
    storage.insert("wishlist", r#"[{"id": 5, "title": "Dragon Ring", "price": 9.99}]"#);

    let system = StorefrontSystem::start(catalog(), storage.clone());
    assert!(system.cart.items().await.unwrap().is_empty());
    assert_eq!(storage.get("cart"), None);

    // The other key is untouched
    assert_eq!(system.wishlist.total_items().await.unwrap(), 1);
}

#[tokio::test]
async fn test_cart_with_duplicate_lines_resets_to_empty() {
    let line = r#"{"id": 7, "title": "Desk Lamp", "price": 20.0, "quantity": 1}"#;
    let storage = Arc::new(MemoryStorage::with_entry("cart", format!("[{line},{line}]")));

    let system = StorefrontSystem::start(catalog(), storage.clone());
    assert_eq!(system.cart.total_items().await.unwrap(), 0);
    assert_eq!(storage.get("cart"), None);
}

#[tokio::test]
async fn test_cart_with_zero_quantity_resets_to_empty() {
    let storage = Arc::new(MemoryStorage::with_entry(
        "cart",
        r#"[{"id": 7, "title": "Desk Lamp", "price": 20.0, "quantity": 0}]"#,
    ));

    let system = StorefrontSystem::start(catalog(), storage);
    assert!(system.cart.items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_wishlist_resets_to_empty() {
    let storage = Arc::new(MemoryStorage::with_entry("wishlist", "not json at all"));

    let system = StorefrontSystem::start(catalog(), storage.clone());
    assert_eq!(system.wishlist.total_items().await.unwrap(), 0);
    assert_eq!(storage.get("wishlist"), None);

    // A fresh mutation writes a valid value again
    let ring = product(&system, 5).await;
    system.wishlist.add_to_wishlist(ring).await.unwrap();
    assert!(storage.get("wishlist").is_some());
}

#[tokio::test]
async fn test_browse_with_filters() {
    let system = StorefrontSystem::start(catalog(), Arc::new(MemoryStorage::new()));

    let criteria = FilterCriteria::default()
        .with_search("LAPTOP")
        .with_category("men's clothing");
    assert_eq!(ids(&system.browse(&criteria).await), vec![1]);

    let criteria = FilterCriteria::default().with_price_range(10.0, 30.0);
    assert_eq!(ids(&system.browse(&criteria).await), vec![7, 2]);

    let criteria = FilterCriteria::default().with_sort(SortMode::Rating);
    assert_eq!(ids(&system.browse(&criteria).await), vec![5, 2, 1, 7]);

    assert_eq!(
        system.categories().await,
        vec!["men's clothing", "jewelery", "electronics"]
    );
}
