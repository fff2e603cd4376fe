//! End-to-end catalog behaviour through the envelope API, in-memory store

use std::sync::Arc;

use rust_decimal::Decimal;
use seller_catalog::db::StoreOp;
use seller_catalog::{CatalogState, Config, InMemoryDocumentStore, ProductService};
use serde_json::json;
use shared::models::{Product, ProductCreate, ProductUpdate, StoreInfo};
use shared::types::{PRODUCTS_COLLECTION, SELLERS_COLLECTION};

fn setup() -> (InMemoryDocumentStore, ProductService) {
    let store = InMemoryDocumentStore::new();
    let config = Config::with_overrides("unused", &["Elektronik", "Fashion"]);
    let state = CatalogState::with_store(config, Arc::new(store.clone()));
    (store, state.products)
}

fn info(store_name: &str, user_name: &str) -> StoreInfo {
    StoreInfo {
        user_name: user_name.into(),
        store_name: store_name.into(),
        city: "Surabaya".into(),
        address: "Jl. Tunjungan 1".into(),
        phone: "031".into(),
    }
}

fn item(name: &str, description: &str) -> ProductCreate {
    ProductCreate {
        name: name.into(),
        description: description.into(),
        price: Decimal::new(25000, 0),
        stock: 3,
        category: "Elektronik".into(),
        images: vec!["img/1.jpg".into()],
        variants: vec![],
    }
}

async fn create(service: &ProductService, seller: &str, data: ProductCreate) -> Product {
    service
        .create_product(data, seller, &info("", "Budi"))
        .await
        .into_result()
        .unwrap()
}

/// Raw document insert, for data written by older app versions
fn insert_raw(store: &InMemoryDocumentStore, id: &str, value: serde_json::Value) {
    store.insert_with_id(PRODUCTS_COLLECTION, id, value.as_object().cloned().unwrap());
}

#[tokio::test]
async fn created_product_gets_derived_store_name() {
    let (_, service) = setup();

    let product = create(&service, "s1", item("Phone Charger", "")).await;
    assert_eq!(product.store.store_name, "Toko Budi");

    let anonymous = service
        .create_product(item("Kabel", ""), "s1", &info("", ""))
        .await
        .into_result()
        .unwrap();
    assert_eq!(anonymous.store.store_name, "Toko Online");
}

#[tokio::test]
async fn envelope_shapes() {
    let (_, service) = setup();

    let ok = service.get_all_products().await;
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json, json!({ "success": true, "data": [] }));

    let missing = service.get_product("ghost").await;
    let json = serde_json::to_value(&missing).unwrap();
    assert_eq!(json, json!({ "success": false, "error": "Product not found" }));
}

#[tokio::test]
async fn validation_message_reaches_caller() {
    let (store, service) = setup();
    let mut data = item("Phone Charger", "");
    data.price = Decimal::new(-1, 0);

    let resp = service.create_product(data, "s1", &info("", "")).await;

    assert!(!resp.success);
    assert!(resp.error.unwrap().to_lowercase().contains("price"));
    assert!(store.is_empty(PRODUCTS_COLLECTION));
}

#[tokio::test]
async fn database_failure_returns_generic_message() {
    let (store, service) = setup();
    store.fail_on(StoreOp::List);

    let resp = service.get_all_products().await;

    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("Failed to load products"));
}

#[tokio::test]
async fn inactive_products_never_listed() {
    let (_, service) = setup();
    let visible = create(&service, "s1", item("Phone Charger", "")).await;
    let hidden = create(&service, "s1", item("Phone Case", "")).await;
    service
        .set_product_active(hidden.id_or_empty(), false)
        .await
        .into_result()
        .unwrap();

    let by_seller = service.get_seller_products("s1").await.into_result().unwrap();
    let all = service.get_all_products().await.into_result().unwrap();
    let by_category = service
        .get_products_by_category("Elektronik")
        .await
        .into_result()
        .unwrap();
    let found = service.search_products("phone").await.into_result().unwrap();

    for list in [&by_seller, &all, &by_category, &found] {
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, visible.id);
    }
}

#[tokio::test]
async fn seller_listing_is_subset_of_all() {
    let (_, service) = setup();
    create(&service, "s1", item("A", "")).await;
    create(&service, "s1", item("B", "")).await;
    create(&service, "s2", item("C", "")).await;

    let mine = service.get_seller_products("s1").await.into_result().unwrap();
    let all = service.get_all_products().await.into_result().unwrap();

    assert_eq!(mine.len(), 2);
    assert_eq!(all.len(), 3);
    for product in &mine {
        assert!(all.iter().any(|p| p.id == product.id));
    }
}

#[tokio::test]
async fn legacy_documents_sort_and_list_leniently() {
    let (store, service) = setup();
    insert_raw(&store, "undated", json!({ "seller_id": "s1", "name": "Lama", "is_active": null }));
    insert_raw(&store, "string-date", json!({
        "seller_id": "s1",
        "name": "Tengah",
        "created_at": "2024-01-01T00:00:00Z",
    }));
    insert_raw(&store, "millis", json!({
        "seller_id": "s1",
        "name": "Baru",
        "created_at": 1_800_000_000_000_i64,
    }));

    let all = service.get_all_products().await.into_result().unwrap();
    let ids: Vec<_> = all.iter().map(|p| p.id_or_empty()).collect();
    assert_eq!(ids, vec!["millis", "string-date", "undated"]);
}

#[tokio::test]
async fn name_match_ranks_above_description_match() {
    let (_, service) = setup();
    let charger = create(&service, "s1", item("Phone Charger", "")).await;
    let cable = create(&service, "s1", item("USB Cable", "works with any phone")).await;
    create(&service, "s1", item("Kaos", "")).await;

    let found = service.search_products("phone").await.into_result().unwrap();

    let ids: Vec<_> = found.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![charger.id, cable.id]);
}

#[tokio::test]
async fn reduce_stock_clamps_at_zero_and_counts_sold() {
    let (_, service) = setup();
    let product = create(&service, "s1", item("Phone Charger", "")).await;

    let resp = service.reduce_stock(product.id_or_empty(), 5, None).await;
    assert!(resp.success);

    let after = service.get_product(product.id_or_empty()).await.into_result().unwrap();
    assert_eq!(after.stock, 0);
    assert_eq!(after.sold, 5);
}

#[tokio::test]
async fn update_missing_product_does_not_create() {
    let (store, service) = setup();
    let patch = ProductUpdate {
        name: Some("Baru".into()),
        ..Default::default()
    };

    let resp = service.update_product("ghost", patch, &info("", "")).await;

    assert_eq!(resp.error.as_deref(), Some("Product not found"));
    assert!(store.is_empty(PRODUCTS_COLLECTION));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_, service) = setup();
    let product = create(&service, "s1", item("Phone Charger", "")).await;

    assert!(service.delete_product(product.id_or_empty()).await.success);
    assert!(service.delete_product(product.id_or_empty()).await.success);
    assert!(!service.get_product(product.id_or_empty()).await.success);
}

#[tokio::test]
async fn increment_views_swallows_missing_product() {
    let (store, service) = setup();
    let product = create(&service, "s1", item("Phone Charger", "")).await;

    service.increment_views(product.id_or_empty()).await;
    service.increment_views("ghost").await;

    assert_eq!(
        store.peek(PRODUCTS_COLLECTION, product.id_or_empty()).unwrap()["views"],
        1
    );
}

#[tokio::test]
async fn read_repair_fixes_drifted_city_once() {
    let (store, service) = setup();
    store.insert_with_id(
        SELLERS_COLLECTION,
        "s1",
        json!({ "name": "Budi", "store_name": "", "city": "Malang", "address": "Jl. Tunjungan 1", "phone": "031" })
            .as_object()
            .cloned()
            .unwrap(),
    );
    let product = create(&service, "s1", item("Phone Charger", "")).await;
    store.reset_call_counts();

    let fresh = service
        .get_product_with_fresh_seller_info(product.id_or_empty())
        .await
        .into_result()
        .unwrap();

    assert_eq!(fresh.store.store_city, "Malang");
    assert_eq!(store.call_count(StoreOp::Update), 1);

    // second read finds nothing to repair
    service
        .get_product_with_fresh_seller_info(product.id_or_empty())
        .await
        .into_result()
        .unwrap();
    assert_eq!(store.call_count(StoreOp::Update), 1);
}

#[tokio::test]
async fn bulk_sync_with_no_products_issues_no_updates() {
    let (store, service) = setup();

    let result = service
        .bulk_sync_store_info("s1", &info("Toko Baru", "Budi"))
        .await
        .into_result()
        .unwrap();

    assert_eq!(result.updated_count, 0);
    assert_eq!(store.call_count(StoreOp::Update), 0);
}

#[tokio::test]
async fn bulk_sync_partial_failure_reports_generic_error() {
    let (store, service) = setup();
    let ok = create(&service, "s1", item("A", "")).await;
    let bad = create(&service, "s1", item("B", "")).await;
    store.fail_on_document(StoreOp::Update, bad.id_or_empty());

    let resp = service
        .bulk_sync_store_info("s1", &info("Toko Baru", "Budi"))
        .await;

    assert_eq!(resp.error.as_deref(), Some("Failed to sync store info"));
    assert_eq!(
        store.peek(PRODUCTS_COLLECTION, ok.id_or_empty()).unwrap()["store_name"],
        "Toko Baru"
    );
}

#[tokio::test]
async fn seller_stats_reflect_sales() {
    let (_, service) = setup();
    let a = create(&service, "s1", item("A", "")).await;
    create(&service, "s1", item("B", "")).await;
    service.reduce_stock(a.id_or_empty(), 3, None).await;

    let stats = service.get_seller_stats("s1").await.into_result().unwrap();

    assert_eq!(stats.product_count, 2);
    assert_eq!(stats.total_stock, 3);
    assert_eq!(stats.total_sold, 3);
    assert_eq!(stats.out_of_stock, 1);
}

#[tokio::test]
async fn repair_unknown_seller_reports_seller_not_found() {
    let (_, service) = setup();
    let resp = service.repair_seller("nobody").await;
    assert_eq!(resp.error.as_deref(), Some("Seller not found"));
}
