//! End-to-end scenarios against a file-backed store

use rust_decimal::Decimal;
use shared::models::{MenuCategoryCreate, MenuItemCreate, RequestKind, RequestStatus};
use shared::ErrorCode;
use std::path::Path;
use std::sync::Arc;
use table_service::repository::Repository;
use table_service::seed::initialize_demo_data;
use table_service::{
    LocalStorage, LogNotifier, RedbBackend, Repositories, RestaurantContext, SequentialIdGenerator,
};

fn open(path: &Path) -> Repositories {
    let backend = RedbBackend::open(path).unwrap();
    Repositories::new(LocalStorage::new(Arc::new(backend), "tablewave_"))
}

fn context(repos: Repositories) -> RestaurantContext {
    RestaurantContext::load(
        repos,
        Arc::new(SequentialIdGenerator::new("t")),
        Arc::new(LogNotifier),
    )
}

#[test]
fn scenario_seed_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let repos = open(&dir.path().join("store.redb"));

    assert!(initialize_demo_data(&repos).unwrap());
    assert!(!initialize_demo_data(&repos).unwrap());

    let restaurants = repos.restaurant.find_all();
    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].name, "Bella Cucina");
}

#[test]
fn scenario_waiter_call_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.redb");

    let request_id = {
        let mut ctx = context(open(&path));
        let request = ctx.request_waiter(5, RequestKind::Bill, None, None).unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.kind, RequestKind::Bill);
        assert_eq!(request.table_id, "5");
        assert!(request.completed_at.is_none());
        request.id
    };

    let mut ctx = context(open(&path));
    assert_eq!(ctx.active_requests().len(), 1);

    ctx.update_request_status(&request_id, RequestStatus::Acknowledged)
        .unwrap();
    let done = ctx
        .update_request_status(&request_id, RequestStatus::Completed)
        .unwrap();
    assert_eq!(done.status, RequestStatus::Completed);
    assert!(done.completed_at.unwrap() >= done.created_at);

    let err = ctx
        .update_request_status(&request_id, RequestStatus::Pending)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RequestAlreadyCompleted);
}

#[test]
fn scenario_default_image_and_protected_category() {
    let dir = tempfile::tempdir().unwrap();
    let repos = open(&dir.path().join("store.redb"));
    let mut ctx = context(repos);

    let desserts = ctx
        .add_category(MenuCategoryCreate {
            name: "Desserts".into(),
            description: None,
            sort_order: None,
        })
        .unwrap();
    let item = ctx
        .add_menu_item(MenuItemCreate {
            name: "Gelato".into(),
            price: Decimal::new(450, 2),
            description: String::new(),
            category: desserts.id.clone(),
            image: None,
            available: None,
        })
        .unwrap();
    let stored = ctx.repositories().menu_items.find_by_id(&item.id).unwrap();
    assert!(stored.image.is_some_and(|i| !i.is_empty()));

    let err = ctx.delete_category(&desserts.id).unwrap_err();
    assert_eq!(err.code, ErrorCode::CategoryHasItems);
    assert!(
        ctx.repositories()
            .categories
            .find_all()
            .iter()
            .any(|c| c.id == desserts.id)
    );
}
