use menucraft_core::model::{Category, TimeWindow, WindowCategory};
use menucraft_core::store::{mutations, JsonFileStore, MenuStore, StoreError};
use tempfile::tempdir;
use uuid::Uuid;

#[test]
fn first_load_seeds_and_subsequent_edits_persist() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let mut data = store.load_dashboard().unwrap();
    assert_eq!(data.categories.len(), 3);

    let beverages = Category {
        id: Uuid::now_v7(),
        name: "Beverages".to_string(),
        name_tamil: None,
        display_order: 4,
        available_times: vec![WindowCategory::Allday],
        default_image: None,
    };
    mutations::upsert_category(&mut data, beverages.clone());
    store.save_dashboard(&data).unwrap();

    let reloaded = store.load_dashboard().unwrap();
    assert_eq!(reloaded.categories.len(), 4);
    assert_eq!(reloaded.restaurant.total_categories, 4);
    assert!(reloaded.categories.iter().any(|c| c.id == beverages.id));
}

#[test]
fn category_cascade_survives_a_round_trip() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let mut data = store.load_dashboard().unwrap();
    let tiffin_id = data.categories[0].id;
    mutations::delete_category(&mut data, tiffin_id).unwrap();
    store.save_dashboard(&data).unwrap();

    let reloaded = store.load_dashboard().unwrap();
    assert!(reloaded.categories.iter().all(|c| c.id != tiffin_id));
    assert!(reloaded.items.iter().all(|i| i.category_id != tiffin_id));
}

#[test]
fn window_edits_persist_in_declaration_order() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let mut data = store.load_dashboard().unwrap();
    let late = TimeWindow::new(WindowCategory::Latenight, "23:30", "02:00");
    mutations::upsert_time_window(&mut data, late.clone());
    store.save_dashboard(&data).unwrap();

    let reloaded = store.load_dashboard().unwrap();
    let slots = &reloaded.restaurant.time_slots;
    assert_eq!(slots.len(), 5);
    assert_eq!(slots[4].id, late.id);
    assert_eq!(slots[0].category, WindowCategory::Breakfast);
}

#[test]
fn deleting_unknown_entities_reports_typed_errors() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let mut data = store.load_dashboard().unwrap();

    let missing = Uuid::now_v7();
    assert!(matches!(
        mutations::delete_item(&mut data, missing),
        Err(StoreError::ItemNotFound { .. })
    ));
    assert!(matches!(
        mutations::delete_time_window(&mut data, missing),
        Err(StoreError::WindowNotFound { .. })
    ));
}

#[test]
fn admin_blob_loads_and_clears() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let admin = store.load_admin().unwrap();
    assert_eq!(admin.restaurants.len(), 4);
    assert_eq!(admin.system_settings.trial_duration_days, 14);

    store.clear().unwrap();
    assert!(!store.admin_path().exists());
}
