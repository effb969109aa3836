// Dashboard mutations
// Pure edits on the dashboard blob, shared by every store backend. Counters
// on the restaurant record are kept in sync here so no caller has to.

use uuid::Uuid;

use crate::model::{Category, DashboardData, MenuItem, TimeWindow};
use crate::store::StoreError;

/// Insert or replace a category by id.
pub fn upsert_category(data: &mut DashboardData, category: Category) {
    match data.categories.iter_mut().find(|c| c.id == category.id) {
        Some(existing) => *existing = category,
        None => data.categories.push(category),
    }
    data.restaurant.total_categories = data.categories.len() as u32;
}

/// Delete a category and every item in it, as the dashboard does.
pub fn delete_category(data: &mut DashboardData, id: Uuid) -> Result<(), StoreError> {
    let before = data.categories.len();
    data.categories.retain(|category| category.id != id);
    if data.categories.len() == before {
        return Err(StoreError::CategoryNotFound { id });
    }

    data.items.retain(|item| item.category_id != id);
    data.restaurant.total_categories = data.categories.len() as u32;
    data.restaurant.total_items = data.items.len() as u32;
    Ok(())
}

/// Insert or replace an item by id. The target category must exist.
pub fn upsert_item(data: &mut DashboardData, item: MenuItem) -> Result<(), StoreError> {
    if !data
        .categories
        .iter()
        .any(|category| category.id == item.category_id)
    {
        return Err(StoreError::CategoryNotFound {
            id: item.category_id,
        });
    }

    match data.items.iter_mut().find(|i| i.id == item.id) {
        Some(existing) => *existing = item,
        None => data.items.push(item),
    }
    data.restaurant.total_items = data.items.len() as u32;
    Ok(())
}

pub fn delete_item(data: &mut DashboardData, id: Uuid) -> Result<(), StoreError> {
    let before = data.items.len();
    data.items.retain(|item| item.id != id);
    if data.items.len() == before {
        return Err(StoreError::ItemNotFound { id });
    }
    data.restaurant.total_items = data.items.len() as u32;
    Ok(())
}

/// Insert or replace a time window by id. Order is preserved; declaration
/// order is the resolver's tie-break.
pub fn upsert_time_window(data: &mut DashboardData, window: TimeWindow) {
    match data
        .restaurant
        .time_slots
        .iter_mut()
        .find(|w| w.id == window.id)
    {
        Some(existing) => *existing = window,
        None => data.restaurant.time_slots.push(window),
    }
}

pub fn delete_time_window(data: &mut DashboardData, id: Uuid) -> Result<(), StoreError> {
    let before = data.restaurant.time_slots.len();
    data.restaurant.time_slots.retain(|window| window.id != id);
    if data.restaurant.time_slots.len() == before {
        return Err(StoreError::WindowNotFound { id });
    }
    Ok(())
}

/// Bump an item's view counter (and the restaurant total) when a customer
/// opens its detail view.
pub fn record_item_view(data: &mut DashboardData, id: Uuid) -> Result<(), StoreError> {
    let item = data
        .items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(StoreError::ItemNotFound { id })?;
    item.view_count += 1;
    data.restaurant.total_views += 1;
    Ok(())
}
