// Customer menu visibility
// Filters categories and items by the resolved period, the veg toggle, and an
// optional search term, grouping items per category for rendering.

use serde::{Deserialize, Serialize};

use crate::model::{Category, DashboardData, MenuItem, ResolvedPeriod, WindowCategory};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VegFilter {
    #[default]
    All,
    Veg,
    Nonveg,
}

#[derive(Debug, Clone)]
pub struct MenuFilter {
    pub period: ResolvedPeriod,
    pub veg: VegFilter,
    pub search: Option<String>,
}

impl MenuFilter {
    pub fn for_period(period: ResolvedPeriod) -> Self {
        Self {
            period,
            veg: VegFilter::All,
            search: None,
        }
    }

    pub fn with_veg(mut self, veg: VegFilter) -> Self {
        self.veg = veg;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// One visible category with its visible items, in display order.
#[derive(Debug, Clone)]
pub struct CategorySection<'a> {
    pub category: &'a Category,
    pub items: Vec<&'a MenuItem>,
}

/// Whether any of the declared availability categories buckets into the
/// selected period. Allday availability matches any open period.
fn available_in(times: &[WindowCategory], period: ResolvedPeriod) -> bool {
    if period == ResolvedPeriod::Closed {
        return false;
    }
    times
        .iter()
        .any(|category| category.is_all_day() || category.bucket() == period)
}

fn matches_veg(item: &MenuItem, veg: VegFilter) -> bool {
    match veg {
        VegFilter::All => true,
        VegFilter::Veg => item.is_veg,
        VegFilter::Nonveg => !item.is_veg,
    }
}

fn matches_search(item: &MenuItem, term: Option<&str>) -> bool {
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        return true;
    };
    let needle = term.to_lowercase();
    item.name.to_lowercase().contains(&needle)
        || item
            .name_tamil
            .as_deref()
            .is_some_and(|name| name.contains(term))
        || item
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&needle))
}

pub fn visible_categories<'a>(
    categories: &'a [Category],
    period: ResolvedPeriod,
) -> Vec<&'a Category> {
    let mut visible: Vec<&Category> = categories
        .iter()
        .filter(|category| available_in(&category.available_times, period))
        .collect();
    visible.sort_by_key(|category| category.display_order);
    visible
}

pub fn filter_items<'a>(items: &'a [MenuItem], filter: &MenuFilter) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| available_in(&item.available_times, filter.period))
        .filter(|item| matches_veg(item, filter.veg))
        .filter(|item| matches_search(item, filter.search.as_deref()))
        .collect()
}

/// The visible menu: each visible category with its visible items, ordered by
/// display order. Categories whose items are all filtered out still appear,
/// as they do on the customer page.
pub fn menu_sections<'a>(data: &'a DashboardData, filter: &MenuFilter) -> Vec<CategorySection<'a>> {
    let visible_items = filter_items(&data.items, filter);

    visible_categories(&data.categories, filter.period)
        .into_iter()
        .map(|category| {
            let mut items: Vec<&MenuItem> = visible_items
                .iter()
                .copied()
                .filter(|item| item.category_id == category.id)
                .collect();
            items.sort_by_key(|item| (item.display_order.unwrap_or(i32::MAX), item.id));
            CategorySection { category, items }
        })
        .collect()
}
