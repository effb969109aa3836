// Fleet filtering and stat derivations for the two dashboards.

use serde::{Deserialize, Serialize};

use crate::model::{DashboardData, MenuItem, PlanType, Restaurant, SubscriptionStatus};

/// Back-office list filters. Empty status/plan sets mean "no restriction".
#[derive(Debug, Clone, Default)]
pub struct FleetFilter {
    pub statuses: Vec<SubscriptionStatus>,
    pub plans: Vec<PlanType>,
    pub views_min: u64,
    pub views_max: Option<u64>,
    pub search: Option<String>,
}

pub fn filter_fleet<'a>(restaurants: &'a [Restaurant], filter: &FleetFilter) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| {
            filter.statuses.is_empty() || filter.statuses.contains(&restaurant.subscription_status)
        })
        .filter(|restaurant| filter.plans.is_empty() || filter.plans.contains(&restaurant.plan_type))
        .filter(|restaurant| restaurant.total_views >= filter.views_min)
        .filter(|restaurant| {
            filter
                .views_max
                .map_or(true, |max| restaurant.total_views <= max)
        })
        .filter(|restaurant| matches_fleet_search(restaurant, filter.search.as_deref()))
        .collect()
}

fn matches_fleet_search(restaurant: &Restaurant, term: Option<&str>) -> bool {
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        return true;
    };
    let needle = term.to_lowercase();
    restaurant.name.to_lowercase().contains(&needle)
        || restaurant
            .owner_name
            .as_deref()
            .is_some_and(|owner| owner.to_lowercase().contains(&needle))
        || restaurant
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FleetStats {
    pub total: u32,
    pub trial: u32,
    pub active: u32,
    pub expired: u32,
    pub suspended: u32,
    pub total_views: u64,
}

pub fn fleet_stats(restaurants: &[Restaurant]) -> FleetStats {
    let mut stats = FleetStats {
        total: restaurants.len() as u32,
        trial: 0,
        active: 0,
        expired: 0,
        suspended: 0,
        total_views: 0,
    };
    for restaurant in restaurants {
        match restaurant.subscription_status {
            SubscriptionStatus::Trial => stats.trial += 1,
            SubscriptionStatus::Active => stats.active += 1,
            SubscriptionStatus::Expired => stats.expired += 1,
            SubscriptionStatus::Suspended => stats.suspended += 1,
        }
        stats.total_views += restaurant.total_views;
    }
    stats
}

/// Owner-dashboard headline numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_categories: u32,
    pub total_items: u32,
    pub total_views: u64,
    pub image_uploads_used: u32,
    pub image_upload_limit: u32,
}

pub fn dashboard_stats(data: &DashboardData) -> DashboardStats {
    DashboardStats {
        total_categories: data.categories.len() as u32,
        total_items: data.items.len() as u32,
        total_views: data.items.iter().map(|item| item.view_count).sum(),
        image_uploads_used: data.restaurant.image_upload_count,
        image_upload_limit: data.restaurant.image_upload_limit,
    }
}

/// Most-viewed items first, for the analytics panel.
pub fn top_items_by_views(items: &[MenuItem], limit: usize) -> Vec<&MenuItem> {
    let mut ranked: Vec<&MenuItem> = items.iter().collect();
    ranked.sort_by(|a, b| b.view_count.cmp(&a.view_count).then(a.id.cmp(&b.id)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{default_admin_data, default_dashboard_data};

    #[test]
    fn fleet_stats_count_by_status() {
        let admin = default_admin_data();
        let stats = fleet_stats(&admin.restaurants);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.trial, 1);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.suspended, 0);
    }

    #[test]
    fn fleet_filter_by_status_and_plan() {
        let admin = default_admin_data();
        let filter = FleetFilter {
            statuses: vec![SubscriptionStatus::Active],
            plans: vec![PlanType::Premium],
            ..FleetFilter::default()
        };
        let matched = filter_fleet(&admin.restaurants, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Sangeetha Restaurant");
    }

    #[test]
    fn fleet_filter_by_views_range_and_search() {
        let admin = default_admin_data();
        let filter = FleetFilter {
            views_min: 1000,
            views_max: Some(4000),
            ..FleetFilter::default()
        };
        assert_eq!(filter_fleet(&admin.restaurants, &filter).len(), 2);

        let search = FleetFilter {
            search: Some("murugan".to_string()),
            ..FleetFilter::default()
        };
        let matched = filter_fleet(&admin.restaurants, &search);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Anjappar");
    }

    #[test]
    fn dashboard_stats_sum_item_views() {
        let data = default_dashboard_data();
        let stats = dashboard_stats(&data);
        assert_eq!(stats.total_categories, 3);
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.total_views, 245 + 189 + 156);
    }

    #[test]
    fn top_items_rank_by_view_count() {
        let data = default_dashboard_data();
        let top = top_items_by_views(&data.items, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Masala Dosa");
        assert_eq!(top[1].name, "Idli (3 pcs)");
    }
}
