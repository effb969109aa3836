use serde::{Deserialize, Serialize};

use crate::model::restaurant::Restaurant;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemSettings {
    pub trial_duration_days: u32,
    pub basic_plan_image_limit: u32,
    pub pro_plan_image_limit: u32,
    pub premium_plan_image_limit: u32,
    pub total_restaurants: u32,
    pub active_subscriptions: u32,
    pub trial_users: u32,
    pub expired_users: u32,
    pub total_revenue: String,
    pub monthly_revenue: String,
}

/// Back-office view over the whole fleet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminData {
    pub restaurants: Vec<Restaurant>,
    pub system_settings: SystemSettings,
}
