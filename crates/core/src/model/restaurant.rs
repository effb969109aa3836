use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::time_window::{LegacyTimings, TimeWindow};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Trial,
    Active,
    Expired,
    Suspended,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Basic,
    Pro,
    Premium,
}

impl PlanType {
    /// Image uploads included with each plan.
    pub fn image_upload_limit(&self) -> u32 {
        match self {
            PlanType::Basic => 20,
            PlanType::Pro => 50,
            PlanType::Premium => 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub name_tamil: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_tamil: Option<String>,
    pub subscription_status: SubscriptionStatus,
    pub plan_type: PlanType,
    #[serde(default)]
    pub trial_start_date: Option<String>,
    #[serde(default)]
    pub trial_end_date: Option<String>,
    #[serde(default)]
    pub subscription_end_date: Option<String>,
    pub image_upload_count: u32,
    pub image_upload_limit: u32,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub menu_template: Option<String>,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub time_slots: Vec<TimeWindow>,
    #[serde(default)]
    pub timings: Option<LegacyTimings>,
    #[serde(default)]
    pub total_categories: u32,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Restaurant {
    pub fn can_upload_image(&self) -> bool {
        self.image_upload_count < self.image_upload_limit
    }
}
