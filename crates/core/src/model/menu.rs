use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::restaurant::Restaurant;
use crate::model::time_window::WindowCategory;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub name_tamil: Option<String>,
    pub display_order: i32,
    pub available_times: Vec<WindowCategory>,
    #[serde(default)]
    pub default_image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionFacts {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
    #[serde(default)]
    pub sugar: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub name_tamil: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Uuid,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub is_chefs_special: bool,
    #[serde(default)]
    pub is_todays_special: bool,
    #[serde(default)]
    pub is_seasonal: bool,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default)]
    pub spice_level: Option<u8>,
    pub available_times: Vec<WindowCategory>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub nutrition_facts: Option<NutritionFacts>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub serving_size: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub fun_fact: Option<String>,
    #[serde(default)]
    pub preparation_time_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advertisement {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub title_tamil: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub subtitle_tamil: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

/// The full per-restaurant blob the owner dashboard edits and the customer
/// menu renders from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub restaurant: Restaurant,
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub advertisements: Vec<Advertisement>,
}
