// Seed fixtures
// Reproduces the data a fresh install starts with: one demo restaurant with
// categories, items and the default window set, plus the back-office fleet.

use chrono::{Days, Utc};
use uuid::Uuid;

use crate::model::{
    AdminData, Category, DashboardData, MenuItem, PlanType, Restaurant, SubscriptionStatus,
    SystemSettings, TimeWindow, WindowCategory,
};

fn seed_restaurant() -> Restaurant {
    let today = Utc::now().date_naive();
    Restaurant {
        id: Uuid::now_v7(),
        name: "Saravana Bhavan".to_string(),
        name_tamil: Some("சரவணா பவன்".to_string()),
        owner_name: Some("Rajesh Kumar".to_string()),
        phone: Some("+91 98765 43210".to_string()),
        email: Some("owner@restaurant.com".to_string()),
        address: Some("12 Anna Salai, Chennai".to_string()),
        address_tamil: Some("12 அண்ணா சாலை, சென்னை".to_string()),
        subscription_status: SubscriptionStatus::Trial,
        plan_type: PlanType::Basic,
        trial_start_date: Some(today.to_string()),
        trial_end_date: today.checked_add_days(Days::new(7)).map(|d| d.to_string()),
        subscription_end_date: None,
        image_upload_count: 5,
        image_upload_limit: PlanType::Basic.image_upload_limit(),
        primary_color: Some("#f97316".to_string()),
        menu_template: Some("template_1".to_string()),
        banner_image: None,
        time_slots: TimeWindow::defaults(),
        timings: None,
        total_categories: 3,
        total_items: 3,
        total_views: 590,
        created_at: Some(today.to_string()),
    }
}

fn item(
    name: &str,
    name_tamil: &str,
    description: &str,
    price: f64,
    category_id: Uuid,
    available_times: Vec<WindowCategory>,
    view_count: u64,
) -> MenuItem {
    MenuItem {
        id: Uuid::now_v7(),
        name: name.to_string(),
        name_tamil: Some(name_tamil.to_string()),
        description: Some(description.to_string()),
        price,
        category_id,
        display_order: None,
        is_chefs_special: false,
        is_todays_special: false,
        is_seasonal: false,
        is_veg: true,
        spice_level: None,
        available_times,
        view_count,
        image_url: None,
        ingredients: Vec::new(),
        nutrition_facts: None,
        allergens: Vec::new(),
        serving_size: None,
        servings: None,
        fun_fact: None,
        preparation_time_minutes: None,
    }
}

/// Dashboard data a restaurant starts with before the owner edits anything.
pub fn default_dashboard_data() -> DashboardData {
    let tiffin = Category {
        id: Uuid::now_v7(),
        name: "Tiffin Items".to_string(),
        name_tamil: Some("டிபன்".to_string()),
        display_order: 1,
        available_times: vec![WindowCategory::Breakfast, WindowCategory::Dinner],
        default_image: None,
    };
    let rice = Category {
        id: Uuid::now_v7(),
        name: "Rice Items".to_string(),
        name_tamil: Some("சாத வகைகள்".to_string()),
        display_order: 2,
        available_times: vec![WindowCategory::Lunch, WindowCategory::Dinner],
        default_image: None,
    };
    let sweets = Category {
        id: Uuid::now_v7(),
        name: "Sweets".to_string(),
        name_tamil: Some("இனிப்புகள்".to_string()),
        display_order: 3,
        available_times: vec![
            WindowCategory::Lunch,
            WindowCategory::Dinner,
            WindowCategory::Snacks,
        ],
        default_image: None,
    };

    let mut dosa = item(
        "Masala Dosa",
        "மசாலா தோசை",
        "Crispy rice crepe filled with spiced potato",
        80.0,
        tiffin.id,
        vec![WindowCategory::Breakfast, WindowCategory::Dinner],
        245,
    );
    dosa.is_chefs_special = true;
    dosa.spice_level = Some(2);

    let mut idli = item(
        "Idli (3 pcs)",
        "இட்லி",
        "Soft steamed rice cakes",
        50.0,
        tiffin.id,
        vec![WindowCategory::Breakfast],
        189,
    );
    idli.is_todays_special = true;

    let sambar_rice = item(
        "Sambar Rice",
        "சாம்பார் சாதம்",
        "Rice mixed with lentil curry",
        100.0,
        rice.id,
        vec![WindowCategory::Lunch, WindowCategory::Dinner],
        156,
    );

    DashboardData {
        restaurant: seed_restaurant(),
        categories: vec![tiffin, rice, sweets],
        items: vec![dosa, idli, sambar_rice],
        advertisements: Vec::new(),
    }
}

fn fleet_restaurant(
    name: &str,
    owner: &str,
    phone: &str,
    email: &str,
    status: SubscriptionStatus,
    plan: PlanType,
    uploads: u32,
    categories: u32,
    items: u32,
    views: u64,
    created: &str,
) -> Restaurant {
    Restaurant {
        id: Uuid::now_v7(),
        name: name.to_string(),
        name_tamil: None,
        owner_name: Some(owner.to_string()),
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
        address: None,
        address_tamil: None,
        subscription_status: status,
        plan_type: plan,
        trial_start_date: None,
        trial_end_date: None,
        subscription_end_date: None,
        image_upload_count: uploads,
        image_upload_limit: plan.image_upload_limit(),
        primary_color: None,
        menu_template: None,
        banner_image: None,
        time_slots: Vec::new(),
        timings: None,
        total_categories: categories,
        total_items: items,
        total_views: views,
        created_at: Some(created.to_string()),
    }
}

/// The back-office fleet a fresh install reports on.
pub fn default_admin_data() -> AdminData {
    let restaurants = vec![
        fleet_restaurant(
            "Saravana Bhavan",
            "Rajesh Kumar",
            "+91 98765 43210",
            "rajesh@saravanabhavan.com",
            SubscriptionStatus::Trial,
            PlanType::Basic,
            8,
            5,
            32,
            1247,
            "2024-10-01",
        ),
        fleet_restaurant(
            "Anjappar",
            "Murugan P",
            "+91 98765 43211",
            "murugan@anjappar.com",
            SubscriptionStatus::Active,
            PlanType::Pro,
            35,
            8,
            67,
            3421,
            "2024-09-15",
        ),
        fleet_restaurant(
            "Adyar Ananda Bhavan",
            "Venkat S",
            "+91 98765 43212",
            "venkat@a2b.com",
            SubscriptionStatus::Expired,
            PlanType::Basic,
            12,
            4,
            28,
            892,
            "2024-09-01",
        ),
        fleet_restaurant(
            "Sangeetha Restaurant",
            "Lakshmi Devi",
            "+91 98765 43213",
            "lakshmi@sangeetha.com",
            SubscriptionStatus::Active,
            PlanType::Premium,
            78,
            12,
            145,
            8934,
            "2024-08-10",
        ),
    ];

    AdminData {
        restaurants,
        system_settings: SystemSettings {
            trial_duration_days: 14,
            basic_plan_image_limit: PlanType::Basic.image_upload_limit(),
            pro_plan_image_limit: PlanType::Pro.image_upload_limit(),
            premium_plan_image_limit: PlanType::Premium.image_upload_limit(),
            total_restaurants: 127,
            active_subscriptions: 89,
            trial_users: 24,
            expired_users: 14,
            total_revenue: "₹4,52,000".to_string(),
            monthly_revenue: "₹78,500".to_string(),
        },
    }
}
