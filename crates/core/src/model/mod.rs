pub mod admin;
pub mod menu;
pub mod restaurant;
pub mod time_window;

pub use admin::{AdminData, SystemSettings};
pub use menu::{Advertisement, Category, DashboardData, MenuItem, NutritionFacts};
pub use restaurant::{PlanType, Restaurant, SubscriptionStatus};
pub use time_window::{LegacyTimings, ResolvedPeriod, TimeRange, TimeWindow, WindowCategory};
