// Fleet CSV export
// Same column set and order as the back-office export. Fields are quoted when
// they contain separators since this writes real files.

use chrono::NaiveDate;

use crate::model::Restaurant;

const HEADERS: [&str; 10] = [
    "ID", "Name", "Owner", "Email", "Phone", "Status", "Plan", "Items", "Views", "Created",
];

pub fn restaurants_csv(restaurants: &[Restaurant]) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');

    for restaurant in restaurants {
        let status = serde_plain_name(&restaurant.subscription_status);
        let plan = serde_plain_name(&restaurant.plan_type);
        let row = [
            restaurant.id.to_string(),
            restaurant.name.clone(),
            restaurant.owner_name.clone().unwrap_or_default(),
            restaurant.email.clone().unwrap_or_default(),
            restaurant.phone.clone().unwrap_or_default(),
            status,
            plan,
            restaurant.total_items.to_string(),
            restaurant.total_views.to_string(),
            restaurant.created_at.clone().unwrap_or_default(),
        ];
        let encoded: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }

    out
}

/// `menucraft-restaurants-YYYY-MM-DD.csv`, the download name the back office
/// uses.
pub fn default_export_file_name(today: NaiveDate) -> String {
    format!("menucraft-restaurants-{}.csv", today.format("%Y-%m-%d"))
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

fn serde_plain_name<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}
