//! The outlet record tree returned by the mock endpoint.
//!
//! Field names serialize in camelCase to match the published JSON contract.
//! Timestamps are RFC 3339 strings.

mod enums;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use enums::{
    ActionStatus, ActionType, AssetStatus, AssetType, ChecklistCategory, ChecklistStatus,
    ContactType, CreditStatus, CustomerSegment, DeliveryStatus, MaintenanceType, NewsSource,
    NewsType, NoteType, OrderStatus, OutletStatus, OutletType, PaymentMethod, PaymentStatus,
    Priority, VisitStatus, VisitType,
};

/// Response envelope: one entry per requested outlet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletDetailsResponse {
    pub details: Vec<Outlet>,
}

/// A retail location with its nested history. Root of the record tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outlet {
    pub outlet_id: String,
    pub name: String,
    /// Store code, e.g. `"ST-QX-042"`.
    pub code: String,
    pub thumbnail: String,
    #[serde(rename = "type")]
    pub outlet_type: OutletType,
    pub status: OutletStatus,
    pub location: Location,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub contact_points: Vec<ContactPoint>,
    pub visit_history: Vec<Visit>,
    pub order_history: Vec<Order>,
    pub statistics: OutletStatistics,
    pub outlets_nearby: Vec<OutletNearby>,
    pub notes: Vec<Note>,
    pub asset_list: Vec<Asset>,
    pub checklist: Vec<ChecklistItem>,
    pub news: Vec<News>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub contact_id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub visit_id: String,
    pub sales_rep_id: String,
    pub sales_rep_name: String,
    pub visit_date: DateTime<Utc>,
    pub visit_type: VisitType,
    pub visit_status: VisitStatus,
    pub purpose: String,
    pub summary: String,
    pub products_discussed: Vec<String>,
    pub actions_taken: Vec<VisitAction>,
    pub attachments: Vec<String>,
    pub duration_seconds: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitAction {
    pub action_id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub status: ActionStatus,
    pub due_date: DateTime<Utc>,
}

/// A sales order. `total_amount` is always the sum of the items' `total_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub order_number: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub currency: String,
    pub items: Vec<OrderItem>,
    pub payment_info: PaymentInfo,
    pub delivery_info: DeliveryInfo,
    pub sales_rep_id: String,
    pub sales_rep_name: String,
    pub delivery_date: DateTime<Utc>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub quantity: i32,
    pub unit_price: f64,
    /// `quantity * unit_price - discount_amount`.
    pub total_price: f64,
    pub discount_percentage: f64,
    pub discount_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
    pub amount_paid: f64,
    pub amount_due: f64,
    pub reference_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    pub delivery_address: String,
    pub scheduled_date: DateTime<Utc>,
    pub actual_date: DateTime<Utc>,
    pub status: DeliveryStatus,
    pub delivery_notes: String,
    pub tracking_number: String,
}

/// Aggregates over the outlet's generated orders and visits.
///
/// The YTD counts and revenue are exact; the last-year and growth figures are
/// plausible display values only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletStatistics {
    pub total_revenue_ytd: f64,
    pub total_revenue_last_year: f64,
    pub average_order_value: f64,
    pub total_orders_ytd: i32,
    pub total_orders_last_year: i32,
    pub total_visits_ytd: i32,
    pub revenue_growth_percentage: f64,
    pub days_since_last_order: i32,
    pub days_since_last_visit: i32,
    pub top_products: Vec<ProductStatistics>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub segment: CustomerSegment,
    pub credit_info: CreditInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStatistics {
    pub product_id: String,
    pub product_name: String,
    pub quantity_sold: i32,
    pub revenue: f64,
    pub orders_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: i32,
    pub revenue: f64,
    pub orders_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditInfo {
    pub credit_limit: f64,
    pub credit_used: f64,
    pub credit_available: f64,
    pub payment_terms_days: i32,
    pub status: CreditStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletNearby {
    pub outlet_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub outlet_type: OutletType,
    pub distance_km: f64,
    pub location: Location,
    pub is_competitor: bool,
    pub relationship: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_private: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub asset_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub model: String,
    pub serial_number: String,
    pub status: AssetStatus,
    pub installation_date: DateTime<Utc>,
    pub last_maintenance_date: DateTime<Utc>,
    pub next_maintenance_date: DateTime<Utc>,
    pub location_details: String,
    pub condition: String,
    pub maintenance_history: Vec<AssetMaintenance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMaintenance {
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    pub description: String,
    pub technician: String,
    pub cost: f64,
}

/// A task assigned to the outlet.
///
/// `status` is derived from the completion flag and the due date, and
/// `completed_date`/`completed_by` are present only when the item is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub item_id: String,
    pub title: String,
    pub description: String,
    pub category: ChecklistCategory,
    pub status: ChecklistStatus,
    pub priority: Priority,
    pub due_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    pub assigned_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub news_id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub news_type: NewsType,
    pub source: NewsSource,
    pub published_date: DateTime<Utc>,
    pub author: String,
    pub url: String,
    pub tags: Vec<String>,
    pub is_important: bool,
}

impl Order {
    /// Sum of the line totals. Equals `total_amount` for every generated order.
    #[must_use]
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(total_price: f64) -> OrderItem {
        OrderItem {
            product_id: "prod-001".to_string(),
            product_name: "Premium Cola 24-pack".to_string(),
            sku: "ABC-001".to_string(),
            quantity: 2,
            unit_price: 10.0,
            total_price,
            discount_percentage: 0.0,
            discount_amount: 0.0,
        }
    }

    #[test]
    fn checklist_item_omits_absent_completion_fields() {
        let item = ChecklistItem {
            item_id: "check-001".to_string(),
            title: "Inventory Check".to_string(),
            description: "Checklist item 1 description".to_string(),
            category: ChecklistCategory::Inventory,
            status: ChecklistStatus::Pending,
            priority: Priority::Low,
            due_date: Utc::now(),
            completed_date: None,
            assigned_to: "rep-001".to_string(),
            completed_by: None,
            notes: "Standard procedure".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["itemId"], "check-001");
        assert_eq!(json["status"], "CHECKLIST_STATUS_PENDING");
        assert!(json.get("completedDate").is_none());
        assert!(json.get("completedBy").is_none());
    }

    #[test]
    fn items_total_sums_line_totals() {
        let now = Utc::now();
        let order = Order {
            order_id: "order-001".to_string(),
            order_number: "ORD-2026-000001".to_string(),
            order_date: now,
            status: OrderStatus::Confirmed,
            total_amount: 30.0,
            currency: "USD".to_string(),
            items: vec![sample_item(10.0), sample_item(20.0)],
            payment_info: PaymentInfo {
                method: PaymentMethod::Cash,
                status: PaymentStatus::Paid,
                payment_date: now,
                amount_paid: 30.0,
                amount_due: 0.0,
                reference_number: "PAY-2026-000001".to_string(),
            },
            delivery_info: DeliveryInfo {
                delivery_address: "1 Main Street".to_string(),
                scheduled_date: now,
                actual_date: now,
                status: DeliveryStatus::Delivered,
                delivery_notes: "Delivery completed successfully".to_string(),
                tracking_number: "TRK-2026-000001".to_string(),
            },
            sales_rep_id: "rep-001".to_string(),
            sales_rep_name: "Mike Wilson".to_string(),
            delivery_date: now,
            notes: "Standard delivery".to_string(),
        };
        assert!((order.items_total() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn location_uses_camel_case_keys() {
        let location = Location {
            postal_code: "01234".to_string(),
            ..Location::default()
        };
        let json = serde_json::to_string(&location).expect("serialize");
        assert!(json.contains("\"postalCode\":\"01234\""));
    }
}
