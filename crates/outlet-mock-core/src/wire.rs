//! Protobuf wire messages for the `application/protobuf` encoding.
//!
//! Field tags follow the declaration order of the record schema. Enumerations
//! travel as their `int32` value, which is how protobuf encodes enum fields.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

use crate::model;

#[derive(Clone, PartialEq, prost::Message)]
pub struct OutletDetailsResponse {
    #[prost(message, repeated, tag = "1")]
    pub details: Vec<OutletDetails>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OutletDetails {
    #[prost(string, tag = "1")]
    pub outlet_id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub code: String,
    #[prost(string, tag = "4")]
    pub thumbnail: String,
    #[prost(int32, tag = "5")]
    pub r#type: i32,
    #[prost(int32, tag = "6")]
    pub status: i32,
    #[prost(message, optional, tag = "7")]
    pub location: Option<Location>,
    #[prost(message, optional, tag = "8")]
    pub created_at: Option<Timestamp>,
    #[prost(message, optional, tag = "9")]
    pub updated_at: Option<Timestamp>,
    #[prost(message, repeated, tag = "10")]
    pub contact_points: Vec<ContactPoint>,
    #[prost(message, repeated, tag = "11")]
    pub visit_history: Vec<Visit>,
    #[prost(message, repeated, tag = "12")]
    pub order_history: Vec<Order>,
    #[prost(message, optional, tag = "13")]
    pub statistics: Option<OutletStatistics>,
    #[prost(message, repeated, tag = "14")]
    pub outlets_nearby: Vec<OutletNearby>,
    #[prost(message, repeated, tag = "15")]
    pub notes: Vec<Note>,
    #[prost(message, repeated, tag = "16")]
    pub asset_list: Vec<Asset>,
    #[prost(message, repeated, tag = "17")]
    pub checklist: Vec<ChecklistItem>,
    #[prost(message, repeated, tag = "18")]
    pub news: Vec<News>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Location {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(string, tag = "2")]
    pub city: String,
    #[prost(string, tag = "3")]
    pub state: String,
    #[prost(string, tag = "4")]
    pub postal_code: String,
    #[prost(string, tag = "5")]
    pub country: String,
    #[prost(double, tag = "6")]
    pub latitude: f64,
    #[prost(double, tag = "7")]
    pub longitude: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ContactPoint {
    #[prost(string, tag = "1")]
    pub contact_id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub role: String,
    #[prost(string, tag = "4")]
    pub phone: String,
    #[prost(string, tag = "5")]
    pub email: String,
    #[prost(int32, tag = "6")]
    pub r#type: i32,
    #[prost(bool, tag = "7")]
    pub is_primary: bool,
    #[prost(message, optional, tag = "8")]
    pub created_at: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Visit {
    #[prost(string, tag = "1")]
    pub visit_id: String,
    #[prost(string, tag = "2")]
    pub sales_rep_id: String,
    #[prost(string, tag = "3")]
    pub sales_rep_name: String,
    #[prost(message, optional, tag = "4")]
    pub visit_date: Option<Timestamp>,
    #[prost(int32, tag = "5")]
    pub visit_type: i32,
    #[prost(int32, tag = "6")]
    pub visit_status: i32,
    #[prost(string, tag = "7")]
    pub purpose: String,
    #[prost(string, tag = "8")]
    pub summary: String,
    #[prost(string, repeated, tag = "9")]
    pub products_discussed: Vec<String>,
    #[prost(message, repeated, tag = "10")]
    pub actions_taken: Vec<VisitAction>,
    #[prost(string, repeated, tag = "11")]
    pub attachments: Vec<String>,
    #[prost(int32, tag = "12")]
    pub duration_seconds: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct VisitAction {
    #[prost(string, tag = "1")]
    pub action_id: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(int32, tag = "3")]
    pub r#type: i32,
    #[prost(int32, tag = "4")]
    pub status: i32,
    #[prost(message, optional, tag = "5")]
    pub due_date: Option<Timestamp>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Order {
    #[prost(string, tag = "1")]
    pub order_id: String,
    #[prost(string, tag = "2")]
    pub order_number: String,
    #[prost(message, optional, tag = "3")]
    pub order_date: Option<Timestamp>,
    #[prost(int32, tag = "4")]
    pub status: i32,
    #[prost(double, tag = "5")]
    pub total_amount: f64,
    #[prost(string, tag = "6")]
    pub currency: String,
    #[prost(message, repeated, tag = "7")]
    pub items: Vec<OrderItem>,
    #[prost(message, optional, tag = "8")]
    pub payment_info: Option<PaymentInfo>,
    #[prost(message, optional, tag = "9")]
    pub delivery_info: Option<DeliveryInfo>,
    #[prost(string, tag = "10")]
    pub sales_rep_id: String,
    #[prost(string, tag = "11")]
    pub sales_rep_name: String,
    #[prost(message, optional, tag = "12")]
    pub delivery_date: Option<Timestamp>,
    #[prost(string, tag = "13")]
    pub notes: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderItem {
    #[prost(string, tag = "1")]
    pub product_id: String,
    #[prost(string, tag = "2")]
    pub product_name: String,
    #[prost(string, tag = "3")]
    pub sku: String,
    #[prost(int32, tag = "4")]
    pub quantity: i32,
    #[prost(double, tag = "5")]
    pub unit_price: f64,
    #[prost(double, tag = "6")]
    pub total_price: f64,
    #[prost(double, tag = "7")]
    pub discount_percentage: f64,
    #[prost(double, tag = "8")]
    pub discount_amount: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PaymentInfo {
    #[prost(int32, tag = "1")]
    pub method: i32,
    #[prost(int32, tag = "2")]
    pub status: i32,
    #[prost(message, optional, tag = "3")]
    pub payment_date: Option<Timestamp>,
    #[prost(double, tag = "4")]
    pub amount_paid: f64,
    #[prost(double, tag = "5")]
    pub amount_due: f64,
    #[prost(string, tag = "6")]
    pub reference_number: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeliveryInfo {
    #[prost(string, tag = "1")]
    pub delivery_address: String,
    #[prost(message, optional, tag = "2")]
    pub scheduled_date: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub actual_date: Option<Timestamp>,
    #[prost(int32, tag = "4")]
    pub status: i32,
    #[prost(string, tag = "5")]
    pub delivery_notes: String,
    #[prost(string, tag = "6")]
    pub tracking_number: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OutletStatistics {
    #[prost(double, tag = "1")]
    pub total_revenue_ytd: f64,
    #[prost(double, tag = "2")]
    pub total_revenue_last_year: f64,
    #[prost(double, tag = "3")]
    pub average_order_value: f64,
    #[prost(int32, tag = "4")]
    pub total_orders_ytd: i32,
    #[prost(int32, tag = "5")]
    pub total_orders_last_year: i32,
    #[prost(int32, tag = "6")]
    pub total_visits_ytd: i32,
    #[prost(double, tag = "7")]
    pub revenue_growth_percentage: f64,
    #[prost(int32, tag = "8")]
    pub days_since_last_order: i32,
    #[prost(int32, tag = "9")]
    pub days_since_last_visit: i32,
    #[prost(message, repeated, tag = "10")]
    pub top_products: Vec<ProductStatistics>,
    #[prost(message, repeated, tag = "11")]
    pub monthly_revenue: Vec<MonthlyRevenue>,
    #[prost(int32, tag = "12")]
    pub segment: i32,
    #[prost(message, optional, tag = "13")]
    pub credit_info: Option<CreditInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProductStatistics {
    #[prost(string, tag = "1")]
    pub product_id: String,
    #[prost(string, tag = "2")]
    pub product_name: String,
    #[prost(int32, tag = "3")]
    pub quantity_sold: i32,
    #[prost(double, tag = "4")]
    pub revenue: f64,
    #[prost(int32, tag = "5")]
    pub orders_count: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MonthlyRevenue {
    #[prost(int32, tag = "1")]
    pub year: i32,
    #[prost(int32, tag = "2")]
    pub month: i32,
    #[prost(double, tag = "3")]
    pub revenue: f64,
    #[prost(int32, tag = "4")]
    pub orders_count: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreditInfo {
    #[prost(double, tag = "1")]
    pub credit_limit: f64,
    #[prost(double, tag = "2")]
    pub credit_used: f64,
    #[prost(double, tag = "3")]
    pub credit_available: f64,
    #[prost(int32, tag = "4")]
    pub payment_terms_days: i32,
    #[prost(int32, tag = "5")]
    pub status: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OutletNearby {
    #[prost(string, tag = "1")]
    pub outlet_id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "3")]
    pub r#type: i32,
    #[prost(double, tag = "4")]
    pub distance_km: f64,
    #[prost(message, optional, tag = "5")]
    pub location: Option<Location>,
    #[prost(bool, tag = "6")]
    pub is_competitor: bool,
    #[prost(string, tag = "7")]
    pub relationship: String,
    #[prost(string, tag = "8")]
    pub thumbnail: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Note {
    #[prost(string, tag = "1")]
    pub note_id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub content: String,
    #[prost(int32, tag = "4")]
    pub r#type: i32,
    #[prost(string, tag = "5")]
    pub created_by: String,
    #[prost(message, optional, tag = "6")]
    pub created_at: Option<Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub updated_at: Option<Timestamp>,
    #[prost(bool, tag = "8")]
    pub is_private: bool,
    #[prost(string, repeated, tag = "9")]
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Asset {
    #[prost(string, tag = "1")]
    pub asset_id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "3")]
    pub r#type: i32,
    #[prost(string, tag = "4")]
    pub model: String,
    #[prost(string, tag = "5")]
    pub serial_number: String,
    #[prost(int32, tag = "6")]
    pub status: i32,
    #[prost(message, optional, tag = "7")]
    pub installation_date: Option<Timestamp>,
    #[prost(message, optional, tag = "8")]
    pub last_maintenance_date: Option<Timestamp>,
    #[prost(message, optional, tag = "9")]
    pub next_maintenance_date: Option<Timestamp>,
    #[prost(string, tag = "10")]
    pub location_details: String,
    #[prost(string, tag = "11")]
    pub condition: String,
    #[prost(message, repeated, tag = "12")]
    pub maintenance_history: Vec<AssetMaintenance>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AssetMaintenance {
    #[prost(message, optional, tag = "1")]
    pub date: Option<Timestamp>,
    #[prost(int32, tag = "2")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub technician: String,
    #[prost(double, tag = "5")]
    pub cost: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ChecklistItem {
    #[prost(string, tag = "1")]
    pub item_id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(int32, tag = "4")]
    pub category: i32,
    #[prost(int32, tag = "5")]
    pub status: i32,
    #[prost(int32, tag = "6")]
    pub priority: i32,
    #[prost(message, optional, tag = "7")]
    pub due_date: Option<Timestamp>,
    #[prost(message, optional, tag = "8")]
    pub completed_date: Option<Timestamp>,
    #[prost(string, tag = "9")]
    pub assigned_to: String,
    #[prost(string, tag = "10")]
    pub completed_by: String,
    #[prost(string, tag = "11")]
    pub notes: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct News {
    #[prost(string, tag = "1")]
    pub news_id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub content: String,
    #[prost(int32, tag = "4")]
    pub r#type: i32,
    #[prost(int32, tag = "5")]
    pub source: i32,
    #[prost(message, optional, tag = "6")]
    pub published_date: Option<Timestamp>,
    #[prost(string, tag = "7")]
    pub author: String,
    #[prost(string, tag = "8")]
    pub url: String,
    #[prost(string, repeated, tag = "9")]
    pub tags: Vec<String>,
    #[prost(bool, tag = "10")]
    pub is_important: bool,
}

fn timestamp(at: DateTime<Utc>) -> Option<Timestamp> {
    Some(Timestamp {
        seconds: at.timestamp(),
        nanos: i32::try_from(at.timestamp_subsec_nanos()).unwrap_or(0),
    })
}

impl From<&model::OutletDetailsResponse> for OutletDetailsResponse {
    fn from(response: &model::OutletDetailsResponse) -> Self {
        Self {
            details: response.details.iter().map(OutletDetails::from).collect(),
        }
    }
}

impl From<&model::Outlet> for OutletDetails {
    fn from(outlet: &model::Outlet) -> Self {
        Self {
            outlet_id: outlet.outlet_id.clone(),
            name: outlet.name.clone(),
            code: outlet.code.clone(),
            thumbnail: outlet.thumbnail.clone(),
            r#type: outlet.outlet_type.value(),
            status: outlet.status.value(),
            location: Some(Location::from(&outlet.location)),
            created_at: timestamp(outlet.created_at),
            updated_at: timestamp(outlet.updated_at),
            contact_points: outlet.contact_points.iter().map(Into::into).collect(),
            visit_history: outlet.visit_history.iter().map(Into::into).collect(),
            order_history: outlet.order_history.iter().map(Into::into).collect(),
            statistics: Some(OutletStatistics::from(&outlet.statistics)),
            outlets_nearby: outlet.outlets_nearby.iter().map(Into::into).collect(),
            notes: outlet.notes.iter().map(Into::into).collect(),
            asset_list: outlet.asset_list.iter().map(Into::into).collect(),
            checklist: outlet.checklist.iter().map(Into::into).collect(),
            news: outlet.news.iter().map(Into::into).collect(),
        }
    }
}

impl From<&model::Location> for Location {
    fn from(location: &model::Location) -> Self {
        Self {
            address: location.address.clone(),
            city: location.city.clone(),
            state: location.state.clone(),
            postal_code: location.postal_code.clone(),
            country: location.country.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

impl From<&model::ContactPoint> for ContactPoint {
    fn from(contact: &model::ContactPoint) -> Self {
        Self {
            contact_id: contact.contact_id.clone(),
            name: contact.name.clone(),
            role: contact.role.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            r#type: contact.contact_type.value(),
            is_primary: contact.is_primary,
            created_at: timestamp(contact.created_at),
        }
    }
}

impl From<&model::Visit> for Visit {
    fn from(visit: &model::Visit) -> Self {
        Self {
            visit_id: visit.visit_id.clone(),
            sales_rep_id: visit.sales_rep_id.clone(),
            sales_rep_name: visit.sales_rep_name.clone(),
            visit_date: timestamp(visit.visit_date),
            visit_type: visit.visit_type.value(),
            visit_status: visit.visit_status.value(),
            purpose: visit.purpose.clone(),
            summary: visit.summary.clone(),
            products_discussed: visit.products_discussed.clone(),
            actions_taken: visit.actions_taken.iter().map(Into::into).collect(),
            attachments: visit.attachments.clone(),
            duration_seconds: visit.duration_seconds,
        }
    }
}

impl From<&model::VisitAction> for VisitAction {
    fn from(action: &model::VisitAction) -> Self {
        Self {
            action_id: action.action_id.clone(),
            description: action.description.clone(),
            r#type: action.action_type.value(),
            status: action.status.value(),
            due_date: timestamp(action.due_date),
        }
    }
}

impl From<&model::Order> for Order {
    fn from(order: &model::Order) -> Self {
        Self {
            order_id: order.order_id.clone(),
            order_number: order.order_number.clone(),
            order_date: timestamp(order.order_date),
            status: order.status.value(),
            total_amount: order.total_amount,
            currency: order.currency.clone(),
            items: order.items.iter().map(Into::into).collect(),
            payment_info: Some(PaymentInfo {
                method: order.payment_info.method.value(),
                status: order.payment_info.status.value(),
                payment_date: timestamp(order.payment_info.payment_date),
                amount_paid: order.payment_info.amount_paid,
                amount_due: order.payment_info.amount_due,
                reference_number: order.payment_info.reference_number.clone(),
            }),
            delivery_info: Some(DeliveryInfo {
                delivery_address: order.delivery_info.delivery_address.clone(),
                scheduled_date: timestamp(order.delivery_info.scheduled_date),
                actual_date: timestamp(order.delivery_info.actual_date),
                status: order.delivery_info.status.value(),
                delivery_notes: order.delivery_info.delivery_notes.clone(),
                tracking_number: order.delivery_info.tracking_number.clone(),
            }),
            sales_rep_id: order.sales_rep_id.clone(),
            sales_rep_name: order.sales_rep_name.clone(),
            delivery_date: timestamp(order.delivery_date),
            notes: order.notes.clone(),
        }
    }
}

impl From<&model::OrderItem> for OrderItem {
    fn from(item: &model::OrderItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            sku: item.sku.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: item.total_price,
            discount_percentage: item.discount_percentage,
            discount_amount: item.discount_amount,
        }
    }
}

impl From<&model::OutletStatistics> for OutletStatistics {
    fn from(stats: &model::OutletStatistics) -> Self {
        Self {
            total_revenue_ytd: stats.total_revenue_ytd,
            total_revenue_last_year: stats.total_revenue_last_year,
            average_order_value: stats.average_order_value,
            total_orders_ytd: stats.total_orders_ytd,
            total_orders_last_year: stats.total_orders_last_year,
            total_visits_ytd: stats.total_visits_ytd,
            revenue_growth_percentage: stats.revenue_growth_percentage,
            days_since_last_order: stats.days_since_last_order,
            days_since_last_visit: stats.days_since_last_visit,
            top_products: stats
                .top_products
                .iter()
                .map(|product| ProductStatistics {
                    product_id: product.product_id.clone(),
                    product_name: product.product_name.clone(),
                    quantity_sold: product.quantity_sold,
                    revenue: product.revenue,
                    orders_count: product.orders_count,
                })
                .collect(),
            monthly_revenue: stats
                .monthly_revenue
                .iter()
                .map(|month| MonthlyRevenue {
                    year: month.year,
                    month: month.month,
                    revenue: month.revenue,
                    orders_count: month.orders_count,
                })
                .collect(),
            segment: stats.segment.value(),
            credit_info: Some(CreditInfo {
                credit_limit: stats.credit_info.credit_limit,
                credit_used: stats.credit_info.credit_used,
                credit_available: stats.credit_info.credit_available,
                payment_terms_days: stats.credit_info.payment_terms_days,
                status: stats.credit_info.status.value(),
            }),
        }
    }
}

impl From<&model::OutletNearby> for OutletNearby {
    fn from(nearby: &model::OutletNearby) -> Self {
        Self {
            outlet_id: nearby.outlet_id.clone(),
            name: nearby.name.clone(),
            r#type: nearby.outlet_type.value(),
            distance_km: nearby.distance_km,
            location: Some(Location::from(&nearby.location)),
            is_competitor: nearby.is_competitor,
            relationship: nearby.relationship.clone(),
            thumbnail: nearby.thumbnail.clone(),
        }
    }
}

impl From<&model::Note> for Note {
    fn from(note: &model::Note) -> Self {
        Self {
            note_id: note.note_id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            r#type: note.note_type.value(),
            created_by: note.created_by.clone(),
            created_at: timestamp(note.created_at),
            updated_at: timestamp(note.updated_at),
            is_private: note.is_private,
            tags: note.tags.clone(),
        }
    }
}

impl From<&model::Asset> for Asset {
    fn from(asset: &model::Asset) -> Self {
        Self {
            asset_id: asset.asset_id.clone(),
            name: asset.name.clone(),
            r#type: asset.asset_type.value(),
            model: asset.model.clone(),
            serial_number: asset.serial_number.clone(),
            status: asset.status.value(),
            installation_date: timestamp(asset.installation_date),
            last_maintenance_date: timestamp(asset.last_maintenance_date),
            next_maintenance_date: timestamp(asset.next_maintenance_date),
            location_details: asset.location_details.clone(),
            condition: asset.condition.clone(),
            maintenance_history: asset
                .maintenance_history
                .iter()
                .map(|entry| AssetMaintenance {
                    date: timestamp(entry.date),
                    r#type: entry.maintenance_type.value(),
                    description: entry.description.clone(),
                    technician: entry.technician.clone(),
                    cost: entry.cost,
                })
                .collect(),
        }
    }
}

impl From<&model::ChecklistItem> for ChecklistItem {
    fn from(item: &model::ChecklistItem) -> Self {
        Self {
            item_id: item.item_id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category.value(),
            status: item.status.value(),
            priority: item.priority.value(),
            due_date: timestamp(item.due_date),
            completed_date: item.completed_date.and_then(timestamp),
            assigned_to: item.assigned_to.clone(),
            completed_by: item.completed_by.clone().unwrap_or_default(),
            notes: item.notes.clone(),
        }
    }
}

impl From<&model::News> for News {
    fn from(news: &model::News) -> Self {
        Self {
            news_id: news.news_id.clone(),
            title: news.title.clone(),
            content: news.content.clone(),
            r#type: news.news_type.value(),
            source: news.source.value(),
            published_date: timestamp(news.published_date),
            author: news.author.clone(),
            url: news.url.clone(),
            tags: news.tags.clone(),
            is_important: news.is_important,
        }
    }
}
