//! Entity builders. Each takes a resolved count and yields that many entities
//! with sequential `prefix-NNN` identifiers.

mod asset;
mod checklist;
mod contact;
pub(crate) mod location;
mod nearby;
mod news;
mod note;
mod order;
mod statistics;
mod visit;

pub use asset::{build_assets, build_maintenance_history};
pub use checklist::{build_checklist, checklist_status};
pub use contact::build_contact_points;
pub use location::{nearby_location, random_location};
pub use nearby::build_nearby_outlets;
pub use news::build_news;
pub use note::build_notes;
pub use order::{
    build_delivery_info, build_order_items, build_orders, build_payment_info, line_amounts,
};
pub use statistics::{build_credit_info, build_monthly_revenue, build_statistics, build_top_products};
pub use visit::{build_visit_actions, build_visits};
