use chrono::{DateTime, Datelike, Utc};
use outlet_mock_core::model::{
    DeliveryInfo, DeliveryStatus, Order, OrderItem, OrderStatus, PaymentInfo, PaymentMethod,
    PaymentStatus,
};
use rand::Rng;

use crate::count::resolve;
use crate::fields::{
    days_before, int32_between, int_between, pick, pick_string, pick_variant, reference_number,
    rep_id, sequential_id, shift_days, uppercase_letters,
};
use crate::vocab;

/// Orders placed within the last year, each holding roughly
/// `average_items_per_order` line items and never fewer than one.
pub fn build_orders<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    average_items_per_order: u32,
    now: DateTime<Utc>,
) -> Vec<Order> {
    let year = now.year();
    (0..count)
        .map(|i| {
            let order_date = days_before(rng, now, 365);
            let item_count = resolve(rng, average_items_per_order).max(1);
            let items = build_order_items(rng, item_count);
            let total_amount: f64 = items.iter().map(|item| item.total_price).sum();
            let payment_info = build_payment_info(rng, total_amount, order_date, year);
            let delivery_info = build_delivery_info(rng, order_date, year);

            Order {
                order_id: sequential_id("order", i),
                order_number: reference_number(rng, "ORD", year),
                order_date,
                status: pick_variant(rng, OrderStatus::ALL),
                total_amount,
                currency: vocab::CURRENCY.to_string(),
                items,
                sales_rep_id: rep_id(rng),
                sales_rep_name: pick_string(rng, vocab::SALES_REPS),
                delivery_date: delivery_info.actual_date,
                notes: pick_string(rng, vocab::ORDER_NOTES),
                payment_info,
                delivery_info,
            }
        })
        .collect()
}

pub fn build_order_items<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<OrderItem> {
    (0..count)
        .map(|_| {
            let unit_price = f64::from(int32_between(rng, 5, 54)) + rng.random::<f64>();
            let quantity = int32_between(rng, 1, 100);
            let discount_percentage = f64::from(int32_between(rng, 0, 19));
            let (total_price, discount_amount) =
                line_amounts(quantity, unit_price, discount_percentage);

            OrderItem {
                product_id: format!("prod-{:03}", int_between(rng, 1, 100)),
                product_name: pick_string(rng, vocab::PRODUCT_NAMES),
                sku: format!("{}-{:03}", uppercase_letters(rng, 3), int_between(rng, 1, 999)),
                quantity,
                unit_price,
                total_price,
                discount_percentage,
                discount_amount,
            }
        })
        .collect()
}

/// Net line total and discount for one item, as `(total_price, discount_amount)`.
#[must_use]
pub fn line_amounts(quantity: i32, unit_price: f64, discount_percentage: f64) -> (f64, f64) {
    let gross = f64::from(quantity) * unit_price;
    let discount_amount = gross * (discount_percentage / 100.0);
    (gross - discount_amount, discount_amount)
}

/// Payment settled in full on the order date.
pub fn build_payment_info<R: Rng + ?Sized>(
    rng: &mut R,
    amount: f64,
    order_date: DateTime<Utc>,
    year: i32,
) -> PaymentInfo {
    PaymentInfo {
        method: pick_variant(rng, PaymentMethod::ALL),
        status: PaymentStatus::Paid,
        payment_date: order_date,
        amount_paid: amount,
        amount_due: 0.0,
        reference_number: reference_number(rng, "PAY", year),
    }
}

/// Delivery scheduled one to five days after the order and completed on schedule.
pub fn build_delivery_info<R: Rng + ?Sized>(
    rng: &mut R,
    order_date: DateTime<Utc>,
    year: i32,
) -> DeliveryInfo {
    let scheduled_date = shift_days(order_date, int_between(rng, 1, 5));
    DeliveryInfo {
        delivery_address: format!(
            "{} {} Street",
            int_between(rng, 1, 999),
            pick(rng, vocab::DELIVERY_STREETS)
        ),
        scheduled_date,
        actual_date: scheduled_date,
        status: DeliveryStatus::Delivered,
        delivery_notes: "Delivery completed successfully".to_string(),
        tracking_number: reference_number(rng, "TRK", year),
    }
}
