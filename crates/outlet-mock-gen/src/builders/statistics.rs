use chrono::{DateTime, Datelike, Utc};
use outlet_mock_core::model::{
    CreditInfo, CreditStatus, CustomerSegment, MonthlyRevenue, Order, OutletStatistics,
    ProductStatistics, Visit,
};
use rand::Rng;

use crate::fields::{float_between, int32_between, pick_string, pick_variant, sequential_id, shift};
use crate::vocab;

const MONTHLY_REVENUE_MONTHS: i32 = 6;

/// Aggregates over the outlet's orders and visits, plus display-only figures.
///
/// Counts, revenue and the average order value are exact. Last-year figures
/// are a 70-130 % multiple of this year's and growth is drawn from -10..40 %.
#[allow(clippy::cast_possible_truncation)]
pub fn build_statistics<R: Rng + ?Sized>(
    rng: &mut R,
    top_products: usize,
    orders: &[Order],
    visits: &[Visit],
    now: DateTime<Utc>,
) -> OutletStatistics {
    let total_orders = count_i32(orders.len());
    let total_revenue: f64 = orders.iter().map(|order| order.total_amount).sum();
    let average_order_value = if total_orders > 0 {
        total_revenue / f64::from(total_orders)
    } else {
        0.0
    };

    let revenue_factor = last_year_factor(rng);
    let orders_factor = last_year_factor(rng);

    OutletStatistics {
        total_revenue_ytd: total_revenue,
        total_revenue_last_year: total_revenue * revenue_factor,
        average_order_value,
        total_orders_ytd: total_orders,
        total_orders_last_year: (f64::from(total_orders) * orders_factor) as i32,
        total_visits_ytd: count_i32(visits.len()),
        revenue_growth_percentage: float_between(rng, -10.0, 40.0),
        days_since_last_order: days_since(rng, orders.iter().map(|o| o.order_date).max(), now),
        days_since_last_visit: days_since(rng, visits.iter().map(|v| v.visit_date).max(), now),
        top_products: build_top_products(rng, top_products),
        monthly_revenue: build_monthly_revenue(rng, now),
        segment: pick_variant(rng, CustomerSegment::ALL),
        credit_info: build_credit_info(rng),
    }
}

pub fn build_top_products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ProductStatistics> {
    (0..count)
        .map(|i| {
            let quantity_sold = int32_between(rng, 100, 1_099);
            ProductStatistics {
                product_id: sequential_id("prod", i),
                product_name: pick_string(rng, vocab::PRODUCT_NAMES),
                quantity_sold,
                revenue: f64::from(quantity_sold) * float_between(rng, 5.0, 25.0),
                orders_count: int32_between(rng, 5, 24),
            }
        })
        .collect()
}

/// One entry per calendar month for the six months before `now`, oldest first.
pub fn build_monthly_revenue<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<MonthlyRevenue> {
    (1..=MONTHLY_REVENUE_MONTHS)
        .rev()
        .map(|back| {
            let at = shift(now, 0, -back, 0);
            MonthlyRevenue {
                year: at.year(),
                month: i32::try_from(at.month()).unwrap_or_default(),
                revenue: float_between(rng, 5_000.0, 10_000.0),
                orders_count: int32_between(rng, 3, 12),
            }
        })
        .collect()
}

/// Credit line of 10k-60k with up to 70 % drawn.
pub fn build_credit_info<R: Rng + ?Sized>(rng: &mut R) -> CreditInfo {
    let credit_limit = f64::from(int32_between(rng, 10_000, 59_999));
    let credit_used = credit_limit * float_between(rng, 0.0, 0.7);
    CreditInfo {
        credit_limit,
        credit_used,
        credit_available: credit_limit - credit_used,
        payment_terms_days: int32_between(rng, 15, 74),
        status: CreditStatus::Good,
    }
}

fn last_year_factor<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    float_between(rng, 0.7, 1.3)
}

/// Whole days between `latest` and `now`; a random 0-29 when there is no `latest`.
fn days_since<R: Rng + ?Sized>(
    rng: &mut R,
    latest: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> i32 {
    match latest {
        Some(at) => i32::try_from((now - at).num_days().max(0)).unwrap_or(i32::MAX),
        None => int32_between(rng, 0, 29),
    }
}

fn count_i32(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
