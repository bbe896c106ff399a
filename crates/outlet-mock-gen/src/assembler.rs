use chrono::{DateTime, Utc};
use outlet_mock_core::model::{Outlet, OutletStatus, OutletType};
use outlet_mock_core::SizingConfig;
use rand::Rng;

use crate::builders::{
    build_assets, build_checklist, build_contact_points, build_nearby_outlets, build_news,
    build_notes, build_orders, build_statistics, build_visits, random_location,
};
use crate::count::resolve;
use crate::fields::{int32_between, int_between, pick_string, pick_variant, shift, uppercase_letters};
use crate::vocab;

/// Build one complete outlet record.
///
/// Every sub-collection length is drawn from its `sizing` average; an average
/// of zero leaves that collection empty. Statistics are computed from the
/// orders and visits generated here.
pub fn assemble<R: Rng + ?Sized>(
    rng: &mut R,
    outlet_id: &str,
    sizing: &SizingConfig,
    now: DateTime<Utc>,
) -> Outlet {
    let location = random_location(rng);
    let created_at = shift(
        now,
        -int32_between(rng, 1, 3),
        -int32_between(rng, 0, 11),
        -int_between(rng, 0, 29),
    );
    let contact_count = usize::try_from(int_between(rng, 1, 3)).unwrap_or(1);

    let visit_count = resolve(rng, sizing.average_visit_history);
    let visit_history = build_visits(rng, visit_count, now);

    let order_count = resolve(rng, sizing.average_number_of_orders);
    let order_history = build_orders(
        rng,
        order_count,
        sizing.average_order_items_per_order,
        now,
    );

    let top_products = resolve(rng, sizing.average_top_products_in_statistics);
    let statistics = build_statistics(rng, top_products, &order_history, &visit_history, now);

    let nearby_count = resolve(rng, sizing.average_outlets_nearby);
    let outlets_nearby = build_nearby_outlets(rng, nearby_count, &location);

    let note_count = resolve(rng, sizing.average_notes_list);
    let asset_count = resolve(rng, sizing.average_asset_list);
    let checklist_count = resolve(rng, sizing.average_checklist);
    let news_count = resolve(rng, sizing.average_news);

    Outlet {
        outlet_id: outlet_id.to_string(),
        name: pick_string(rng, vocab::OUTLET_NAMES),
        code: format!("ST-{}-{:03}", uppercase_letters(rng, 2), int_between(rng, 1, 999)),
        thumbnail: vocab::THUMBNAIL_URL.to_string(),
        outlet_type: pick_variant(rng, OutletType::ALL),
        status: OutletStatus::Active,
        location,
        created_at,
        updated_at: now,
        contact_points: build_contact_points(rng, contact_count, now),
        visit_history,
        order_history,
        statistics,
        outlets_nearby,
        notes: build_notes(rng, note_count, now),
        asset_list: build_assets(rng, asset_count, now),
        checklist: build_checklist(rng, checklist_count, now),
        news: build_news(rng, news_count, now),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn within_band(len: usize, average: u32) -> bool {
        let average = usize::try_from(average).expect("fits");
        if average <= 1 {
            return len == average;
        }
        (average / 2..=average + average / 2).contains(&len)
    }

    #[test]
    fn baseline_sizing_produces_populated_outlet() {
        let sizing = SizingConfig::baseline();
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(200);
        let outlet = assemble(&mut rng, "outlet-042", &sizing, now);

        assert_eq!(outlet.outlet_id, "outlet-042");
        assert_eq!(outlet.status, OutletStatus::Active);
        assert_eq!(outlet.updated_at, now);
        assert!(outlet.created_at < now);
        assert!(outlet.code.starts_with("ST-"));
        assert!((1..=3).contains(&outlet.contact_points.len()));
        assert!(within_band(outlet.visit_history.len(), sizing.average_visit_history));
        assert!(within_band(outlet.order_history.len(), sizing.average_number_of_orders));
        assert!(within_band(
            outlet.statistics.top_products.len(),
            sizing.average_top_products_in_statistics
        ));
        assert!(within_band(outlet.outlets_nearby.len(), sizing.average_outlets_nearby));
        assert!(within_band(outlet.notes.len(), sizing.average_notes_list));
        assert!(within_band(outlet.asset_list.len(), sizing.average_asset_list));
        assert!(within_band(outlet.checklist.len(), sizing.average_checklist));
        assert!(within_band(outlet.news.len(), sizing.average_news));
    }

    #[test]
    fn statistics_agree_with_generated_orders() {
        let mut rng = StdRng::seed_from_u64(201);
        let outlet = assemble(&mut rng, "outlet-001", &SizingConfig::compact(), Utc::now());
        let stats = &outlet.statistics;
        let k = outlet.order_history.len();

        assert_eq!(stats.total_orders_ytd, i32::try_from(k).expect("fits"));
        assert_eq!(
            stats.total_visits_ytd,
            i32::try_from(outlet.visit_history.len()).expect("fits")
        );
        let revenue: f64 = outlet.order_history.iter().map(|o| o.total_amount).sum();
        assert!((stats.total_revenue_ytd - revenue).abs() < 1e-6);
        if k > 0 {
            assert!((stats.average_order_value - revenue / k as f64).abs() < 1e-6);
        }
        for order in &outlet.order_history {
            assert!((order.total_amount - order.items_total()).abs() < 1e-6);
        }
    }

    #[test]
    fn disabled_sizing_leaves_collections_empty() {
        let mut rng = StdRng::seed_from_u64(202);
        let outlet = assemble(&mut rng, "outlet-001", &SizingConfig::disabled(), Utc::now());

        assert!(outlet.visit_history.is_empty());
        assert!(outlet.order_history.is_empty());
        assert!(outlet.outlets_nearby.is_empty());
        assert!(outlet.notes.is_empty());
        assert!(outlet.asset_list.is_empty());
        assert!(outlet.checklist.is_empty());
        assert!(outlet.news.is_empty());
        assert!(outlet.statistics.top_products.is_empty());
        assert_eq!(outlet.statistics.total_orders_ytd, 0);
        assert_eq!(outlet.statistics.monthly_revenue.len(), 6);
        assert!(!outlet.contact_points.is_empty());
    }

    #[test]
    fn single_order_single_item() {
        let sizing = SizingConfig {
            average_number_of_orders: 1,
            average_order_items_per_order: 1,
            ..SizingConfig::disabled()
        };
        let mut rng = StdRng::seed_from_u64(203);
        let outlet = assemble(&mut rng, "outlet-001", &sizing, Utc::now());

        assert_eq!(outlet.order_history.len(), 1);
        assert_eq!(outlet.order_history[0].items.len(), 1);
        assert_eq!(outlet.statistics.total_orders_ytd, 1);
        assert!(outlet.visit_history.is_empty());
        assert!(outlet.notes.is_empty());
        assert!(outlet.news.is_empty());
    }

    #[test]
    fn same_seed_same_outlet() {
        let now = Utc::now();
        let sizing = SizingConfig::compact();
        let a = assemble(&mut StdRng::seed_from_u64(7), "outlet-001", &sizing, now);
        let b = assemble(&mut StdRng::seed_from_u64(7), "outlet-001", &sizing, now);
        assert_eq!(a, b);
    }
}
