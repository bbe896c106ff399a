use chrono::{DateTime, Utc};
use outlet_mock_core::model::{Asset, AssetMaintenance, AssetStatus, AssetType, MaintenanceType};
use rand::Rng;

use crate::fields::{
    float_between, int32_between, int_between, pick, pick_string, pick_variant, sequential_id,
    shift, uppercase_letters,
};
use crate::vocab;

pub fn build_assets<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<Asset> {
    (0..count)
        .map(|i| {
            let history_len = usize::try_from(int_between(rng, 1, 3)).unwrap_or(1);
            Asset {
                asset_id: sequential_id("asset", i),
                name: format!("{} Unit #{}", pick(rng, vocab::ASSET_NAMES), i + 1),
                asset_type: pick_variant(rng, AssetType::ALL),
                model: format!(
                    "Model-{}-{}",
                    uppercase_letters(rng, 3),
                    int_between(rng, 100, 1_098)
                ),
                serial_number: format!(
                    "SN-{}-{:06}",
                    int_between(rng, 2023, 2024),
                    int_between(rng, 1, 999_999)
                ),
                status: AssetStatus::Active,
                installation_date: shift(now, -int32_between(rng, 1, 3), 0, 0),
                last_maintenance_date: shift(now, 0, -int32_between(rng, 1, 6), 0),
                next_maintenance_date: shift(now, 0, int32_between(rng, 1, 6), 0),
                location_details: format!(
                    "Aisle {}, Section {}",
                    int_between(rng, 1, 20),
                    pick(rng, vocab::ASSET_SECTIONS)
                ),
                condition: pick_string(rng, vocab::ASSET_CONDITIONS),
                maintenance_history: build_maintenance_history(rng, history_len, now),
            }
        })
        .collect()
}

/// Service records from the past year, each costing 50 to 550.
pub fn build_maintenance_history<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<AssetMaintenance> {
    (0..count)
        .map(|_| AssetMaintenance {
            date: shift(now, 0, -int32_between(rng, 1, 12), 0),
            maintenance_type: pick_variant(rng, MaintenanceType::ALL),
            description: pick_string(rng, vocab::MAINTENANCE_DESCRIPTIONS),
            technician: pick_string(rng, vocab::TECHNICIANS),
            cost: float_between(rng, 50.0, 550.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn asset_dates_bracket_now() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(80);
        let assets = build_assets(&mut rng, 20, now);
        for asset in &assets {
            assert!(asset.installation_date < now - Duration::days(300));
            assert!(asset.installation_date > now - Duration::days(3 * 366 + 1));
            assert!(asset.last_maintenance_date < now);
            assert!(asset.next_maintenance_date > now);
            assert!((1..=3).contains(&asset.maintenance_history.len()));
            assert!(asset.serial_number.starts_with("SN-202"));
        }
        assert!(assets[4].name.ends_with("Unit #5"));
    }

    #[test]
    fn maintenance_costs_and_dates() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(81);
        for entry in build_maintenance_history(&mut rng, 100, now) {
            assert!((50.0..550.0).contains(&entry.cost));
            assert!(entry.date < now);
            assert!(entry.date > now - Duration::days(366));
        }
    }
}
