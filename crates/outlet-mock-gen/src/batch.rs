use std::time::Instant;

use chrono::Utc;
use futures::future::join_all;
use outlet_mock_core::{Outlet, SizingConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assembler::assemble;
use crate::error::GenerateError;

/// Golden-ratio increment used to spread per-task seeds across the `u64` space.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// One request for a batch of outlet records sharing an id and sizing.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub outlet_id: String,
    pub count: usize,
    pub sizing: SizingConfig,
    /// Fixes the batch seed. A random seed is drawn when absent.
    pub seed: Option<u64>,
}

/// Seed for the task at `index`, derived from the batch seed.
#[must_use]
pub fn task_seed(batch_seed: u64, index: usize) -> u64 {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    batch_seed.wrapping_add(index.wrapping_mul(SEED_STRIDE))
}

/// Generate `request.count` outlets concurrently, one blocking task each.
///
/// Every task owns its own [`StdRng`]; results come back in task order. All
/// records share a single `now` reading.
///
/// # Errors
///
/// Returns [`GenerateError::TaskFailed`] if any generation task panics.
pub async fn generate_outlets(request: BatchRequest) -> Result<Vec<Outlet>, GenerateError> {
    let started = Instant::now();
    let batch_seed = request.seed.unwrap_or_else(|| rand::rng().random());
    let now = Utc::now();

    let handles = (0..request.count).map(|index| {
        let outlet_id = request.outlet_id.clone();
        let sizing = request.sizing;
        tokio::task::spawn_blocking(move || {
            let mut rng = StdRng::seed_from_u64(task_seed(batch_seed, index));
            assemble(&mut rng, &outlet_id, &sizing, now)
        })
    });

    let outlets = join_all(handles)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        outlet_id = %request.outlet_id,
        count = outlets.len(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "generated outlet batch"
    );
    Ok(outlets)
}
