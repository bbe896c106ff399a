//! `generate` command handler.

use std::io::Write;
use std::path::Path;

use outlet_mock_core::{wire, Outlet, OutletDetailsResponse, SizingConfig};
use outlet_mock_gen::{generate_outlets, BatchRequest};
use prost::Message;

use crate::OutputFormat;

#[derive(Debug, Clone)]
pub(crate) struct GenerateArgs {
    pub outlet_id: String,
    pub count: usize,
    pub sizing: SizingConfig,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

/// Generate a batch and write it to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error if generation fails, encoding fails, or the output
/// cannot be written.
pub(crate) async fn run_generate(args: GenerateArgs, output: Option<&Path>) -> anyhow::Result<()> {
    let details = generate_outlets(BatchRequest {
        outlet_id: args.outlet_id,
        count: args.count,
        sizing: args.sizing,
        seed: args.seed,
    })
    .await?;

    let bytes = render(details, args.format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &bytes)
                .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote outlets");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Encode a batch in the same envelope the server returns.
pub(crate) fn render(details: Vec<Outlet>, format: OutputFormat) -> anyhow::Result<Vec<u8>> {
    let response = OutletDetailsResponse { details };
    match format {
        OutputFormat::Json => {
            let mut bytes = serde_json::to_vec_pretty(&response)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        OutputFormat::Protobuf => Ok(wire::OutletDetailsResponse::from(&response).encode_to_vec()),
    }
}
