mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "outlet-mock-cli")]
#[command(about = "Generate mock outlet records without running the server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a batch of outlets and write them as JSON or protobuf.
    Generate {
        #[arg(long, default_value = "outlet-001")]
        outlet_id: String,
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Named sizing profile: baseline, compact or disabled.
        #[arg(long)]
        profile: Option<String>,
        /// YAML sizing file; takes precedence over `--profile`.
        #[arg(long, env = "OUTLET_MOCK_SIZING_PATH")]
        sizing: Option<PathBuf>,
        #[arg(long, env = "OUTLET_MOCK_SEED")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the resolved sizing profile as YAML.
    Sizing {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long, env = "OUTLET_MOCK_SIZING_PATH")]
        sizing: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Protobuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Generate {
            outlet_id,
            count,
            profile,
            sizing,
            seed,
            format,
            output,
        }) => {
            let sizing =
                outlet_mock_core::resolve_sizing(sizing.as_deref(), profile.as_deref())?;
            generate::run_generate(
                generate::GenerateArgs {
                    outlet_id,
                    count,
                    sizing,
                    seed,
                    format,
                },
                output.as_deref(),
            )
            .await?;
        }
        Some(Commands::Sizing { profile, sizing }) => {
            let sizing =
                outlet_mock_core::resolve_sizing(sizing.as_deref(), profile.as_deref())?;
            print!("{}", serde_yaml::to_string(&sizing)?);
        }
        None => println!("outlet-mock-cli: use `generate` or `sizing` (see --help)"),
    }

    Ok(())
}
