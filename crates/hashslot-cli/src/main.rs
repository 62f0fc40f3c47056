use anyhow::Result;
use clap::{Parser, Subcommand};
use hashslot_core::CliConfig;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hashslot", about = "Consistent hash ring driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the five-node reference scenario
    Demo,
    /// Resolve keys to their owning nodes
    Lookup {
        /// Node to place on the ring (repeatable, adds to configured nodes)
        #[arg(long = "node")]
        nodes: Vec<String>,
        /// Keys to resolve
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print every occupied slot and its node
    Placement {
        /// Node to place on the ring (repeatable, adds to configured nodes)
        #[arg(long = "node")]
        nodes: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = CliConfig::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter.as_str().into());
    if cli.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.ring.validate()?;

    match cli.command {
        Commands::Demo => {
            commands::demo::run(&config.ring)?;
        }
        Commands::Lookup { nodes, keys } => {
            config.ring.nodes.extend(nodes);
            commands::lookup::lookup(&config.ring, &keys)?;
        }
        Commands::Placement { nodes } => {
            config.ring.nodes.extend(nodes);
            commands::lookup::placement(&config.ring)?;
        }
    }

    Ok(())
}
