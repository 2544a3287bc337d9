use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use stoa_cli::{CliConfig, NodeCli, ShellRunner};
use stoa_common::FsFileStore;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter, Layer as _,
    Registry,
};

fn default_config_path() -> PathBuf {
    PathBuf::from(option_env!("STOA_WALLET_DEFAULT_CONFIG").unwrap_or("stoa-wallet.toml"))
}

#[derive(Parser)]
#[command(name = "stoa-wallet", about = "Wallet queries against a local node via its CLI tool")]
struct Args {
    /// Path to configuration.
    #[arg(long, default_value = default_config_path().into_os_string())]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregated balance of an address
    Balance { address: String },
    /// Unspent outputs of an address, as JSON
    Utxos { address: String },
    /// Identifier of a built or signed transaction file
    TxId { tx_file: PathBuf },
    /// Current chain tip
    Tip,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::try_parse()?;

    // Standard logging using RUST_LOG for log levels, default to INFO
    let fmt_layer = fmt::layer()
        .with_filter(EnvFilter::from_default_env().add_directive(filter::LevelFilter::INFO.into()));
    Registry::default().with(fmt_layer).init();

    let config = if args.config.exists() {
        CliConfig::load(&args.config)?
    } else {
        CliConfig::default()
    };
    let cli = NodeCli::new(config, Arc::new(ShellRunner), Arc::new(FsFileStore));

    match args.command {
        Command::Balance { address } => {
            let info = cli.wallet_info(&address).await?;
            for (id, quantity) in info.balance.iter() {
                println!("{quantity} {id}");
            }
        }
        Command::Utxos { address } => {
            let utxos = cli.query_utxos(&address).await?;
            let rows: Vec<_> = utxos
                .iter()
                .map(|utxo| {
                    json!({
                        "tx_hash": utxo.tx_hash,
                        "index": utxo.index,
                        "datum_hash": utxo.datum_hash,
                        "value": utxo
                            .value
                            .iter()
                            .map(|(id, quantity)| (id.clone(), quantity.to_string()))
                            .collect::<BTreeMap<_, _>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::TxId { tx_file } => println!("{}", cli.tx_id(&tx_file).await?),
        Command::Tip => println!("{}", cli.query_tip().await?.trim()),
    }
    Ok(())
}
