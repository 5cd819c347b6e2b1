//! Query a Nomenclate server from the command line.
//!
//! ```text
//! cargo run --example query -- --host 127.0.0.1 --port 8080 banner
//! cargo run --example query -- balance ts1qxvf3qamm2gm0m3k72g3v9q65ft755ftm4yc85x
//! RUST_LOG=nomenclate=debug cargo run --example query -- header 5 --cp-height 8
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use nomenclate::{ClientOptions, NomenclateClient, Paging, TxOptions};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Nomenclate query tool
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file holding client options; flags below override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Server host
    #[arg(long, global = true)]
    host: Option<String>,

    /// Server port
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Use https
    #[arg(long, global = true, overrides_with = "no_ssl")]
    ssl: bool,

    /// Use plain http even if the config file enables https
    #[arg(long, global = true, overrides_with = "ssl")]
    no_ssl: bool,

    /// Path prefix when the server sits behind a proxy
    #[arg(long, global = true)]
    path: Option<String>,

    /// Basic auth user
    #[arg(long, global = true)]
    username: Option<String>,

    /// Basic auth password
    #[arg(long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Raw block header, optionally proven against a checkpoint
    Header {
        height: u32,
        #[arg(long, default_value_t = 0)]
        cp_height: u32,
    },
    /// A run of consecutive block headers
    Headers {
        height: u32,
        count: u32,
        #[arg(long, default_value_t = 0)]
        cp_height: u32,
    },
    /// Fee rate to confirm within a number of blocks
    EstimateFee { blocks: u32 },
    /// Minimum relay fee
    RelayFee,
    /// Transaction by hash
    Tx {
        hash: String,
        #[arg(long)]
        merkle: bool,
        #[arg(long)]
        verbose: bool,
    },
    /// Broadcast a raw transaction
    Broadcast { hex: String },
    /// Merkle proof of a transaction in a block
    Merkle { hash: String, block_height: u32 },
    /// Transaction hash at a block position
    ByPosition {
        height: u32,
        index: u32,
        #[arg(long)]
        merkle: bool,
    },
    /// Unspent outputs of an address
    Unspent {
        address: String,
        #[arg(long, default_value_t = Paging::UNSPENT.limit)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// History of an address
    History {
        address: String,
        #[arg(long, default_value_t = Paging::HISTORY.limit)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Confirmed and unconfirmed balance of an address
    Balance { address: String },
    /// History of a name
    NameHistory {
        name: String,
        #[arg(long, default_value_t = Paging::NAME_HISTORY.limit)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Server banner
    Banner,
    /// Server features
    Features,
    /// Ping the server
    Ping,
    /// Server version
    Version,
}

impl Cli {
    fn options(&self) -> Result<ClientOptions> {
        let options = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&raw)
                    .wrap_err_with(|| format!("parsing {}", path.display()))?
            }
            None => ClientOptions::default(),
        };
        Ok(self.apply(options))
    }

    /// Overlay the flags that were given on top of `options`.
    fn apply(&self, mut options: ClientOptions) -> ClientOptions {
        if let Some(host) = &self.host {
            options.host.clone_from(host);
        }
        if let Some(port) = self.port {
            options.port = port;
        }
        if self.ssl {
            options.ssl = true;
        } else if self.no_ssl {
            options.ssl = false;
        }
        if let Some(path) = &self.path {
            options.path.clone_from(path);
        }
        if let Some(username) = &self.username {
            options.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            options.password = Some(password.clone());
        }
        options
    }
}

fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nomenclate=info,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init()?;
    Ok(())
}

fn print<S: Serialize>(value: &S) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let cli = Cli::parse();
    let client = NomenclateClient::new(cli.options()?);
    client.open().await?;

    match cli.command {
        Commands::Header { height, cp_height } => {
            print(&client.get_header(height, cp_height).await?)?;
        }
        Commands::Headers {
            height,
            count,
            cp_height,
        } => print(&client.get_headers(height, count, cp_height).await?)?,
        Commands::EstimateFee { blocks } => print(&client.estimate_fee(blocks).await?)?,
        Commands::RelayFee => print(&client.relay_fee().await?)?,
        Commands::Tx {
            hash,
            merkle,
            verbose,
        } => {
            let options = TxOptions { merkle, verbose };
            print(&client.get_transaction(&hash, options).await?)?;
        }
        Commands::Broadcast { hex } => print(&client.broadcast_transaction(&hex).await?)?,
        Commands::Merkle { hash, block_height } => {
            print(&client.get_merkle(&hash, block_height).await?)?;
        }
        Commands::ByPosition {
            height,
            index,
            merkle,
        } => print(
            &client
                .get_transaction_by_position(height, index, merkle)
                .await?,
        )?,
        Commands::Unspent {
            address,
            limit,
            offset,
        } => print(
            &client
                .list_unspent(&address, Paging::new(limit, offset))
                .await?,
        )?,
        Commands::History {
            address,
            limit,
            offset,
        } => print(
            &client
                .address_history(&address, Paging::new(limit, offset))
                .await?,
        )?,
        Commands::Balance { address } => print(&client.address_balance(&address).await?)?,
        Commands::NameHistory {
            name,
            limit,
            offset,
        } => print(
            &client
                .get_name_history(&name, Paging::new(limit, offset))
                .await?,
        )?,
        Commands::Banner => println!("{}", client.banner().await?.banner),
        Commands::Features => print(&client.features().await?)?,
        Commands::Ping => print(&client.ping().await?)?,
        Commands::Version => print(&client.version().await?)?,
    }

    client.close().await?;
    Ok(())
}
