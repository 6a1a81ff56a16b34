use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use quotedesk::core::AssetType;
use quotedesk::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum AssetArg {
    Stock,
    Crypto,
}

impl From<AssetArg> for AssetType {
    fn from(arg: AssetArg) -> AssetType {
        match arg {
            AssetArg::Stock => AssetType::Stock,
            AssetArg::Crypto => AssetType::Crypto,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Show the latest quote for one or more symbols
    Quote {
        #[arg(required = true)]
        symbols: Vec<String>,
        #[arg(short = 't', long = "type", value_enum, default_value = "stock")]
        asset_type: AssetArg,
    },
    /// Search stocks or cryptocurrencies
    Search {
        query: String,
        #[arg(short = 't', long = "type", value_enum, default_value = "stock")]
        asset_type: AssetArg,
    },
    /// List symbols available for selection
    Symbols {
        #[arg(short = 't', long = "type", value_enum)]
        asset_type: Option<AssetArg>,
        #[arg(short, long, default_value = "US")]
        exchange: String,
    },
    /// Show name, logo and listing details for a symbol
    Profile {
        symbol: String,
        #[arg(short = 't', long = "type", value_enum, default_value = "stock")]
        asset_type: AssetArg,
    },
    /// List supported trading platforms
    Platforms,
    /// Value configured holdings at live prices
    Holdings,
}

impl From<Commands> for quotedesk::AppCommand {
    fn from(cmd: Commands) -> quotedesk::AppCommand {
        match cmd {
            Commands::Quote {
                symbols,
                asset_type,
            } => quotedesk::AppCommand::Quote {
                symbols,
                asset_type: asset_type.into(),
            },
            Commands::Search { query, asset_type } => quotedesk::AppCommand::Search {
                query,
                asset_type: asset_type.into(),
            },
            Commands::Symbols {
                asset_type,
                exchange,
            } => quotedesk::AppCommand::Symbols {
                asset_type: asset_type.map(Into::into),
                exchange,
            },
            Commands::Profile { symbol, asset_type } => quotedesk::AppCommand::Profile {
                symbol,
                asset_type: asset_type.into(),
            },
            Commands::Platforms => quotedesk::AppCommand::Platforms,
            Commands::Holdings => quotedesk::AppCommand::Holdings,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => quotedesk::cli::setup::setup_at_path(path),
            None => quotedesk::cli::setup::setup(),
        },
        Some(cmd) => quotedesk::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
