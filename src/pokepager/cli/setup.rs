use clap::{Parser, Subcommand};
use pokepager::config::{PagerConfig, CONFIG_FILENAME};
use pokepager::error::{PagerError, Result};
use pokepager::index::{IndexLoader, IndexSource};
use pokepager::lookup::http::HttpLookup;
use pokepager::pager::Pager;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use super::render::RenderOptions;

/// Returns the version string, including git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pokepager", bin_name = "pokepager", version = get_version())]
#[command(about = "Browse creature cards from the PokeAPI catalog, one page at a time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ./pokepager.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name index location: a file path or an http(s) URL
    #[arg(long, global = true, value_name = "PATH|URL")]
    pub index: Option<String>,

    /// Lookup endpoint; identifiers are appended to it
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Card slots per page
    #[arg(long, global = true, value_name = "N")]
    pub page_size: Option<usize>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse pages interactively (default)
    #[command(alias = "b")]
    Browse,

    /// Print a single page and exit
    #[command(alias = "p")]
    Page {
        /// 1-based page number; clamped to the last page
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },

    /// Show the loaded name index
    Index,

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

/// Logs go to stderr so the card grid on stdout stays clean.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Everything the handlers need, bound once at startup.
pub struct AppContext {
    pub config: PagerConfig,
    pub config_path: PathBuf,
    pub render: RenderOptions,
}

pub fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let mut config = PagerConfig::load_file(&config_path)?;

    if let Some(index) = &cli.index {
        config.index_source = index.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    config.validate()?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    Ok(AppContext {
        config,
        config_path,
        render: RenderOptions::detect(cli.no_color),
    })
}

/// A pager over the remote catalog, ready for its first load.
pub struct Session {
    pub pager: Pager<HttpLookup>,
    pub source: IndexSource,
}

impl AppContext {
    /// Loads the name index and wires the HTTP lookup into a pager.
    /// Fails with `IndexUnavailable` before any navigation is possible.
    pub async fn open_session(&self) -> Result<Session> {
        let client = self.config.http_client()?;
        let source = IndexSource::parse(&self.config.index_source);

        let index = IndexLoader::new(client.clone(), self.config.fallback_total)
            .load(&source)
            .await?;
        let lookup = HttpLookup::new(client, self.config.base_url.clone());
        let pager = Pager::new(lookup, index, self.config.page_size)?;

        Ok(Session { pager, source })
    }
}

pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(PagerError::Io)
}
