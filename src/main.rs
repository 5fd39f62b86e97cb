use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use token_directory::{
    arguments, config,
    directory::TokenDirectory,
    logger::{self, LogTag},
    paths, webserver,
};

/// Token directory HTTP service
#[derive(Parser)]
#[command(name = "token-directory")]
#[command(about = "In-memory token directory REST API", long_about = None)]
struct Args {
    /// Bind address (overrides webserver.host)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides webserver.port)
    #[arg(long)]
    port: Option<u16>,

    /// TOML config file (default: <data dir>/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,

    #[command(flatten)]
    #[allow(dead_code)]
    log: LogFlags,
}

/// Logging flags; consumed by `logger::init()` from argv, not from this struct.
/// One `--debug-<tag>` per `LogTag`.
#[derive(clap::Args)]
#[allow(dead_code)]
struct LogFlags {
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    quiet: bool,

    #[arg(long)]
    no_log_file: bool,

    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[arg(long)]
    debug_system: bool,

    #[arg(long)]
    debug_config: bool,

    #[arg(long)]
    debug_directory: bool,

    #[arg(long)]
    debug_webserver: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Directories must exist before the logger opens its file
    paths::ensure_all_directories().map_err(|e| anyhow!(e))?;
    logger::init();
    arguments::print_debug_info();

    logger::info(LogTag::System, "🚀 Token directory starting up...");

    let config_path = args.config.clone().unwrap_or_else(paths::get_config_path);
    config::load_config_from_path(&config_path)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("loading {}", config_path.display()))?;

    let mut cfg = config::get_config_clone();
    if let Some(host) = args.host {
        cfg.webserver.host = host;
    }
    if let Some(port) = args.port {
        cfg.webserver.port = port;
    }

    if args.print_config {
        println!("{}", config::render_config(&cfg).map_err(|e| anyhow!(e))?);
        return Ok(());
    }

    if args.write_config {
        config::save_config(&cfg, &config_path).map_err(|e| anyhow!(e))?;
        logger::flush();
        return Ok(());
    }

    logger::debug(
        LogTag::Config,
        &format!(
            "id_strategy={:?} strict_sort={} enforce_blockchain_refs={} default_limit={} max_limit={}",
            cfg.directory.id_strategy,
            cfg.directory.strict_sort,
            cfg.directory.enforce_blockchain_refs,
            cfg.directory.default_limit,
            cfg.directory.max_limit
        ),
    );

    let directory = Arc::new(TokenDirectory::in_memory(cfg.directory.clone()));

    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger::info(LogTag::System, "🛑 Ctrl+C received, shutting down");
            webserver::shutdown();
        }
    });

    let result = webserver::start_server(cfg.webserver, directory).await;
    if let Err(e) = &result {
        logger::error(LogTag::Webserver, &format!("❌ {}", e));
    }
    logger::flush();

    result.map_err(|e| anyhow!(e))
}
