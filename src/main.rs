use clap::Parser;
use color_eyre::eyre::Result;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use todo_daemon::config::{default_config_path, load_config, DaemonConfig, Overrides, Settings};
use todo_daemon::cors::{build_cors_layer, parse_origins, DEFAULT_CORS_ORIGINS};
use todo_daemon::logging::{default_log_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use todo_daemon::{build_app, AppState, FileStore, RequestLog};

/// Todo Daemon - a JSON-file backed todo list over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to [default: 127.0.0.1:3000]
    #[arg(short, long, env = "TODO_DAEMON_ADDR")]
    addr: Option<String>,

    /// JSON file holding the todo list [default: data/todo-list.json]
    #[arg(long, env = "TODO_DAEMON_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Append-only request log [default: logs/request.log]
    #[arg(long, env = "TODO_DAEMON_REQUEST_LOG")]
    request_log: Option<PathBuf>,

    /// Config file (default: ~/.todo-daemon/config.toml)
    #[arg(long, env = "TODO_DAEMON_CONFIG")]
    config: Option<PathBuf>,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins.
    #[arg(
        long,
        env = "TODO_DAEMON_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "TODO_DAEMON_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "TODO_DAEMON_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.todo-daemon/logs)
    #[arg(long, env = "TODO_DAEMON_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn report_bind_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    eprintln!();
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of todo-daemon may already be running.");
        eprintln!("Use a different port:  todo-daemon --addr 127.0.0.1:{}", addr.port().saturating_add(1));
    } else {
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

fn load_file_config(path: Option<PathBuf>) -> DaemonConfig {
    let Some(path) = path.or_else(default_config_path) else {
        warn!("Could not determine config directory; using defaults");
        return DaemonConfig::default();
    };
    load_config(&path).unwrap_or_else(|e| {
        warn!("Failed to load config from {}, using defaults: {e}", path.display());
        DaemonConfig::default()
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, stopping server...");
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);
    let log_file = log_dir.join(LOG_FILENAME);
    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let settings = Settings::resolve(
        Overrides {
            addr: args.addr,
            data_file: args.data_file,
            request_log: args.request_log,
        },
        load_file_config(args.config),
    );

    let store = FileStore::new(&settings.data_file);
    if store.ensure_exists().await? {
        info!("Created empty todo list at {}", store.path().display());
    }
    let request_log = RequestLog::open(&settings.request_log)?;

    let cors_origins = parse_origins(&args.cors_origins);
    info!("CORS origins: {}", cors_origins.join(", "));
    let cors = build_cors_layer(cors_origins);

    let app = build_app(AppState::new(Arc::new(store)), request_log, cors);

    let addr: SocketAddr = settings.addr.parse()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_bind_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!(
        data_file = %settings.data_file.display(),
        request_log = %settings.request_log.display(),
        "Starting todo daemon on http://{addr}"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Todo daemon stopped");
    Ok(())
}
