use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    process::ExitCode,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use kakeibo::{AppState, JsonSettingsStore, build_router, get_local_offset, graceful_shutdown};

/// The web server for kakeibo.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database that holds the expenses.
    #[arg(long, default_value = "data.db")]
    db_path: String,

    /// File path to the JSON document that holds income, savings goal and fixed costs.
    #[arg(long, default_value = "settings.json")]
    settings_path: String,

    /// The address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// The canonical timezone name used to decide today's date, e.g. "Asia/Tokyo".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging() {
        eprintln!("Could not set up logging: {error}");
        return ExitCode::FAILURE;
    }

    if get_local_offset(&args.timezone).is_none() {
        tracing::error!(
            "Unknown timezone \"{}\", use a canonical timezone name such as \"Asia/Tokyo\"",
            args.timezone
        );
        return ExitCode::FAILURE;
    }

    let connection = match Connection::open(&args.db_path) {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("Could not open database {}: {error}", args.db_path);
            return ExitCode::FAILURE;
        }
    };

    let settings_store = Arc::new(JsonSettingsStore::new(&args.settings_path));

    let state = match AppState::new(connection, &args.timezone, settings_store) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not initialize database {}: {error}", args.db_path);
            return ExitCode::FAILURE;
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router
        .layer(axum::middleware::from_fn(kakeibo::logging_middleware))
        .layer(LiveReloadLayer::new());

    let addr = SocketAddr::new(args.host, args.port);
    tracing::info!(
        "HTTP server listening on {addr} (database: {}, settings: {}, timezone: {})",
        args.db_path,
        args.settings_path,
        args.timezone
    );

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but the handlers
        // already log their own errors.
        .on_failure(());

    router.layer(tracing_layer)
}
