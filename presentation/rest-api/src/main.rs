use dotenvy::dotenv;
use tracing::{error, info};

mod api {
    pub mod envelope;
    pub mod tags;
    pub mod validation;
    pub mod health {
        pub mod routes;
    }
    pub mod item {
        pub mod dto;
        pub mod routes;
    }
    pub mod middleware {
        pub mod rate_limit;
        pub mod request_id;
    }
    pub mod user {
        pub mod dto;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod env;
    pub mod environment;
    pub mod logging_config;
    pub mod rate_limit_config;
    pub mod server_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point
///
/// Validates the environment, wires dependencies, and runs the HTTP server
/// through its full lifecycle:
/// - config/: environment snapshot, validation, typed sections
/// - setup/: dependency injection and server assembly
/// - api/: route handlers, DTOs, and HTTP middleware
#[tokio::main]
async fn main() {
    // 1. Load .env, snapshot the environment, and validate it in one pass.
    //    Tracing is not up yet, so violations go straight to stderr.
    dotenv().ok();
    let env = config::env::snapshot();
    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid environment variables:");
            for violation in &err.violations {
                eprintln!("  {violation}");
            }
            std::process::exit(1);
        }
    };

    // 2. Initialize tracing; RUST_LOG overrides LOG_LEVEL when set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.as_filter()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run(config).await {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("Application startup failed: {}", err);
            std::process::exit(1);
        }
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(
        "{} v{} starting",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    info!("Environment: {}", config.environment);
    if let Some(redis_uri) = &config.redis_uri {
        info!("Redis configured at {}", redis_uri);
    }

    // 3. Connect to the database and make sure indexes exist before the
    //    listener opens.
    let handle = persistence::db::connect(&config.database).await?;
    persistence::db::ensure_indexes(&handle.database).await?;

    // 4. Wire dependencies.
    let container = DependencyContainer::new(&handle.database);

    // 5. Serve until a termination signal drains the server; connections
    //    close only after the listener has stopped accepting.
    Server::run(config, container).await?;

    info!("Closing database connections...");
    handle.client.shutdown().await;
    info!("Graceful shutdown completed successfully");
    Ok(())
}
