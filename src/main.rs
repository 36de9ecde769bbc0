use std::env;

use hrms_engine::api::{AppState, create_router};
use hrms_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("HRMS_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config_dir = env::var("HRMS_CONFIG_DIR").unwrap_or_else(|_| "./config/hrms".to_string());
    let bind_addr = env::var("HRMS_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let config =
        ConfigLoader::load(&config_dir).map_err(|e| format!("failed to load policy: {e}"))?;
    info!(
        config_dir = %config_dir,
        company = %config.company().name,
        version = %config.company().version,
        "Policy loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("hrms-engine listening on {bind_addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server failed: {e}"))
}
