/**
 * Chat Relay Entry Point
 *
 * This is the main entry point for the chat relay server. It loads the
 * configuration, initializes tracing and serves the relay until SIGINT or
 * SIGTERM.
 */


#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present, so RUST_LOG
    // from the file applies to the subscriber below
    let dotenv_path = dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Tracing initialized (RUST_LOG={})", env_filter);
    match dotenv_path {
        Some(path) => tracing::info!("[STARTUP] Loaded environment from {}", path.display()),
        None => tracing::debug!("[STARTUP] No .env file found, using process environment"),
    }

    let config = darkchat::backend::server::config::load_config()?;
    darkchat::backend::server::serve(config).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin darkchat-relay --features ssr");
    std::process::exit(1);
}
