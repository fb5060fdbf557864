/**
 * Server Configuration
 *
 * This module loads the relay configuration for the server binary.
 *
 * # Configuration Sources
 *
 * The binary loads an optional `.env` file before tracing starts, so
 * `RUST_LOG` from the file applies too. `RelayConfig::from_env` then reads
 * `BACKEND_PORT`, `BIND_HOST`, `DATA_DIR` and `MAX_BODY_BYTES`, falling
 * back to fixed defaults.
 *
 * # Error Handling
 *
 * Unlike a missing variable, an unparseable value aborts start-up.
 */

use crate::shared::{ConfigError, RelayConfig};

/// Load the relay configuration from the process environment
pub fn load_config() -> Result<RelayConfig, ConfigError> {
    let config = RelayConfig::from_env()?;
    tracing::info!(
        "Configuration: bind {}, data dir {}, body limit {} bytes",
        config.bind_addr(),
        config.data_dir.display(),
        config.max_body_bytes
    );
    Ok(config)
}
