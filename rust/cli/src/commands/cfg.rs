//! Configuration command handler.
//!
//! Displays the resolved showdown configuration together with where each
//! value came from (default, configuration file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "opponents": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   "tie_policy": {
//!     "value": "half",
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if the configuration cannot be resolved and
/// `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "opponents": {
            "value": config.opponents,
            "source": sources.opponents,
        },
        "tie_policy": {
            "value": config.tie_policy,
            "source": sources.tie_policy,
        },
        "table_suits": {
            "value": config.table_suits,
            "source": sources.table_suits,
        }
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}
