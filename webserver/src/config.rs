//! Process configuration
//!
//! Sources, lowest precedence first: `.env` file, process environment,
//! command-line flags.

use clap::Parser;
use generator::{DEFAULT_BASE_URL, ProviderEndpoint};

use crate::error::{WebServerError, WebServerResult};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "spellbook")]
#[command(about = "HTTP service generating study roadmaps, topics, key results and learning trails")]
pub struct Args {
    /// Port for the HTTP server
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Provider API root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Provider credential
    #[arg(long, env = API_KEY_VAR, hide_env_values = true, default_value = "")]
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub log_level: String,
    pub endpoint: ProviderEndpoint,
}

impl AppConfig {
    /// Load for production use; a missing credential is fatal
    pub fn load() -> WebServerResult<Self> {
        load_env_file();
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> WebServerResult<Self> {
        let config = Self::from_args_lenient(args);
        if !config.endpoint.has_credential() {
            return Err(WebServerError::MissingCredential { name: API_KEY_VAR });
        }
        Ok(config)
    }

    pub fn from_args_lenient(args: Args) -> Self {
        Self {
            port: args.port,
            log_level: args.log_level,
            endpoint: ProviderEndpoint::new(args.base_url, args.api_key.trim()),
        }
    }
}

/// Missing `.env` files are fine; variables already set are kept
fn load_env_file() {
    let _ = dotenv::dotenv();
}
