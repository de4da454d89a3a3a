//! Server configuration.
//!
//! CLI arguments with environment variable fallbacks; a `.env` file is
//! loaded first by the binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::settings::{Settings, DEFAULT_LOGIN_URL};

/// Todo comments - ownership-guarded todo pages with paginated comments
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-comments")]
#[command(about = "Serve todo detail pages and comment create/update/delete views")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Comments per page on the todo detail view
    #[arg(long, env = "PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Login page anonymous requests are redirected to
    #[arg(long, env = "LOGIN_URL", default_value = DEFAULT_LOGIN_URL)]
    pub login_url: String,

    /// JSON file with todos and comments to load at startup
    #[arg(long, env = "FIXTURES")]
    pub fixtures: Option<PathBuf>,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("PAGE_SIZE must be at least 1".to_string());
        }
        if self.login_url.trim().is_empty() {
            return Err("LOGIN_URL must not be empty".to_string());
        }
        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(format!("unsupported LOG_LEVEL `{}`", self.log_level));
        }
        Ok(())
    }

    /// The view settings these arguments describe.
    pub fn settings(&self) -> Settings {
        Settings {
            page_size: self.page_size,
            login_url: self.login_url.clone(),
        }
    }
}
