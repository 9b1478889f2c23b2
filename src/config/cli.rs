use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::domain::model::MenuFilter;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "restoops")]
#[command(about = "Terminal client for the RestoOps menu and reservation API")]
pub struct CliArgs {
    /// Backend base address (default http://localhost:8001)
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Offset used to display timestamps (default +7, WIB)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub utc_offset_hours: Option<i32>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Landing page with backend address and available views
    Home,
    /// Restaurant menu, optionally filtered by availability
    Menu {
        #[arg(long, default_value = "all", value_parser = parse_menu_filter)]
        filter: MenuFilter,

        /// Keep the view open and read filter commands from stdin
        #[arg(short, long)]
        interactive: bool,
    },
    /// Reservations, optionally filtered by minimum duration in hours
    Reservations {
        #[arg(long)]
        min_duration: Option<u32>,

        #[arg(short, long)]
        interactive: bool,
    },
}

fn parse_menu_filter(s: &str) -> std::result::Result<MenuFilter, String> {
    s.parse()
}

impl CliArgs {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Home)
    }

    /// Defaults, then the TOML file, then command line flags.
    pub fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(base_url) = &self.api_base_url {
            config.api_base_url = base_url.clone();
        }
        if self.timeout_seconds.is_some() {
            config.timeout_seconds = self.timeout_seconds;
        }
        if let Some(offset) = self.utc_offset_hours {
            config.utc_offset_hours = offset;
        }

        Ok(config)
    }
}
