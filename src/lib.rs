pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, Command};

pub use adapters::http::HttpRestoApi;
pub use app::RestoOpsApp;
pub use config::ClientConfig;
pub use crate::core::order::{decode_order_entry, MenuLookup};
pub use crate::core::view::{ViewController, ViewState};
pub use domain::model::{DecodedOrder, DurationFilter, MenuEntry, MenuFilter, ReservationEntry};
pub use render::RenderContext;
pub use utils::error::{RestoError, Result};
