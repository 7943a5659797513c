//! # State Module
//!
//! Application state for the storefront.
//!
//! Two independent state types, each with a single responsibility:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StoreState   Arc<Mutex<StoreManager>>   inventory + carts (mutable)    │
//! │  AppConfig    plain struct               settings (read-only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{AppConfig, OutputFormat};
pub use store::StoreState;
