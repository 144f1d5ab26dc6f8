//! Kernel utilities shared across Lingo hosts.
//! Keep this crate lightweight; it only knows how to assemble configuration.
//!
//! ## Config loading
//! ```rust,no_run
//! use lingo_kernel::config::load_config;
//! use lingo_kernel::domain::config::LingoConfig;
//!
//! let cfg: LingoConfig = load_config(Some("lingo.toml")).unwrap_or_default();
//! println!("{} dictionaries configured", cfg.dictionaries.len());
//! ```

pub mod config;

pub use lingo_domain as domain;
