pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalStorage;
pub use app::pipelines::{CarPipeline, GdpPipeline};
pub use config::{CarEtlConfig, EtlConfig, GdpEtlConfig, TableLocator};
pub use core::etl::EtlEngine;
pub use utils::error::{EtlError, Result};
