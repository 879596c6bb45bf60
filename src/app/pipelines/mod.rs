pub mod car_pipeline;
pub mod gdp_pipeline;

pub use car_pipeline::CarPipeline;
pub use gdp_pipeline::GdpPipeline;
