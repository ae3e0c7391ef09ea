pub mod current;
pub mod forecast;
pub mod pipeline;
pub mod rules;
pub mod transform;

pub use pipeline::WeatherPipeline;
