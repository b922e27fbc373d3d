//! Tool Handler Adapters.
//!
//! Each handler binds one tool specification to its data provider port,
//! translating validated tool arguments into provider calls and provider
//! failures into tool errors the registry can absorb.

mod air_quality_tool;
mod directions_tool;
mod weather_tool;

pub use air_quality_tool::AirQualityTool;
pub use directions_tool::DirectionsTool;
pub use weather_tool::WeatherTool;
