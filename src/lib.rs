//! MCP server exposing the MeasureSpace weather, climate, air quality,
//! agriculture and geocoding APIs as callable tools.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod models;
pub mod service;
