pub mod algorithm;
pub mod colour_mapping;
pub mod errors;
pub mod julia_config;
pub mod params;
