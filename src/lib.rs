pub mod configuration;
pub mod contract;
pub mod dictionary_client;
pub mod domain;
pub mod telemetry;
pub mod utils;
