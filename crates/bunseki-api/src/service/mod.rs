//! Service module

mod bunseki_api_service;

pub use bunseki_api_service::{BunsekiApiServiceFull, TextAnalysisService};
