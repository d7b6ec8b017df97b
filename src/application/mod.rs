/// Application layer - use cases and application services
pub mod use_cases;
