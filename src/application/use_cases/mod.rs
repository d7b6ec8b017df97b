/// Use cases - application services orchestrating domain logic and ports
mod check_compatibility;

pub use check_compatibility::CompatibilityEngine;
