/// Pairwise compatibility rules - pure functions, no I/O
mod pair_rules;

pub use pair_rules::{components_not_found, cpu_motherboard, ram_motherboard};
