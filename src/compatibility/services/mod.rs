/// Domain services - build-level composition of pairwise rules
mod aggregator;

pub use aggregator::BuildAggregator;
