/// Mock implementations for testing
mod mock_catalog_source;

pub use mock_catalog_source::MockCatalogSource;
