/// Compatibility resolution - pure business logic and domain models
///
/// Nothing in this module performs I/O. Catalog acquisition lives behind the
/// `CatalogSource` port; this layer only evaluates records it is handed.
pub mod domain;
pub mod rules;
pub mod services;
