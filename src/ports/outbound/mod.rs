/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, console, file system).
pub mod advice_client;
pub mod catalog_source;
pub mod conversation_log;
pub mod output_presenter;
pub mod repo_metadata_client;
pub mod status_reporter;

pub use advice_client::AdviceClient;
pub use catalog_source::{CatalogFetch, CatalogSource};
pub use conversation_log::ConversationLog;
pub use output_presenter::OutputPresenter;
pub use repo_metadata_client::{GitHubRepo, GitHubUser, RepoMetadataClient};
pub use status_reporter::StatusReporter;
