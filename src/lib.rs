//! pc-compat - PC part compatibility checker
//!
//! This library resolves whether selected computer hardware parts are
//! mutually compatible (CPU↔motherboard socket, RAM↔motherboard memory
//! type) and aggregates per-pair checks into a whole-build verdict, backed
//! by a remote component catalog with a built-in reference dataset as
//! fallback.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compatibility`): Pure rules, the build aggregator,
//!   and domain models - no I/O
//! - **Application Layer** (`application`): The engine facade the CLI calls
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pc_compat::prelude::*;
//!
//! # async fn demo() {
//! // Catalog source with fail-soft fallback to the reference dataset
//! let source = HttpCatalogSource::new("https://api.example.com").unwrap();
//! let engine = CompatibilityEngine::new(source);
//!
//! // Pairwise check by component id
//! let verdict = engine.check_cpu_motherboard("1", "3").await;
//! println!("{}", verdict.message);
//!
//! // Whole-build verdict with itemized issues
//! let build = BuildRequest::new().with_cpu("1").with_motherboard("3").with_ram("5");
//! let verdict = engine.check_full_build(&build).await;
//! assert!(verdict.is_compatible);
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod compatibility;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrStatusReporter;
    pub use crate::adapters::outbound::filesystem::{
        ConversationFileLog, FileWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{
        CachingCatalogSource, GitHubMetadataClient, HttpCatalogSource, OllamaAdviceClient,
        StaticCatalogSource,
    };
    pub use crate::application::use_cases::CompatibilityEngine;
    pub use crate::compatibility::domain::{
        reference_catalog, BuildRequest, CompatibilityResult, Component, ComponentKind,
    };
    pub use crate::compatibility::rules;
    pub use crate::compatibility::services::BuildAggregator;
    pub use crate::ports::inbound::CompatibilityPort;
    pub use crate::ports::outbound::{
        AdviceClient, CatalogFetch, CatalogSource, ConversationLog, GitHubRepo, GitHubUser,
        OutputPresenter, RepoMetadataClient, StatusReporter,
    };
    pub use crate::shared::error::ExitCode;
    pub use crate::shared::Result;
}
