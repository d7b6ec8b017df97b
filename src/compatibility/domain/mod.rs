pub mod build_request;
pub mod component;
pub mod reference;
pub mod result;

pub use build_request::BuildRequest;
pub use component::{Component, ComponentKind};
pub use reference::reference_catalog;
pub use result::CompatibilityResult;
