pub mod cleaned_folder;
pub mod cleaned_workspace;
pub mod file;
pub mod folder;
pub mod mutation;
pub mod resource;
pub mod workspace;

pub use mutation::{CreateTarget, MutationRequest, MutationResponse, MutationTarget};
pub use resource::{HttpMethod, ResourceKind};
