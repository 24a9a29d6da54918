//! Board configuration resolution
//!
//! Pure transformations over host-supplied board data: default debug tool
//! derivation, adapter speed handling, and package selection defaults.

pub mod debug_tools;
pub mod packages;
pub mod types;

pub use debug_tools::{apply_adapter_speed, derive_default_tools, derive_default_tools_all};
pub use packages::{configure_default_packages, effective_upload_protocol, DeprecatedBoards};
pub use types::*;
