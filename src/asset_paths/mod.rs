//! Helpers for building and normalising asset namespace paths.
//!
//! Asset paths always use `/`, never carry a leading separator and the namespace root is the
//! empty string. Traversal output is built with [`child_path`] only, so it never needs to be
//! normalised; [`normalise_asset_path`] is reserved for paths that come from users.

mod join;
mod normalise;

pub use join::{child_path, is_root};
pub use normalise::normalise_asset_path;
