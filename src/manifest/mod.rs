//! Asset namespace walker and the manifest it produces.

mod model;
mod walker;

pub use model::Manifest;
pub use walker::{ManifestSummary, build_manifest, build_manifest_with_summary};
