//! The one-way interface into the engine.

use super::handles::{ActivityHandle, AssetAccessor};

/// Entry points exposed by the native engine.
///
/// Calls are fire-and-forget: nothing is returned and the bridge never waits for an
/// acknowledgement.
pub trait NativeBoundary {
    /// Hand over the activity, asset access, manifest and external storage path before the
    /// engine starts.
    fn on_create_activity(
        &mut self,
        activity: &ActivityHandle,
        assets: AssetAccessor,
        manifest: Vec<String>,
        external_storage_path: &str,
    );

    /// Tell the engine the activity is going away.
    fn on_destroy_activity(&mut self);
}

/// Boundary that only reports what it receives. Used for dry runs without an engine.
#[derive(Debug, Default)]
pub struct TracingBoundary {
    created: usize,
    destroyed: usize,
    last_manifest_len: Option<usize>,
}

impl TracingBoundary {
    /// Fresh boundary with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of create calls received.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Number of destroy calls received.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Manifest length passed with the latest create call.
    pub fn last_manifest_len(&self) -> Option<usize> {
        self.last_manifest_len
    }
}

impl NativeBoundary for TracingBoundary {
    fn on_create_activity(
        &mut self,
        activity: &ActivityHandle,
        assets: AssetAccessor,
        manifest: Vec<String>,
        external_storage_path: &str,
    ) {
        self.created += 1;
        self.last_manifest_len = Some(manifest.len());
        tracing::info!(
            activity = %activity.name,
            activity_id = activity.id,
            manifest_entries = manifest.len(),
            root_entries = assets.list("").map_or(0, |names| names.len()),
            storage = external_storage_path,
            "native boundary: create activity"
        );
    }

    fn on_destroy_activity(&mut self) {
        self.destroyed += 1;
        tracing::info!("native boundary: destroy activity");
    }
}
