//! Process-lifetime state shared between the platform callbacks and the engine.

use std::cell::OnceCell;
use std::collections::VecDeque;
use std::sync::Arc;

use super::boundary::NativeBoundary;
use super::handles::{ActivityHandle, AssetAccessor, PlatformContext};
use crate::lister::Lister;
use crate::manifest::{Manifest, build_manifest_with_summary};

/// Context object created once per process and driven by the platform lifecycle.
///
/// The manifest is built on the first startup and reused afterwards: later startups in the
/// same process (for example after the platform recreates the foreground surface) never walk
/// the namespace again. The boundary is notified on every startup regardless.
///
/// Activity lifetimes may overlap: a new activity can start before the previous one has shut
/// down. Every startup stays outstanding until a shutdown pairs with it, oldest first.
#[derive(Debug)]
pub struct LifecycleBridge<B> {
    boundary: B,
    context: Option<PlatformContext>,
    activities: VecDeque<ActivityHandle>,
    manifest: OnceCell<Manifest>,
}

impl<B: NativeBoundary> LifecycleBridge<B> {
    /// Bridge forwarding to `boundary`. Nothing is scanned until the first startup.
    pub fn new(boundary: B) -> Self {
        Self {
            boundary,
            context: None,
            activities: VecDeque::new(),
            manifest: OnceCell::new(),
        }
    }

    /// Startup callback: record the platform handles, build the manifest if this is the first
    /// startup, then hand everything to the native side.
    ///
    /// Blocks until the manifest is complete.
    pub fn on_startup(
        &mut self,
        context: PlatformContext,
        activity: ActivityHandle,
        lister: Arc<dyn Lister + Send + Sync>,
        external_storage_path: &str,
    ) {
        if let Some(previous) = self.activities.back() {
            tracing::debug!(
                previous = %previous.name,
                next = %activity.name,
                "startup overlaps an activity that has not shut down yet"
            );
        }
        self.context = Some(context);
        self.activities.push_back(activity);

        let manifest = self.manifest.get_or_init(|| {
            let (manifest, summary) = build_manifest_with_summary(&*lister);
            tracing::info!(
                assets = summary.leaves,
                elapsed_ms = summary.elapsed.as_millis() as u64,
                "created asset manifest"
            );
            manifest
        });

        if let Some(activity) = self.activities.back() {
            self.boundary.on_create_activity(
                activity,
                AssetAccessor::new(lister),
                manifest.to_vec(),
                external_storage_path,
            );
        }
    }

    /// Shutdown callback: release the oldest outstanding activity and notify the native side.
    ///
    /// The manifest stays cached. The context is released once no activity is outstanding. A
    /// shutdown with nothing outstanding is ignored so teardowns never outnumber startups.
    pub fn on_shutdown(&mut self) {
        let Some(activity) = self.activities.pop_front() else {
            tracing::warn!("shutdown received with no active activity, ignoring");
            return;
        };
        if self.activities.is_empty() {
            self.context = None;
        }
        tracing::debug!(activity = %activity.name, "tearing down activity");
        self.boundary.on_destroy_activity();
    }

    /// Manifest built by the first startup, if any.
    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.get()
    }

    /// Platform context recorded by the latest startup, while any activity is outstanding.
    pub fn context(&self) -> Option<&PlatformContext> {
        self.context.as_ref()
    }

    /// Most recently started activity that has not shut down.
    pub fn activity(&self) -> Option<&ActivityHandle> {
        self.activities.back()
    }

    /// Number of startups still waiting for their shutdown.
    pub fn outstanding(&self) -> usize {
        self.activities.len()
    }

    /// Returns `true` while any startup is waiting for its shutdown.
    pub fn is_active(&self) -> bool {
        !self.activities.is_empty()
    }

    /// Borrow the boundary.
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Consume the bridge and return the boundary.
    pub fn into_boundary(self) -> B {
        self.boundary
    }
}
