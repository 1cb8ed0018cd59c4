//! Startup and shutdown hand-off to the engine's native boundary.
//!
//! [`LifecycleBridge`] is the long-lived context object for one process. It owns the platform
//! handles while an activity is alive and the manifest for the whole process lifetime.

mod boundary;
mod handles;
mod lifecycle;

pub use boundary::{NativeBoundary, TracingBoundary};
pub use handles::{ActivityHandle, AssetAccessor, PlatformContext};
pub use lifecycle::LifecycleBridge;
