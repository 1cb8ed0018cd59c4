#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod bridge;
pub mod config;
pub mod lister;
pub mod logging;
pub mod manifest;
pub mod metadata;
pub mod storage;

pub use bridge::{ActivityHandle, AssetAccessor, LifecycleBridge, NativeBoundary, PlatformContext};
pub use config::ShimConfig;
pub use lister::{DirLister, Lister, MemoryLister, NotListable};
pub use manifest::{Manifest, build_manifest};
