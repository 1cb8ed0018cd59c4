use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use asset_bootstrap::bridge::TracingBoundary;
use asset_bootstrap::config::ShimConfig;
use asset_bootstrap::logging::init_logging;
use asset_bootstrap::manifest::build_manifest_with_summary;
use asset_bootstrap::metadata::{resolve_version_code, resolve_version_name};
use asset_bootstrap::storage::external_storage_path;
use asset_bootstrap::{ActivityHandle, DirLister, LifecycleBridge, PlatformContext};

#[derive(Debug, Parser)]
#[command(
    name = "asset-bootstrap",
    version,
    about = "Enumerate bundled assets and drive the engine hand-off"
)]
struct Cli {
    /// Configuration file; defaults to `asset_bootstrap.config.json` in the working directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the manifest for an asset directory and print it.
    Scan {
        /// Asset directory; overrides the configured asset root.
        #[arg(long)]
        root: Option<PathBuf>,
        /// Print the manifest as a JSON array.
        #[arg(long)]
        json: bool,
        /// Also write the manifest JSON next to the configuration.
        #[arg(long)]
        write: bool,
    },
    /// Run one startup/shutdown cycle against a logging boundary.
    Launch {
        /// Asset directory; overrides the configured asset root.
        #[arg(long)]
        root: Option<PathBuf>,
        /// Package name reported as the platform context.
        #[arg(long, default_value = "com.tfe.game")]
        package: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let (config, base_dir) = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Scan { root, json, write } => {
            let root = root.unwrap_or_else(|| config.asset_root_path(&base_dir));
            ensure_directory(&root)?;
            let (manifest, summary) = build_manifest_with_summary(&DirLister::new(&root));

            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                for entry in &manifest {
                    println!("{entry}");
                }
            }

            if write {
                let target = base_dir.join(&config.manifest_json);
                fs::write(&target, serde_json::to_string_pretty(&manifest)?)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                tracing::info!(path = %target.display(), "wrote manifest");
            }

            tracing::info!(
                assets = summary.leaves,
                empty_directories = summary.empty_directories,
                elapsed_ms = summary.elapsed.as_millis() as u64,
                "scan complete"
            );
        }
        Command::Launch { root, package } => {
            let root = root.unwrap_or_else(|| config.asset_root_path(&base_dir));
            ensure_directory(&root)?;
            let storage =
                external_storage_path(&config).context("failed to resolve external storage")?;
            let metadata = config.metadata();

            println!("version code: {}", resolve_version_code(&metadata));
            println!(
                "version name: {}",
                resolve_version_name(&metadata).unwrap_or_else(|| "<unknown>".into())
            );
            println!("external storage: {storage}");

            let mut bridge = LifecycleBridge::new(TracingBoundary::new());
            bridge.on_startup(
                PlatformContext::new(package),
                ActivityHandle::new(1, "AndroidActivity"),
                Arc::new(DirLister::new(&root)),
                &storage,
            );
            bridge.on_shutdown();

            let boundary = bridge.into_boundary();
            println!(
                "handed {} assets to the engine ({} create, {} destroy)",
                boundary.last_manifest_len().unwrap_or_default(),
                boundary.created(),
                boundary.destroyed()
            );
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<(ShimConfig, PathBuf)> {
    match explicit {
        Some(path) => {
            let config = ShimConfig::load(path)?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Ok((config, base_dir))
        }
        None => {
            let cwd = std::env::current_dir().context("failed to read the working directory")?;
            Ok((ShimConfig::discover(&cwd), cwd))
        }
    }
}

fn ensure_directory(root: &Path) -> Result<()> {
    if !root.is_dir() {
        bail!("asset root {} is not a directory", root.display());
    }
    Ok(())
}
