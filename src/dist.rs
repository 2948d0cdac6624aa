use anyhow::{Context as _, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

use crate::{config::Config, styles};

pub const APP_BUNDLE_NAME: &str = "air_alert";
pub const WORKER_BUNDLE_NAME: &str = "worker";

/// Events of the service worker and their exported handlers.
const WORKER_EVENT_HANDLERS: &[(&str, &str)] = &[
    ("push", "on_push"),
    ("notificationclick", "on_notification_click"),
];

/// Assembles everything the browser loads into the dist directory.
///
/// Returns the written files.
pub fn assemble(cfg: &Config) -> Result<Vec<PathBuf>> {
    let dir = &cfg.dist.dir;
    if cfg.dist.clean && dir.exists() {
        log::debug!("Remove {}", dir.display());
        fs::remove_dir_all(dir).with_context(|| format!("Unable to clean {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("Unable to create {}", dir.display()))?;

    let mut written = vec![];
    if let Some(static_dir) = &cfg.dist.static_dir {
        written.extend(copy_static(static_dir, dir)?);
    }
    if let Some(pkg) = &cfg.bundles.app_pkg {
        written.extend(copy_app_bundle(pkg, dir)?);
    }
    if let Some(pkg) = &cfg.bundles.worker_pkg {
        written.extend(copy_worker_bundle(pkg, dir)?);
    }
    let styles = styles::write(&cfg.styles, dir)?;
    written.push(styles.file);
    written.extend(styles.hashed_file);
    Ok(written)
}

fn copy_static(from: &Path, to: &Path) -> Result<Vec<PathBuf>> {
    if !from.is_dir() {
        log::warn!("Static directory {} not found", from.display());
        return Ok(vec![]);
    }
    let mut written = vec![];
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(from)?;
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Unable to copy {}", entry.path().display()))?;
            written.push(target);
        }
    }
    Ok(written)
}

fn copy_app_bundle(pkg: &Path, to: &Path) -> Result<Vec<PathBuf>> {
    if !pkg.is_dir() {
        log::warn!(
            "App bundle {} not found (build with --features app)",
            pkg.display()
        );
        return Ok(vec![]);
    }
    let mut written = vec![];
    for name in [
        format!("{APP_BUNDLE_NAME}.js"),
        format!("{APP_BUNDLE_NAME}_bg.wasm"),
    ] {
        let target = to.join(&name);
        fs::copy(pkg.join(&name), &target)
            .with_context(|| format!("Unable to copy {name} from {}", pkg.display()))?;
        written.push(target);
    }
    Ok(written)
}

/// The worker is built for `no-modules`, so the glue code has to start
/// the wasm module itself.
fn copy_worker_bundle(pkg: &Path, to: &Path) -> Result<Vec<PathBuf>> {
    if !pkg.is_dir() {
        log::warn!(
            "Worker bundle {} not found (build with --features worker)",
            pkg.display()
        );
        return Ok(vec![]);
    }
    let script_name = format!("{WORKER_BUNDLE_NAME}.js");
    let wasm_name = format!("{WORKER_BUNDLE_NAME}_bg.wasm");

    let glue = fs::read_to_string(pkg.join(&script_name))
        .with_context(|| format!("Unable to read {script_name} from {}", pkg.display()))?;
    let script = to.join(&script_name);
    fs::write(&script, worker_script(&glue, &wasm_name))?;

    let wasm = to.join(&wasm_name);
    fs::copy(pkg.join(&wasm_name), &wasm)
        .with_context(|| format!("Unable to copy {wasm_name} from {}", pkg.display()))?;
    Ok(vec![script, wasm])
}

/// Listeners have to be added while the script is evaluated for the
/// first time, before the wasm module is ready.
fn worker_script(glue: &str, wasm_name: &str) -> String {
    let mut script = glue.trim_end().to_string();
    script.push_str(&format!(
        "\nconst ready = wasm_bindgen({{ module_or_path: \"/{wasm_name}\" }});\n"
    ));
    for (event, handler) in WORKER_EVENT_HANDLERS {
        script.push_str(&format!(
            "self.addEventListener(\"{event}\", (event) => \
             event.waitUntil(ready.then(() => wasm_bindgen.{handler}(event))));\n"
        ));
    }
    script
}
