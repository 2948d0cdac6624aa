use anyhow::{anyhow, Context as _, Result};
use lightningcss::{
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet},
    targets::{Browsers, Targets},
};
use sha2::{Digest, Sha256};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config;

const HASH_LEN: usize = 16;
const MANIFEST_FILE_NAME: &str = "manifest.json";

#[derive(Debug)]
pub struct WrittenStyles {
    pub file: PathBuf,
    pub hashed_file: Option<PathBuf>,
}

/// Compiles the SCSS entry point into prefixed and minified CSS.
pub fn compile(cfg: &config::Styles) -> Result<String> {
    let options = grass::Options::default().load_paths(&cfg.load_paths);
    let css = grass::from_path(&cfg.entry, &options)
        .map_err(|err| anyhow!("Unable to compile {}: {err}", cfg.entry.display()))?;
    prefix_and_minify(&css, cfg.browsers)
}

fn prefix_and_minify(css: &str, browsers: Browsers) -> Result<String> {
    let mut sheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|err| anyhow!("Unable to parse CSS: {err}"))?;
    sheet
        .minify(MinifyOptions {
            targets: Targets::from(browsers),
            ..MinifyOptions::default()
        })
        .map_err(|err| anyhow!("Unable to minify CSS: {err}"))?;
    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            targets: Targets::from(browsers),
            ..PrinterOptions::default()
        })
        .map_err(|err| anyhow!("Unable to print CSS: {err}"))?;
    Ok(printed.code)
}

/// First hex digits of the SHA-256 of `content`.
pub fn content_hash(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let mut hash = hex::encode(digest);
    hash.truncate(HASH_LEN);
    hash
}

/// Compiles the stylesheet and writes it into `out_dir`.
///
/// With content hashing enabled a second copy named
/// `<name>.<hash>.chunk.css` is written and recorded in the manifest.
pub fn write(cfg: &config::Styles, out_dir: &Path) -> Result<WrittenStyles> {
    let css = compile(cfg)?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Unable to create {}", out_dir.display()))?;

    let name = format!("{}.css", cfg.output_name);
    let file = out_dir.join(&name);
    fs::write(&file, &css).with_context(|| format!("Unable to write {}", file.display()))?;
    log::debug!("Wrote {} ({} bytes)", file.display(), css.len());

    let hashed_file = if cfg.content_hash {
        let hashed_name = format!("{}.{}.chunk.css", cfg.output_name, content_hash(&css));
        let hashed_file = out_dir.join(&hashed_name);
        fs::write(&hashed_file, &css)
            .with_context(|| format!("Unable to write {}", hashed_file.display()))?;
        update_manifest(out_dir, &name, &hashed_name)?;
        Some(hashed_file)
    } else {
        None
    };
    Ok(WrittenStyles { file, hashed_file })
}

fn update_manifest(out_dir: &Path, name: &str, hashed_name: &str) -> Result<()> {
    let path = out_dir.join(MANIFEST_FILE_NAME);
    let mut manifest: BTreeMap<String, String> = match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json)
            .with_context(|| format!("Invalid manifest {}", path.display()))?,
        Err(_) => BTreeMap::new(),
    };
    manifest.insert(name.to_string(), hashed_name.to_string());
    fs::write(&path, serde_json::to_string_pretty(&manifest)?)?;
    Ok(())
}
