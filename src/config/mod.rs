use anyhow::Result;
use lightningcss::targets::Browsers;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "air-alert-web.toml";

const ENV_NAME_DIST_DIR: &str = "AIR_ALERT_DIST_DIR";

pub struct Config {
    pub styles: Styles,
    pub dist: Dist,
    pub bundles: Bundles,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(dir) = env::var(ENV_NAME_DIST_DIR) {
            cfg.dist.dir = PathBuf::from(dir);
        }
        Ok(cfg)
    }
}

pub struct Styles {
    /// SCSS entry point.
    pub entry: PathBuf,
    /// Additional directories to resolve `@use` and `@import` from.
    pub load_paths: Vec<PathBuf>,
    /// File name of the stylesheet without extension.
    pub output_name: String,
    /// Also write a copy with a content hash in its name.
    pub content_hash: bool,
    pub browsers: Browsers,
}

pub struct Dist {
    pub dir: PathBuf,
    /// Remove the directory before assembling.
    pub clean: bool,
    /// Files that are copied as they are (e.g. the host page).
    pub static_dir: Option<PathBuf>,
}

/// `wasm-pack` output directories.
pub struct Bundles {
    pub app_pkg: Option<PathBuf>,
    pub worker_pkg: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Empty browser version")]
    Empty,
    #[error("Invalid browser version {0:?}")]
    Invalid(String),
}

/// Encodes `major[.minor[.patch]]` the way `lightningcss` expects it.
pub fn parse_browser_version(version: &str) -> std::result::Result<u32, VersionError> {
    let version = version.trim();
    if version.is_empty() {
        return Err(VersionError::Empty);
    }
    let parts = version
        .split('.')
        .map(str::parse::<u8>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| VersionError::Invalid(version.to_string()))?;
    if parts.len() > 3 {
        return Err(VersionError::Invalid(version.to_string()));
    }
    let part = |i: usize| u32::from(parts.get(i).copied().unwrap_or(0));
    Ok((part(0) << 16) | (part(1) << 8) | part(2))
}

fn browsers(targets: raw::Targets) -> std::result::Result<Browsers, VersionError> {
    let raw::Targets {
        android,
        chrome,
        edge,
        firefox,
        ie,
        ios_saf,
        opera,
        safari,
        samsung,
    } = targets;
    let parse = |v: Option<String>| v.as_deref().map(parse_browser_version).transpose();
    Ok(Browsers {
        android: parse(android)?,
        chrome: parse(chrome)?,
        edge: parse(edge)?,
        firefox: parse(firefox)?,
        ie: parse(ie)?,
        ios_saf: parse(ios_saf)?,
        opera: parse(opera)?,
        safari: parse(safari)?,
        samsung: parse(samsung)?,
        ..Browsers::default()
    })
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            styles,
            dist,
            bundles,
        } = from;

        let raw::Styles {
            entry,
            load_paths,
            output_name,
            content_hash,
            targets,
        } = styles.unwrap_or_default();

        if output_name.trim().is_empty() {
            return Err(anyhow::anyhow!("Missing stylesheet output name"));
        }
        let browsers = browsers(targets.unwrap_or_default())?;
        let styles = Styles {
            entry,
            load_paths,
            output_name,
            content_hash,
            browsers,
        };

        let raw::Dist {
            dir,
            clean,
            static_dir,
        } = dist.unwrap_or_default();
        let dist = Dist {
            dir,
            clean,
            static_dir,
        };

        let raw::Bundles {
            app_pkg,
            worker_pkg,
        } = bundles.unwrap_or_default();
        let bundles = Bundles {
            app_pkg,
            worker_pkg,
        };

        Ok(Self {
            styles,
            dist,
            bundles,
        })
    }
}
