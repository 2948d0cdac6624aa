use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("air-alert-web.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub styles: Option<Styles>,
    pub dist: Option<Dist>,
    pub bundles: Option<Bundles>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Styles {
    pub entry: PathBuf,
    #[serde(default)]
    pub load_paths: Vec<PathBuf>,
    pub output_name: String,
    #[serde(default)]
    pub content_hash: bool,
    pub targets: Option<Targets>,
}

impl Default for Styles {
    fn default() -> Self {
        Config::default().styles.expect("Styles configuration")
    }
}

/// Minimum browser versions as `major[.minor[.patch]]`.
#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Targets {
    pub android: Option<String>,
    pub chrome: Option<String>,
    pub edge: Option<String>,
    pub firefox: Option<String>,
    pub ie: Option<String>,
    pub ios_saf: Option<String>,
    pub opera: Option<String>,
    pub safari: Option<String>,
    pub samsung: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dist {
    pub dir: PathBuf,
    #[serde(default)]
    pub clean: bool,
    pub static_dir: Option<PathBuf>,
}

impl Default for Dist {
    fn default() -> Self {
        Config::default().dist.expect("Dist configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bundles {
    pub app_pkg: Option<PathBuf>,
    pub worker_pkg: Option<PathBuf>,
}

impl Default for Bundles {
    fn default() -> Self {
        Config::default().bundles.expect("Bundles configuration")
    }
}
