use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".gamepackrc.json";

pub const DEFAULT_EXTERNS: &[&str] = &[
    "externs/interpreter-externs.js",
    "externs/prettify-externs.js",
    "externs/soundJS-externs.js",
    "externs/storage-externs.js",
    "externs/svg-externs.js",
];

/// Build configuration. All paths are relative to the project root.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding every app, the shared sources and the generated messages.
    #[serde(default = "default_app_root")]
    pub app_root: String,
    /// Program and leading arguments of the dependency analyzer.
    #[serde(default = "default_deps_builder")]
    pub deps_builder: Vec<String>,
    /// Program and leading arguments of the optimizing compiler.
    #[serde(default = "default_compiler")]
    pub compiler: Vec<String>,
    #[serde(default = "default_externs")]
    pub externs: Vec<String>,
    #[serde(default = "default_language_out")]
    pub language_out: String,
    /// Language whose message file decides which keys are kept.
    #[serde(default = "default_baseline_language")]
    pub baseline_language: String,
    /// Script declaring the supported languages.
    #[serde(default = "default_boot_script")]
    pub boot_script: String,
}

fn default_app_root() -> String {
    "appengine".to_string()
}

fn default_deps_builder() -> Vec<String> {
    ["python3", "third-party/closurebuilder/closurebuilder.py"]
        .map(String::from)
        .to_vec()
}

fn default_compiler() -> Vec<String> {
    ["java", "-jar", "build/third-party-downloads/closure-compiler.jar"]
        .map(String::from)
        .to_vec()
}

fn default_externs() -> Vec<String> {
    DEFAULT_EXTERNS.iter().map(|s| s.to_string()).collect()
}

fn default_language_out() -> String {
    "ECMASCRIPT5".to_string()
}

fn default_baseline_language() -> String {
    "en".to_string()
}

fn default_boot_script() -> String {
    "appengine/common/boot.js".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_root: default_app_root(),
            deps_builder: default_deps_builder(),
            compiler: default_compiler(),
            externs: default_externs(),
            language_out: default_language_out(),
            baseline_language: default_baseline_language(),
            boot_script: default_boot_script(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Tool commands need at least a program name, and the app root must be a
    /// plain relative directory since it doubles as the path prefix stripped
    /// from dependency listings.
    pub fn validate(&self) -> Result<()> {
        if self.deps_builder.is_empty() {
            bail!("'depsBuilder' must name a program");
        }
        if self.compiler.is_empty() {
            bail!("'compiler' must name a program");
        }
        if self.app_root.is_empty() || self.app_root.ends_with('/') {
            bail!(
                "'appRoot' must be a directory name without trailing slash: \"{}\"",
                self.app_root
            );
        }
        Ok(())
    }

    /// Prefix every dependency path must start with, e.g. `appengine/`.
    pub fn source_prefix(&self) -> String {
        format!("{}/", self.app_root)
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(project_root: &Path) -> Result<ConfigLoadResult> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        });
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(ConfigLoadResult {
        config,
        from_file: true,
    })
}
