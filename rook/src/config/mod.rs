mod error;
mod log;
mod output_format;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use resolve_path::PathResolveExt;
use rook_base::PROJECT_NAME;
use rook_k8sutil::{PodConfigBuilder, ProcessEnvironment};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{error::Error, log::LogConfig, output_format::OutputFormat};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Variables consulted before the process environment when building pod
    /// configuration, e.g. `ROOKD_REPO_PREFIX`.
    #[serde(default)]
    pub environment: BTreeMap<String, String>,

    /// Image tag used when none is given on the command line. Empty means
    /// `latest`.
    #[serde(default)]
    pub default_version: String,

    /// Value of the `rook_cluster` label when neither a cluster nor a
    /// namespace is given.
    #[serde(default = "default_cluster")]
    pub default_cluster: String,

    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: BTreeMap::new(),
            default_version: String::new(),
            default_cluster: default_cluster(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Returns the first existing configuration file, if any.
    pub fn search_config_file_path() -> Option<PathBuf> {
        std::iter::once(Self::default_path())
            .chain(rook_base::fallback_project_config_directories().into_iter().map(|mut path| {
                path.push(rook_base::CLI_CONFIG_NAME);
                path
            }))
            .find(|path| path.try_exists().unwrap_or(false))
    }

    #[inline]
    pub fn default_path() -> PathBuf {
        [rook_base::PROJECT_CONFIG_DIR.to_path_buf(), PathBuf::from(rook_base::CLI_CONFIG_NAME)]
            .into_iter()
            .collect()
    }

    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let path =
                path.as_ref().try_resolve().map(|path| path.to_path_buf()).with_context(|_| {
                    error::ResolveFilePathSnafu { file_path: path.as_ref().to_path_buf() }
                })?;
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.log.file_path = match config.log.file_path.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        Ok(config)
    }

    /// The default configuration rendered as YAML.
    pub fn template_basic() -> Result<String, crate::cli::Error> {
        OutputFormat::Yaml.render(&Self::default())
    }

    /// A builder resolving variables from [`Config::environment`] first and
    /// from the process environment second.
    pub const fn pod_config_builder(
        &self,
    ) -> PodConfigBuilder<(&BTreeMap<String, String>, ProcessEnvironment)> {
        PodConfigBuilder::new((&self.environment, ProcessEnvironment))
    }

    pub fn version_or_default(&self, version: Option<String>) -> String {
        version.filter(|v| !v.is_empty()).unwrap_or_else(|| self.default_version.clone())
    }
}

fn default_cluster() -> String { PROJECT_NAME.to_string() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.environment.is_empty());
        assert_eq!(config.default_version, "");
        assert_eq!(config.default_cluster, "rook");
        assert_eq!(config.log.level, tracing::Level::INFO);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r"
environment:
  ROOKD_REPO_PREFIX: quay.io/rook
defaultVersion: v0.4.0
defaultCluster: rook-ceph
log:
  level: DEBUG
  emitStderr: false
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_version, "v0.4.0");
        assert_eq!(config.default_cluster, "rook-ceph");
        assert_eq!(config.log.level, tracing::Level::DEBUG);
        assert!(!config.log.emit_stderr);

        let builder = config.pod_config_builder();
        assert_eq!(builder.make_rook_image(""), "quay.io/rook/rook:latest");
    }

    #[test]
    fn test_version_or_default() {
        let config = Config { default_version: "v0.4.0".to_string(), ..Config::default() };
        assert_eq!(config.version_or_default(None), "v0.4.0");
        assert_eq!(config.version_or_default(Some(String::new())), "v0.4.0");
        assert_eq!(config.version_or_default(Some("v0.5.0".to_string())), "v0.5.0");
    }

    #[test]
    fn test_default_config_round_trips() {
        let yaml = Config::template_basic().unwrap();
        let config: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.default_cluster, Config::default().default_cluster);
        assert_eq!(config.log.level, Config::default().log.level);
    }
}
