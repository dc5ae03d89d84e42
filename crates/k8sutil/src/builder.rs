use k8s_openapi::api::core::v1::{EnvVar, Volume, VolumeMount};
use rook_base::consts::{DEFAULT_REPO_PREFIX, DEFAULT_VERSION, IMAGE_NAME, env};

use crate::{
    Environment, ProcessEnvironment, config_dir_env_var, config_override_env_var,
    config_override_mount, config_override_volume, namespace_env_var, pod_ip_env_var,
};

/// Builds the pieces of a Rook daemon pod that depend on the operator's
/// environment.
///
/// The environment is consulted on every call; a changed `ROOKD_REPO_PREFIX`
/// is picked up by the next image or environment variable built.
#[derive(Clone, Debug, Default)]
pub struct PodConfigBuilder<E = ProcessEnvironment> {
    environment: E,
}

impl<E> PodConfigBuilder<E>
where
    E: Environment,
{
    #[must_use]
    pub const fn new(environment: E) -> Self { Self { environment } }

    /// The image repository prefix, `rook` unless `ROOKD_REPO_PREFIX` is set
    /// to a non-empty value.
    #[must_use]
    pub fn repo_prefix(&self) -> String {
        self.environment
            .var(env::REPO_PREFIX)
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| DEFAULT_REPO_PREFIX.to_string())
    }

    /// Forwards the resolved repository prefix to the daemon.
    #[must_use]
    pub fn repo_prefix_env_var(&self) -> EnvVar {
        EnvVar {
            name: env::REPO_PREFIX.to_string(),
            value: Some(self.repo_prefix()),
            ..EnvVar::default()
        }
    }

    /// Returns `<prefix>/rook:<version>`, with `latest` standing in for an
    /// empty version. The version is not validated.
    #[must_use]
    pub fn make_rook_image(&self, version: &str) -> String {
        let version = if version.is_empty() { DEFAULT_VERSION } else { version };
        format!("{}/{IMAGE_NAME}:{version}", self.repo_prefix())
    }

    /// The environment every Rook daemon container is started with.
    #[must_use]
    pub fn env_vars(&self) -> Vec<EnvVar> {
        vec![
            config_override_env_var(),
            namespace_env_var(),
            pod_ip_env_var(),
            self.repo_prefix_env_var(),
            config_dir_env_var(),
        ]
    }

    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn volumes(&self) -> Vec<Volume> { vec![config_override_volume()] }

    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn volume_mounts(&self) -> Vec<VolumeMount> { vec![config_override_mount()] }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn builder_with_prefix(prefix: Option<&str>) -> PodConfigBuilder<BTreeMap<String, String>> {
        PodConfigBuilder::new(
            prefix
                .map(|prefix| (env::REPO_PREFIX.to_string(), prefix.to_string()))
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn test_repo_prefix_default() {
        assert_eq!(builder_with_prefix(None).repo_prefix(), "rook");
        assert_eq!(builder_with_prefix(Some("")).repo_prefix(), "rook");
    }

    #[test]
    fn test_repo_prefix_from_environment() {
        let builder = builder_with_prefix(Some("quay.io/rook"));
        assert_eq!(builder.repo_prefix(), "quay.io/rook");

        let var = builder.repo_prefix_env_var();
        assert_eq!(var.name, "ROOKD_REPO_PREFIX");
        assert_eq!(var.value.as_deref(), Some("quay.io/rook"));
    }

    #[test]
    fn test_make_rook_image() {
        let builder = builder_with_prefix(None);
        assert_eq!(builder.make_rook_image(""), "rook/rook:latest");
        assert_eq!(builder.make_rook_image("v0.4.0"), "rook/rook:v0.4.0");

        let builder = builder_with_prefix(Some("registry.local:5000/storage"));
        assert_eq!(builder.make_rook_image(""), "registry.local:5000/storage/rook:latest");
        assert_eq!(builder.make_rook_image("1.2.3"), "registry.local:5000/storage/rook:1.2.3");
    }

    #[test]
    fn test_environment_is_read_on_every_call() {
        let mut environment = BTreeMap::new();
        assert_eq!(PodConfigBuilder::new(&environment).make_rook_image("1.0"), "rook/rook:1.0");

        let _prev = environment.insert(env::REPO_PREFIX.to_string(), "mirror".to_string());
        assert_eq!(PodConfigBuilder::new(&environment).make_rook_image("1.0"), "mirror/rook:1.0");
    }

    #[test]
    fn test_builds_are_deterministic() {
        let builder = builder_with_prefix(Some("quay.io/rook"));
        assert_eq!(builder.env_vars(), builder.env_vars());
        assert_eq!(builder.volumes(), builder.volumes());
        assert_eq!(builder.make_rook_image("v1"), builder.make_rook_image("v1"));
    }

    #[test]
    fn test_env_vars_order() {
        let names = builder_with_prefix(None)
            .env_vars()
            .into_iter()
            .map(|var| var.name)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "ROOKD_CEPH_CONFIG_OVERRIDE",
                "ROOKD_NAMESPACE",
                "ROOKD_PRIVATE_IPV4",
                "ROOKD_REPO_PREFIX",
                "ROOKD_CONFIG_DIR"
            ]
        );
    }

    #[test]
    fn test_volumes_and_mounts_pair_up() {
        let builder = builder_with_prefix(None);
        let volumes = builder.volumes();
        let mounts = builder.volume_mounts();
        assert_eq!(volumes.len(), 1);
        assert_eq!(mounts.len(), 1);
        assert_eq!(volumes[0].name, mounts[0].name);
    }
}
