//! Constants shared between Rook operator components.
//!
//! Other components (and the cluster itself, through labels and annotations)
//! refer to these by exact value, so none of them may change without a
//! migration of the pods already running in a cluster.

/// The repository prefix used for Rook images when `ROOKD_REPO_PREFIX` is
/// unset or empty.
pub const DEFAULT_REPO_PREFIX: &str = "rook";

/// The image tag used when no version is requested.
pub const DEFAULT_VERSION: &str = "latest";

/// The name of the Rook image inside a repository.
pub const IMAGE_NAME: &str = "rook";

/// The directory in which Rook daemons keep their data and generated
/// configuration.
pub const DATA_DIR: &str = "/var/lib/rook";

pub mod k8s {
    //! Kubernetes labels, annotations and scheduling keys used by Rook.

    pub mod labels {
        //! Label keys attached to Rook daemon pods.

        /// Identifies the component type of a pod, e.g. `mon` or `osd`.
        pub const APP: &str = "app";

        /// Identifies the Rook cluster a pod belongs to.
        pub const CLUSTER: &str = "rook_cluster";

        /// Tracks the Rook version a pod was deployed with. Used both as a
        /// label and as an annotation key.
        pub const VERSION: &str = "rook_version";
    }

    pub mod annotations {
        /// The annotation read by the scheduler for affinity rules encoded as
        /// JSON.
        pub const AFFINITY: &str = "scheduler.alpha.kubernetes.io/affinity";
    }

    /// Node label whose value defines "the same host" for anti-affinity.
    pub const HOSTNAME_TOPOLOGY_KEY: &str = "kubernetes.io/hostname";

    pub mod field_paths {
        pub const NAMESPACE: &str = "metadata.namespace";
        pub const POD_IP: &str = "status.podIP";
    }
}

pub mod config_override {
    //! Names and paths of the config override mounted into every daemon.

    /// Name of both the config map and the volume carrying the override.
    pub const NAME: &str = "rook-config-override";

    /// Key inside the config map holding the override content.
    pub const KEY: &str = "config";

    /// Directory the override volume is mounted at.
    pub const MOUNT_DIR: &str = "/etc/rook";

    /// File name the override key is projected to under [`MOUNT_DIR`].
    pub const FILENAME: &str = "override.conf";
}

pub mod env {
    //! Environment variables consumed by the operator or injected into
    //! daemon pods.

    /// Overrides the image repository prefix.
    pub const REPO_PREFIX: &str = "ROOKD_REPO_PREFIX";

    pub const POD_IP: &str = "ROOKD_PRIVATE_IPV4";
    pub const CONFIG_OVERRIDE: &str = "ROOKD_CEPH_CONFIG_OVERRIDE";
    pub const NAMESPACE: &str = "ROOKD_NAMESPACE";
    pub const CONFIG_DIR: &str = "ROOKD_CONFIG_DIR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_values() {
        assert_eq!(k8s::labels::APP, "app");
        assert_eq!(k8s::labels::CLUSTER, "rook_cluster");
        assert_eq!(k8s::labels::VERSION, "rook_version");
        assert_eq!(env::POD_IP, "ROOKD_PRIVATE_IPV4");
        assert_eq!(env::REPO_PREFIX, "ROOKD_REPO_PREFIX");
        assert_eq!(DEFAULT_REPO_PREFIX, "rook");
        assert_eq!(config_override::NAME, "rook-config-override");
        assert_eq!(config_override::KEY, "config");
        assert_eq!(config_override::MOUNT_DIR, "/etc/rook");
        assert_eq!(config_override::FILENAME, "override.conf");
    }
}
