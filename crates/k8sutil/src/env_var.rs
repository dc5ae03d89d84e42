use k8s_openapi::api::core::v1::{EnvVar, EnvVarSource, ObjectFieldSelector};
use rook_base::consts::{DATA_DIR, env, k8s::field_paths};

use crate::volume::config_override_path;

/// Points the daemon at the mounted config override file.
#[must_use]
pub fn config_override_env_var() -> EnvVar {
    EnvVar {
        name: env::CONFIG_OVERRIDE.to_string(),
        value: Some(config_override_path()),
        ..EnvVar::default()
    }
}

/// Exposes the pod's own namespace, resolved by the kubelet when the pod
/// starts.
#[must_use]
pub fn namespace_env_var() -> EnvVar { field_ref_env_var(env::NAMESPACE, field_paths::NAMESPACE) }

/// Exposes the pod's private IP, resolved by the kubelet when the pod starts.
#[must_use]
pub fn pod_ip_env_var() -> EnvVar { field_ref_env_var(env::POD_IP, field_paths::POD_IP) }

#[must_use]
pub fn config_dir_env_var() -> EnvVar {
    EnvVar {
        name: env::CONFIG_DIR.to_string(),
        value: Some(DATA_DIR.to_string()),
        ..EnvVar::default()
    }
}

fn field_ref_env_var(name: &str, field_path: &str) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value_from: Some(EnvVarSource {
            field_ref: Some(ObjectFieldSelector {
                field_path: field_path.to_string(),
                ..ObjectFieldSelector::default()
            }),
            ..EnvVarSource::default()
        }),
        ..EnvVar::default()
    }
}
