use k8s_openapi::api::core::v1::{ConfigMapVolumeSource, KeyToPath, Volume, VolumeMount};
use rook_base::consts::config_override;

/// The mount of the config override volume inside a daemon container.
#[must_use]
pub fn config_override_mount() -> VolumeMount {
    VolumeMount {
        name: config_override::NAME.to_string(),
        mount_path: config_override::MOUNT_DIR.to_string(),
        ..VolumeMount::default()
    }
}

/// The config override volume, projecting the single `config` key of the
/// `rook-config-override` config map to `override.conf`.
#[must_use]
pub fn config_override_volume() -> Volume {
    Volume {
        name: config_override::NAME.to_string(),
        config_map: Some(ConfigMapVolumeSource {
            name: config_override::NAME.to_string(),
            items: Some(vec![KeyToPath {
                key: config_override::KEY.to_string(),
                path: config_override::FILENAME.to_string(),
                ..KeyToPath::default()
            }]),
            ..ConfigMapVolumeSource::default()
        }),
        ..Volume::default()
    }
}

/// Path of the override file as seen from inside the container. Always
/// `/`-separated, whatever the operator's host.
#[must_use]
pub fn config_override_path() -> String {
    format!("{}/{}", config_override::MOUNT_DIR, config_override::FILENAME)
}
