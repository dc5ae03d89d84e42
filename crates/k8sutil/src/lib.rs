//! Configuration fragments for Rook daemon pods.
//!
//! Everything in this crate is descriptive: the builders return volumes,
//! volume mounts, environment variables, images and affinity rules which the
//! caller assembles into a pod before handing it to the cluster API. The only
//! mutations are the annotation writes performed by
//! [`pod_with_anti_affinity`] and [`set_pod_version`] on a pod owned by the
//! caller.

mod affinity;
mod builder;
mod env_var;
mod environment;
mod error;
mod pod;
mod volume;

pub use self::{
    affinity::{anti_affinity, pod_with_anti_affinity},
    builder::PodConfigBuilder,
    env_var::{config_dir_env_var, config_override_env_var, namespace_env_var, pod_ip_env_var},
    environment::{Environment, ProcessEnvironment},
    error::Error,
    pod::{PodExt, daemon_labels, pod_names, set_pod_version},
    volume::{config_override_mount, config_override_path, config_override_volume},
};
