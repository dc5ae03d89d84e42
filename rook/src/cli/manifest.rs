use clap::Args;
use k8s_openapi::{
    api::core::v1::{Container, Pod, PodSpec},
    apimachinery::pkg::apis::meta::v1::ObjectMeta,
};
use kube::ResourceExt;
use rook_base::consts::{DEFAULT_VERSION, k8s::labels};
use rook_k8sutil::{
    Environment, PodConfigBuilder, PodExt, daemon_labels, pod_with_anti_affinity,
    set_pod_version,
};

use crate::{
    cli::{Error, internal::write_stdout},
    config::{Config, OutputFormat},
};

#[derive(Args, Clone)]
pub struct ManifestCommand {
    #[arg(short = 'p', long = "pod-name", help = "Name of the daemon pod.")]
    pub pod_name: String,

    #[arg(
        short = 'n',
        long = "namespace",
        help = "Namespace of the pod. Left unset in the manifest if not given."
    )]
    pub namespace: Option<String>,

    #[arg(
        short = 'a',
        long = "app",
        help = "Daemon type, written to the `app` label and used for anti-affinity (e.g. `mon`, \
                `osd`)."
    )]
    pub app: String,

    #[arg(
        long = "cluster",
        help = "Value of the `rook_cluster` label. Defaults to the namespace, then to \
                `defaultCluster` from the configuration file."
    )]
    pub cluster: Option<String>,

    #[arg(
        long = "version",
        help = "Rook version of the daemon. Defaults to `defaultVersion` from the configuration \
                file, then to `latest`."
    )]
    pub version: Option<String>,

    #[arg(
        long = "no-anti-affinity",
        help = "Allow several daemons of the same type on one host."
    )]
    pub no_anti_affinity: bool,

    #[arg(
        short = 'o',
        long = "output",
        default_value = "yaml",
        help = "Output format, `yaml` or `json`."
    )]
    pub output: OutputFormat,
}

impl ManifestCommand {
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let Self { pod_name, namespace, app, cluster, version, no_anti_affinity, output } = self;
        let cluster = cluster
            .filter(|s| !s.is_empty())
            .or_else(|| namespace.clone())
            .unwrap_or_else(|| config.default_cluster.clone());
        let daemon = Daemon {
            pod_name,
            namespace,
            app,
            cluster,
            version: config.version_or_default(version),
            anti_affinity: !no_anti_affinity,
        };

        let pod = build_pod_manifest(&config.pod_config_builder(), daemon)?;
        tracing::info!(
            version = pod.version(labels::VERSION).unwrap_or_default(),
            anti_affinity = pod.anti_affinity().is_some(),
            "rendered manifest for pod/{}",
            pod.name_any()
        );
        write_stdout(output.render(&pod)?)
    }
}

struct Daemon {
    pod_name: String,
    namespace: Option<String>,
    app: String,
    cluster: String,
    version: String,
    anti_affinity: bool,
}

fn build_pod_manifest<E>(builder: &PodConfigBuilder<E>, daemon: Daemon) -> Result<Pod, Error>
where
    E: Environment,
{
    let Daemon { pod_name, namespace, app, cluster, version, anti_affinity } = daemon;
    let version = if version.is_empty() { DEFAULT_VERSION.to_string() } else { version };

    let mut pod = Pod {
        metadata: ObjectMeta {
            name: Some(pod_name),
            namespace,
            labels: Some(daemon_labels(&app, &cluster)),
            ..ObjectMeta::default()
        },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: app.clone(),
                image: Some(builder.make_rook_image(&version)),
                env: Some(builder.env_vars()),
                volume_mounts: Some(builder.volume_mounts()),
                ..Container::default()
            }],
            volumes: Some(builder.volumes()),
            ..PodSpec::default()
        }),
        ..Pod::default()
    };

    set_pod_version(&mut pod, labels::VERSION, &version);
    if anti_affinity {
        pod_with_anti_affinity(&mut pod, labels::APP, &app)?;
    }

    Ok(pod)
}
