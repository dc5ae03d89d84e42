use std::{borrow::Borrow, collections::BTreeMap};

use k8s_openapi::api::core::v1::{Affinity, Pod};
use kube::ResourceExt;
use rook_base::consts::k8s::{annotations, labels};

/// Sets the annotation `key` to `version`, replacing any previous value.
///
/// Neither the key nor the version is validated. The annotation map is
/// created if the pod has none.
pub fn set_pod_version(pod: &mut Pod, key: &str, version: &str) {
    tracing::debug!(pod = %pod.name_any(), "set pod version {key}={version}");
    let _prev = pod.annotations_mut().insert(key.to_string(), version.to_string());
}

/// Names of `pods`, in the order given. Pods without a name contribute an
/// empty string.
#[must_use]
pub fn pod_names<I>(pods: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Borrow<Pod>,
{
    pods.into_iter()
        .map(|pod| {
            let pod: &Pod = pod.borrow();
            pod.metadata.name.clone().unwrap_or_default()
        })
        .collect()
}

/// Labels identifying a daemon of type `app` in the Rook cluster `cluster`.
#[must_use]
pub fn daemon_labels(app: &str, cluster: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (labels::APP.to_string(), app.to_string()),
        (labels::CLUSTER.to_string(), cluster.to_string()),
    ])
}

/// Read side of the annotations written by [`pod_with_anti_affinity`] and
/// [`set_pod_version`], for callers inspecting pods built elsewhere.
///
/// [`pod_with_anti_affinity`]: crate::pod_with_anti_affinity
pub trait PodExt {
    /// The anti-affinity rule stored in the affinity annotation, if any.
    fn anti_affinity(&self) -> Option<Affinity>;

    fn version(&self, key: &str) -> Option<&str>;
}

impl PodExt for Pod {
    fn anti_affinity(&self) -> Option<Affinity> {
        self.annotations()
            .get(annotations::AFFINITY)
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    fn version(&self, key: &str) -> Option<&str> {
        self.annotations().get(key).map(String::as_str)
    }
}
