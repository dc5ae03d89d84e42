use std::collections::BTreeMap;

use k8s_openapi::{
    api::core::v1::{Affinity, Pod, PodAffinityTerm, PodAntiAffinity},
    apimachinery::pkg::apis::meta::v1::LabelSelector,
};
use kube::ResourceExt;
use rook_base::consts::k8s::{HOSTNAME_TOPOLOGY_KEY, annotations};
use snafu::ResultExt;

use crate::{Error, error};

/// A hard anti-affinity rule: no two pods labeled `attribute=value` may be
/// scheduled onto the same host.
#[must_use]
pub fn anti_affinity(attribute: &str, value: &str) -> Affinity {
    Affinity {
        pod_anti_affinity: Some(PodAntiAffinity {
            required_during_scheduling_ignored_during_execution: Some(vec![PodAffinityTerm {
                label_selector: Some(LabelSelector {
                    match_labels: Some(BTreeMap::from([(
                        attribute.to_string(),
                        value.to_string(),
                    )])),
                    ..LabelSelector::default()
                }),
                topology_key: HOSTNAME_TOPOLOGY_KEY.to_string(),
                ..PodAffinityTerm::default()
            }]),
            ..PodAntiAffinity::default()
        }),
        ..Affinity::default()
    }
}

/// Stores the rule built by [`anti_affinity`] on `pod`, JSON encoded under
/// the `scheduler.alpha.kubernetes.io/affinity` annotation.
///
/// The annotation map is created if the pod has none. An existing affinity
/// annotation is replaced.
///
/// # Errors
///
/// Returns [`Error::SerializeAffinity`] if the rule cannot be encoded. The
/// error is fatal and the pod is left untouched.
pub fn pod_with_anti_affinity(pod: &mut Pod, attribute: &str, value: &str) -> Result<(), Error> {
    let affinity = serde_json::to_string(&anti_affinity(attribute, value))
        .context(error::SerializeAffinitySnafu { attribute, value })?;

    tracing::debug!(pod = %pod.name_any(), "set pod anti-affinity on {attribute}={value}");
    let _prev = pod.annotations_mut().insert(annotations::AFFINITY.to_string(), affinity);
    Ok(())
}

#[cfg(test)]
mod tests {
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    use super::*;

    fn annotation(pod: &Pod) -> serde_json::Value {
        let raw = pod.annotations().get(annotations::AFFINITY).expect("affinity annotation");
        serde_json::from_str(raw).expect("annotation is valid JSON")
    }

    #[test]
    fn test_anti_affinity_annotation() {
        let mut pod = Pod::default();
        pod_with_anti_affinity(&mut pod, "app", "mon").unwrap();

        assert_eq!(
            annotation(&pod),
            serde_json::json!({
                "podAntiAffinity": {
                    "requiredDuringSchedulingIgnoredDuringExecution": [{
                        "labelSelector": { "matchLabels": { "app": "mon" } },
                        "topologyKey": "kubernetes.io/hostname"
                    }]
                }
            })
        );
    }

    #[test]
    fn test_annotation_deserializes_to_rule() {
        let mut pod = Pod::default();
        pod_with_anti_affinity(&mut pod, "rook_cluster", "rook-ceph").unwrap();

        let raw = &pod.annotations()[annotations::AFFINITY];
        let affinity: Affinity = serde_json::from_str(raw).unwrap();
        assert_eq!(affinity, anti_affinity("rook_cluster", "rook-ceph"));
    }

    #[test]
    fn test_keeps_other_annotations() {
        let mut pod = Pod {
            metadata: ObjectMeta {
                name: Some("rook-ceph-mon0".to_string()),
                annotations: Some(BTreeMap::from([
                    ("rook_version".to_string(), "v0.4.0".to_string()),
                    (annotations::AFFINITY.to_string(), "{}".to_string()),
                ])),
                ..ObjectMeta::default()
            },
            ..Pod::default()
        };
        pod_with_anti_affinity(&mut pod, "app", "osd").unwrap();

        assert_eq!(pod.annotations().len(), 2);
        assert_eq!(pod.annotations()["rook_version"], "v0.4.0");
        assert_eq!(
            annotation(&pod)["podAntiAffinity"]["requiredDuringSchedulingIgnoredDuringExecution"]
                [0]["labelSelector"]["matchLabels"]["app"],
            "osd"
        );
    }

    #[test]
    fn test_rule_shape() {
        let affinity = anti_affinity("app", "mon");
        assert!(affinity.node_affinity.is_none());
        assert!(affinity.pod_affinity.is_none());

        let anti = affinity.pod_anti_affinity.unwrap();
        assert!(anti.preferred_during_scheduling_ignored_during_execution.is_none());

        let terms = anti.required_during_scheduling_ignored_during_execution.unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].topology_key, "kubernetes.io/hostname");
    }
}
