use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default settings applied before any flag is parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Namespace of the Ceph cluster.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Namespace of the operator. Usually the cluster namespace.
    #[serde(default = "default_namespace")]
    pub operator_namespace: String,
    /// Kubeconfig context; absent means the current context.
    #[serde(default)]
    pub context: Option<String>,
    /// Program used to reach the cluster.
    #[serde(default = "default_kubectl_program")]
    pub kubectl_program: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            operator_namespace: default_namespace(),
            context: None,
            kubectl_program: default_kubectl_program(),
        }
    }
}

fn default_namespace() -> String {
    "rook-ceph".to_string()
}

fn default_kubectl_program() -> String {
    "kubectl".to_string()
}
