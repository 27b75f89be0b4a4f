//! Caller-owned settings threaded through the flag handlers.

use crate::config::Config;
use crate::flags::{Reject, Verdict};

/// Mutable state accumulated while walking the command tree.
///
/// Config supplies the starting values; flag occurrences overwrite them in
/// input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Namespace of the Ceph cluster.
    pub namespace: String,
    /// Namespace of the operator, when deployed separately.
    pub operator_namespace: String,
    /// Kubeconfig context to pass to kubectl; `None` uses the current one.
    pub context: Option<String>,
    /// Set when `-h`/`--help` was seen.
    pub help: bool,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            namespace: config.defaults.namespace.clone(),
            operator_namespace: config.defaults.operator_namespace.clone(),
            context: config.defaults.context.clone(),
            help: false,
        }
    }

    /// Handler for the global flags accepted in front of any command.
    ///
    /// Value-taking flags answer `NeedsValue` on an empty value, so both
    /// `--namespace rook` and `--namespace=rook` land here, and a bare
    /// `--namespace` pulls the next token.
    pub fn global_flag(&mut self, flag: &str, value: &str) -> Verdict {
        match flag {
            "-h" | "--help" => {
                if !value.is_empty() {
                    return Verdict::Rejected(Reject::NoValueAllowed);
                }
                self.help = true;
                Verdict::Accepted
            }
            "-n" | "--namespace" => {
                if value.is_empty() {
                    return Verdict::NeedsValue;
                }
                self.namespace = value.to_string();
                Verdict::Accepted
            }
            "-o" | "--operator-namespace" => {
                if value.is_empty() {
                    return Verdict::NeedsValue;
                }
                self.operator_namespace = value.to_string();
                Verdict::Accepted
            }
            "--context" => {
                if value.is_empty() {
                    return Verdict::NeedsValue;
                }
                self.context = Some(value.to_string());
                Verdict::Accepted
            }
            _ => Verdict::Rejected(Reject::Unsupported),
        }
    }
}
