//! Command-tree descent: one flag-parse pass per level, then dispatch on
//! the first remaining token.

use tracing::debug;

use crate::cli::error::DispatchError;
use crate::cli::settings::Settings;
use crate::config::Config;
use crate::exec::Invocation;
use crate::flags::{parse, Reject, Verdict};

const OPERATOR_DEPLOYMENT: &str = "rook-ceph-operator";
const TOOLBOX_DEPLOYMENT: &str = "rook-ceph-tools";
const MON_ENDPOINTS_CONFIGMAP: &str = "rook-ceph-mon-endpoints";

/// What `main` should do after walking the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print usage on stdout and exit 0.
    Usage,
    /// Print the client version and exit 0.
    Version,
    /// Run the composed kubectl invocation and propagate its exit code.
    Exec(Invocation),
}

/// Walk the command tree over `args` and decide the terminal outcome.
///
/// The remainder of the global flag pass selects the command; nested levels
/// get their own slice and, where they accept flags of their own, their own
/// parse pass.
pub fn dispatch(config: &Config, args: &[String]) -> Result<Outcome, DispatchError> {
    let mut settings = Settings::from_config(config);
    let rest = parse(&mut |flag, value| settings.global_flag(flag, value), args)?;

    if settings.help {
        return Ok(Outcome::Usage);
    }
    let Some((command, rest)) = rest.split_first() else {
        return Err(DispatchError::MissingCommand);
    };
    debug!(command = %command, remaining = rest.len(), "dispatching");

    match command.as_str() {
        "help" => Ok(Outcome::Usage),
        "version" => {
            end_of_command(rest)?;
            Ok(Outcome::Version)
        }
        "operator" => operator_command(&settings, rest),
        "mons" => {
            end_of_command(rest)?;
            Ok(Outcome::Exec(mon_endpoints(&settings)))
        }
        "ceph" => Ok(Outcome::Exec(ceph_passthrough(&settings, rest))),
        "debug" => debug_command(&settings, rest),
        "rook" => rook_command(&settings, rest),
        other => Err(DispatchError::UnknownCommand {
            name: other.to_string(),
        }),
    }
}

fn operator_command(settings: &Settings, args: &[String]) -> Result<Outcome, DispatchError> {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(missing("operator", "a subcommand"));
    };
    match subcommand.as_str() {
        "restart" => {
            end_of_command(rest)?;
            Ok(Outcome::Exec(
                operator_base(settings).args(["rollout", "restart"]).arg(deploy(OPERATOR_DEPLOYMENT)),
            ))
        }
        "set" => match rest {
            [key, value] => Ok(Outcome::Exec(
                operator_base(settings)
                    .args(["set", "env"])
                    .arg(deploy(OPERATOR_DEPLOYMENT))
                    .arg(format!("{key}={value}")),
            )),
            [_, _, extra @ ..] => Err(DispatchError::ExtraneousArguments {
                args: extra.to_vec(),
            }),
            _ => Err(missing("operator set", "KEY and VALUE")),
        },
        other => Err(unknown_subcommand("operator", other)),
    }
}

/// Flags recognized by the `debug` level.
#[derive(Debug, Default)]
struct DebugOptions {
    alternate_image: Option<String>,
}

impl DebugOptions {
    fn flag(&mut self, flag: &str, value: &str) -> Verdict {
        match flag {
            "--alternate-image" => {
                if value.is_empty() {
                    return Verdict::NeedsValue;
                }
                self.alternate_image = Some(value.to_string());
                Verdict::Accepted
            }
            _ => Verdict::Rejected(Reject::Unsupported),
        }
    }
}

fn debug_command(settings: &Settings, args: &[String]) -> Result<Outcome, DispatchError> {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(missing("debug", "a subcommand"));
    };
    match subcommand.as_str() {
        "start" => {
            let mut options = DebugOptions::default();
            // The flag run may come before or after the deployment name, so
            // the level parses twice around the positional.
            let rest = parse(&mut |flag, value| options.flag(flag, value), rest)?;
            let Some((deployment, rest)) = rest.split_first() else {
                return Err(missing("debug start", "a deployment name"));
            };
            let rest = parse(&mut |flag, value| options.flag(flag, value), rest)?;
            end_of_command(rest)?;

            let mut invocation = cluster_base(settings)
                .arg("debug")
                .arg(deploy(deployment))
                .arg(format!("--copy-to={deployment}-debug"));
            if let Some(image) = options.alternate_image {
                invocation = invocation.arg(format!("--image={image}"));
            }
            Ok(Outcome::Exec(invocation))
        }
        "stop" => {
            let Some((deployment, rest)) = rest.split_first() else {
                return Err(missing("debug stop", "a deployment name"));
            };
            end_of_command(rest)?;
            Ok(Outcome::Exec(
                cluster_base(settings)
                    .args(["delete", "deployment"])
                    .arg(format!("{deployment}-debug")),
            ))
        }
        other => Err(unknown_subcommand("debug", other)),
    }
}

fn rook_command(settings: &Settings, args: &[String]) -> Result<Outcome, DispatchError> {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(missing("rook", "a subcommand"));
    };
    match subcommand.as_str() {
        "version" => {
            end_of_command(rest)?;
            Ok(Outcome::Exec(
                operator_base(settings)
                    .arg("exec")
                    .arg(deploy(OPERATOR_DEPLOYMENT))
                    .args(["--", "rook", "version"]),
            ))
        }
        "status" => {
            end_of_command(rest)?;
            Ok(Outcome::Exec(
                cluster_base(settings).args(["get", "cephclusters.ceph.rook.io"]),
            ))
        }
        other => Err(unknown_subcommand("rook", other)),
    }
}

fn mon_endpoints(settings: &Settings) -> Invocation {
    cluster_base(settings)
        .args(["get", "configmap", MON_ENDPOINTS_CONFIGMAP])
        .args(["-o", "jsonpath={.data.data}"])
}

/// Everything after `ceph` is handed to the toolbox untouched, flag-like
/// or not.
fn ceph_passthrough(settings: &Settings, args: &[String]) -> Invocation {
    cluster_base(settings)
        .arg("exec")
        .arg(deploy(TOOLBOX_DEPLOYMENT))
        .args(["--", "ceph"])
        .args(args.iter().cloned())
}

fn cluster_base(settings: &Settings) -> Invocation {
    Invocation::new()
        .with_context(settings.context.as_deref())
        .with_namespace(&settings.namespace)
}

fn operator_base(settings: &Settings) -> Invocation {
    Invocation::new()
        .with_context(settings.context.as_deref())
        .with_namespace(&settings.operator_namespace)
}

fn deploy(name: &str) -> String {
    format!("deploy/{name}")
}

fn end_of_command(rest: &[String]) -> Result<(), DispatchError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(DispatchError::ExtraneousArguments {
            args: rest.to_vec(),
        })
    }
}

fn missing(command: &str, what: &str) -> DispatchError {
    DispatchError::MissingArgument {
        command: command.to_string(),
        what: what.to_string(),
    }
}

fn unknown_subcommand(parent: &str, name: &str) -> DispatchError {
    DispatchError::UnknownSubcommand {
        parent: parent.to_string(),
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::ParseError;

    fn raw_args(args: Vec<&str>) -> Vec<String> {
        args.into_iter().map(String::from).collect()
    }

    fn run(args: Vec<&str>) -> Result<Outcome, DispatchError> {
        dispatch(&Config::default(), &raw_args(args))
    }

    fn argv(outcome: Outcome) -> Vec<String> {
        match outcome {
            Outcome::Exec(invocation) => invocation.argv().to_vec(),
            other => panic!("expected an invocation, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_is_a_missing_command() {
        assert_eq!(run(vec![]), Err(DispatchError::MissingCommand));
    }

    #[test]
    fn help_flag_short_circuits_before_the_command() {
        assert_eq!(run(vec!["--help", "bogus"]), Ok(Outcome::Usage));
        assert_eq!(run(vec!["-h"]), Ok(Outcome::Usage));
        assert_eq!(run(vec!["help"]), Ok(Outcome::Usage));
    }

    #[test]
    fn version_takes_no_trailing_arguments() {
        assert_eq!(run(vec!["version"]), Ok(Outcome::Version));
        assert_eq!(
            run(vec!["version", "x"]),
            Err(DispatchError::ExtraneousArguments {
                args: vec!["x".to_string()],
            })
        );
    }

    #[test]
    fn unknown_command_names_the_token() {
        assert_eq!(
            run(vec!["reboot"]),
            Err(DispatchError::UnknownCommand {
                name: "reboot".to_string(),
            })
        );
    }

    #[test]
    fn unsupported_global_flag_fails_the_parse_pass() {
        assert_eq!(
            run(vec!["--color", "mons"]),
            Err(DispatchError::Parse(ParseError::UnsupportedFlag {
                flag: "--color".to_string(),
            }))
        );
    }

    #[test]
    fn operator_restart_targets_the_operator_namespace() {
        let argv = argv(run(vec!["-o", "rook-op", "operator", "restart"]).unwrap());
        assert_eq!(
            argv,
            vec![
                "--namespace",
                "rook-op",
                "rollout",
                "restart",
                "deploy/rook-ceph-operator",
            ]
        );
    }

    #[test]
    fn operator_set_requires_key_and_value() {
        let argv = argv(run(vec!["operator", "set", "ROOK_LOG_LEVEL", "DEBUG"]).unwrap());
        assert!(argv.contains(&"ROOK_LOG_LEVEL=DEBUG".to_string()));

        assert_eq!(
            run(vec!["operator", "set", "ROOK_LOG_LEVEL"]),
            Err(DispatchError::MissingArgument {
                command: "operator set".to_string(),
                what: "KEY and VALUE".to_string(),
            })
        );
        assert_eq!(
            run(vec!["operator", "set", "A", "B", "C"]),
            Err(DispatchError::ExtraneousArguments {
                args: vec!["C".to_string()],
            })
        );
    }

    #[test]
    fn mons_reads_the_endpoints_configmap() {
        let argv = argv(run(vec!["mons"]).unwrap());
        assert_eq!(
            argv,
            vec![
                "--namespace",
                "rook-ceph",
                "get",
                "configmap",
                "rook-ceph-mon-endpoints",
                "-o",
                "jsonpath={.data.data}",
            ]
        );
    }

    #[test]
    fn ceph_passes_trailing_tokens_through_unparsed() {
        let argv = argv(run(vec!["ceph", "osd", "df", "--format", "json"]).unwrap());
        let tail = raw_args(vec!["osd", "df", "--format", "json"]);
        assert_eq!(&argv[argv.len() - 4..], &tail[..]);
        assert!(argv.contains(&"deploy/rook-ceph-tools".to_string()));
    }

    #[test]
    fn debug_start_parses_its_own_flags_after_the_deployment() {
        let argv = argv(
            run(vec![
                "debug",
                "start",
                "rook-ceph-osd-0",
                "--alternate-image",
                "ceph/ceph:v18",
            ])
            .unwrap(),
        );
        assert!(argv.contains(&"deploy/rook-ceph-osd-0".to_string()));
        assert!(argv.contains(&"--copy-to=rook-ceph-osd-0-debug".to_string()));
        assert!(argv.contains(&"--image=ceph/ceph:v18".to_string()));
    }

    #[test]
    fn debug_start_accepts_flags_before_the_deployment() {
        let argv = argv(
            run(vec!["debug", "start", "--alternate-image=img", "osd"]).unwrap(),
        );
        assert!(argv.contains(&"--image=img".to_string()));
        assert!(argv.contains(&"deploy/osd".to_string()));
    }

    #[test]
    fn debug_start_requires_a_deployment() {
        assert_eq!(
            run(vec!["debug", "start"]),
            Err(DispatchError::MissingArgument {
                command: "debug start".to_string(),
                what: "a deployment name".to_string(),
            })
        );
    }

    #[test]
    fn debug_stop_deletes_the_copy() {
        let argv = argv(run(vec!["debug", "stop", "osd"]).unwrap());
        assert_eq!(
            argv,
            vec!["--namespace", "rook-ceph", "delete", "deployment", "osd-debug"]
        );
    }

    #[test]
    fn rook_rejects_unknown_subcommands() {
        assert_eq!(
            run(vec!["rook", "upgrade"]),
            Err(DispatchError::UnknownSubcommand {
                parent: "rook".to_string(),
                name: "upgrade".to_string(),
            })
        );
    }

    #[test]
    fn context_flag_reaches_the_invocation() {
        let argv = argv(run(vec!["--context", "kind-test", "rook", "status"]).unwrap());
        assert_eq!(argv[0], "--context");
        assert_eq!(argv[1], "kind-test");
    }
}
