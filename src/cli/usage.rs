//! Usage text for the whole command tree.

/// Rendered for `help`, `-h`/`--help`, and ahead of every `ERROR:` line.
pub const TEXT: &str = "\
Usage: rookctl [flags] <command> [args]

Manage a Rook Ceph deployment through kubectl.

Flags:
  -h, --help                   show this text
  -n, --namespace NAMESPACE    namespace of the Ceph cluster (default: rook-ceph)
  -o, --operator-namespace NAMESPACE
                               namespace of the operator, if deployed separately
      --context CONTEXT        kubeconfig context to use

Commands:
  help                         show this text
  version                      print the client version
  operator restart             restart the operator deployment
  operator set KEY VALUE       set an environment variable on the operator
  mons                         print the mon endpoints
  ceph ARGS...                 run a ceph command in the toolbox deployment
  debug start DEPLOYMENT [--alternate-image IMAGE]
                               start a debug copy of a deployment
  debug stop DEPLOYMENT        remove the debug copy of a deployment
  rook version                 print the rook version in the operator
  rook status                  print the CephCluster status
";
