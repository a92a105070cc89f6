//! The pinned tools, in the order they are installed.

use crate::error::{InstallError, Result};

use super::spec::{InstallAction, ToolSpec};

/// Every managed tool, in declared install order.
pub static TOOLS: [ToolSpec; 4] = [
    ToolSpec {
        name: "kubectl",
        version_args: &["version", "--client"],
        report_args: &["version", "--client=true"],
        target_version: "v1.34.0",
        url_template: "https://dl.k8s.io/release/{version}/bin/linux/amd64/kubectl",
        artifact: "kubectl",
        install_path: "/usr/local/bin/kubectl",
        leftovers: &[],
        procedure: &[
            InstallAction::MakeExecutable { file: "kubectl" },
            InstallAction::Install {
                source: "kubectl",
                owner: Some("root"),
                mode: "0755",
            },
        ],
    },
    ToolSpec {
        name: "helm",
        version_args: &["version", "--short"],
        report_args: &["version", "--short"],
        target_version: "v3.14.1",
        url_template: "https://raw.githubusercontent.com/helm/helm/main/scripts/get-helm-3",
        artifact: "get_helm.sh",
        install_path: "/usr/local/bin/helm",
        leftovers: &[],
        procedure: &[
            InstallAction::MakeExecutable { file: "get_helm.sh" },
            InstallAction::RunScript {
                env: &[("DESIRED_VERSION", "{version}")],
            },
        ],
    },
    ToolSpec {
        name: "minikube",
        version_args: &["version"],
        report_args: &["version"],
        target_version: "v1.32.0",
        url_template:
            "https://storage.googleapis.com/minikube/releases/{version}/minikube-linux-amd64",
        artifact: "minikube-linux-amd64",
        install_path: "/usr/local/bin/minikube",
        leftovers: &[],
        procedure: &[
            InstallAction::MakeExecutable {
                file: "minikube-linux-amd64",
            },
            InstallAction::Install {
                source: "minikube-linux-amd64",
                owner: None,
                mode: "0755",
            },
        ],
    },
    ToolSpec {
        name: "argo",
        version_args: &["version", "--short"],
        report_args: &["version", "--short"],
        target_version: "v3.7.1",
        url_template: "https://github.com/argoproj/argo-workflows/releases/download/{version}/argo-linux-amd64.gz",
        artifact: "argo.gz",
        install_path: "/usr/local/bin/argo",
        leftovers: &["argo", "argo-linux-amd64"],
        procedure: &[
            InstallAction::Decompress { file: "argo.gz" },
            InstallAction::MakeExecutable { file: "argo" },
            InstallAction::Install {
                source: "argo",
                owner: Some("root"),
                mode: "0755",
            },
        ],
    },
];

/// Look up a tool by name.
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|t| t.name == name)
}

/// Resolve a subset of tool names, keeping declared order.
///
/// An empty selection means every tool.
pub fn select(only: &[String]) -> Result<Vec<&'static ToolSpec>> {
    if only.is_empty() {
        return Ok(TOOLS.iter().collect());
    }

    for name in only {
        if find(name).is_none() {
            return Err(InstallError::UnknownTool {
                name: name.clone(),
                known: known_names(),
            });
        }
    }

    Ok(TOOLS
        .iter()
        .filter(|t| only.iter().any(|n| n == t.name))
        .collect())
}

/// Every transient file name the catalog can leave in the work directory.
pub fn transient_artifacts() -> Vec<&'static str> {
    let mut names = Vec::new();
    for name in TOOLS.iter().flat_map(|t| t.transient_files()) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

fn known_names() -> String {
    TOOLS.iter().map(|t| t.name).collect::<Vec<_>>().join(", ")
}
