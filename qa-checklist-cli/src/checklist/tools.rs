//! Pre-workshop tool requirements

use super::ToolRequirement;

/// Build the tool verification table, in sheet order.
pub fn required_tools() -> Vec<ToolRequirement> {
    let tools = [
        (
            "JDK",
            "17+",
            "java -version",
            "sdk install java 17-tem",
            "Required for all levels",
        ),
        (
            "Maven",
            "3.9+",
            "mvn -version",
            "brew install maven / sdk install maven",
            "Required for all levels",
        ),
        (
            "Docker",
            "24+",
            "docker --version",
            "https://docs.docker.com/get-docker/",
            "Required for all levels",
        ),
        (
            "docker compose",
            "v2+",
            "docker compose version",
            "Included with Docker Desktop",
            "Required for all levels",
        ),
        (
            "Git",
            "2.40+",
            "git --version",
            "brew install git",
            "Required for all levels",
        ),
        (
            "kcat",
            "1.7+",
            "kcat -V",
            "brew install kcat",
            "Required for Level 101+",
        ),
        (
            "Confluent CLI",
            "3.x",
            "confluent version",
            "brew install confluentinc/tap/cli",
            "Required for Level 201+",
        ),
        (
            "Make",
            "3.8+",
            "make --version",
            "Pre-installed (Linux/Mac)",
            "Required for Level 201+",
        ),
        (
            "Act",
            "0.2+",
            "act --version",
            "brew install act",
            "Required for Level 201+",
        ),
        (
            "kind",
            "0.20+",
            "kind --version",
            "brew install kind",
            "Required for Level 201+",
        ),
        (
            "Helm",
            "3.14+",
            "helm version --short",
            "brew install helm",
            "Required for Level 201+",
        ),
        (
            "k6",
            "0.50+",
            "k6 version",
            "brew install k6",
            "Required for Level 201+",
        ),
        (
            "ngrok",
            "3.x",
            "ngrok version",
            "brew install ngrok",
            "Required for Level 201+",
        ),
        (
            "kubectl",
            "1.28+",
            "kubectl version --client --short",
            "brew install kubectl",
            "Required for Level 201+",
        ),
        (
            "kustomize",
            "5.x",
            "kustomize version",
            "brew install kustomize",
            "Required for Level 201+",
        ),
        (
            "gh (GitHub CLI)",
            "2.x",
            "gh --version",
            "brew install gh",
            "Optional (for PR creation)",
        ),
        (
            "jq",
            "1.7+",
            "jq --version",
            "brew install jq",
            "Optional (for JSON processing)",
        ),
    ];

    tools
        .iter()
        .map(
            |&(name, required_version, verify_command, install_command, notes)| ToolRequirement {
                name,
                required_version,
                verify_command,
                install_command,
                notes,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_table_shape() {
        let tools = required_tools();
        assert_eq!(tools.len(), 17);
        assert_eq!(tools[0].name, "JDK");
        assert_eq!(tools[16].name, "jq");
        for tool in &tools {
            assert!(!tool.required_version.is_empty());
            assert!(!tool.verify_command.is_empty());
        }
    }
}
