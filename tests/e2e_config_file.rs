/// End-to-end tests for config file loading and CLI option precedence.
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn clean_cmd(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("related-images");
    cmd.current_dir(dir.path())
        .env_remove("RELATED_IMAGE_OPENSCAP")
        .env_remove("RELATED_IMAGE_OPERATOR")
        .env_remove("RELATED_IMAGE_PROFILE");
    cmd
}

fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_registry() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("related-images.config.yml"),
            "registry: discovered.example.com/ns\n",
        );

        clean_cmd(&dir)
            .args(["content", "-f", "env"])
            .assert()
            .success()
            .stdout("RELATED_IMAGE_PROFILE=discovered.example.com/ns/ocp4:latest\n");
    }

    #[test]
    fn test_cli_registry_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("related-images.config.yml"),
            "registry: discovered.example.com/ns\n",
        );

        clean_cmd(&dir)
            .args(["content", "-f", "env", "--registry", "cli.example.com/ns"])
            .assert()
            .success()
            .stdout("RELATED_IMAGE_PROFILE=cli.example.com/ns/ocp4:latest\n");
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("related-images.config.yml"),
            "registry: discovered.example.com/ns\nformat: json\n",
        );

        clean_cmd(&dir)
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown config field 'format'"));
    }
}

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_images() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(
            &config_path,
            r#"
images:
  operator: pinned.example.com/compliance-operator:0.1.61
"#,
        );

        clean_cmd(&dir)
            .args(["operator", "-f", "env", "--config"])
            .arg(&config_path)
            .assert()
            .success()
            .stdout("RELATED_IMAGE_OPERATOR=pinned.example.com/compliance-operator:0.1.61\n");
    }

    #[test]
    fn test_environment_beats_config_images() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(
            &config_path,
            "images:\n  operator: pinned.example.com/compliance-operator:0.1.61\n",
        );

        clean_cmd(&dir)
            .env("RELATED_IMAGE_OPERATOR", "env.example.com/operator:dev")
            .args(["operator", "-f", "env", "--config"])
            .arg(&config_path)
            .assert()
            .success()
            .stdout("RELATED_IMAGE_OPERATOR=env.example.com/operator:dev\n");
    }

    #[test]
    fn test_invalid_config_is_application_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "images:\n  kubelet: quay.io/kubelet:1\n");

        clean_cmd(&dir)
            .arg("--config")
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("images.kubelet is not a known component"));
    }
}
