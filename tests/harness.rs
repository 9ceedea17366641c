//! Test harness for codebundle integration tests

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

pub use codebundle::test_utils::TestProject;

/// Command for the codebundle binary, run from `dir`.
pub fn codebundle(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codebundle"));
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

pub fn run_codebundle(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = codebundle(dir)
        .args(args)
        .output()
        .expect("Failed to run codebundle");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let project = TestProject::new();
        assert!(project.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let project = TestProject::new();
        let file_path = project.add_file("app/main.js", "main();");
        assert!(file_path.exists());
        assert_eq!(project.read("app/main.js"), "main();");
    }
}
