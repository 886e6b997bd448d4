use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// A temporary storage root plus helpers to drive the CLI against it
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("store")
    }

    pub fn shard_path(&self, shard: &str) -> PathBuf {
        self.root().join("shards").join(format!("{shard}.json"))
    }

    /// Command with the storage root wired up and cwd inside the temp dir
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskstore").expect("taskstore binary");
        cmd.current_dir(self.dir.path());
        cmd.arg("--root").arg(self.root());
        cmd
    }

    /// Create a task via the CLI and return its id
    pub fn create_task(&self, content: &str, extra_args: &[&str]) -> String {
        let output = self
            .cmd()
            .args(["create", content, "--json"])
            .args(extra_args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let value: Value = serde_json::from_slice(&output).expect("create json");
        value["data"]["id"].as_str().expect("task id").to_string()
    }
}

/// Parse a command's stdout as a JSON envelope
pub fn envelope(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("json envelope")
}
