use assert_cmd::Command;
use tempfile::TempDir;

fn taskstore_cmd(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("taskstore").expect("taskstore binary");
    cmd.current_dir(cwd);
    cmd.env_remove("TASKSTORE_ROOT");
    cmd
}

#[test]
fn env_root_is_used_when_flag_absent() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("env-root");

    taskstore_cmd(dir.path())
        .env("TASKSTORE_ROOT", &root)
        .args(["create", "task via env root"])
        .assert()
        .success();

    assert!(root.join("shards").join("default.json").exists());
}

#[test]
fn flag_root_wins_over_env_root() {
    let dir = TempDir::new().unwrap();
    let env_root = dir.path().join("env-root");
    let flag_root = dir.path().join("flag-root");

    taskstore_cmd(dir.path())
        .env("TASKSTORE_ROOT", &env_root)
        .arg("--root")
        .arg(&flag_root)
        .args(["create", "task via flag root"])
        .assert()
        .success();

    assert!(flag_root.join("shards").join("default.json").exists());
    assert!(!env_root.exists());
}

#[test]
fn config_file_root_is_used_as_fallback() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("config-root");
    std::fs::write(
        dir.path().join("taskstore.toml"),
        format!("root = {:?}\n", root.display().to_string()),
    )
    .unwrap();

    taskstore_cmd(dir.path())
        .args(["create", "task via config root"])
        .assert()
        .success();

    assert!(root.join("shards").join("default.json").exists());
}
