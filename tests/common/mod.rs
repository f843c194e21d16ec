use assert_cmd::Command;
use std::path::Path;

pub fn moodjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodjour").unwrap();
    cmd.env_remove("MOODJOUR_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a journal at `path`
pub fn init_journal(path: &Path) {
    moodjour_cmd().arg("init").arg(path).assert().success();
}

/// Log an entry with text and mood for `date`
pub fn log_entry(root: &Path, date: &str, mood: &str, text: &str) {
    moodjour_cmd()
        .current_dir(root)
        .args(["log", date, "--text", text, "--mood", mood])
        .assert()
        .success();
}
