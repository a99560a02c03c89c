use assert_cmd::Command;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[derive(Debug)]
pub struct SpiRun {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
    pub duration: Duration,
    pub log_path: PathBuf,
}

impl SpiRun {
    pub fn json(&self) -> Value {
        serde_json::from_str(self.stdout.trim()).expect("parse stdout json")
    }

    /// Structured error printed after any log lines on stderr.
    pub fn error_json(&self) -> Value {
        serde_json::from_str(&extract_json_payload(&self.stderr)).expect("parse stderr json")
    }
}

pub struct SpiWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub log_dir: PathBuf,
}

impl SpiWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let root = temp_dir.path().to_path_buf();
        let log_dir = root.join("logs");
        fs::create_dir_all(&log_dir).expect("log dir");
        Self {
            temp_dir,
            root,
            log_dir,
        }
    }

    /// Workspace with `spi init` already run.
    pub fn initialized() -> Self {
        let workspace = Self::new();
        let init = run_spi(&workspace, ["init"], "init");
        assert!(init.status.success(), "init failed: {}", init.stderr);
        workspace
    }
}

pub fn run_spi<I, S>(workspace: &SpiWorkspace, args: I, label: &str) -> SpiRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_spi_with_env(
        workspace,
        args,
        std::iter::empty::<(String, String)>(),
        label,
    )
}

pub fn run_spi_with_env<I, S, E, K, V>(
    workspace: &SpiWorkspace,
    args: I,
    env_vars: E,
    label: &str,
) -> SpiRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    E: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
{
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spi"));
    cmd.current_dir(&workspace.root);
    cmd.env_remove("SPI_DIR");
    cmd.env_remove("SPI_STORE");
    cmd.env_remove("SPI_LOG_FILE");
    cmd.args(args);
    cmd.envs(env_vars);
    cmd.env("NO_COLOR", "1");
    cmd.env("RUST_LOG", "space_issues=debug,space_issue_store=debug");
    cmd.env("HOME", &workspace.root);

    let start = Instant::now();
    let output = cmd.output().expect("run spi");
    let duration = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let log_path = workspace.log_dir.join(format!("{label}.log"));
    let log_body = format!(
        "label: {label}\nduration: {:?}\nstatus: {}\ncwd: {}\n\nstdout:\n{}\n\nstderr:\n{}\n",
        duration,
        output.status,
        workspace.root.display(),
        stdout,
        stderr
    );
    fs::write(&log_path, log_body).expect("write log");

    SpiRun {
        stdout,
        stderr,
        status: output.status,
        duration,
        log_path,
    }
}

pub fn extract_json_payload(output: &str) -> String {
    let lines: Vec<&str> = output.lines().collect();
    for (idx, line) in lines.iter().enumerate() {
        if line.starts_with('[') || line.starts_with('{') {
            return lines[idx..].join("\n").trim().to_string();
        }
    }
    output.trim().to_string()
}
