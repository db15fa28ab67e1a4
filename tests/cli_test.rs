//! End-to-end tests for the `mekicopy` binary.
//!
//! A fake `python` shell script on a private `PATH` stands in for the
//! runtime. It appends its arguments to a log file so the tests can see
//! which package manager calls were made, and in which order.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct FakeRuntime {
    temp: TempDir,
}

impl FakeRuntime {
    /// An empty `PATH` directory: no runtime at all.
    fn missing() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("bin")).unwrap();
        Self { temp }
    }

    /// A `python` script whose body runs after the argument is logged.
    #[cfg(unix)]
    fn with_body(body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let rt = Self::missing();
        let script = rt.bin().join("python");
        fs::write(
            &script,
            format!("#!/bin/sh\necho \"$*\" >> \"$MEKI_LOG\"\n{}\n", body),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        rt
    }

    fn bin(&self) -> PathBuf {
        self.temp.path().join("bin")
    }

    fn log_path(&self) -> PathBuf {
        self.temp.path().join("calls.log")
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn path(&self) -> &Path {
        self.temp.path()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("mekicopy"));
        cmd.env("PATH", self.bin())
            .env("MEKI_LOG", self.log_path())
            .env("CI", "1")
            .env_remove("MEKICOPY_RUNTIME")
            .env_remove("RUST_LOG");
        cmd
    }
}

const UPGRADE: &str = "-m pip install --upgrade pip";
const INSTALL: &str = "-m pip install meikiocr mss pillow pyperclip";

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("mekicopy"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("MekiCopy OCR toolchain"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("mekicopy"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_missing_runtime_prints_guidance_and_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::missing();
    rt.command()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("python.org"))
        .stdout(predicate::str::contains("설치가 완료되었습니다!").not());
    assert!(rt.calls().is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_no_args_installs_and_completes() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("exit 0");
    rt.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("설치가 완료되었습니다!"));
    assert_eq!(rt.calls(), [UPGRADE, INSTALL]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_install_subcommand_matches_default() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("exit 0");
    rt.command().arg("install").assert().success();
    assert_eq!(rt.calls(), [UPGRADE, INSTALL]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_failed_upgrade_skips_install_and_keeps_status() -> Result<(), Box<dyn std::error::Error>>
{
    let rt = FakeRuntime::with_body("case \"$*\" in *--upgrade*) exit 3 ;; esac\nexit 0");
    rt.command()
        .assert()
        .code(3)
        .stdout(predicate::str::contains("설치가 완료되었습니다!").not());
    assert_eq!(rt.calls(), [UPGRADE]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_failed_install_keeps_status() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("case \"$*\" in *meikiocr*) exit 2 ;; esac\nexit 0");
    rt.command().assert().code(2);
    assert_eq!(rt.calls(), [UPGRADE, INSTALL]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_second_run_also_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("exit 0");
    rt.command().assert().success();
    rt.command().assert().success();
    assert_eq!(rt.calls().len(), 4);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_quiet_hides_package_manager_output() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("echo Collecting meikiocr\nexit 0");
    rt.command()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Collecting").not())
        .stdout(predicate::str::contains("설치가 완료되었습니다!"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_dry_run_executes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("exit 0");
    rt.command()
        .args(["install", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(UPGRADE))
        .stdout(predicate::str::contains(INSTALL));
    assert!(rt.calls().is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_runtime_override_by_path() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("exit 0");
    let explicit = rt.bin().join("python");
    let empty = TempDir::new()?;
    rt.command()
        .env("PATH", empty.path())
        .args(["check", "--runtime"])
        .arg(&explicit)
        .assert()
        .success()
        .stdout(predicate::str::contains(explicit.display().to_string()));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_check_json_reports_path() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("exit 0");
    let output = rt.command().args(["check", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["runtime"], "python");
    assert_eq!(
        value["path"].as_str().map(PathBuf::from),
        Some(rt.bin().join("python"))
    );
    Ok(())
}

#[test]
fn cli_check_missing_runtime_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::missing();
    rt.command().arg("check").assert().code(1);
    Ok(())
}

#[test]
fn cli_config_json_uses_env_runtime() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::missing();
    let output = rt
        .command()
        .env("MEKICOPY_RUNTIME", "python3.12")
        .args(["config", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["runtime"], "python3.12");
    assert_eq!(value["packages"].as_array().map(Vec::len), Some(4));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_ocr_prints_joined_text() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("printf '吾輩は\\n猫である\\n'\nexit 0");
    let image = rt.path().join("shot.png");
    fs::write(&image, b"png")?;

    rt.command()
        .arg("ocr")
        .arg(&image)
        .assert()
        .success()
        .stdout("吾輩は 猫である\n");

    let calls = rt.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("-m meikiocr.cli "));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_ocr_raw_keeps_lines() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("printf 'one\\ntwo\\n'\nexit 0");
    let image = rt.path().join("shot.png");
    fs::write(&image, b"png")?;

    rt.command()
        .args(["ocr", "--raw"])
        .arg(&image)
        .assert()
        .success()
        .stdout("one\ntwo\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_ocr_missing_image_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("exit 0");
    rt.command()
        .args(["ocr", "does-not-exist.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.png"));
    assert!(rt.calls().is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_backend_gpu_swaps_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("exit 0");
    rt.command()
        .args(["backend", "gpu", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPU"));
    assert_eq!(
        rt.calls(),
        [
            "-m pip uninstall -y onnxruntime",
            "-m pip install onnxruntime-gpu"
        ]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_backend_without_yes_is_cancelled_when_not_interactive(
) -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::with_body("exit 0");
    rt.command()
        .args(["backend", "cpu"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--yes"));
    assert!(rt.calls().is_empty());
    Ok(())
}

#[test]
fn cli_backend_missing_runtime_prints_guidance() -> Result<(), Box<dyn std::error::Error>> {
    let rt = FakeRuntime::missing();
    rt.command()
        .args(["backend", "gpu"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("python.org"))
        .stdout(predicate::str::contains("--yes").not());
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("mekicopy"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mekicopy"));
    Ok(())
}
