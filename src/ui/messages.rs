//! Operator-facing text.
//!
//! MekiCopy's users are Korean-speaking, so everything printed for the
//! operator is Korean. Log lines and error `Display` impls stay English.

use std::path::Path;

use crate::config::Backend;

/// Shown when the runtime cannot be found on the search path.
pub fn runtime_missing(runtime: &str) -> String {
    format!(
        "Python({})을(를) 찾을 수 없습니다. https://www.python.org/downloads/ 에서 Python을 설치한 뒤 다시 실행하세요. (설치 시 \"Add python.exe to PATH\"를 체크하세요)",
        runtime
    )
}

/// Shown after every install step succeeded.
pub fn install_complete() -> &'static str {
    "설치가 완료되었습니다!"
}

/// Header for the install command.
pub fn install_header() -> &'static str {
    "MekiCopy 설치"
}

/// Progress line for the package manager upgrade.
pub fn upgrading_package_manager(package_manager: &str) -> String {
    format!("{} 업그레이드 중...", package_manager)
}

/// Progress line for the package install.
pub fn installing_packages(packages: &[String]) -> String {
    format!("패키지 설치 중: {}", packages.join(" "))
}

/// Progress line for removing a package.
pub fn uninstalling_package(package: &str) -> String {
    format!("{} 제거 중...", package)
}

/// Shown when a step fails; the exit code is passed through unchanged.
pub fn step_failed(command: &str, code: Option<i32>) -> String {
    match code {
        Some(code) => format!("명령이 실패했습니다 (종료 코드 {}): {}", code, command),
        None => format!("명령을 실행할 수 없습니다: {}", command),
    }
}

/// Shown before a dry run lists its plan.
pub fn dry_run_notice() -> &'static str {
    "미리보기 모드입니다. 아래 명령은 실행되지 않습니다."
}

/// Spinner text while the OCR tool runs.
pub fn recognizing(image: &Path) -> String {
    format!("인식 중: {}", image.display())
}

/// Spinner text after the OCR tool finished.
pub fn recognized() -> &'static str {
    "인식 완료"
}

/// Shown when the OCR tool exits with a failure status.
pub fn recognition_failed() -> &'static str {
    "인식에 실패했습니다."
}

/// Shown when the image passed to `ocr` does not exist.
pub fn image_not_found(path: &Path) -> String {
    format!("이미지를 찾을 수 없습니다: {}", path.display())
}

/// Confirmation question before swapping the inference backend.
pub fn backend_swap_question(from: &str, to: &str) -> String {
    format!("{}을(를) 제거하고 {}을(를) 설치할까요?", from, to)
}

/// Shown after the inference backend was swapped.
pub fn backend_switched(backend: Backend) -> String {
    format!("{} 백엔드로 전환되었습니다!", backend.label())
}

/// Shown when the operator declines the swap.
pub fn cancelled() -> &'static str {
    "취소되었습니다."
}

/// Hint for non-interactive runs that need `--yes`.
pub fn confirm_with_yes() -> &'static str {
    "--yes 옵션으로 확인 없이 실행할 수 있습니다."
}

/// Result line for `check` when the runtime was found.
pub fn runtime_found(runtime: &str, path: &Path) -> String {
    format!("{}: {}", runtime, path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_missing_names_runtime_and_download_page() {
        let msg = runtime_missing("python");
        assert!(msg.contains("python"));
        assert!(msg.contains("python.org"));
    }

    #[test]
    fn installing_packages_lists_all() {
        let packages = vec!["meikiocr".to_string(), "mss".to_string()];
        assert!(installing_packages(&packages).contains("meikiocr mss"));
    }

    #[test]
    fn step_failed_with_code() {
        let msg = step_failed("python -m pip install mss", Some(2));
        assert!(msg.contains("2"));
        assert!(msg.contains("pip install mss"));
    }

    #[test]
    fn step_failed_without_code() {
        let msg = step_failed("python -m pip", None);
        assert!(msg.contains("python -m pip"));
    }

    #[test]
    fn backend_switched_names_backend() {
        assert!(backend_switched(Backend::Gpu).contains("GPU"));
    }
}
