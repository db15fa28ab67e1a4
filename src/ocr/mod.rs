//! Launching the installed OCR tool.
//!
//! Recognition happens inside the external `meikiocr` module; this only
//! runs `<runtime> -m meikiocr.cli <image>` and tidies what it prints.

pub mod postprocess;

pub use postprocess::{postprocess_text, select_output};

use std::ffi::OsString;
use std::path::Path;

use serde::Serialize;

use crate::config::InstallerConfig;
use crate::error::{MekiError, Result};
use crate::installer::InstallContext;
use crate::shell::{CommandOptions, Invocation};

/// Text produced by one OCR tool run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OcrOutput {
    /// Recognized text (or the tool's error output).
    pub text: String,
    /// The tool's exit code.
    pub exit_code: Option<i32>,
    /// Whether the tool exited successfully.
    pub success: bool,
}

/// Runs the OCR tool against single images.
pub struct OcrRunner<'a> {
    config: &'a InstallerConfig,
    ctx: &'a InstallContext<'a>,
}

impl<'a> OcrRunner<'a> {
    pub fn new(config: &'a InstallerConfig, ctx: &'a InstallContext<'a>) -> Self {
        Self { config, ctx }
    }

    /// The invocation used for `image`.
    pub fn invocation(&self, runtime: &Path, image: &Path) -> Invocation {
        Invocation::new(
            runtime,
            [
                OsString::from("-m"),
                OsString::from(&self.config.ocr_module),
                image.as_os_str().to_os_string(),
            ],
        )
    }

    /// Recognize the text in `image`.
    ///
    /// The runtime is probed before the image is checked. With `raw` the
    /// tool's output is only trimmed; otherwise its lines are joined.
    /// A failing tool is not an error here: its text and code come back in
    /// the [`OcrOutput`].
    pub fn recognize(&self, image: &Path, raw: bool) -> Result<OcrOutput> {
        let runtime = self.ctx.require_runtime(&self.config.runtime)?;
        if !image.is_file() {
            return Err(MekiError::ImageNotFound {
                path: image.to_path_buf(),
            });
        }

        let invocation = self.invocation(&runtime, image);
        let mut options = CommandOptions::captured();
        options
            .env
            .insert("PYTHONIOENCODING".to_string(), "utf-8".to_string());

        let result = (self.ctx.run)(&invocation, &options)?;
        let selected = select_output(&result.stdout, &result.stderr);
        let text = if raw {
            selected.to_string()
        } else {
            postprocess_text(selected)
        };

        tracing::debug!(
            image = %image.display(),
            chars = text.chars().count(),
            success = result.success,
            "ocr finished"
        );

        Ok(OcrOutput {
            text,
            exit_code: result.exit_code,
            success: result.success,
        })
    }
}
