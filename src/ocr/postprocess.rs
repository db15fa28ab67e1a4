//! Cleanup of the OCR tool's raw output.

/// Join the tool's fragmented lines into one.
///
/// The tool splits vertical text into many short lines; every run of
/// whitespace, line breaks included, becomes a single space.
pub fn postprocess_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pick the text to show: trimmed stdout, or trimmed stderr when stdout is
/// empty.
pub fn select_output<'a>(stdout: &'a str, stderr: &'a str) -> &'a str {
    let out = stdout.trim();
    if out.is_empty() {
        stderr.trim()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_line_breaks() {
        assert_eq!(postprocess_text("こんにちは\n世界\n"), "こんにちは 世界");
    }

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(postprocess_text("  a \t\r\n  b   c  "), "a b c");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(postprocess_text(" \n "), "");
    }

    #[test]
    fn stdout_preferred() {
        assert_eq!(select_output(" text \n", "warning"), "text");
    }

    #[test]
    fn falls_back_to_stderr() {
        assert_eq!(select_output("\n", " Traceback ... \n"), "Traceback ...");
    }
}
