use super::*;

fn render_error(
    mode: ColorMode,
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) -> String {
    let mut buf = Vec::new();
    ErrorOutput::new(mode).write_error(&mut buf, error_type, message, detail, suggestion);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let result = render_error(ColorMode::Never, "Config", "bad extensions", None, None);
    assert_eq!(result, "✖ Config: bad extensions\n");
}

#[test]
fn error_without_colors_full() {
    let result = render_error(
        ColorMode::Never,
        "ReportWrite",
        "Failed to write report: out/report.json",
        Some("No such file or directory (os error 2)"),
        Some("Pass --output"),
    );
    assert_eq!(
        result,
        "✖ ReportWrite: Failed to write report: out/report.json\n  \
         × No such file or directory (os error 2)\n  \
         help: Pass --output\n"
    );
}

#[test]
fn error_with_colors() {
    let result = render_error(ColorMode::Always, "Pattern", "bad glob", Some("detail"), None);
    assert!(result.contains("\x1b[1m\x1b[31m✖ Pattern:\x1b[0m bad glob"));
    assert!(result.contains("\x1b[2m× detail\x1b[0m"));
}

#[test]
fn warning_without_colors() {
    let mut buf = Vec::new();
    ErrorOutput::new(ColorMode::Never).write_warning(&mut buf, "Directory ./nope does not exist");
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "⚠ Warning: Directory ./nope does not exist\n"
    );
}

#[test]
fn warning_with_colors() {
    let mut buf = Vec::new();
    ErrorOutput::new(ColorMode::Always).write_warning(&mut buf, "careful");
    let result = String::from_utf8(buf).unwrap();
    assert!(result.starts_with("\x1b[1m\x1b[33m⚠ Warning:"));
}
