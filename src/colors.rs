/// ANSI color codes for rendered log lines
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub severity_debug: &'static str,   // Blue for debug and unknown levels
    pub severity_info: &'static str,    // Green for info
    pub severity_warning: &'static str, // Yellow for warning
    pub severity_error: &'static str,   // Red for error/dpanic/panic/fatal
    pub annotation: &'static str,       // Dim gray for (logger, caller)
    pub message: &'static str,          // Blue for the log message
    pub reset: &'static str,            // Reset to default color
}

impl ColorScheme {
    /// Create the fixed color scheme, or an all-empty one when the output
    /// stream is not a color-capable terminal.
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self {
                severity_debug: "\x1b[34m",
                severity_info: "\x1b[32m",
                severity_warning: "\x1b[33m",
                severity_error: "\x1b[31m",
                annotation: "\x1b[38;5;244m", // 256-color grayscale
                message: "\x1b[34m",
                reset: "\x1b[0m",
            }
        } else {
            Self {
                severity_debug: "",
                severity_info: "",
                severity_warning: "",
                severity_error: "",
                annotation: "",
                message: "",
                reset: "",
            }
        }
    }

    /// Get the color for a severity label; unknown severities use blue
    pub fn severity_color(&self, severity: &str) -> &'static str {
        match severity.to_lowercase().as_str() {
            "debug" => self.severity_debug,
            "info" => self.severity_info,
            "warning" => self.severity_warning,
            "error" | "dpanic" | "panic" | "fatal" => self.severity_error,
            _ => self.severity_debug,
        }
    }

    /// Wrap text in a color span, resetting afterwards
    pub fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", color, text, self.reset)
        }
    }
}
