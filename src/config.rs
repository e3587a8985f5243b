/// Per-run processor options, resolved from flags and environment by the
/// caller. One instance is built per run and passed in explicitly; there is
/// no process-wide mutable state.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Keep zapdriver noise fields (`labels`, `serviceContext`, ...) in the
    /// JSON tail instead of hiding them.
    pub show_all_fields: bool,
    /// Show elapsed time since the previous record in the header.
    pub show_delta: bool,
    /// Field count above which the JSON tail switches to multiline layout.
    pub multiline_threshold: usize,
    /// Always use multiline layout for the JSON tail.
    pub multiline_forced: bool,
    /// Emit diagnostic traces on stderr.
    pub debug: bool,
    /// Maximum accepted input line length in bytes.
    pub max_line_length: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            show_all_fields: false,
            show_delta: false,
            multiline_threshold: 3,
            multiline_forced: false,
            debug: false,
            max_line_length: 268435456, // 256MiB
        }
    }
}
