// src/processor.rs - Per-line orchestration
use chrono::{DateTime, Local};
use std::io::{BufRead, Write};

use crate::classify;
use crate::colors::ColorScheme;
use crate::config::ProcessorConfig;
use crate::error::{LineError, ProcessingError};
use crate::project::{self, DetailBlocks, HeaderParts};
use crate::render;
use crate::stacktrace;
use crate::timestamp;

/// Streaming line reformatter, one instance per run.
///
/// Each input line is fully consumed and emitted before the next is read.
/// Any per-line failure falls back to the raw line unchanged; only upstream
/// I/O faults and over-long lines terminate the run.
pub struct Processor {
    config: ProcessorConfig,
    colors: ColorScheme,
    // Last successfully normalized timestamp, for delta mode
    last_timestamp: Option<DateTime<Local>>,
}

impl Processor {
    pub fn new(config: ProcessorConfig, colors: ColorScheme) -> Self {
        Processor {
            config,
            colors,
            last_timestamp: None,
        }
    }

    /// Read lines from `input` until end-of-input, writing one rendered
    /// record per line. Records are separated by single newlines with no
    /// trailing separator after the last one.
    pub fn process<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<(), ProcessingError> {
        let mut first = true;

        for line_result in input.lines() {
            let line = match line_result {
                Ok(line) => line,
                Err(e) => {
                    if e.kind() == std::io::ErrorKind::UnexpectedEof {
                        break;
                    }
                    return Err(ProcessingError::Io(e));
                }
            };

            if line.len() > self.config.max_line_length {
                return Err(ProcessingError::LineTooLong {
                    length: line.len(),
                    max_length: self.config.max_line_length,
                });
            }

            let rendered = self.process_line(&line);
            let written = if first {
                write!(output, "{}", rendered)
            } else {
                write!(output, "\n{}", rendered)
            };

            if let Err(e) = written {
                // Downstream closed the pipe; stop quietly
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    break;
                }
                return Err(ProcessingError::Io(e));
            }

            first = false;
        }

        Ok(())
    }

    /// Format one record, falling back to the raw line on any failure
    pub fn process_line(&mut self, line: &str) -> String {
        self.debug(format_args!("Processing line: {}", line));

        match self.pretty_print_line(line) {
            Ok(pretty) => pretty,
            Err(LineError::UnrecognizedShape) => {
                self.debug(format_args!("Not a known log line format"));
                line.to_string()
            }
            Err(err) => {
                self.debug(format_args!("Not printing line formatted: {}", err));
                line.to_string()
            }
        }
    }

    fn pretty_print_line(&mut self, line: &str) -> Result<String, LineError> {
        let (mut fields, shape) = classify::classify_line(line)?;
        let (header, details) = project::project(&mut fields, shape, self.config.show_all_fields)?;

        let mut out = String::new();
        self.write_header(&mut out, &header);

        match render::render_tail(&fields, &self.config) {
            Ok(Some(tail)) => {
                out.push(' ');
                out.push_str(&tail);
            }
            Ok(None) => {}
            // The tail is decoration; drop it rather than the whole line
            Err(err) => self.debug(format_args!("{}", err)),
        }

        self.write_details(&mut out, &details);

        Ok(out)
    }

    fn write_header(&mut self, out: &mut String, header: &HeaderParts) {
        let formatted = timestamp::format_timestamp(&header.timestamp);

        if self.config.show_delta {
            let delta = match &self.last_timestamp {
                Some(previous) => timestamp::format_delta(previous, &header.timestamp),
                None => "-".to_string(),
            };
            out.push_str(&format!("[{}, {}]", formatted, delta));
        } else {
            out.push_str(&format!("[{}]", formatted));
        }

        // Tracked even when delta mode is off; the option is fixed per run
        self.last_timestamp = Some(header.timestamp);

        out.push(' ');
        let severity_color = self.colors.severity_color(&header.severity);
        out.push_str(
            &self
                .colors
                .paint(severity_color, &header.severity.to_uppercase()),
        );

        let annotation = match (&header.logger, &header.caller) {
            (Some(logger), Some(caller)) => Some(format!("({}, {})", logger, caller)),
            (Some(logger), None) => Some(format!("({})", logger)),
            (None, Some(caller)) => Some(format!("({})", caller)),
            (None, None) => None,
        };
        if let Some(annotation) = annotation {
            out.push(' ');
            out.push_str(&self.colors.paint(self.colors.annotation, &annotation));
        }

        out.push(' ');
        out.push_str(&self.colors.paint(self.colors.message, &header.message));
    }

    fn write_details(&self, out: &mut String, details: &DetailBlocks) {
        if let Some(trace) = &details.stacktrace {
            out.push('\n');
            out.push_str(&stacktrace::format_stacktrace(trace));
        }

        if details.stacktrace.is_some() && details.error_verbose.is_some() {
            // Both blocks present: a blank line keeps them apart
            out.push('\n');
        }

        if let Some(verbose) = &details.error_verbose {
            out.push('\n');
            out.push_str(&stacktrace::format_error_verbose(verbose));
        }
    }

    fn debug(&self, message: std::fmt::Arguments) {
        if self.config.debug {
            eprintln!("[pretty-debug] {}", message);
        }
    }
}
