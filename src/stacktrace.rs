// src/stacktrace.rs - Detail-block text reformatting
//
// Two free-text fields get structured rendering: the plain `stacktrace`
// field, and the chained `errorVerbose` field produced by error-wrapping
// libraries, where each wrapped error contributes a one-line message
// followed by stack frames. A frame is a function-name line joined to a
// tab-indented file-location line by a literal `\n\t`.

/// Placeholder fusing a frame's two physical lines into one logical line so
/// the scan can tell frame lines from section titles. Not expected to occur
/// naturally in trace text.
const STACK_SPACER: &str = "_-@\\!/@-_";

/// Render a plain `stacktrace` field: a `Stacktrace` header line followed by
/// the input reindented by four spaces, preserving original line breaks.
pub fn format_stacktrace(stacktrace: &str) -> String {
    format!("Stacktrace\n    {}", stacktrace.replace('\n', "\n    "))
}

/// Render a chained `errorVerbose` field as an `Error Verbose` block.
///
/// Each section starts with an error-message title followed by its stack
/// frames. Titles are set off by a blank line and a two-space indent; frames
/// get a four-space indent with the file-location line kept on its own
/// tab-prefixed line. The scan is purely structural: frame content is never
/// inspected beyond the presence of the fused pair.
pub fn format_error_verbose(error_verbose: &str) -> String {
    let fused = error_verbose.replace("\n\t", STACK_SPACER);
    let text = format!("  {}", fused);
    let lines: Vec<&str> = text.lines().collect();

    let mut out = String::from("Error Verbose\n");
    let mut started_section = false;

    for pair in lines.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        let previous_is_frame = previous.contains(STACK_SPACER);
        let current_is_frame = current.contains(STACK_SPACER);

        if current_is_frame && !previous_is_frame {
            // Section boundary: the previous line is the section title
            out.push_str("\n  ");
            out.push_str(previous);
            started_section = true;
        } else if previous_is_frame {
            push_frame_line(&mut out, previous, started_section, false);
            started_section = false;
        } else {
            out.push_str(previous);
            out.push('\n');
            started_section = false;
        }
    }

    // The pairwise loop only ever emits the previous line, so the final
    // buffered line is handled here the same way
    if let Some(last) = lines.last() {
        if last.contains(STACK_SPACER) {
            push_frame_line(&mut out, last, started_section, true);
        } else {
            if lines.len() > 1 {
                out.push_str("  ");
            }
            out.push_str(last);
        }
    }

    out
}

fn push_frame_line(out: &mut String, line: &str, first_in_section: bool, last_overall: bool) {
    if first_in_section {
        out.push('\n');
    }
    out.push_str("    ");
    // A frame line carries exactly one fused pair; restoring two is enough
    out.push_str(&line.replacen(STACK_SPACER, "\n    \t", 2));
    if !last_overall {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacktrace_reindents_every_line() {
        let result = format_stacktrace("goroutine 1 [running]:\nmain.main()\n\t/app/main.go:10");
        assert_eq!(
            result,
            "Stacktrace\n    goroutine 1 [running]:\n    main.main()\n    \t/app/main.go:10"
        );
    }

    #[test]
    fn test_stacktrace_single_line() {
        assert_eq!(format_stacktrace("boom"), "Stacktrace\n    boom");
    }

    #[test]
    fn test_error_verbose_single_section() {
        let result = format_error_verbose("title\nSectionA\nStack1a\n\tFile1a");
        assert_eq!(
            result,
            "Error Verbose\n  title\n\n  SectionA\n    Stack1a\n    \tFile1a"
        );
    }

    #[test]
    fn test_error_verbose_multiple_sections() {
        let input = "outer: inner\ninner cause\nfnA\n\tfileA:1\nfnB\n\tfileB:2";
        let result = format_error_verbose(input);
        assert_eq!(
            result,
            "Error Verbose\n  outer: inner\n\n  inner cause\n    fnA\n    \tfileA:1\n    fnB\n    \tfileB:2"
        );
    }

    #[test]
    fn test_error_verbose_single_line_input() {
        // No frames at all: two-space indent, no section title
        assert_eq!(
            format_error_verbose("only an error message"),
            "Error Verbose\n  only an error message"
        );
    }

    #[test]
    fn test_error_verbose_plain_lines_only() {
        // No frame lines anywhere: no section markers appear
        let result = format_error_verbose("first\nsecond");
        assert_eq!(result, "Error Verbose\n  first\n  second");
    }

    #[test]
    fn test_error_verbose_frames_only() {
        // Input that starts directly with a frame: the prefixed first line
        // is itself the section title
        let result = format_error_verbose("fnA\n\tfileA");
        assert_eq!(result, "Error Verbose\n      fnA\n    \tfileA");
    }

    #[test]
    fn test_error_verbose_no_trailing_newline_after_last_frame() {
        let result = format_error_verbose("title\nfnA\n\tfileA");
        assert!(!result.ends_with('\n'));
    }
}
