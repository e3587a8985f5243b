use clap::Parser;
use is_terminal::IsTerminal;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use zap_pretty::{ColorScheme, Processor, ProcessorConfig};

#[derive(Parser)]
#[command(name = "zap-pretty")]
#[command(about = "Reformat zap/zapdriver JSON log lines into colorized human-readable text")]
#[command(version)]
struct Args {
    /// Show all fields, including zapdriver noise fields hidden by default
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Show elapsed time since the previous log line in the header
    #[arg(long)]
    delta: bool,

    /// Format the JSON tail as multiline when it has more than N fields
    #[arg(short = 'n', long = "multiline-threshold", value_name = "N", default_value = "3")]
    multiline_threshold: usize,

    /// Always format the JSON tail as multiline
    #[arg(long)]
    multiline: bool,

    /// Debug mode - show processing details on stderr
    #[arg(long)]
    debug: bool,

    /// Input file (default: stdin)
    #[arg(short = 'i', long = "input")]
    input_file: Option<PathBuf>,

    /// Maximum line length
    #[arg(long, default_value = "268435456")] // 256MiB
    max_line_length: usize,

    /// Buffer size for I/O
    #[arg(long, default_value = "65536")] // 64KB
    buffer_size: usize,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Absorb Ctrl-C: the shell delivers the signal to the whole pipeline
    // group, the producer exits, and we drain the pipe to end-of-input
    ctrlc::set_handler(|| {})?;

    let config = ProcessorConfig {
        show_all_fields: args.all,
        show_delta: args.delta,
        multiline_threshold: args.multiline_threshold,
        multiline_forced: args.multiline,
        debug: args.debug || std::env::var("ZAP_PRETTY_DEBUG").is_ok(),
        max_line_length: args.max_line_length,
    };

    let input: Box<dyn BufRead> = if let Some(input_path) = &args.input_file {
        let file = File::open(input_path).map_err(|e| {
            anyhow::anyhow!("failed to open input file '{}': {}", input_path.display(), e)
        })?;
        Box::new(BufReader::with_capacity(args.buffer_size, file))
    } else {
        Box::new(BufReader::with_capacity(args.buffer_size, io::stdin()))
    };

    let stdout = io::stdout();
    let colors = ColorScheme::new(stdout.is_terminal());
    let mut output = io::BufWriter::with_capacity(args.buffer_size, stdout.lock());

    let mut processor = Processor::new(config, colors);
    processor.process(input, &mut output)?;
    output.flush()?;

    Ok(())
}
