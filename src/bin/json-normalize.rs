use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use json_normalizer::{
    EncodeOptions, Format, FormatNormalizer, Indent, JsonText, NewLine, Normalize,
};

/// Normalize the style of JSON documents.
///
/// json-normalize reads JSON from stdin or files and rewrites its
/// indentation, line endings and trailing newline to a consistent style
/// without changing the values. Useful for keeping config files and
/// fixtures in a canonical form.
#[derive(Parser, Debug)]
#[command(name = "json-normalize")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of spaces per indentation level.
    #[arg(short, long, default_value = "4")]
    indent: usize,

    /// Use tabs instead of spaces for indentation.
    #[arg(short = 't', long)]
    tabs: bool,

    /// Line ending style.
    #[arg(long, value_enum, default_value = "lf")]
    eol: EolArg,

    /// Do not end the output with a newline.
    #[arg(long)]
    no_final_newline: bool,

    /// Escape non-ASCII characters as \uXXXX sequences.
    #[arg(long)]
    escape_unicode: bool,

    /// Escape forward slashes as \/.
    #[arg(long)]
    escape_solidus: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EolArg {
    Lf,
    Crlf,
    Cr,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("json-normalize: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let input = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            eprintln!("json-normalize: reading from terminal; pipe input or pass a file");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let mut combined = String::new();
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            combined.push_str(&content);
        }
        combined
    };

    let normalizer = FormatNormalizer::new(build_format(&args)?)?;
    let normalized = normalizer.normalize(&JsonText::from_encoded(&input)?)?;

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, normalized.encoded())
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        io::stdout().write_all(normalized.encoded().as_bytes())?;
    }

    Ok(())
}

fn build_format(args: &Args) -> Result<Format, Box<dyn std::error::Error>> {
    let indent = if args.tabs { Indent::tab() } else { Indent::spaces(args.indent)? };

    let newline = match args.eol {
        EolArg::Lf => NewLine::lf(),
        EolArg::Crlf => NewLine::crlf(),
        EolArg::Cr => NewLine::from_str("\r")?,
    };

    let mut options = EncodeOptions::PRETTY_PRINT;
    if args.escape_unicode {
        options |= EncodeOptions::ESCAPE_UNICODE;
    }
    if args.escape_solidus {
        options |= EncodeOptions::ESCAPE_SOLIDUS;
    }

    Ok(Format::new(options, indent, newline, !args.no_final_newline))
}
