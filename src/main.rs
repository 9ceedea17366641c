//! CLI entry point for codebundle

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use codebundle::{BundleConfig, ChunkWriter, ConsoleFormatter, EntryFilter, Exporter, TreeWalker};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "codebundle")]
#[command(about = "Print the project tree and bundle its source files into size-capped text chunks")]
#[command(version)]
struct Args {
    /// Project directory to bundle. Chunks are written to the current directory.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn,ignore=warn,globset=warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = BundleConfig {
        root: args.path.clone(),
        ..Default::default()
    };

    if let Err(e) = run(&config, should_use_color(args.color)) {
        eprintln!("codebundle: {}", e);
        process::exit(1);
    }
}

/// Print the tree, then export. The chunk count is reported even when the
/// export walk fails part way.
fn run(config: &BundleConfig, use_color: bool) -> codebundle::Result<()> {
    println!("Project structure:");
    let walker = TreeWalker::new(EntryFilter::from_config(config));
    let mut formatter = ConsoleFormatter::new(use_color);
    walker.walk(&config.root, &mut formatter)?;

    let exporter = Exporter::new(config.clone());
    let mut writer = ChunkWriter::create(Path::new("."), &config.output_prefix, config.char_limit)?;
    let exported = exporter.export_into(&mut writer, |skipped| {
        println!(
            "Error reading file {}: {}",
            skipped.relative_path, skipped.error
        );
    });

    let chunk_count = writer.chunk_count();
    let finished = writer.finish();
    println!("Project code written to {} file(s).", chunk_count);

    exported?;
    finished?;
    Ok(())
}
