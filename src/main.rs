use std::{fs, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use pascond::{config::PreprocessorConfig, environment::Architecture, preprocess};
use tracing_subscriber::EnvFilter;

/// pascond resolves conditional-compilation directives in Pascal-family
/// source, commenting out the dead branches while keeping line numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The source file to preprocess.
    file: PathBuf,

    /// Loads settings from a JSON file before applying the other flags.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Defines a symbol before the first line. Can be repeated.
    #[arg(short = 'D', long = "define", value_name = "SYMBOL")]
    defines: Vec<String>,

    /// Value of the `CompilerVersion` intrinsic.
    #[arg(long)]
    compiler_version: Option<f64>,

    /// Target architecture used for `SizeOf`.
    #[arg(long = "arch", value_enum)]
    architecture: Option<Architecture>,

    /// Compares symbol names exactly instead of ignoring case.
    #[arg(long)]
    case_sensitive: bool,

    /// Adds a directory to search for `$I` files. Can be repeated.
    #[arg(short = 'I', long = "include-path", value_name = "DIR")]
    include_paths: Vec<PathBuf>,

    /// Prints the final define-set to stderr after the text.
    #[arg(long = "defines")]
    print_defines: bool,

    /// Increases log verbosity. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Builds the effective configuration: the config file, if any, with
    /// command-line flags layered on top.
    fn config(&self) -> Result<PreprocessorConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => PreprocessorConfig::from_json_file(path)?,
            None => PreprocessorConfig::default(),
        };

        config.defines.extend(self.defines.iter().cloned());
        config.include_paths.extend(self.include_paths.iter().cloned());
        if let Some(parent) = self.file.parent() {
            config.include_paths.insert(0, parent.to_path_buf());
        }
        if let Some(version) = self.compiler_version {
            config.compiler_version = version;
        }
        if let Some(architecture) = self.architecture {
            config.architecture = architecture;
        }
        config.case_sensitive |= self.case_sensitive;

        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config()?;
    let source = fs::read_to_string(&args.file).map_err(|e| {
                     format!("Failed to read the input file '{}': {e}", args.file.display())
                 })?;

    let output = preprocess(&source, &config);
    print!("{}", output.text);

    for diagnostic in &output.diagnostics {
        eprintln!("{}: {diagnostic}", args.file.display());
    }

    if args.print_defines {
        let defines = output.defines.iter().collect::<Vec<_>>();
        eprintln!("Defined: {}", defines.join(" "));
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
