use clap::{CommandFactory, Parser};
use code_analyser_cli::args::Args;
use code_analyser_cli::config::options_from_args;
use code_analyser_cli::error::Result;
use code_analyser_cli::options::OutputType;
use code_analyser_cli::presentation;
use code_analyser_engine::LanguageRegistry;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let args = Args::parse();

    if args.paths.is_empty() {
        // 引数なしは使い方を表示して正常終了
        return match Args::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Application Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(debug: bool) -> Result<()> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .add_filter_allow_str("code_analyser")
        .set_time_level(LevelFilter::Off)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    init_logger(args.debug)?;
    let started = Instant::now();

    let registry = LanguageRegistry::builtin();
    let options = options_from_args(args, &registry)?;
    log::debug!("options: {options:?}");

    let result = code_analyser_engine::analyze(&registry, &options, &args.paths)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    presentation::write(&result, &options, args.output_type, &mut out)?;
    if args.output_type == OutputType::Default {
        writeln!(out, "Number of CPU: {}", num_cpus::get())?;
        writeln!(out, "Execution time: {:.3?}", started.elapsed())?;
    }
    out.flush()?;
    Ok(())
}
