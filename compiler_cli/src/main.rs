use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use compiler::error::{LexSnafu, ParseSnafu};
use compiler::{CompileError, format_diagnostic};
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::{Args, Emit};
use view::ViewCtx;

mod args;
mod view;

#[derive(Debug, Snafu)]
enum CliError {
    #[snafu(display("cannot read {}: {source}", path.display()))]
    ReadSource { path: PathBuf, source: io::Error },
    #[snafu(display("cannot write {}: {source}", path.display()))]
    WriteOutput { path: PathBuf, source: io::Error },
    #[snafu(display("cannot write stdout: {source}"))]
    Stdout { source: io::Error },
    #[snafu(display("cannot serialize output: {source}"))]
    Json { source: serde_json::Error },
    #[snafu(display("{source}"))]
    Compile { source: CompileError },
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    debug!(?args, "starting");

    let source = match fs::read_to_string(&args.source).context(ReadSourceSnafu {
        path: args.source.clone(),
    }) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match emit(&args, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Compile { source: err }) => {
            eprint!("{}", format_diagnostic(&source, &err));
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn emit(args: &Args, source: &str) -> Result<(), CliError> {
    let text = match args.emit {
        Emit::Js => match &args.output {
            // The driver owns the read-compile-write sequence when printing to stdout.
            None => {
                return compiler::run(source.as_bytes(), io::stdout().lock())
                    .context(CompileSnafu);
            }
            Some(_) => {
                let mut program = compiler::compile(source).context(CompileSnafu)?;
                program.push('\n');
                program
            }
        },
        Emit::Tokens => {
            let tokens = compiler::tokenize(source)
                .context(LexSnafu)
                .context(CompileSnafu)?;
            to_json(&ViewCtx::new(source).tokens(&tokens))?
        }
        Emit::Ast => {
            let tokens = compiler::tokenize(source)
                .context(LexSnafu)
                .context(CompileSnafu)?;
            let tree = compiler::parse(tokens)
                .context(ParseSnafu)
                .context(CompileSnafu)?;
            to_json(&ViewCtx::new(source).node(&tree))?
        }
        Emit::Src => {
            let mut text = compiler::format_source(source).context(CompileSnafu)?;
            text.push('\n');
            text
        }
    };

    write_output(args.output.as_ref(), &text)
}

fn to_json(value: &impl serde::Serialize) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(value).context(JsonSnafu)?;
    json.push('\n');
    Ok(json)
}

fn write_output(path: Option<&PathBuf>, text: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            fs::write(path, text).context(WriteOutputSnafu { path: path.clone() })?;
            info!(path = %path.display(), bytes = text.len(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes()).context(StdoutSnafu)?;
            stdout.flush().context(StdoutSnafu)
        }
    }
}
