use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Compile a one-function program into JavaScript.
#[derive(Debug, Parser)]
#[command(name = "defc", version)]
pub struct Args {
    /// Source file to compile.
    #[arg(default_value = "test.src")]
    pub source: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pipeline stage to print.
    #[arg(long, value_enum, default_value_t = Emit::Js)]
    pub emit: Emit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// The assembled JavaScript program.
    Js,
    /// Tokens as JSON.
    Tokens,
    /// Syntax tree as JSON.
    Ast,
    /// Syntax tree printed back as normalized source.
    Src,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Args, Emit};

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["defc"]).unwrap();
        assert_eq!(args.source, std::path::PathBuf::from("test.src"));
        assert_eq!(args.output, None);
        assert_eq!(args.emit, Emit::Js);
    }

    #[test]
    fn emit_and_output() {
        let args =
            Args::try_parse_from(["defc", "prog.src", "--emit", "ast", "-o", "out.json"]).unwrap();
        assert_eq!(args.source, std::path::PathBuf::from("prog.src"));
        assert_eq!(args.output, Some("out.json".into()));
        assert_eq!(args.emit, Emit::Ast);
    }

    #[test]
    fn emit_src() {
        let args = Args::try_parse_from(["defc", "--emit", "src"]).unwrap();
        assert_eq!(args.emit, Emit::Src);
    }

    #[test]
    fn rejects_unknown_stage() {
        assert!(Args::try_parse_from(["defc", "--emit", "asm"]).is_err());
    }
}
