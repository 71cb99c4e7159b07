use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use polytonic_parser::{detect, identify_encoding, parse_as};
use polytonic_protocol::{CharacterNode, Encoding};
use polytonic_render::convert;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Identify and convert polytonic Greek text encodings")]
struct Cli {
    /// Log parser and renderer activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct Io {
    /// Read from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the encoding the text is written in
    Detect {
        /// Also print the verdict of every classifier
        #[arg(short, long)]
        all: bool,

        #[command(flatten)]
        io: Io,
    },
    /// Convert text into another encoding
    Convert {
        /// Source encoding; detected when omitted
        #[arg(short, long)]
        from: Option<Encoding>,

        /// Target encoding
        #[arg(short, long, default_value = "unicode_precomposed")]
        to: Encoding,

        #[command(flatten)]
        io: Io,
    },
    /// Dump the character AST as JSON
    Ast {
        /// Source encoding; detected when omitted
        #[arg(short, long)]
        from: Option<Encoding>,

        #[command(flatten)]
        io: Io,
    },
}

#[derive(Serialize)]
struct Verdicts {
    encoding: Encoding,
    tlg_beta_code: bool,
    typegreek_beta_code: bool,
    unicode_precomposed: bool,
    unicode_combining: bool,
    unicode: bool,
}

#[derive(Serialize)]
struct AstDump<'a> {
    encoding: Encoding,
    nodes: &'a [CharacterNode],
}

impl Io {
    fn read(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => {
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
            }
            None => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text).context("reading stdin")?;
                Ok(text)
            }
        }
    }

    fn write(&self, text: &str) -> anyhow::Result<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
                info!(path = %path.display(), bytes = text.len(), "wrote output");
            }
            None => println!("{text}"),
        }
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Shell input usually ends in a newline the user did not mean as text.
fn trim_newline(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Detect { all, io } => {
            let input = io.read()?;
            let text = trim_newline(&input);
            let encoding = identify_encoding(text);
            if all {
                let verdicts = Verdicts {
                    encoding,
                    tlg_beta_code: detect::is_tlg_betacode(text),
                    typegreek_beta_code: detect::is_typegreek_betacode(text),
                    unicode_precomposed: detect::is_precomposed_greek(text),
                    unicode_combining: detect::is_combining_greek(text),
                    unicode: detect::is_unicode_greek(text),
                };
                io.write(&serde_json::to_string_pretty(&verdicts)?)
            } else {
                io.write(encoding.as_str())
            }
        }
        Command::Convert { from, to, io } => {
            let input = io.read()?;
            let output = convert(trim_newline(&input), from, to)
                .with_context(|| format!("converting into {to}"))?;
            io.write(&output)
        }
        Command::Ast { from, io } => {
            let input = io.read()?;
            let text = trim_newline(&input);
            let encoding = from.unwrap_or_else(|| identify_encoding(text));
            let Some(parsed) = parse_as(encoding, text) else {
                bail!("could not identify the encoding of the input");
            };
            let nodes = parsed.with_context(|| format!("reading {encoding} input"))?;
            debug!(nodes = nodes.len(), "parsed");
            let dump = AstDump {
                encoding,
                nodes: &nodes,
            };
            io.write(&serde_json::to_string_pretty(&dump)?)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli.command)
}
