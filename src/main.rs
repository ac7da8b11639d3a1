mod cli;
mod config;
mod output;

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::{Cli, Commands};
use config::{CONFIG_FILE, SymbolKindConfig};
use output::Resolution;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = SymbolKindConfig::load(&config_path);
    let use_color = std::io::stdout().is_terminal();

    match cli.command {
        Commands::Kinds { format } => {
            let format = format.unwrap_or(config.format);
            print!("{}", output::render_kinds(format, use_color));
        }

        Commands::Parse {
            identifiers,
            strict,
            format,
        } => {
            let format = format.unwrap_or(config.format);
            let results: Vec<Resolution> =
                identifiers.iter().map(|id| Resolution::new(id)).collect();
            print!("{}", output::render_resolutions(&results, format, use_color));

            let unknown: Vec<&str> = results
                .iter()
                .filter(|r| !r.is_known())
                .map(|r| r.input.as_str())
                .collect();
            if (strict || config.strict) && !unknown.is_empty() {
                bail!("unknown kind identifier(s): {}", unknown.join(", "));
            }
        }

        Commands::Decode {
            input,
            strict,
            verbose,
            format,
        } => {
            let format = format.unwrap_or(config.format);
            let json = read_input(&input)?;
            let records = symbol_kind::decode_kind_records(&json)
                .with_context(|| format!("failed to decode {}", input.display()))?;

            let mut unknown = Vec::new();
            for kind in &records {
                if verbose {
                    eprintln!("  {} -> {:?}", kind.identifier, kind.identifier);
                }
                if kind.identifier.is_unknown() {
                    eprintln!("warning: unknown kind identifier '{}'", kind.identifier);
                    unknown.push(kind.identifier.identifier());
                }
            }

            print!("{}", output::render_records(&records, format, use_color));

            if (strict || config.strict) && !unknown.is_empty() {
                bail!("unknown kind identifier(s): {}", unknown.join(", "));
            }
        }
    }

    Ok(())
}

/// Read the whole input file, or standard input when `path` is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read standard input")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
