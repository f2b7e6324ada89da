//! Command-line surface of the `cidr-reconcile` binary.

use crate::input::{read_tokens, read_tokens_from_path};
use crate::models::{Address, NetworkBlock};
use crate::output::OutputFormat;
use crate::processing::{addresses_to_networks, merge_networks, range_to_networks};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::BufRead;
use std::path::PathBuf;

/// Reconcile address ranges and CIDR blocks into minimal CIDR sets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (defaults to CIDR_RECONCILE_FORMAT, then plain)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Print an input/output summary on stderr
    #[arg(long, global = true)]
    pub summary: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge overlapping, adjacent and duplicate CIDR blocks
    Merge {
        /// CIDR blocks; read from --input or stdin when omitted
        cidrs: Vec<String>,

        /// File with CIDR blocks
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Convert an inclusive address range into CIDR blocks
    Range {
        /// First address of the range
        start: String,
        /// Last address of the range
        end: String,
    },
    /// Group individual addresses into CIDR blocks
    Group {
        /// Addresses; read from --input or stdin when omitted
        addresses: Vec<String>,

        /// File with one or more addresses per line
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Merge { .. } => "merge",
            Command::Range { .. } => "range",
            Command::Group { .. } => "group",
        }
    }
}

/// Outcome of one command.
#[derive(Debug)]
pub struct Report {
    pub operation: &'static str,
    pub inputs: usize,
    /// `None` when the operation had nothing to work on.
    pub blocks: Option<Vec<NetworkBlock>>,
}

fn collect_tokens<R: BufRead>(
    positional: &[String],
    input: Option<&PathBuf>,
    stdin: R,
) -> Result<Vec<String>, Box<dyn Error>> {
    let mut tokens = positional.to_vec();
    match input {
        Some(path) => tokens.extend(read_tokens_from_path(path)?),
        None if positional.is_empty() => {
            log::debug!("No arguments given, reading stdin");
            tokens.extend(read_tokens(stdin)?);
        }
        None => {}
    }
    Ok(tokens)
}

/// Run `command`, reading from `stdin` when it has no other input.
pub fn execute<R: BufRead>(command: &Command, stdin: R) -> Result<Report, Box<dyn Error>> {
    log::info!("#Start {}", command.name());
    let report = match command {
        Command::Merge { cidrs, input } => {
            let tokens = collect_tokens(cidrs, input.as_ref(), stdin)?;
            let networks = tokens
                .iter()
                .map(|t| NetworkBlock::parse(t))
                .collect::<Result<Vec<_>, _>>()?;
            Report {
                operation: command.name(),
                inputs: networks.len(),
                blocks: merge_networks(Some(networks.as_slice()))?,
            }
        }
        Command::Range { start, end } => {
            let start = Address::parse(start)?;
            let end = Address::parse(end)?;
            Report {
                operation: command.name(),
                inputs: 2,
                blocks: Some(range_to_networks(start, end)?),
            }
        }
        Command::Group { addresses, input } => {
            let tokens = collect_tokens(addresses, input.as_ref(), stdin)?;
            let addrs = tokens
                .iter()
                .map(|t| Address::parse(t))
                .collect::<Result<Vec<_>, _>>()?;
            Report {
                operation: command.name(),
                inputs: addrs.len(),
                blocks: addresses_to_networks(&addrs)?,
            }
        }
    };
    log::info!(
        "#End {}: {} inputs -> {:?} blocks",
        report.operation,
        report.inputs,
        report.blocks.as_ref().map(Vec::len)
    );
    Ok(report)
}
