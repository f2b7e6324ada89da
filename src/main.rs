use cidr_reconcile::cli::{execute, Args};
use cidr_reconcile::config::Settings;
use cidr_reconcile::logging::init_logging;
use cidr_reconcile::output::{render, summary_line};
use clap::Parser;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    init_logging(&settings)?;
    settings.log_rejected();

    let args = Args::parse();
    log::info!("#Start main() {:?}", args.command);

    let report = execute(&args.command, std::io::stdin().lock())?;
    if let Some(blocks) = &report.blocks {
        print!("{}", render(blocks, args.format.unwrap_or(settings.format))?);
    }
    if args.summary {
        eprintln!(
            "{}",
            summary_line(
                report.operation,
                report.inputs,
                report.blocks.as_ref().map(Vec::len)
            )
        );
    }

    Ok(())
}
