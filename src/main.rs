use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use threshold_recovery::config::{
    Cli, Command, OutputFormat, RecoverArgs, SplitArgs, init_logging,
};
use threshold_recovery::recovery::ShareDocument;
use threshold_recovery::recovery::shamirsecretsharing::{Polynomial, split};
use threshold_recovery::report::{
    batch_failed, process_files, render_json, render_text,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::Recover(args) => recover(args),
        Command::Split(args) => split_shares(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn recover(args: RecoverArgs) -> anyhow::Result<ExitCode> {
    let reports = process_files(&args.files);

    let rendered = match args.format {
        OutputFormat::Text => render_text(&reports),
        OutputFormat::Json => render_json(&reports).context("failed to render report")? + "\n",
    };
    print!("{rendered}");

    if batch_failed(&reports, args.strict) {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn split_shares(args: SplitArgs) -> anyhow::Result<ExitCode> {
    let polynomial = Polynomial::new(args.coefficients);
    let points = split(&polynomial, args.shares)?;

    let doc = ShareDocument::from_shares(&points, polynomial.threshold() as u64, args.base)?;
    println!("{}", doc.to_json_pretty()?);

    Ok(ExitCode::SUCCESS)
}
