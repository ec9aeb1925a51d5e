use anyhow::Result;
use clap::Parser;
use tracing::error;

use mailtally::{
    input::read_email_list,
    report::{build_report, print_report, redact_report},
    utils::{setup_logging, validate_args},
    Args,
};

fn run(args: &Args) -> Result<()> {
    let emails = read_email_list(args.input.as_deref())?;
    let mut report = build_report(&emails, args);
    if args.redact {
        redact_report(&mut report);
    }
    print_report(&report, args)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    if let Err(e) = run(&args) {
        error!(action = "fail", component = "main", error = %e, "mailtally failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
