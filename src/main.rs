//! Entry point for xcpreflight.
use std::process::ExitCode;

use clap::Parser;
use xcpreflight::{
    cli::{execute_cli_command, CliCommand, ParsedCommand, PrecheckArgs, RunProfile},
    lib::{errors::RunExit, telemetry},
    precheck::{self, config::PrecheckConfig, PrecheckOutcome},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = PrecheckArgs::parse();
    let command = args.into_command().map_err(RunExit::from_error)?;

    match command {
        ParsedCommand::RunCheck(profile) => run_precheck(profile),
        ParsedCommand::Cli { command, profile } => handle_cli_command(command, profile),
    }
}

fn run_precheck(profile: RunProfile) -> Result<ExitCode, RunExit> {
    let config = PrecheckConfig::resolve(&profile).map_err(RunExit::from_error)?;
    let report = precheck::run_precheck(&config).map_err(RunExit::from_error)?;
    print!("{}", report.render());

    Ok(match report.outcome {
        PrecheckOutcome::AllPresent { .. } => ExitCode::SUCCESS,
        PrecheckOutcome::MissingFile { .. } => ExitCode::FAILURE,
    })
}

fn handle_cli_command(command: CliCommand, profile: RunProfile) -> Result<ExitCode, RunExit> {
    let message = execute_cli_command(command, profile).map_err(RunExit::from_error)?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}
