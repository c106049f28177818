//! tfe-team-remove - Main entry point

use clap::Parser;
use log::{debug, error, info};
use std::process::ExitCode;
use std::time::Duration;

use tfe_team_remove::{
    collect_emails, run_remove_command, Cli, TfeClient, TfeError, TokenResolver, FATAL_ERROR_CODE,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit with the fatal code, not clap's default of 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                exit_code(FATAL_ERROR_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfe-team-remove v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org={}, team={}, host={}, emails={:?}, emails_file={:?}, output={}",
        cli.org, cli.team, cli.host, cli.emails, cli.emails_file, cli.output
    );

    match run(&cli).await {
        Ok(code) => exit_code(code),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            exit_code(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<i32, TfeError> {
    // Inputs are validated before any credentials or network access
    let emails = collect_emails(&cli.emails, cli.emails_file.as_deref())?;

    let token = TokenResolver::new(&cli.host).resolve(cli.token.as_deref())?;

    let mut client = TfeClient::new(token, &cli.host);
    client.set_grace_period(Duration::from_secs(cli.grace_period));

    let status = run_remove_command(&client, cli, emails).await?;
    Ok(status.code())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
