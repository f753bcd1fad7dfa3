use academic_records::config;
use academic_records::infrastructure::database;
use academic_records::presentation::cli::{Cli, Command};
use academic_records::presentation::panels::{PanelCommand, db, dispatch};
use academic_records::presentation::prompt::TerminalPrompt;
use academic_records::presentation::{Session, report_error, shell};
use academic_records::{AppContext, AppError, Config};

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load(&cli.connection)?;

    init_tracing(&config);
    config.print_summary();

    let format = cli.format;
    match run(cli, config).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            report_error(format, &e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), AppError> {
    if let Command::Panel(PanelCommand::Db { action }) = &cli.command
        && action.needs_database_creation()
    {
        db::prepare_database(cli.format, &config).await?;
    }

    let pool = database::connect(&config).await?;
    let session = Session::new(
        AppContext::new(pool),
        config,
        cli.format,
        Box::new(TerminalPrompt),
    );

    let result = match cli.command {
        Command::Shell => shell::run(&session).await,
        Command::Panel(command) => dispatch(&session, command).await,
    };

    session.ctx.pool.close().await;
    result
}
