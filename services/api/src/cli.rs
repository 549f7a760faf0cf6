use crate::pool::{run_pool_export, run_pool_report, PoolExportArgs, PoolReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruit_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruit AI",
    about = "Serve and inspect deterministic candidate pools for recruiter dashboards",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect or export a job's synthesized candidate pool
    Pool {
        #[command(subcommand)]
        command: PoolCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PoolCommand {
    /// Print bucket counts, common gaps, and the top-ranked candidates
    Report(PoolReportArgs),
    /// Write the pool as CSV
    Export(PoolExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Pool {
            command: PoolCommand::Report(args),
        } => run_pool_report(args),
        Command::Pool {
            command: PoolCommand::Export(args),
        } => run_pool_export(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["recruit-ai-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_pool_report_arguments() {
        let cli = Cli::try_parse_from([
            "recruit-ai-api",
            "pool",
            "report",
            "--job",
            "jd2",
            "--top",
            "3",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Pool {
                command: PoolCommand::Report(args),
            }) => {
                assert_eq!(args.job, "jd2");
                assert_eq!(args.top, 3);
                assert!(args.jobs_file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn pool_export_requires_a_job() {
        assert!(Cli::try_parse_from(["recruit-ai-api", "pool", "export"]).is_err());
    }
}
