use clap::{Parser, Subcommand};
use std::path::PathBuf;

use submit::{BackendClient, Result, SolutionSubmitter, SubmitConfig, submitter};

#[derive(Parser)]
#[clap(about = "Submit solver output to the scoring API")]
struct Arguments {
    /// TOML config file. Without it the SUBMIT_* environment variables are used.
    #[clap(long, env = "SUBMIT_CONFIG")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Post a solution JSON file to the scoring endpoint.
    Submit {
        problem_id: i64,
        solver: String,
        solution: PathBuf,
    },
    /// List the latest solutions stored by the backend.
    Show,
    /// Check that the backend is up.
    Hello,
    /// Ask the backend to refresh pending scores.
    UpdateScore,
}

#[tokio::main]
async fn main() {
    // A missing .env is fine; SUBMIT_* may come from the real environment.
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Arguments::parse();

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Arguments) -> Result<()> {
    let config = match &args.config {
        Some(path) => SubmitConfig::from_file(path)?,
        None => SubmitConfig::from_env()?,
    };
    let client = submitter::http_client()?;

    let output = match args.command {
        Command::Submit {
            problem_id,
            solver,
            solution,
        } => {
            let payload = submitter::read_solution_file(&solution)?;
            let submitter = SolutionSubmitter::new(client, config);

            log::info!(
                "Submitting {} for problem {} to {} ({:?})",
                solution.display(),
                problem_id,
                submitter.config().endpoint_url,
                submitter.config().wire_format
            );

            submitter.submit_solution(problem_id, &solver, &payload).await?
        }
        Command::Show => {
            let rows = BackendClient::new(client, &config.backend_url).show().await?;
            for row in &rows {
                println!(
                    "{:>6} problem {:>3} {:<24} {:<20} {:>12}",
                    row.id,
                    row.problem_id,
                    row.solver,
                    row.status.as_deref().unwrap_or("-"),
                    row.score.map_or_else(|| "-".to_string(), |s| s.to_string())
                );
            }
            return Ok(());
        }
        Command::Hello => BackendClient::new(client, &config.backend_url).hello().await?,
        Command::UpdateScore => {
            BackendClient::new(client, &config.backend_url)
                .update_score()
                .await?
        }
    };

    let pretty = serde_json::to_string_pretty(&output).map_err(submit::SubmitError::Encode)?;
    println!("{}", pretty);
    Ok(())
}
