//! Bulk-create Salesforce custom fields from a CSV definition file.
//!
//! ```sh
//! export SF_INSTANCE_URL='https://myorg.my.salesforce.com'
//! export SF_ACCESS_TOKEN='00D...'
//! fieldsmith --object Account --csv fields.csv --skip-existing
//! ```

use clap::Parser;

use fieldsmith::metadata::DeploymentOutcome;
use fieldsmith::{create_fields, CreateFieldsParams, ErrorKind};

#[derive(Debug, Parser)]
#[command(
    name = "fieldsmith",
    version,
    about = "Bulk-create Salesforce custom fields from CSV definitions"
)]
struct Cli {
    /// Target object the fields belong to (e.g. Account).
    #[arg(short, long)]
    object: String,

    /// CSV file with one field definition per row.
    #[arg(short, long)]
    csv: std::path::PathBuf,

    /// Org instance URL.
    #[arg(long, env = "SF_INSTANCE_URL")]
    instance_url: String,

    /// Org access token.
    #[arg(long, env = "SF_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Metadata API version.
    #[arg(long)]
    api_version: Option<String>,

    /// Treat "already exists" failures as successes.
    #[arg(long)]
    skip_existing: bool,

    /// Print the deployment report as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let params = CreateFieldsParams {
        object: cli.object,
        csv_path: cli.csv,
        instance_url: cli.instance_url,
        access_token: cli.access_token,
        api_version: cli.api_version,
        skip_existing: cli.skip_existing,
    };

    match create_fields(&params).await {
        Ok(report) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("report serializes")
                );
            } else {
                for outcome in report.reconciliation.outcomes() {
                    match outcome {
                        DeploymentOutcome::Created { full_name } => {
                            println!("  created  {full_name}");
                        }
                        DeploymentOutcome::SkippedExisting { full_name, .. } => {
                            println!("  skipped  {full_name} (already exists)");
                        }
                        DeploymentOutcome::Failed { full_name, message } => {
                            println!("  failed   {full_name}: {message}");
                        }
                    }
                }
                println!(
                    "\n{} field(s) deployed on {}",
                    report.deployed_fields().len(),
                    report.object
                );
                println!("Staged metadata: {}", report.staging_dir.display());
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            if let ErrorKind::DeploymentFailed { failures, .. } = &err.kind {
                for failure in failures {
                    eprintln!("  {}: {}", failure.full_name, failure.message);
                }
            }
            std::process::exit(1);
        }
    }
}
