use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vigil::commands::{init, list, run};
use vigil::config::RunArgs;
use vigil::validation::clap_id_validator;

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Run the monitors declared by a project", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create vigil_project.yml and an example monitor definition
    Init {
        /// Directory to initialize
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Project name (defaults to the directory name)
        #[arg(long, value_parser = clap_id_validator)]
        name: Option<String>,
    },

    /// Run all monitors of a project
    Run {
        #[command(flatten)]
        args: RunArgs,

        /// Stop at the first monitor that errors
        #[arg(long)]
        fail_fast: bool,
    },

    /// List the monitors of a project
    List {
        #[command(flatten)]
        args: RunArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "vigil=debug" } else { "vigil=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { project_dir, name } => init::execute(project_dir, name),
        Commands::Run { args, fail_fast } => run::execute(args, fail_fast),
        Commands::List { args } => list::execute(args),
    }
}
