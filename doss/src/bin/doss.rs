//! doss - container volume helper.

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgGroup, CommandFactory, Parser, Subcommand, error::ErrorKind};
use console::style;

use doss::attach::{DockerCliAttacher, attach_container};
use doss::select::PromptSelector;
use doss::{
    DockerDirectory, DossOptions, FilePattern, OutputSink, RemovalCoordinator, RemovalOutcome,
};

#[derive(Parser)]
#[command(name = "doss")]
#[command(version, about = "Docker volume and container helper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Docker endpoint (unix:///var/run/docker.sock, tcp://host:2375)
    #[arg(long, env = "DOCKER_HOST", global = true)]
    host: Option<String>,

    /// Rows shown at once in selection prompts
    #[arg(long, value_name = "ROWS", default_value_t = doss::config::DEFAULT_PAGE_SIZE, global = true)]
    page_size: usize,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Docker volume helper
    #[command(group(ArgGroup::new("mode").required(true).args(["list", "find", "remove"])))]
    Volume {
        /// Show Docker volume list
        #[arg(short, long)]
        list: bool,

        /// Find files by a specified pattern
        #[arg(short, long, value_name = "PATTERN")]
        find: Option<String>,

        /// Remove a Docker volume
        #[arg(short, long)]
        remove: bool,
    },
    /// Attach a container
    Attach,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    doss::init_logging(cli.verbose);

    let result = build_runtime()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(run(cli)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Multi-threaded runtime whose blocking pool fits one walk per volume.
fn build_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .max_blocking_threads(doss::config::MAX_BLOCKING_THREADS)
        .build()
}

async fn run(cli: Cli) -> Result<()> {
    let options = DossOptions {
        page_size: cli.page_size,
        ..Default::default()
    }
    .with_host(cli.host);
    let sink = OutputSink::stdout();

    match cli.command {
        Commands::Volume { list: true, .. } => {
            let directory = DockerDirectory::connect(&options)?;
            doss::list::list_volumes(&directory, &sink).await?;
        }
        Commands::Volume {
            find: Some(pattern),
            ..
        } => {
            if pattern.is_empty() {
                usage_error("the pattern given to --find must not be empty");
            }
            let pattern = FilePattern::new(&pattern)?;
            let directory = DockerDirectory::connect(&options)?;
            let report = doss::search::search(&directory, &pattern, &sink).await?;
            for scan in report.failures() {
                if let Some(error) = &scan.error {
                    eprintln!("{}", error);
                }
            }
        }
        Commands::Volume { .. } => {
            let directory = DockerDirectory::connect(&options)?;
            let selector = PromptSelector::new(options.page_size);
            let outcome = RemovalCoordinator::new(&directory, &selector)
                .run(&sink)
                .await?;
            if outcome == RemovalOutcome::NothingToDo {
                sink.write_line("No volumes")?;
            }
        }
        Commands::Attach => {
            let directory = DockerDirectory::connect(&options)?;
            let selector = PromptSelector::new(options.page_size);
            attach_container(&directory, &selector, &DockerCliAttacher::default(), &sink).await?;
        }
    }
    Ok(())
}

/// Print usage for `doss volume` and exit with clap's usage status.
fn usage_error(message: &str) -> ! {
    let mut command = Cli::command()
        .find_subcommand("volume")
        .cloned()
        .map(|volume| volume.bin_name("doss volume"))
        .unwrap_or_else(Cli::command);
    command.error(ErrorKind::InvalidValue, message).exit()
}
