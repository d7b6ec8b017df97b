use pc_compat::adapters::outbound::console::{render, StderrStatusReporter};
use pc_compat::adapters::outbound::filesystem::{ConversationFileLog, FileWriter, StdoutPresenter};
use pc_compat::adapters::outbound::network::{
    CachingCatalogSource, GitHubMetadataClient, HttpCatalogSource, OllamaAdviceClient,
    StaticCatalogSource,
};
use pc_compat::application::use_cases::CompatibilityEngine;
use pc_compat::cli::{Args, CheckCommand, Command, GithubCommand};
use pc_compat::compatibility::domain::BuildRequest;
use pc_compat::config::{self, Overrides, Settings};
use pc_compat::ports::inbound::CompatibilityPort;
use pc_compat::ports::outbound::{
    AdviceClient, CatalogSource, ConversationLog, OutputPresenter, RepoMetadataClient,
    StatusReporter,
};
use pc_compat::shared::error::ExitCode;
use pc_compat::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(
        config_file,
        &Overrides {
            endpoint: args.endpoint.as_deref(),
            offline: args.offline,
        },
    );

    let presenter: Box<dyn OutputPresenter> = match &args.output {
        Some(path) => Box::new(FileWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };
    let reporter = StderrStatusReporter::new();

    match &args.command {
        Command::List => {
            let engine = build_engine(&settings)?;
            reporter.start_wait("Loading component catalog...");
            let fetch = engine.components().await;
            reporter.finish_wait();

            presenter.present(&render::catalog_table(&fetch))?;
            Ok(ExitCode::Success)
        }

        Command::Check(check) => {
            let engine = build_engine(&settings)?;
            reporter.start_wait("Checking compatibility...");
            let result = match check {
                CheckCommand::CpuMb {
                    cpu_id,
                    motherboard_id,
                } => engine.check_cpu_motherboard(cpu_id, motherboard_id).await,
                CheckCommand::RamMb {
                    ram_id,
                    motherboard_id,
                } => engine.check_ram_motherboard(ram_id, motherboard_id).await,
                CheckCommand::Build {
                    cpu,
                    motherboard,
                    ram,
                    gpu,
                } => {
                    let build = BuildRequest {
                        cpu_id: cpu.clone(),
                        motherboard_id: motherboard.clone(),
                        ram_id: ram.clone(),
                        gpu_id: gpu.clone(),
                    };
                    engine.check_full_build(&build).await
                }
            };
            reporter.finish_wait();

            presenter.present(&render::verdict(&result))?;
            Ok(ExitCode::from_verdict(result.is_compatible))
        }

        Command::Advice { question } => {
            let question = question.join(" ");
            let client = OllamaAdviceClient::new(&settings.ollama_endpoint, &settings.ollama_model)?;

            reporter.start_wait("Asking the local model...");
            let answer = client.advise(&question).await;
            reporter.finish_wait();
            let answer = answer?;

            let log = ConversationFileLog::new(settings.advice_log.clone());
            if let Err(e) = log.record(&question, &answer) {
                reporter.report_error(&format!("⚠️  Warning: exchange not logged: {}", e));
            }

            presenter.present(&format!("{}\n", answer))?;
            Ok(ExitCode::Success)
        }

        Command::Github(lookup) => {
            let client = GitHubMetadataClient::new(&settings.github_endpoint)?;
            reporter.start_wait("Querying GitHub...");
            let rendered = match lookup {
                GithubCommand::User { login } => {
                    let user = client.user(login).await;
                    reporter.finish_wait();
                    match user? {
                        Some(user) => render::user_card(&user),
                        None => format!("User '{}' not found.\n", login),
                    }
                }
                GithubCommand::Repos { login } => {
                    let repos = client.user_repos(login).await;
                    reporter.finish_wait();
                    match repos? {
                        Some(repos) => render::repo_list(&repos),
                        None => format!("User '{}' not found.\n", login),
                    }
                }
                GithubCommand::Search { query, per_page } => {
                    let repos = client.search_repos(query, *per_page).await;
                    reporter.finish_wait();
                    render::repo_list(&repos?)
                }
            };

            presenter.present(&rendered)?;
            Ok(ExitCode::Success)
        }
    }
}

/// Builds the engine's catalog source: the built-in reference dataset in
/// offline mode, otherwise the HTTP client wrapped in the in-memory cache so
/// one invocation pays the fetch cost at most once.
fn build_engine(settings: &Settings) -> Result<CompatibilityEngine<Box<dyn CatalogSource>>> {
    let source: Box<dyn CatalogSource> = if settings.offline {
        Box::new(StaticCatalogSource::new())
    } else {
        let http = HttpCatalogSource::with_timeout(&settings.catalog_endpoint, settings.timeout)?;
        Box::new(CachingCatalogSource::new(
            http,
            settings.catalog_endpoint.clone(),
        ))
    };
    Ok(CompatibilityEngine::new(source))
}
