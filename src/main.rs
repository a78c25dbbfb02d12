//! entiforge CLI entrypoint
//! Parses command-line arguments and dispatches to the generator.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use entiforge::application::{GenerateAppRequest, GenerateAppUseCase};
use entiforge::generation::{GenerationOrchestrator, ModelLoader, TemplateSource};
use entiforge::infrastructure::{
    EmbeddedTemplateRepository, FileModelLoader, FileSystemOutputService, FileSystemTemplateLoader,
};
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "entiforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate DTO classes and admin components from an entity model
    Generate {
        /// Path to the entity model (YAML or JSON)
        #[arg(long)]
        model: String,
        /// Output directory for generated code
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
        /// Custom template directory; missing templates fall back to the embedded set
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
    /// Validate a model and list the modules it would produce without writing them
    Check {
        /// Path to the entity model (YAML or JSON)
        #[arg(long)]
        model: String,
        /// Custom template directory; missing templates fall back to the embedded set
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Starting entiforge CLI");
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            model,
            output_dir,
            template_dir,
        } => generate(model, output_dir.clone(), template_dir, false).await?,
        Commands::Check {
            model,
            template_dir,
        } => generate(model, PathBuf::new(), template_dir, true).await?,
    }
    Ok(())
}

/// Template source for the run: a directory when given, else the embedded set
fn template_source(template_dir: &Option<PathBuf>) -> Arc<dyn TemplateSource> {
    match template_dir {
        Some(dir) => {
            info!(path = %dir.display(), "Using template directory");
            Arc::new(FileSystemTemplateLoader::new(dir.clone()))
        }
        None => Arc::new(EmbeddedTemplateRepository::new()),
    }
}

async fn generate(
    model_path: &str,
    output_dir: PathBuf,
    template_dir: &Option<PathBuf>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let model_loader: Arc<dyn ModelLoader> = Arc::new(FileModelLoader::new());
    let orchestrator = Arc::new(GenerationOrchestrator::new(template_source(template_dir)));
    let use_case = GenerateAppUseCase::new(
        model_loader,
        orchestrator,
        Arc::new(FileSystemOutputService::new()),
    );

    let response = use_case
        .execute(GenerateAppRequest {
            model_path: model_path.to_string(),
            output_dir,
            dry_run,
        })
        .await
        .with_context(|| format!("Failed to generate from model '{model_path}'"))?;

    if dry_run {
        println!(
            "Model '{}' is valid; {} module(s) would be generated:",
            response.project_name,
            response.module_paths.len()
        );
        for path in &response.module_paths {
            println!("  • {}", path);
        }
    } else {
        for path in &response.written {
            println!("  • {}", path.display());
        }
        println!(
            "\n✅ Generated {} module(s) for '{}' in {}",
            response.written.len(),
            response.project_name,
            response.output_path.display()
        );
    }

    Ok(())
}
