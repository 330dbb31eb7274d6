mod cli;

use cli::{Args, Command};
use pc_builder::adapters::outbound::console::{BuildEventReporter, StderrProgressReporter};
use pc_builder::adapters::outbound::filesystem::FileSystemBuildStore;
use pc_builder::application::dto::{CompareRequest, OutputFormat};
use pc_builder::application::factories::{
    CatalogSourceFactory, FormatterFactory, PresenterFactory, PresenterType, SourceSettings,
};
use pc_builder::application::use_cases::{
    BrowseCatalogUseCase, CompareComponentsUseCase, ManageBuildUseCase,
};
use pc_builder::catalog::services::DEFAULT_PAGE_SIZE;
use pc_builder::config::{self, ConfigFile};
use pc_builder::shared::error::ExitCode;
use pc_builder::shared::Result;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG_DIR: &str = "catalog";
const DEFAULT_BUILD_FILE: &str = ".pc-build.json";

/// Effective settings after merging CLI options over the config file
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    source: SourceSettings,
    build_file: PathBuf,
    page_size: usize,
}

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };
    let settings = resolve_settings(&args, config);
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let reporter = Arc::new(StderrProgressReporter::new());
    let source = CatalogSourceFactory::create(&settings.source, Arc::clone(&reporter))?;
    let formatter = FormatterFactory::create(settings.format);
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));

    let mut exit_code = ExitCode::Success;
    let output = match &args.command {
        Command::List(list) => {
            let use_case = BrowseCatalogUseCase::new(source, Arc::clone(&reporter));
            let view = use_case.execute(list.to_request(settings.page_size)).await?;
            formatter.format_page(&view)?
        }
        Command::Facets { category } => {
            let use_case = BrowseCatalogUseCase::new(source, Arc::clone(&reporter));
            formatter.format_facets(&use_case.facets(*category).await?)?
        }
        Command::Compare { category, ids } => {
            let request = CompareRequest::new(*category, ids.clone())?;
            let view = CompareComponentsUseCase::new(source).execute(request).await?;
            formatter.format_comparison(&view)?
        }
        command => {
            let build_command = command
                .build_command()
                .ok_or_else(|| anyhow::anyhow!("'{:?}' does not work on the build", command))?;
            let store = FileSystemBuildStore::new(settings.build_file.clone());
            let use_case = ManageBuildUseCase::new(source, store, Arc::clone(&reporter))
                .with_observer(Rc::new(BuildEventReporter::new(Arc::clone(&reporter))));
            let response = use_case.execute(build_command).await?;

            if matches!(command, Command::Show { strict: true }) && response.summary.has_notes() {
                exit_code = ExitCode::CompatibilityWarnings;
            }
            formatter.format_build(&response.summary)?
        }
    };

    presenter.present(&output)?;
    Ok(exit_code)
}

fn resolve_settings(args: &Args, config: ConfigFile) -> Settings {
    Settings {
        format: args.format.or(config.format).unwrap_or_default(),
        source: SourceSettings {
            catalog_dir: args
                .catalog_dir
                .clone()
                .or(config.catalog_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_DIR)),
            catalog_url: args.catalog_url.clone().or(config.catalog_url),
        },
        build_file: args
            .build_file
            .clone()
            .or(config.build_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_FILE)),
        page_size: config.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pc-builder").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = resolve_settings(&args(&["show"]), ConfigFile::default());
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.source.catalog_dir, PathBuf::from("catalog"));
        assert_eq!(settings.source.catalog_url, None);
        assert_eq!(settings.build_file, PathBuf::from(".pc-build.json"));
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_config_fills_unset_options() {
        let config = ConfigFile {
            format: Some(OutputFormat::Json),
            catalog_dir: Some(PathBuf::from("parts")),
            catalog_url: Some("https://parts.example.com".to_string()),
            page_size: Some(5),
            ..ConfigFile::default()
        };
        let settings = resolve_settings(&args(&["show"]), config);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.source.catalog_dir, PathBuf::from("parts"));
        assert_eq!(
            settings.source.catalog_url.as_deref(),
            Some("https://parts.example.com")
        );
        assert_eq!(settings.page_size, 5);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = ConfigFile {
            format: Some(OutputFormat::Json),
            build_file: Some(PathBuf::from("from-config.json")),
            ..ConfigFile::default()
        };
        let settings = resolve_settings(
            &args(&["show", "-f", "markdown", "--build-file", "cli.json"]),
            config,
        );
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.build_file, PathBuf::from("cli.json"));
    }
}
