use anyhow::Context;
use brickset::app::demo;
use brickset::utils::error::ErrorSeverity;
use brickset::utils::logger;
use brickset::utils::validation;
use brickset::{BricksetError, CliConfig, LegoSetRepository, LocalStorage, Query, Reporter};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定錯誤時還沒有 logger，直接寫到 stderr
    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(cli.verbose, settings.log_level.as_deref(), settings.json_logs);
    tracing::debug!("Resolved settings: {:?}", settings);

    let storage = LocalStorage::from_config(&settings);
    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), settings.format);

    let outcome = LegoSetRepository::from_config(&storage, &settings)
        .and_then(|repo| execute(&repo, &cli.query(), &mut reporter));

    match outcome {
        Ok(()) => {
            reporter
                .into_inner()
                .flush()
                .context("failed to flush stdout")?;
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Query failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

fn execute<W: Write>(
    repo: &LegoSetRepository,
    query: &Query,
    reporter: &mut Reporter<W>,
) -> Result<(), BricksetError> {
    tracing::debug!("Executing {:?}", query);

    match query {
        Query::CountTag { tag } => reporter.count("count_with_tag", repo.count_with_tag(tag)),
        Query::Packaging { packaging_type } => reporter.names(
            "names_with_packaging_type",
            repo.names_with_packaging_type(packaging_type),
        ),
        Query::Years { year1, year2 } => reporter.sets(
            "sets_between_years",
            repo.sets_between_years(*year1, *year2),
        ),
        Query::CountDimensions => {
            reporter.count("count_with_dimensions", repo.count_with_dimensions())
        }
        Query::MaxWeight { weight } => {
            validation::validate_finite("weight", *weight)?;
            reporter.names("names_with_max_weight", repo.names_with_max_weight(*weight))
        }
        Query::MostPieces => {
            reporter.name("name_with_most_pieces", repo.name_with_most_pieces()?)
        }
        Query::Themes => reporter.themes("count_by_theme", &repo.count_by_theme()),
        Query::TotalPieces => reporter.total("total_pieces", repo.total_pieces()),
        Query::Demo => demo::run_demo(repo, reporter),
    }
}
