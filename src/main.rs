use anyhow::Context;
use clap::Parser;
use tabular_etl::config::cli::{CliArgs, Job};
use tabular_etl::utils::error::ErrorSeverity;
use tabular_etl::utils::{logger, validation::Validate};
use tabular_etl::{
    CarEtlConfig, CarPipeline, EtlConfig, EtlEngine, EtlError, GdpEtlConfig, GdpPipeline,
    LocalStorage,
};

async fn run_cars(config: CarEtlConfig) -> tabular_etl::Result<()> {
    config.validate()?;

    let storage = LocalStorage::new(config.work_dir.clone());
    let engine = EtlEngine::new(CarPipeline::new(storage, config));

    let output_path = engine.run().await?;
    tracing::info!("Output saved to: {}", output_path);
    Ok(())
}

async fn run_gdp(config: GdpEtlConfig) -> tabular_etl::Result<()> {
    config.validate()?;

    let storage = LocalStorage::new(config.work_dir.clone());
    let engine = EtlEngine::new(GdpPipeline::new(storage, config));

    let report = engine.run().await?;
    tracing::info!(
        "Saved {} and loaded {} rows into {} ({} rows matched the query)",
        report.csv_path,
        report.rows_loaded,
        report.db_path,
        report.query_rows.len()
    );
    Ok(())
}

fn exit_on_error(e: &EtlError) -> ! {
    tracing::error!(
        "ETL process failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            EtlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path.display()))?
        }
        None => EtlConfig::default(),
    };
    tracing::debug!("Effective config: {:?}", config);

    let outcome = match args.job {
        Job::Cars => run_cars(config.cars).await,
        Job::Gdp => run_gdp(config.gdp).await,
    };

    if let Err(e) = outcome {
        exit_on_error(&e);
    }
    Ok(())
}
