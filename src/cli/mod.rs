pub mod args;
pub mod output;

use std::path::PathBuf;

use chart_config::{Config, ConfigManager, LabelSettings};
use chart_core::{public_api, LabelPolicy};
use chart_domain::ChartVariant;
use tracing::info;

use crate::errors::AppError;
use crate::utils::persistence::{load_breakdown_from_file, load_projection_from_file};

use args::{Command, ConfigAction};
use output::OutputPreferences;

/// Overrides the configuration base directory.
pub const HOME_ENV: &str = "BUDGET_CHART_HOME";

/// Runs the CLI against the process arguments.
pub fn run_cli() -> Result<(), AppError> {
    run_with_args(std::env::args().skip(1))
}

/// Runs the CLI against explicit arguments (everything after the program name).
pub fn run_with_args<I>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = String>,
{
    let command = args::parse(args)?;
    if matches!(command, Command::Help) {
        println!("{}", args::USAGE);
        return Ok(());
    }
    if matches!(command, Command::Version) {
        println!("{}", version_line());
        return Ok(());
    }

    let manager = config_manager()?;
    let config = manager.load()?;
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled,
    });

    match command {
        Command::Donut {
            path,
            variant,
            width,
            json,
        } => run_donut(&config, path, variant, width, json),
        Command::Pie {
            path,
            variant,
            json,
        } => run_pie(path, variant, json),
        Command::Projection {
            path,
            start_year,
            json,
        } => run_projection(&config, path, start_year, json),
        Command::Config(action) => run_config(&manager, &config, action),
        Command::Version | Command::Help => Ok(()),
    }
}

fn run_donut(
    config: &Config,
    path: PathBuf,
    variant: ChartVariant,
    width: Option<f64>,
    json: bool,
) -> Result<(), AppError> {
    let breakdown = load_breakdown_from_file(&path)?;
    let policy = label_policy(&config.labels);
    let width = width.unwrap_or(config.default_surface_width);

    let chart = match variant {
        ChartVariant::Actual => public_api::api_user_chart(&breakdown, &policy, width)?,
        ChartVariant::Recommended => {
            public_api::api_recommended_chart(&breakdown, &policy, width)?
        }
    };
    info!(%variant, path = %path.display(), "donut chart built");

    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        output::section(&chart.title);
        print!("{}", output::render_donut_preview(&chart));
    }
    Ok(())
}

fn run_pie(path: PathBuf, variant: ChartVariant, json: bool) -> Result<(), AppError> {
    let breakdown = load_breakdown_from_file(&path)?;
    let chart = match variant {
        ChartVariant::Actual => public_api::api_user_pie(&breakdown)?,
        ChartVariant::Recommended => public_api::api_recommended_pie(&breakdown)?,
    };
    info!(%variant, path = %path.display(), "pie chart built");

    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        output::section(&chart.title);
        print!("{}", output::render_pie_preview(&chart));
    }
    Ok(())
}

fn run_projection(
    config: &Config,
    path: PathBuf,
    start_year: Option<i32>,
    json: bool,
) -> Result<(), AppError> {
    let projection = load_projection_from_file(&path)?;
    let start_year = start_year.unwrap_or_else(|| config.resolve_projection_start_year());
    let chart = public_api::api_projection_chart(&projection, start_year)?;
    info!(start_year, path = %path.display(), "projection chart built");

    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        output::section(&chart.title);
        print!("{}", output::render_projection_table(&chart));
    }
    Ok(())
}

fn run_config(
    manager: &ConfigManager,
    config: &Config,
    action: ConfigAction,
) -> Result<(), AppError> {
    match action {
        ConfigAction::Show => println!("{}", serde_json::to_string_pretty(config)?),
        ConfigAction::Path => println!("{}", manager.config_path().display()),
        ConfigAction::Reset => {
            manager.reset()?;
            output::success(format!(
                "Configuration reset: {}",
                manager.config_path().display()
            ));
        }
    }
    Ok(())
}

/// Maps persisted label settings onto the core visibility policy.
pub fn label_policy(settings: &LabelSettings) -> LabelPolicy {
    LabelPolicy::new(
        settings.outer_threshold,
        settings.inner_threshold,
        settings.responsive_breakpoint,
    )
}

fn config_manager() -> Result<ConfigManager, AppError> {
    let base = std::env::var_os(HOME_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(Config::resolve_default_base_dir);
    Ok(ConfigManager::with_base_dir(base)?)
}

fn version_line() -> String {
    format!(
        "budget_chart_cli {} ({} {} {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUDGET_CHART_BUILD_HASH"),
        env!("BUDGET_CHART_BUILD_PROFILE"),
        env!("BUDGET_CHART_BUILD_TARGET"),
        env!("BUDGET_CHART_BUILD_TIMESTAMP"),
    )
}
