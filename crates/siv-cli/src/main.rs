use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use siv_charts::GiniWindow;
use siv_core::Breakdown;
use siv_data::{CountryCodes, DatasetRegistry, Indicator};
use siv_ui_common::{
    resolve, ChartId, DashboardState, EducationButton, InputEvent, SivConfig,
};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;

use cli::{Cli, Commands, DatasetCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SivConfig::load().context("loading configuration")?;

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.data.data_dir.clone())
        .context("no dataset directory configured; pass --data-dir or set data.data_dir")?;

    let dataset_names: Vec<String> = if cli.datasets.is_empty() {
        config.data.datasets.clone()
    } else {
        cli.datasets.clone()
    };
    let name_refs: Vec<&str> = dataset_names.iter().map(String::as_str).collect();

    let registry = DatasetRegistry::load_dir(&data_dir, &name_refs)
        .context("loading datasets; a missing table aborts startup")?;
    let codes = load_country_codes(&data_dir, &config);

    match cli.command {
        Commands::Datasets { command } => match command {
            DatasetCommands::List => list_datasets(&registry),
            DatasetCommands::Validate => validate_datasets(&registry)?,
        },
        Commands::Countries { name } => countries(codes.as_ref(), name.as_deref())?,
        Commands::Chart {
            key,
            country,
            year,
            area,
            breakdown,
            held,
            window,
            urban,
            rural,
        } => {
            let chart = ChartId::from_key(&key)
                .with_context(|| format!("unknown chart key '{key}'"))?;

            let mut state = DashboardState::new();
            if let Some(country) = country {
                state.apply(&InputEvent::CountrySelected {
                    chart,
                    country: Some(country),
                });
            }
            if let Some(year) = year {
                state.apply(&InputEvent::YearSelected {
                    chart,
                    year: Some(year),
                });
            }
            if let Some(area) = area {
                state.apply(&InputEvent::AreaSelected {
                    chart,
                    area: Some(area),
                });
            }
            if let Some(breakdown) = breakdown {
                let breakdown: Breakdown = breakdown.parse()?;
                state.apply(&InputEvent::BreakdownSelected {
                    chart,
                    breakdown: Some(breakdown),
                });
            }
            if let Some(held) = held {
                let held: Breakdown = held.parse()?;
                state.apply(&InputEvent::HeldBreakdownSelected {
                    chart,
                    breakdown: Some(held),
                });
            }
            if let Some(window) = window {
                let window: GiniWindow = window.parse()?;
                state.apply(&InputEvent::WindowSelected {
                    window: Some(window),
                });
            }
            for (name, urban_area) in [(urban, true), (rural, false)] {
                if let Some(button) = name
                    .as_deref()
                    .map(|n| education_button(n, urban_area))
                    .transpose()?
                {
                    state.apply(&InputEvent::ToggleClicked { button, clicks: 1 });
                }
            }

            let request = state.request(chart);
            let spec = resolve(&registry, codes.as_ref(), &request);
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
    }

    Ok(())
}

fn education_button(name: &str, urban: bool) -> Result<EducationButton> {
    match (name.to_lowercase().as_str(), urban) {
        ("hombres", true) => Ok(EducationButton::UrbanMen),
        ("mujeres", true) => Ok(EducationButton::UrbanWomen),
        ("hombres", false) => Ok(EducationButton::RuralMen),
        ("mujeres", false) => Ok(EducationButton::RuralWomen),
        (other, _) => bail!("unknown education button '{other}'; use hombres or mujeres"),
    }
}

fn countries(codes: Option<&CountryCodes>, name: Option<&str>) -> Result<()> {
    let codes = codes.context("reference dataset not loaded; country codes unavailable")?;
    match name {
        Some(name) => {
            let code = codes
                .code_for(name)
                .with_context(|| format!("'{name}' is not in the reference mapping"))?;
            println!("{name}\t{code}");
        }
        None => {
            for (name, code) in codes.iter() {
                println!("{name}\t{code}");
            }
        }
    }
    Ok(())
}

fn load_country_codes(data_dir: &Path, config: &SivConfig) -> Option<CountryCodes> {
    let reference = DatasetRegistry::load_dir(data_dir, &[config.data.reference_dataset.as_str()])
        .ok()
        .and_then(|registry| {
            let frame = registry.get(&config.data.reference_dataset).ok()?;
            CountryCodes::from_reference(
                frame,
                &config.data.reference_name_column,
                &config.data.reference_code_column,
            )
            .ok()
        });
    if reference.is_none() {
        debug!(
            dataset = config.data.reference_dataset.as_str(),
            "reference dataset unavailable; country codes disabled"
        );
    }
    reference
}

fn list_datasets(registry: &DatasetRegistry) {
    for name in registry.names() {
        let rows = registry.get(name).map(|df| df.height()).unwrap_or(0);
        match Indicator::from_key(name) {
            Some(indicator) => println!("{name}\t{rows} rows\t{}", indicator.title()),
            None => println!("{name}\t{rows} rows"),
        }
    }
}

fn validate_datasets(registry: &DatasetRegistry) -> Result<()> {
    let mut failures = 0usize;
    for name in registry.names() {
        let Some(indicator) = Indicator::from_key(name) else {
            println!("{name}: no schema in the catalog, skipped");
            continue;
        };
        let frame = registry.get(name)?;
        let present = frame.get_column_names();
        let missing: Vec<&str> = indicator
            .required_columns()
            .iter()
            .copied()
            .filter(|required| !present.contains(required))
            .collect();
        if missing.is_empty() {
            println!("{name}: ok");
        } else {
            failures += 1;
            println!("{name}: missing columns {missing:?}");
        }
    }
    if failures > 0 {
        bail!("{failures} dataset(s) failed validation");
    }
    Ok(())
}
