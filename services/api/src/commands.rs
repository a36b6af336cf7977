use crate::infra::catalog_service;
use clap::Args;
use module_buddy::catalog::dedup_occupations;
use module_buddy::config::AppConfig;
use module_buddy::error::AppError;
use module_buddy::recommendations::{RecommendationsResponse, StudentRecord};
use module_buddy::telemetry;
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Student record JSON (taken_courses, available_days, desired_lecturers, ...)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Override the directory holding the catalog exports
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
    /// Only print the top N recommendations
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct OccupationArgs {
    /// Show the modules preparing for this occupation instead of listing occupations
    #[arg(long)]
    pub(crate) occupation: Option<String>,
    /// Override the directory holding the catalog exports
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DedupArgs {
    /// Headerless occupations CSV export
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Destination for the cleaned CSV (written with a header row)
    #[arg(long)]
    pub(crate) output: PathBuf,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        catalog_dir,
        limit,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    // Profile errors surface before the catalog is loaded.
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(File::open(profile)?))?;
    let student = StudentRecord::from_json(&raw)?;

    let service = catalog_service(&config.catalog, catalog_dir)?;
    let mut ranked = service.recommend(&student.preference_profile())?;
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    let response = RecommendationsResponse::from_ranked(&ranked);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) fn run_occupations(args: OccupationArgs) -> Result<(), AppError> {
    let OccupationArgs {
        occupation,
        catalog_dir,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let service = catalog_service(&config.catalog, catalog_dir)?;

    let output = match occupation {
        Some(occupation) => {
            let modules = service.modules_for_occupation(&occupation)?;
            json!({ "occupation": occupation, "modules": modules })
        }
        None => json!({ "occupations": service.occupations()? }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub(crate) fn run_dedup_occupations(args: DedupArgs) -> Result<(), AppError> {
    let DedupArgs { input, output } = args;

    let reader = BufReader::new(File::open(&input)?);
    let writer = File::create(&output)?;
    let summary = dedup_occupations(reader, writer)?;

    println!("Total rows read: {}", summary.rows_read);
    println!("Duplicates removed: {}", summary.duplicates_removed);
    println!("Unique rows remaining: {}", summary.unique_rows());
    println!("Saved cleaned file to {}", output.display());
    Ok(())
}
