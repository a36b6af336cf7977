use crate::commands::{
    run_dedup_occupations, run_occupations, run_recommend, DedupArgs, OccupationArgs,
    RecommendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use module_buddy::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Module Buddy",
    about = "Recommend university modules ranked against student preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the catalog for a student profile stored as JSON
    Recommend(RecommendArgs),
    /// Remove duplicate rows (by URI) from a headerless occupations export
    DedupOccupations(DedupArgs),
    /// List occupations, or the modules that prepare for one
    Occupations(OccupationArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the directory holding the catalog exports
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::DedupOccupations(args) => run_dedup_occupations(args),
        Command::Occupations(args) => run_occupations(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["module-buddy"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn recommend_accepts_profile_and_limit() {
        let cli = Cli::try_parse_from([
            "module-buddy",
            "recommend",
            "--profile",
            "student.json",
            "--limit",
            "3",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.profile, PathBuf::from("student.json"));
                assert_eq!(args.limit, Some(3));
                assert!(args.catalog_dir.is_none());
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn occupations_takes_an_optional_occupation() {
        let cli = Cli::try_parse_from([
            "module-buddy",
            "occupations",
            "--occupation",
            "data scientist",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Occupations(args)) => {
                assert_eq!(args.occupation.as_deref(), Some("data scientist"));
            }
            other => panic!("expected occupations command, got {other:?}"),
        }

        let listing = Cli::try_parse_from(["module-buddy", "occupations"]).expect("parses");
        assert!(matches!(
            listing.command,
            Some(Command::Occupations(OccupationArgs { occupation: None, .. }))
        ));
    }

    #[test]
    fn dedup_requires_input_and_output() {
        assert!(Cli::try_parse_from(["module-buddy", "dedup-occupations", "--input", "a.csv"])
            .is_err());
    }
}
