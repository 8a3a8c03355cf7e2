use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use matching::{recommendations_for, Metric, MetricReport};
use ratings::RatingDataset;
use std::path::PathBuf;

/// CineMatch - movie recommendations by taste matching
#[derive(Parser)]
#[command(name = "cine-match")]
#[command(about = "Recommend movies by matching a user's ratings against everyone else's", long_about = None)]
struct Cli {
    /// User to recommend movies for
    #[arg(long)]
    user: String,

    /// Path to the ratings JSON file
    #[arg(long, default_value = "ratings.json")]
    ratings: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let dataset = RatingDataset::load_from_file(&cli.ratings)
        .with_context(|| format!("Failed to load ratings from {}", cli.ratings.display()))?;

    // Fail early on an unknown user instead of midway through the first ranking
    dataset
        .ratings_for(&cli.user)
        .with_context(|| format!("User {:?} is not in the dataset", cli.user))?;

    for metric in [Metric::Euclidean, Metric::Pearson] {
        let report = recommendations_for(&dataset, &cli.user, metric)
            .with_context(|| format!("{metric} matching failed for user {:?}", cli.user))?;
        print_report(&report);
    }

    Ok(())
}

/// Print one metric's section: recommended, then not-recommended movies
fn print_report(report: &MetricReport) {
    println!("{}", format!("{} algorithm", report.metric).bold().blue());

    println!("{}", "Recommended movies:".green());
    for movie in &report.recommended {
        println!("{movie}");
    }

    println!();
    println!("{}", "Not recommended movies:".red());
    for movie in &report.not_recommended {
        println!("{movie}");
    }
    println!();
}
