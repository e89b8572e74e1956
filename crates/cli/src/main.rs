use anyhow::{Context, Result, anyhow, bail};
use catalog::{ANYTIME, BudgetCategory, Catalog, Destination, UserPreferences, Wishlist};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use recommender::{
    EngineConfig, RecommendationOrchestrator, RecommendationSource, ScoredDestination,
};
use scoring::FactorScore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, info};

/// Wayfinder - Travel Destination Recommendation Engine
#[derive(Parser)]
#[command(name = "wayfinder")]
#[command(about = "Travel destination recommendations with an AI-first, algorithmic-fallback engine", long_about = None)]
struct Cli {
    /// Path to the destination catalog (overrides CATALOG_PATH)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank destinations for a set of travel preferences
    Recommend {
        #[command(flatten)]
        preferences: PreferenceArgs,

        /// Number of recommendations to return
        #[arg(long, default_value = "6")]
        limit: usize,

        /// Show the per-factor score breakdown for each destination
        #[arg(long)]
        explain: bool,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a trip summary for one destination
    Summary {
        /// Destination id, e.g. "goa"
        #[arg(long)]
        destination: String,

        #[command(flatten)]
        preferences: PreferenceArgs,
    },

    /// List why one destination suits the traveler
    Reasons {
        /// Destination id, e.g. "goa"
        #[arg(long)]
        destination: String,

        #[command(flatten)]
        preferences: PreferenceArgs,
    },

    /// Show everything the catalog knows about a destination
    Show {
        #[arg(long)]
        id: String,
    },

    /// Search destinations by name, country or region
    Search {
        /// Case-insensitive substring to look for
        #[arg(long)]
        query: String,
    },

    /// Manage the saved wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a destination
    Add { id: String },
    /// Forget a destination
    Remove { id: String },
    /// Save if absent, forget otherwise
    Toggle { id: String },
    /// Print saved destinations
    List,
}

/// Traveler selections shared by the preference-driven commands
#[derive(Args, Clone)]
struct PreferenceArgs {
    /// Low, Medium or High
    #[arg(long)]
    budget: BudgetCategory,

    /// Trip length label, e.g. "Short (3-5 days)"
    #[arg(long)]
    duration: String,

    /// Travel season, or "Anytime"
    #[arg(long, default_value = ANYTIME)]
    season: String,

    /// Solo, Couple, Family or Friends
    #[arg(long)]
    travel_type: String,

    /// Preferred activity; repeat for several
    #[arg(long = "activity", required = true)]
    activities: Vec<String>,

    /// Preferred accommodation type; repeat for several
    #[arg(long = "accommodation")]
    accommodation: Vec<String>,

    /// Cultural interest; repeat for several
    #[arg(long = "cultural")]
    cultural: Vec<String>,
}

impl PreferenceArgs {
    fn into_preferences(self) -> Result<UserPreferences> {
        let preferences = UserPreferences {
            budget: self.budget,
            duration: self.duration,
            season: self.season,
            travel_type: self.travel_type,
            activities: self.activities,
            accommodation: self.accommodation,
            cultural: self.cultural,
        };
        preferences.validate().context("Incomplete travel preferences")?;
        Ok(preferences)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::from_env()?;

    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog_path.clone());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&catalog_path)
            .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?,
    );
    info!(
        "Loaded {} destinations from {} in {:?}",
        catalog.len(),
        catalog_path.display(),
        start.elapsed()
    );

    let orchestrator = RecommendationOrchestrator::new(
        catalog.clone(),
        config.orchestrator_config(),
        config.completion_service(),
    );
    if !orchestrator.config().ai_enabled {
        eprintln!(
            "{} GEMINI_API_KEY not set, using algorithmic recommendations",
            "!".yellow()
        );
    }

    match cli.command {
        Commands::Recommend {
            preferences,
            limit,
            explain,
            json,
        } => handle_recommend(&orchestrator, preferences.into_preferences()?, limit, explain, json).await?,
        Commands::Summary {
            destination,
            preferences,
        } => {
            let destination = find_destination(&catalog, &destination)?;
            let preferences = preferences.into_preferences()?;
            let summary = orchestrator.trip_summary(destination, &preferences).await;
            println!("{}", summary);
        }
        Commands::Reasons {
            destination,
            preferences,
        } => {
            let destination = find_destination(&catalog, &destination)?;
            let preferences = preferences.into_preferences()?;
            let reasons = orchestrator.match_reasons(destination, &preferences).await;
            println!("{}", format!("Why {} fits you:", destination.name).bold().blue());
            for reason in reasons {
                println!("{} {}", "•".green(), reason);
            }
        }
        Commands::Show { id } => print_destination(find_destination(&catalog, &id)?),
        Commands::Search { query } => handle_search(&catalog, &query),
        Commands::Wishlist { action } => handle_wishlist(&catalog, config.wishlist_path, action)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(orchestrator, requests, concurrent).await?,
    }

    Ok(())
}

fn find_destination<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Destination> {
    catalog
        .get(id)
        .ok_or_else(|| anyhow!("Destination '{}' not found", id))
}

/// Handle the 'recommend' command
async fn handle_recommend(
    orchestrator: &RecommendationOrchestrator,
    preferences: UserPreferences,
    limit: usize,
    explain: bool,
    json: bool,
) -> Result<()> {
    if limit == 0 {
        bail!("--limit must be at least 1");
    }

    let start = Instant::now();
    let recommendations = orchestrator.get_recommendations(&preferences, limit).await;
    debug!("Recommendation request took {:?}", start.elapsed());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&recommendations).context("Failed to encode results")?
        );
        return Ok(());
    }

    print_recommendations(&recommendations);

    if explain {
        println!("\n{}", "Score breakdown:".bold().blue());
        for rec in &recommendations {
            let factors = orchestrator.engine().breakdown(&rec.destination, &preferences);
            print_breakdown(&rec.destination.name, &factors);
        }
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, query: &str) {
    let matches = catalog.search(query);
    println!("{}", format!("Search results for '{}':", query).bold().blue());
    if matches.is_empty() {
        println!("  no destinations match");
        return;
    }
    for destination in matches.iter().take(20) {
        println!(
            "{}: {} ({}) [{}]",
            destination.id.green(),
            destination.display_name(),
            destination.region,
            destination.budget_category
        );
    }
}

/// Handle the 'wishlist' command
fn handle_wishlist(catalog: &Catalog, path: PathBuf, action: WishlistAction) -> Result<()> {
    let mut wishlist = Wishlist::load(path).context("Failed to load wishlist")?;

    let changed = match action {
        WishlistAction::Add { id } => {
            find_destination(catalog, &id)?;
            if wishlist.add(&id) {
                println!("{} Saved {}", "✓".green(), id);
            } else {
                println!("{} is already saved", id);
            }
            true
        }
        WishlistAction::Remove { id } => {
            if wishlist.remove(&id) {
                println!("{} Removed {}", "✓".green(), id);
            } else {
                println!("{} was not saved", id);
            }
            true
        }
        WishlistAction::Toggle { id } => {
            find_destination(catalog, &id)?;
            let saved = wishlist.toggle(&id);
            println!(
                "{} {} {}",
                "✓".green(),
                id,
                if saved { "saved" } else { "removed" }
            );
            true
        }
        WishlistAction::List => false,
    };

    if changed {
        wishlist.save().context("Failed to save wishlist")?;
    }

    println!("{}", "Wishlist:".bold().blue());
    for id in wishlist.ids() {
        match catalog.get(id) {
            Some(destination) => println!("  - {} ({})", destination.display_name(), id),
            None => println!("  - {} {}", id, "(no longer in catalog)".dimmed()),
        }
    }
    Ok(())
}

/// Random but valid preferences drawn from the catalog's own vocabulary
fn random_preferences(catalog: &Catalog) -> Option<UserPreferences> {
    fn pick<T: Clone>(items: &[T]) -> Option<T> {
        if items.is_empty() {
            None
        } else {
            Some(items[rand::random_range(0..items.len())].clone())
        }
    }

    let destination = pick(catalog.destinations())?;
    let mut seasons = destination.best_season.clone();
    seasons.push(ANYTIME.to_string());

    Some(UserPreferences {
        budget: pick(&BudgetCategory::ALL)?,
        duration: pick(&destination.ideal_duration)?,
        season: pick(&seasons)?,
        travel_type: pick(&destination.travel_types)?,
        activities: vec![pick(&destination.activities)?],
        accommodation: Vec::new(),
        cultural: Vec::new(),
    })
}

fn percentile(sorted: &[Duration], fraction: f64) -> Duration {
    let index = ((sorted.len() as f64 * fraction) as usize).min(sorted.len() - 1);
    sorted[index]
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    orchestrator: RecommendationOrchestrator,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 || concurrent == 0 {
        bail!("--requests and --concurrent must be at least 1");
    }

    let requests_prefs: Vec<UserPreferences> = (0..requests)
        .map(|_| random_preferences(orchestrator.catalog()))
        .collect::<Option<_>>()
        .ok_or_else(|| anyhow!("Catalog is empty, nothing to benchmark"))?;

    let permits = Arc::new(Semaphore::new(concurrent));
    let wall_clock = Instant::now();

    let mut handles = vec![];
    for preferences in requests_prefs {
        let orchestrator = orchestrator.clone();
        let permits = permits.clone();
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            let results = orchestrator.get_recommendations(&preferences, 6).await;
            Ok::<_, anyhow::Error>((start.elapsed(), results.first().map(|r| r.source)))
        });
        handles.push(handle);
    }

    let mut timings = vec![];
    let mut ai_answers = 0;
    for handle in handles {
        let (elapsed, source) = handle.await??;
        if source == Some(RecommendationSource::Ai) {
            ai_answers += 1;
        }
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    let summed: Duration = timings.iter().sum();
    let avg_latency = summed / (timings.len() as u32);
    timings.sort();
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent);
    println!("AI-sourced answers: {}", ai_answers);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[ScoredDestination]) {
    println!("{}", "Destination Recommendations:".bold().blue());
    if recommendations.is_empty() {
        println!("  no destinations available");
        return;
    }

    for (index, rec) in recommendations.iter().enumerate() {
        let source = match rec.source {
            RecommendationSource::Ai => "AI".magenta(),
            RecommendationSource::Algorithmic => "algorithmic".cyan(),
        };
        println!(
            "{}. {} [{}] - Match: {}% ({})",
            (index + 1).to_string().green(),
            rec.destination.display_name().bold(),
            rec.destination.budget_category,
            rec.match_score,
            source
        );
        for reason in &rec.match_reasons {
            println!("   {} {}", "•".green(), reason);
        }
        if let Some(insight) = &rec.ai_insight {
            println!("   {} {}", "💡".yellow(), insight);
        }
    }
}

fn print_breakdown(name: &str, factors: &[FactorScore]) {
    println!("{}", name.bold());
    for factor in factors {
        println!(
            "   {:<14} {:.2} x {:.2} = {:.3}",
            factor.name, factor.score, factor.weight, factor.contribution
        );
    }
    let total: f64 = factors.iter().map(|f| f.contribution).sum();
    println!("   {:<14} {:.3}", "total", total);
}

fn print_destination(destination: &Destination) {
    println!("{}", destination.display_name().bold().blue());
    println!("{}", destination.description);
    println!("{}Region: {}", "• ".green(), destination.region);
    println!(
        "{}Budget: {} ({} per person)",
        "• ".green(),
        destination.budget_category,
        destination.budget_category.estimated_range()
    );
    println!("{}Best season: {}", "• ".green(), destination.best_season.join(", "));
    println!("{}Ideal duration: {}", "• ".green(), destination.ideal_duration.join(", "));
    println!("{}Activities: {}", "• ".cyan(), destination.activities.join(", "));
    println!("{}Stay options: {}", "• ".cyan(), destination.accommodation_types.join(", "));
    println!("{}Culture: {}", "• ".cyan(), destination.cultural_tags.join(", "));
    println!("{}Good for: {}", "• ".cyan(), destination.travel_types.join(", "));
    println!("Highlights:");
    for highlight in &destination.highlights {
        println!("  - {}", highlight);
    }
}
