mod console;

use anyhow::{Context, Result};
use catalog::MediaRecord;
use clap::Parser;
use colored::Colorize;
use console::{Console, NumberInput, parse_number_input};
use pipeline::RecommendationFilters;
use session::{Session, Settings, StartOutcome};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// ReelShelf - media catalog and watch-history tracker
#[derive(Parser)]
#[command(name = "reelshelf")]
#[command(about = "Browse a media catalog, track what you watch and get recommendations", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./reelshelf.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog file loaded by "Load media" when no filename is entered
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory holding userdata_<username>.txt files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Username to sign in as (prompted for when absent)
    #[arg(short, long)]
    user: Option<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(catalog) = cli.catalog {
        settings.catalog_path = catalog;
    }
    if let Some(data_dir) = cli.data_dir {
        settings.data_dir = data_dir;
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    println!("{}", "Welcome to ReelShelf!".bold().blue());
    let Some(mut session) = sign_in(&mut console, settings, cli.user)? else {
        return Ok(());
    };

    run_menu(&mut console, &mut session)?;
    Ok(())
}

/// `RUST_LOG` wins unless -v or -q was given.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = if quiet || verbose > 0 {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn separator() -> String {
    "=".repeat(31)
}

fn print_header(title: &str) {
    println!("\n{}", separator());
    println!("{}", title.bold().blue());
    println!("{}", separator());
}

fn sign_in<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: Settings,
    username: Option<String>,
) -> Result<Option<Session>> {
    print_header("User Setup");

    let username = match username {
        Some(name) => name,
        None => loop {
            match console.ask("Enter your username: ")? {
                None => return Ok(None),
                Some(name) if name.trim().is_empty() => {
                    println!("{}", "Username cannot be empty.".yellow());
                }
                Some(name) => break name.trim().to_string(),
            }
        },
    };

    let (session, outcome) = Session::start(settings, &username);
    let user = session.user();
    match outcome {
        StartOutcome::Restored => {
            println!(
                "{} Welcome back, {}! Your watch history has been restored.",
                "✓".green(),
                username
            );
            println!("User ID: {}", user.user_id());
            println!("Previously watched items: {}", user.watch_history().len());
        }
        StartOutcome::Created => {
            println!("Welcome, {}! This appears to be your first time.", username);
            println!("Your user ID is: {}", user.user_id());
        }
    }
    Ok(Some(session))
}

fn print_menu(session: &Session) {
    print_header(&format!("ReelShelf Main Menu - User: {}", session.user().username()));
    println!("1. Load media from file");
    println!("2. Display all media");
    println!("3. Search by title");
    println!("4. Watch a media item");
    println!("5. View watch history");
    println!("6. Get personalized recommendations");
    println!("7. Export watch history to file");
    println!("8. Export recommendations to file");
    println!("9. View statistics");
    println!("10. Exit");
}

fn run_menu<R: BufRead, W: Write>(console: &mut Console<R, W>, session: &mut Session) -> Result<()> {
    loop {
        print_menu(session);
        let Some(choice) = console.ask("Choose an option: ")? else {
            // Input closed: save and leave as if Exit was chosen
            exit(session);
            return Ok(());
        };

        let outcome = match choice.trim() {
            "1" => load_media(console, session),
            "2" => {
                display_all(session);
                Ok(())
            }
            "3" => search(console, session),
            "4" => watch(console, session),
            "5" => {
                println!("{}", profile::format_watch_history(session.user()));
                Ok(())
            }
            "6" => recommend(console, session),
            "7" => export_history(console, session),
            "8" => export_recommendations(console, session),
            "9" => {
                print_header("ReelShelf Statistics");
                println!("{}", session.statistics());
                Ok(())
            }
            "10" => {
                exit(session);
                return Ok(());
            }
            _ => {
                println!("{}", "Invalid option. Please try again.".yellow());
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("{} {:#}", "Error:".red().bold(), e);
        }
    }
}

fn exit(session: &Session) {
    if session.logout() {
        println!("Your watch history has been saved.");
    } else {
        println!("{}", "Your watch history could not be saved.".red());
    }
    println!("Thank you for using ReelShelf! Goodbye!");
}

fn load_media<R: BufRead, W: Write>(console: &mut Console<R, W>, session: &mut Session) -> Result<()> {
    let default = session.settings().catalog_path.display().to_string();
    let filename = console.ask_optional(&format!(
        "Enter filename (or press Enter for '{default}'): "
    ))?;

    match session.load_catalog(filename.as_deref().map(Path::new)) {
        Ok((path, added)) => {
            println!(
                "{} Loaded {} media items from {}",
                "✓".green(),
                added,
                path.display()
            );
            println!("Total media items in library: {}", session.catalog().len());
        }
        Err(e) => {
            println!("{} {}", "Error loading media data:".red(), e);
            println!("Please check your file format and try again.");
        }
    }
    Ok(())
}

fn display_all(session: &Session) {
    let catalog = session.catalog();
    if catalog.is_empty() {
        println!("The library is empty. Load media from a file first.");
        return;
    }
    for line in catalog.display_all() {
        println!("{line}");
    }
}

fn search<R: BufRead, W: Write>(console: &mut Console<R, W>, session: &Session) -> Result<()> {
    let Some(query) = console.ask("Enter title to search: ")? else {
        return Ok(());
    };
    let results = session.search(&query);

    if results.is_empty() {
        println!("No media found matching '{query}'");
    } else {
        println!("\nSearch Results ({} found):", results.len());
        for media in results {
            println!("- {}", media.display_details());
        }
    }
    Ok(())
}

fn watch<R: BufRead, W: Write>(console: &mut Console<R, W>, session: &mut Session) -> Result<()> {
    let Some(query) = console.ask("Enter title to watch: ")? else {
        return Ok(());
    };

    let played = session.watch(&query);
    if played.is_empty() {
        println!("No media found matching '{query}'");
    }
    for message in played {
        println!("{} {}", "▶".green(), message);
        println!("Added to your watch history!");
    }
    Ok(())
}

/// Ask for a minimum rating and maximum duration, falling back to defaults.
fn ask_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    defaults: RecommendationFilters,
    rating_prompt: &str,
) -> Result<RecommendationFilters> {
    let answer = console.ask(&format!(
        "{rating_prompt} (0.0-10.0, default {}): ",
        defaults.min_rating
    ))?;
    let min_rating = number_or_note(answer.as_deref().unwrap_or(""), defaults.min_rating);

    let answer = console.ask(&format!(
        "Enter maximum duration in minutes (default {}): ",
        defaults.max_duration
    ))?;
    let max_duration = number_or_note(answer.as_deref().unwrap_or(""), defaults.max_duration);

    let filters = RecommendationFilters::from_input(min_rating, max_duration, defaults);
    if min_rating.is_some_and(|r| r != filters.min_rating) {
        println!(
            "Rating must be between 0.0 and 10.0. Using default: {}",
            defaults.min_rating
        );
    }
    if max_duration.is_some_and(|d| d != i64::from(filters.max_duration)) {
        println!(
            "Duration must be positive. Using default: {}",
            defaults.max_duration
        );
    }
    Ok(filters)
}

fn number_or_note<T, D>(input: &str, default: D) -> Option<T>
where
    T: std::str::FromStr,
    D: std::fmt::Display,
{
    match parse_number_input(input) {
        NumberInput::Empty => None,
        NumberInput::Value(value) => Some(value),
        NumberInput::Invalid => {
            println!("Invalid number format. Using default: {default}");
            None
        }
    }
}

fn print_recommendations(recommendations: &[MediaRecord]) {
    print_header("Personalized Recommendations");

    if recommendations.is_empty() {
        println!("No recommendations found matching your criteria.");
        println!("Try watching more content or adjusting your filters.");
        return;
    }

    println!("Based on your viewing history, we recommend:");
    for (rank, media) in recommendations.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), media.display_details());
    }
}

fn recommend<R: BufRead, W: Write>(console: &mut Console<R, W>, session: &mut Session) -> Result<()> {
    let filters = ask_filters(console, session.default_filters(), "Enter minimum rating")?;
    let recommendations = session.recommendations(filters);
    print_recommendations(&recommendations);
    Ok(())
}

fn export_history<R: BufRead, W: Write>(console: &mut Console<R, W>, session: &Session) -> Result<()> {
    let default = session.default_export_path("watchhistory");
    let filename = console.ask_optional(&format!(
        "Enter filename for watch history export (default: {}): ",
        default.display()
    ))?;

    let path = session
        .export_watch_history(filename.as_deref().map(Path::new))
        .context("Error exporting watch history")?;
    println!(
        "{} Watch history exported successfully to {}",
        "✓".green(),
        path.display()
    );
    Ok(())
}

fn export_recommendations<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> Result<()> {
    let filters = ask_filters(
        console,
        session.default_filters(),
        "Enter minimum rating for recommendations",
    )?;

    let default = session.default_export_path("recommendations");
    let filename = console.ask_optional(&format!(
        "Enter filename for recommendations export (default: {}): ",
        default.display()
    ))?;

    let (path, count) = session
        .export_recommendations(filters, filename.as_deref().map(Path::new))
        .context("Error exporting recommendations")?;
    println!(
        "{} {} recommendations exported successfully to {}",
        "✓".green(),
        count,
        path.display()
    );
    Ok(())
}
