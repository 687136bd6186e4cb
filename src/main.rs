//! Opportunity board CLI
//!
//! Command-line surface over the listing stores: browse the bundled
//! internship postings or the remote-backed research projects, filtered
//! by search text and category the same way the site sections filter
//! their cards.

use clap::{Parser, Subcommand};
use opportunity_board::{
    filter, seed, HttpSource, Internship, Listing, ListingQuery, ListingStore, RemoteStore,
    ResearchProject, Result, Settings,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "opportunity-board", version, about = "Browse incubation center opportunity listings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse internship opportunities
    Internships {
        /// Search by role or company
        #[arg(short, long, default_value = "")]
        search: String,

        /// Internship type: "All", "Full-time" or "Part-time"
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Emit the filtered records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse research project opportunities
    Projects {
        /// Search by project title or professor
        #[arg(short, long, default_value = "")]
        search: String,

        /// Professor department, or "All"
        #[arg(short, long, default_value = "All")]
        department: String,

        /// Projects endpoint URL (overrides configuration)
        #[arg(long)]
        url: Option<String>,

        /// Emit the filtered records as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Internships {
            search,
            category,
            json,
        } => {
            let store = ListingStore::from_records(seed::internships());
            let query = ListingQuery::new(search, &category);
            let visible = filter(store.all(), &query);

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print_internships(&visible);
            }
        }
        Command::Projects {
            search,
            department,
            url,
            json,
        } => {
            let url = match url {
                Some(url) => url,
                None => Settings::new()?.projects_url,
            };
            let store = RemoteStore::new(HttpSource::<ResearchProject>::new(url));

            if let Some(message) = store.error().await {
                eprintln!("{}", message);
                std::process::exit(1);
            }

            let query = ListingQuery::new(search, &department);
            let visible = filter(store.all().await, &query);

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print_projects(&visible);
            }
        }
    }

    Ok(())
}

fn print_internships(visible: &[&Internship]) {
    if visible.is_empty() {
        println!("No internships match the current filters.");
        return;
    }

    for internship in visible {
        println!("{} — {}", internship.role, internship.company);
        println!("  Location: {}", internship.location);
        println!("  Stipend:  {}", internship.stipend);
        println!("  Type:     {}", internship.kind);
        if !internship.requirements.is_empty() {
            println!("  Requirements:");
            for requirement in &internship.requirements {
                println!("    - {}", requirement);
            }
        }
        println!("  Posted {}", internship.posted);
        println!();
    }
}

fn print_projects(visible: &[&ResearchProject]) {
    if visible.is_empty() {
        println!("No research projects match the current filters.");
        return;
    }

    for project in visible {
        println!("{}", project.title());
        println!("  {} ({})", project.professor_name, project.professor_department);
        println!("  {}", project.description);
        println!("  Area:      {}", project.area);
        println!("  Duration:  {}", project.duration);
        println!("  Positions: {}", project.positions);
        if !project.requirements.is_empty() {
            println!("  Requirements:");
            for requirement in &project.requirements {
                println!("    - {}", requirement);
            }
        }
        println!();
    }
}
