//! thesis-attribution CLI
//!
//! Usage:
//!   thesis-attribution person "Jane Smith" --advisor "John Doe"   - Attribute one person
//!   thesis-attribution report [--output team-theses.txt]          - Report for the wiki team page

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thesis_attribution::{
    clients, fetch_team, render_report, render_thesis, Attribution, AttributionConfig, Person,
    Resolver, Roster, RosterParser,
};

#[derive(Parser)]
#[command(name = "thesis-attribution")]
#[command(about = "Attribute repository theses to team members supervised by known advisors")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to <config dir>/thesis-attribution/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the repository base URL
    #[arg(long, global = true)]
    repository: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Attribute one person's theses against advisors given by name
    Person {
        /// Display name, e.g. "Jane Smith"
        name: String,

        /// Advisor display names, probed in the given order
        #[arg(short, long = "advisor")]
        advisors: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Attribute everyone in the configured wiki sections and render a report
    Report {
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AttributionConfig::load_or_default(cli.config.as_deref())?;
    if let Some(base_url) = cli.repository {
        config.repository.base_url = base_url;
        config.validate()?;
    }

    let (repository, wiki) = clients(&config)?;
    let resolver = Resolver::with_fields(repository, config.fields.clone());

    match cli.command {
        Commands::Person {
            name,
            advisors,
            json,
        } => {
            let subject = Person::new(name);
            let roster = Roster::from_names(advisors);
            let attribution = resolver.resolve(&subject, &roster).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&attribution)?);
            } else {
                print_outcome(&subject, &attribution);
            }
        }
        Commands::Report { output } => {
            config.wiki.validate()?;
            let parser = RosterParser::new();
            let team = fetch_team(&wiki, &parser, &config.wiki).await?;
            let results = resolver.resolve_all(&team.subjects, &team.advisors).await?;
            let report = render_report(&results);

            match output {
                Some(path) => {
                    std::fs::write(&path, report)?;
                    tracing::info!("Wrote report to {:?}", path);
                }
                None => print!("{}", report),
            }
        }
    }

    Ok(())
}

fn print_outcome(subject: &Person, attribution: &Attribution) {
    match attribution {
        Attribution::NoThesis => println!("{}: no thesis found", subject.full_name),
        Attribution::ThesisWithoutKnownAdvisor { theses } => {
            println!(
                "{}: {} thesis(es), none supervised by a listed advisor",
                subject.full_name,
                theses.len()
            );
            for thesis in theses {
                println!("  {}", render_thesis(thesis));
            }
        }
        Attribution::Matched { advisor, documents } => {
            println!(
                "{}: supervised by {}",
                subject.full_name, advisor.full_name
            );
            for document in documents {
                println!("  {}", render_thesis(document));
            }
        }
    }
}
