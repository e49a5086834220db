//! CLI entry point for the placement matcher.
//!
//! Every subcommand writes a JSON result to stdout; logs go to stderr.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use placement_core::{NewAlumnus, Settings, StoreBackend};
use placement_graph::{GraphClient, GraphConfig, MemoryStore, RecordStore};
use placement_match::PlacementEngine;

#[derive(Parser)]
#[command(name = "placement-match")]
#[command(about = "Match students to companies through alumni connections")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the destination company.
    #[arg(long, global = true)]
    target: Option<String>,

    /// Config file prefix (default: placement).
    #[arg(short, long, default_value = "placement", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// List companies that have alumni.
    Companies,
    /// Check whether a company connects to the destination company.
    Reach {
        #[arg(long)]
        company: String,
    },
    /// Rank alumni at a company by their company's connection count.
    Influencers {
        #[arg(long)]
        company: String,
    },
    /// Alumni, reachability and influencers for a company.
    Report {
        #[arg(long)]
        company: String,
    },
    /// Register an alumnus.
    AddAlumnus {
        #[arg(long)]
        name: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        role: String,
        #[arg(long, default_value = "")]
        info: String,
        #[arg(long)]
        linkedin: Option<String>,
    },
    /// Record a connection between two companies.
    AddConnection {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Look up an alumnus's profile link by name.
    Profile {
        #[arg(long)]
        name: String,
    },
    /// Summarise the whole connection graph.
    Graph,
}

impl Command {
    fn writes(&self) -> bool {
        matches!(self, Self::AddAlumnus { .. } | Self::AddConnection { .. })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    if cli.command.writes()
        && settings.placement.store == StoreBackend::Memory
        && settings.placement.seed_file.is_none()
    {
        anyhow::bail!(
            "the memory store has no seed_file, so this record would be lost on exit; \
             set [placement] seed_file or use store = \"neo4j\""
        );
    }

    let store = open_store(&settings).await?;
    let mut engine = PlacementEngine::new(store).with_config(&settings.placement);
    if let Some(target) = cli.target {
        engine = engine.with_target_company(target);
    }

    let output = match cli.command {
        Command::Companies => serde_json::to_string(&engine.companies().await?)?,
        Command::Reach { company } => serde_json::to_string(&engine.placement(&company).await?)?,
        Command::Influencers { company } => {
            serde_json::to_string(&engine.get_influential_alumni(&company).await?)?
        }
        Command::Report { company } => {
            serde_json::to_string(&engine.student_report(&company).await?)?
        }
        Command::AddAlumnus {
            name,
            company,
            role,
            info,
            linkedin,
        } => {
            let alumnus = engine
                .add_alumnus(NewAlumnus {
                    name,
                    company,
                    role,
                    info,
                    linkedin,
                })
                .await?;
            serde_json::to_string(&alumnus)?
        }
        Command::AddConnection { from, to } => {
            serde_json::to_string(&engine.add_connection(&from, &to).await?)?
        }
        Command::Profile { name } => serde_json::to_string(&engine.profile_link(&name).await?)?,
        Command::Graph => serde_json::to_string(&engine.graph_summary().await?)?,
    };

    println!("{output}");
    Ok(())
}

async fn open_store(settings: &Settings) -> anyhow::Result<Arc<dyn RecordStore>> {
    match settings.placement.store {
        StoreBackend::Neo4j => {
            let graph_config = GraphConfig::from(settings.neo4j.clone());
            let client = GraphClient::connect(&graph_config).await?;
            client.ensure_schema().await?;
            Ok(Arc::new(client))
        }
        StoreBackend::Memory => {
            let store = match &settings.placement.seed_file {
                Some(path) => MemoryStore::open(path)?,
                None => {
                    tracing::warn!("Memory store has no seed_file; starting empty");
                    MemoryStore::new()
                }
            };
            Ok(Arc::new(store))
        }
    }
}
