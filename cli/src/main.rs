use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillet_core::{
    ApiHttpClient, ClientConfig, DashboardPage, DetailAggregator, DetailPage, RecipesApi,
    SearchPage, SearchResolver,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skillet")]
#[command(about = "Recipe catalog client", long_about = None)]
struct Cli {
    /// Backend base URL (default: SKILLET_API_BASE_URL or http://localhost:8000)
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full recipe list
    List {
        #[arg(long, default_value_t = skillet_core::DEFAULT_LIST_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = skillet_core::DEFAULT_LIST_OFFSET)]
        offset: u32,
    },
    /// Search recipes by title, description, or ingredients
    Search {
        /// Query text; blank returns the full list
        query: String,
    },
    /// Show one recipe with its similar recipes
    Show {
        id: i64,
        /// Re-fetch the similar section once more before rendering
        #[arg(long)]
        refresh_similar: bool,
    },
    /// Create a recipe (stubbed: no write endpoint yet)
    Add {
        /// Recipe data as a JSON object
        json: String,
    },
    /// Delete a recipe (stubbed: no write endpoint yet)
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(server) = cli.server {
        config = ClientConfig::new(server, config.search_mode);
    }

    let http = Arc::new(ApiHttpClient::new()?);
    let api = Arc::new(RecipesApi::new(&config, http));

    match cli.command {
        Commands::List { limit, offset } => {
            let mut page = DashboardPage::new(api);
            page.load_page(limit, offset).await;
            println!("{}", page.render());
        }
        Commands::Search { query } => {
            let resolver = SearchResolver::from_config(&config, api).await?;
            let mut page = SearchPage::new(resolver);
            page.run_search(&query).await;
            println!("{}", page.render());
        }
        Commands::Show {
            id,
            refresh_similar,
        } => {
            let mut page = DetailPage::new(DetailAggregator::new(api));
            page.load(id).await;
            if refresh_similar {
                page.refresh_similar().await;
            }
            println!("{}", page.render());
        }
        Commands::Add { json } => {
            let data = serde_json::from_str(&json)?;
            let ack = api.add_recipe(&data).await?;
            match ack.id {
                Some(id) => println!("{} (id {})", ack.message, id),
                None => println!("{}", ack.message),
            }
        }
        Commands::Delete { id } => {
            let ack = api.delete_recipe(id).await?;
            println!("{}", ack.message);
        }
    }

    Ok(())
}
