//! Imports customers from a CSV file into the configured SQLite database.

use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;

use customers_api::db::establish_connection_pool;
use customers_api::models::config::ServerConfig;
use customers_api::repository::DieselRepository;
use customers_api::seed::seed_from_file;

#[derive(Debug, Parser)]
#[command(name = "seed_customers")]
#[command(about = "Import customers from a CSV file")]
struct SeedArgs {
    /// CSV file with a `name,employees,industry,...` header
    path: PathBuf,

    /// Delete existing customers before importing
    #[arg(long)]
    replace: bool,
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = SeedArgs::parse();

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match seed_from_file(&repo, &args.path, args.replace) {
        Ok(inserted) => log::info!(
            "Inserted {inserted} customers from {}",
            args.path.display()
        ),
        Err(err) => {
            log::error!("Seeding failed: {err}");
            std::process::exit(1);
        }
    }
}
