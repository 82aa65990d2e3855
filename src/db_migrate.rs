use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_db::schema::initialize_database;

/// Applies the bookings/admin/sessions schema without starting the server.
/// Reads the same configuration the server does, so DATABASE_URL is
/// required rather than silently defaulted.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    println!("Connecting to database...");
    let db_pool = slotbook_db::create_pool(&config.database_url).await?;

    println!("Applying schema for bookings, admin, and sessions...");
    initialize_database(&db_pool).await?;
    println!("Schema ready.");

    Ok(())
}
