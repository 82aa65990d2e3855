use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_db::repositories::admin;

/// Provisions the single admin credential. The running service never writes
/// the admin table; this binary is the only path that does.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    let password = std::env::var("ADMIN_PASSWORD")
        .map_err(|_| eyre!("ADMIN_PASSWORD environment variable not set"))?;

    println!("Connecting to database...");
    let db_pool = slotbook_db::create_pool(&config.database_url).await?;

    println!("Initializing database schema...");
    slotbook_db::schema::initialize_database(&db_pool).await?;

    println!("Provisioning admin credential...");
    admin::set_admin_password(&db_pool, &password).await?;
    println!("Admin credential stored.");

    Ok(())
}
