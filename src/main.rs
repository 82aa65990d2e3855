use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_db::{create_pool, schema::initialize_database};
use slotbook_mailer::{config::MailConfig, SmtpMailer};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    let mail_config = MailConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Build the outbound mail transport
    let mailer = Arc::new(SmtpMailer::new(mail_config)?);

    // Start API server
    slotbook_api::start_server(config, db_pool, mailer).await?;

    Ok(())
}
