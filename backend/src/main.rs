//! Leadbloom CLI - confirmation email service
//!
//! # Main Commands
//!
//! ```bash
//! leadbloom serve                    # Start HTTP server (port 8787)
//! leadbloom send --name Ana --email ana@x.com --industry finance
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! leadbloom preview --name Ana --industry finance   # Print the copy without sending
//! ```

use clap::{Parser, Subcommand};
use leadbloom::mailer::{deliver_confirmation, subject_for, ContentClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "leadbloom")]
#[command(about = "Confirmation email service for the Leadbloom capture form", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8787")]
        port: u16,
    },

    /// Generate and send one confirmation email
    Send {
        /// Lead's name
        #[arg(long)]
        name: String,

        /// Recipient address
        #[arg(long)]
        email: String,

        /// Lead's industry
        #[arg(long)]
        industry: String,
    },

    /// Generate the email copy without sending
    Preview {
        /// Lead's name
        #[arg(long)]
        name: String,

        /// Lead's industry
        #[arg(long)]
        industry: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(port).await,

        Commands::Send {
            name,
            email,
            industry,
        } => cmd_send(&name, &email, &industry).await,

        Commands::Preview { name, industry } => cmd_preview(&name, &industry).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Default filter keeps our own info logs plus tower_http request logs.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("leadbloom=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn cmd_serve(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    leadbloom::server::start_server(port).await
}

async fn cmd_send(
    name: &str,
    email: &str,
    industry: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📨 Sending confirmation to {}...", email);

    let sent = deliver_confirmation(name, email, industry).await?;

    eprintln!("✅ Delivered");
    eprintln!("   Subject:     {}", sent.subject);
    eprintln!("   Provider id: {}", sent.provider_id);

    Ok(())
}

async fn cmd_preview(name: &str, industry: &str) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Generating copy for {} ({})...", name, industry);

    let client = ContentClient::from_env()?;
    let html = client.generate_email_body(name, industry).await?;

    eprintln!("   Subject: {}", subject_for(name));
    println!("{}", html);

    Ok(())
}
