use anyhow::Result;
use clap::{Parser, Subcommand};

/// folio - single-page portfolio with a contact pipeline
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio site with a contact-to-email pipeline", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send a sample inquiry through the configured mailer
    SendTest {
        /// Recipient override; defaults to the configured owner address
        #[arg(long)]
        to: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = folio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability("folio", &config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => folio::server::serve(config, host, port).await,
        Commands::SendTest { to } => send_test_command(config, to).await,
    }
}

#[tracing::instrument(skip(config, to))]
async fn send_test_command(config: folio::Config, to: Option<String>) -> Result<()> {
    use folio::email::{Mailer, OutboundMessage, SmtpMailer};
    use folio_contact::{ContactSubmission, OutboundEmail};

    let submission = ContactSubmission {
        name: "Folio".to_owned(),
        email: config.mail.from_email.clone(),
        message: "Test inquiry sent from the folio CLI.".to_owned(),
        project_type: vec!["Website".to_owned()],
    };
    let email = OutboundEmail::render(&submission, &config.site.owner_name)?;

    let mailer = SmtpMailer::new(&config.mail)?;
    let id = mailer
        .send(OutboundMessage {
            to: to.unwrap_or_else(|| config.mail.to_email.clone()),
            from: config.mail.from_email.clone(),
            reply_to: config.mail.from_email.clone(),
            subject: email.subject,
            html: email.html,
            text: email.text,
        })
        .await?;

    tracing::info!(id = id.as_deref().unwrap_or(""), "test inquiry sent");

    Ok(())
}
