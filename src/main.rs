//! Terminal demo: chat with the bot, see what it learned, then test passwords.
//!
//! Usage: `privacy-lab [config-file]`

use std::error::Error;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use privacy_lab::adapters::TracingObserver;
use privacy_lab::application::{ChatSession, PasswordLab};
use privacy_lab::config::{AppConfig, LoggingConfig};

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load()?,
    };
    config.validate()?;
    init_logging(&config.logging)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Privacy lab starting");

    let session =
        ChatSession::from_config(&config)?.with_observer(Arc::new(TracingObserver::new()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    say(&mut stdout, &session.start_conversation().await).await?;
    while let Some(line) = lines.next_line().await? {
        let outcome = session.submit_answer(&line).await?;
        say(&mut stdout, &outcome.bot_message).await?;
        if outcome.finished {
            break;
        }
    }

    let extracted = session.extracted_data().await;
    say(&mut stdout, &format!("\n$ cat collected.json\n{}", extracted.to_pretty_json()?)).await?;

    let lab = PasswordLab::new();
    say(&mut stdout, "\nPassword lab. Type a password to test it (empty line to quit).").await?;
    while let Some(line) = lines.next_line().await? {
        if line.is_empty() {
            break;
        }
        let analysis = lab.analyze_password(&line);
        say(
            &mut stdout,
            &format!(
                "{} ({:.0}%), cracked in: {}\nSHA-256: {}",
                analysis.tier().label(),
                analysis.score * 100.0,
                analysis.crack_time_label,
                analysis.digest_hex
            ),
        )
        .await?;
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) -> Result<(), BoxError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().try_init()?;
    } else {
        builder.try_init()?;
    }
    Ok(())
}

async fn say(stdout: &mut tokio::io::Stdout, message: &str) -> std::io::Result<()> {
    stdout.write_all(message.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
