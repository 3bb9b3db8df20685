use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "chirpy-cli")]
#[command(about = "Admin CLI for the chirpy service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Bearer token, when the server sets admin.api_key
    #[arg(short, long)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service readiness
    Health,
    /// Show the fileserver hit counter page
    Metrics,
    /// Reset the fileserver hit counter
    Reset,
    /// Validate a chirp and print the cleaned body
    Validate {
        /// Chirp text
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(key) = &cli.key {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", key))?,
        );
    }

    let res = match cli.command {
        Commands::Health => client.get(format!("{}/api/healthz", cli.url)).send().await?,
        Commands::Metrics => {
            client
                .get(format!("{}/admin/metrics", cli.url))
                .headers(headers)
                .send()
                .await?
        }
        Commands::Reset => {
            client
                .post(format!("{}/admin/reset", cli.url))
                .headers(headers)
                .send()
                .await?
        }
        Commands::Validate { text } => {
            client
                .post(format!("{}/api/validate_chirp", cli.url))
                .json(&serde_json::json!({ "body": text }))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let is_json = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
    }

    if is_json {
        let json: Value = serde_json::from_str(&text)?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", text.trim_end());
    }
    Ok(())
}
