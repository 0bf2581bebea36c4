use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use temperature_api::conversion::{Direction, Unit};

#[derive(Parser)]
#[command(name = "temperature-cli")]
#[command(about = "Command-line client for the Temperature Conversion API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Send the value as a JSON body instead of a path segment
    #[arg(long)]
    post: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Celsius to Fahrenheit
    C2f {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Convert Fahrenheit to Celsius
    F2c {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Convert from the given unit (C, F, Celsius, °F, ...) to the other
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[arg(short, long)]
        from: Unit,
    },
    /// Describe a Celsius temperature
    Context {
        #[arg(allow_hyphen_values = true)]
        celsius: f64,
    },
    /// Check service status
    Health,
    /// Show formulas, constants and endpoints
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = format!("{}/api/temperature", cli.url.trim_end_matches('/'));

    let res = match cli.command {
        Commands::C2f { value } => {
            convert(&client, &base, Direction::CelsiusToFahrenheit, value, cli.post).await?
        }
        Commands::F2c { value } => {
            convert(&client, &base, Direction::FahrenheitToCelsius, value, cli.post).await?
        }
        Commands::Convert { value, from } => {
            convert(&client, &base, Direction::from_source(from), value, cli.post).await?
        }
        Commands::Context { celsius } => {
            client
                .get(format!("{}/context/{}", base, celsius))
                .send()
                .await?
        }
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
        Commands::Info => client.get(format!("{}/info", base)).send().await?,
    };

    print_response(res).await
}

async fn convert(
    client: &reqwest::Client,
    base: &str,
    direction: Direction,
    value: f64,
    post: bool,
) -> Result<reqwest::Response, reqwest::Error> {
    let direction = direction.as_str();
    if post {
        client
            .post(format!("{}/{}", base, direction))
            .json(&json!({ "value": value }))
            .send()
            .await
    } else {
        client
            .get(format!("{}/{}/{}", base, direction, value))
            .send()
            .await
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
