use clap::Parser;
use dotenv::dotenv;

use transfer_client::configure::{self, AppConfig};
use transfer_client::logger::setup_logger;
use transfer_client::models::TransferResponse;
use transfer_client::transfer_client::TransferClient;

const LOG_TARGET: &str = "transfer_demo";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Send one funds transfer to the transfer service",
    long_about = None
)]
struct Args {
    /// Source account
    #[arg(long = "from", default_value = "ACC1000")]
    from_account: String,

    /// Destination account
    #[arg(long = "to", default_value = "ACC1001")]
    to_account: String,

    #[arg(long, default_value_t = 100.0)]
    amount: f64,

    /// Overrides base_url from config/config.yaml and APP_BASE_URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let args = Args::parse();

    let mut config = configure::load_config().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    });
    if let Some(base_url) = args.base_url.clone() {
        config.base_url = base_url;
    }

    if let Err(e) = setup_logger(&config) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(&config, &args).await {
        log::error!(target: LOG_TARGET, "Error during transfer: {:#}", e);
    }
}

async fn run(config: &AppConfig, args: &Args) -> eyre::Result<()> {
    let client = TransferClient::from_config(config)?;
    let response = client
        .transfer_funds(&args.from_account, &args.to_account, args.amount)
        .await?;

    print_response(&response);
    Ok(())
}

fn print_response(response: &TransferResponse) {
    println!("Transfer successful:");
    println!("Transaction ID: {}", response.transaction_id);
    println!("Status: {}", response.status);
    println!("Message: {}", response.message);
    println!("From: {}", response.from_account);
    println!("To: {}", response.to_account);
    println!("Amount: {:?}", response.amount);
}
