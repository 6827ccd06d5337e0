/// Pump.fun liquidator
///
/// Scans the wallet for SPL tokens, keeps the ones issued through the
/// pump.fun bonding curve and sells each of them back into its curve,
/// closing the token account in the same transaction.
///
/// WARNING: This executes REAL transactions on mainnet!
///
/// Usage:
/// cargo run -- --keypair-path ~/.config/solana/id.json --dry-run
/// cargo run -- --config liquidator.toml --yes
/// cargo run -- --debug rpc --debug pumpfun
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use pumpfun_liquidator::{
    config::{resolve_config, CliOverrides},
    logger::{self, LogTag, LoggerConfig},
    rpc::RpcClient,
    scan_and_sell,
    wallet::load_wallet_keypair,
    LiquidatorContext,
};
use solana_sdk::signer::Signer;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "pumpfun_liquidator")]
#[command(about = "Sell all pump.fun bonding curve tokens in a wallet and close their token accounts")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<String>,

    /// JSON-RPC endpoint (overrides config and RPC_URL)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Keypair JSON file (overrides config and KEYPAIR_PATH)
    #[arg(long, conflicts_with = "private_key")]
    keypair_path: Option<String>,

    /// Base58 or byte array secret key (overrides config and PRIVATE_KEY)
    #[arg(long)]
    private_key: Option<String>,

    /// Build and sign the transactions without sending them
    #[arg(long)]
    dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,

    /// Enable debug logs for a tag (system, config, wallet, rpc, scanner,
    /// classifier, pumpfun, seller). Repeatable.
    #[arg(long = "debug", value_name = "TAG")]
    debug_tags: Vec<String>,

    /// Log everything
    #[arg(long)]
    verbose: bool,

    /// Only warnings and errors
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (logger_config, unknown_tags) =
        LoggerConfig::from_flags(&args.debug_tags, args.verbose, args.quiet);
    logger::init(logger_config);
    for tag in unknown_tags {
        logger::warning(LogTag::System, &format!("Unknown debug tag '{}', ignored", tag));
    }

    let result = run(args).await;
    if let Err(e) = &result {
        logger::error(LogTag::System, &format!("{:#}", e));
    }
    std::process::exit(exit_code(&result));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunOutcome {
    Completed,
    Cancelled,
}

/// 0 once the pass ran (per-token failures included) or the user cancelled;
/// 1 when configuration, keypair or the wallet scan failed.
fn exit_code(result: &anyhow::Result<RunOutcome>) -> i32 {
    match result {
        Ok(RunOutcome::Completed) | Ok(RunOutcome::Cancelled) => 0,
        Err(_) => 1,
    }
}

async fn run(args: Args) -> anyhow::Result<RunOutcome> {
    let overrides = CliOverrides {
        rpc_url: args.rpc_url,
        keypair_path: args.keypair_path,
        private_key: args.private_key,
        dry_run: args.dry_run,
    };
    let config = resolve_config(args.config.as_deref(), &overrides)
        .context("Failed to load configuration")?;

    let wallet = load_wallet_keypair(&config.wallet).context("Failed to load wallet keypair")?;
    let rpc = RpcClient::from_config(&config.rpc).context("Failed to create RPC client")?;

    print_header();
    logger::info(LogTag::Wallet, &format!("Wallet: {}", wallet.pubkey()));
    logger::info(LogTag::Rpc, &format!("RPC: {}", rpc.url()));

    if config.seller.dry_run {
        println!("{}", "DRY RUN MODE - No transactions will be sent".yellow());
    } else if !args.yes && !confirm_liquidation()? {
        println!("Operation cancelled by user.");
        return Ok(RunOutcome::Cancelled);
    }

    let ctx = LiquidatorContext::new(rpc, wallet, config.seller.clone());
    let report = scan_and_sell(&ctx).await.context("Wallet scan failed")?;

    report.print_summary();
    Ok(RunOutcome::Completed)
}

fn print_header() {
    println!("\n{}", "=".repeat(70));
    println!("{}", "PUMP.FUN LIQUIDATOR".bold());
    println!("{}", "=".repeat(70));
}

fn confirm_liquidation() -> anyhow::Result<bool> {
    println!("{}", "WARNING: This will sell ALL pump.fun tokens in your wallet!".red().bold());
    println!("Sales are made at any price (no slippage protection).");
    println!("Add --dry-run to see what would happen without sending anything.");
    print!("\nType 'YES' to confirm or anything else to cancel: ");
    io::stdout().flush()?;

    Ok(read_confirmation(&mut io::stdin().lock())?)
}

/// Only an exact `YES` line confirms; anything else, including EOF, cancels
fn read_confirmation<R: BufRead>(input: &mut R) -> io::Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim() == "YES")
}
