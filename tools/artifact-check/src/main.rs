//! Operator tool for vetting relayer artifacts by hand.
//!
//! Every subcommand exits 0 when the artifact is valid or the computation
//! succeeds, 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use chain_btc::network::BtcNetwork;
use chain_btc::transaction::{decode_raw_transaction, TxSize};
use clap::{Parser, Subcommand};
use relayer_core::config::LoggingConfig;
use relayer_core::validate;
use relayer_core::{
    logging, FeeEstimator, FeeQuote, FeeRateAdjustment, FixedFeeQuote, RelayerConfig,
    RelayerError,
};
use tracing::*;

#[derive(Debug, Parser)]
#[command(name = "artifact-check", about = "Validate relayer artifacts and dry-run fee estimates")]
struct Cli {
    /// Relayer TOML config; supplies logging settings, wallet and fee adjustment.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Bitcoin address, on any network unless `--network` is given.
    Address {
        address: String,
        #[arg(long)]
        network: Option<BtcNetwork>,
    },
    /// 0x-prefixed Ethereum address.
    EthAddress { address: String },
    /// Hex secp256k1 public key.
    Pubkey { hex: String },
    /// Base58 PSBT.
    Psbt { psbt: String },
    /// Weight and vsize of a raw transaction.
    TxSize { hex: String },
    /// Fee for a raw transaction at a fixed BTC/kB rate.
    Fee {
        hex: String,
        #[arg(long)]
        fee_rate: f64,
        /// sat/kB adjustment; overrides the config value.
        #[arg(long, allow_hyphen_values = true)]
        adjustment: Option<i64>,
    },
}

fn verdict(valid: bool) -> ExitCode {
    println!("{}", if valid { "valid" } else { "invalid" });
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(command: Command, config: Option<&RelayerConfig>) -> Result<ExitCode, RelayerError> {
    let code = match command {
        Command::Address {
            address,
            network: Some(network),
        } => match chain_btc::address::validate_address(&address, network) {
            Ok(true) => verdict(true),
            Ok(false) => {
                println!("wrong network: not a {network} address");
                ExitCode::FAILURE
            }
            Err(e) => {
                println!("invalid: {e}");
                ExitCode::FAILURE
            }
        },
        Command::Address {
            address,
            network: None,
        } => verdict(validate::is_valid_btc_address(&address)),
        Command::EthAddress { address } => verdict(validate::is_valid_eth_address(&address)),
        Command::Pubkey { hex } => verdict(validate::is_valid_public_key(&hex)),
        Command::Psbt { psbt } => verdict(validate::is_valid_psbt(&psbt)),
        Command::TxSize { hex } => {
            let size = TxSize::of(&decode_raw_transaction(&hex)?);
            println!(
                "base_size={} total_size={} weight={} vsize={}",
                size.base_size, size.total_size, size.weight, size.vsize
            );
            ExitCode::SUCCESS
        }
        Command::Fee {
            hex,
            fee_rate,
            adjustment,
        } => {
            let quote = FeeQuote::new(fee_rate)?;
            let adjustment = adjustment
                .map(FeeRateAdjustment)
                .or_else(|| config.map(RelayerConfig::fee_adjustment))
                .unwrap_or_default();
            let wallet = config.map_or("dry-run", |c| c.wallet_name.as_str());

            let estimate =
                FeeEstimator::new(FixedFeeQuote(quote)).estimate_fee(wallet, &hex, adjustment)?;
            println!(
                "fee_sat={} rate_sat_per_kb={} vsize={}",
                estimate.fee_sat, estimate.rate_sat_per_kb, estimate.size.vsize
            );
            ExitCode::SUCCESS
        }
    };
    Ok(code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(RelayerConfig::load).transpose() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let default_logging = LoggingConfig::default();
    let logging_config = config.as_ref().map_or(&default_logging, |c| &c.logging);
    if let Err(e) = logging::init(logging_config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli.command, config.as_ref()) {
        Ok(code) => code,
        Err(e) => {
            error!(%e, "check failed");
            ExitCode::FAILURE
        }
    }
}
