use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tol",
    about = "Token Ownership Ledger — a validated mint/burn/transfer log",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log file to operate on
    #[arg(long, global = true, default_value = "stream-log.json")]
    pub log: PathBuf,

    /// Enable debug-level tracing
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a batch of records from a file
    ReadFile(ReadFileArgs),
    /// Ingest a batch of records from inline text
    ReadInline(ReadInlineArgs),
    /// Look up the current owner of a token
    Nft(NftArgs),
    /// List the tokens currently owned by an address
    Wallet(WalletArgs),
    /// Print the stored record history
    Log(LogArgs),
    /// Replay the full log and report totals
    Verify(VerifyArgs),
    /// Discard all history and leave an empty log
    Reset(ResetArgs),
}

#[derive(Args)]
pub struct ReadFileArgs {
    /// File whose contents to ingest
    pub path: PathBuf,
}

#[derive(Args)]
pub struct ReadInlineArgs {
    /// Record text: a JSON object or array, single quotes tolerated
    pub text: String,
}

#[derive(Args)]
pub struct NftArgs {
    /// Token id to look up
    pub token: String,
}

#[derive(Args)]
pub struct WalletArgs {
    /// Address whose holdings to list
    pub address: String,
}

#[derive(Args)]
pub struct LogArgs {
    /// Show only the newest N records
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct VerifyArgs {}

#[derive(Args)]
pub struct ResetArgs {}
