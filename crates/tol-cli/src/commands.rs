use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;

use tol_sdk::{Address, FileLogStore, IngestReport, Record, Tol, TokenId};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    debug!(path = %cli.log.display(), "using log file");
    let tol = Tol::open(&cli.log);

    match cli.command {
        Command::ReadFile(args) => cmd_read_file(&tol, args),
        Command::ReadInline(args) => cmd_read_inline(&tol, args),
        Command::Nft(args) => cmd_nft(&tol, args),
        Command::Wallet(args) => cmd_wallet(&tol, args),
        Command::Log(args) => cmd_log(&tol, args),
        Command::Verify(_) => cmd_verify(&tol),
        Command::Reset(_) => cmd_reset(&tol, &cli.log),
    }
}

fn cmd_read_file(tol: &Tol<FileLogStore>, args: ReadFileArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.path)
        .with_context(|| format!("cannot read {}", args.path.display()))?;
    let report = tol.ingest_text(&text)?;
    print_ingest(&report);
    Ok(())
}

fn cmd_read_inline(tol: &Tol<FileLogStore>, args: ReadInlineArgs) -> anyhow::Result<()> {
    let report = tol.ingest_text(&args.text)?;
    print_ingest(&report);
    Ok(())
}

fn cmd_nft(tol: &Tol<FileLogStore>, args: NftArgs) -> anyhow::Result<()> {
    let token = TokenId::from(args.token);
    match tol.owner_of(&token)? {
        Some(owner) => println!(
            "{} is owned by {}",
            token.as_str().yellow(),
            owner.as_str().cyan()
        ),
        None => println!("{} is not in the ledger", token.as_str().yellow()),
    }
    Ok(())
}

fn cmd_wallet(tol: &Tol<FileLogStore>, args: WalletArgs) -> anyhow::Result<()> {
    let address = Address::from(args.address);
    let tokens = tol.tokens_owned_by(&address)?;
    if tokens.is_empty() {
        println!("{} owns no tokens", address.as_str().cyan());
    } else {
        println!("{} owns {} token(s):", address.as_str().cyan(), tokens.len());
        for token in &tokens {
            println!("  {}", token.as_str().yellow());
        }
    }
    Ok(())
}

fn cmd_log(tol: &Tol<FileLogStore>, args: LogArgs) -> anyhow::Result<()> {
    let history = tol.history()?;
    if history.is_empty() {
        println!("The log is empty.");
        return Ok(());
    }

    let skip = args
        .limit
        .map_or(0, |limit| history.len().saturating_sub(limit));
    for (index, record) in history.iter().enumerate().skip(skip) {
        println!("{} {}", format!("#{index}").dimmed(), describe(record));
    }
    Ok(())
}

fn cmd_verify(tol: &Tol<FileLogStore>) -> anyhow::Result<()> {
    let summary = tol.summary()?;
    println!("{} Log replays cleanly", "✓".green().bold());
    println!("  Records: {}", summary.records.to_string().bold());
    println!("  Live tokens: {}", summary.live_tokens.to_string().bold());
    Ok(())
}

fn cmd_reset(tol: &Tol<FileLogStore>, path: &Path) -> anyhow::Result<()> {
    tol.reset()?;
    println!(
        "{} Log reset: {}",
        "✓".green().bold(),
        path.display().to_string().bold()
    );
    Ok(())
}

fn print_ingest(report: &IngestReport) {
    println!(
        "{} Accepted {} event(s)",
        "✓".green().bold(),
        report.accepted.to_string().bold()
    );
    println!(
        "  Log: {} record(s), {} live token(s)",
        report.total_records, report.live_tokens
    );
}

fn describe(record: &Record) -> String {
    let token = record.token_id.as_str().yellow();
    match record.kind.as_str() {
        "Mint" => format!(
            "{} {} to {}",
            "Mint".green(),
            token,
            record.address.as_ref().map_or("?", Address::as_str).cyan()
        ),
        "Burn" => format!("{} {}", "Burn".red(), token),
        "Transfer" => format!(
            "{} {} {} → {}",
            "Transfer".blue(),
            token,
            record.from.as_ref().map_or("?", Address::as_str).cyan(),
            record.to.as_ref().map_or("?", Address::as_str).cyan()
        ),
        other => format!("{} {}", other.red().bold(), token),
    }
}
