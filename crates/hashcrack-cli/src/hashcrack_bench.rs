//! Verifier throughput benchmark CLI
//!
//! Usage: hashcrack_bench --algo <ALGO> --charset <NAME|CHARS> --length <N>
//!                        --attempts <N> [--hash <TARGET>] [--workers <N>]
//!
//! Runs a fixed number of verifications at one candidate length. Without
//! --hash, a format-valid placeholder target for the algorithm is used.
//!
//! Example: hashcrack_bench --algo sha1 --charset alnum --length 6 --attempts 1000000 --workers 4

use hashcrack_core::{
    BenchmarkCommand, EngineOptions, HashAlgorithm, resolve_charset, run_benchmark,
};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} --algo <ALGO> --charset <NAME|CHARS> --length <N> --attempts <N> [options]",
        program
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --hash <TARGET>   Target hash (default: placeholder for the algorithm)");
    eprintln!("  --workers <N>     Number of workers (default: 1)");
    eprintln!("  --help, -h        Show this help message");
}

fn parse_args() -> Result<BenchmarkCommand, String> {
    let args: Vec<String> = env::args().collect();

    let mut algorithm: Option<HashAlgorithm> = None;
    let mut target: Option<String> = None;
    let mut charset: Option<String> = None;
    let mut length: Option<usize> = None;
    let mut attempts: Option<u64> = None;
    let mut workers = 1usize;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        if flag == "--help" || flag == "-h" {
            print_usage(&args[0]);
            std::process::exit(0);
        }

        i += 1;
        let raw = args
            .get(i)
            .ok_or_else(|| format!("{} requires a value", flag))?;
        let invalid = || format!("Invalid value for {}: {}", flag, raw);

        match flag {
            "--algo" => algorithm = Some(raw.parse().map_err(|e| format!("{}", e))?),
            "--hash" => target = Some(raw.clone()),
            "--charset" => charset = Some(resolve_charset(raw).to_string()),
            "--length" => length = Some(raw.parse().map_err(|_| invalid())?),
            "--attempts" => attempts = Some(raw.parse().map_err(|_| invalid())?),
            "--workers" => workers = raw.parse().map_err(|_| invalid())?,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(BenchmarkCommand {
        algorithm: algorithm.ok_or("Missing --algo")?,
        target,
        charset: charset.ok_or("Missing --charset")?,
        length: length.ok_or("Missing --length")?,
        attempts: attempts.ok_or("Missing --attempts")?,
        workers: workers.max(1),
    })
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let command = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    info!(
        algorithm = %command.algorithm,
        length = command.length,
        attempts = command.attempts,
        workers = command.workers,
        "starting benchmark"
    );

    let result = match run_benchmark(&command, &EngineOptions::default()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("attempts={} seconds={:.6}", result.attempts, result.seconds);
    println!("rate={:.2} attempts/sec", result.rate_per_second());
}
