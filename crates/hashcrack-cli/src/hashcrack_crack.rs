//! Hash recovery CLI
//!
//! Usage: hashcrack_crack --algo <ALGO> --hash <TARGET> --charset <NAME|CHARS>
//!                        --min-len <N> --max-len <N> [options]
//!
//! Options:
//!   --workers <N>         Number of workers (default: 1, sequential)
//!   --time-limit <SECS>   Stop after this many seconds
//!   --max-attempts <N>    Stop after this many verifications
//!   --help, -h            Show help
//!
//! Example: hashcrack_crack --algo md5 --hash e10adc3949ba59abbe56e057f20f883e \
//!              --charset digits --min-len 1 --max-len 8 --workers 4
//!
//! Set RUST_LOG (e.g. RUST_LOG=debug) for progress diagnostics on stderr.

use hashcrack_core::constants::NAMED_CHARSETS;
use hashcrack_core::{EngineOptions, HashAlgorithm, SearchSpec, crack_hash, resolve_charset};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Args {
    algorithm: HashAlgorithm,
    target: String,
    charset: String,
    min_len: usize,
    max_len: usize,
    workers: usize,
    time_limit: Option<f64>,
    max_attempts: Option<u64>,
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} --algo <ALGO> --hash <TARGET> --charset <NAME|CHARS> --min-len <N> --max-len <N> [options]",
        program
    );
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  --algo <ALGO>         Hash algorithm: md5, sha1, bcrypt, argon2id");
    eprintln!("  --hash <TARGET>       Target hash (hex digest or modular crypt / PHC string)");
    eprintln!("  --charset <CHARSET>   Charset name or literal characters");
    eprintln!("  --min-len <N>         Shortest candidate length");
    eprintln!("  --max-len <N>         Longest candidate length");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --workers <N>         Number of workers (default: 1)");
    eprintln!("  --time-limit <SECS>   Stop after this many seconds");
    eprintln!("  --max-attempts <N>    Stop after this many verifications");
    eprintln!("  --help, -h            Show this help message");
    eprintln!();
    let names: Vec<&str> = NAMED_CHARSETS.iter().map(|(name, _)| *name).collect();
    eprintln!("Charset names: {:?}", names);
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn parse_number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, raw))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut algorithm: Option<HashAlgorithm> = None;
    let mut target: Option<String> = None;
    let mut charset: Option<String> = None;
    let mut min_len: Option<usize> = None;
    let mut max_len: Option<usize> = None;
    let mut workers = 1usize;
    let mut time_limit: Option<f64> = None;
    let mut max_attempts: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            "--algo" => {
                i += 1;
                let raw = value(&args, i, flag)?;
                algorithm = Some(raw.parse().map_err(|e| format!("{}", e))?);
            }
            "--hash" => {
                i += 1;
                target = Some(value(&args, i, flag)?.to_string());
            }
            "--charset" => {
                i += 1;
                charset = Some(value(&args, i, flag)?.to_string());
            }
            "--min-len" => {
                i += 1;
                min_len = Some(parse_number(value(&args, i, flag)?, flag)?);
            }
            "--max-len" => {
                i += 1;
                max_len = Some(parse_number(value(&args, i, flag)?, flag)?);
            }
            "--workers" => {
                i += 1;
                workers = parse_number(value(&args, i, flag)?, flag)?;
            }
            "--time-limit" => {
                i += 1;
                time_limit = Some(parse_number(value(&args, i, flag)?, flag)?);
            }
            "--max-attempts" => {
                i += 1;
                max_attempts = Some(parse_number(value(&args, i, flag)?, flag)?);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Args {
        algorithm: algorithm.ok_or("Missing --algo")?,
        target: target.ok_or("Missing --hash")?,
        charset: charset.ok_or("Missing --charset")?,
        min_len: min_len.ok_or("Missing --min-len")?,
        max_len: max_len.ok_or("Missing --max-len")?,
        workers: workers.max(1),
        time_limit,
        max_attempts,
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

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let algorithm = args.algorithm;
    let mut spec = SearchSpec::new(
        args.target,
        resolve_charset(&args.charset),
        args.min_len,
        args.max_len,
    )
    .with_workers(args.workers);
    if let Some(seconds) = args.time_limit {
        spec = spec.with_time_limit(seconds);
    }
    if let Some(attempts) = args.max_attempts {
        spec = spec.with_max_attempts(attempts);
    }

    info!(
        algorithm = %algorithm,
        workers = spec.workers,
        min_length = spec.min_length,
        max_length = spec.max_length,
        "starting crack"
    );

    let result = match crack_hash(algorithm, &spec, &EngineOptions::default()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &result.password {
        Some(password) if result.found => println!(
            "FOUND password={:?} attempts={} seconds={:.6}",
            password, result.attempts, result.seconds
        ),
        _ => println!(
            "NOT FOUND attempts={} seconds={:.6}",
            result.attempts, result.seconds
        ),
    }
    println!("rate={:.2} attempts/sec", result.rate_per_second());
}
