//! OathGate operator tool.
//!
//! Enrolls users into the secret store and checks one-time codes against
//! it. This binary talks to the same store and verifier the module flows
//! use; there is no separate code path to drift.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;
use zeroize::Zeroize;

use oathgate_auth::store::{FileSecretStore, SecretStore};
use oathgate_auth::{totp, ModuleConfig};

const USAGE: &str = "\
Usage:
  oathgate enroll <user> [--dir DIR]
  oathgate code   <user> [--dir DIR] [--digits N] [--step SECONDS]
  oathgate verify <user> <code> [--dir DIR] [--digits N] [--step SECONDS] [--skew STEPS]
";

/// Generated secret size in bytes (160 bits).
const SECRET_BYTES: usize = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprint!("{}", USAGE);
        std::process::exit(2);
    }

    let command = args[1].as_str();
    let mut config = ModuleConfig::default();
    let mut positional: Vec<&str> = Vec::new();

    // Minimal arg parsing
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" if i + 1 < args.len() => {
                config.secret_dir = args[i + 1].clone().into();
                i += 1;
            }
            "--digits" if i + 1 < args.len() => {
                config.digits = parse_flag("--digits", &args[i + 1], 6, 8)? as u32;
                i += 1;
            }
            "--step" if i + 1 < args.len() => {
                config.step = parse_flag("--step", &args[i + 1], 15, 300)?;
                i += 1;
            }
            "--skew" if i + 1 < args.len() => {
                config.skew = parse_flag("--skew", &args[i + 1], 0, 3)? as u32;
                i += 1;
            }
            flag if flag.starts_with("--") => {
                eprintln!("ERROR: unknown flag {}", flag);
                eprint!("{}", USAGE);
                std::process::exit(2);
            }
            value => positional.push(value),
        }
        i += 1;
    }

    let store = FileSecretStore::new(config.secret_dir.clone());

    match (command, positional.as_slice()) {
        ("enroll", [user]) => enroll(&store, &config, user),
        ("code", [user]) => print_code(&store, &config, user),
        ("verify", [user, code]) => verify(&store, &config, user, code),
        _ => {
            eprint!("{}", USAGE);
            std::process::exit(2);
        }
    }
}

fn enroll(
    store: &FileSecretStore,
    config: &ModuleConfig,
    user: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut secret = [0u8; SECRET_BYTES];
    rand::thread_rng().fill_bytes(&mut secret);

    let path = store.save(user, &secret)?;
    let check = totp::code_at(&secret, unix_now()?, config.step, config.digits)?;
    secret.zeroize();

    println!("Enrolled {}", user);
    println!("Secret written to {}", path.display());
    println!(
        "Current code for cross-checking: {:0width$}",
        check,
        width = config.digits as usize
    );
    Ok(())
}

fn print_code(
    store: &FileSecretStore,
    config: &ModuleConfig,
    user: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let secret = store.load(user)?;
    let code = totp::code_at(&secret, unix_now()?, config.step, config.digits)?;
    println!("{:0width$}", code, width = config.digits as usize);
    Ok(())
}

fn verify(
    store: &FileSecretStore,
    config: &ModuleConfig,
    user: &str,
    code: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let secret = store.load(user)?;
    let ok = totp::verify(
        &secret,
        code.trim(),
        unix_now()?,
        config.digits,
        config.step,
        config.skew,
    )?;

    if ok {
        println!("OK");
        Ok(())
    } else {
        eprintln!("FAIL");
        std::process::exit(1);
    }
}

fn parse_flag(flag: &str, value: &str, min: u64, max: u64) -> Result<u64, String> {
    match value.parse::<u64>() {
        Ok(n) if (min..=max).contains(&n) => Ok(n),
        _ => Err(format!(
            "invalid value for {}: {} (expected {}..={})",
            flag, value, min, max
        )),
    }
}

fn unix_now() -> Result<u64, std::time::SystemTimeError> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}
