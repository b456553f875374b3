//! Prints the generated catalog as JSON.
//!
//! Usage: `catalog [seed] [size]`; falls back to `CATALOG_SEED` /
//! `CATALOG_SIZE` and then the built-in defaults.

use anyhow::Context;
use ecombot::catalog::{self, DEFAULT_CATALOG_SEED, DEFAULT_CATALOG_SIZE};

fn arg_or_env<T: std::str::FromStr>(arg: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg.or_else(|| std::env::var(key).ok()) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: {raw}")),
        None => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let mut args = std::env::args().skip(1);
    let seed = arg_or_env(args.next(), "CATALOG_SEED", DEFAULT_CATALOG_SEED)?;
    let size = arg_or_env(args.next(), "CATALOG_SIZE", DEFAULT_CATALOG_SIZE)?;

    let products = catalog::generate(seed, size);
    println!("{}", serde_json::to_string_pretty(&products)?);
    eprintln!("Generated {} products (seed={seed})", products.len());
    Ok(())
}
