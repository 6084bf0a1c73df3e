//! Unit Fraction Products
//!
//! Multiplies every pair of unit fractions 1/a * 1/b over a small search
//! space, groups the pairs by their exact product, and prints each group with
//! the least common denominator of its factors and a decimal approximation.
//!
//! Run with: cargo run --example unit_fraction_products -- --max-denominator 12

use std::collections::BTreeMap;

use clap::Parser;
use surd::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Group products of unit fractions by exact value")]
struct Args {
    /// Largest denominator in the search space.
    #[arg(long, default_value_t = 12)]
    max_denominator: i64,

    /// Smallest product to report, as "N" or "N/D".
    #[arg(long, default_value = "1/36")]
    min_product: Fraction,
}

fn unit_fractions(max_denominator: i64) -> Vec<Fraction> {
    (2..=max_denominator)
        .map(|d| Fraction::from_i64(1, d))
        .collect()
}

fn group_products(units: &[Fraction]) -> BTreeMap<Fraction, Vec<(Fraction, Fraction)>> {
    let mut groups: BTreeMap<Fraction, Vec<(Fraction, Fraction)>> = BTreeMap::new();
    for (i, a) in units.iter().enumerate() {
        for b in &units[i..] {
            groups.entry(a * b).or_default().push((a.clone(), b.clone()));
        }
    }
    groups
}

fn least_common_denominator(pairs: &[(Fraction, Fraction)]) -> Result<Integer, NumericError> {
    pairs
        .iter()
        .flat_map(|(a, b)| [a.denominator(), b.denominator()])
        .try_fold(Integer::one(), |acc, d| acc.lcm(d))
}

fn main() -> Result<(), NumericError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let units = unit_fractions(args.max_denominator);
    info!(count = units.len(), "generated unit fractions");

    let groups = group_products(&units);
    debug!(distinct = groups.len(), "grouped products by exact value");

    println!("╔════════════════════════════════════════════════════════════════════╗");
    println!("║               Unit Fraction Products (denominators ≤ {:<4})         ║", args.max_denominator);
    println!("╚════════════════════════════════════════════════════════════════════╝\n");

    // Largest products first.
    for (product, pairs) in groups.iter().rev().filter(|(p, _)| **p >= args.min_product) {
        let lcd = least_common_denominator(pairs)?;
        let approx = product
            .try_to_decimal()
            .map_or_else(|| "out of range".to_string(), |d| d.round_dp(6).to_string());

        let factors: Vec<String> = pairs.iter().map(|(a, b)| format!("{a} * {b}")).collect();
        println!("{product:>8} ≈ {approx:<10} lcd {lcd:<6} {}", factors.join(", "));
    }

    // A product that is a perfect square has a rational square root.
    println!("\nSquare roots of the reported products:");
    for product in groups.keys().rev().filter(|p| **p >= args.min_product) {
        let root = product.raise_to_rational(&Fraction::from_i64(1, 2));
        match root.try_to_fraction() {
            Some(exact) => println!("  sqrt({product}) = {exact}"),
            None => println!("  sqrt({product}) ≈ {:.6}", root.to_f64()?),
        }
    }

    Ok(())
}
