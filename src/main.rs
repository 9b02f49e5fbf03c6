use clap::Parser;
use dotenv::dotenv;
use log::info;
use serde::Serialize;
use std::env;

use bonding_curve_explorer::config::CurveDefaults;
use bonding_curve_explorer::models::{
    find_preset, CurveParameters, CurvePoint, CurveSummary, IncrementPoint, PRESETS,
};
use bonding_curve_explorer::utils::bonding_curve::{
    compute_increment_schedule, compute_price_curve, curve_summary, DEFAULT_SAMPLE_COUNT,
};
use bonding_curve_explorer::utils::format::{millions, sol};

/// Factor applied to the price column of the curve table so the tiny
/// per-token prices stay readable. Display-only; the model reports SOL
/// per token.
const PRICE_DISPLAY_SCALE: f64 = 1_000_000.0;

/// Explore how virtual reserves shape a constant-product token sale.
#[derive(Parser, Debug)]
#[command(name = "bonding-curve-explorer", version, about)]
struct Cli {
    /// Virtual SOL reserves backing the curve
    #[arg(long, conflicts_with = "preset")]
    virtual_sol: Option<f64>,

    /// Virtual token reserves; must exceed the 800M real supply
    #[arg(long, conflicts_with = "preset")]
    virtual_tokens: Option<f64>,

    /// Apply a named preset bundle (see --list-presets)
    #[arg(long)]
    preset: Option<String>,

    /// Number of samples along the price curve
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Rows of the increment table to print
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Emit the full report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// List the available presets and exit
    #[arg(long)]
    list_presets: bool,
}

#[derive(Serialize)]
struct CurveReport {
    parameters: CurveParameters,
    summary: CurveSummary,
    schedule: Vec<IncrementPoint>,
    curve: Vec<CurvePoint>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(log_level));

    let cli = Cli::parse();

    if cli.list_presets {
        print_presets();
        return Ok(());
    }

    let params = resolve_parameters(&cli)?;
    info!(
        "Curve ready: virtual SOL {}, virtual tokens {}, k = {:e}",
        params.virtual_sol_reserves(),
        params.virtual_token_reserves(),
        params.constant_product()
    );

    let schedule = compute_increment_schedule(&params);
    let curve = compute_price_curve(&params, cli.samples);
    let summary = curve_summary(&params);

    if cli.json {
        let report = CurveReport {
            parameters: params,
            summary,
            schedule,
            curve,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&params, &summary);
    print_increment_table(&schedule, cli.rows);
    print_curve_table(&curve);

    Ok(())
}

/// Resolve parameters from a preset bundle, or from flags with env-var
/// defaults behind them.
fn resolve_parameters(cli: &Cli) -> Result<CurveParameters, Box<dyn std::error::Error>> {
    if let Some(name) = &cli.preset {
        let preset = find_preset(name)
            .ok_or_else(|| format!("unknown preset: {} (try --list-presets)", name))?;
        info!("Applying preset {} ({})", preset.name, preset.label);
        return Ok(preset.parameters()?);
    }

    let defaults = CurveDefaults::load();
    let virtual_sol = cli.virtual_sol.unwrap_or(defaults.virtual_sol_reserves);
    let virtual_tokens = cli.virtual_tokens.unwrap_or(defaults.virtual_token_reserves);

    Ok(CurveParameters::new(virtual_sol, virtual_tokens)?)
}

fn print_presets() {
    println!("Available presets:");
    for preset in PRESETS {
        println!(
            "  {:<6} {:<15} virtual SOL {:>8}  virtual tokens {:>15}",
            preset.name, preset.label, preset.virtual_sol_reserves, preset.virtual_token_reserves
        );
    }
}

fn print_summary(params: &CurveParameters, summary: &CurveSummary) {
    println!("Bonding curve parameters");
    println!("  virtual SOL reserves:   {}", params.virtual_sol_reserves());
    println!("  virtual token reserves: {}", params.virtual_token_reserves());
    println!("  real token reserves:    {}", params.real_token_reserves());
    println!("  initial token price:    {:e} SOL", summary.initial_price);
    println!("  constant product (k):   {:e}", summary.constant_product);
    println!(
        "  SOL to buy all {} tokens: {}",
        millions(params.real_token_reserves()),
        sol(summary.total_sol_required, 2)
    );
    println!();
}

fn print_increment_table(schedule: &[IncrementPoint], rows: usize) {
    let shown = schedule.len().min(rows);
    println!(
        "Cost per {} token increment (showing {} of {})",
        millions(CurveParameters::TOKEN_INCREMENT),
        shown,
        schedule.len()
    );
    println!(
        "  {:>13} {:>16} {:>18} {:>14}",
        "tokens bought", "increment cost", "price per token", "total SOL"
    );
    for point in &schedule[..shown] {
        println!(
            "  {:>13} {:>16} {:>18} {:>14}",
            millions(point.tokens_bought),
            sol(point.increment_cost, 4),
            format!("{:.8}", point.increment_price),
            sol(point.sol_total, 4)
        );
    }
    println!();
}

fn print_curve_table(curve: &[CurvePoint]) {
    println!(
        "Price curve ({} samples, price scaled x{} for readability)",
        curve.len() - 1,
        PRICE_DISPLAY_SCALE
    );
    println!(
        "  {:>13} {:>18} {:>16}",
        "tokens sold", "price (scaled)", "total SOL"
    );
    let stride = ((curve.len() - 1) / 10).max(1);
    for point in curve.iter().step_by(stride) {
        println!(
            "  {:>13} {:>18.6} {:>16}",
            millions(point.tokens_sold),
            point.price * PRICE_DISPLAY_SCALE,
            sol(point.sol_required, 4)
        );
    }
}
