use bonding_curve_explorer::models::PRESETS;
use bonding_curve_explorer::utils::bonding_curve::curve_summary;

fn main() {
    println!("SOL required to sell out the 800M real supply, per preset:\n");

    for preset in PRESETS {
        match preset.parameters() {
            Ok(params) => {
                let summary = curve_summary(&params);
                println!(
                    "{:<15} virtual SOL {:>8}  initial price {:.3e} SOL  total {:>12.2} SOL",
                    preset.label,
                    preset.virtual_sol_reserves,
                    summary.initial_price,
                    summary.total_sol_required
                );
            }
            Err(e) => println!("{:<15} invalid preset: {}", preset.label, e),
        }
    }
}
