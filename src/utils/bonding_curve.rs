use log::debug;

use crate::models::{CurveParameters, CurvePoint, CurveSummary, IncrementPoint};

/// Hard cap on the schedule length. A parameter set that would need more
/// steps gets a truncated schedule rather than an unbounded walk.
pub const MAX_INCREMENT_POINTS: usize = 100;

/// Samples taken along the price curve by default.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Default sampling cap, one increment short of the full real supply.
/// The marginal price blows up as the curve approaches depletion, so
/// samples past this point are noise.
pub const CURVE_SAMPLE_CAP: f64 = 790_000_000.0;

/// Walk the curve in `token_increment` steps and price each step.
///
/// From the constant-product invariant
/// `(virtual_sol + Δsol) * (virtual_tokens - Δtokens) = k`, the
/// cumulative SOL after `c` tokens is `k / (virtual_tokens - c) -
/// virtual_sol`; each increment cost is the difference of consecutive
/// cumulative totals. The final step is clipped so the last point lands
/// exactly on the real token supply.
pub fn compute_increment_schedule(params: &CurveParameters) -> Vec<IncrementPoint> {
    let k = params.constant_product();
    let virtual_sol = params.virtual_sol_reserves();
    let virtual_tokens = params.virtual_token_reserves();
    let real_tokens = params.real_token_reserves();

    let mut points = Vec::new();
    let mut cumulative_tokens = 0.0;
    let mut previous_sol_total = 0.0;

    while cumulative_tokens < real_tokens && points.len() < MAX_INCREMENT_POINTS {
        let step = params.token_increment().min(real_tokens - cumulative_tokens);
        let tokens_bought = cumulative_tokens + step;

        let new_virtual_sol = k / (virtual_tokens - tokens_bought);
        let sol_total = new_virtual_sol - virtual_sol;
        let increment_cost = sol_total - previous_sol_total;

        points.push(IncrementPoint {
            tokens_bought,
            increment_cost,
            increment_price: increment_cost / step,
            average_price: sol_total / tokens_bought,
            sol_total,
        });

        previous_sol_total = sol_total;
        cumulative_tokens = tokens_bought;
    }

    if cumulative_tokens < real_tokens {
        debug!(
            "increment schedule truncated at {} points ({} of {} tokens priced)",
            points.len(),
            cumulative_tokens,
            real_tokens
        );
    }

    points
}

/// Sample the price/cost curve with the default cap,
/// `min(real_token_reserves, CURVE_SAMPLE_CAP)`.
pub fn compute_price_curve(params: &CurveParameters, sample_count: usize) -> Vec<CurvePoint> {
    compute_price_curve_with_cap(
        params,
        sample_count,
        params.real_token_reserves().min(CURVE_SAMPLE_CAP),
    )
}

/// Sample the curve from the origin up to `max_tokens_cap` inclusive.
///
/// The first point is always `(0, virtual_sol / virtual_tokens, 0)`.
/// Samples are placed by index multiplication so the last one lands
/// exactly on the cap. The cap is clamped to the real token supply, and
/// a non-positive or non-finite cap falls back to the default; a zero
/// `sample_count` is treated as one.
pub fn compute_price_curve_with_cap(
    params: &CurveParameters,
    sample_count: usize,
    max_tokens_cap: f64,
) -> Vec<CurvePoint> {
    let k = params.constant_product();
    let virtual_sol = params.virtual_sol_reserves();
    let virtual_tokens = params.virtual_token_reserves();

    let cap = if max_tokens_cap.is_finite() && max_tokens_cap > 0.0 {
        max_tokens_cap.min(params.real_token_reserves())
    } else {
        params.real_token_reserves().min(CURVE_SAMPLE_CAP)
    };
    let sample_count = sample_count.max(1);

    let mut points = Vec::with_capacity(sample_count + 1);
    points.push(CurvePoint {
        tokens_sold: 0.0,
        price: params.initial_price(),
        sol_required: 0.0,
    });

    let step = cap / sample_count as f64;
    for i in 1..=sample_count {
        let tokens_sold = if i == sample_count { cap } else { step * i as f64 };
        let new_virtual_sol = k / (virtual_tokens - tokens_sold);

        points.push(CurvePoint {
            tokens_sold,
            price: new_virtual_sol / (virtual_tokens - tokens_sold),
            sol_required: new_virtual_sol - virtual_sol,
        });
    }

    points
}

/// Instantaneous marginal price after `tokens_sold` tokens have left the
/// curve: `k / (virtual_tokens - tokens_sold)^2`. Defined for
/// `0 <= tokens_sold <= real_token_reserves`.
pub fn spot_price(params: &CurveParameters, tokens_sold: f64) -> f64 {
    let remaining = params.virtual_token_reserves() - tokens_sold;
    (params.constant_product() / remaining) / remaining
}

/// Cumulative SOL needed to buy `tokens_sold` tokens from an untouched
/// curve. Defined for `0 <= tokens_sold <= real_token_reserves`.
pub fn sol_required(params: &CurveParameters, tokens_sold: f64) -> f64 {
    params.constant_product() / (params.virtual_token_reserves() - tokens_sold)
        - params.virtual_sol_reserves()
}

/// Headline figures for a parameter set. `total_sol_required` uses the
/// closed form of the invariant and agrees with the schedule's final
/// cumulative total.
pub fn curve_summary(params: &CurveParameters) -> CurveSummary {
    let summary = CurveSummary {
        initial_price: params.initial_price(),
        constant_product: params.constant_product(),
        total_sol_required: sol_required(params, params.real_token_reserves()),
        increment_count: compute_increment_schedule(params).len(),
    };
    debug!(
        "curve summary: k = {:e}, {} increments, {:.4} SOL to clear the supply",
        summary.constant_product, summary.increment_count, summary.total_sol_required
    );
    summary
}
