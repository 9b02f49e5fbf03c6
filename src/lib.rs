//! Pricing model for a pump.fun-style constant-product bonding curve.
//!
//! A token sale priced by `x * y = k` over virtual SOL and virtual token
//! reserves, with a fixed 800M real supply available for sale. The model
//! derives two sequences from a validated [`models::CurveParameters`]:
//! the per-increment cost schedule
//! ([`utils::bonding_curve::compute_increment_schedule`]) and the sampled
//! price/cost curve ([`utils::bonding_curve::compute_price_curve`]).
//! Everything is pure and synchronous; presentation (tables, charts,
//! display scaling) belongs to the binaries consuming this crate.

pub mod config;
pub mod models;
pub mod utils;
