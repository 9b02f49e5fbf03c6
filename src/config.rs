use std::env;

use log::warn;

/// Built-in reserve defaults: 30 SOL against 1B virtual tokens.
pub const DEFAULT_VIRTUAL_SOL_RESERVES: f64 = 30.0;
pub const DEFAULT_VIRTUAL_TOKEN_RESERVES: f64 = 1_000_000_000.0;

/// Reserve defaults resolved from the environment.
pub struct CurveDefaults {
    pub virtual_sol_reserves: f64,
    pub virtual_token_reserves: f64,
}

impl CurveDefaults {
    /// Read `VIRTUAL_SOL_RESERVES` and `VIRTUAL_TOKEN_RESERVES`, keeping
    /// the built-in values when a variable is missing or unparsable.
    pub fn load() -> Self {
        CurveDefaults {
            virtual_sol_reserves: parse_reserve(
                "VIRTUAL_SOL_RESERVES",
                env::var("VIRTUAL_SOL_RESERVES").ok(),
                DEFAULT_VIRTUAL_SOL_RESERVES,
            ),
            virtual_token_reserves: parse_reserve(
                "VIRTUAL_TOKEN_RESERVES",
                env::var("VIRTUAL_TOKEN_RESERVES").ok(),
                DEFAULT_VIRTUAL_TOKEN_RESERVES,
            ),
        }
    }
}

fn parse_reserve(name: &str, raw: Option<String>, default: f64) -> f64 {
    match raw {
        Some(value) => match value.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => parsed,
            _ => {
                warn!(
                    "{} is not a valid number ({}), using default {}",
                    name, value, default
                );
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reserve_accepts_numbers() {
        assert_eq!(parse_reserve("X", Some("42.5".to_string()), 1.0), 42.5);
        assert_eq!(parse_reserve("X", Some(" 30 ".to_string()), 1.0), 30.0);
    }

    #[test]
    fn parse_reserve_falls_back_on_missing_or_garbage_input() {
        assert_eq!(parse_reserve("X", None, 30.0), 30.0);
        assert_eq!(parse_reserve("X", Some("plenty".to_string()), 30.0), 30.0);
        assert_eq!(parse_reserve("X", Some("NaN".to_string()), 30.0), 30.0);
        assert_eq!(parse_reserve("X", Some("inf".to_string()), 30.0), 30.0);
    }
}
