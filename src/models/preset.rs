use serde::Serialize;

use crate::models::curve::CurveParameters;
use crate::models::error::CurveError;

/// Named `(virtual_sol, virtual_tokens)` bundle, applied atomically so
/// the curve never passes through a half-edited state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub label: &'static str,
    pub virtual_sol_reserves: f64,
    pub virtual_token_reserves: f64,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "1b",
        label: "1B tokens",
        virtual_sol_reserves: 30.0,
        virtual_token_reserves: 1_000_000_000.0,
    },
    Preset {
        name: "10b",
        label: "10B tokens",
        virtual_sol_reserves: 300.0,
        virtual_token_reserves: 10_000_000_000.0,
    },
    Preset {
        name: "large",
        label: "Large reserves",
        virtual_sol_reserves: 3000.0,
        virtual_token_reserves: 100_000_000_000.0,
    },
    Preset {
        name: "900m",
        label: "900M tokens",
        virtual_sol_reserves: 30.0,
        virtual_token_reserves: 900_000_000.0,
    },
    Preset {
        name: "850m",
        label: "850M tokens",
        virtual_sol_reserves: 30.0,
        virtual_token_reserves: 850_000_000.0,
    },
    Preset {
        name: "801m",
        label: "801M tokens",
        virtual_sol_reserves: 30.0,
        virtual_token_reserves: 801_000_000.0,
    },
];

impl Preset {
    pub fn parameters(&self) -> Result<CurveParameters, CurveError> {
        CurveParameters::new(self.virtual_sol_reserves, self.virtual_token_reserves)
    }
}

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_builds_valid_parameters() {
        for preset in PRESETS {
            assert!(
                preset.parameters().is_ok(),
                "preset {} should be valid",
                preset.name
            );
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find_preset("1B").unwrap().name, "1b");
        assert_eq!(find_preset("LARGE").unwrap().label, "Large reserves");
        assert!(find_preset("unknown").is_none());
    }
}
