//! Title shrink-to-fit bounds, bucketed by card count.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Card-count ranges used for the title font-size table.
///
/// Serialized with the range keys callers use in override tables (`"1-3"`, `"10+"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleBucket {
    #[serde(rename = "1-3")]
    Few,
    #[serde(rename = "4-6")]
    Several,
    #[serde(rename = "7-9")]
    Many,
    #[serde(rename = "10+")]
    Crowded,
}

impl TitleBucket {
    pub const ALL: [TitleBucket; 4] = [
        TitleBucket::Few,
        TitleBucket::Several,
        TitleBucket::Many,
        TitleBucket::Crowded,
    ];

    /// `n = 0` is grouped with the smallest range.
    pub fn for_count(n: usize) -> Self {
        match n {
            0..=3 => TitleBucket::Few,
            4..=6 => TitleBucket::Several,
            7..=9 => TitleBucket::Many,
            _ => TitleBucket::Crowded,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TitleBucket::Few => "1-3",
            TitleBucket::Several => "4-6",
            TitleBucket::Many => "7-9",
            TitleBucket::Crowded => "10+",
        }
    }

    fn defaults(self) -> TitleFitConfig {
        let (initial, min) = match self {
            TitleBucket::Few => (96, 56),
            TitleBucket::Several => (84, 48),
            TitleBucket::Many => (72, 44),
            TitleBucket::Crowded => (64, 40),
        };
        TitleFitConfig {
            initial_font_size: initial,
            min_font_size: min,
        }
    }
}

impl fmt::Display for TitleBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TitleBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TitleBucket::ALL
            .into_iter()
            .find(|b| b.key() == s.trim())
            .ok_or_else(|| format!("unknown title bucket '{s}'"))
    }
}

/// Pixel bounds for the title shrink-to-fit algorithm. `min_font_size <= initial_font_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleFitConfig {
    pub initial_font_size: u32,
    pub min_font_size: u32,
}

/// One bucket's worth of override values; absent fields keep the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTitleFit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_font_size: Option<u32>,
}

pub type TitleOverrides = HashMap<TitleBucket, PartialTitleFit>;

/// Returns the title-fit bounds for `n` cards.
///
/// Fields present in the matching `overrides` entry replace the default field by
/// field. If an override would put the floor above the starting size, the floor is
/// lowered to the starting size.
pub fn get_standard_title_config(n: usize, overrides: Option<&TitleOverrides>) -> TitleFitConfig {
    let bucket = TitleBucket::for_count(n);
    let mut config = bucket.defaults();

    if let Some(partial) = overrides.and_then(|o| o.get(&bucket)) {
        if let Some(initial) = partial.initial_font_size {
            config.initial_font_size = initial;
        }
        if let Some(min) = partial.min_font_size {
            config.min_font_size = min;
        }
    }

    config.min_font_size = config.min_font_size.min(config.initial_font_size);
    config
}
