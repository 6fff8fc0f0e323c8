//! Strategy inputs and the comma-list normalizer.
//!
//! Every list-valued field of [`StrategyInput`] is stored as the raw text the
//! user typed; consumers call [`normalize_list`] (or the typed accessors) at
//! the point of use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Upper bound on the number of entries [`normalize_list`] returns.
pub const MAX_LIST_ITEMS: usize = 12;

/// Split a comma-separated field into trimmed, non-empty tokens.
///
/// Order is preserved and at most [`MAX_LIST_ITEMS`] entries are kept.
/// Malformed input never errors; it simply yields fewer tokens.
pub fn normalize_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_LIST_ITEMS)
        .map(str::to_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Brand voice used for the caption opening line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
    Humorous,
    Inspirational,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Friendly,
        Tone::Professional,
        Tone::Humorous,
        Tone::Inspirational,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Professional => "professional",
            Self::Humorous => "humorous",
            Self::Inspirational => "inspirational",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ToneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "friendly" => Ok(Self::Friendly),
            "professional" => Ok(Self::Professional),
            "humorous" => Ok(Self::Humorous),
            "inspirational" => Ok(Self::Inspirational),
            _ => Err(ToneParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Tone`] string.
#[derive(Debug, Clone, Error)]
#[error("invalid tone {0:?} (expected friendly, professional, humorous, or inspirational)")]
pub struct ToneParseError(pub String);

// ---------------------------------------------------------------------------
// StrategyInput
// ---------------------------------------------------------------------------

/// Marketing inputs that drive plan generation and enrichment.
///
/// Serialized with camelCase keys (`postsPerWeek`, `brandKeywords`) so the
/// persisted blob matches the planner's storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyInput {
    pub niche: String,
    pub audience: String,
    pub tone: Tone,
    /// Requested cadence as entered. Clamped to 1..=7 only when a plan is
    /// generated, never rejected.
    #[serde(deserialize_with = "lenient_posts_per_week")]
    pub posts_per_week: i64,
    /// Comma-separated content pillars.
    pub pillars: String,
    pub brand_keywords: String,
    pub offers: String,
    pub ctas: String,
}

impl StrategyInput {
    pub const DEFAULT_POSTS_PER_WEEK: i64 = 4;
    pub const DEFAULT_PILLARS: &str = "Education, Inspiration, Behind the scenes, Sales";
    pub const DEFAULT_CTAS: &str = "Save for later, Comment your thoughts, Share with a friend";

    /// Cadence clamped to the supported 1..=7 posts per week.
    pub fn clamped_posts_per_week(&self) -> u32 {
        self.posts_per_week.clamp(1, 7) as u32
    }

    pub fn pillar_list(&self) -> Vec<String> {
        normalize_list(&self.pillars)
    }

    pub fn keyword_list(&self) -> Vec<String> {
        normalize_list(&self.brand_keywords)
    }

    pub fn offer_list(&self) -> Vec<String> {
        normalize_list(&self.offers)
    }

    pub fn cta_list(&self) -> Vec<String> {
        normalize_list(&self.ctas)
    }
}

impl Default for StrategyInput {
    fn default() -> Self {
        Self {
            niche: String::new(),
            audience: String::new(),
            tone: Tone::default(),
            posts_per_week: Self::DEFAULT_POSTS_PER_WEEK,
            pillars: Self::DEFAULT_PILLARS.to_owned(),
            brand_keywords: String::new(),
            offers: String::new(),
            ctas: Self::DEFAULT_CTAS.to_owned(),
        }
    }
}

/// Parse a free-text cadence value.
///
/// Integers parse as-is, finite decimals are truncated, and anything else
/// maps to `1`, the bottom of the supported range.
pub fn parse_posts_per_week(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 1,
    }
}

fn lenient_posts_per_week<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawCount::deserialize(deserializer)? {
        RawCount::Int(n) => n,
        RawCount::Float(f) if f.is_finite() => f.trunc() as i64,
        RawCount::Float(_) | RawCount::Other(_) => 1,
        RawCount::Text(s) => parse_posts_per_week(&s),
    })
}

// ---------------------------------------------------------------------------
// InputEdit
// ---------------------------------------------------------------------------

/// A partial update to [`StrategyInput`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputEdit {
    pub niche: Option<String>,
    pub audience: Option<String>,
    pub tone: Option<Tone>,
    pub posts_per_week: Option<i64>,
    pub pillars: Option<String>,
    pub brand_keywords: Option<String>,
    pub offers: Option<String>,
    pub ctas: Option<String>,
}

impl InputEdit {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the edit in place.
    pub fn apply(self, input: &mut StrategyInput) {
        if let Some(v) = self.niche {
            input.niche = v;
        }
        if let Some(v) = self.audience {
            input.audience = v;
        }
        if let Some(v) = self.tone {
            input.tone = v;
        }
        if let Some(v) = self.posts_per_week {
            input.posts_per_week = v;
        }
        if let Some(v) = self.pillars {
            input.pillars = v;
        }
        if let Some(v) = self.brand_keywords {
            input.brand_keywords = v;
        }
        if let Some(v) = self.offers {
            input.offers = v;
        }
        if let Some(v) = self.ctas {
            input.ctas = v;
        }
    }
}
