//! A single scheduled post and its presentation format.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presentation type of a post. Plan generation cycles through
/// [`PostFormat::CYCLE`] in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostFormat {
    Reel,
    Carousel,
    Single,
    Story,
}

impl PostFormat {
    pub const CYCLE: [PostFormat; 4] = [
        PostFormat::Reel,
        PostFormat::Carousel,
        PostFormat::Single,
        PostFormat::Story,
    ];

    /// Round-robin format for the `seq`-th scheduled post.
    pub fn for_sequence(seq: usize) -> Self {
        Self::CYCLE[seq % Self::CYCLE.len()]
    }

    /// Suffix appended to generated ideas.
    pub fn idea_suffix(self) -> &'static str {
        match self {
            Self::Reel => "(Reel)",
            Self::Carousel => "(5-slide carousel)",
            Self::Single => "(Single post)",
            Self::Story => "(3 stories + 1 poll)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reel => "Reel",
            Self::Carousel => "Carousel",
            Self::Single => "Single",
            Self::Story => "Story",
        }
    }
}

impl fmt::Display for PostFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reel" => Ok(Self::Reel),
            "carousel" => Ok(Self::Carousel),
            "single" => Ok(Self::Single),
            "story" => Ok(Self::Story),
            _ => Err(FormatParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`PostFormat`] string.
#[derive(Debug, Clone, Error)]
#[error("invalid post format {0:?} (expected Reel, Carousel, Single, or Story)")]
pub struct FormatParseError(pub String);

/// One scheduled post.
///
/// `caption` and `hashtags` are filled in together by enrichment; use
/// [`PlanItem::enrich`] rather than setting them separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    /// `"{date}-{seq}"`, unique within a plan.
    pub id: String,
    pub date: NaiveDate,
    pub pillar: String,
    pub format: PostFormat,
    pub idea: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
}

impl PlanItem {
    pub fn new(
        date: NaiveDate,
        seq: usize,
        pillar: impl Into<String>,
        format: PostFormat,
        idea: impl Into<String>,
    ) -> Self {
        Self {
            id: Self::make_id(date, seq),
            date,
            pillar: pillar.into(),
            format,
            idea: idea.into(),
            caption: None,
            hashtags: None,
        }
    }

    /// Build the item id for the `seq`-th post, scheduled on `date`.
    pub fn make_id(date: NaiveDate, seq: usize) -> String {
        format!("{}-{seq}", date.format("%Y-%m-%d"))
    }

    pub fn is_enriched(&self) -> bool {
        self.caption.is_some() && self.hashtags.is_some()
    }

    /// Set caption and hashtags together, replacing any previous pair.
    pub fn enrich(&mut self, caption: String, hashtags: Vec<String>) {
        self.caption = Some(caption);
        self.hashtags = Some(hashtags);
    }

    /// The idea without its trailing parenthesised format hint.
    pub fn headline(&self) -> &str {
        let idea = self.idea.as_str();
        if !idea.ends_with(')') {
            return idea.trim();
        }
        match idea.find('(') {
            Some(pos) => idea[..pos].trim(),
            None => idea.trim(),
        }
    }

    /// Hashtags rendered as `#a #b #c`, or an empty string.
    pub fn hashtag_line(&self) -> String {
        self.hashtags
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|h| format!("#{h}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
