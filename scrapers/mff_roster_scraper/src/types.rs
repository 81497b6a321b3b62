use serde::{Deserialize, Serialize};

/// Heading fragments that mark a positional section on the roster listing.
pub const POSITION_CATEGORIES: [&str; 4] = ["Målvakt", "Försvarare", "Mittfältare", "Anfallare"];

/// Quick-facts label fragments (lowercase) that carry the date of birth.
pub const DOB_LABELS: [&str; 2] = ["född", "födelsedatum"];

pub const POSITION_LABEL: &str = "position";

/// A player entry as it appears on the roster listing, before detail enrichment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerCandidate {
    pub name: String,
    pub number: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub details_url: String,
    pub position_category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDetails {
    pub bio: String,
    pub dob: String,
    pub position: String,
    pub stats_games: i32,
    pub stats_goals: i32,
    pub stats_assists: i32,
    pub stats_yellow: i32,
    pub stats_red: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Games,
    Goals,
    Assists,
    YellowCards,
    RedCards,
}

impl StatKind {
    /// Maps a `data-stats-type` attribute value to a stat, if it is one we track.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "games" => Some(Self::Games),
            "goals" => Some(Self::Goals),
            "assists" => Some(Self::Assists),
            "yellow_cards" => Some(Self::YellowCards),
            "red_cards" => Some(Self::RedCards),
            _ => None,
        }
    }
}

impl PlayerDetails {
    pub fn set_stat(&mut self, kind: StatKind, value: i32) {
        let slot = match kind {
            StatKind::Games => &mut self.stats_games,
            StatKind::Goals => &mut self.stats_goals,
            StatKind::Assists => &mut self.stats_assists,
            StatKind::YellowCards => &mut self.stats_yellow,
            StatKind::RedCards => &mut self.stats_red,
        };
        *slot = value;
    }
}

/// The externally visible player: listing fields with detail fields overlaid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub number: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub details_url: String,
    pub position_category: String,
    pub position: String,
    pub bio: String,
    pub dob: String,
    pub stats_games: i32,
    pub stats_goals: i32,
    pub stats_assists: i32,
    pub stats_yellow: i32,
    pub stats_red: i32,
}

impl PlayerRecord {
    /// Merges a candidate with its detail page, if one was fetched.
    ///
    /// The listing category is authoritative for `position`; the detail page's
    /// quick-facts position only fills it when the listing had none.
    pub fn merge(candidate: PlayerCandidate, details: Option<PlayerDetails>) -> Self {
        let details = details.unwrap_or_default();
        let position = if candidate.position_category.is_empty() {
            details.position
        } else {
            candidate.position_category.clone()
        };

        Self {
            name: candidate.name,
            number: candidate.number,
            image_url: candidate.image_url,
            details_url: candidate.details_url,
            position_category: candidate.position_category,
            position,
            bio: details.bio,
            dob: details.dob,
            stats_games: details.stats_games,
            stats_goals: details.stats_goals,
            stats_assists: details.stats_assists,
            stats_yellow: details.stats_yellow,
            stats_red: details.stats_red,
        }
    }
}

impl From<PlayerCandidate> for PlayerRecord {
    fn from(candidate: PlayerCandidate) -> Self {
        Self::merge(candidate, None)
    }
}
