use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{
    types::{PlayerDetails, StatKind, DOB_LABELS, POSITION_LABEL},
    utils::element_text,
};

static PERSON_INFO: Lazy<Selector> = Lazy::new(|| Selector::parse(".person-info").unwrap());
static QUICK_FACTS: Lazy<Selector> = Lazy::new(|| Selector::parse(".person-quick-facts").unwrap());
static PERSON_STATS: Lazy<Selector> = Lazy::new(|| Selector::parse(".person-stats").unwrap());
static STATS_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".person-stats-item").unwrap());
static LIST_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li").unwrap());
static LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

pub fn parse_details(html: &str) -> PlayerDetails {
    extract_details(&Html::parse_document(html))
}

/// Reads bio, quick facts and season stats from a player page. Anything missing
/// from the markup leaves its field at the default.
pub fn extract_details(document: &Html) -> PlayerDetails {
    let mut details = PlayerDetails::default();

    match document.select(&PERSON_INFO).next() {
        Some(info) => details.bio = extract_bio(&info),
        None => debug!("No person-info container, bio left empty"),
    }

    if let Some(facts) = document.select(&QUICK_FACTS).next() {
        apply_quick_facts(&facts, &mut details);
    }

    if let Some(stats) = document.select(&PERSON_STATS).next() {
        apply_season_stats(&stats, &mut details);
    }

    details
}

fn extract_bio(info: &ElementRef) -> String {
    info.select(&PARAGRAPH)
        .map(|p| element_text(&p))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn apply_quick_facts(facts: &ElementRef, details: &mut PlayerDetails) {
    for item in facts.select(&LIST_ITEM) {
        let (Some(label), Some(value)) = (item.select(&LABEL).next(), item.select(&PARAGRAPH).next()) else {
            continue;
        };
        let label = element_text(&label).to_lowercase();
        let value = element_text(&value);

        if DOB_LABELS.iter().any(|l| label.contains(l)) {
            if details.dob.is_empty() {
                details.dob = value;
            }
        } else if label.contains(POSITION_LABEL) && details.position.is_empty() {
            details.position = value;
        }
    }
}

fn apply_season_stats(stats: &ElementRef, details: &mut PlayerDetails) {
    for item in stats.select(&STATS_ITEM) {
        let (Some(key), Some(value)) = (item.value().attr("data-stats-type"), item.select(&PARAGRAPH).next()) else {
            continue;
        };
        let Some(kind) = StatKind::from_key(key) else {
            continue;
        };

        let text = element_text(&value);
        match text.parse::<i32>() {
            Ok(number) => details.set_stat(kind, number),
            Err(_) => debug!("Ignoring non-integer {} stat: {:?}", key, text),
        }
    }
}
