use std::collections::HashSet;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{
    names,
    types::{PlayerCandidate, POSITION_CATEGORIES},
    utils::{contains_any_ignore_case, element_text},
};

const SECTION_HEADING: &str = "h2";

// Headings and links in a single selector so they come back interleaved in document order.
static ROSTER_NODES: Lazy<Selector> = Lazy::new(|| Selector::parse("h2, a[href]").unwrap());
static IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

pub struct RosterExtractor {
    listing_url: String,
    roster_path: String,
}

impl RosterExtractor {
    pub fn new(listing_url: &str, roster_path: &str) -> Self {
        Self {
            listing_url: listing_url.to_string(),
            roster_path: roster_path.to_string(),
        }
    }

    pub fn parse(&self, html: &str) -> Vec<PlayerCandidate> {
        self.extract(&Html::parse_document(html))
    }

    pub fn extract(&self, document: &Html) -> Vec<PlayerCandidate> {
        let mut current_position = String::new();
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for element in document.select(&ROSTER_NODES) {
            if element.value().name() == SECTION_HEADING {
                let heading = element_text(&element);
                if contains_any_ignore_case(&heading, &POSITION_CATEGORIES) {
                    current_position = heading;
                }
                continue;
            }

            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !self.is_player_link(href) {
                continue;
            }

            let Some(candidate) = candidate_from_anchor(&element, href, &current_position) else {
                debug!("Skipping player link without a usable name: {}", href);
                continue;
            };

            if seen.insert(candidate.details_url.clone()) {
                candidates.push(candidate);
            }
        }

        candidates
    }

    fn is_player_link(&self, href: &str) -> bool {
        href.contains(&self.roster_path) && href != self.listing_url
    }
}

fn candidate_from_anchor(anchor: &ElementRef, href: &str, position: &str) -> Option<PlayerCandidate> {
    let (name, number) = names::resolve(anchor);
    if name.chars().count() <= 2 {
        return None;
    }

    Some(PlayerCandidate {
        name,
        number,
        image_url: image_url(anchor),
        details_url: href.to_string(),
        position_category: position.to_string(),
    })
}

/// `src` of the first image, falling back to the lazy-load `data-src`.
fn image_url(anchor: &ElementRef) -> String {
    anchor
        .select(&IMAGE)
        .next()
        .and_then(|img| {
            let img = img.value();
            img.attr("src")
                .filter(|src| !src.is_empty())
                .or_else(|| img.attr("data-src"))
        })
        .unwrap_or_default()
        .to_string()
}
