//! Recovers a player's name and squad number from a listing anchor.
//!
//! Name lookups run as an ordered list of strategies; the first that yields a
//! value wins. The number comes from its own marker when present, otherwise it
//! is split off the end of whatever name was found.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::utils::{element_text, joined_text, split_trailing_number};

static PERSON_NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(".person-name").unwrap());
static PERSON_NUMBER: Lazy<Selector> = Lazy::new(|| Selector::parse(".person-number").unwrap());
static NAME_LIKE: Lazy<Selector> = Lazy::new(|| Selector::parse("span[class], h3[class], p[class]").unwrap());

type NameStrategy = fn(&ElementRef) -> Option<String>;

const NAME_STRATEGIES: [NameStrategy; 3] = [marked_name, class_hinted_name, anchor_text];

fn marked_name(anchor: &ElementRef) -> Option<String> {
    anchor.select(&PERSON_NAME).next().map(|el| element_text(&el))
}

fn class_hinted_name(anchor: &ElementRef) -> Option<String> {
    anchor
        .select(&NAME_LIKE)
        .find(|el| {
            el.value()
                .attr("class")
                .is_some_and(|class| class.to_lowercase().contains("name"))
        })
        .map(|el| element_text(&el))
}

fn anchor_text(anchor: &ElementRef) -> Option<String> {
    Some(joined_text(anchor))
}

fn marked_number(anchor: &ElementRef) -> Option<String> {
    anchor.select(&PERSON_NUMBER).next().map(|el| element_text(&el))
}

/// Returns `(name, number)` for an anchor subtree. `number` is empty when none was found.
pub fn resolve(anchor: &ElementRef) -> (String, String) {
    let name = NAME_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(anchor))
        .unwrap_or_default();

    match marked_number(anchor) {
        Some(number) => (name, number),
        None => {
            let (name, number) = split_trailing_number(&name);
            (name, number.unwrap_or_default())
        }
    }
}
