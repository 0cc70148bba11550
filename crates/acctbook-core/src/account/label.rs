//! Conversion between free-text `;`-delimited label strings and
//! ordered label items.
//!
//! There is no escaping: a literal `;` inside a tag cannot survive a
//! round trip.

use super::types::LabelItem;

const SEPARATOR: char = ';';
const JOINER: &str = "; ";

/// Split `input` on `;`, trim each piece and drop the empty ones.
/// Input order is preserved and duplicates are kept.
pub fn parse_label_to_items(input: &str) -> Vec<LabelItem> {
    input
        .split(SEPARATOR)
        .map(|piece| piece.trim_matches(is_label_whitespace))
        .filter(|piece| !piece.is_empty())
        .map(LabelItem::new)
        .collect()
}

/// Whitespace as label input trims it: the BOM counts, NEL does not.
fn is_label_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

pub fn items_to_label_string(items: &[LabelItem]) -> String {
    items
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>()
        .join(JOINER)
}
