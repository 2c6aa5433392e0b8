//! Character types a player may choose when joining a game.

/// Every character type the server accepts, in display order.
pub const CHARACTER_TYPES: &[&str] = &[
    "Empire Builder",
    "Merchant",
    "Pirate",
    "Artifact Collector",
    "Berserker",
    "Apostle",
];

/// Returns the first known character type mentioned anywhere in `text`,
/// compared case-insensitively.
#[must_use]
pub fn find_character_type(text: &str) -> Option<&'static str> {
    let haystack = text.to_lowercase();
    CHARACTER_TYPES
        .iter()
        .copied()
        .find(|name| haystack.contains(&name.to_lowercase()))
}
