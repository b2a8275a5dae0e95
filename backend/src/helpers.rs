//! Text cleanup helpers shared by the extractors.

/// Characters trimmed from both ends of holiday and name-day lines.
const ENTRY_TRIM: &[char] = &['.', ';', '—', ' '];

/// Characters trimmed from both ends of omen fragments.
const OMEN_TRIM: &[char] = &['…', ',', '.', ' '];

/// Separator characters left over at a fragment edge after a denomination
/// header has been cut out of a line.
const SPLIT_REMAINDER_TRIM: &[char] = &[':', '—', ' '];

pub fn trim_entry(line: &str) -> &str {
    line.trim_matches(ENTRY_TRIM)
}

pub fn trim_omen(line: &str) -> &str {
    line.trim_matches(OMEN_TRIM)
}

pub fn trim_split_remainder(line: &str) -> &str {
    line.trim_start_matches(SPLIT_REMAINDER_TRIM)
}
