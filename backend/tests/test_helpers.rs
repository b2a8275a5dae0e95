use wikiday_backend::helpers::{trim_entry, trim_omen, trim_split_remainder};

#[test]
fn test_trim_entry_character_set() {
    assert_eq!(trim_entry("День геолога.; — "), "День геолога");
    assert_eq!(trim_entry("— День труда —"), "День труда");
    // Inner separators stay
    assert_eq!(trim_entry("День А. День Б"), "День А. День Б");
}

#[test]
fn test_trim_entry_is_idempotent() {
    for s in ["День мира.;— ", "…примета", "  уже чистая строка  "] {
        let once = trim_entry(s);
        assert_eq!(trim_entry(once), once, "input: {:?}", s);
    }
}

#[test]
fn test_trim_omen_character_set() {
    assert_eq!(trim_omen("к грибам…,. "), "к грибам");
    assert_eq!(trim_omen("…, год хорош"), "год хорош");
}

#[test]
fn test_trim_omen_is_idempotent() {
    for s in ["к грибам…,. ", "примета", " …примета… "] {
        let once = trim_omen(s);
        assert_eq!(trim_omen(once), once, "input: {:?}", s);
    }
}

#[test]
fn test_trim_split_remainder_strips_leading_only() {
    assert_eq!(trim_split_remainder(": праздник огня"), "праздник огня");
    assert_eq!(trim_split_remainder(" — праздник"), "праздник");
    assert_eq!(trim_split_remainder("праздник: вечер"), "праздник: вечер");
}
