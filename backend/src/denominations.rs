//! Classifier rules for the religious-holidays subsection.
//!
//! The article format opens each denomination block with a header phrase,
//! sometimes on its own line, sometimes glued to the tail of the previous
//! block's text. The rules below recognize those phrases. Order matters: the
//! rules are tried top to bottom and the first match wins.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leap-year remark or a parenthesized cross-reference to another date.
    /// Continuation of whatever group is already open, never opens a new one.
    pub static ref RE_CONTINUATION_NOTE: Regex = Regex::new(
        "Примечание: указано для невисокосных лет, в високосные годы список иной, см. \\d+ .*?\\.|\\(.*, см. \\d+ .*?\\)"
    ).unwrap();

    /// Commemoration lines: generic "память ..." entries are noise in this
    /// format, apostolic ones are kept.
    pub static ref RE_MEMORIAL: Regex = Regex::new("^[Пп]амять .*").unwrap();
    pub static ref RE_APOSTLE: Regex = Regex::new("память апостол.*").unwrap();
}

/// One group-opening rule: the header pattern and the short label the new
/// group is tagged with. The label is empty for the combined other-faiths
/// rule; those groups stay unlabeled in the report.
pub struct DenominationRule {
    pub abbr: &'static str,
    pub pattern: Regex,
}

lazy_static! {
    pub static ref DENOMINATION_RULES: Vec<DenominationRule> = vec![
        DenominationRule {
            abbr: "правосл.",
            pattern: Regex::new(
                "Православ(ие|ные)( (\\(|.*)Русская Православная Церковь(\\)|.*))?|В .*[Пп]равосл.* церкв(и|ях):?|(\\(|.*)Русская Православная Церковь(\\)|.*)"
            ).unwrap(),
        },
        DenominationRule {
            abbr: "катол.",
            pattern: Regex::new(
                "Католи(цизм|ческие|чество)|В [Кк]атолич.* церкв(и|ях)"
            ).unwrap(),
        },
        // Minor religions and the Slavic-holidays label, kept as one rule.
        DenominationRule {
            abbr: "",
            pattern: Regex::new(
                "Зороастризм|Другие конфессии|В католичестве и протестантстве|:?Славянские праздники:?|Ислам(ские|.?)|В Древневосточных церквях|Буддизм"
            ).unwrap(),
        },
        DenominationRule {
            abbr: "бахаи",
            pattern: Regex::new("Бахаи").unwrap(),
        },
    ];
}
