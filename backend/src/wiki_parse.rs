//! Section state machine and line extractors for one wiki "day article".
//!
//! The article is a plain wikitext body using three heading levels:
//! `== Section ==`, `=== Subsection ===` and `==== Sub-group ====`. The
//! scanner walks it line by line, level-1 headings pick the active extractor
//! (holidays, name-days via delegation, omens) and every other non-blank line
//! is routed to it. Lines under unrecognized sections are dropped.

use crate::denominations::{DENOMINATION_RULES, RE_APOSTLE, RE_CONTINUATION_NOTE, RE_MEMORIAL};
use crate::helpers::{trim_entry, trim_omen, trim_split_remainder};
use crate::logger::{error, warn};
use crate::types::{DayReport, ParseError, ReligiousHolidayGroup};

const HOLIDAYS_HEADER: &str = "Праздники и памятные дни";
const HOLIDAYS_HEADER_SHORT: &str = "Праздники";

const IGNORED_HEADERS: [&str; 3] = ["События", "Родились", "Скончались"];

const OMEN_HEADERS: [&str; 5] = [
    "Приметы",
    "Народный календарь",
    "Народный календарь и приметы",
    "Народный календарь, приметы",
    "Народный календарь, приметы и фольклор Руси",
];

const INT_HOLIDAYS_SUBHEADER: &str = "Международные";
const LOC_HOLIDAYS_SUBHEADER: &str = "Национальные";
const PROF_HOLIDAYS_SUBHEADER: &str = "Профессиональные";
const RLG_HOLIDAYS_SUBHEADER: &str = "Религиозные";
const NAMEDAYS_SUBHEADER: &str = "Именины";

const SEE_ALSO_PREFIX: &str = "См. также:";
const CHRISTIAN_LABEL: &str = "Христианские";

const NAMEDAYS_ALSO_MARKER: &str = "также:";
const NAMEDAYS_DERIVATIVES_MARKER: &str = "и производные:";

/// Which of the report's sequences content lines are currently appended to.
/// `Religious` holds an index into `DayReport::holidays_rlg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    International,
    Local,
    Professional,
    Religious(usize),
    NameDays,
    Omens,
}

/// The active line handler, switched by level-1 headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    None,
    Holidays,
    NameDays,
    Omens,
}

struct Parser {
    report: DayReport,
    header: String,
    subheader: String,
    target: Option<Target>,
    mode: Mode,
}

/// Parses a full article body into a [`DayReport`].
///
/// Fails only on an empty input string. Structural anomalies (unknown
/// sections, lines with no resolvable destination) are logged and skipped.
pub fn parse(article: &str) -> Result<DayReport, ParseError> {
    if article.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser::new();

    for line in article.lines() {
        if line.starts_with("== ") && line.ends_with(" ==") {
            let header = line.trim_matches('=').trim();
            match header {
                HOLIDAYS_HEADER | HOLIDAYS_HEADER_SHORT => {
                    parser.set_header(header, Mode::Holidays);
                }
                h if IGNORED_HEADERS.contains(&h) => parser.reset(),
                h if OMEN_HEADERS.contains(&h) => parser.set_header(h, Mode::Omens),
                h => {
                    parser.reset();
                    warn(&format!("Unrecognized section: {}", h));
                }
            }
        } else if line.starts_with("=== ") && line.ends_with(" ===") {
            parser.set_subheader(line.trim_matches('='));
        } else if line.starts_with("==== ") && line.ends_with(" ====") {
            // Sub-group headings carry content, not structure. Feed the title
            // to the active extractor as an ordinary line.
            let content = line.trim_matches('=');
            if parser.mode == Mode::None {
                warn(&format!("Sub-group heading outside any section: {}", content.trim()));
            } else {
                parser.handle_line(content);
            }
        } else if line.is_empty() {
            continue;
        } else if parser.mode != Mode::None {
            parser.handle_line(line.trim());
        }
    }

    Ok(parser.report)
}

impl Parser {
    fn new() -> Self {
        Parser {
            report: DayReport::default(),
            header: String::new(),
            subheader: String::new(),
            target: None,
            mode: Mode::None,
        }
    }

    fn reset(&mut self) {
        self.header.clear();
        self.subheader.clear();
        self.target = None;
        self.mode = Mode::None;
    }

    fn set_header(&mut self, header: &str, mode: Mode) {
        self.header = header.to_string();
        self.subheader.clear();
        self.target = None;
        self.mode = mode;
    }

    fn set_subheader(&mut self, subheader: &str) {
        self.subheader = subheader.trim().to_string();
        self.target = None;
    }

    fn handle_line(&mut self, line: &str) {
        match self.mode {
            Mode::Holidays => self.handle_holidays(line),
            Mode::NameDays => self.handle_namedays(line),
            Mode::Omens => self.handle_omens(line),
            Mode::None => {}
        }
    }

    fn append(&mut self, target: Target, line: &str) {
        match target {
            Target::International => self.report.holidays_int.push(line.to_string()),
            Target::Local => self.report.holidays_loc.push(line.to_string()),
            Target::Professional => self.report.holidays_prof.push(line.to_string()),
            Target::Religious(i) => self.report.holidays_rlg[i].descriptions.push(line.to_string()),
            Target::NameDays => self.report.name_days.push(line.to_string()),
            Target::Omens => self.report.omens.push(line.to_string()),
        }
    }

    /// One content line under the holidays section.
    ///
    /// With no subheader set the line lands in the international bucket.
    /// Under a known subheader the target is resolved once per subsection;
    /// the name-day subheader hands the rest of the subsection over to the
    /// name-day extractor. The religious subheader runs each line through
    /// the denomination classifier first.
    fn handle_holidays(&mut self, line: &str) {
        let mut line = trim_entry(line).to_string();
        if line.starts_with(SEE_ALSO_PREFIX) {
            return;
        }
        if self.subheader.is_empty() {
            self.append(Target::International, &line);
            return;
        }
        if self.target.is_none() && self.subheader != RLG_HOLIDAYS_SUBHEADER {
            match self.subheader.as_str() {
                INT_HOLIDAYS_SUBHEADER => self.target = Some(Target::International),
                LOC_HOLIDAYS_SUBHEADER => self.target = Some(Target::Local),
                PROF_HOLIDAYS_SUBHEADER => self.target = Some(Target::Professional),
                NAMEDAYS_SUBHEADER => {
                    self.mode = Mode::NameDays;
                    self.handle_namedays(&line);
                    return;
                }
                _ => {
                    // Noise subsection. Forget it so following lines take the
                    // no-subheader path.
                    self.subheader.clear();
                    return;
                }
            }
        } else if self.subheader == RLG_HOLIDAYS_SUBHEADER {
            if line == CHRISTIAN_LABEL {
                return;
            }
            line = self.classify_denomination(line);
            if RE_MEMORIAL.is_match(&line) && !RE_APOSTLE.is_match(&line) {
                return;
            }
        }
        let Some(target) = self.target else {
            error(&format!(
                "No output target under '{}' / '{}' for line: {}",
                self.header, self.subheader, line
            ));
            return;
        };
        if line.is_empty() {
            return;
        }
        self.append(target, &line);
    }

    /// Runs the ordered rule cascade over the line, opening a new report
    /// group for every denomination header found and routing the text between
    /// headers to whichever group was open before it. Returns the text left
    /// over for the caller to append under the final target.
    fn classify_denomination(&mut self, mut line: String) -> String {
        'scan: loop {
            if let Some(m) = RE_CONTINUATION_NOTE.find(&line) {
                let (start, end) = (m.start(), m.end());
                line = self.split_at_header(&line, start, end, None);
                continue;
            }
            for rule in DENOMINATION_RULES.iter() {
                if let Some(m) = rule.pattern.find(&line) {
                    self.report.holidays_rlg.push(ReligiousHolidayGroup {
                        group_abbr: rule.abbr.to_string(),
                        descriptions: Vec::new(),
                    });
                    let idx = self.report.holidays_rlg.len() - 1;
                    let (start, end) = (m.start(), m.end());
                    line = self.split_at_header(&line, start, end, Some(Target::Religious(idx)));
                    continue 'scan;
                }
            }
            break;
        }
        if self.target.is_none() && !line.is_empty() {
            // Unclassified block: lines accumulate under an unlabeled group
            // until the next denomination header.
            self.report.holidays_rlg.push(ReligiousHolidayGroup::default());
            self.target = Some(Target::Religious(self.report.holidays_rlg.len() - 1));
        }
        line
    }

    /// Cuts the matched header out of the line. A match at the start only
    /// re-targets; a mid-line match first routes the prefix back through the
    /// holiday extractor against the previous target, then re-targets for the
    /// remainder.
    fn split_at_header(
        &mut self,
        line: &str,
        start: usize,
        end: usize,
        new_target: Option<Target>,
    ) -> String {
        if start > 0 {
            let prefix = line[..start].to_string();
            self.handle_holidays(&prefix);
        }
        if let Some(t) = new_target {
            self.target = Some(t);
        }
        trim_split_remainder(&line[end..]).to_string()
    }

    /// One content line under the name-day subsection.
    fn handle_namedays(&mut self, line: &str) {
        let line = trim_entry(line);
        if let Some((first, second)) = line.split_once(NAMEDAYS_ALSO_MARKER) {
            for part in [first, second] {
                let part = part.trim();
                if !part.is_empty() {
                    self.append(Target::NameDays, part);
                }
            }
            return;
        }
        // The derivative-forms list after the marker is not captured.
        let line = match line.split_once(NAMEDAYS_DERIVATIVES_MARKER) {
            Some((before, _)) => before,
            None => line,
        };
        self.append(Target::NameDays, line.trim());
    }

    /// One content line under an omen section. The opening line of the list
    /// carries several sentence-delimited omens; later lines are one omen
    /// each, possibly with a leading bullet.
    fn handle_omens(&mut self, line: &str) {
        let target = *self.target.get_or_insert(Target::Omens);

        if self.report.omens.is_empty() {
            for part in line.split('.') {
                let part = trim_omen(part);
                if !part.is_empty() {
                    self.append(target, part);
                }
            }
        } else {
            let line = line.replace("* ", "");
            let line = trim_omen(&line);
            if !line.is_empty() {
                self.append(target, line);
            }
        }
    }
}
