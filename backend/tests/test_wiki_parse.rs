use wikiday_backend::types::{DayReport, ParseError};
use wikiday_backend::wiki_parse::parse;

#[test]
fn test_empty_input_fails() {
    assert_eq!(parse(""), Err(ParseError::EmptyInput));
}

#[test]
fn test_whitespace_only_input_succeeds() {
    let report = parse("\n\n").expect("non-empty input must not fail");
    assert_eq!(report, DayReport::default());
}

#[test]
fn test_no_subheader_defaults_to_international() {
    let text = "\
== Праздники и памятные дни ==
Всемирный день приветствий.
День народного единства";

    let report = parse(text).unwrap();
    assert_eq!(
        report.holidays_int,
        vec!["Всемирный день приветствий", "День народного единства"]
    );
    assert!(report.holidays_loc.is_empty());
}

#[test]
fn test_short_holidays_header_recognized() {
    let text = "\
== Праздники ==
Всемирный день театра";

    let report = parse(text).unwrap();
    assert_eq!(report.holidays_int, vec!["Всемирный день театра"]);
}

#[test]
fn test_subheader_routing() {
    let text = "\
== Праздники и памятные дни ==
=== Международные ===
Всемирный день музеев.
=== Национальные ===
День геолога — Россия;
=== Профессиональные ===
День работников торговли";

    let report = parse(text).unwrap();
    assert_eq!(report.holidays_int, vec!["Всемирный день музеев"]);
    assert_eq!(report.holidays_loc, vec!["День геолога — Россия"]);
    assert_eq!(report.holidays_prof, vec!["День работников торговли"]);
}

#[test]
fn test_see_also_line_dropped() {
    let text = "\
== Праздники и памятные дни ==
См. также: Категория:Праздники по дням.
Всемирный день воды";

    let report = parse(text).unwrap();
    assert_eq!(report.holidays_int, vec!["Всемирный день воды"]);
}

#[test]
fn test_unknown_subheader_cleared_and_line_dropped() {
    let text = "\
== Праздники и памятные дни ==
=== Чепуха ===
первая строка под чепухой
вторая строка";

    let report = parse(text).unwrap();
    // The first line under the unknown subheader is dropped and clears the
    // subheader, so the second one falls back to the international bucket.
    assert_eq!(report.holidays_int, vec!["вторая строка"]);
}

#[test]
fn test_ignored_sections_deactivate_handler() {
    let text = "\
== Праздники и памятные дни ==
День авиации
== События ==
1900 — что-то случилось.
== Родились ==
Кто-то известный
== Праздники ==
День флота";

    let report = parse(text).unwrap();
    assert_eq!(report.holidays_int, vec!["День авиации", "День флота"]);
}

#[test]
fn test_unrecognized_section_drops_content() {
    let text = "\
== Ссылки ==
какая-то строка";

    let report = parse(text).unwrap();
    assert_eq!(report, DayReport::default());
}

#[test]
fn test_subgroup_heading_fed_as_content() {
    let text = "\
== Праздники и памятные дни ==
=== Национальные ===
==== Городские ====
День города";

    let report = parse(text).unwrap();
    assert_eq!(report.holidays_loc, vec!["Городские", "День города"]);
}

#[test]
fn test_namedays_subheader_delegates() {
    let text = "\
== Праздники и памятные дни ==
=== Именины ===
Иван.
Пётр и производные: Петра";

    let report = parse(text).unwrap();
    assert_eq!(report.name_days, vec!["Иван", "Пётр"]);
}

#[test]
fn test_full_article_buckets_in_order() {
    let text = "\
== Праздники и памятные дни ==
Всемирный день мира.

=== Национальные ===
День знаний — Россия.
День знаний — Белоруссия.

=== Именины ===
Андрей, Фёкла.

== События ==
1939 — что-то случилось.

== Приметы ==
Гром в сентябре — тёплая осень. Много желудей — к лютой зиме.
* Журавли летят высоко — к хорошей погоде";

    let report = parse(text).unwrap();
    assert_eq!(report.holidays_int, vec!["Всемирный день мира"]);
    assert_eq!(
        report.holidays_loc,
        vec!["День знаний — Россия", "День знаний — Белоруссия"]
    );
    assert_eq!(report.name_days, vec!["Андрей, Фёкла"]);
    assert_eq!(
        report.omens,
        vec![
            "Гром в сентябре — тёплая осень",
            "Много желудей — к лютой зиме",
            "Журавли летят высоко — к хорошей погоде",
        ]
    );
}

#[test]
fn test_report_json_field_names() {
    let text = "\
== Праздники и памятные дни ==
День печати";

    let report = parse(text).unwrap();
    let json = report.as_json_string().unwrap();
    assert!(json.contains("\"holidays_int\""), "got: {}", json);
    assert!(json.contains("\"name_days\""), "got: {}", json);
    assert!(json.contains("\"omens\""), "got: {}", json);
}
