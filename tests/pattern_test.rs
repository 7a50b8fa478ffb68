use forward_extract::*;
use regex::Regex;

fn is_header_value(index: usize) -> bool {
    index % 3 == 2
}

// --- Splitting ---

#[test]
fn test_split_without_groups_round_trips() {
    let re = Regex::new(r"(?m)^-{5} Forwarded -{5}$").unwrap();
    let text = "Hi\n----- Forwarded -----\nA\n----- Forwarded -----\nB";

    let segments = split_with(&re, text);
    assert_eq!(segments.len(), 5);
    assert_eq!(segments.concat(), text);
}

#[test]
fn test_split_without_match_returns_whole_text() {
    let re = Regex::new("nothing").unwrap();
    assert_eq!(split_with(&re, "some text"), vec!["some text"]);
}

#[test]
fn test_split_header_layout() {
    let table = PatternTable::compile("to", &[PatternDef::value(r"(?m)^To:(.+)$")]).unwrap();
    let segments = table.split("From: a\nTo: b@c.com\n\nBody", true);

    assert_eq!(segments, vec!["From: a\n", "To: b@c.com", " b@c.com", "\n\nBody"]);
    assert_eq!(reconcile(&segments, 4, &[3], None), "\n\nBody");
}

#[test]
fn test_reconcile_repeated_headers() {
    let table = PatternTable::compile("from", &[PatternDef::value(r"(?m)^From:(.+)$")]).unwrap();
    let segments = table.split("msg\nFrom: a\nx\nFrom: b\ny", true);

    // [before, line, value, between, line, value, after]
    assert_eq!(segments.len(), 7);
    let merged = reconcile(&segments, 4, &[1, 3], Some(is_header_value));
    assert_eq!(merged, "From: a\nx\nFrom: b\ny");
}

#[test]
fn test_split_first_skips_non_matching_patterns() {
    let patterns = [
        Pattern::compile(&PatternDef::delimiter("zzz")).unwrap(),
        Pattern::compile(&PatternDef::delimiter("--")).unwrap(),
    ];

    assert_eq!(split_first(&patterns, "a--b", false), vec!["a", "--", "b"]);
    assert!(split_first(&patterns, "ab", false).is_empty());
}

// --- Matching ---

#[test]
fn test_find_first_modes() {
    let patterns = [
        Pattern::compile(&PatternDef::value("(second)")).unwrap(),
        Pattern::compile(&PatternDef::value("(first)")).unwrap(),
    ];
    let text = "first then second";

    let by_order = find_first(&patterns, text, false).unwrap();
    assert_eq!(by_order.value(), "second");

    let by_offset = find_first(&patterns, text, true).unwrap();
    assert_eq!(by_offset.value(), "first");
    assert_eq!(by_offset.start(), 0);

    assert!(find_first(&patterns, "none", true).is_none());
}

#[test]
fn test_match_roles() {
    let name_address = Pattern::compile(&PatternDef::new(
        r"^(.+?) <(.+)>$",
        Capture::NameAddress {
            name: 1,
            address: 2,
        },
    ))
    .unwrap();
    let found = name_address.find("John <j@x.com>").unwrap();
    assert_eq!(found.name_and_address(), ("John", "j@x.com"));
    assert_eq!(found.full(), "John <j@x.com>");
    assert_eq!(found.group(7), "");

    let combined = Pattern::compile(&PatternDef::new(
        r"On (?P<date>.+), (?P<from_name>.+) <(?P<from_address>.+)> wrote:",
        Capture::Combined,
    ))
    .unwrap();
    let found = combined.find("On Monday, John <j@x.com> wrote:").unwrap();
    assert_eq!(found.name("date"), "Monday");
    assert_eq!(found.name_and_address(), ("John", "j@x.com"));
    assert_eq!(found.name("missing"), "");
}

#[test]
fn test_strip_removes_first_match_only() {
    let table = PatternTable::compile(
        "subject_lax",
        &[
            PatternDef::value(r"Nothing:(.+)"),
            PatternDef::value(r"(?m)Subject:(.+)$"),
        ],
    )
    .unwrap();

    let text = "Subject: a\nSubject: b\nTo: c";
    assert_eq!(table.strip(text), "\nSubject: b\nTo: c");
    assert_eq!(table.strip("To: c"), "To: c");
}

// --- Configuration ---

#[test]
fn test_builtin_config_round_trips_through_json() {
    let config = PatternConfig::builtin();
    let json = config.to_json().unwrap();

    let decoded = PatternConfig::from_json(&json).unwrap();
    assert_eq!(decoded, config);
    assert!(decoded.compile().is_ok());
}

#[test]
fn test_builtin_tables_are_populated() {
    let set = PatternSet::builtin().unwrap();

    for table in [
        &set.subject,
        &set.separator,
        &set.separator_with_information,
        &set.original_from,
        &set.original_to,
        &set.original_cc,
        &set.original_date,
        &set.mailbox,
    ] {
        assert!(!table.is_empty(), "table {} is empty", table.name());
    }
}

#[test]
fn test_invalid_pattern_reports_table_and_index() {
    let mut config = PatternConfig::builtin();
    config.original_cc.insert(1, PatternDef::value("(unclosed"));

    match config.compile() {
        Err(ConfigError::Pattern { table, index, .. }) => {
            assert_eq!(table, "original_cc");
            assert_eq!(index, 1);
        }
        other => panic!("expected a pattern error, got {other:?}"),
    }
}

#[test]
fn test_empty_mailbox_table_is_rejected() {
    let mut config = PatternConfig::builtin();
    config.mailbox.clear();

    assert!(matches!(config.compile(), Err(ConfigError::EmptyTable("mailbox"))));
}

#[test]
fn test_from_json_missing_tables_are_empty() {
    let json = r#"{
        "subject": [
            {"pattern": "^Fwd:(.*)", "capture": {"kind": "value", "group": 1}}
        ],
        "mailbox": [
            {"pattern": "^(.+?) <(.+?)>", "capture": {"kind": "name_address", "name": 1, "address": 2}}
        ],
        "mailbox_address": [
            {"pattern": "^[^\\s@]+@[^\\s@]+$", "capture": {"kind": "none"}}
        ]
    }"#;

    let config = PatternConfig::from_json(json).unwrap();
    assert_eq!(config.subject.len(), 1);
    assert!(config.separator.is_empty());

    let parser = ForwardParser::from_config(&config).unwrap();
    assert_eq!(parser.parse_subject("Fwd: Hi").as_deref(), Some("Hi"));
    assert_eq!(parser.read("body", "").email, OriginalEmail::default());
}

#[test]
fn test_from_json_rejects_malformed_document() {
    assert!(matches!(PatternConfig::from_json("{"), Err(ConfigError::Json(_))));
}
