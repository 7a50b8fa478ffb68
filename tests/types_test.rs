use forward_extract::*;

fn mailbox(name: &str, address: &str) -> Mailbox {
    Mailbox {
        name: name.to_string(),
        address: address.to_string(),
    }
}

fn parse_list(list: &str) -> Vec<Mailbox> {
    MailboxParser::new(default_parser().patterns()).parse_list(list)
}

// --- Mailbox ---

#[test]
fn test_mailbox_display() {
    assert_eq!(mailbox("John Doe", "john.doe@acme.com").to_string(), "John Doe <john.doe@acme.com>");
    assert_eq!(mailbox("", "john.doe@acme.com").to_string(), "john.doe@acme.com");
    assert_eq!(mailbox("John Doe", "").to_string(), "John Doe");
    assert_eq!(Mailbox::default().to_string(), "");
}

#[test]
fn test_mailbox_is_empty() {
    assert!(Mailbox::default().is_empty());
    assert!(!mailbox("", "a@b.com").is_empty());
    assert!(!mailbox("A", "").is_empty());
}

// --- prepare_mailbox ---

#[test]
fn test_prepare_mailbox_keeps_valid_address() {
    assert_eq!(
        prepare_mailbox(" John Doe ", " john.doe@acme.com "),
        mailbox("John Doe", "john.doe@acme.com")
    );
}

#[test]
fn test_prepare_mailbox_invalid_address_becomes_name() {
    assert_eq!(prepare_mailbox("", "John Doe"), mailbox("John Doe", ""));
    assert_eq!(prepare_mailbox("ignored", "not an address"), mailbox("not an address", ""));
}

#[test]
fn test_prepare_mailbox_drops_name_equal_to_address() {
    assert_eq!(
        prepare_mailbox("bessie.berry@acme.com", "bessie.berry@acme.com"),
        mailbox("", "bessie.berry@acme.com")
    );
}

#[test]
fn test_prepare_mailbox_empty() {
    assert!(prepare_mailbox("", "").is_empty());
}

// --- Mailbox lists ---

#[test]
fn test_parse_list_named_entries() {
    assert_eq!(
        parse_list("John Doe <john.doe@acme.com>, Bessie Berry <bessie.berry@acme.com>"),
        vec![
            mailbox("John Doe", "john.doe@acme.com"),
            mailbox("Bessie Berry", "bessie.berry@acme.com"),
        ]
    );
}

#[test]
fn test_parse_list_semicolon_separator() {
    assert_eq!(
        parse_list("Walter Sheltan <walter.sheltan@acme.com>; Nicholas <nicholas@globex.corp>"),
        vec![
            mailbox("Walter Sheltan", "walter.sheltan@acme.com"),
            mailbox("Nicholas", "nicholas@globex.corp"),
        ]
    );
}

#[test]
fn test_parse_list_comma_inside_name() {
    assert_eq!(
        parse_list("Bessie, Berry <bessie.berry@acme.com>"),
        vec![mailbox("Bessie, Berry", "bessie.berry@acme.com")]
    );
}

#[test]
fn test_parse_list_quoted_names() {
    assert_eq!(
        parse_list(r#""John Doe" <john.doe@acme.com>, 'Bessie Berry' <bessie.berry@acme.com>"#),
        vec![
            mailbox("John Doe", "john.doe@acme.com"),
            mailbox("Bessie Berry", "bessie.berry@acme.com"),
        ]
    );
}

#[test]
fn test_parse_list_mailto_forms() {
    assert_eq!(
        parse_list("John Doe <mailto:john.doe@acme.com>"),
        vec![mailbox("John Doe", "john.doe@acme.com")]
    );
    assert_eq!(
        parse_list("John Doe <john.doe@acme.com<mailto:john.doe@acme.com>>"),
        vec![mailbox("John Doe", "john.doe@acme.com")]
    );
}

#[test]
fn test_parse_list_bare_addresses() {
    assert_eq!(
        parse_list("walter.sheltan@acme.com, nicholas@globex.corp"),
        vec![
            mailbox("", "walter.sheltan@acme.com"),
            mailbox("", "nicholas@globex.corp"),
        ]
    );
}

#[test]
fn test_parse_list_bracketed_address_only() {
    assert_eq!(
        parse_list("<bessie.berry@acme.com>"),
        vec![mailbox("", "bessie.berry@acme.com")]
    );
    assert_eq!(
        parse_list("[bessie.berry@acme.com]"),
        vec![mailbox("", "bessie.berry@acme.com")]
    );
}

#[test]
fn test_parse_list_unrecognized_remainder_becomes_name() {
    assert_eq!(parse_list("Undisclosed recipients"), vec![mailbox("Undisclosed recipients", "")]);
}

#[test]
fn test_parse_list_empty() {
    assert!(parse_list("").is_empty());
    assert!(parse_list("   ").is_empty());
}

// --- Serialization ---

#[test]
fn test_read_result_deserializes_field_names() {
    let json = r#"{
        "forwarded": true,
        "message": "Hi",
        "email": {
            "body": "Body",
            "from": {"name": "John Doe", "address": "john.doe@acme.com"},
            "to": [],
            "cc": [],
            "subject": "Hello",
            "date": ""
        }
    }"#;

    let result: ReadResult = serde_json::from_str(json).unwrap();
    assert!(result.forwarded);
    assert_eq!(result.email.from, mailbox("John Doe", "john.doe@acme.com"));
    assert!(!result.email.is_empty());
    assert!(OriginalEmail::default().is_empty());
}
