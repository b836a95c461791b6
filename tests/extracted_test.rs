use bounce_fields::*;

#[test]
fn test_extract_postfix_diagnostic() {
    let text = "host mx.example.jp[192.0.2.1] said: 550 5.1.1 <neko@example.jp>... \
                User Unknown (in reply to RCPT TO command)";
    let found = Diagnostics::extract(text);

    assert_eq!(found.reply.as_ref().map(ReplyCode::as_str), Some("550"));
    assert_eq!(found.status.as_ref().map(StatusCode::as_str), Some("5.1.1"));
    assert_eq!(found.command.as_deref(), Some("RCPT"));
    assert_eq!(found.hostname.as_deref(), Some("mx.example.jp"));
    assert_eq!(found.field_count(), 4);
    assert!(!found.is_empty());
}

#[test]
fn test_extract_status_follows_reply_class() {
    let found = Diagnostics::extract("421 4.7.0 Try again later, 5.7.1 was logged");
    assert_eq!(found.reply.as_ref().map(ReplyCode::as_str), Some("421"));
    assert_eq!(found.status.as_ref().map(StatusCode::as_str), Some("4.7.0"));
}

#[test]
fn test_extract_nothing() {
    assert!(Diagnostics::extract("").is_empty());

    let found = Diagnostics::extract("User unknown");
    assert!(found.is_empty());
    assert_eq!(found.field_count(), 0);
}

#[test]
fn test_diagnostics_serde() {
    let found = Diagnostics::extract("smtp; 550 5.2.2 Mailbox full");
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["status"], "5.2.2");
    assert_eq!(json["reply"], "550");
    assert!(json["command"].is_null());

    let back: Diagnostics = serde_json::from_value(json).unwrap();
    assert_eq!(back, found);
}
