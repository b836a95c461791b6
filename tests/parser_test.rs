use bounce_fields::{parser, ParseError};

const BOUNCE_HEADERS: &[u8] = b"Received: from mx1.example.com (c213502.kyoto.example.ne.jp [192.0.2.135])\r\n\
    \tby mx.example.jp (V8/cf) with ESMTP id 0000000000\r\n\
    \tfor <kijitora@example.jp>; Thu, 29 Apr 2021 23:34:45 +0900\r\n\
Received: from localhost (mail.example.org [192.0.2.1])\r\n\
    \tby mx1.example.com with SMTP id ABC123\r\n\
From: \"Neko\" <bounce+neko=example.jp@example.org>\r\n\
Date: Thu, 29 Apr 2021 23:34:45 +0900\r\n\
Subject: Undelivered Mail Returned to Sender\r\n\
\r\n\
This is the mail system at host mx.example.jp.";

#[test]
fn test_trace() {
    let hops = parser::trace(BOUNCE_HEADERS).unwrap();
    assert_eq!(hops.len(), 2);

    assert_eq!(hops[0].from, "mx1.example.com");
    assert_eq!(hops[0].by, "mx.example.jp");
    assert_eq!(hops[0].with, "esmtp");
    assert_eq!(hops[0].r#for, "kijitora@example.jp");

    assert_eq!(hops[1].from, "mail.example.org");
    assert_eq!(hops[1].by, "mx1.example.com");
    assert_eq!(hops[1].id, "abc123");
}

#[test]
fn test_trace_without_received() {
    let hops = parser::trace(b"From: neko@example.jp\r\n\r\nbody").unwrap();
    assert!(hops.is_empty());
}

#[test]
fn test_originator() {
    let from = parser::originator(BOUNCE_HEADERS).unwrap();
    assert_eq!(from.address, "bounce+neko=example.jp@example.org");
    assert_eq!(from.verp, "neko@example.jp");
    assert_eq!(from.name, "\"Neko\"");
}

#[test]
fn test_originator_errors() {
    let err = parser::originator(b"Subject: test\r\n\r\nbody").unwrap_err();
    assert!(matches!(err, ParseError::MissingHeader(_)));

    let err = parser::originator(b"From: undisclosed-recipients\r\n\r\nbody").unwrap_err();
    assert!(matches!(err, ParseError::NoAddress(_)));
}

#[test]
fn test_date() {
    assert_eq!(
        parser::date(BOUNCE_HEADERS).unwrap(),
        "Thu, 29 Apr 2021 23:34:45 +0900"
    );

    let err = parser::date(b"Date: someday\r\n\r\nbody").unwrap_err();
    assert!(matches!(err, ParseError::InvalidDate(_)));

    let err = parser::date(b"Subject: test\r\n\r\nbody").unwrap_err();
    assert!(matches!(err, ParseError::MissingHeader(_)));
}
