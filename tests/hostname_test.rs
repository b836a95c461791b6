use bounce_fields::hostname::find;

#[test]
fn test_find_postfix_said() {
    assert_eq!(
        find("host mx1.example.com[198.51.100.2] said: 550"),
        "mx1.example.com"
    );
}

#[test]
fn test_find_exim_bracketed_address() {
    assert_eq!(
        find("host mx.example.jp [192.0.2.20]: 550 5.7.0 Blocked"),
        "mx.example.jp"
    );
}

#[test]
fn test_find_sendmail_while_talking() {
    assert_eq!(
        find("550 5.1.1 <neko@example.org>... User Unknown while talking to mx.example.org.:"),
        "mx.example.org"
    );
}

#[test]
fn test_find_end_before_phrase() {
    assert_eq!(
        find("mail-inbound.example.net [192.0.2.25] did not like our DATA: 550 5.7.1"),
        "mail-inbound.example.net"
    );
}

#[test]
fn test_find_start_after_phrase() {
    assert_eq!(
        find("Generating server: mta4.example.org"),
        "mta4.example.org"
    );
}

#[test]
fn test_find_any_token() {
    assert_eq!(
        find("Connection timed out to mail.example.net"),
        "mail.example.net"
    );
    assert_eq!(
        find("mx.example.jp and mail.example.co.jp"),
        "mail.example.co.jp"
    );
}

#[test]
fn test_find_nothing() {
    assert_eq!(find(""), "");
    assert_eq!(find("User unknown"), "");
    assert_eq!(find("connect to 192.0.2.1 failed"), "");
}

#[test]
fn test_find_is_idempotent() {
    let host = find("host mx1.example.com[198.51.100.2] said: 550");
    assert_eq!(find(&host), host);
}
