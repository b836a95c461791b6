//! Address field parsing: `"Name" <user@host> (comment)` into its parts

use crate::strings;
use crate::syntax::{is_comment, is_domain_literal, is_email_address, is_quoted_address};
use crate::types::AddressTriple;

/// Local part names that identify a bounce originator
const DAEMON_NAMES: [&str; 2] = ["mailer-daemon", "postmaster"];

/// Substrings marking a mailer-daemon or postmaster address
const DAEMON_FORMS: [&str; 7] = [
    "mailer-daemon@",
    "(mailer-daemon)",
    "<mailer-daemon>",
    "mailer-daemon ",
    "postmaster@",
    "(postmaster)",
    "<postmaster>",
];

/// Wrapping characters removed from an address that is not a domain literal
const ADDRESS_WRAPPERS: [char; 10] = ['[', ']', '{', '}', '(', ')', '`', '\'', ';', '.'];

/// Buffer the next ordinary character is appended to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// Outside any construct; text is part of the display name
    None,
    Address,
    /// Inside a quoted display name
    Quoted,
    Comment,
}

/// Constructs currently open at the cursor
#[derive(Debug, Default, Clone, Copy)]
struct Contexts {
    angle_address: bool,
    quoted_string: bool,
    comment_block: bool,
}

#[derive(Debug)]
struct FieldParser {
    address: String,
    name: String,
    comment: String,
    open: Contexts,
    target: Target,
}

impl FieldParser {
    fn new() -> Self {
        Self {
            address: String::with_capacity(32),
            name: String::with_capacity(32),
            comment: String::with_capacity(8),
            open: Contexts::default(),
            target: Target::None,
        }
    }

    /// Appends `c` to the buffer selected by the current target
    fn push(&mut self, c: char) {
        match self.target {
            Target::Address => self.address.push(c),
            Target::Comment => self.comment.push(c),
            Target::None | Target::Quoted => self.name.push(c),
        }
    }

    /// Appends a stray delimiter to the comment when one is complete, else to the name
    fn push_stray(&mut self, c: char) {
        if is_comment(&self.comment) {
            self.comment.push(c);
        } else {
            self.name.push(c);
        }
    }

    fn open_comment(&mut self) {
        self.open.comment_block = true;
        if self.comment.ends_with(')') {
            self.comment.push(' ');
        }
        self.comment.push('(');
    }

    fn feed(&mut self, c: char) {
        match c {
            ',' => self.comma(),
            '<' => {
                if self.address.is_empty() {
                    self.open.angle_address = true;
                    self.address.push('<');
                    self.target = Target::Address;
                } else if is_included(&self.address) {
                    self.push_stray(c);
                }
            }
            '>' => {
                if self.open.angle_address {
                    self.open.angle_address = false;
                    self.address.push('>');
                    self.target = Target::None;
                } else {
                    self.push_stray(c);
                }
            }
            '(' => {
                if self.open.angle_address {
                    // <"neko(cat)"@example.org> or <neko(cat)@example.org>
                    if self.address.contains('"') {
                        self.address.push(c);
                    } else {
                        self.open_comment();
                        self.target = Target::Comment;
                    }
                } else if self.open.comment_block {
                    self.open_comment();
                } else if self.open.quoted_string {
                    // "Neko, Nyaan(cat)"
                    self.name.push(c);
                } else {
                    self.open_comment();
                    self.target = Target::Comment;
                }
            }
            ')' => {
                if self.open.angle_address {
                    if self.address.contains('"') {
                        self.address.push(c);
                    } else {
                        self.open.comment_block = false;
                        self.comment.push(c);
                        self.target = Target::Address;
                    }
                } else if self.open.comment_block {
                    self.open.comment_block = false;
                    self.comment.push(c);
                    self.target = Target::None;
                } else {
                    self.name.push(c);
                    self.target = Target::None;
                }
            }
            '"' => match self.target {
                Target::None => {
                    self.name.push(c);
                    self.open.quoted_string = true;
                    self.target = Target::Quoted;
                }
                Target::Quoted => {
                    self.name.push(c);
                    // "Neko, Nyaan \" stays open
                    if !self.name.ends_with("\\\"") {
                        self.open.quoted_string = false;
                        self.target = Target::None;
                    }
                }
                Target::Address | Target::Comment => self.push(c),
            },
            _ => self.push(c),
        }
    }

    fn comma(&mut self) {
        if !is_included(&self.address) {
            // "Neko, Nyaan" <neko@example.org> or <"neko,cat"@example.org>
            self.push(',');
        } else if self.open.comment_block {
            self.comment.push(',');
        } else if self.open.quoted_string {
            self.name.push(',');
        } else {
            // Separator between two addresses
            self.open = Contexts::default();
            self.target = Target::None;
        }
    }
}

/// Splits an address field into its email address, display name and comment.
///
/// Handles display names with commas, quoted local parts, comments inside or
/// around the address, and bare `MAILER-DAEMON` tokens. Never fails: a field
/// without a usable address yields an empty `address`.
///
/// ```
/// let triple = bounce_fields::address::find("\"Neko, Nyaan\" <neko@example.jp> (cat)");
/// assert_eq!(triple.address, "neko@example.jp");
/// assert_eq!(triple.name, "\"Neko, Nyaan\"");
/// assert_eq!(triple.comment, "(cat)");
/// ```
#[must_use]
pub fn find(text: &str) -> AddressTriple {
    if text.len() < 5 {
        return AddressTriple::default();
    }

    let mut parser = FieldParser::new();
    for c in text.chars() {
        parser.feed(c);
    }
    let FieldParser {
        mut address,
        name,
        mut comment,
        ..
    } = parser;

    if address.is_empty() {
        address = address_in_name(&name);
    }

    // (cat)nekochan@example.org, nekochan(cat)cat@example.org, nekochan(cat)@example.org
    while strings::aligned(&address, &["(", ")"]) {
        let block = format!("({})", strings::select(&address, "(", ")", 0));
        let stripped = address.replacen(&block, "", 1);
        if stripped == address {
            break;
        }
        address = stripped;
        if !comment.is_empty() {
            comment.push(' ');
        }
        comment.push_str(&block);
    }

    let mut triple = AddressTriple::default();
    if is_included(&address) || is_mailer_daemon(&address) {
        triple.address = unwrap_address(&address);
    }

    if !name.is_empty() {
        let display = name.trim();
        triple.name = if display.len() > 1 && display.starts_with('"') && display.ends_with('"') {
            display.to_string()
        } else {
            strings::squeeze(display, ' ')
        };
    }

    if triple.address.is_empty() {
        triple.address = address_in_tokens(&[triple.name.as_str(), comment.as_str()]);
    }

    // "neko@example.jp."
    triple.address = triple.address.trim_matches('.').to_string();
    if is_comment(&comment) {
        triple.comment = comment.trim().to_string();
    }
    triple
}

/// Picks an address out of a display name when the field had no `<...>` part
fn address_in_name(name: &str) -> String {
    if is_email_address(name) {
        format!("<{}>", name.trim())
    } else if is_included(name) {
        name.split(' ')
            .find(|e| is_email_address(e))
            .unwrap_or_default()
            .to_string()
    } else if is_mailer_daemon(name) {
        name.trim().to_string()
    } else {
        String::new()
    }
}

/// Removes brackets and quotes wrapped around an address
fn unwrap_address(address: &str) -> String {
    let address = if is_domain_literal(address) {
        address
    } else {
        address.trim_matches(ADDRESS_WRAPPERS)
    };
    let address = final_form(address.trim_matches(['<', '>']));
    if is_quoted_address(&address) {
        address
    } else {
        address.trim_matches('"').to_string()
    }
}

/// Last resort: any space-separated token of the given texts that looks like an address
fn address_in_tokens(texts: &[&str]) -> String {
    for e in texts {
        for f in e.split(' ') {
            if !f.find('@').is_some_and(|p| p > 0) {
                continue;
            }
            let f = f.trim_matches(['{', '}', '(', ')', '[', ']', '`', '\'', ';', '.']);
            if f.len() < 5 {
                continue;
            }
            let f = final_form(f);
            if is_email_address(&f) {
                return f;
            }
        }
    }
    String::new()
}

/// Strips the angle brackets around an address the way sendmail's ruleset 4
/// does; anything without exactly one `@` is returned unchanged.
#[must_use]
pub fn final_form(email: &str) -> String {
    if email.matches('@').count() != 1 {
        return email.to_string();
    }

    let mut email = email;
    if email.starts_with('<') {
        email = email.trim_matches('<');
    }
    if email.ends_with('>') {
        email = email.trim_matches('>');
    }
    email.to_string()
}

/// Returns true when `text` contains an email address, either as the whole
/// `<...>` wrapped text or as one of its space-separated words.
#[must_use]
pub fn is_included(text: &str) -> bool {
    if text.len() < 5 || !text.contains('@') {
        return false;
    }

    if text.starts_with('<') && text.ends_with('>') {
        is_email_address(text.trim_matches(['<', '>']))
    } else {
        text.split(' ')
            .any(|e| is_email_address(e.trim_matches(['<', '>'])))
    }
}

/// Returns true when `email` is a mailer-daemon or postmaster address
#[must_use]
pub fn is_mailer_daemon(email: &str) -> bool {
    let value = email.to_lowercase();
    strings::contains_any(&value, &DAEMON_FORMS) || DAEMON_NAMES.contains(&value.as_str())
}
