//! Dotted-quad IPv4 literals

/// Returns true when `addr` is a dotted-quad IPv4 address such as `192.0.2.25`
#[must_use]
pub fn is_ipv4_address(addr: &str) -> bool {
    if addr.len() < 7 || addr.matches('.').count() != 3 {
        return false;
    }
    addr.split('.')
        .all(|e| e.parse::<i32>().is_ok_and(|v| (0..=255).contains(&v)))
}

/// Finds every IPv4 address in `text`, in order of appearance.
///
/// Brackets and commas are treated as separators so `mx.example.jp[192.0.2.1]`
/// yields `192.0.2.1`.
#[must_use]
pub fn find_ipv4_addresses(text: &str) -> Vec<String> {
    if text.len() < 7 {
        return Vec::new();
    }

    text.replace(['(', ')', '[', ']', ','], " ")
        .split(' ')
        .filter(|e| is_ipv4_address(e))
        .map(str::to_string)
        .collect()
}
