//! MAC address notation.

/// Converts the switch's hyphenated MAC notation to colon notation.
///
/// Only separators are rewritten; the digits and their case are passed
/// through as reported.
///
/// ```
/// use netonix_types::normalize_mac;
///
/// assert_eq!(normalize_mac("00-1C-58-29-4A-71"), "00:1C:58:29:4A:71");
/// ```
pub fn normalize_mac(raw: &str) -> String {
    raw.replace('-', ":")
}
