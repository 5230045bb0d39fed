//! Contact fingerprinting.
//!
//! A fingerprint is the display-independent identity of a contact and the
//! duplicate-detection key used during import. It is persisted alongside
//! every record, so the field order and both encoding steps below are part
//! of the stored format.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Separator placed between identity fields before encoding.
pub const FIELD_SEPARATOR: &str = ",";

/// Compute the fingerprint of a contact's identity fields.
///
/// The fields are joined with [`FIELD_SEPARATOR`] in the order
/// `first_name, last_name, phone, email`, percent-encoded as a URI
/// component, and the resulting ASCII string is base64-encoded with the
/// standard padded alphabet.
///
/// The function is total, case-sensitive and whitespace-sensitive.
///
/// # Example
///
/// ```
/// use contact_list_store::domain::fingerprint;
///
/// assert_eq!(fingerprint("", "", "", ""), "JTJDJTJDJTJD");
/// ```
pub fn fingerprint(first_name: &str, last_name: &str, phone: &str, email: &str) -> String {
    let joined = [first_name, last_name, phone, email].join(FIELD_SEPARATOR);
    STANDARD.encode(encode_uri_component(&joined))
}

/// Percent-encode `input`, leaving `A-Z a-z 0-9 - _ . ! ~ * ' ( )` bare.
///
/// `urlencoding` already leaves the alphanumerics and `- _ . ~` alone and
/// escapes everything else as uppercase `%XX`; the remaining marks are
/// restored here. A literal `%` is always escaped as `%25`, so every `%`
/// in the encoded output starts an escape triple.
fn encode_uri_component(input: &str) -> String {
    let encoded = urlencoding::encode(input);
    let mut out = String::with_capacity(encoded.len());
    let mut rest: &str = &encoded;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let escape = &rest[pos..pos + 3];
        match unescaped_mark(escape) {
            Some(mark) => out.push(mark),
            None => out.push_str(escape),
        }
        rest = &rest[pos + 3..];
    }
    out.push_str(rest);
    out
}

fn unescaped_mark(escape: &str) -> Option<char> {
    match escape {
        "%21" => Some('!'),
        "%27" => Some('\''),
        "%28" => Some('('),
        "%29" => Some(')'),
        "%2A" => Some('*'),
        _ => None,
    }
}
