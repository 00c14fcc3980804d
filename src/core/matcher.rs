//! Version token scanner.
//!
//! A token is the visible text of a link element with this exact shape:
//!
//! ```text
//! link    = "<a href=\"" HREF "\">" VERSION "</a>"
//! HREF    = 1*( any character except '"' )
//! VERSION = DIGITS "." DIGITS "." DIGITS "-gke." DIGITS
//! DIGITS  = 1*( "0".."9" )
//! ```
//!
//! Anything else (bare version text, other tags, versions without the
//! `-gke.` infix, trailing pre-release labels) is skipped.

const LINK_OPEN: &str = "<a href=\"";
const LINK_TEXT_START: &str = "\">";
const LINK_CLOSE: &str = "</a>";
const GKE_INFIX: &str = "-gke.";

/// Returns every version token in `region`, in order of appearance,
/// duplicates included.
pub fn match_versions(region: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = region[cursor..].find(LINK_OPEN) {
        let start = cursor + offset;
        match match_link_at(region, start) {
            Some((token, end)) => {
                tokens.push(token);
                cursor = end;
            }
            None => cursor = start + LINK_OPEN.len(),
        }
    }

    tokens
}

/// `true` when `candidate` is exactly one VERSION and nothing else.
pub fn is_version_token(candidate: &str) -> bool {
    version_len(candidate) == Some(candidate.len())
}

/// Tries the `link` rule at `start`; returns the token and the byte offset
/// just past `</a>`.
fn match_link_at(text: &str, start: usize) -> Option<(&str, usize)> {
    let href_start = start + LINK_OPEN.len();
    let href_len = text[href_start..].find('"')?;
    if href_len == 0 {
        return None;
    }

    let after_href = href_start + href_len;
    let version_start = after_href + expect(&text[after_href..], LINK_TEXT_START)?;
    let version_end = version_start + version_len(&text[version_start..])?;
    let end = version_end + expect(&text[version_end..], LINK_CLOSE)?;

    Some((&text[version_start..version_end], end))
}

/// Length of the VERSION prefix of `text`, if it starts with one.
fn version_len(text: &str) -> Option<usize> {
    let mut pos = digits(text)?;
    for _ in 0..2 {
        pos += expect(&text[pos..], ".")?;
        pos += digits(&text[pos..])?;
    }
    pos += expect(&text[pos..], GKE_INFIX)?;
    pos += digits(&text[pos..])?;
    Some(pos)
}

fn digits(text: &str) -> Option<usize> {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    (len > 0).then_some(len)
}

fn expect(text: &str, literal: &str) -> Option<usize> {
    text.starts_with(literal).then_some(literal.len())
}
