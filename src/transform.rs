use crate::error::{EncojiError, Result};
use crate::selector::{from_selector, to_selector};

/// Hide `payload` after the first character of `carrier`
///
/// The output is the first character of `carrier`, one variation selector
/// per payload byte, then the rest of `carrier` unchanged.
pub fn embed(carrier: &str, payload: &[u8]) -> Result<String> {
    let mut chars = carrier.chars();
    let first = chars.next().ok_or(EncojiError::EmptyInput("target"))?;
    if payload.is_empty() {
        return Err(EncojiError::EmptyInput("clear text"));
    }

    let rest = chars.as_str();
    // Selectors outside the BMP take four bytes in UTF-8
    let mut encoded = String::with_capacity(carrier.len() + payload.len() * 4);
    encoded.push(first);
    encoded.extend(payload.iter().map(|&b| to_selector(b)));
    encoded.push_str(rest);
    Ok(encoded)
}

/// Recover the bytes hidden in `encoded`
///
/// Every character that is not a variation selector (the carrier, any
/// surrounding text) decodes to a newline. Unicode whitespace is then
/// trimmed from both ends of the result read as UTF-8, so a single carrier
/// plus its selectors yields the payload.
pub fn extract(encoded: &str) -> Result<Vec<u8>> {
    if encoded.is_empty() {
        return Err(EncojiError::EmptyInput("target"));
    }

    let decoded: Vec<u8> = encoded
        .chars()
        .map(|c| from_selector(c).unwrap_or(b'\n'))
        .collect();

    Ok(trim_whitespace(&decoded).to_vec())
}

/// [`extract`], with invalid UTF-8 in the payload replaced
pub fn extract_lossy(encoded: &str) -> Result<String> {
    let bytes = extract(encoded)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Trim Unicode whitespace from both ends of UTF-8 text
///
/// Invalid sequences count as non-whitespace and stay in place.
fn trim_whitespace(bytes: &[u8]) -> &[u8] {
    let mut pos = 0;
    let mut start = None;
    let mut end = 0;

    for chunk in bytes.utf8_chunks() {
        for (i, c) in chunk.valid().char_indices() {
            if !c.is_whitespace() {
                start.get_or_insert(pos + i);
                end = pos + i + c.len_utf8();
            }
        }
        pos += chunk.valid().len();

        if !chunk.invalid().is_empty() {
            start.get_or_insert(pos);
            pos += chunk.invalid().len();
            end = pos;
        }
    }

    match start {
        Some(start) => &bytes[start..end],
        None => &[],
    }
}
