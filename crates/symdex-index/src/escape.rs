//! Decoding of generator-escaped keys and HTML entities.

/// Reverses the generator's identifier escaping.
///
/// Documentation generators encode every character outside `[a-z0-9]` in search keys as `_`
/// followed by two lowercase hex digits (`tile_2ecpp` for `tile.cpp`, `_5f` for `_`). Multi-byte
/// UTF-8 characters are escaped byte by byte. An underscore not followed by two hex digits is
/// kept as-is.
///
/// Returns `None` when the decoded bytes are not valid UTF-8.
pub fn decode_key(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'_'
            && let Some(byte) = bytes.get(i + 1..i + 3).and_then(hex_byte)
        {
            out.push(byte);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(out).ok()
}

/// Parses two lowercase hex digits into a byte.
fn hex_byte(digits: &[u8]) -> Option<u8> {
    let value = |d: u8| match d {
        b'0'..=b'9' => Some(d - b'0'),
        b'a'..=b'f' => Some(d - b'a' + 10),
        _ => None,
    };
    Some((value(digits[0])? << 4) | value(digits[1])?)
}

/// Decodes the HTML entities generators emit in display names and scopes.
///
/// Handles the named entities `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;` and decimal or hex
/// numeric references. Unknown entities are left untouched.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        match tail.find(';').and_then(|semi| {
            decode_entity(&tail[1..semi]).map(|ch| (ch, semi + 1))
        }) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decodes a single entity name (without `&` and `;`).
fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let numeric = name.strip_prefix('#')?;
            let code = match numeric.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
