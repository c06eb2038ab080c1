//! Character-level scanners for SVG numeric and token syntax.
//!
//! Every scanner takes a cursor (`&str`), and on success returns the
//! advanced cursor together with the value — `None` means "does not parse
//! here", leaving the caller free to try something else or fail. Chaining
//! scanners is just threading the returned remainder into the next call.

// ── separators ────────────────────────────────────────────────────────────

/// Skips whitespace and at most the commas SVG allows between tokens.
pub fn skip_sep(s: &str) -> &str {
    s.trim_start_matches([' ', '\t', '\n', '\r', ','])
}

/// Skips whitespace only.
pub fn skip_ws(s: &str) -> &str {
    s.trim_start_matches([' ', '\t', '\n', '\r'])
}

// ── numbers ───────────────────────────────────────────────────────────────

/// Scans a floating-point scalar: optional sign, decimals, optional
/// fraction, optional scientific exponent. Accepts `.5` and `5.` forms.
pub fn scan_scalar(s: &str) -> Option<(&str, f32)> {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
        // A bare `e` with no digits is not part of the number; leave it.
    }

    let value: f32 = s[..i].parse().ok()?;
    Some((&s[i..], value))
}

/// Scans a signed 32-bit integer.
pub fn scan_i32(s: &str) -> Option<(&str, i32)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let digits = count_digits(&bytes[i..]);
    if digits == 0 {
        return None;
    }
    i += digits;
    let value: i32 = s[..i].parse().ok()?;
    Some((&s[i..], value))
}

/// Scans a hexadecimal value (no `0x` prefix, per SVG usage).
pub fn scan_hex(s: &str) -> Option<(&str, u32)> {
    let n = s.bytes().take_while(u8::is_ascii_hexdigit).count();
    if n == 0 || n > 8 {
        return None;
    }
    let value = u32::from_str_radix(&s[..n], 16).ok()?;
    Some((&s[n..], value))
}

/// Scans a boolean: `true`/`false` or `1`/`0`.
pub fn scan_bool(s: &str) -> Option<(&str, bool)> {
    for (token, value) in [("true", true), ("false", false), ("1", true), ("0", false)] {
        if let Some(rest) = s.strip_prefix(token) {
            return Some((rest, value));
        }
    }
    None
}

/// Scans a single-character arc flag (`0` or `1`).
///
/// Deliberately one character only: in arc arguments the flag may run
/// straight into the next number (`a25 25 0 0110 10` is two flags and then
/// `10`), so greedy digit scanning would mis-parse valid input.
pub fn scan_flag(s: &str) -> Option<(&str, bool)> {
    match s.as_bytes().first() {
        Some(b'0') => Some((&s[1..], false)),
        Some(b'1') => Some((&s[1..], true)),
        _ => None,
    }
}

/// Scans a whitespace/comma-separated scalar list into `out`; returns the
/// cursor after the last scalar consumed.
pub fn scan_scalars<'a>(s: &'a str, out: &mut Vec<f32>) -> &'a str {
    let mut rest = s;
    loop {
        let trimmed = skip_sep(rest);
        match scan_scalar(trimmed) {
            Some((next, value)) => {
                out.push(value);
                rest = next;
            }
            None => return rest,
        }
    }
}

// ── lookup ────────────────────────────────────────────────────────────────

/// Linear search of `name` in `list`; returns the matching index.
pub fn find_list(name: &str, list: &[&str]) -> Option<usize> {
    list.iter().position(|&candidate| candidate == name)
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
