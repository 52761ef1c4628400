//! Lenient string to value conversions.
//!
//! None of these fail: a string without a usable numeric prefix converts to
//! zero (or `false`). Use a validator when stricter input checking is needed.

/// Parses the leading decimal integer of `s`, `0` if there is none.
///
/// Leading whitespace and a sign are accepted, trailing garbage is ignored
/// (`"12abc"` is `12`). The result is truncated to 32 bits.
pub fn to_int(s: &str) -> i32 {
    leading_integer(s) as i32
}

/// Like [`to_int`], reinterpreted as unsigned: `"-1"` is `u32::MAX`.
pub fn to_uint(s: &str) -> u32 {
    leading_integer(s) as u32
}

/// Parses the leading floating point number of `s`, `0.0` if there is none.
pub fn to_double(s: &str) -> f64 {
    let s = trim_c_space(s);
    let len = float_prefix_len(s);
    if len == 0 {
        return 0.0;
    }
    s[..len].parse().unwrap_or(0.0)
}

/// `true` for a case-insensitive `"true"` or any string with a non-zero
/// integer prefix.
pub fn to_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || to_int(s) != 0
}

/// Skips what C's `isspace` accepts, nothing beyond ASCII.
fn trim_c_space(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

fn leading_integer(s: &str) -> i64 {
    let s = trim_c_space(s);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut acc = 0i64;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        acc = acc.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -acc
    } else {
        acc
    }
}

/// Length of the longest prefix of `s` that reads as a float.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let rest = &s[i..];
    for word in ["infinity", "inf", "nan"] {
        if rest.get(..word.len()).map_or(false, |it| it.eq_ignore_ascii_case(word)) {
            return i + word.len();
        }
    }

    let digits_at = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let int_digits = digits_at(i);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits_at(i + 1);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digits_at(j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}
