// Turkish-aware case folding.
//
// Dotted and dotless i are distinct letters in Turkish, so the default
// Unicode mappings (`I → i`, `i → I`) are wrong here: `I → ı`, `İ → i`,
// `ı → I`, `i → İ`.

/// Lowercase a single character with Turkish rules, appending to `out`.
#[inline]
fn push_lower(c: char, out: &mut String) {
    match c {
        'I' => out.push('\u{0131}'),
        '\u{0130}' => out.push('i'),
        c if c.is_ascii() => out.push(c.to_ascii_lowercase()),
        c => out.extend(c.to_lowercase()),
    }
}

/// Lowercase a string with Turkish rules.
pub fn turkish_lower(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_lower(c, &mut out);
    }
    out
}

/// Uppercase a string with Turkish rules.
pub fn turkish_upper(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'i' => out.push('\u{0130}'),
            '\u{0131}' => out.push('I'),
            c => out.extend(c.to_uppercase()),
        }
    }
    out
}
