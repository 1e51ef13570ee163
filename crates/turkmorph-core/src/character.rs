// Turkish letter classification and phoneme predicates.
//
// Everything here operates on lowercase letters unless stated otherwise;
// callers fold with `case::turkish_lower` first.

// ---------------------------------------------------------------------------
// Phoneme tables
// ---------------------------------------------------------------------------

/// Turkish vowels, including the circumflexed loanword vowels.
const TURKISH_VOWELS: &[char] = &[
    'a', 'e', '\u{0131}', 'i', 'o', '\u{00F6}', 'u', '\u{00FC}', '\u{00E2}', '\u{00EE}', '\u{00FB}',
];

/// Front (frontal) vowels: e i ö ü î û
const FRONT_VOWELS: &[char] = &['e', 'i', '\u{00F6}', '\u{00FC}', '\u{00EE}', '\u{00FB}'];

/// Rounded vowels: o ö u ü û
const ROUNDED_VOWELS: &[char] = &['o', '\u{00F6}', 'u', '\u{00FC}', '\u{00FB}'];

/// Narrow (high) vowels: ı i u ü î û
const NARROW_VOWELS: &[char] = &['\u{0131}', 'i', 'u', '\u{00FC}', '\u{00EE}', '\u{00FB}'];

/// Voiceless consonants: ç f h k p s ş t
const VOICELESS_CONSONANTS: &[char] = &['\u{00E7}', 'f', 'h', 'k', 'p', 's', '\u{015F}', 't'];

/// Voiceless stops: ç k p t
const VOICELESS_STOPS: &[char] = &['\u{00E7}', 'k', 'p', 't'];

/// Letters of the Turkish alphabet outside ASCII, both cases.
const TURKISH_EXTRA_LETTERS: &[char] = &[
    '\u{00E7}', '\u{011F}', '\u{0131}', '\u{00F6}', '\u{015F}', '\u{00FC}', '\u{00E2}', '\u{00EE}',
    '\u{00FB}', '\u{00C7}', '\u{011E}', '\u{0130}', '\u{00D6}', '\u{015E}', '\u{00DC}', '\u{00C2}',
    '\u{00CE}', '\u{00DB}',
];

pub fn is_vowel(c: char) -> bool {
    TURKISH_VOWELS.contains(&c)
}

pub fn is_front_vowel(c: char) -> bool {
    FRONT_VOWELS.contains(&c)
}

pub fn is_rounded_vowel(c: char) -> bool {
    ROUNDED_VOWELS.contains(&c)
}

pub fn is_narrow_vowel(c: char) -> bool {
    NARROW_VOWELS.contains(&c)
}

pub fn is_voiceless(c: char) -> bool {
    VOICELESS_CONSONANTS.contains(&c)
}

/// Voiceless stops drive the `>` devoicing metacharacter and root voicing.
pub fn is_voiceless_stop(c: char) -> bool {
    VOICELESS_STOPS.contains(&c)
}

/// Check whether a character belongs to the Turkish alphabet (ASCII letters
/// included, since loanwords and abbreviations use q, w and x).
pub fn is_turkish_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || TURKISH_EXTRA_LETTERS.contains(&c)
}

/// Voiced counterpart of a root-final consonant: `p→b`, `ç→c`, `t→d`,
/// `k→ğ`, `g→ğ`. Other characters are returned unchanged.
pub fn voice(c: char) -> char {
    match c {
        'p' => 'b',
        '\u{00E7}' => 'c',
        't' => 'd',
        'k' | 'g' => '\u{011F}',
        other => other,
    }
}

/// Voiceless counterpart used by the `>` metacharacter: `b→p`, `c→ç`,
/// `d→t`, `g→k`, `ğ→k`.
pub fn devoice(c: char) -> char {
    match c {
        'b' => 'p',
        'c' => '\u{00E7}',
        'd' => 't',
        'g' | '\u{011F}' => 'k',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Pair predicates (left vowel, right vowel)
// ---------------------------------------------------------------------------

/// Backness harmony: both vowels front or both back.
pub fn agrees_in_backness(left: char, right: char) -> bool {
    is_vowel(left) && is_vowel(right) && is_front_vowel(left) == is_front_vowel(right)
}

/// Rounding harmony for a narrow right-hand vowel.
pub fn agrees_in_rounding(left: char, right: char) -> bool {
    is_vowel(left) && is_vowel(right) && is_rounded_vowel(left) == is_rounded_vowel(right)
}

// ---------------------------------------------------------------------------
// Sequence helpers
// ---------------------------------------------------------------------------

pub fn last_vowel(s: &str) -> Option<char> {
    s.chars().rev().find(|&c| is_vowel(c))
}

pub fn vowel_count(s: &str) -> usize {
    s.chars().filter(|&c| is_vowel(c)).count()
}

// ---------------------------------------------------------------------------
// Character type classification (tokenizer support)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Classify a character for tokenization.
///
/// Letters are anything Unicode considers alphabetic, so foreign words still
/// form word tokens; the analyzer decides later whether it knows them.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '-'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '"'
            | '\''
            | '/'
            | '\u{2019}' // ’
            | '\u{2018}' // ‘
            | '\u{201C}' // “
            | '\u{201D}' // ”
            | '\u{00AB}' // «
            | '\u{00BB}' // »
            | '\u{2013}' // –
            | '\u{2014}' // —
            | '\u{2026}' // …
    )
}

/// ASCII apostrophe or right single quotation mark, both used before
/// suffixes on proper nouns: `Ankara'da`, `Ankara’da`.
pub fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}
