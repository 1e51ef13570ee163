// Tokenizer: splits text into typed tokens with code point positions.

use turkmorph_core::case::turkish_lower;
use turkmorph_core::character::{CharType, get_char_type, is_apostrophe};
use turkmorph_core::enums::TokenType;
use turkmorph_core::token::Token;

/// Abbreviations recognized with their trailing dot, lowercased.
const ABBREVIATIONS: &[&str] = &[
    "av", "bkz", "cad", "dr", "doç", "vb", "vs", "mah", "no", "örn", "prof", "sn", "sok", "st",
    "yrd", "çev", "haz", "bşk", "müd", "alb", "gen", "tel",
];

const EMOTICONS: &[&str] = &[
    ":-)", ":-(", ":-D", ":-P", ":-/", ":'(", ";-)", "^_^", ":)", ":(", ":D", ":P", ":p", ":/",
    ":|", ";)", "=)", "=(", "<3", "^^",
];

// ============================================================================
// URL / Email detection
// ============================================================================

fn is_alphanumeric(c: char) -> bool {
    is_alphanumeric(c)
}

fn is_local_part_char(c: char) -> bool {
    is_alphanumeric(c) || matches!(c, '.' | '_' | '-' | '+' | '%')
}

fn is_domain_label_char(c: char) -> bool {
    is_alphanumeric(c) || c == '-'
}

fn is_url_unknown_char(c: char) -> bool {
    matches!(c, '=' | '#' | '%' | '_' | '~' | '&' | '+' | '@')
}

/// Length of a URL or e-mail address at the start of `text`, or 0.
fn find_url_or_email(text: &[char]) -> usize {
    let textlen = text.len();

    let start = if starts_with_chars(text, &['h', 't', 't', 'p', 's', ':', '/', '/']) {
        8
    } else if starts_with_chars(text, &['h', 't', 't', 'p', ':', '/', '/']) {
        7
    } else if starts_with_chars(text, &['w', 'w', 'w', '.']) {
        4
    } else {
        return find_email(text);
    };
    if textlen < start + 4 {
        return 0;
    }

    for i in start..textlen {
        match get_char_type(text[i]) {
            CharType::Whitespace => return i,
            CharType::Unknown => {
                if !is_url_unknown_char(text[i]) {
                    return i;
                }
            }
            CharType::Digit | CharType::Letter => {}
            CharType::Punctuation => {
                // a dot or comma before whitespace ends the sentence, not the URL
                if matches!(text[i], '.' | ',')
                    && (i + 1 == textlen || get_char_type(text[i + 1]) == CharType::Whitespace)
                {
                    return i;
                }
                if matches!(text[i], '"' | '(' | ')' | '\u{201C}' | '\u{201D}') {
                    return i;
                }
            }
        }
    }
    textlen
}

/// Length of an e-mail address at the start of `text`, or 0.
///
/// The domain is two or more labels joined by single dots, the last one
/// holding a letter. A dot with no label after it ends the address.
fn find_email(text: &[char]) -> usize {
    let local = text.iter().take_while(|&&c| is_local_part_char(c)).count();
    if local == 0 || text.get(local) != Some(&'@') {
        return 0;
    }

    let mut end = local + 1;
    let mut labels = 0;
    let mut last_label_has_letter = false;
    loop {
        let label = text[end..]
            .iter()
            .take_while(|&&c| is_domain_label_char(c))
            .count();
        if label == 0 {
            break;
        }
        last_label_has_letter = text[end..end + label]
            .iter()
            .any(|&c| get_char_type(c) == CharType::Letter);
        end += label;
        labels += 1;
        if text.get(end) == Some(&'.') && text.get(end + 1).is_some_and(|&c| is_domain_label_char(c)) {
            end += 1;
        } else {
            break;
        }
    }

    if labels >= 2 && last_label_has_letter { end } else { 0 }
}

fn starts_with_chars(text: &[char], prefix: &[char]) -> bool {
    text.len() >= prefix.len() && text[..prefix.len()] == *prefix
}

// ============================================================================
// Social media and emoticons
// ============================================================================

fn is_handle_char(c: char) -> bool {
    c == '_' || is_alphanumeric(c)
}

/// `@name` or `#tag`. A hashtag needs at least one letter.
fn find_marked_handle(text: &[char], marker: char) -> usize {
    if text.first() != Some(&marker) {
        return 0;
    }
    let len = 1 + text[1..].iter().take_while(|&&c| is_handle_char(c)).count();
    if len == 1 {
        return 0;
    }
    if marker == '#' && !text[1..len].iter().any(|c| c.is_alphabetic()) {
        return 0;
    }
    len
}

fn find_emoticon(text: &[char]) -> usize {
    for emoticon in EMOTICONS {
        let len = emoticon.chars().count();
        if text.len() >= len && text[..len].iter().copied().eq(emoticon.chars()) {
            // ":Dosya" is not a grin
            let followed_by_word = text.get(len).is_some_and(|&c| is_alphanumeric(c));
            if !followed_by_word {
                return len;
            }
        }
    }
    0
}

// ============================================================================
// Dates, times and abbreviations
// ============================================================================

fn digit_run(text: &[char], from: usize) -> usize {
    text.get(from..)
        .map_or(0, |rest| rest.iter().take_while(|c| c.is_ascii_digit()).count())
}

fn value(digits: &[char]) -> u32 {
    digits
        .iter()
        .fold(0, |n, c| n * 10 + c.to_digit(10).unwrap_or(0))
}

fn ends_cleanly(text: &[char], end: usize) -> bool {
    text.get(end).is_none_or(|&c| !is_alphanumeric(c))
}

/// `12.05.2024`, `1/5/24` or `12-05-2024`.
fn date_length(text: &[char]) -> usize {
    let d = digit_run(text, 0);
    if !(1..=2).contains(&d) {
        return 0;
    }
    let Some(&sep) = text.get(d) else {
        return 0;
    };
    if !matches!(sep, '.' | '/' | '-') {
        return 0;
    }
    let m_start = d + 1;
    let m = digit_run(text, m_start);
    if !(1..=2).contains(&m) || text.get(m_start + m) != Some(&sep) {
        return 0;
    }
    let y_start = m_start + m + 1;
    let y = digit_run(text, y_start);
    if y != 2 && y != 4 {
        return 0;
    }
    let end = y_start + y;
    let day = value(&text[..d]);
    let month = value(&text[m_start..m_start + m]);
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !ends_cleanly(text, end) {
        return 0;
    }
    end
}

/// `14:30` or `14:30:05`.
fn time_length(text: &[char]) -> usize {
    let h = digit_run(text, 0);
    if !(1..=2).contains(&h) || text.get(h) != Some(&':') {
        return 0;
    }
    if value(&text[..h]) > 23 || digit_run(text, h + 1) != 2 || value(&text[h + 1..h + 3]) > 59 {
        return 0;
    }
    let mut end = h + 3;
    if text.get(end) == Some(&':') && digit_run(text, end + 1) == 2 {
        if value(&text[end + 1..end + 3]) > 59 {
            return 0;
        }
        end += 3;
    }
    if ends_cleanly(text, end) { end } else { 0 }
}

/// Dotted initials (`T.C.`, `A.B.D.`) or a known abbreviation with its dot.
fn abbreviation_length(text: &[char]) -> usize {
    let mut i = 0;
    let mut initials = 0;
    while i + 1 < text.len() && text[i].is_uppercase() && text[i + 1] == '.' {
        i += 2;
        initials += 1;
    }
    if initials >= 2 && ends_cleanly(text, i) {
        return i;
    }

    let letters = text
        .iter()
        .take_while(|&&c| get_char_type(c) == CharType::Letter)
        .count();
    if letters == 0 || text.get(letters) != Some(&'.') || !ends_cleanly(text, letters + 1) {
        return 0;
    }
    let word: String = text[..letters].iter().collect();
    if ABBREVIATIONS.contains(&turkish_lower(&word).as_str()) {
        letters + 1
    } else {
        0
    }
}

// ============================================================================
// Word length detection
// ============================================================================

/// Length of a word or number token at the start of `text`.
///
/// Apostrophes and hyphens are kept inside a word when a letter (or digit,
/// for hyphens) follows; dots and commas only inside numbers.
fn word_length(text: &[char]) -> usize {
    let textlen = text.len();
    let mut wlen = 0;
    let mut processing_number = false;
    let mut seen_letters = false;

    while wlen < textlen {
        match get_char_type(text[wlen]) {
            CharType::Letter => {
                processing_number = false;
                seen_letters = true;
                wlen += 1;
            }
            CharType::Digit => {
                processing_number = true;
                wlen += 1;
            }
            CharType::Whitespace | CharType::Unknown => return wlen,
            CharType::Punctuation => {
                let next = text.get(wlen + 1).map(|&c| get_char_type(c));
                let continues = match text[wlen] {
                    c if is_apostrophe(c) => next == Some(CharType::Letter),
                    '-' | '\u{2010}' | '\u{2011}' => {
                        matches!(next, Some(CharType::Letter | CharType::Digit))
                    }
                    '.' | ',' => processing_number && !seen_letters && next == Some(CharType::Digit),
                    _ => false,
                };
                if !continues {
                    return wlen;
                }
                wlen += 1;
            }
        }
    }
    textlen
}

fn classify_word(word: &[char]) -> TokenType {
    let letters = word.iter().any(|&c| get_char_type(c) == CharType::Letter);
    let digits = word.iter().any(|c| c.is_ascii_digit());
    match (letters, digits) {
        (true, true) => TokenType::WordAlphanumeric,
        (true, false) => TokenType::Word,
        _ => TokenType::Number,
    }
}

// ============================================================================
// Public tokenizer API
// ============================================================================

/// Find the next token starting at code point `pos`.
///
/// Returns `(TokenType, token_length)`, or `None` at the end of the text.
pub fn next_token(text: &[char], pos: usize) -> Option<(TokenType, usize)> {
    let slice = text.get(pos..).filter(|s| !s.is_empty())?;

    let special = [
        (TokenType::Mention, find_marked_handle(slice, '@')),
        (TokenType::HashTag, find_marked_handle(slice, '#')),
        (TokenType::Emoticon, find_emoticon(slice)),
    ];
    if let Some(&(token_type, len)) = special.iter().find(|(_, len)| *len > 0) {
        return Some((token_type, len));
    }

    let token = match get_char_type(slice[0]) {
        CharType::Letter | CharType::Digit => {
            let url_length = find_url_or_email(slice);
            if url_length > 0 {
                let token_type = if find_email(slice) == url_length {
                    TokenType::Email
                } else {
                    TokenType::Url
                };
                return Some((token_type, url_length));
            }
            if slice[0].is_ascii_digit() {
                let date = date_length(slice);
                if date > 0 {
                    return Some((TokenType::Date, date));
                }
                let time = time_length(slice);
                if time > 0 {
                    return Some((TokenType::Time, time));
                }
            } else {
                let abbreviation = abbreviation_length(slice);
                if abbreviation > 0 {
                    return Some((TokenType::Abbreviation, abbreviation));
                }
            }
            let wlen = word_length(slice).max(1);
            (classify_word(&slice[..wlen]), wlen)
        }
        CharType::Whitespace => {
            let len = slice
                .iter()
                .take_while(|&&c| get_char_type(c) == CharType::Whitespace)
                .count();
            (TokenType::Whitespace, len)
        }
        CharType::Punctuation => {
            if slice.len() >= 3 && slice[..3] == ['.', '.', '.'] {
                (TokenType::Punctuation, 3)
            } else {
                (TokenType::Punctuation, 1)
            }
        }
        CharType::Unknown => (TokenType::Unknown, 1),
    };
    Some(token)
}

/// Split text into tokens. Token positions and lengths are code points.
pub fn tokenize(text: &[char]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some((token_type, len)) = next_token(text, pos) {
        let token_text: String = text[pos..pos + len].iter().collect();
        tokens.push(Token::new(token_type, token_text, pos));
        pos += len;
    }
    tokens
}

/// Tokenize a string.
pub fn tokenize_str(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    tokenize(&chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(text: &str) -> Vec<(TokenType, String)> {
        tokenize_str(text)
            .into_iter()
            .map(|t| (t.token_type, t.text))
            .collect()
    }

    fn words(text: &str) -> Vec<(TokenType, String)> {
        types(text)
            .into_iter()
            .filter(|(t, _)| *t != TokenType::Whitespace)
            .collect()
    }

    fn tok(t: TokenType, s: &str) -> (TokenType, String) {
        (t, s.to_string())
    }

    #[test]
    fn words_and_whitespace() {
        assert_eq!(
            types("Kitapları okuyorum"),
            [
                tok(TokenType::Word, "Kitapları"),
                tok(TokenType::Whitespace, " "),
                tok(TokenType::Word, "okuyorum"),
            ]
        );
        assert!(tokenize_str("").is_empty());
    }

    #[test]
    fn positions_are_code_points() {
        let tokens = tokenize_str("ışık var");
        assert_eq!(tokens[2].text, "var");
        assert_eq!(tokens[2].pos, 5);
        assert_eq!(tokens[2].end(), 8);
    }

    #[test]
    fn apostrophe_stays_inside_words() {
        assert_eq!(
            words("Ankara'da kaldık."),
            [
                tok(TokenType::Word, "Ankara'da"),
                tok(TokenType::Word, "kaldık"),
                tok(TokenType::Punctuation, "."),
            ]
        );
        assert_eq!(
            words("İstanbul’a kitap'"),
            [
                tok(TokenType::Word, "İstanbul’a"),
                tok(TokenType::Word, "kitap"),
                tok(TokenType::Punctuation, "'"),
            ]
        );
    }

    #[test]
    fn urls_and_email() {
        assert_eq!(
            words("bkz. https://ornek.com.tr/sayfa?a=1 ya da ali.veli@ornek.com."),
            [
                tok(TokenType::Abbreviation, "bkz."),
                tok(TokenType::Url, "https://ornek.com.tr/sayfa?a=1"),
                tok(TokenType::Word, "ya"),
                tok(TokenType::Word, "da"),
                tok(TokenType::Email, "ali.veli@ornek.com"),
                tok(TokenType::Punctuation, "."),
            ]
        );
        assert_eq!(words("www.ornek.com")[0], tok(TokenType::Url, "www.ornek.com"));
    }

    #[test]
    fn email_addresses() {
        assert_eq!(
            words("çağrı_öz@örnek.com.tr"),
            [tok(TokenType::Email, "çağrı_öz@örnek.com.tr")]
        );
        assert_eq!(
            words("ALİ+not@İŞ-yeri.gov.tr"),
            [tok(TokenType::Email, "ALİ+not@İŞ-yeri.gov.tr")]
        );
        // a domain needs a dot and a label with letters last
        for text in ["ali@ornek", "ali@ornek.123", "ali@.com"] {
            assert!(words(text).iter().all(|(t, _)| *t != TokenType::Email), "{text}");
        }
        assert_eq!(
            words("https://ornek.com/@ali")[0],
            tok(TokenType::Url, "https://ornek.com/@ali")
        );
    }

    #[test]
    fn mentions_hashtags_emoticons() {
        assert_eq!(
            words("@kullanici #bayram harika :) <3"),
            [
                tok(TokenType::Mention, "@kullanici"),
                tok(TokenType::HashTag, "#bayram"),
                tok(TokenType::Word, "harika"),
                tok(TokenType::Emoticon, ":)"),
                tok(TokenType::Emoticon, "<3"),
            ]
        );
        assert_eq!(words("#1")[0], tok(TokenType::Unknown, "#"));
    }

    #[test]
    fn dates_times_numbers() {
        assert_eq!(
            words("12.05.2024 14:30 1.234,5 TL"),
            [
                tok(TokenType::Date, "12.05.2024"),
                tok(TokenType::Time, "14:30"),
                tok(TokenType::Number, "1.234,5"),
                tok(TokenType::Word, "TL"),
            ]
        );
        assert_eq!(words("25:70")[0], tok(TokenType::Number, "25"));
    }

    #[test]
    fn alphanumeric_words() {
        assert_eq!(
            words("F16 uçağı"),
            [tok(TokenType::WordAlphanumeric, "F16"), tok(TokenType::Word, "uçağı")]
        );
        assert_eq!(words("3G")[0], tok(TokenType::WordAlphanumeric, "3G"));
    }

    #[test]
    fn abbreviations() {
        assert_eq!(
            words("Dr. Ayşe T.C. vatandaşı"),
            [
                tok(TokenType::Abbreviation, "Dr."),
                tok(TokenType::Word, "Ayşe"),
                tok(TokenType::Abbreviation, "T.C."),
                tok(TokenType::Word, "vatandaşı"),
            ]
        );
        // a sentence-final word keeps its dot separate
        assert_eq!(
            words("okudum."),
            [tok(TokenType::Word, "okudum"), tok(TokenType::Punctuation, ".")]
        );
    }

    #[test]
    fn ellipsis_is_one_token() {
        assert_eq!(
            words("ama..."),
            [tok(TokenType::Word, "ama"), tok(TokenType::Punctuation, "...")]
        );
    }
}
