// Shared enums: token types and part-of-speech categories.

use std::fmt;

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenType {
    /// Letters only, possibly with an inner apostrophe: "Ankara'da".
    Word,
    /// Letters mixed with digits: "F16", "3G".
    WordAlphanumeric,
    /// Known abbreviation or dotted initials: "Dr.", "T.C.".
    Abbreviation,
    Number,
    Punctuation,
    Url,
    Email,
    Emoticon,
    HashTag,
    Mention,
    Date,
    Time,
    Whitespace,
    /// Character not handled by any other rule.
    Unknown,
}

impl TokenType {
    /// Token types the stemmer driver keeps and stems.
    pub fn is_word_like(self) -> bool {
        matches!(
            self,
            TokenType::Word | TokenType::WordAlphanumeric | TokenType::Abbreviation
        )
    }
}

/// Primary part-of-speech category of a dictionary root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PrimaryPos {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Numeral,
    Conjunction,
    Interjection,
    Determiner,
    PostPositive,
    Punctuation,
}

impl PrimaryPos {
    pub const ALL: [PrimaryPos; 11] = [
        PrimaryPos::Noun,
        PrimaryPos::Verb,
        PrimaryPos::Adjective,
        PrimaryPos::Adverb,
        PrimaryPos::Pronoun,
        PrimaryPos::Numeral,
        PrimaryPos::Conjunction,
        PrimaryPos::Interjection,
        PrimaryPos::Determiner,
        PrimaryPos::PostPositive,
        PrimaryPos::Punctuation,
    ];

    /// Short form used in lexicon files and analysis output.
    pub fn short_form(self) -> &'static str {
        match self {
            PrimaryPos::Noun => "Noun",
            PrimaryPos::Verb => "Verb",
            PrimaryPos::Adjective => "Adj",
            PrimaryPos::Adverb => "Adv",
            PrimaryPos::Pronoun => "Pron",
            PrimaryPos::Numeral => "Num",
            PrimaryPos::Conjunction => "Conj",
            PrimaryPos::Interjection => "Interj",
            PrimaryPos::Determiner => "Det",
            PrimaryPos::PostPositive => "PostP",
            PrimaryPos::Punctuation => "Punc",
        }
    }

    /// Parse a lexicon category name. `Postp` is accepted as an alias.
    pub fn from_short_form(s: &str) -> Option<Self> {
        if s == "Postp" {
            return Some(PrimaryPos::PostPositive);
        }
        Self::ALL.into_iter().find(|pos| pos.short_form() == s)
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_form())
    }
}
