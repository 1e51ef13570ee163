//! End-to-end behavior of the default morphology: analysis, stemming and
//! byte spans over the embedded lexicon.
//!
//! Run: cargo test -p turkmorph-tr --test scenarios

use std::sync::OnceLock;

use turkmorph_core::enums::PrimaryPos;
use turkmorph_tr::{Morphology, StemSpan};

fn morphology() -> &'static Morphology {
    static MORPHOLOGY: OnceLock<Morphology> = OnceLock::new();
    MORPHOLOGY.get_or_init(|| {
        Morphology::create_default().unwrap_or_else(|e| panic!("failed to build morphology: {e}"))
    })
}

/// `(morpheme_id, surface)` pairs of an analysis.
fn morphemes(a: &turkmorph_tr::Analysis) -> Vec<(&str, &str)> {
    a.morpheme_data
        .iter()
        .map(|m| (m.morpheme_id, m.surface.as_str()))
        .collect()
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[test]
fn bare_noun_has_one_analysis() {
    let bundle = morphology().analyze("kitap");
    assert_eq!(bundle.len(), 1);
    let a = &bundle.results[0];
    assert_eq!(a.root_lemma(), "kitap");
    assert_eq!(a.category, PrimaryPos::Noun);
    assert_eq!(
        morphemes(a),
        [("Noun", "kitap"), ("A3sg", ""), ("Pnon", ""), ("Nom", "")]
    );
    assert_eq!(a.format_string(), "kitap:Noun");
}

#[test]
fn plural_possessive_and_accusative_readings() {
    let bundle = morphology().analyze("kitapları");
    let readings: Vec<_> = bundle.iter().map(morphemes).collect();
    assert!(readings.contains(&vec![
        ("Noun", "kitap"),
        ("A3pl", "lar"),
        ("P3sg", "ı"),
        ("Nom", ""),
    ]));
    assert!(readings.contains(&vec![
        ("Noun", "kitap"),
        ("A3pl", "lar"),
        ("Pnon", ""),
        ("Acc", "ı"),
    ]));
    let preferred = bundle.preferred().unwrap();
    assert_eq!(preferred.format_string(), "kitap:Noun|+lar:A3pl|+ı:P3sg");
}

#[test]
fn format_string_lists_non_empty_suffixes() {
    let bundle = morphology().analyze("evlerde");
    let a = bundle
        .iter()
        .find(|a| a.contains_morpheme("Loc"))
        .unwrap();
    assert_eq!(a.format_string(), "ev:Noun|+ler:A3pl|+de:Loc");
}

// ---------------------------------------------------------------------------
// Stemming
// ---------------------------------------------------------------------------

#[test]
fn stems_possessive() {
    assert_eq!(morphology().stem_word("mahkemesi"), "mahkeme");
}

#[test]
fn stems_relative_suffix() {
    assert_eq!(morphology().stem_word("dosyadaki"), "dosya");
}

#[test]
fn unknown_word_passes_through() {
    assert_eq!(morphology().stem_word("xyzzy"), "xyzzy");
}

#[test]
fn stems_with_byte_positions() {
    let spans = morphology().stem_text_with_positions("Kitapları okuyorum");
    assert_eq!(
        spans,
        [
            StemSpan { stem: "kitap".into(), byte_start: 0, byte_end: 10 },
            StemSpan { stem: "oku".into(), byte_start: 11, byte_end: 19 },
        ]
    );
}

#[test]
fn genitive_case_and_become_derivation() {
    let evin = morphology().analyze("evin");
    assert!(evin.iter().any(|a| morphemes(a).contains(&("Gen", "in"))));
    assert!(evin.iter().any(|a| morphemes(a).contains(&("P2sg", "in"))));

    let bundle = morphology().analyze("güzelleşti");
    let r#become = bundle
        .iter()
        .find(|a| morphemes(a).contains(&("Become", "leş")))
        .unwrap_or_else(|| panic!("no -lAş reading in {bundle:?}"));
    assert_eq!(r#become.root_lemma(), "güzel");
    assert!(morphemes(r#become).contains(&("Past", "ti")));
}

#[test]
fn stems_common_inflections() {
    let m = morphology();
    let cases = [
        ("evlerimizden", "ev"),
        ("çocuğu", "çocuk"),
        ("ağzımız", "ağız"),
        ("şehre", "şehir"),
        ("saatler", "saat"),
        ("kalbi", "kalp"),
        ("hakkı", "hak"),
        ("rengi", "renk"),
        ("zeytinyağları", "zeytinyağı"),
        ("bana", "ben"),
        ("onlara", "onlar"),
        ("dördüncü", "dört"),
        ("gidiyorum", "git"),
        ("geldiler", "gel"),
        ("okumak", "oku"),
        ("arıyor", "ara"),
        ("güzeller", "güzel"),
        ("İstanbul'da", "istanbul"),
    ];
    for (word, stem) in cases {
        assert_eq!(m.stem_word(word), stem, "{word}");
    }
}

#[test]
fn stem_text_skips_non_words() {
    let stems = morphology().stem_text("Dün saat 14:30 gibi @ali ile kitapları okudu :)");
    assert_eq!(stems, ["dün", "saat", "gibi", "ile", "kitap", "oku"]);
}
