// Rule-based choice of one analysis per word.
//
// Rules, each refining the previous:
//   1. longest root surface
//   2. fewest derivational morphemes
//   3. fewest morphemes
//   4. most common case/possessive/agreement/tense in the final
//      inflectional group, compared from the last morpheme backwards
//   5. enumeration order

use std::cmp::{Ordering, Reverse};

use turkmorph_core::analysis::{Analysis, MorphemeData};

const OTHER: u8 = 10;

/// Frequency rank of an inflectional morpheme; lower is more common.
fn rank(id: &str) -> u8 {
    match id {
        // case
        "Nom" => 0,
        "Acc" => 1,
        "Dat" => 2,
        "Loc" => 3,
        "Abl" => 4,
        "Gen" => 5,
        "Ins" => 6,
        "Equ" => 7,
        // possessive
        "Pnon" => 0,
        "P3sg" => 1,
        "P1sg" => 2,
        "P2sg" => 3,
        "P3pl" => 4,
        "P1pl" => 5,
        "P2pl" => 6,
        // agreement
        "A3sg" => 0,
        "A3pl" => 1,
        "A1sg" => 2,
        "A2sg" => 3,
        "A1pl" => 4,
        "A2pl" => 5,
        // tense, aspect, mood
        "Prog1" => 0,
        "Aor" => 1,
        "Past" => 2,
        "Fut" => 3,
        "Narr" => 4,
        "Prog2" => 5,
        "Cond" => 6,
        "Neces" => 7,
        "Opt" => 8,
        "Imp" => 9,
        _ => OTHER,
    }
}

fn final_group(a: &Analysis) -> &[MorphemeData] {
    let start = a
        .morpheme_data
        .iter()
        .rposition(|m| m.derivational)
        .unwrap_or(0);
    &a.morpheme_data[start..]
}

fn compare_final_groups(a: &Analysis, b: &Analysis) -> Ordering {
    let ranks = |x: &Analysis| final_group(x).iter().rev().map(|m| rank(m.morpheme_id)).collect::<Vec<_>>();
    ranks(a).cmp(&ranks(b))
}

/// Order two analyses by preference; `Less` means `a` is preferred.
pub fn compare(a: &Analysis, b: &Analysis) -> Ordering {
    let key = |x: &Analysis| {
        (
            Reverse(x.stem_surface().chars().count()),
            x.derivation_count(),
            x.morpheme_count(),
        )
    };
    key(a).cmp(&key(b)).then_with(|| compare_final_groups(a, b))
}

/// Index of the preferred analysis; the first of equally ranked ones.
pub fn preferred_index(results: &[Analysis]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| compare(a, b))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use turkmorph_core::enums::PrimaryPos;

    fn analysis(lemma: &str, morphemes: &[(&'static str, bool, &str)]) -> Analysis {
        Analysis {
            lemma: lemma.into(),
            root: lemma.into(),
            category: PrimaryPos::Noun,
            morpheme_data: morphemes
                .iter()
                .map(|&(id, d, s)| MorphemeData::new(id, d, s))
                .collect(),
            root_index: 0,
        }
    }

    #[test]
    fn longest_root_wins() {
        let short = analysis("kita", &[("Noun", false, "kita"), ("A3sg", false, ""), ("Pnon", false, ""), ("Nom", false, "")]);
        let long = analysis("kitap", &[("Noun", false, "kitap"), ("A3sg", false, ""), ("Pnon", false, ""), ("Nom", false, "")]);
        assert_eq!(preferred_index(&[short, long]), Some(1));
    }

    #[test]
    fn fewer_derivations_then_fewer_morphemes() {
        let derived = analysis(
            "göz",
            &[("Noun", false, "göz"), ("A3sg", false, ""), ("Pnon", false, ""), ("Nom", false, ""), ("Ness", true, "lük"), ("Noun", false, ""), ("A3sg", false, ""), ("Pnon", false, ""), ("Nom", false, "")],
        );
        let plain = analysis(
            "göz",
            &[("Noun", false, "göz"), ("A3sg", false, ""), ("P3sg", false, "lük"), ("Nom", false, "")],
        );
        assert_eq!(preferred_index(&[derived.clone(), plain.clone()]), Some(1));

        let longer = analysis("ev", &[("Noun", false, "ev"), ("A3sg", false, ""), ("Pnon", false, ""), ("Loc", false, "de"), ("Zero", true, ""), ("Verb", false, "")]);
        let shorter = analysis("ev", &[("Noun", false, "ev"), ("A3sg", false, ""), ("Pnon", false, ""), ("Loc", false, "de")]);
        assert_eq!(preferred_index(&[longer, shorter]), Some(1));
    }

    #[test]
    fn possessive_beats_accusative() {
        let acc = analysis("kitap", &[("Noun", false, "kitap"), ("A3pl", false, "lar"), ("Pnon", false, ""), ("Acc", false, "ı")]);
        let p3sg = analysis("kitap", &[("Noun", false, "kitap"), ("A3pl", false, "lar"), ("P3sg", false, "ı"), ("Nom", false, "")]);
        let p3pl = analysis("kitap", &[("Noun", false, "kitap"), ("A3pl", false, "lar"), ("P3pl", false, "ı"), ("Nom", false, "")]);
        let all = [acc, p3pl, p3sg];
        assert_eq!(preferred_index(&all), Some(2));
        assert_eq!(compare(&all[0], &all[1]), Ordering::Greater);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let a = analysis("yüz", &[("Noun", false, "yüz"), ("A3sg", false, ""), ("Pnon", false, ""), ("Nom", false, "")]);
        let mut b = a.clone();
        b.category = PrimaryPos::Numeral;
        assert_eq!(preferred_index(&[a, b]), Some(0));
        assert_eq!(preferred_index(&[]), None);
    }
}
