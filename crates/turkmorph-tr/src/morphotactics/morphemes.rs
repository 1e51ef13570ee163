// Turkish morpheme inventory.

use turkmorph_graph::Morpheme;

/// Every morpheme the Turkish graph uses, roots first. Root morpheme ids
/// equal the short form of their category.
pub static MORPHEMES: &[Morpheme] = &[
    // Roots and parts of speech
    Morpheme::new("Noun", "Noun"),
    Morpheme::new("Verb", "Verb"),
    Morpheme::new("Adj", "Adjective"),
    Morpheme::new("Adv", "Adverb"),
    Morpheme::new("Pron", "Pronoun"),
    Morpheme::new("Num", "Numeral"),
    Morpheme::new("Conj", "Conjunction"),
    Morpheme::new("Interj", "Interjection"),
    Morpheme::new("Det", "Determiner"),
    Morpheme::new("PostP", "PostPositive"),
    Morpheme::new("Punc", "Punctuation"),
    // Agreement
    Morpheme::new("A1sg", "FirstPersonSingular"),
    Morpheme::new("A2sg", "SecondPersonSingular"),
    Morpheme::new("A3sg", "ThirdPersonSingular"),
    Morpheme::new("A1pl", "FirstPersonPlural"),
    Morpheme::new("A2pl", "SecondPersonPlural"),
    Morpheme::new("A3pl", "ThirdPersonPlural"),
    // Possessive
    Morpheme::new("Pnon", "NoPosession"),
    Morpheme::new("P1sg", "FirstPersonSingularPossessive"),
    Morpheme::new("P2sg", "SecondPersonSingularPossessive"),
    Morpheme::new("P3sg", "ThirdPersonSingularPossessive"),
    Morpheme::new("P1pl", "FirstPersonPluralPossessive"),
    Morpheme::new("P2pl", "SecondPersonPluralPossessive"),
    Morpheme::new("P3pl", "ThirdPersonPluralPossessive"),
    // Case
    Morpheme::new("Nom", "Nominal"),
    Morpheme::new("Dat", "Dative"),
    Morpheme::new("Acc", "Accusative"),
    Morpheme::new("Abl", "Ablative"),
    Morpheme::new("Loc", "Locative"),
    Morpheme::new("Ins", "Instrumental"),
    Morpheme::new("Gen", "Genitive"),
    Morpheme::new("Equ", "Equ"),
    // Nominal derivation
    Morpheme::derivational("Dim", "Diminutive"),
    Morpheme::derivational("Ness", "Ness"),
    Morpheme::derivational("With", "With"),
    Morpheme::derivational("Without", "Without"),
    Morpheme::derivational("Rel", "Relation"),
    Morpheme::derivational("Agt", "Agentive"),
    Morpheme::derivational("Become", "Become"),
    Morpheme::derivational("Acquire", "Acquire"),
    Morpheme::derivational("Ly", "Ly"),
    Morpheme::derivational("Zero", "Zero"),
    Morpheme::derivational("Ord", "Ordinal"),
    Morpheme::derivational("Dist", "Distributive"),
    // Copula, tense, aspect, mood
    Morpheme::new("Cop", "Copula"),
    Morpheme::new("Past", "PastTense"),
    Morpheme::new("Narr", "NarrativeTense"),
    Morpheme::new("Cond", "Condition"),
    Morpheme::new("Prog1", "Progressive1"),
    Morpheme::new("Prog2", "Progressive2"),
    Morpheme::new("Aor", "Aorist"),
    Morpheme::new("Fut", "Future"),
    Morpheme::new("Neces", "Necessity"),
    Morpheme::new("Opt", "Optative"),
    Morpheme::new("Imp", "Imparative"),
    Morpheme::new("Neg", "Negative"),
    // Verb to verb
    Morpheme::derivational("Able", "Ability"),
    Morpheme::derivational("Unable", "Unable"),
    Morpheme::derivational("Pass", "Passive"),
    Morpheme::derivational("Caus", "Causative"),
    Morpheme::derivational("Recip", "Reciprocal"),
    Morpheme::derivational("Reflex", "Reflexive"),
    // Verb to nominal and adverb
    Morpheme::derivational("Inf1", "Infinitive1"),
    Morpheme::derivational("Inf2", "Infinitive2"),
    Morpheme::derivational("Inf3", "Infinitive3"),
    Morpheme::derivational("PastPart", "PastParticiple"),
    Morpheme::derivational("FutPart", "FutureParticiple"),
    Morpheme::derivational("PresPart", "PresentParticiple"),
    Morpheme::derivational("AfterDoingSo", "AfterDoingSo"),
    Morpheme::derivational("ByDoingSo", "ByDoingSo"),
    Morpheme::derivational("When", "When"),
    Morpheme::derivational("WithoutHavingDoneSo", "WithoutHavingDoneSo"),
    Morpheme::derivational("SinceDoingSo", "SinceDoingSo"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use turkmorph_core::enums::PrimaryPos;
    use turkmorph_graph::MorphemeTable;

    #[test]
    fn ids_unique() {
        assert!(MorphemeTable::new(MORPHEMES).is_ok());
    }

    #[test]
    fn every_category_has_a_root_morpheme() {
        let table = MorphemeTable::new(MORPHEMES).unwrap();
        for pos in PrimaryPos::ALL {
            let id = table.lookup(pos.short_form()).unwrap();
            assert!(!table.is_derivational(id), "{pos}");
        }
    }
}
