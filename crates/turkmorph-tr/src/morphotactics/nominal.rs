// Nominal morphotactics: nouns, adjectives, numerals, pronouns, compounds
// and the closed-class roots.
//
// State names follow `<morpheme>_S`, with `_ST` marking terminal states.

use turkmorph_core::attributes::PhoneticAttribute;
use turkmorph_graph::{Condition, GraphBuilder, StateId};

use super::verbal::VerbalStates;

/// Personal pronouns; their agreement is fixed by the lemma.
const PERSONAL_PRONOUNS: &[&str] = &["ben", "sen", "biz", "siz", "onlar"];
/// Demonstratives whose oblique cases take a pronominal `n`: ona, buna, şuna.
const N_PRONOUNS: &[&str] = &["o", "bu", "şu"];
const NIN_PLURAL_PRONOUNS: &[&str] = &["bu", "şu"];
const PLAIN_PLURAL_EXCLUDED: &[&str] = &["ben", "sen", "o", "biz", "siz", "onlar", "bu", "şu"];
/// Pronouns with the `-im` genitive: benim, bizim.
const IM_GENITIVE_PRONOUNS: &[&str] = &["ben", "biz"];

pub(crate) struct NominalStates {
    pub noun: StateId,
    pub noun_compound: StateId,
    pub noun_compound_plural: StateId,
    a3sg: StateId,
    a3pl: StateId,
    a3sg_compound: StateId,
    a3pl_compound: StateId,
    pnon: StateId,
    p1sg: StateId,
    p2sg: StateId,
    p3sg: StateId,
    p1pl: StateId,
    p2pl: StateId,
    p3pl: StateId,
    nom: StateId,
    dat: StateId,
    acc: StateId,
    abl: StateId,
    loc: StateId,
    ins: StateId,
    gen_case: StateId,
    equ: StateId,
    dim: StateId,
    ness: StateId,
    with: StateId,
    without: StateId,
    rel: StateId,
    agt: StateId,
    become_verb: StateId,
    acquire: StateId,
    noun_zero: StateId,
    pub nverb: StateId,
    pub adjective: StateId,
    adj_zero: StateId,
    ly: StateId,
    pub adverb: StateId,
    pub numeral: StateId,
    ord: StateId,
    dist: StateId,
    pub pronoun: StateId,
    p_a1sg: StateId,
    p_a2sg: StateId,
    p_a3sg: StateId,
    p_a1pl: StateId,
    p_a2pl: StateId,
    p_a3pl: StateId,
    p_pnon: StateId,
    p_pnon_n: StateId,
    pub conjunction: StateId,
    pub interjection: StateId,
    pub determiner: StateId,
    pub postpositive: StateId,
    pub punctuation: StateId,
}

impl NominalStates {
    pub fn declare(b: &mut GraphBuilder) -> Self {
        let noun_m = b.morpheme("Noun");
        let adj_m = b.morpheme("Adj");
        let verb_m = b.morpheme("Verb");
        let zero_m = b.morpheme("Zero");
        let a3sg_m = b.morpheme("A3sg");
        let a3pl_m = b.morpheme("A3pl");
        let pnon_m = b.morpheme("Pnon");
        let p3sg_m = b.morpheme("P3sg");

        let noun = b.root_state("noun_S", noun_m, false);
        let noun_compound = b.root_state("nounCompound_S", noun_m, false);
        let noun_compound_plural = b.root_state("nounCompoundPl_S", noun_m, false);

        let a3sg = b.state("a3sg_S", a3sg_m, false);
        let a3pl = b.state("a3pl_S", a3pl_m, false);
        let a3sg_compound = b.state("a3sgCompound_S", a3sg_m, false);
        let a3pl_compound = b.state("a3plCompound_S", a3pl_m, false);

        let pnon = b.state("pnon_S", pnon_m, false);
        let p1sg_m = b.morpheme("P1sg");
        let p1sg = b.state("p1sg_S", p1sg_m, false);
        let p2sg_m = b.morpheme("P2sg");
        let p2sg = b.state("p2sg_S", p2sg_m, false);
        let p3sg = b.state("p3sg_S", p3sg_m, false);
        let p1pl_m = b.morpheme("P1pl");
        let p1pl = b.state("p1pl_S", p1pl_m, false);
        let p2pl_m = b.morpheme("P2pl");
        let p2pl = b.state("p2pl_S", p2pl_m, false);
        let p3pl_m = b.morpheme("P3pl");
        let p3pl = b.state("p3pl_S", p3pl_m, false);

        let case = |b: &mut GraphBuilder, name: &str, id: &str| {
            let mid = b.morpheme(id);
            b.state(name, mid, true)
        };
        let nom = case(b, "nom_ST", "Nom");
        let dat = case(b, "dat_ST", "Dat");
        let acc = case(b, "acc_ST", "Acc");
        let abl = case(b, "abl_ST", "Abl");
        let loc = case(b, "loc_ST", "Loc");
        let ins = case(b, "ins_ST", "Ins");
        let gen_case = case(b, "gen_ST", "Gen");
        let equ = case(b, "equ_ST", "Equ");

        let derivation = |b: &mut GraphBuilder, name: &str, id: &str| {
            let mid = b.morpheme(id);
            b.state(name, mid, false)
        };
        let dim = derivation(b, "dim_S", "Dim");
        let ness = derivation(b, "ness_S", "Ness");
        let with = derivation(b, "with_S", "With");
        let without = derivation(b, "without_S", "Without");
        let rel = derivation(b, "rel_S", "Rel");
        let agt = derivation(b, "agt_S", "Agt");
        let become_verb = derivation(b, "become_S", "Become");
        let acquire = derivation(b, "acquire_S", "Acquire");
        let ly = derivation(b, "ly_S", "Ly");
        let ord = derivation(b, "ord_S", "Ord");
        let dist = derivation(b, "dist_S", "Dist");
        let noun_zero = b.state("nounZero_S", zero_m, false);
        let adj_zero = b.state("adjZero_S", zero_m, false);
        let nverb = b.state("nVerb_S", verb_m, false);

        let adjective = b.root_state("adjectiveRoot_ST", adj_m, true);
        let adv_m = b.morpheme("Adv");
        let adverb = b.root_state("advRoot_ST", adv_m, true);
        let num_m = b.morpheme("Num");
        let numeral = b.root_state("numeralRoot_S", num_m, false);

        let pron_m = b.morpheme("Pron");
        let pronoun = b.root_state("pronoun_S", pron_m, false);
        let a1sg_m = b.morpheme("A1sg");
        let a2sg_m = b.morpheme("A2sg");
        let a1pl_m = b.morpheme("A1pl");
        let a2pl_m = b.morpheme("A2pl");
        let p_a1sg = b.state("pA1sg_S", a1sg_m, false);
        let p_a2sg = b.state("pA2sg_S", a2sg_m, false);
        let p_a3sg = b.state("pA3sg_S", a3sg_m, false);
        let p_a1pl = b.state("pA1pl_S", a1pl_m, false);
        let p_a2pl = b.state("pA2pl_S", a2pl_m, false);
        let p_a3pl = b.state("pA3pl_S", a3pl_m, false);
        let p_pnon = b.state("pPnon_S", pnon_m, false);
        let p_pnon_n = b.state("pPnonN_S", pnon_m, false);

        let closed = |b: &mut GraphBuilder, name: &str, id: &str| {
            let mid = b.morpheme(id);
            b.root_state(name, mid, true)
        };
        let conjunction = closed(b, "conjRoot_ST", "Conj");
        let interjection = closed(b, "interjRoot_ST", "Interj");
        let determiner = closed(b, "detRoot_ST", "Det");
        let postpositive = closed(b, "postpRoot_ST", "PostP");
        let punctuation = closed(b, "puncRoot_ST", "Punc");

        Self {
            noun,
            noun_compound,
            noun_compound_plural,
            a3sg,
            a3pl,
            a3sg_compound,
            a3pl_compound,
            pnon,
            p1sg,
            p2sg,
            p3sg,
            p1pl,
            p2pl,
            p3pl,
            nom,
            dat,
            acc,
            abl,
            loc,
            ins,
            gen_case,
            equ,
            dim,
            ness,
            with,
            without,
            rel,
            agt,
            become_verb,
            acquire,
            noun_zero,
            nverb,
            adjective,
            adj_zero,
            ly,
            adverb,
            numeral,
            ord,
            dist,
            pronoun,
            p_a1sg,
            p_a2sg,
            p_a3sg,
            p_a1pl,
            p_a2pl,
            p_a3pl,
            p_pnon,
            p_pnon_n,
            conjunction,
            interjection,
            determiner,
            postpositive,
            punctuation,
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

pub(crate) fn connect(b: &mut GraphBuilder, n: &NominalStates, v: &VerbalStates) {
    nouns(b, n);
    cases(b, n);
    derivations(b, n, v);
    adjectives(b, n);
    numerals(b, n);
    pronouns(b, n);
}

fn nouns(b: &mut GraphBuilder, n: &NominalStates) {
    b.from(n.noun).add_empty(n.a3sg).add(n.a3pl, "lAr");

    b.from(n.a3sg)
        .add_empty(n.pnon)
        .add(n.p1sg, "Im")
        .add(n.p2sg, "In")
        .add(n.p3sg, "+sI")
        .add(n.p1pl, "ImIz")
        .add(n.p2pl, "InIz")
        .add(n.p3pl, "lArI");

    b.from(n.a3pl)
        .add_empty(n.pnon)
        .add(n.p1sg, "Im")
        .add(n.p2sg, "In")
        .add(n.p3sg, "I")
        .add(n.p1pl, "ImIz")
        .add(n.p2pl, "InIz")
        .add(n.p3pl, "I");

    // zeytinyağı already carries its possessive; zeytinyağ only pluralizes
    b.from(n.noun_compound).add_empty(n.a3sg_compound);
    b.from(n.a3sg_compound).add_empty(n.p3sg);
    b.from(n.noun_compound_plural).add(n.a3pl_compound, "lAr");
    b.from(n.a3pl_compound).add(n.p3sg, "I").add(n.p3pl, "I");
}

fn cases(b: &mut GraphBuilder, n: &NominalStates) {
    b.from(n.pnon)
        .add_empty(n.nom)
        .add(n.dat, "+yA")
        .add(n.loc, ">dA")
        .add(n.abl, ">dAn")
        .add(n.gen_case, "+nIn")
        .add(n.acc, "+yI")
        .add(n.ins, "+ylA")
        .add(n.equ, ">cA");

    for p in [n.p1sg, n.p2sg, n.p1pl, n.p2pl] {
        b.from(p)
            .add_empty(n.nom)
            .add(n.dat, "A")
            .add(n.loc, "dA")
            .add(n.abl, "dAn")
            .add(n.gen_case, "In")
            .add(n.acc, "I")
            .add(n.ins, "lA")
            .add(n.equ, "cA");
    }

    for p in [n.p3sg, n.p3pl] {
        b.from(p)
            .add_empty(n.nom)
            .add(n.dat, "nA")
            .add(n.loc, "ndA")
            .add(n.abl, "ndAn")
            .add(n.gen_case, "nIn")
            .add(n.acc, "nI")
            .add(n.ins, "ylA")
            .add(n.equ, "ncA");
    }
}

fn derivations(b: &mut GraphBuilder, n: &NominalStates, v: &VerbalStates) {
    // evdeki, benimki
    b.from(n.loc).add(n.rel, "ki");
    b.from(n.gen_case).add(n.rel, "ki");
    b.from(n.rel).add_empty(n.adjective);

    let bare = Condition::current_group_empty;
    b.from(n.nom)
        .add_if(n.dim, ">cI~k", bare())
        .add_if(n.dim, ">cI!ğ", bare())
        .add_if(n.ness, "lI~k", bare())
        .add_if(n.ness, "lI!ğ", bare())
        .add_if(n.with, "lI", bare())
        .add_if(n.without, "sIz", bare())
        .add_if(n.agt, ">cI", bare())
        .add_if(n.become_verb, "lAş", bare())
        .add_if(n.acquire, "lAn", bare());

    b.from(n.dim).add_empty(n.noun);
    b.from(n.ness).add_empty(n.noun);
    b.from(n.agt).add_empty(n.noun);
    b.from(n.with).add_empty(n.adjective);
    b.from(n.without).add_empty(n.adjective);
    b.from(n.become_verb).add_empty(v.verb);
    b.from(n.acquire).add_empty(v.verb);

    // nominal copula: evdeyim, kitaptı, okuldaymış
    for case in [n.nom, n.loc, n.abl, n.gen_case, n.ins] {
        b.from(case).add_empty_if(n.noun_zero, Condition::has_tail());
    }
    b.from(n.noun_zero).add_empty(n.nverb);
    v.connect_copula(b, n.nverb);
}

fn adjectives(b: &mut GraphBuilder, n: &NominalStates) {
    b.from(n.adjective)
        .add_empty_if(n.adj_zero, Condition::has_tail())
        .add(n.ly, "cA")
        .add(n.ness, "lI~k")
        .add(n.ness, "lI!ğ")
        .add(n.become_verb, "lAş");
    b.from(n.adj_zero).add_empty(n.noun).add_empty(n.nverb);
    b.from(n.ly).add_empty(n.adverb);
}

fn numerals(b: &mut GraphBuilder, n: &NominalStates) {
    b.from(n.numeral)
        .add_empty(n.a3sg)
        .add(n.a3pl, "lAr")
        .add(n.ord, "+IncI")
        .add(n.dist, "+şAr");
    b.from(n.ord).add_empty(n.adjective);
    b.from(n.dist).add_empty(n.adjective);
}

fn pronouns(b: &mut GraphBuilder, n: &NominalStates) {
    use PhoneticAttribute::{ModifiedPronoun, UnModifiedPronoun};

    b.from(n.pronoun)
        .add_empty_if(n.p_a1sg, Condition::root_lemma_is("ben"))
        .add_empty_if(n.p_a2sg, Condition::root_lemma_is("sen"))
        .add_empty_if(n.p_a1pl, Condition::root_lemma_is("biz"))
        .add_empty_if(n.p_a2pl, Condition::root_lemma_is("siz"))
        .add_empty_if(n.p_a3pl, Condition::root_lemma_is("onlar"))
        .add_empty_if(n.p_a3sg, !Condition::root_lemma_in(PERSONAL_PRONOUNS))
        .add_if(n.p_a3pl, "nlAr", Condition::root_lemma_in(NIN_PLURAL_PRONOUNS))
        .add_if(n.p_a3pl, "lAr", !Condition::root_lemma_in(PLAIN_PLURAL_EXCLUDED));

    for agreement in [n.p_a1sg, n.p_a2sg, n.p_a1pl, n.p_a2pl, n.p_a3pl] {
        b.from(agreement).add_empty(n.p_pnon);
    }
    b.from(n.p_a3sg)
        .add_empty_if(n.p_pnon_n, Condition::root_lemma_in(N_PRONOUNS))
        .add_empty_if(n.p_pnon, !Condition::root_lemma_in(N_PRONOUNS));

    // ben/sen take the dative only through their modified stems: bana, sana
    let plain = || Condition::not_has(ModifiedPronoun);
    b.from(n.p_pnon)
        .add_empty_if(n.nom, plain())
        .add_if(n.dat, "+yA", Condition::not_has(UnModifiedPronoun))
        .add_if(n.acc, "+yI", plain())
        .add_if(n.loc, ">dA", plain())
        .add_if(n.abl, ">dAn", plain())
        .add_if(n.ins, "+ylA", plain())
        .add_if(n.equ, ">cA", plain())
        .add_if(n.gen_case, "Im", plain().and(Condition::root_lemma_in(IM_GENITIVE_PRONOUNS)))
        .add_if(
            n.gen_case,
            "+nIn",
            plain().and(!Condition::root_lemma_in(IM_GENITIVE_PRONOUNS)),
        );

    b.from(n.p_pnon_n)
        .add_empty(n.nom)
        .add(n.dat, "nA")
        .add(n.acc, "nI")
        .add(n.loc, "ndA")
        .add(n.abl, "ndAn")
        .add(n.gen_case, "nIn")
        .add(n.ins, "nInlA")
        .add(n.equ, "ncA");
}
