// Verbal morphotactics: voice, negation, tense/aspect/mood, person
// agreement, the copula and verb-to-nominal derivations.

use turkmorph_core::attributes::{PhoneticAttribute, RootAttribute};
use turkmorph_graph::{Condition, GraphBuilder, StateId};

use super::nominal::NominalStates;

pub(crate) struct VerbalStates {
    pub verb: StateId,
    /// Root state of stems that lost their final vowel (ok- of oku-).
    pub verb_progressive_drop: StateId,
    imp: StateId,
    neg: StateId,
    neg_prog: StateId,
    prog1: StateId,
    prog2: StateId,
    aor: StateId,
    aor_neg: StateId,
    aor_neg_empty: StateId,
    fut: StateId,
    past: StateId,
    narr: StateId,
    cond: StateId,
    neces: StateId,
    opt: StateId,
    a1sg: StateId,
    a2sg: StateId,
    a3sg: StateId,
    a1pl: StateId,
    a2pl: StateId,
    a3pl: StateId,
    cop: StateId,
    able: StateId,
    unable: StateId,
    pass: StateId,
    caus: StateId,
    recip: StateId,
    reflex: StateId,
    inf1: StateId,
    inf2: StateId,
    inf3: StateId,
    past_part: StateId,
    fut_part: StateId,
    pres_part: StateId,
    agt: StateId,
    after_doing_so: StateId,
    by_doing_so: StateId,
    when: StateId,
    without_having_done_so: StateId,
    since_doing_so: StateId,
}

impl VerbalStates {
    pub fn declare(b: &mut GraphBuilder) -> Self {
        let verb_m = b.morpheme("Verb");
        let verb = b.root_state("verbRoot_S", verb_m, false);
        let verb_progressive_drop = b.root_state("verbLastVowelDropMod_S", verb_m, false);

        let state = |b: &mut GraphBuilder, name: &str, id: &str, terminal: bool| {
            let mid = b.morpheme(id);
            b.state(name, mid, terminal)
        };

        Self {
            verb,
            verb_progressive_drop,
            imp: state(b, "vImp_S", "Imp", false),
            neg: state(b, "vNeg_S", "Neg", false),
            neg_prog: state(b, "vNegProg_S", "Neg", false),
            prog1: state(b, "vProgYor_S", "Prog1", false),
            prog2: state(b, "vProgMakta_S", "Prog2", false),
            aor: state(b, "vAor_S", "Aor", false),
            aor_neg: state(b, "vAorNeg_S", "Aor", false),
            aor_neg_empty: state(b, "vAorNegEmpty_S", "Aor", false),
            fut: state(b, "vFut_S", "Fut", false),
            past: state(b, "vPast_S", "Past", false),
            narr: state(b, "vNarr_S", "Narr", false),
            cond: state(b, "vCond_S", "Cond", false),
            neces: state(b, "vNeces_S", "Neces", false),
            opt: state(b, "vOpt_S", "Opt", false),
            a1sg: state(b, "vA1sg_ST", "A1sg", true),
            a2sg: state(b, "vA2sg_ST", "A2sg", true),
            a3sg: state(b, "vA3sg_ST", "A3sg", true),
            a1pl: state(b, "vA1pl_ST", "A1pl", true),
            a2pl: state(b, "vA2pl_ST", "A2pl", true),
            a3pl: state(b, "vA3pl_ST", "A3pl", true),
            cop: state(b, "vCop_ST", "Cop", true),
            able: state(b, "vAble_S", "Able", false),
            unable: state(b, "vUnable_S", "Unable", false),
            pass: state(b, "vPass_S", "Pass", false),
            caus: state(b, "vCaus_S", "Caus", false),
            recip: state(b, "vRecip_S", "Recip", false),
            reflex: state(b, "vReflex_S", "Reflex", false),
            inf1: state(b, "vInf1_S", "Inf1", false),
            inf2: state(b, "vInf2_S", "Inf2", false),
            inf3: state(b, "vInf3_S", "Inf3", false),
            past_part: state(b, "vPastPart_S", "PastPart", false),
            fut_part: state(b, "vFutPart_S", "FutPart", false),
            pres_part: state(b, "vPresPart_S", "PresPart", false),
            agt: state(b, "vAgt_S", "Agt", false),
            after_doing_so: state(b, "vAfterDoing_S", "AfterDoingSo", false),
            by_doing_so: state(b, "vByDoingSo_S", "ByDoingSo", false),
            when: state(b, "vWhen_S", "When", false),
            without_having_done_so: state(b, "vWithoutHavingDoneSo_S", "WithoutHavingDoneSo", false),
            since_doing_so: state(b, "vSinceDoingSo_S", "SinceDoingSo", false),
        }
    }

    /// Copula on a nominal predicate: evdeyim, kitaptı, güzelmiş, evdedir.
    pub fn connect_copula(&self, b: &mut GraphBuilder, nverb: StateId) {
        b.from(nverb)
            .add(self.a1sg, "+yIm")
            .add(self.a2sg, "sIn")
            .add(self.a1pl, "+yIz")
            .add(self.a2pl, "sInIz")
            .add(self.past, "+y>dI")
            .add(self.narr, "+ymIş")
            .add(self.cond, "+ysA")
            .add(self.cop, ">dIr");
    }

    /// -Im -sIn -∅ -Iz -sInIz -lAr
    fn person_set_1(&self, b: &mut GraphBuilder, from: StateId) {
        b.from(from)
            .add(self.a1sg, "+yIm")
            .add(self.a2sg, "sIn")
            .add_empty(self.a3sg)
            .add(self.a1pl, "+yIz")
            .add(self.a2pl, "sInIz")
            .add(self.a3pl, "lAr");
    }

    /// -m -n -∅ -k -nIz -lAr after the past and the conditional.
    fn person_set_2(&self, b: &mut GraphBuilder, from: StateId) {
        b.from(from)
            .add(self.a1sg, "m")
            .add(self.a2sg, "n")
            .add_empty(self.a3sg)
            .add(self.a1pl, "k")
            .add(self.a2pl, "nIz")
            .add(self.a3pl, "lAr");
    }

    /// Past, conditional and evidential copula after a tense: okuyordu,
    /// okuyorsa, okuyormuş.
    fn copula_tenses(&self, b: &mut GraphBuilder, from: StateId) {
        b.from(from)
            .add(self.past, "+y>dI")
            .add(self.cond, "+ysA")
            .add(self.narr, "+ymIş");
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

pub(crate) fn connect(b: &mut GraphBuilder, v: &VerbalStates, n: &NominalStates) {
    roots(b, v);
    negation(b, v);
    tenses(b, v);
    // okumak, okumamak
    derivations(b, v, v.verb);
    derivations(b, v, v.neg);
    derived_categories(b, v, n);
}

fn roots(b: &mut GraphBuilder, v: &VerbalStates) {
    use PhoneticAttribute::LastLetterVowel;

    let vowel_or_l = || Condition::has_attr(LastLetterVowel).or(Condition::last_letter_is('l'));

    b.from(v.verb)
        .add_empty(v.imp)
        .add(v.neg, "mA")
        .add(v.neg_prog, "m")
        .add(v.unable, "+yA")
        .add(v.able, "+yAbil")
        .add_if(v.pass, "+In", vowel_or_l())
        .add_if(v.pass, "Il", !vowel_or_l())
        .add_if(v.caus, "t", Condition::has_attr(LastLetterVowel))
        .add_if(v.caus, ">dIr", Condition::not_has(LastLetterVowel))
        .add(v.recip, "+Iş")
        .add_if(v.reflex, "+In", Condition::root_has(RootAttribute::Reflexive))
        .add_if(v.prog1, "Iyor", Condition::not_has(LastLetterVowel))
        .add(v.prog2, "mAktA")
        .add_if(
            v.aor,
            "+Ar",
            Condition::root_has(RootAttribute::AoristA).and(Condition::no_surface()),
        )
        .add_if(
            v.aor,
            "+Ir",
            Condition::root_has(RootAttribute::AoristI).or(!Condition::no_surface()),
        )
        .add(v.fut, "+yAcA~k")
        .add(v.fut, "+yAcA!ğ")
        .add(v.past, ">dI")
        .add(v.narr, "mIş")
        .add(v.cond, "sA")
        .add(v.neces, "mAlI")
        .add(v.opt, "+yA");

    // okuyor from ok-
    b.from(v.verb_progressive_drop).add(v.prog1, "Iyor");

    for voice in [v.able, v.pass, v.caus, v.recip, v.reflex] {
        b.from(voice).add_empty(v.verb);
    }
    b.from(v.unable).add(v.neg, "mA");

    b.from(v.imp)
        .add_empty(v.a2sg)
        .add(v.a3sg, "sIn")
        .add(v.a2pl, "+yIn")
        .add(v.a2pl, "+yInIz")
        .add(v.a3pl, "sInlAr");
}

fn negation(b: &mut GraphBuilder, v: &VerbalStates) {
    b.from(v.neg)
        .add(v.aor_neg, "z")
        .add_empty(v.aor_neg_empty)
        .add_empty(v.imp)
        .add(v.past, ">dI")
        .add(v.narr, "mIş")
        .add(v.fut, "+yAcA~k")
        .add(v.fut, "+yAcA!ğ")
        .add(v.cond, "sA")
        .add(v.neces, "mAlI")
        .add(v.opt, "+yA")
        .add(v.prog2, "mAktA");

    // okumuyor
    b.from(v.neg_prog).add(v.prog1, "Iyor");

    // okumam, okumayız
    b.from(v.aor_neg_empty).add(v.a1sg, "m").add(v.a1pl, "yIz");
    b.from(v.aor_neg)
        .add(v.a2sg, "sIn")
        .add_empty(v.a3sg)
        .add(v.a2pl, "sInIz")
        .add(v.a3pl, "lAr");
    v.copula_tenses(b, v.aor_neg);
}

fn tenses(b: &mut GraphBuilder, v: &VerbalStates) {
    for tense in [v.prog1, v.prog2, v.aor, v.fut, v.neces] {
        v.person_set_1(b, tense);
        v.copula_tenses(b, tense);
    }
    v.person_set_1(b, v.narr);
    b.from(v.narr).add(v.past, "+y>dI").add(v.cond, "+ysA");

    v.person_set_2(b, v.past);
    b.from(v.past).add(v.cond, "+ysA");
    v.person_set_2(b, v.cond);

    b.from(v.opt)
        .add(v.a1sg, "+yIm")
        .add(v.a2sg, "sIn")
        .add_empty(v.a3sg)
        .add(v.a1pl, "lIm")
        .add(v.a2pl, "sInIz")
        .add(v.a3pl, "lAr");

    // okuyordur, okuyacaktır, okumuştur
    let m = |b: &mut GraphBuilder, id: &str| Condition::contains_morpheme(b.morpheme(id));
    let tense = m(b, "Prog1")
        .or(m(b, "Prog2"))
        .or(m(b, "Fut"))
        .or(m(b, "Narr"));
    let no_past = !m(b, "Past");
    b.from(v.a3sg).add_if(v.cop, ">dIr", tense.and(no_past));
}

/// Verb-to-nominal and verb-to-adverb derivations out of `from`.
fn derivations(b: &mut GraphBuilder, v: &VerbalStates, from: StateId) {
    b.from(from)
        .add(v.inf1, "mA~k")
        .add(v.inf2, "mA")
        .add(v.inf3, "+yIş")
        .add(v.past_part, ">dI~k")
        .add(v.past_part, ">dI!ğ")
        .add(v.fut_part, "+yAcA~k")
        .add(v.fut_part, "+yAcA!ğ")
        .add(v.pres_part, "+yAn")
        .add(v.agt, "+yIcI")
        .add(v.after_doing_so, "+yIp")
        .add(v.by_doing_so, "+yArAk")
        .add(v.when, "+yIncA")
        .add(v.without_having_done_so, "mAdAn")
        .add(v.since_doing_so, "+yAlI");
}

fn derived_categories(b: &mut GraphBuilder, v: &VerbalStates, n: &NominalStates) {
    for noun_like in [v.inf1, v.inf2, v.inf3, v.past_part, v.fut_part, v.agt] {
        b.from(noun_like).add_empty(n.noun);
    }
    b.from(v.pres_part).add_empty(n.adjective);
    for adverb in [
        v.after_doing_so,
        v.by_doing_so,
        v.when,
        v.without_having_done_so,
        v.since_doing_so,
    ] {
        b.from(adverb).add_empty(n.adverb);
    }
}
