// Criterion benchmarks for turkmorph-tr over the embedded lexicon.
//
// Run:
//   cargo bench -p turkmorph-tr
//   cargo bench -p turkmorph-tr --features parallel

use criterion::{Criterion, criterion_group, criterion_main};
use turkmorph_tr::{Morphology, MorphologyOptions};

const WORDS: &[&str] = &[
    "kitap", "kitapları", "kitabı", "evlerimizden", "dosyadaki", "mahkemesi", "çocukların",
    "ağacın", "masadaki", "arkadaşlarımla", "öğrenciler", "şehirde", "oğlu", "okula",
    "televizyonda", "saatte", "hakkında", "kalbimde", "zeytinyağına", "güzelliği", "bizim",
    "sana", "ikinci", "okuyorum", "okuyacağım", "geliyorlar", "yapmadım", "gelmezler",
    "görüşmek", "yaptırdı", "yazılmış", "ediyor", "bekliyor", "söylüyor", "gidiyorum",
    "dördüncü", "xyzzy", "İstanbul'da",
];

const PARAGRAPHS: &[&str] = &[
    "Kitapları okuyorum ve arkadaşlarımla konuşuyorum.",
    "Dün akşam çocuklar bahçede oynarken kediler ağacın altında uyuyordu.",
    "Öğretmen öğrencilere yeni bir ödev verdi, ama herkes dikkatle dinlemedi.",
    "Ankara'da yaşayan zengin bir adam 12.05.2024 tarihinde mahkemeye gitti.",
    "Saat 14:30'da @ali ile buluşup https://ornek.com.tr adresine baktık :)",
];

fn build(cache_capacity: usize) -> Morphology {
    Morphology::create_default()
        .expect("default morphology")
        .with_options(MorphologyOptions {
            cache_capacity,
            ..MorphologyOptions::default()
        })
}

/// All analyses of every word in the list.
fn bench_analyze_words(c: &mut Criterion) {
    let m = build(0);
    c.bench_function("analyze_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(m.analyze(word));
            }
        });
    });
}

/// stem_word with the cache disabled, so every call runs the analyzer.
fn bench_stem_cold(c: &mut Criterion) {
    let m = build(0);
    c.bench_function("stem_words_cold", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(m.stem_word(word));
            }
        });
    });
}

/// stem_word with every word already cached.
fn bench_stem_warm(c: &mut Criterion) {
    let m = build(1024);
    for word in WORDS {
        m.stem_word(word);
    }
    c.bench_function("stem_words_warm", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(m.stem_word(word));
            }
        });
    });
}

fn bench_stem_text_with_positions(c: &mut Criterion) {
    let m = build(0);
    c.bench_function("stem_text_with_positions_5_paragraphs", |b| {
        b.iter(|| {
            for text in PARAGRAPHS {
                std::hint::black_box(m.stem_text_with_positions(text));
            }
        });
    });
}

fn bench_stem_texts(c: &mut Criterion) {
    let m = build(0);
    let corpus: Vec<&str> = PARAGRAPHS.iter().cycle().take(100).copied().collect();
    c.bench_function("stem_texts_100_paragraphs", |b| {
        b.iter(|| std::hint::black_box(m.stem_texts(&corpus)));
    });
}

criterion_group!(
    benches,
    bench_analyze_words,
    bench_stem_cold,
    bench_stem_warm,
    bench_stem_text_with_positions,
    bench_stem_texts,
);
criterion_main!(benches);
