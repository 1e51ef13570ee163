//! Turkish morphological analyzer and stemmer.
//!
//! Words are analyzed by walking a hand-authored morphotactics graph from
//! every lexicon stem that prefixes the input; each complete walk is one
//! analysis. A rule-based disambiguator picks one analysis per word and the
//! stemmer reports its dictionary root.
//!
//! # Modules
//!
//! - [`lexicon`] -- Lexicon file parsing, attribute inference, stem forms
//! - [`morphotactics`] -- Morpheme inventory and the Turkish suffix graph
//! - [`morphology`] -- The analyzer and the disambiguator
//! - [`tokenizer`] -- Typed tokens with code point positions
//! - [`stemmer`] -- Stemming driver and the shared stem cache
//! - [`handle`] -- [`Morphology`], the handle most callers want
//!
//! ```no_run
//! use turkmorph_tr::Morphology;
//!
//! let morphology = Morphology::create_default()?;
//! assert_eq!(morphology.stem_word("kitapları"), "kitap");
//! # Ok::<(), turkmorph_tr::MorphologyError>(())
//! ```

pub mod handle;
pub mod lexicon;
pub mod morphology;
pub mod morphotactics;
pub mod stemmer;
pub mod tokenizer;

pub use handle::{DEFAULT_LEXICON, Morphology, MorphologyError, MorphologyOptions};
pub use lexicon::{Lexicon, LexiconLoadError};
pub use morphology::{Analyzer, TurkishAnalyzer};
pub use stemmer::StemSpan;
pub use turkmorph_core::analysis::{Analysis, AnalysisBundle, MorphemeData};
