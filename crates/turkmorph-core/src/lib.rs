//! Shared building blocks for the turkmorph workspace.
//!
//! - [`character`] -- Turkish letter classification and phoneme predicates
//! - [`case`] -- Turkish-aware case folding
//! - [`attributes`] -- phonetic and root attribute sets
//! - [`enums`] -- token types and part-of-speech categories
//! - [`token`] -- tokenizer output
//! - [`analysis`] -- morphological analysis results

pub mod analysis;
pub mod attributes;
pub mod case;
pub mod character;
pub mod enums;
pub mod token;
