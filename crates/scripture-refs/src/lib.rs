//! Resolution of free-form scripture citations.
//!
//! This crate turns text such as `启一1`, `Gen 1:1-3` or `创1:1, Ex 2:2`
//! into structured [`ParsedReference`] values. The pipeline is:
//!
//! 1. [`normalize`]: fold fullwidth punctuation, dashes and chapter/verse markers
//! 2. [`matcher`]: find `<book><chapter><sep><verses>` candidates
//! 3. [`books::resolve`] and [`numeral::convert`]: resolve each piece
//! 4. [`range::expand`]: turn `1-3` into `[1, 2, 3]`
//!
//! Candidates that fail any step are dropped silently; free text is expected
//! to contain prose between citations.
//!
//! # Example
//!
//! ```rust
//! use scripture_refs::{BookCode, parse_references};
//!
//! let refs = parse_references("创1:1, Ex 2:2-3");
//! assert_eq!(refs.len(), 2);
//! assert_eq!(refs[0].book, BookCode::Genesis);
//! assert_eq!(refs[1].verses, vec![2, 3]);
//! ```

pub mod books;
pub mod matcher;
pub mod normalize;
pub mod numeral;
pub mod range;
pub mod reference;

pub use books::{BookCode, BookNames};
pub use normalize::normalize;
pub use reference::{ParsedReference, parse_references, verse_key};
