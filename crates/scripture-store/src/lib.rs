//! Verse retrieval for resolved scripture references.
//!
//! The verse corpus is an external collaborator behind the [`VerseStore`]
//! trait. [`retrieve`] expands each [`ParsedReference`] into one lookup per
//! verse and returns records in citation order, substituting a placeholder
//! record for every verse the store does not have.
//!
//! # Example
//!
//! ```rust
//! use scripture_store::{MemoryStore, find_verses};
//!
//! let store = MemoryStore::sample().unwrap();
//! let records = pollster::block_on(find_verses(&store, "创1:1-2, Exo 2:2")).unwrap();
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].book_en, "Genesis");
//! assert!(!records[2].is_placeholder());
//! ```
//!
//! [`ParsedReference`]: scripture_refs::ParsedReference

pub mod error;
pub mod record;
pub mod retrieve;
pub mod store;

pub use error::{Result, StoreError};
pub use record::{VerseRecord, placeholder};
pub use retrieve::{find_verses, retrieve, retrieve_concurrent};
pub use store::{MemoryStore, VerseStore, VerseText};
