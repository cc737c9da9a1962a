//! Deterministic date-seeded news generation.
//!
//! This crate fabricates small batches of "news" items from a calendar date
//! string. Generation is fully deterministic: the date text is hashed with a
//! rolling 32-bit hash, and every field of every item is selected from a
//! fixed pool using seeds derived from that text. The same date string
//! always reproduces the same batch, across runs and processes.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Bit-exact 32-bit string hashing with wraparound semantics
//! - Seeded selection from fixed candidate pools
//! - Batch generation with stable ordering, sizes, and reading times
//! - Calendar date validation and random date picking for the input layer
//! - A versioned theme catalogue and a card-rendering CLI
//!
//! # Example
//!
//! ```
//! use chrononews::{NewsPools, generate_news};
//!
//! let pools = NewsPools::built_in();
//! let batch = generate_news(&pools, "12.10.1492").expect("non-empty pools");
//!
//! assert!((3..=7).contains(&batch.len()));
//! let repeat = generate_news(&pools, "12.10.1492").expect("non-empty pools");
//! assert_eq!(batch, repeat);
//! ```

mod atomic_io;
mod date;
mod error;
mod generator;
mod hash;
mod item;
pub mod news_cli;
mod picker;
mod pools;
mod theme;

pub use date::{DateInput, YEAR_MAX, days_in_month};
pub use error::{CatalogError, DateError, PickError, WriteError};
pub use generator::{NewsPools, generate_news};
pub use hash::hash_code;
pub use item::NewsItem;
pub use picker::pick;
pub use pools::{CATEGORIES, DESCRIPTIONS, SOURCES, TITLES};
pub use theme::{Theme, ThemeCatalog};
