//! Deterministic news generation from a date string.
//!
//! This module provides the core generation function that produces a
//! reproducible batch of news items from an opaque date string. The same
//! string always produces an identical batch; changing even the formatting
//! of the date (such as zero-padding) changes the seed and therefore the
//! output.

use crate::error::PickError;
use crate::hash::hash_code;
use crate::item::NewsItem;
use crate::picker::pick;
use crate::pools;

/// Smallest number of items in a batch.
const MIN_ITEMS: usize = 3;

/// Spread of possible batch sizes above [`MIN_ITEMS`].
const ITEM_COUNT_SPREAD: u32 = 5;

/// Smallest derived reading time in minutes.
const MIN_READ_TIME: u8 = 2;

/// Spread of possible reading times above [`MIN_READ_TIME`].
const READ_TIME_SPREAD: u32 = 8;

/// The four selection pools the generator draws from.
///
/// Pool identity is part of the determinism contract, so the pools are
/// validated as non-empty at construction time and never mutated afterwards.
/// Use [`NewsPools::built_in`] for the shipped content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsPools {
    titles: &'static [&'static str],
    descriptions: &'static [&'static str],
    categories: &'static [&'static str],
    sources: &'static [&'static str],
}

impl NewsPools {
    /// Builds a pool set from caller-supplied arrays.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::EmptyPool`] if any pool is empty. An empty pool
    /// is a configuration defect and must be rejected before generation.
    pub fn new(
        titles: &'static [&'static str],
        descriptions: &'static [&'static str],
        categories: &'static [&'static str],
        sources: &'static [&'static str],
    ) -> Result<Self, PickError> {
        let pools = [titles, descriptions, categories, sources];
        if pools.iter().any(|pool| pool.is_empty()) {
            return Err(PickError::EmptyPool);
        }
        Ok(Self {
            titles,
            descriptions,
            categories,
            sources,
        })
    }

    /// Returns the shipped pool set.
    #[must_use]
    pub const fn built_in() -> Self {
        Self {
            titles: pools::TITLES,
            descriptions: pools::DESCRIPTIONS,
            categories: pools::CATEGORIES,
            sources: pools::SOURCES,
        }
    }

    /// Returns the title pool.
    #[must_use]
    pub const fn titles(&self) -> &'static [&'static str] {
        self.titles
    }

    /// Returns the description pool.
    #[must_use]
    pub const fn descriptions(&self) -> &'static [&'static str] {
        self.descriptions
    }

    /// Returns the category pool.
    #[must_use]
    pub const fn categories(&self) -> &'static [&'static str] {
        self.categories
    }

    /// Returns the source pool.
    #[must_use]
    pub const fn sources(&self) -> &'static [&'static str] {
        self.sources
    }
}

impl Default for NewsPools {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Generates a deterministic batch of news items for a date string.
///
/// The date string is treated as an opaque seed: it is not parsed or
/// validated here, and any string, including the empty string, produces a
/// valid batch. The batch holds between 3 and 7 items, item ids are exactly
/// `0..len` in order, and every reading time falls in [2, 9].
///
/// # Errors
///
/// Returns [`PickError::EmptyPool`] only if `pools` was built with an empty
/// pool. [`NewsPools::new`] rejects that at construction, so generation from
/// any successfully constructed pool set always succeeds.
///
/// # Example
///
/// ```
/// use chrononews::{NewsPools, generate_news};
///
/// let pools = NewsPools::built_in();
/// let first = generate_news(&pools, "12.10.1492").expect("non-empty pools");
/// let second = generate_news(&pools, "12.10.1492").expect("non-empty pools");
///
/// assert_eq!(first, second);
/// assert!((3..=7).contains(&first.len()));
/// ```
pub fn generate_news(pools: &NewsPools, date: &str) -> Result<Vec<NewsItem>, PickError> {
    let count = item_count(date);
    let mut items = Vec::with_capacity(count);

    for index in 0..count {
        let seed = format!("{date}-{index}");
        items.push(NewsItem {
            id: index,
            title: (*pick(pools.titles, &format!("{seed}-title"))?).to_owned(),
            description: (*pick(pools.descriptions, &format!("{seed}-desc"))?).to_owned(),
            category: (*pick(pools.categories, &format!("{seed}-category"))?).to_owned(),
            source: (*pick(pools.sources, &format!("{seed}-source"))?).to_owned(),
            read_time: read_time_minutes(&seed),
        });
    }

    Ok(items)
}

/// Derives the batch size for a date string, in [3, 7].
#[expect(
    clippy::integer_division_remainder_used,
    reason = "modular reduction of the date hash is the batch-size contract"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the remainder is smaller than the batch-size spread"
)]
fn item_count(date: &str) -> usize {
    let offset = hash_code(date).unsigned_abs() % ITEM_COUNT_SPREAD;
    MIN_ITEMS + offset as usize
}

/// Derives the reading time for an item seed, in [2, 9].
#[expect(
    clippy::integer_division_remainder_used,
    reason = "modular reduction of the seed hash is the read-time contract"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the remainder is smaller than the read-time spread"
)]
fn read_time_minutes(seed: &str) -> u8 {
    let offset = hash_code(&format!("{seed}-time")).unsigned_abs() % READ_TIME_SPREAD;
    MIN_READ_TIME + offset as u8
}
