//! Generated news item type.

use serde::{Deserialize, Serialize};

/// One fabricated news entry.
///
/// The `id` is the item's position within its batch; it is unique within a
/// batch but not globally. Every text field is drawn verbatim from a fixed
/// pool, and `read_time` is derived from the same seed family.
///
/// # Example
///
/// ```
/// use chrononews::NewsItem;
///
/// let item = NewsItem {
///     id: 0,
///     title: "Perpetual energy source invented".to_owned(),
///     description: "Technology that seemed like science fiction yesterday is becoming reality today.".to_owned(),
///     category: "Science".to_owned(),
///     source: "World News".to_owned(),
///     read_time: 4,
/// };
///
/// assert_eq!(item.read_time, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Sequence index within the batch, starting at zero.
    pub id: usize,
    /// Headline text.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Attributed source name.
    pub source: String,
    /// Estimated reading time in minutes, between 2 and 9 inclusive.
    pub read_time: u8,
}
