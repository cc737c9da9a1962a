//! Fixed selection pools for generated news content.
//!
//! Pool contents and ordering are part of the determinism contract: the
//! selection index depends on pool length, so reordering or resizing a pool
//! changes every downstream batch. The pools are process-wide constants and
//! are never reallocated per generation call.

/// Headline pool.
pub const TITLES: &[&str] = &[
    "Scientists unveil new air purification technology",
    "New animal species discovered in the Amazon rainforest",
    "Quantum computing breakthrough solves hardest problems in seconds",
    "International Mars colonisation project launched",
    "Cure found for previously untreatable disease",
    "Global warming halted thanks to new technology",
    "Artificial intelligence composes symphony that wins over critics",
    "First fully sustainable city completed",
    "Perpetual energy source invented",
    "Diplomats reach historic universal disarmament agreement",
];

/// Body text pool.
pub const DESCRIPTIONS: &[&str] = &[
    "An international research group has presented the results of years of work that could change the future of humanity.",
    "Experts call the discovery revolutionary and predict major changes in the field within the next few years.",
    "For the first time in history such impressive results have been achieved, causing a wide stir in the scientific community.",
    "After decades of research and failed attempts, real progress has finally been made on this problem.",
    "The event has already been called historic. Experts around the world are discussing the consequences of this achievement.",
    "Nobody expected such a result, but numerous tests have confirmed the effectiveness of the new approach.",
    "This could be the start of a new era in human development, leading specialists claim.",
    "An innovative approach has solved a problem that seemed intractable for many years.",
    "A large-scale project involving scientists from many countries has finally produced tangible results.",
    "Technology that seemed like science fiction yesterday is becoming reality today.",
];

/// Category label pool.
pub const CATEGORIES: &[&str] = &[
    "Science",
    "Technology",
    "Society",
    "Politics",
    "Ecology",
    "Medicine",
    "Space",
    "Culture",
];

/// Attributed source pool.
pub const SOURCES: &[&str] = &[
    "World News",
    "Science Herald",
    "Tech Review",
    "Planet Today",
    "Future Chronicles",
];
