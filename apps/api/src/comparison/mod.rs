// Comparison engine: word-level diffing, bullet matching, section
// comparators, and the document-level aggregator. Everything in here is
// pure and synchronous — the HTTP layer in handlers.rs is the only
// async surface.

pub mod aggregator;
pub mod aligner;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod matcher;
pub mod skills;
pub mod stats;
pub mod summary;
pub mod word_diff;
