/// Postpress - shortens text to fit a post length limit.
///
/// Applies an ordered set of heuristic rewrite rules (whitespace collapsing,
/// contractions, abbreviations, vowel elision, ...) until the text fits a
/// character budget, counting embedded URLs at the fixed virtual length a
/// link shortener would give them. Compression is lossy and makes no promise
/// of semantic correctness; letter classes are ASCII-oriented.
pub mod counter;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod stages;
pub mod urls;

pub use counter::{effective_length, URL_WEIGHT};
pub use document::{CompressionSummary, TextDocument};
pub use error::{AppError, CompressError};
pub use pipeline::{Compressor, MAX_POST_LENGTH};
pub use urls::{restore_urls, UrlScanner, URL_PLACEHOLDER};
