/// Virtual length charged for every extracted URL, mirroring what a link
/// shortener would spend on it. URLs shorter than this still cost the full
/// weight.
pub const URL_WEIGHT: usize = 20;

/// Effective length of `text` for budget purposes: the raw character count
/// with each URL's real length swapped for [`URL_WEIGHT`].
///
/// The result is signed: a handful of very long URLs against a short text
/// drives the formula below zero.
pub fn effective_length(text: &str, urls: &[String]) -> i64 {
    let real: usize = urls.iter().map(|u| u.chars().count()).sum();
    let charged = urls.len() * URL_WEIGHT;
    text.chars().count() as i64 - real as i64 + charged as i64
}
