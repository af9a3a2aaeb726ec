/// URL extraction and restoration.
///
/// URLs must not be mangled by the rewrite stages, so they are swapped out for
/// a fixed placeholder before the pipeline runs and swapped back in afterward.
use crate::document::TextDocument;
use crate::error::CompressError;
use regex::Regex;

/// Sentinel substituted for each extracted URL while interior stages run.
/// External code inspecting mid-pipeline state may rely on this literal.
pub const URL_PLACEHOLDER: &str = "__PLACEHOLDER4URLS__";

/// Heuristic URL matcher: schemed URIs, `www.`-prefixed hosts, or bare
/// domain-plus-path tokens. Trailing sentence punctuation and surrounding
/// quote or bracket characters are excluded from the match.
const URL_PATTERN: &str = r#"(?xi)
    \b
    (?:
        [a-z][\w-]+ : (?: /{1,3} | [a-z0-9%] )
      | www \d{0,3} \.
      | [a-z0-9.\-]+ \. [a-z]{2,4} /
    )
    (?:
        [^\s()<>]+
      | \( (?: [^\s()<>]+ | \( [^\s()<>]+ \) )* \)
    )+
    (?:
        \( (?: [^\s()<>]+ | \( [^\s()<>]+ \) )* \)
      | [^\s`!()\[\]{};:'".,<>?«»“”‘’]
    )
"#;

/// Scans working text for URL-like substrings.
pub struct UrlScanner {
    pattern: Regex,
}

impl UrlScanner {
    pub fn new() -> Result<Self, CompressError> {
        Ok(Self {
            pattern: Regex::new(URL_PATTERN)?,
        })
    }

    /// Replace every URL-like span in the working text with
    /// [`URL_PLACEHOLDER`], recording the matches left to right. Duplicate
    /// URLs are recorded as separate entries. Overlapping candidates resolve
    /// leftmost-greedy; no check confirms a match is a well-formed URL.
    pub fn extract(&self, doc: &mut TextDocument) {
        let text = doc.compressed();
        let mut out = String::with_capacity(text.len());
        let mut urls = Vec::new();
        let mut last = 0;
        for m in self.pattern.find_iter(text) {
            out.push_str(&text[last..m.start()]);
            out.push_str(URL_PLACEHOLDER);
            urls.push(m.as_str().to_string());
            last = m.end();
        }
        out.push_str(&text[last..]);
        doc.set_compressed(out);
        doc.urls = urls;
    }
}

/// Put extracted URLs back, pairing each one with the first remaining
/// placeholder occurrence — strict FIFO against extraction order.
///
/// Known failure mode, kept from the original design: nothing validates the
/// placeholder count against the URL count. If the literal placeholder text
/// appears in ordinary content, or `urls` was mutated before restoration,
/// pairing breaks silently.
pub fn restore_urls(doc: &mut TextDocument) {
    for i in 0..doc.urls.len() {
        doc.compressed = doc
            .compressed
            .replacen(URL_PLACEHOLDER, doc.urls[i].as_str(), 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> TextDocument {
        let mut doc = TextDocument::new(text);
        UrlScanner::new().unwrap().extract(&mut doc);
        doc
    }

    #[test]
    fn inserts_placeholders() {
        let doc = extract("abc http://123 def http://456");
        assert_eq!(
            doc.compressed(),
            format!("abc {} def {}", URL_PLACEHOLDER, URL_PLACEHOLDER)
        );
    }

    #[test]
    fn stores_urls_in_order() {
        let doc = extract("abc http://123 def http://456");
        assert_eq!(doc.urls(), ["http://123", "http://456"]);
    }

    #[test]
    fn keeps_duplicates_as_separate_entries() {
        let doc = extract("see http://123 and http://123");
        assert_eq!(doc.urls(), ["http://123", "http://123"]);
        assert_eq!(doc.compressed().matches(URL_PLACEHOLDER).count(), 2);
    }

    #[test]
    fn excludes_trailing_sentence_punctuation() {
        let doc = extract("go to www.example.com/page. Now.");
        assert_eq!(doc.urls(), ["www.example.com/page"]);
    }

    #[test]
    fn round_trips_exactly() {
        let text = "abc http://123 def www.example.com/x ghi";
        let mut doc = extract(text);
        restore_urls(&mut doc);
        assert_eq!(doc.compressed(), text);
    }

    #[test]
    fn restores_in_fifo_order() {
        let mut doc = TextDocument::new(format!(
            "abc {} def {}",
            URL_PLACEHOLDER, URL_PLACEHOLDER
        ));
        doc.urls = vec!["http://123".to_string(), "http://456".to_string()];
        restore_urls(&mut doc);
        assert_eq!(doc.compressed(), "abc http://123 def http://456");
    }

    #[test]
    fn ignores_plain_text() {
        let doc = extract("nothing to see here");
        assert!(doc.urls().is_empty());
        assert_eq!(doc.compressed(), "nothing to see here");
    }
}
