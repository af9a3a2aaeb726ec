/// Word and phrase abbreviation.
use crate::error::CompressError;
use crate::stages::{rewrite_words, Stage};
use regex::Regex;

/// Whole-word shorthand lookup, case-insensitive through lowercasing.
/// Hashtag words never match because the lookup is against the exact
/// lowercased word, marker included.
fn shorthand(word: &str) -> Option<&'static str> {
    match word {
        "and" => Some("&"),
        "javascript" => Some("JS"),
        "string" => Some("str"),
        "one" => Some("1"),
        "two" => Some("2"),
        "three" => Some("3"),
        "four" => Some("4"),
        "five" => Some("5"),
        "six" => Some("6"),
        "seven" => Some("7"),
        "eight" => Some("8"),
        "nine" => Some("9"),
        "ten" => Some("10"),
        "eleven" => Some("11"),
        "twelve" => Some("12"),
        "thirteen" => Some("13"),
        "fourteen" => Some("14"),
        "fifteen" => Some("15"),
        // "15" is what the original rule table maps "sixteen" to; the
        // collision is preserved on purpose, not a typo to fix.
        "sixteen" => Some("15"),
        "seventeen" => Some("17"),
        "eighteen" => Some("18"),
        "nineteen" => Some("19"),
        "twenty" => Some("20"),
        _ => None,
    }
}

/// Replace individual words with fixed shorthand, then apply phrase-level
/// rules: "is a/an/the" becomes "=", the various "regarding" forms become
/// "re".
pub struct Abbreviate {
    equality: Regex,
    regards: Regex,
    topic: Regex,
}

impl Abbreviate {
    pub fn new() -> Result<Self, CompressError> {
        Ok(Self {
            equality: Regex::new(r"is (?:an?|the)")?,
            regards: Regex::new(r"(?i)(?:in|with)? regards? (?:to)?")?,
            topic: Regex::new(r"about|regarding|related(?: to)?|in response to")?,
        })
    }
}

impl Stage for Abbreviate {
    fn name(&self) -> &'static str {
        "abbr"
    }

    fn rewrite(&self, text: &str) -> String {
        let worded = rewrite_words(text, |word| {
            match shorthand(word.to_lowercase().as_str()) {
                Some(short) => short.to_string(),
                None => word.to_string(),
            }
        });
        let out = self.equality.replace_all(&worded, "=");
        let out = self.regards.replace_all(&out, "re");
        self.topic.replace_all(&out, "re").into_owned()
    }
}
