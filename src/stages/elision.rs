/// Letter-level shortening: vowel elision, consonant deduplication, and
/// "-ing" trimming.
///
/// The vowel and consonant classes are fixed ASCII sets; non-ASCII letters
/// pass through untouched. That is the documented extent of Unicode support.
use crate::stages::{rewrite_words, Stage};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

fn is_lower_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

/// For each word of at least four characters that is not a hashtag, delete
/// every lowercase vowel except the first character of the word.
pub struct ElideVowels;

impl Stage for ElideVowels {
    fn name(&self) -> &'static str {
        "remove_vowels"
    }

    fn rewrite(&self, text: &str) -> String {
        rewrite_words(text, |word| {
            if word.starts_with('#') || word.chars().count() < 4 {
                return word.to_string();
            }
            let mut chars = word.chars();
            let mut out = String::with_capacity(word.len());
            if let Some(first) = chars.next() {
                out.push(first);
            }
            out.extend(chars.filter(|c| !is_vowel(*c)));
            out
        })
    }
}

/// Collapse runs of identical lowercase consonants to one letter. Runs of
/// capitals like "LLC" are treated as intentional acronyms and left alone.
pub struct DedupeConsonants;

impl Stage for DedupeConsonants {
    fn name(&self) -> &'static str {
        "dedupe_consonants"
    }

    fn rewrite(&self, text: &str) -> String {
        rewrite_words(text, |word| {
            let mut out = String::with_capacity(word.len());
            let mut prev: Option<char> = None;
            for c in word.chars() {
                if prev == Some(c) && is_lower_consonant(c) {
                    continue;
                }
                out.push(c);
                prev = Some(c);
            }
            out
        })
    }
}

/// Replace a trailing "ing" with "g". Skips short words like "ring", hashtag
/// words, and an exception list for words the rewrite would make ambiguous.
///
/// Available standalone; not part of the default pipeline.
pub struct TrimIng;

const ING_EXCEPTIONS: [&str; 1] = ["fling"];

impl Stage for TrimIng {
    fn name(&self) -> &'static str {
        "ing"
    }

    fn rewrite(&self, text: &str) -> String {
        rewrite_words(text, |word| {
            if !word.ends_with("ing")
                || word.starts_with('#')
                || word.chars().count() <= 4
                || ING_EXCEPTIONS.contains(&word)
            {
                return word.to_string();
            }
            format!("{}g", &word[..word.len() - 3])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_starting_vowels() {
        assert_eq!(ElideVowels.rewrite("aboard"), "abrd");
    }

    #[test]
    fn removes_internal_vowels() {
        assert_eq!(ElideVowels.rewrite("boardwalk"), "brdwlk");
    }

    #[test]
    fn leaves_short_words_alone() {
        assert_eq!(ElideVowels.rewrite("way you are"), "way you are");
    }

    #[test]
    fn skips_hash_tags() {
        assert_eq!(ElideVowels.rewrite("#boardwalk"), "#boardwalk");
    }

    #[test]
    fn ignores_uppercase_consonants() {
        assert_eq!(DedupeConsonants.rewrite("LLC BBC CCID"), "LLC BBC CCID");
    }

    #[test]
    fn leaves_one_consonant() {
        assert_eq!(DedupeConsonants.rewrite("llc bbc ccid"), "lc bc cid");
    }

    #[test]
    fn shortens_sleeping() {
        assert_eq!(TrimIng.rewrite("sleeping"), "sleepg");
    }

    #[test]
    fn ignores_hash_tagged_ing_words() {
        assert_eq!(TrimIng.rewrite("#sleeping"), "#sleeping");
    }

    #[test]
    fn ignores_short_ing_words() {
        assert_eq!(TrimIng.rewrite("ring sing"), "ring sing");
    }

    #[test]
    fn ignores_excepted_words() {
        assert_eq!(TrimIng.rewrite("fling"), "fling");
    }
}
