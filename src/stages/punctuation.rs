/// Punctuation deduplication.
use crate::stages::{rewrite_words, Stage};
use crate::urls::URL_PLACEHOLDER;

/// Collapse runs of identical ASCII punctuation to a single character, with
/// exceptions: four or more dots become exactly an ellipsis, three or more
/// hyphens become exactly a dash, and any word left holding an ellipsis or a
/// two-to-three hyphen run is not touched further.
pub struct DedupePunctuation;

impl Stage for DedupePunctuation {
    fn name(&self) -> &'static str {
        "dedupe_punct"
    }

    fn rewrite(&self, text: &str) -> String {
        rewrite_words(text, dedupe_word)
    }
}

fn dedupe_word(word: &str) -> String {
    let word = collapse_run(word, '.', 4, "...");
    let word = collapse_run(&word, '-', 3, "--");

    // The placeholder token must survive interior stages; its underscore
    // runs would otherwise be collapsed and break URL restoration.
    if word.contains(URL_PLACEHOLDER) {
        return word;
    }
    if word.contains("...") || word.contains("--") {
        return word;
    }

    squeeze_punct(&word)
}

/// Replace runs of `target` that are at least `min` long with `replacement`;
/// shorter runs pass through unchanged.
fn collapse_run(word: &str, target: char, min: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut run = 0usize;
    for c in word.chars() {
        if c == target {
            run += 1;
            continue;
        }
        flush_run(&mut out, target, run, min, replacement);
        run = 0;
        out.push(c);
    }
    flush_run(&mut out, target, run, min, replacement);
    out
}

fn flush_run(out: &mut String, target: char, run: usize, min: usize, replacement: &str) {
    if run >= min {
        out.push_str(replacement);
    } else {
        for _ in 0..run {
            out.push(target);
        }
    }
}

fn squeeze_punct(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if prev == Some(c) && c.is_ascii_punctuation() {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
