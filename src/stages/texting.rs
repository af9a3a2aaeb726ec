/// Texting-style shorthand.
use crate::error::CompressError;
use crate::stages::Stage;
use regex::Regex;

/// Aggressive substitutions common in texting but with a higher cognitive
/// load, so they are not part of the default pipeline. Applied in order:
/// equality shorthand, emoticon normalization, "regarding" rules, retweet
/// colon stripping, then single-word replacements.
pub struct TextingShorthand {
    rules: Vec<(Regex, &'static str)>,
}

impl TextingShorthand {
    pub fn new() -> Result<Self, CompressError> {
        let table: [(&str, &str); 10] = [
            (r"is (?:an?|the)", "="),
            (r":.\)|\(.:", ":)"),
            (r"(?i)(?:in|with)? regards? (?:to)?", "re"),
            (r"(?i)about|regarding|related(?: to)?|in response to", "re"),
            (r"(RT @[^:]+):?", "$1"),
            (r"\bare\b", "r"),
            (r"\bfor\b", "4"),
            (r"\bto", "2"),
            (r"why", "y"),
            (r"you", "u"),
        ];
        let mut rules = Vec::with_capacity(table.len());
        for (pattern, replacement) in table {
            rules.push((Regex::new(pattern)?, replacement));
        }
        Ok(Self { rules })
    }
}

impl Stage for TextingShorthand {
    fn name(&self) -> &'static str {
        "texting"
    }

    fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (pattern, replacement) in &self.rules {
            out = pattern.replace_all(&out, *replacement).into_owned();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texting(text: &str) -> String {
        TextingShorthand::new().unwrap().rewrite(text)
    }

    #[test]
    fn expresses_equality() {
        assert_eq!(
            texting("foo is a bar. bar is an afoo. baz is the quux"),
            "foo = bar. bar = afoo. baz = quux"
        );
    }

    #[test]
    fn uses_re_sensibly() {
        assert_eq!(texting("1 about 2. 3 related to 4"), "1 re 2. 3 re 4");
    }

    #[test]
    fn strips_colons_from_retweets() {
        assert_eq!(
            texting("Foo bar. RT @_baz_quux_: More fubar."),
            "Foo bar. RT @_baz_quux_ More fubar."
        );
    }

    #[test]
    fn normalizes_emoticons() {
        assert_eq!(texting("fine :-)"), "fine :)");
    }

    #[test]
    fn replaces_single_words() {
        assert_eq!(texting("thanks 4 that"), "thanks 4 that");
        assert_eq!(texting("waiting for it"), "waiting 4 it");
    }
}
