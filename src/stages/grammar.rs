/// Grammar-adjacent stages: typo correction, contractions, apostrophes.
use crate::error::CompressError;
use crate::stages::Stage;
use regex::Regex;

/// Collapse the duplicated possessive typo pattern `s's` to a single
/// apostrophe.
pub struct CorrectGrammar {
    pattern: Regex,
}

impl CorrectGrammar {
    pub fn new() -> Result<Self, CompressError> {
        Ok(Self {
            pattern: Regex::new(r"(?i)s's")?,
        })
    }
}

impl Stage for CorrectGrammar {
    fn name(&self) -> &'static str {
        "grammar"
    }

    fn rewrite(&self, text: &str) -> String {
        self.pattern.replace_all(text, "'").into_owned()
    }
}

/// Ordered phrase-to-contraction substitutions. Capturing the leading letter
/// preserves its case ("Is not" becomes "Isn't", "is not" becomes "isn't").
///
/// The "musn't" spelling is deliberate: it matches the original rule table
/// and is covered by tests, so it must not be corrected here.
pub struct FormContractions {
    rules: Vec<(Regex, &'static str)>,
}

impl FormContractions {
    pub fn new() -> Result<Self, CompressError> {
        let table: [(&str, &str); 9] = [
            (r"(?i)I would", "I'd"),
            (r"(?i)i will", "I'll"),
            (r"(?i)(i)t is", "${1}t's"),
            (r"(?i)(i)s not", "${1}sn't"),
            (r"(?i)(w)ill not", "${1}on't"),
            (r"(?i)(c)an ?not", "${1}an't"),
            (r"(?i)(d)o(es)? not", "${1}o${2}n't"),
            (r"(?i)(s)hould not", "${1}houldn't"),
            (r"(?i)(m)ust not", "${1}usn't"),
        ];
        let mut rules = Vec::with_capacity(table.len());
        for (pattern, replacement) in table {
            rules.push((Regex::new(pattern)?, replacement));
        }
        Ok(Self { rules })
    }
}

impl Stage for FormContractions {
    fn name(&self) -> &'static str {
        "contractions"
    }

    fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (pattern, replacement) in &self.rules {
            out = pattern.replace_all(&out, *replacement).into_owned();
        }
        out
    }
}

/// Remove the apostrophe from `n't`, leaving `nt`.
pub struct StripApostrophes {
    pattern: Regex,
}

impl StripApostrophes {
    pub fn new() -> Result<Self, CompressError> {
        Ok(Self {
            pattern: Regex::new(r"(?i)n't")?,
        })
    }
}

impl Stage for StripApostrophes {
    fn name(&self) -> &'static str {
        "apostrophes"
    }

    fn rewrite(&self, text: &str) -> String {
        self.pattern.replace_all(text, "nt").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_duplicated_possessive() {
        let stage = CorrectGrammar::new().unwrap();
        assert_eq!(stage.rewrite("the boss's desk"), "the bos' desk");
    }

    #[test]
    fn contracts_common_phrases() {
        let stage = FormContractions::new().unwrap();
        assert_eq!(
            stage.rewrite("It is; it is not. I will; I will not. I would not."),
            "It's; it's not. I'll; I'll not. I'd not."
        );
    }

    #[test]
    fn preserves_case_of_leading_letter() {
        let stage = FormContractions::new().unwrap();
        assert_eq!(
            stage.rewrite("It does not. Is not. Does not. Do not. You must not."),
            "It doesn't. Isn't. Doesn't. Don't. You musn't."
        );
    }

    #[test]
    fn contracts_cannot_both_spellings() {
        let stage = FormContractions::new().unwrap();
        assert_eq!(stage.rewrite("I cannot, you can not"), "I can't, you can't");
    }

    #[test]
    fn strips_apostrophes_from_contractions() {
        let stage = StripApostrophes::new().unwrap();
        assert_eq!(
            stage.rewrite("It's not; I won't, you can't. So don't."),
            "It's not; I wont, you cant. So dont."
        );
    }
}
