use crate::domain::model::{BoundaryRule, KeywordSet};

/// Delimited-token keyword matcher.
///
/// A keyword counts only when a boundary character sits directly before or
/// after it (`" ai"`, `"ai "`, and with [`BoundaryRule::SpaceOrHyphen`] also
/// `"-ai"`, `"ai-"`). A title that is nothing but the keyword, or that ends the
/// keyword with punctuation (`"AI."`), therefore does not match. The check is
/// one-sided: `" ai"` is found inside `" aim"`.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    patterns: Vec<String>,
}

impl KeywordMatcher {
    pub fn new(keywords: &KeywordSet, boundary: BoundaryRule) -> Self {
        let delimiters: &[char] = match boundary {
            BoundaryRule::Space => &[' '],
            BoundaryRule::SpaceOrHyphen => &[' ', '-'],
        };

        let mut patterns = Vec::with_capacity(keywords.len() * delimiters.len() * 2);
        for keyword in keywords.terms() {
            for delimiter in delimiters {
                patterns.push(format!("{}{}", delimiter, keyword));
                patterns.push(format!("{}{}", keyword, delimiter));
            }
        }

        Self { patterns }
    }

    pub fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.patterns.iter().any(|pattern| title.contains(pattern.as_str()))
    }

    pub fn count_matches<I, S>(&self, titles: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        titles
            .into_iter()
            .filter(|title| self.matches(title.as_ref()))
            .count()
    }
}

/// One-shot form of [`KeywordMatcher::matches`] with the default boundary rule.
pub fn matches(title: &str, keywords: &KeywordSet) -> bool {
    KeywordMatcher::new(keywords, BoundaryRule::default()).matches(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_matcher() -> KeywordMatcher {
        KeywordMatcher::new(&KeywordSet::default(), BoundaryRule::SpaceOrHyphen)
    }

    #[test]
    fn test_space_delimited_keyword_matches() {
        let matcher = default_matcher();
        assert!(matcher.matches("Show HN: An AI assistant for spreadsheets"));
        assert!(matcher.matches("Show HN: I built a ChatGPT clone"));
        assert!(matcher.matches("Show HN: Prompt engineering playground"));
    }

    #[test]
    fn test_hyphen_delimited_keyword_matches() {
        let matcher = default_matcher();
        assert!(matcher.matches("Show HN: AI-powered resume review"));
        assert!(matcher.matches("Show HN: Open-GPT, a tiny runner"));
    }

    #[test]
    fn test_keyword_inside_word_does_not_match() {
        let matcher = default_matcher();
        assert!(!matcher.matches("Show HN: He said it would work"));
        assert!(!matcher.matches("Show HN: A faster email client"));
        assert!(!matcher.matches("Show HN: Retail inventory tracker"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let matcher = default_matcher();
        assert!(matcher.matches("SHOW HN: GENAI TOOLKIT"));
        assert!(matcher.matches("show hn: genai toolkit"));
    }

    #[test]
    fn test_keyword_without_any_delimiter_does_not_match() {
        let matcher = default_matcher();
        assert!(!matcher.matches("AI"));
        assert!(!matcher.matches("ChatGPT"));
    }

    #[test]
    fn test_keyword_followed_by_punctuation_at_end() {
        let matcher = default_matcher();
        assert!(!matcher.matches("AI."));
        // 前面有空白就足夠
        assert!(matcher.matches("Show HN: Everything is AI."));
    }

    #[test]
    fn test_keyword_prefix_of_longer_word_matches() {
        let matcher = default_matcher();
        assert!(matcher.matches("Show HN: Aim trainer in the browser"));
    }

    #[test]
    fn test_space_rule_ignores_hyphens() {
        let matcher = KeywordMatcher::new(&KeywordSet::default(), BoundaryRule::Space);
        assert!(!matcher.matches("Show HN:AI-powered"));
        assert!(matcher.matches("Show HN: AI-powered"));
    }

    #[test]
    fn test_count_matches() {
        let matcher = default_matcher();
        let titles = vec![
            "Show HN: GPT wrapper",
            "Show HN: A Rust TUI",
            "Show HN: gen-ai notebook",
            "Show HN: Rails said hello",
        ];
        assert_eq!(matcher.count_matches(titles), 2);
    }

    #[test]
    fn test_free_function_uses_given_keywords() {
        let keywords = KeywordSet::new(["Rust"]);
        assert!(matches("Show HN: A Rust debugger", &keywords));
        assert!(!matches("Show HN: Trusty old tools", &keywords));
    }
}
