//! Question inputs validated at construction

use super::ValidationError;

/// A question ready to insert: every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    difficulty: i32,
    category: i32,
}

impl NewQuestion {
    /// Build from optional parts, failing on the first absent field.
    ///
    /// Only presence is checked. Text may be empty and the category is not
    /// looked up here; the store's foreign key rejects unknown categories.
    ///
    /// # Example
    /// ```
    /// use trivia_server::models::NewQuestion;
    ///
    /// assert!(NewQuestion::new(Some("Q".into()), Some("A".into()), Some(1), Some(2)).is_ok());
    /// assert!(NewQuestion::new(Some("Q".into()), None, Some(1), Some(2)).is_err());
    /// ```
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        difficulty: Option<i32>,
        category: Option<i32>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: question.ok_or(ValidationError::Missing { field: "question" })?,
            answer: answer.ok_or(ValidationError::Missing { field: "answer" })?,
            difficulty: difficulty.ok_or(ValidationError::Missing { field: "difficulty" })?,
            category: category.ok_or(ValidationError::Missing { field: "category" })?,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    pub fn category(&self) -> i32 {
        self.category
    }
}

/// Non-empty search term for question-text lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "searchTerm" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test, the in-process twin of `ILIKE '%term%'`.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// `ILIKE` pattern with `%`, `_` and `\` in the term escaped so they
    /// match literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_requires_every_field() {
        let full = NewQuestion::new(Some("Q1".into()), Some("A1".into()), Some(1), Some(1));
        assert!(full.is_ok());

        #[allow(clippy::type_complexity)]
        let cases: [(Option<String>, Option<String>, Option<i32>, Option<i32>, &'static str); 4] = [
            (None, Some("A".into()), Some(1), Some(1), "question"),
            (Some("Q".into()), None, Some(1), Some(1), "answer"),
            (Some("Q".into()), Some("A".into()), None, Some(1), "difficulty"),
            (Some("Q".into()), Some("A".into()), Some(1), None, "category"),
        ];
        for (q, a, d, c, field) in cases {
            let err = NewQuestion::new(q, a, d, c).unwrap_err();
            assert_eq!(err, ValidationError::Missing { field });
        }
    }

    #[test]
    fn empty_text_is_still_present() {
        let q = NewQuestion::new(Some(String::new()), Some(String::new()), Some(0), Some(3)).unwrap();
        assert_eq!(q.question(), "");
        assert_eq!(q.category(), 3);
    }

    #[test]
    fn search_term_rejects_empty() {
        assert!(matches!(
            SearchTerm::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn search_term_matches_case_insensitively() {
        let term = SearchTerm::new("TiTlE").unwrap();
        assert!(term.matches("What is the title of the 1990 fantasy film?"));
        assert!(term.matches("Whose autobiography is entitled"));
        assert!(!term.matches("Who discovered penicillin?"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(SearchTerm::new("abc").unwrap().like_pattern(), "%abc%");
        assert_eq!(SearchTerm::new("50%").unwrap().like_pattern(), r"%50\%%");
        assert_eq!(SearchTerm::new("a_b").unwrap().like_pattern(), r"%a\_b%");
        assert_eq!(SearchTerm::new(r"c:\").unwrap().like_pattern(), r"%c:\\%");
    }
}
