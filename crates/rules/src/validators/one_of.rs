//! Membership in a fixed set of strings.

use crate::foundation::ValidationError;

crate::rule! {
    /// Validates that a string is one of a fixed, ordered set of values.
    ///
    /// Case-insensitive comparison goes character by character: two
    /// characters match when their Unicode lowercase or uppercase mappings
    /// agree. `"ÉTÉ"` matches `"été"`, and `"ſ"` matches `"s"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rules::foundation::Validate;
    /// use valid_rules::validators::one_of_rule;
    ///
    /// let rule = one_of_rule(["one", "two", "three"], false);
    /// assert!(rule.validate("ONE").is_ok());
    /// assert!(rule.validate("four").is_err());
    ///
    /// let strict = one_of_rule(["one", "two", "three"], true);
    /// assert!(strict.validate("One").is_err());
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub OneOfRule { values: Vec<String>, case_sensitive: bool } for str;
    rule(self, input) { self.values.iter().any(|v| self.matches(v, input)) }
    error(self, input) { ValidationError::not_allowed(&self.values, input) }
    new(values: impl IntoIterator<Item = impl Into<String>>, case_sensitive: bool) {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            case_sensitive,
        }
    }
    fn one_of_rule(values: impl IntoIterator<Item = impl Into<String>>, case_sensitive: bool);
}

impl OneOfRule {
    /// The allowed values, in construction order.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.values
    }

    /// Whether comparison is exact.
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn matches(&self, allowed: &str, input: &str) -> bool {
        if self.case_sensitive {
            allowed == input
        } else {
            allowed.chars().count() == input.chars().count()
                && allowed.chars().zip(input.chars()).all(|(a, b)| fold_eq(a, b))
        }
    }
}

fn fold_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}
