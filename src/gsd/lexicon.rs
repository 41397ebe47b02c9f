//! Generation vocabularies for synthetic suspicious domains
//!
//! The built-in lists mirror common phishing naming tactics: impersonated
//! brands, credential-themed action words, support-themed modifiers, and the
//! cheap TLDs such domains tend to land on.

use crate::error::{GsdForgeError, Result};

/// Frequently impersonated brand names
pub const BRANDS: &[&str] = &[
    "paypal", "microsoft", "apple", "google", "amazon",
    "netflix", "facebook", "instagram", "whatsapp", "twitter",
    "linkedin", "ebay", "wellsfargo", "bankofamerica", "chase",
];

/// Credential-flow action words
pub const ACTIONS: &[&str] = &[
    "login", "verify", "secure", "update", "confirm",
    "validate", "authorize", "authenticate", "security", "account",
];

/// Support-themed modifier words
pub const MODIFIERS: &[&str] = &[
    "support", "help", "service", "billing", "payment",
    "recovery", "access", "identity", "credentials", "portal",
];

/// TLDs commonly seen on suspicious registrations (leading dot included)
pub const TLDS: &[&str] = &[
    ".com", ".net", ".org", ".info", ".icu", ".top", ".xyz",
    ".online", ".site", ".club", ".work", ".shop",
];

/// Immutable vocabulary set consumed by the synthesizer.
///
/// Constructed once and never mutated. Both generation tools historically
/// carried their own copy of these lists; a single injected value avoids
/// drift between them.
#[derive(Debug, Clone)]
pub struct Lexicon {
    brands: Vec<String>,
    actions: Vec<String>,
    modifiers: Vec<String>,
    tlds: Vec<String>,
}

impl Lexicon {
    /// Create a lexicon from custom vocabularies.
    ///
    /// Every collection must be non-empty and no token may be empty or
    /// contain whitespace.
    pub fn new(
        brands: Vec<String>,
        actions: Vec<String>,
        modifiers: Vec<String>,
        tlds: Vec<String>,
    ) -> Result<Self> {
        validate_tokens("brands", &brands)?;
        validate_tokens("actions", &actions)?;
        validate_tokens("modifiers", &modifiers)?;
        validate_tokens("tlds", &tlds)?;

        Ok(Self {
            brands,
            actions,
            modifiers,
            tlds,
        })
    }

    /// Create the built-in lexicon
    pub fn builtin() -> Self {
        Self {
            brands: BRANDS.iter().map(|s| s.to_string()).collect(),
            actions: ACTIONS.iter().map(|s| s.to_string()).collect(),
            modifiers: MODIFIERS.iter().map(|s| s.to_string()).collect(),
            tlds: TLDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    pub fn tlds(&self) -> &[String] {
        &self.tlds
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_tokens(name: &str, tokens: &[String]) -> Result<()> {
    if tokens.is_empty() {
        return Err(GsdForgeError::validation(format!(
            "lexicon '{}' must not be empty",
            name
        )));
    }

    for token in tokens {
        if token.is_empty() {
            return Err(GsdForgeError::validation(format!(
                "lexicon '{}' contains an empty token",
                name
            )));
        }
        if token.chars().any(char::is_whitespace) {
            return Err(GsdForgeError::validation(format!(
                "lexicon '{}' token '{}' contains whitespace",
                name, token
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.brands().len(), 15);
        assert_eq!(lexicon.actions().len(), 10);
        assert_eq!(lexicon.modifiers().len(), 10);
        assert_eq!(lexicon.tlds().len(), 12);
    }

    #[test]
    fn test_builtin_tlds_have_leading_dot() {
        let lexicon = Lexicon::builtin();
        for tld in lexicon.tlds() {
            assert!(tld.starts_with('.'), "tld {} missing leading dot", tld);
        }
    }

    #[test]
    fn test_rejects_empty_collection() {
        let result = Lexicon::new(
            vec![],
            vec!["login".to_string()],
            vec!["support".to_string()],
            vec![".com".to_string()],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_whitespace_token() {
        let result = Lexicon::new(
            vec!["pay pal".to_string()],
            vec!["login".to_string()],
            vec!["support".to_string()],
            vec![".com".to_string()],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_token() {
        let result = Lexicon::new(
            vec!["paypal".to_string(), String::new()],
            vec!["login".to_string()],
            vec!["support".to_string()],
            vec![".com".to_string()],
        );
        assert!(result.is_err());
    }
}
