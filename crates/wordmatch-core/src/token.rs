//! Categories and the tokens that occupy grid cells.

use std::{
    borrow::Borrow,
    fmt::{self, Display},
    sync::Arc,
};

/// Name of a semantic word group, such as `"fruit"`.
///
/// Cloning is cheap; the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct Category(Arc<str>);

impl Category {
    /// Creates a category from its name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A word placed on the board.
///
/// Two tokens *match* when their categories are equal; the text is only shown
/// to the player. Equality (`==`) compares both parts and is meant for checking
/// that a grid is unchanged.
///
/// # Examples
///
/// ```
/// use wordmatch_core::Token;
///
/// let apple = Token::new("fruit", "apple");
/// let kiwi = Token::new("fruit", "kiwi");
/// let cat = Token::new("animal", "cat");
///
/// assert!(apple.matches(&kiwi));
/// assert_ne!(apple, kiwi);
/// assert!(!apple.matches(&cat));
/// assert_eq!(apple.to_string(), "apple");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    category: Category,
    text: Arc<str>,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(category: impl Into<Category>, text: impl Into<Arc<str>>) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
        }
    }

    /// Returns the token's category.
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if both tokens belong to the same category.
    #[must_use]
    #[inline]
    pub fn matches(&self, other: &Self) -> bool {
        self.category == other.category
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}
