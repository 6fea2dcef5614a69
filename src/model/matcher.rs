// Logic for checking if members and events match `find` keywords.
//
// A keyword matches when it equals one whole word of the entity's name,
// ignoring ASCII case. Partial words never match: "Kurz" finds "Carl Kurz"
// but "Kur" does not.

use crate::model::fields::Name;
use crate::model::item::{Event, Member};

/// Anything the keyword matcher can look at.
pub trait Named {
    fn name(&self) -> &Name;
}

impl Named for Member {
    fn name(&self) -> &Name {
        Member::name(self)
    }
}

impl Named for Event {
    fn name(&self) -> &Name {
        Event::name(self)
    }
}

/// Returns true if `sentence` contains `word` as a whole word, ignoring case.
/// Blank words never match.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }
    sentence
        .split_whitespace()
        .any(|w| w.eq_ignore_ascii_case(word))
}

/// Matches entities whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a raw argument string on whitespace.
    pub fn from_input(input: &str) -> Self {
        Self::new(input.split_whitespace())
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test<T: Named>(&self, item: &T) -> bool {
        let name = item.name().as_str();
        self.keywords
            .iter()
            .any(|k| contains_word_ignore_case(name, k))
    }
}
