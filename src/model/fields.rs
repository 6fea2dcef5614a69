// File: src/model/fields.rs
//! Validated field values.
//!
//! Every field follows the same contract: `parse` trims the literal, checks a
//! fixed syntactic constraint and either returns the typed value or a
//! [`ConstraintViolation`] carrying the field's `MESSAGE_CONSTRAINTS`.
//! No cross-field or uniqueness checks happen here.
use crate::error::ConstraintViolation;
use chrono::NaiveDate;
use std::fmt;

/// Shared plumbing for the string-backed fields.
macro_rules! string_field {
    ($ty:ident) => {
        impl $ty {
            pub fn parse(raw: &str) -> Result<Self, ConstraintViolation> {
                let trimmed = raw.trim();
                if !Self::is_valid(trimmed) {
                    return Err(ConstraintViolation::new(Self::MESSAGE_CONSTRAINTS));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

fn is_alnum_run(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Alphanumeric runs joined by single separator characters.
fn is_alnum_runs_separated_by(s: &str, separators: &[char]) -> bool {
    !s.is_empty() && s.split(|c| separators.contains(&c)).all(is_alnum_run)
}

// --- NAME ---

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn is_valid(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }

    /// Case-insensitive comparison used by the loose identity checks.
    pub fn eq_ignore_case(&self, other: &Name) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}
string_field!(Name);

// --- PHONE ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(s: &str) -> bool {
        s.len() >= 3 && s.chars().all(|c| c.is_ascii_digit())
    }
}
string_field!(Phone);

// --- EMAIL ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
         and adhere to the following constraints:\n\
         1. The local-part should only contain alphanumeric characters and these special characters, \
         excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
         2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
         separated by periods.\n\
         The domain name must:\n    \
         - end with a domain label at least 2 characters long\n    \
         - have each domain label start and end with alphanumeric characters\n    \
         - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn is_valid(s: &str) -> bool {
        let Some((local, domain)) = s.split_once('@') else {
            return false;
        };
        if !is_alnum_runs_separated_by(local, &['+', '_', '.', '-']) {
            return false;
        }
        let labels: Vec<&str> = domain.split('.').collect();
        let last_ok = labels.last().is_some_and(|l| l.len() >= 2);
        last_ok
            && labels
                .iter()
                .all(|label| is_alnum_runs_separated_by(label, &['-']))
    }
}
string_field!(Email);

// --- ADDRESS ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Addresses can take any values, and it should not be blank";

    pub fn is_valid(s: &str) -> bool {
        s.chars().next().is_some_and(|c| !c.is_whitespace())
    }
}
string_field!(Address);

// --- POSITION ---

/// A position tag held by a member, e.g. `Treasurer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(String);

impl Position {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Position names should be alphanumeric";

    pub fn is_valid(s: &str) -> bool {
        is_alnum_run(s)
    }
}
string_field!(Position);

// --- TASK NAME ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskName(String);

impl TaskName {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Task names can take any values, and it should not be blank";

    pub fn is_valid(s: &str) -> bool {
        s.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn eq_ignore_case(&self, other: &TaskName) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}
string_field!(TaskName);

// --- EVENT DATE ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventDate(NaiveDate);

impl EventDate {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Event dates should be valid calendar dates in the format YYYY-MM-DD";
    const FORMAT: &'static str = "%Y-%m-%d";

    pub fn is_valid(s: &str) -> bool {
        Self::parse_strict(s).is_some()
    }

    // chrono accepts single-digit months and days, the field does not.
    fn parse_strict(s: &str) -> Option<NaiveDate> {
        let bytes = s.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shape_ok {
            return None;
        }
        NaiveDate::parse_from_str(s, Self::FORMAT).ok()
    }

    pub fn parse(raw: &str) -> Result<Self, ConstraintViolation> {
        Self::parse_strict(raw.trim())
            .map(Self)
            .ok_or(ConstraintViolation::new(Self::MESSAGE_CONSTRAINTS))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
