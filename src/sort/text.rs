use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use icu_collator::{AlternateHandling, Collator, CollatorOptions};
use icu_locid::Locale;
use icu_provider::DataLocale;

use crate::error::{Error, Result};
use crate::settings::Strength;

/// ICU collator for one locale, shared by every comparator built from
/// the same settings snapshot
#[derive(Clone)]
pub struct LocaleCollator {
    locale: String,
    strength: Strength,
    collator: Arc<Collator>,
}

impl LocaleCollator {
    /// Build a collator for a BCP-47 locale tag (e.g. "ja", "en-US")
    pub fn new(locale: &str, strength: Strength, ignore_punctuation: bool) -> Result<Self> {
        let parsed: Locale = locale.parse().map_err(|e| Error::Locale {
            locale: locale.to_string(),
            reason: format!("{:?}", e),
        })?;

        let mut options = CollatorOptions::new();
        options.strength = Some(icu_strength(strength));
        if ignore_punctuation {
            options.alternate_handling = Some(AlternateHandling::Shifted);
        }

        let collator = Collator::try_new(&DataLocale::from(&parsed), options).map_err(|e| {
            Error::Locale {
                locale: locale.to_string(),
                reason: format!("{:?}", e),
            }
        })?;

        tracing::debug!(
            "Built collator for locale {} (strength {:?}, ignore punctuation {})",
            locale,
            strength,
            ignore_punctuation
        );

        Ok(Self {
            locale: locale.to_string(),
            strength,
            collator: Arc::new(collator),
        })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl fmt::Debug for LocaleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCollator")
            .field("locale", &self.locale)
            .field("strength", &self.strength)
            .finish()
    }
}

fn icu_strength(strength: Strength) -> icu_collator::Strength {
    match strength {
        Strength::Primary => icu_collator::Strength::Primary,
        Strength::Secondary => icu_collator::Strength::Secondary,
        Strength::Tertiary => icu_collator::Strength::Tertiary,
        Strength::Quaternary => icu_collator::Strength::Quaternary,
        Strength::Identical => icu_collator::Strength::Identical,
    }
}

/// Leaf text comparison strategy
///
/// Chosen once when a comparator is built; nothing downstream checks for
/// a missing collator.
#[derive(Debug, Clone)]
pub enum TextOrder {
    /// Code point order
    Ordinal,
    /// Code point order after simple case folding
    OrdinalIgnoreCase,
    /// Locale collation rules
    Collated(LocaleCollator),
}

impl TextOrder {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            TextOrder::Ordinal => a.cmp(b),
            TextOrder::OrdinalIgnoreCase => compare_ignore_case(a, b),
            TextOrder::Collated(collator) => collator.compare(a, b),
        }
    }

    /// Case-insensitive comparison. A collator keeps its own case rules.
    pub fn compare_ignore_case(&self, a: &str, b: &str) -> Ordering {
        match self {
            TextOrder::Collated(collator) => collator.compare(a, b),
            TextOrder::Ordinal | TextOrder::OrdinalIgnoreCase => compare_ignore_case(a, b),
        }
    }

    pub fn is_collated(&self) -> bool {
        matches!(self, TextOrder::Collated(_))
    }
}

/// Ordinal comparison of case-folded characters.
///
/// Each char is upper-cased then lower-cased one-to-one; chars whose case
/// mapping expands (e.g. 'ß' -> "SS") are kept as they are.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_case).cmp(b.chars().map(fold_case))
}

/// Case-insensitive prefix test, char by char like [`compare_ignore_case`]
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    let mut chars = s.chars();
    prefix
        .chars()
        .all(|p| chars.next().map(fold_case) == Some(fold_case(p)))
}

fn fold_case(c: char) -> char {
    let upper = single(c.to_uppercase(), c);
    single(upper.to_lowercase(), upper)
}

fn single(mut mapped: impl Iterator<Item = char>, fallback: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => fallback,
    }
}
