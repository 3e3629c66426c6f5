use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sort::text::{LocaleCollator, TextOrder};
use crate::sort::Comparators;

/// Which leaf text comparison the comparators use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOrderKind {
    /// Locale collation (see `locale`)
    #[default]
    Collated,
    /// Code point order
    Ordinal,
    /// Code point order ignoring case
    OrdinalIgnoreCase,
}

/// Collation strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Primary,
    Secondary,
    #[default]
    Tertiary,
    Quaternary,
    Identical,
}

/// Sorting settings snapshot. Comparators copy what they need at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSettings {
    /// Leaf text comparison
    #[serde(default)]
    pub text_order: TextOrderKind,

    /// BCP-47 locale used when `text_order` is `collated` (default: ja)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Collation strength (default: tertiary)
    #[serde(default)]
    pub strength: Strength,

    /// Treat spaces and punctuation as ignorable when collating
    #[serde(default)]
    pub ignore_punctuation: bool,

    /// Compare digit runs numerically
    #[serde(default = "default_true")]
    pub sort_alphanum: bool,

    /// Order albums by release year before name
    #[serde(default = "default_true")]
    pub sort_albums_by_year: bool,

    /// Suppress year ordering under "Various Artists"-style parents
    #[serde(default = "default_true")]
    pub prohibit_sort_various: bool,
}

fn default_locale() -> String { "ja".to_string() }
fn default_true() -> bool { true }

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            text_order: TextOrderKind::default(),
            locale: default_locale(),
            strength: Strength::default(),
            ignore_punctuation: false,
            sort_alphanum: true,
            sort_albums_by_year: true,
            prohibit_sort_various: true,
        }
    }
}

impl SortSettings {
    /// Build the leaf text order these settings describe
    pub fn text_order(&self) -> Result<TextOrder> {
        Ok(match self.text_order {
            TextOrderKind::Ordinal => TextOrder::Ordinal,
            TextOrderKind::OrdinalIgnoreCase => TextOrder::OrdinalIgnoreCase,
            TextOrderKind::Collated => TextOrder::Collated(LocaleCollator::new(
                &self.locale,
                self.strength,
                self.ignore_punctuation,
            )?),
        })
    }
}

/// Shared handle over the current settings.
///
/// Readers take a snapshot; writers swap in a new value. Comparators built
/// from an older snapshot keep their order.
pub struct SettingsStore {
    current: ArcSwap<SortSettings>,
}

impl SettingsStore {
    pub fn new(settings: SortSettings) -> Self {
        Self {
            current: ArcSwap::from_pointee(settings),
        }
    }

    pub fn snapshot(&self) -> Arc<SortSettings> {
        self.current.load_full()
    }

    /// Replace the settings wholesale
    pub fn replace(&self, settings: SortSettings) {
        tracing::info!("Sort settings replaced: {:?}", settings);
        self.current.store(Arc::new(settings));
    }

    /// Apply an in-place edit to a copy of the current settings and publish it
    pub fn update(&self, mut edit: impl FnMut(&mut SortSettings)) {
        let previous = self.current.rcu(|current| {
            let mut next = SortSettings::clone(current);
            edit(&mut next);
            next
        });
        tracing::debug!("Sort settings updated (previous: {:?})", previous);
    }

    /// Build comparators from the current snapshot
    pub fn comparators(&self) -> Result<Comparators> {
        Comparators::new(SortSettings::clone(&self.snapshot()))
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(SortSettings::default())
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("current", &*self.current.load_full())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SortSettings::default();
        assert_eq!(settings.text_order, TextOrderKind::Collated);
        assert_eq!(settings.locale, "ja");
        assert!(settings.sort_alphanum);
        assert!(settings.sort_albums_by_year);
        assert!(settings.prohibit_sort_various);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: SortSettings =
            serde_yaml::from_str("text_order: ordinal_ignore_case\nsort_alphanum: false\n").unwrap();
        assert_eq!(settings.text_order, TextOrderKind::OrdinalIgnoreCase);
        assert!(!settings.sort_alphanum);
        assert_eq!(settings.locale, "ja");
        assert_eq!(settings.strength, Strength::Tertiary);
    }

    #[test]
    fn test_text_order_kinds() {
        let mut settings = SortSettings {
            text_order: TextOrderKind::Ordinal,
            ..SortSettings::default()
        };
        assert!(matches!(settings.text_order().unwrap(), TextOrder::Ordinal));

        settings.text_order = TextOrderKind::Collated;
        assert!(settings.text_order().unwrap().is_collated());

        settings.locale = "???".to_string();
        assert!(settings.text_order().is_err());
    }

    #[test]
    fn test_update_does_not_touch_old_snapshot() {
        let store = SettingsStore::default();
        let before = store.snapshot();

        store.update(|s| s.sort_albums_by_year = false);

        assert!(before.sort_albums_by_year);
        assert!(!store.snapshot().sort_albums_by_year);
    }

    #[test]
    fn test_replace() {
        let store = SettingsStore::default();
        store.replace(SortSettings {
            locale: "en-US".to_string(),
            ..SortSettings::default()
        });
        assert_eq!(store.snapshot().locale, "en-US");
    }
}
