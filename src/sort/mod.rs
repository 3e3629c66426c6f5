pub mod alphanum;
pub mod chunk;
pub mod entity;
pub mod media;
pub mod text;

// Comparator factory module
mod comparators;

use std::cmp::Ordering;

pub use alphanum::{AlphanumComparator, StringOrder};
pub use comparators::{
    Comparators, FieldComparator, GenreCountComparator, OrderBy, ReadingComparator,
    SongComparator,
};
pub use entity::{Album, Artist, Genre, MediaEntry, MediaType, Playlist};
pub use media::MediaEntryComparator;
pub use text::{LocaleCollator, TextOrder};

/// A total order over `T`
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Trait for types that sort by a reading with a name fallback
pub trait Sortable {
    /// Display name
    fn sort_name(&self) -> &str;

    /// Phonetic / sort-tag reading, if any
    fn sort_reading(&self) -> Option<&str> {
        None
    }

    /// The reading when it is non-blank, otherwise the name
    fn sort_key(&self) -> &str {
        match self.sort_reading() {
            Some(reading) if !is_blank(reading) => reading,
            _ => self.sort_name(),
        }
    }
}

/// Sort a slice with a comparator (stable)
pub fn sort_with<T, C>(items: &mut [T], comparator: &C, ascending: bool)
where
    C: Comparator<T> + ?Sized,
{
    if ascending {
        items.sort_by(|a, b| comparator.compare(a, b));
    } else {
        items.sort_by(|a, b| comparator.compare(b, a));
    }
}

/// Whitespace-only or empty
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
