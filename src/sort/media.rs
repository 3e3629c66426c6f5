use std::cmp::Ordering;

use super::alphanum::StringOrder;
use super::entity::MediaEntry;
use super::{is_blank, Comparator, Sortable};

/// Presentation order for directory listings, play queues and search results.
///
/// Tie-break chain, first non-equal step wins:
/// 1. directories before files
/// 2. plain directories before albums
/// 3. album year, unknown years last (only when year sorting is on)
/// 4. two directories: album reading or reading-or-name key; then path
/// 5. two files: disc/track composite, untracked last
/// 6. path
#[derive(Debug, Clone)]
pub struct MediaEntryComparator {
    sort_albums_by_year: bool,
    order: StringOrder,
}

impl MediaEntryComparator {
    pub fn new(sort_albums_by_year: bool, order: StringOrder) -> Self {
        Self {
            sort_albums_by_year,
            order,
        }
    }

    pub fn sort_albums_by_year(&self) -> bool {
        self.sort_albums_by_year
    }

    pub fn compare(&self, a: &MediaEntry, b: &MediaEntry) -> Ordering {
        let result = compare_directory_and_file(a, b);
        if result != Ordering::Equal {
            return result;
        }

        let result = compare_album_and_not_album(a, b);
        if result != Ordering::Equal {
            return result;
        }

        if self.sort_albums_by_year && a.is_album() && b.is_album() {
            let result = null_safe_compare(a.year, b.year, false);
            if result != Ordering::Equal {
                return result;
            }
        }

        if a.is_directory() && b.is_directory() {
            let result = self.compare_directory(a, b);
            if result != Ordering::Equal {
                return result;
            }
            return self.compare_path(a, b);
        }

        let result = null_safe_compare(
            sortable_disc_and_track_number(a),
            sortable_disc_and_track_number(b),
            false,
        );
        if result != Ordering::Equal {
            return result;
        }

        self.compare_path(a, b)
    }

    /// Name step for two directories, see [`directory_key`]
    pub fn compare_directory(&self, a: &MediaEntry, b: &MediaEntry) -> Ordering {
        self.order.compare(directory_key(a), directory_key(b))
    }

    /// Collated path order; byte order settles collation ties
    pub fn compare_path(&self, a: &MediaEntry, b: &MediaEntry) -> Ordering {
        self.order
            .text_order()
            .compare(&a.path, &b.path)
            .then_with(|| a.path.cmp(&b.path))
    }
}

impl Comparator<MediaEntry> for MediaEntryComparator {
    fn compare(&self, a: &MediaEntry, b: &MediaEntry) -> Ordering {
        MediaEntryComparator::compare(self, a, b)
    }
}

/// Files sort after directories
pub fn compare_directory_and_file(a: &MediaEntry, b: &MediaEntry) -> Ordering {
    match (a.is_file(), b.is_file()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Albums sort after plain directories
pub fn compare_album_and_not_album(a: &MediaEntry, b: &MediaEntry) -> Ordering {
    match (a.is_album(), b.is_album()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Compare optional values; absent is larger unless `null_is_smaller`
pub fn null_safe_compare<T: Ord>(a: Option<T>, b: Option<T>, null_is_smaller: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(_), None) if null_is_smaller => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) if null_is_smaller => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

/// `disc * 1000 + track`, disc defaulting to 1; absent without a track number
pub fn sortable_disc_and_track_number(entry: &MediaEntry) -> Option<i64> {
    let track = entry.track_number?;
    let disc = entry.disc_number.unwrap_or(1);
    Some(i64::from(disc) * 1000 + i64::from(track))
}

/// Name key of a directory: an album's non-blank album reading, otherwise
/// the reading-or-name key. One key per entry keeps lists where only some
/// albums carry a reading totally ordered.
pub fn directory_key(entry: &MediaEntry) -> &str {
    match entry.album_reading.as_deref() {
        Some(reading) if entry.is_album() && !is_blank(reading) => reading,
        _ => entry.sort_key(),
    }
}
