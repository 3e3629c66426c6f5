use std::cmp::Ordering;

use super::alphanum::StringOrder;
use super::entity::{Genre, MediaEntry};
use super::media::MediaEntryComparator;
use super::text::{starts_with_ignore_case, TextOrder};
use super::{is_blank, Comparator, Sortable};
use crate::error::Result;
use crate::settings::SortSettings;

/// Artist name prefix whose albums are not ordered by year
const VARIOUS_PREFIX: &str = "various";

/// Field for [`Comparators::media_file_order_by`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Track,
    Artist,
    Album,
}

/// Builds every comparator from one settings snapshot.
///
/// The collator is created once here and shared by all comparators handed
/// out; each comparator copies the flags it needs, so later settings
/// changes never reorder an existing comparator.
#[derive(Debug, Clone)]
pub struct Comparators {
    settings: SortSettings,
    text: TextOrder,
}

impl Comparators {
    pub fn new(settings: SortSettings) -> Result<Self> {
        let text = settings.text_order()?;
        tracing::debug!(
            "Comparators built: text order {:?}, alphanum {}, albums by year {}, prohibit sort various {}",
            settings.text_order,
            settings.sort_alphanum,
            settings.sort_albums_by_year,
            settings.prohibit_sort_various
        );
        Ok(Self { settings, text })
    }

    pub fn settings(&self) -> &SortSettings {
        &self.settings
    }

    pub fn text_order(&self) -> &TextOrder {
        &self.text
    }

    /// Leaf comparator for names: natural order when `sort_alphanum` is set
    pub fn string_order(&self) -> StringOrder {
        StringOrder::new(self.text.clone(), self.settings.sort_alphanum)
    }

    /// Whether albums of `artist` are ordered by year.
    ///
    /// Off globally, or off for "Various ..." artists when
    /// `prohibit_sort_various` is set. No artist means no override.
    pub fn is_sort_albums_by_year(&self, artist: Option<&str>) -> bool {
        if !self.settings.sort_albums_by_year {
            return false;
        }
        match artist {
            Some(artist) if !artist.is_empty() => {
                !(self.settings.prohibit_sort_various
                    && starts_with_ignore_case(artist, VARIOUS_PREFIX))
            }
            _ => true,
        }
    }

    /// Media order for the children of `parent` (`None` for top level or
    /// hierarchy-independent lists)
    pub fn media_file_order(&self, parent: Option<&MediaEntry>) -> MediaEntryComparator {
        let by_year = match parent {
            Some(parent) => self.is_sort_albums_by_year(parent.artist.as_deref()),
            None => self.settings.sort_albums_by_year,
        };
        if by_year != self.settings.sort_albums_by_year {
            tracing::debug!(
                "Year ordering suppressed under parent {} (artist {:?})",
                parent.map(|p| p.path.as_str()).unwrap_or_default(),
                parent.and_then(|p| p.artist.as_deref())
            );
        }
        MediaEntryComparator::new(by_year, self.string_order())
    }

    /// Media order by type and name only, ignoring the year setting.
    /// Used for index ordering.
    pub fn media_file_order_by_alpha(&self) -> MediaEntryComparator {
        MediaEntryComparator::new(false, self.string_order())
    }

    /// Order by a single field regardless of media type
    pub fn media_file_order_by(&self, order_by: OrderBy) -> FieldComparator {
        FieldComparator {
            order_by,
            order: self.string_order(),
        }
    }

    /// Track number (untracked as 0), then path
    pub fn songs_default(&self) -> SongComparator {
        SongComparator {
            text: self.text.clone(),
        }
    }

    /// Artists by reading-or-name through the collator, no digit handling
    pub fn artist_order(&self) -> ReadingComparator {
        ReadingComparator::new(StringOrder::Plain(self.text.clone()))
    }

    /// Albums by reading-or-name through the collator, no digit handling
    pub fn album_order(&self) -> ReadingComparator {
        ReadingComparator::new(StringOrder::Plain(self.text.clone()))
    }

    /// Genres by album count or song count, largest first
    pub fn genre_order(&self, by_album: bool) -> GenreCountComparator {
        GenreCountComparator { by_album }
    }

    pub fn genre_order_by_alpha(&self) -> ReadingComparator {
        ReadingComparator::new(self.string_order())
    }

    pub fn playlist_order(&self) -> ReadingComparator {
        ReadingComparator::new(self.string_order())
    }
}

/// Orders any [`Sortable`] by its reading-or-name key
#[derive(Debug, Clone)]
pub struct ReadingComparator {
    order: StringOrder,
}

impl ReadingComparator {
    pub fn new(order: StringOrder) -> Self {
        Self { order }
    }
}

impl<T: Sortable + ?Sized> Comparator<T> for ReadingComparator {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.order.compare(a.sort_key(), b.sort_key())
    }
}

#[derive(Debug, Clone)]
pub struct FieldComparator {
    order_by: OrderBy,
    order: StringOrder,
}

impl Comparator<MediaEntry> for FieldComparator {
    fn compare(&self, a: &MediaEntry, b: &MediaEntry) -> Ordering {
        match self.order_by {
            OrderBy::Track => a.track_number.unwrap_or(0).cmp(&b.track_number.unwrap_or(0)),
            OrderBy::Artist => self.order.compare(artist_key(a), artist_key(b)),
            OrderBy::Album => self.order.compare(album_key(a), album_key(b)),
        }
    }
}

fn artist_key(entry: &MediaEntry) -> &str {
    first_non_blank(&entry.artist_reading, &entry.artist)
}

fn album_key(entry: &MediaEntry) -> &str {
    first_non_blank(&entry.album_reading, &entry.album)
}

fn first_non_blank<'a>(reading: &'a Option<String>, name: &'a Option<String>) -> &'a str {
    match reading.as_deref() {
        Some(reading) if !is_blank(reading) => reading,
        _ => name.as_deref().unwrap_or_default(),
    }
}

#[derive(Debug, Clone)]
pub struct SongComparator {
    text: TextOrder,
}

impl Comparator<MediaEntry> for SongComparator {
    fn compare(&self, a: &MediaEntry, b: &MediaEntry) -> Ordering {
        a.track_number
            .unwrap_or(0)
            .cmp(&b.track_number.unwrap_or(0))
            .then_with(|| self.text.compare(&a.path, &b.path))
            .then_with(|| a.path.cmp(&b.path))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GenreCountComparator {
    by_album: bool,
}

impl Comparator<Genre> for GenreCountComparator {
    fn compare(&self, a: &Genre, b: &Genre) -> Ordering {
        if self.by_album {
            b.album_count.cmp(&a.album_count)
        } else {
            b.song_count.cmp(&a.song_count)
        }
    }
}
