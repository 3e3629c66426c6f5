use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Sortable;

/// Kind of catalog entry. `Directory` and `Album` are directories, the rest are files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    #[default]
    Music,
    Podcast,
    Audiobook,
    Video,
    Directory,
    Album,
}

impl MediaType {
    pub fn is_directory(self) -> bool {
        matches!(self, MediaType::Directory | MediaType::Album)
    }

    pub fn is_album(self) -> bool {
        self == MediaType::Album
    }
}

/// A file or directory from the media catalog, as far as ordering cares
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    /// Full path; the final tie-break
    pub path: String,

    /// Display name override (final path component otherwise)
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub media_type: MediaType,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub artist: Option<String>,

    #[serde(default)]
    pub album: Option<String>,

    /// Sort key for the artist / directory name (e.g. kana reading)
    #[serde(default)]
    pub artist_reading: Option<String>,

    /// Sort key for the album name
    #[serde(default)]
    pub album_reading: Option<String>,

    #[serde(default)]
    pub disc_number: Option<i32>,

    #[serde(default)]
    pub track_number: Option<i32>,
}

impl MediaEntry {
    pub fn new(path: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            path: path.into(),
            media_type,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_artist_reading(mut self, reading: impl Into<String>) -> Self {
        self.artist_reading = Some(reading.into());
        self
    }

    pub fn with_album_reading(mut self, reading: impl Into<String>) -> Self {
        self.album_reading = Some(reading.into());
        self
    }

    pub fn with_disc_number(mut self, disc: i32) -> Self {
        self.disc_number = Some(disc);
        self
    }

    pub fn with_track_number(mut self, track: i32) -> Self {
        self.track_number = Some(track);
        self
    }

    /// Display name: the override, or the last component of the path
    pub fn name(&self) -> &str {
        if let Some(name) = &self.name {
            return name;
        }
        Path::new(&self.path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(self.path.as_str())
    }

    pub fn is_directory(&self) -> bool {
        self.media_type.is_directory()
    }

    pub fn is_file(&self) -> bool {
        !self.is_directory()
    }

    pub fn is_album(&self) -> bool {
        self.media_type.is_album()
    }
}

impl Sortable for MediaEntry {
    fn sort_name(&self) -> &str {
        self.name()
    }

    fn sort_reading(&self) -> Option<&str> {
        self.artist_reading.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    #[serde(default)]
    pub reading: Option<String>,
}

impl Artist {
    pub fn new(name: impl Into<String>, reading: Option<&str>) -> Self {
        Self {
            name: name.into(),
            reading: reading.map(str::to_string),
        }
    }
}

impl Sortable for Artist {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    #[serde(default)]
    pub reading: Option<String>,
}

impl Album {
    pub fn new(name: impl Into<String>, reading: Option<&str>) -> Self {
        Self {
            name: name.into(),
            reading: reading.map(str::to_string),
        }
    }
}

impl Sortable for Album {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    #[serde(default)]
    pub reading: Option<String>,
    #[serde(default)]
    pub song_count: u32,
    #[serde(default)]
    pub album_count: u32,
}

impl Genre {
    pub fn new(name: impl Into<String>, song_count: u32, album_count: u32) -> Self {
        Self {
            name: name.into(),
            reading: None,
            song_count,
            album_count,
        }
    }
}

impl Sortable for Genre {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    #[serde(default)]
    pub reading: Option<String>,
}

impl Sortable for Playlist {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_classification() {
        assert!(MediaType::Directory.is_directory());
        assert!(MediaType::Album.is_directory());
        assert!(MediaType::Album.is_album());
        assert!(!MediaType::Directory.is_album());
        assert!(!MediaType::Music.is_directory());
        assert!(!MediaType::Video.is_directory());
    }

    #[test]
    fn test_name_defaults_to_last_path_component() {
        let entry = MediaEntry::new("/music/Artist/Album", MediaType::Album);
        assert_eq!(entry.name(), "Album");

        let entry = MediaEntry::new("path1", MediaType::Directory);
        assert_eq!(entry.name(), "path1");

        let entry = entry.with_name("Display");
        assert_eq!(entry.name(), "Display");
    }

    #[test]
    fn test_sort_key_prefers_non_blank_reading() {
        let artist = Artist::new("亜伊鵜絵尾", Some("アイウエオ"));
        assert_eq!(artist.sort_key(), "アイウエオ");

        let artist = Artist::new("abcde", Some("  "));
        assert_eq!(artist.sort_key(), "abcde");

        let artist = Artist::new("abcde", None);
        assert_eq!(artist.sort_key(), "abcde");
    }

    #[test]
    fn test_entry_deserializes_with_defaults() {
        let entry: MediaEntry =
            serde_json::from_str(r#"{"path": "/m/a.flac", "track_number": 3}"#).unwrap();
        assert_eq!(entry.media_type, MediaType::Music);
        assert_eq!(entry.track_number, Some(3));
        assert_eq!(entry.disc_number, None);
        assert!(entry.is_file());

        let entry: MediaEntry =
            serde_json::from_str(r#"{"path": "/m/x", "media_type": "ALBUM", "year": 1999}"#)
                .unwrap();
        assert!(entry.is_album());
        assert_eq!(entry.year, Some(1999));
    }
}
