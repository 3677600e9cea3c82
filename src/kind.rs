use std::fmt;

/// Locator prefixes declared by one identifier kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    pub name: &'static str,
    pub uri_prefix: Option<&'static str>,
    pub mercury_prefix: Option<&'static str>,
}

impl KindDescriptor {
    const fn new(name: &'static str, uri_prefix: &'static str) -> Self {
        Self {
            name,
            uri_prefix: Some(uri_prefix),
            mercury_prefix: None,
        }
    }

    const fn mercury_prefix(mut self, prefix: &'static str) -> Self {
        self.mercury_prefix = Some(prefix);
        self
    }
}

/// Entity categories of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Playlist,
    Album,
    Artist,
    Show,
    Track,
    Episode,
}

const PLAYLIST: KindDescriptor = KindDescriptor::new("playlist", "spotify:playlist");
const ALBUM: KindDescriptor =
    KindDescriptor::new("album", "spotify:album").mercury_prefix("hm://metadata/4/album");
const ARTIST: KindDescriptor =
    KindDescriptor::new("artist", "spotify:artist").mercury_prefix("hm://metadata/4/artist");
const SHOW: KindDescriptor =
    KindDescriptor::new("show", "spotify:show").mercury_prefix("hm://metadata/4/show");
const TRACK: KindDescriptor =
    KindDescriptor::new("track", "spotify:track").mercury_prefix("hm://metadata/4/track");
const EPISODE: KindDescriptor =
    KindDescriptor::new("episode", "spotify:episode").mercury_prefix("hm://metadata/4/episode");

impl IdKind {
    pub const ALL: [Self; 6] = [
        Self::Playlist,
        Self::Album,
        Self::Artist,
        Self::Show,
        Self::Track,
        Self::Episode,
    ];

    pub const fn descriptor(self) -> &'static KindDescriptor {
        match self {
            Self::Playlist => &PLAYLIST,
            Self::Album => &ALBUM,
            Self::Artist => &ARTIST,
            Self::Show => &SHOW,
            Self::Track => &TRACK,
            Self::Episode => &EPISODE,
        }
    }

    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub const fn uri_prefix(self) -> Option<&'static str> {
        self.descriptor().uri_prefix
    }

    pub const fn mercury_prefix(self) -> Option<&'static str> {
        self.descriptor().mercury_prefix
    }

    /// Track and episode identifiers can be handed to playback.
    pub const fn is_playable(self) -> bool {
        matches!(self, Self::Track | Self::Episode)
    }

    /// Reverse lookup of a kind by its exact uri prefix.
    pub fn from_uri_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.uri_prefix() == Some(prefix))
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
