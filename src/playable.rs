use crate::error::{CatalogIdError, Result};
use crate::id::{Id, match_locator};
use crate::kind::IdKind;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Outcome of classifying a locator for playback.
///
/// `Unsupported` keeps the original locator and offers no other
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayableId {
    Track(Id),
    Episode(Id),
    Unsupported(String),
}

/// A track entry of a playback context, as handed over by the catalog layer.
pub trait ContextTrack {
    /// Attached metadata, `None` when the record carries no metadata field.
    fn metadata(&self) -> Option<&HashMap<String, String>>;
}

/// Syntactic allow-list check; says nothing about which kind matches.
pub fn is_supported(locator: &str) -> bool {
    !locator.starts_with("spotify:local:")
        && locator != "spotify:delimiter"
        && locator != "spotify:meta:delimiter"
}

/// Classify `locator` as a track, an episode or an unsupported locator.
///
/// # Errors
///
/// Returns `UnknownLocator` if the locator passes [`is_supported`] but no
/// playable kind matches it.
pub fn classify(locator: &str) -> Result<PlayableId> {
    if !is_supported(locator) {
        debug!(locator, "unsupported locator");
        return Ok(PlayableId::Unsupported(locator.to_string()));
    }

    if let Some(base62) = match_locator(IdKind::Track, locator)? {
        trace!(kind = %IdKind::Track, locator, "classified locator");
        return Ok(PlayableId::Track(Id::Track(base62.to_string())));
    }
    if let Some(base62) = match_locator(IdKind::Episode, locator)? {
        trace!(kind = %IdKind::Episode, locator, "classified locator");
        return Ok(PlayableId::Episode(Id::Episode(base62.to_string())));
    }

    debug!(locator, "no playable kind matches locator");
    Err(CatalogIdError::UnknownLocator {
        locator: locator.to_string(),
    })
}

/// True iff the record carries non-empty metadata.
///
/// Records without metadata are placeholders, such as unavailable tracks in
/// a context list.
pub fn should_play<T: ContextTrack + ?Sized>(track: &T) -> bool {
    track.metadata().is_some_and(|metadata| !metadata.is_empty())
}

impl PlayableId {
    /// Narrow an identifier to its playable form; other kinds yield `None`.
    pub fn from_id(id: Id) -> Option<Self> {
        match id {
            Id::Track(_) => Some(Self::Track(id)),
            Id::Episode(_) => Some(Self::Episode(id)),
            Id::Playlist(_) | Id::Album(_) | Id::Artist(_) | Id::Show(_) => None,
        }
    }

    /// The wrapped identifier, `None` for unsupported locators.
    pub const fn as_id(&self) -> Option<&Id> {
        match self {
            Self::Track(id) | Self::Episode(id) => Some(id),
            Self::Unsupported(_) => None,
        }
    }

    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }

    fn id(&self, operation: &'static str) -> Result<&Id> {
        self.as_id().ok_or(CatalogIdError::NotApplicable { operation })
    }

    /// # Errors
    ///
    /// Returns `NotApplicable` for unsupported locators.
    pub fn raw_base62(&self) -> Result<&str> {
        Ok(self.id("base62 id")?.raw_base62())
    }

    /// # Errors
    ///
    /// Returns `NotApplicable` for unsupported locators, otherwise the
    /// errors of [`Id::raw_bytes`].
    pub fn raw_bytes(&self) -> Result<Vec<u8>> {
        self.id("gid")?.raw_bytes()
    }

    /// # Errors
    ///
    /// Returns `NotApplicable` for unsupported locators, otherwise the
    /// errors of [`Id::hex`].
    pub fn hex(&self) -> Result<String> {
        self.id("hex id")?.hex()
    }

    /// Short locator; unsupported locators return the original string.
    ///
    /// # Errors
    ///
    /// Same as [`Id::to_locator`].
    pub fn to_locator(&self) -> Result<String> {
        match self {
            Self::Track(id) | Self::Episode(id) => id.to_locator(),
            Self::Unsupported(locator) => Ok(locator.clone()),
        }
    }

    /// # Errors
    ///
    /// Returns `NotApplicable` for unsupported locators, otherwise the
    /// errors of [`Id::to_mercury_locator`].
    pub fn to_mercury_locator(&self) -> Result<String> {
        self.id("mercury locator")?.to_mercury_locator()
    }
}

impl fmt::Display for PlayableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track(id) | Self::Episode(id) => fmt::Display::fmt(id, f),
            Self::Unsupported(locator) => f.write_str(locator),
        }
    }
}

impl FromStr for PlayableId {
    type Err = CatalogIdError;

    /// The inverse of `Display`: unsupported locators are kept verbatim,
    /// anything else must be an exact track or episode locator.
    fn from_str(s: &str) -> Result<Self> {
        if !is_supported(s) {
            return Ok(Self::Unsupported(s.to_string()));
        }
        s.parse::<Id>()
            .ok()
            .and_then(Self::from_id)
            .ok_or_else(|| CatalogIdError::UnknownLocator {
                locator: s.to_string(),
            })
    }
}

impl serde::Serialize for PlayableId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for PlayableId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
