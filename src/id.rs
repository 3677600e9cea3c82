use crate::base62::Base62;
use crate::error::{CatalogIdError, Result};
use crate::hexcodec::{bytes_to_hex, hex_to_bytes};
use crate::kind::IdKind;
use std::fmt;
use std::str::FromStr;

/// Codec every catalog identifier is minted with.
pub const CODEC: Base62 = Base62::INVERTED;

/// Width of a binary gid in bytes.
pub const GID_LENGTH: usize = 16;

/// Width of a canonical base62 id in symbols.
pub const BASE62_LENGTH: usize = 22;

/// A catalog identifier, tagged with its kind.
///
/// The payload is the base62 string exactly as given at construction;
/// it is only validated when decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Id {
    Playlist(String),
    Album(String),
    Artist(String),
    Show(String),
    Track(String),
    Episode(String),
}

impl Id {
    /// Wrap `base62` verbatim as an identifier of `kind`.
    pub fn from_base62(kind: IdKind, base62: impl Into<String>) -> Self {
        let base62 = base62.into();
        match kind {
            IdKind::Playlist => Self::Playlist(base62),
            IdKind::Album => Self::Album(base62),
            IdKind::Artist => Self::Artist(base62),
            IdKind::Show => Self::Show(base62),
            IdKind::Track => Self::Track(base62),
            IdKind::Episode => Self::Episode(base62),
        }
    }

    /// Build an identifier from its hex gid.
    ///
    /// # Errors
    ///
    /// Returns `MalformedHex` if `hex` is not valid hex.
    pub fn from_hex(kind: IdKind, hex: &str) -> Result<Self> {
        let bytes = hex_to_bytes(hex)?;
        Ok(Self::from_base62(kind, CODEC.encode(&bytes)))
    }

    /// Build an identifier from a binary gid, padded to the canonical width.
    pub fn from_gid(kind: IdKind, gid: &[u8]) -> Self {
        Self::from_base62(kind, CODEC.encode_with_length(gid, BASE62_LENGTH))
    }

    /// Extract the id from a short locator of `kind`.
    ///
    /// The first `<uri_prefix>:` occurrence followed by 22 characters wins.
    ///
    /// # Errors
    ///
    /// Returns `NotAMatch` if the locator does not contain the pattern and
    /// `UnsupportedOperation` if `kind` declares no uri prefix.
    pub fn from_locator(kind: IdKind, locator: &str) -> Result<Self> {
        match match_locator(kind, locator)? {
            Some(base62) => Ok(Self::from_base62(kind, base62)),
            None => Err(CatalogIdError::NotAMatch {
                kind: kind.to_string(),
                locator: locator.to_string(),
            }),
        }
    }

    pub const fn kind(&self) -> IdKind {
        match self {
            Self::Playlist(_) => IdKind::Playlist,
            Self::Album(_) => IdKind::Album,
            Self::Artist(_) => IdKind::Artist,
            Self::Show(_) => IdKind::Show,
            Self::Track(_) => IdKind::Track,
            Self::Episode(_) => IdKind::Episode,
        }
    }

    pub fn raw_base62(&self) -> &str {
        match self {
            Self::Playlist(id)
            | Self::Album(id)
            | Self::Artist(id)
            | Self::Show(id)
            | Self::Track(id)
            | Self::Episode(id) => id,
        }
    }

    /// The 16-byte binary gid.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidSymbol` or `Overflow` from the codec.
    pub fn raw_bytes(&self) -> Result<Vec<u8>> {
        CODEC.decode(self.raw_base62(), GID_LENGTH)
    }

    /// Lowercase hex of the gid.
    ///
    /// # Errors
    ///
    /// Same as [`Id::raw_bytes`].
    pub fn hex(&self) -> Result<String> {
        Ok(bytes_to_hex(&self.raw_bytes()?))
    }

    /// `<uri_prefix>:<base62>`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` if the kind declares no uri prefix.
    pub fn to_locator(&self) -> Result<String> {
        let prefix = required(self.kind(), self.kind().uri_prefix(), "uri locator")?;
        Ok(format!("{prefix}:{}", self.raw_base62()))
    }

    /// `<mercury_prefix>/<hex>`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` if the kind declares no mercury prefix
    /// (playlists), otherwise the errors of [`Id::hex`].
    pub fn to_mercury_locator(&self) -> Result<String> {
        let prefix = required(self.kind(), self.kind().mercury_prefix(), "mercury locator")?;
        Ok(format!("{prefix}/{}", self.hex()?))
    }
}

fn required(
    kind: IdKind,
    prefix: Option<&'static str>,
    operation: &'static str,
) -> Result<&'static str> {
    prefix.ok_or_else(|| CatalogIdError::UnsupportedOperation {
        kind: kind.to_string(),
        operation,
    })
}

/// Find the 22-character capture following `<uri_prefix>:` in `locator`.
///
/// The capture may hold any characters except a newline; syntactic validity
/// of the id is left to decoding.
pub(crate) fn match_locator(kind: IdKind, locator: &str) -> Result<Option<&str>> {
    let prefix = required(kind, kind.uri_prefix(), "uri locator")?;
    Ok(locator.match_indices(prefix).find_map(|(start, _)| {
        let rest = locator[start + prefix.len()..].strip_prefix(':')?;
        let (last, ch) = rest.char_indices().nth(BASE62_LENGTH - 1)?;
        let capture = &rest[..last + ch.len_utf8()];
        (!capture.contains('\n')).then_some(capture)
    }))
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind().uri_prefix() {
            Some(prefix) => write!(f, "{prefix}:{}", self.raw_base62()),
            None => f.write_str(self.raw_base62()),
        }
    }
}

impl FromStr for Id {
    type Err = CatalogIdError;

    /// Parse `<uri_prefix>:<id>` of any kind; the inverse of `Display`.
    ///
    /// Unlike [`Id::from_locator`] the whole string must be the locator and
    /// the id is taken verbatim whatever its length, so ids minted shorter
    /// than 22 symbols read back unchanged.
    fn from_str(s: &str) -> Result<Self> {
        IdKind::ALL
            .into_iter()
            .find_map(|kind| {
                let rest = s.strip_prefix(kind.uri_prefix()?)?.strip_prefix(':')?;
                Some(Self::from_base62(kind, rest))
            })
            .ok_or_else(|| CatalogIdError::UnknownLocator {
                locator: s.to_string(),
            })
    }
}

impl serde::Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
