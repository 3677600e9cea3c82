pub mod alphabet;
pub mod base62;
pub mod error;
pub mod hexcodec;
pub mod id;
pub mod kind;
pub mod playable;

pub use alphabet::Alphabet;
pub use base62::Base62;
pub use error::{CatalogIdError, Result};
pub use hexcodec::{bytes_to_hex, hex_to_bytes};
pub use id::{BASE62_LENGTH, GID_LENGTH, Id};
pub use kind::{IdKind, KindDescriptor};
pub use playable::{ContextTrack, PlayableId, classify, is_supported, should_play};
