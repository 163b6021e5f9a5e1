//! Image reference type.
//!
//! Product and category images are either externally hosted URLs or
//! references into the local content-addressed asset store. Asset
//! references carry an `asset:` prefix in serialized form so both
//! variants round-trip through a single storage string.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::AssetId;

/// Serialized prefix marking a local asset reference.
const ASSET_PREFIX: &str = "asset:";

/// A reference to a product or category image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageRef {
    /// Externally hosted image URL (or any opaque non-asset string).
    Url(String),
    /// Content-addressed local asset, owned by the asset store.
    Asset(AssetId),
}

impl ImageRef {
    /// Parse an image reference from its storage string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        s.strip_prefix(ASSET_PREFIX).map_or_else(
            || Self::Url(s.to_owned()),
            |id| Self::Asset(AssetId::new(id)),
        )
    }

    /// Whether this reference points into the local asset store.
    #[must_use]
    pub const fn is_asset(&self) -> bool {
        matches!(self, Self::Asset(_))
    }

    /// The asset ID, if this is a local asset reference.
    #[must_use]
    pub const fn asset_id(&self) -> Option<&AssetId> {
        match self {
            Self::Asset(id) => Some(id),
            Self::Url(_) => None,
        }
    }

    /// Whether the serialized form is blank (used for input validation).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Url(url) => url.trim().is_empty(),
            Self::Asset(id) => id.as_str().trim().is_empty(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Asset(id) => write!(f, "{ASSET_PREFIX}{id}"),
        }
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> Self {
        image.to_string()
    }
}
