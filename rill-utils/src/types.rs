//! Positions and resource identifiers.
//!
//! Wrapper types making it harder to accidentaly use the wrong underlying type.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;
use thiserror::Error;

use crate::math::{Vector2, Vector3};

/// A block position in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a block position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// Returns this position moved by the given deltas, clamped to the `i32` range.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.0.x.saturating_add(dx),
            self.0.y.saturating_add(dy),
            self.0.z.saturating_add(dz),
        )
    }

    /// The position directly below.
    #[must_use]
    pub const fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

/// A chunk column position (16x16 blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkPos(pub Vector2<i32>);

impl ChunkPos {
    /// Creates a chunk position from chunk coordinates.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self(Vector2::new(x, z))
    }

    /// The chunk column containing the given block.
    #[must_use]
    pub const fn containing(pos: &BlockPos) -> Self {
        Self::new(pos.0.x >> 4, pos.0.z >> 4)
    }
}

/// Why a string could not be parsed into an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The string did not contain exactly one `:` separator.
    #[error("invalid identifier `{0}`: expected `namespace:path`")]
    Malformed(String),
    /// The namespace contains characters outside `[a-z0-9_.-]`.
    #[error("invalid namespace `{0}`")]
    Namespace(String),
    /// The path contains characters outside `[a-z0-9_./-]`.
    #[error("invalid path `{0}`")]
    Path(String),
}

/// A namespaced resource key such as `minecraft:water`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Identifier {
    /// The namespace, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// The path inside the namespace.
    pub path: Cow<'static, str>,
}

impl Identifier {
    /// The namespace used by vanilla content.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// Creates a vanilla identifier without allocating.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Identifier {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Characters allowed in a namespace.
    #[must_use]
    pub fn valid_namespace_char(namespace_char: char) -> bool {
        namespace_char == '_'
            || namespace_char == '-'
            || namespace_char.is_ascii_lowercase()
            || namespace_char.is_ascii_digit()
            || namespace_char == '.'
    }

    /// Characters allowed in a path (namespace characters plus `/`).
    #[must_use]
    pub fn valid_path_char(path_char: char) -> bool {
        Self::valid_namespace_char(path_char) || path_char == '/'
    }

    /// Returns true if `namespace` is non-empty and well formed.
    #[must_use]
    pub fn validate_namespace(namespace: &str) -> bool {
        !namespace.is_empty() && namespace.chars().all(Self::valid_namespace_char)
    }

    /// Returns true if `path` is non-empty and well formed.
    #[must_use]
    pub fn validate_path(path: &str) -> bool {
        !path.is_empty() && path.chars().all(Self::valid_path_char)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((namespace, path)) = s.split_once(':') else {
            return Err(IdentifierError::Malformed(s.to_string()));
        };
        if path.contains(':') {
            return Err(IdentifierError::Malformed(s.to_string()));
        }
        if !Identifier::validate_namespace(namespace) {
            return Err(IdentifierError::Namespace(namespace.to_string()));
        }
        if !Identifier::validate_path(path) {
            return Err(IdentifierError::Path(path.to_string()));
        }

        Ok(Identifier {
            namespace: Cow::Owned(namespace.to_string()),
            path: Cow::Owned(path.to_string()),
        })
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
