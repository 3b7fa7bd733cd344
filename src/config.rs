//! Decoder configuration.

use crate::sans::scalar::ByteOrder;

/// Nesting depth permitted by [`Config::default`].
///
/// Matches the limit Java Edition applies when reading NBT.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// The edition whose variant of the format is being decoded.
///
/// Both editions share the same tags and framing, and differ only in the byte
/// order of multi-byte numbers (including string and collection lengths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edition {
    /// Java Edition: most significant byte first.
    #[default]
    Java,
    /// Bedrock Edition: least significant byte first.
    Bedrock,
}

impl Edition {
    /// The byte order used by this edition.
    pub const fn byte_order(self) -> ByteOrder {
        match self {
            Edition::Java => ByteOrder::BigEndian,
            Edition::Bedrock => ByteOrder::LittleEndian,
        }
    }
}

/// Settings fixed for the lifetime of a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Byte order variant of the input.
    pub edition: Edition,
    /// Maximum number of lists and compounds open at once, root included.
    ///
    /// Decoding recurses once per level, so this bounds stack use for hostile
    /// input.
    pub max_depth: usize,
}

impl Config {
    /// Configuration for an edition with the default depth limit.
    pub const fn new(edition: Edition) -> Self {
        Self {
            edition,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the depth limit.
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Edition::default())
    }
}

impl From<Edition> for Config {
    fn from(edition: Edition) -> Self {
        Self::new(edition)
    }
}
