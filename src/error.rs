use thiserror::Error;

/// Errors surfaced by the few fallible entry points this crate exposes.
///
/// The containers themselves are sentinel-return data structures (see
/// [`crate::hashcore::Token`], `BitList::get`, ...); `CollectionError` only
/// covers conditions that are genuine errors rather than ordinary
/// "not found" results: capacity limits, construction from empty input, and
/// persistence I/O.
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("requested capacity {requested} exceeds the 2^30 entry limit")]
    CapacityOverflow { requested: usize },

    #[error("cannot build a container from an empty key set")]
    EmptyStrategyInput,

    #[error("persistence error: {0}")]
    Persistence(#[from] PersistError),
}

/// Errors from [`crate::persist`] snapshot read/write.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid file format: expected magic {expected:?}, got {got:?}")]
    BadMagic { expected: [u8; 8], got: [u8; 8] },

    #[error("incompatible format version: expected {expected}, got {got}")]
    BadVersion { expected: u32, got: u32 },

    #[error("checksum mismatch: expected {expected:#010x}, got {got:#010x}")]
    ChecksumMismatch { expected: u32, got: u32 },
}
