/// The chunk size used by lazy streams when the caller doesn't pick one.
pub const DEFAULT_CHUNK_SIZE: isize = 512;

/// The column offset at which every row starts to be decoded. Offsets are
/// 1-based.
pub const FIRST_COLUMN: usize = 1;

/// Upper bound for the capacity reserved up front for a single chunk. Larger
/// chunks still work, but grow as rows arrive.
pub const MAX_CHUNK_PREALLOC: usize = 4 * 1024;
