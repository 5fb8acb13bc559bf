//! Process-wide read-only constants.

/// Codec version, `major.minor[.patch]`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Whether this build carries the arbitrary-precision integer path.
///
/// When `false`, integer literals outside the signed 64-bit range are a
/// decode error and native integers outside that range are an encode error.
pub const BIGINT_SUPPORTED: bool = cfg!(feature = "bigint");

/// Maximum nesting depth accepted by both the decoder and the encoder.
///
/// Nesting deeper than this fails with
/// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded) before
/// the call stack is at risk. The bound is deliberately far below what any
/// sane document uses; it exists to reject pathological input such as a
/// megabyte of `[`.
pub const MAX_DEPTH: usize = 1024;

/// Default number of fractional digits written for doubles.
pub const DEFAULT_DOUBLE_PRECISION: u8 = 10;

/// Largest accepted `double_precision`; out-of-range requests snap here.
pub const MAX_DOUBLE_PRECISION: u8 = 15;
