//! Output buffer utilities for turbojson.
//!
//! The codec writes JSON text through a single [`Writer`]: an auto-growing
//! byte buffer with amortized-doubling growth and a public cursor, so hot
//! paths can reserve space once and then write without per-byte bounds
//! checks. Each encoder owns its writer; buffers are scoped to one encode
//! call and rewound (not freed) between calls.

mod writer;

pub use writer::Writer;
