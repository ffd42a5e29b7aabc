//! Single-table record access. Every call is one statement against the
//! shared pool: no transactions and no retries, storage errors propagate.

mod casts;
mod movies;

pub use casts::CastRepository;
pub use movies::MovieRepository;
