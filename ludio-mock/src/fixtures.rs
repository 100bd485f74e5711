//! Static fixture data, grouped by domain.

pub mod apps;
pub mod games;
pub mod guilds;
pub mod streams;
