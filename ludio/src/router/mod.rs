pub mod apps;
pub mod channels;
pub mod games;
pub mod guilds;
pub mod streams;
