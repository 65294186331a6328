pub mod battle;
pub mod combat;
pub mod config;
pub mod economy;
pub mod encounter;
pub mod error;
pub mod game;
pub mod log;
pub mod party;
