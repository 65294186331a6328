extern crate alloc;

mod common;
mod datastore;
mod items;
mod mons;
mod monsters;
mod moves;


pub use common::*;
pub use datastore::*;
pub use items::*;
pub use mons::*;
pub use monsters::*;
pub use moves::*;
