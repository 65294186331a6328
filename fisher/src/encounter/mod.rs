mod generator;
mod monster;

pub use generator::{
    build_monster,
    generate_monster,
    generate_monster_with_scaling,
};
pub use monster::Monster;
