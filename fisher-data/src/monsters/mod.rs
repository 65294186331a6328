mod monster_data;

pub use monster_data::{
    FloorRange,
    MonsterData,
};
