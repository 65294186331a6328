mod data_store;
mod error_assert;
mod log_assert;
mod rng;
mod setup;
mod test_game_builder;

pub use data_store::static_local_data_store;
pub use error_assert::{
    assert_error_message_contains,
    assert_invalid_input,
};
pub use log_assert::assert_new_logs_eq;
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use setup::setup_test_environment;
pub use test_game_builder::TestGameBuilder;
