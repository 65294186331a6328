mod context;
mod error;
mod fisher_error;

pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use fisher_error::{
    GeneralError,
    InvalidInputError,
    NotFoundError,
    general_error,
    invalid_input_error,
    is_invalid_input,
    not_found_error,
};
