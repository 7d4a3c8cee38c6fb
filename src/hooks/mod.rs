pub mod use_state_context;

pub use use_state_context::{use_state_context, use_try_state_context};
