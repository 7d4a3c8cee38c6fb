pub mod state_provider;

pub use state_provider::StateProvider;
