//! Test utilities: in-memory repository and mailer mocks, fixture factories
//! and an `AppState` builder for HTTP-level tests.

mod app_state_builder;
mod factories;
mod mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use mocks::*;
