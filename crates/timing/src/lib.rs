pub mod clock;
pub mod codec;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod snapshot;
pub mod state;

pub use error::{Result, TimingError};
pub use state::AppState;
