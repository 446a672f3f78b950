pub mod client;
pub mod types;

pub use client::PositionsClient;
pub use types::{NewPosition, Position};
