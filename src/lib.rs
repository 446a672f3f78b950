pub mod api;
pub mod error;
pub mod smoke;
pub mod utils;

// Re-export commonly used types
pub use api::{NewPosition, Position, PositionsClient};
pub use error::ApiError;
pub use smoke::{CheckOutcome, CheckReport, SmokeRunner, SmokeSummary};
pub use utils::Config;
