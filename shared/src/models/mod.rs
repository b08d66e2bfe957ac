//! Domain models for the Farm Weather Advisor

mod alert;
mod conditions;
mod provider_alert;
mod recommendation;
mod weather;

pub use alert::*;
pub use conditions::*;
pub use provider_alert::*;
pub use recommendation::*;
pub use weather::*;
