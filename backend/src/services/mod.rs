//! Services for the Farm Weather Advisor host

pub mod advisory;

pub use advisory::AdvisoryService;
