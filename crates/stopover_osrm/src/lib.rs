pub mod client;
pub mod params;
pub mod response;

pub use client::{OsrmClient, OsrmError};
pub use params::OsrmClientParams;
