pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod interactive;
pub mod lagrange;
pub mod poly;
pub mod prime;
pub mod share;
pub mod sss;
pub mod store;

pub use codec::*;
pub use config::*;
pub use error::*;
pub use lagrange::*;
pub use poly::*;
pub use prime::*;
pub use share::*;
pub use sss::*;
pub use store::*;
