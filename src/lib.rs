#![forbid(unsafe_code)]

#[macro_use]
pub mod prelude;

pub mod conf;
pub mod ctx;
pub mod repr;
pub mod traits;
