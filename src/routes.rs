#![forbid(unsafe_code)]

pub mod greeting;
