pub mod consts;
pub mod dataset;
pub mod error;
pub mod ranking;
pub mod session;
pub mod table;
// cmd and reports are binary modules (declared in main.rs); the library
// surface stops at the data pipeline.
