pub mod buffer;
pub mod consts;
pub mod error;
pub mod filters;
pub mod histogram;
pub mod io;
pub mod pipeline;
