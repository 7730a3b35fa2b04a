pub mod api;
pub mod errors;
pub mod start;
pub mod state;

pub use start::start_server;
