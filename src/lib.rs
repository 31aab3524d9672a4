pub mod api;
pub mod engine;
pub mod io;
pub mod model;
