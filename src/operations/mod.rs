// Operations module - fleet navigation on top of the API client

pub mod navigation;
pub mod ship;

pub use navigation::*;
pub use ship::*;
