pub mod filename;
pub mod package;
pub mod session;
