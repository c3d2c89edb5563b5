pub mod constants;
pub mod errors;

pub use errors::LoadError;
