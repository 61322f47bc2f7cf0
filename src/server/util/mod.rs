pub mod format;
pub mod geo;
pub mod parse;
pub mod password;
pub mod signature;
pub mod token;
