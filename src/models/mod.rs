pub mod quotation;
pub mod response;

pub use quotation::*;
pub use response::*;
