pub mod address;
pub mod resolve;
pub mod txt;

mod confirm;
