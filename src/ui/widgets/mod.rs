pub mod background;
pub mod current;
pub mod forecast;
pub mod header;
pub mod search;
pub mod status;

mod shared;
