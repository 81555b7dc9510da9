pub mod converters;
pub mod page;
