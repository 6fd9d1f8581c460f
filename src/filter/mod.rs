pub mod element;
pub mod markup;
pub mod spec;
