pub mod model;
pub mod presets;
pub mod store;
