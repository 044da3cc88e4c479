pub mod models;
pub mod utilities;
