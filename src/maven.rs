pub mod coordinates;
pub mod version;
