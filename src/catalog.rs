pub mod blacklist;
pub mod builder;
pub mod filter;
pub mod history;
pub mod repository;
pub mod transient_repository;
