//! Repository layer for the `customers` table

pub mod customer_repo;

pub use customer_repo::CustomerRepo;
