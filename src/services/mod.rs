//! Remote data services

pub mod gateway;
pub mod store;

pub use gateway::BookGateway;
pub use store::BookStore;
