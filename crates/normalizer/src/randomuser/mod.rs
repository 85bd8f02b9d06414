//! randomuser provider adapter.

pub mod adapter;

pub use adapter::RandomUserAdapter;
