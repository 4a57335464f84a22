pub mod connection;

pub use connection::{ConnectionFactory, ScopedConnection};
