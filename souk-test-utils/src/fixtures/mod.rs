//! Fixture factories for inserting marketplace rows into the test database.

pub mod ad;
pub mod user;
