//! Gateway wire schema. Every field is optional on the way in; the mappers
//! decide what an absent value means.

pub mod common;
pub mod date;
pub mod devices;
pub mod settings;
pub mod transactions;
