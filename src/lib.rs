//! cold-outreach: LinkedIn profile → drafted cold email, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
