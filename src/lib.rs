//! An interactive, in-memory employee roster.  Records live only for the
//! duration of one session; the registry is rebuilt from the seed data on
//! every start.

pub mod employee;
pub mod registry;
pub mod textinterface;
