//! Ferrous QType Infrastructure Layer
pub mod io;
