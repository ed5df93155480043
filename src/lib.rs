//! Helpers for the Ohm's Law lab: record current readings against a voltage
//! ramp, plot V(I), fit the experimental resistance and compare it with the
//! last-reading value across trials.
pub mod config;
pub mod lab;
pub use lab::*;
