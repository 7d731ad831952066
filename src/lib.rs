//! Potager, a garden planning engine.
//!
//! The engine turns the site facts a wizard collects (area, surface, water
//! access, sun, slope, accessibility) into a physically valid garden plan:
//!
//! - [`logic::layout`] places non-overlapping beds and legal-width paths;
//! - [`logic::companion`] classifies beneficial/antagonistic plant pairings;
//! - [`logic::rotation`] schedules crops season by season without repeating
//!   a plant family in a bed too soon, inside the frost-free window;
//! - [`logic::materials`] turns a bed set into soil, lumber and irrigation
//!   quantities with a low/high cost range.
//!
//! Every engine call is a pure function from value input to value output:
//! no I/O, no clock, no randomness, so identical input always yields an
//! identical plan. The plant knowledge base and the unit price table are
//! passed in explicitly; [`data`] holds the built-in defaults served by the
//! HTTP facade in [`api`].

pub mod api;
pub mod data;
pub mod error;
pub mod logic;
pub mod models;
