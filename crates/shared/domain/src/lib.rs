//! # Domain Models
//!
//! Pure domain types shared by the kernel and the feature slices.
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod administration;
pub mod config;
pub mod constants;
pub mod features;
pub mod registry;
pub mod search;
pub mod shop;
