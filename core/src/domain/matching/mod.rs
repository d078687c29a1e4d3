//! Reconciliation between what a user has and what recipes or staples need.
//!
//! Every comparison goes through [`names_overlap`]: two lower-cased names
//! match when either one contains the other. "chicken" matches "chicken
//! breast" and "lime juice" matches "lime".

pub mod availability;
pub mod ports;
pub mod recommendations;
pub mod scorer;
pub mod services;

/// Symmetric substring containment on already lower-cased names.
pub fn names_overlap(available: &str, wanted: &str) -> bool {
    available.contains(wanted) || wanted.contains(available)
}
