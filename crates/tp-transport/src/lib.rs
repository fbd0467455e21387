//! `tp-transport` — the per-cycle transport demand/supply index.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`index`]   | `TransportIndex` — demand, supply, wagon and naval counters       |
//! | [`rebuild`] | `verify_claims`, `TransportIndex::build`, `bump_priorities`       |
//! | [`urgent`]  | Urgent-list selection and best-transportable lookup               |
//!
//! # Cycle model
//!
//! Nothing here survives a planning cycle.  Each cycle the planner:
//!
//! 1. calls [`verify_claims`] to drop claims no carrier is honouring,
//! 2. builds a fresh index with [`TransportIndex::build`] (a pure function
//!    of the world snapshot),
//! 3. calls [`TransportIndex::bump_priorities`] so everything still waiting
//!    grows more urgent,
//!
//! and then mutates the index in place while allocating missions and
//! matching cargo.  At the end of the turn the index is dropped.

pub mod index;
pub mod rebuild;
pub mod urgent;

#[cfg(test)]
mod tests;

pub use index::TransportIndex;
pub use rebuild::verify_claims;
