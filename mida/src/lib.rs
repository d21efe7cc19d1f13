//! MIDA: a random-sampling double-auction mechanism.
//!
//! Implements the single-item-type mechanism of Segal-Halevi, Hassidim &
//! Aumann: split the market into two random halves, clear each half with
//! the *other* half's equilibrium price, and measure the realized gain
//! against the centrally optimal benchmark. Because the price a trader
//! faces is computed from a disjoint, statistically independent sample,
//! no trader can move its own price; the cost is efficiency lost when
//! the two halves' clearing prices differ.
//!
//! The crate also carries the experiment harness: batch statistics over
//! trials, random market generation, and CSV/JSON export of results.

pub mod analysis;
pub mod datasets;
pub mod mechanism;
pub mod output;
