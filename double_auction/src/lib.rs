//! Market-clearing algorithms for single- and two-good exchange markets.
//!
//! Key pieces:
//! - Valuation parser: compact "N of V" spec strings into flat value lists
//! - Equilibrium solver: clearing-price interval for unit-demand markets
//! - Gain-from-trade: realized surplus at a price, with random rationing
//! - Two-good tatonnement: minimal Walrasian prices (Gul & Stacchetti, 2000)
//!
//! All randomness flows through injected `rand` RNGs so that experiments
//! are reproducible from a seed.

use std::error::Error;
use std::fmt;

pub mod agents;
pub mod equilibrium;
pub mod trade;
pub mod two_good;
pub mod valuation;

/// Errors surfaced by the market solvers and trial runners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// A caller-supplied argument was out of range.
    InvalidArgument(String),
    /// The price-adjustment loop exceeded its iteration bound, which can
    /// only happen when a demand/supply oracle violates monotonicity.
    NonTermination { steps: usize },
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            MarketError::NonTermination { steps } => {
                write!(f, "price adjustment did not terminate after {} steps", steps)
            }
        }
    }
}

impl Error for MarketError {}
