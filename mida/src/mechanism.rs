//! The random-sampling double-auction trial and its median runner.

use std::cmp::Ordering;

use double_auction::MarketError;
use double_auction::equilibrium::equilibrium_price;
use double_auction::trade::gain_from_trade;
use rand::Rng;

/// One half of a randomly split market.
#[derive(Debug, Clone, PartialEq)]
pub struct HalfMarket {
    pub buyers: Vec<f64>,
    pub sellers: Vec<f64>,
    /// This half's own internal equilibrium price.
    pub clearing_price: f64,
    /// The price this half actually traded at, taken from the other half.
    pub traded_price: f64,
    pub gain: f64,
}

/// The full-market benchmark: its equilibrium price and the gain
/// realized there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalMarket {
    pub price: f64,
    pub gain: f64,
}

/// Outcome of one mechanism trial. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub left: HalfMarket,
    pub right: HalfMarket,
    pub optimal: OptimalMarket,
    /// Combined gain of both halves.
    pub gain: f64,
    /// `gain / optimal.gain`, or `None` when the benchmark gain is zero
    /// (a zero-gain benchmark makes the ratio meaningless).
    pub competitive_ratio: Option<f64>,
}

/// Split values into two halves by an independent fair coin flip per
/// element. Membership is resampled on every call; `|left| + |right|`
/// always equals the input length.
pub fn random_halving<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &value in values {
        if rng.random_bool(0.5) {
            left.push(value);
        } else {
            right.push(value);
        }
    }
    (left, right)
}

/// Run one trial of the mechanism.
///
/// The benchmark clears the full market at its own equilibrium price.
/// Buyers and sellers are then halved independently, each half computes
/// its internal clearing price, and the halves trade at each other's
/// price (cross-pricing). The trial works on copies throughout; the
/// caller's lists are untouched.
pub fn run_mida<R: Rng + ?Sized>(buyers: &[f64], sellers: &[f64], rng: &mut R) -> Trial {
    let optimal_price = equilibrium_price(buyers, sellers);
    let optimal_gain = gain_from_trade(buyers, sellers, optimal_price, rng);

    let (left_buyers, right_buyers) = random_halving(buyers, rng);
    let (left_sellers, right_sellers) = random_halving(sellers, rng);

    let left_price = equilibrium_price(&left_buyers, &left_sellers);
    let right_price = equilibrium_price(&right_buyers, &right_sellers);

    let left_gain = gain_from_trade(&left_buyers, &left_sellers, right_price, rng);
    let right_gain = gain_from_trade(&right_buyers, &right_sellers, left_price, rng);
    let gain = left_gain + right_gain;

    let competitive_ratio = if optimal_gain == 0.0 {
        None
    } else {
        Some(gain / optimal_gain)
    };

    Trial {
        left: HalfMarket {
            buyers: left_buyers,
            sellers: left_sellers,
            clearing_price: left_price,
            traded_price: right_price,
            gain: left_gain,
        },
        right: HalfMarket {
            buyers: right_buyers,
            sellers: right_sellers,
            clearing_price: right_price,
            traded_price: left_price,
            gain: right_gain,
        },
        optimal: OptimalMarket {
            price: optimal_price,
            gain: optimal_gain,
        },
        gain,
        competitive_ratio,
    }
}

/// Order trials by competitive ratio, ascending; trials with an
/// undefined ratio sort last.
fn by_competitive_ratio(a: &Trial, b: &Trial) -> Ordering {
    match (a.competitive_ratio, b.competitive_ratio) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Run `iterations` independent trials and return the one with the
/// median competitive ratio.
///
/// Trials are sorted ascending by ratio and the element at index
/// `iterations / 2` is returned: for even counts this is the
/// upper-middle trial, never an interpolation of two records. Fails
/// with [`MarketError::InvalidArgument`] when `iterations` is zero.
pub fn run_median<R: Rng + ?Sized>(
    buyers: &[f64],
    sellers: &[f64],
    iterations: usize,
    rng: &mut R,
) -> Result<Trial, MarketError> {
    if iterations < 1 {
        return Err(MarketError::InvalidArgument(
            "iterations must be at least 1".to_string(),
        ));
    }

    let mut trials: Vec<Trial> = (0..iterations)
        .map(|_| run_mida(buyers, sellers, rng))
        .collect();
    trials.sort_by(by_competitive_ratio);
    Ok(trials.swap_remove(iterations / 2))
}
