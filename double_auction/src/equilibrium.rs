//! Single-good, unit-demand market clearing.
//!
//! Each buyer demands one unit at any price at or below its valuation;
//! each seller supplies one unit at any price at or above its cost. The
//! solver sorts private copies of both lists and walks them in lockstep
//! until demand no longer exceeds supply; the crossing determines the
//! clearing-price interval.

/// Clearing-price interval of a single-good market.
///
/// Every price in the interval clears the market. `max` is `None` when no
/// seller cost and no buyer value bounds the interval from above (for
/// example when the seller side is empty).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceInterval {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceInterval {
    /// Whether `price` clears the market.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

/// Compute the clearing-price interval for the given buyer valuations and
/// seller costs. The inputs are copied, never reordered.
///
/// The scan conceptually brackets the sorted buyer values with an
/// unbounded 0th entry and a trailing zero, and the sorted seller costs
/// with a leading zero and an unbounded tail; both brackets are realized
/// as index checks rather than infinite sentinel values. Index `i`
/// advances while the i-th highest value exceeds the i-th lowest cost;
/// at the first non-crossing index the interval is
/// `[max(cost[i-1], value[i]), min(cost[i], value[i-1])]`.
pub fn equilibrium_interval(buyers: &[f64], sellers: &[f64]) -> PriceInterval {
    let mut values = buyers.to_vec();
    let mut costs = sellers.to_vec();
    values.sort_by(|a, b| b.total_cmp(a));
    costs.sort_by(f64::total_cmp);

    let n = values.len();
    let m = costs.len();

    // Index 0 always crosses (unbounded demand against a zero cost).
    let mut i = 1;
    loop {
        if i > m {
            // Past the last cost: no finite cost remains, crossing ends.
            break;
        }
        let cost = costs[i - 1];
        let value = match i {
            k if k <= n => values[k - 1],
            k if k == n + 1 => 0.0, // virtual zero-value buyer
            _ => break,
        };
        if value > cost {
            i += 1;
        } else {
            break;
        }
    }

    let cost_below = if i >= 2 { costs[i - 2] } else { 0.0 };
    let value_here = if i <= n {
        values[i - 1]
    } else {
        0.0 // buyer side exhausted
    };
    let min = cost_below.max(value_here);

    let cost_here = if i <= m { Some(costs[i - 1]) } else { None };
    let value_above = match i - 1 {
        0 => None, // unbounded 0th buyer entry
        k if k <= n => Some(values[k - 1]),
        _ => Some(0.0),
    };
    let max = match (cost_here, value_above) {
        (Some(c), Some(v)) => Some(c.min(v)),
        (Some(c), None) => Some(c),
        (None, Some(v)) => Some(v),
        (None, None) => None,
    };

    PriceInterval { min, max }
}

/// The clearing price of a single-good market.
///
/// Fixed tie-break policy: returns the minimum of the clearing interval
/// exactly, favoring sellers minimally over buyers. With both lists empty
/// the interval degenerates and the price is 0.
pub fn equilibrium_price(buyers: &[f64], sellers: &[f64]) -> f64 {
    equilibrium_interval(buyers, sellers).min
}
