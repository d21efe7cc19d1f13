//! Parsing of compact valuation-spec strings.
//!
//! A spec is a comma-separated list of clauses, each either a bare value
//! ("98") or a quantity-value pair ("20 of 100"). Any non-digit text may
//! separate the two integers, so "20 of 100", "20x100" and "20 100" are
//! equivalent.

/// Extract up to two unsigned integers from a clause, ignoring any
/// non-digit separator text. Two integers are returned as written; a
/// single integer becomes the second element with `default_first` filling
/// the first slot. Returns `None` when the clause holds no integer.
fn num_pair(clause: &str, default_first: u32) -> Option<(u32, u32)> {
    let mut numbers = clause
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<u32>().ok());

    let first = numbers.next()?;
    match numbers.next() {
        Some(second) => Some((first, second)),
        None => Some((default_first, first)),
    }
}

/// Expand a valuation spec into a flat list of agent valuations.
///
/// Each clause contributes `quantity` values of `value + bias + i*noise`
/// for `i` in `0..quantity`. A small per-unit noise breaks exact ties so
/// that downstream sorting behaves deterministically. Clauses with no
/// parseable integer are dropped; parsing never fails.
///
/// `values_from_spec("20 of 100, 1 of 99, 98", 0.0, 0.0)` yields twenty
/// 100s, one 99 and one 98.
pub fn values_from_spec(spec: &str, bias: f64, noise_per_unit: f64) -> Vec<f64> {
    let mut values = Vec::new();
    for clause in spec.split(',') {
        let Some((quantity, value)) = num_pair(clause, 1) else {
            continue;
        };
        for i in 0..quantity {
            values.push(value as f64 + bias + i as f64 * noise_per_unit);
        }
    }
    values
}
