//! Realized gain-from-trade at a fixed price.

use rand::Rng;
use rand::seq::SliceRandom;

/// Total surplus realized when trade happens at `price`.
///
/// Buyers valued strictly above the price and sellers costed strictly
/// below it are interested in trading. When the two sides differ in
/// size, the long side is rationed by an independent uniform shuffle of
/// each side; pairs are then matched positionally and each contributes
/// `buyer - seller` to the total. No priority is given to valuation
/// magnitude.
///
/// The result is non-negative whenever `price` lies inside the clearing
/// interval; a price outside it can pair a buyer below a seller.
pub fn gain_from_trade<R: Rng + ?Sized>(
    buyers: &[f64],
    sellers: &[f64],
    price: f64,
    rng: &mut R,
) -> f64 {
    let mut interested_buyers: Vec<f64> = buyers.iter().copied().filter(|&v| v > price).collect();
    let mut interested_sellers: Vec<f64> =
        sellers.iter().copied().filter(|&c| c < price).collect();

    interested_buyers.shuffle(rng);
    interested_sellers.shuffle(rng);

    interested_buyers
        .iter()
        .zip(interested_sellers.iter())
        .map(|(value, cost)| value - cost)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equilibrium::{equilibrium_interval, equilibrium_price};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_single_pair_trades() {
        // Interested buyers {20}, interested sellers {5}: gain 15.
        let mut rng = StdRng::seed_from_u64(42);
        let gain = gain_from_trade(&[10.0, 20.0], &[5.0, 15.0], 12.0, &mut rng);
        assert_eq!(gain, 15.0);
    }

    #[test]
    fn test_marginal_agents_do_not_trade() {
        // Valuations exactly at the price are excluded on both sides.
        let mut rng = StdRng::seed_from_u64(42);
        let gain = gain_from_trade(&[12.0, 20.0], &[5.0, 12.0], 12.0, &mut rng);
        assert_eq!(gain, 15.0);
    }

    #[test]
    fn test_no_interested_agents() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(gain_from_trade(&[5.0], &[10.0], 7.0, &mut rng), 0.0);
        assert_eq!(gain_from_trade(&[], &[], 7.0, &mut rng), 0.0);
    }

    #[test]
    fn test_rationing_pairs_up_to_shorter_side() {
        // Three interested buyers, one interested seller: exactly one pair.
        let mut rng = StdRng::seed_from_u64(7);
        let gain = gain_from_trade(&[10.0, 10.0, 10.0], &[2.0], 5.0, &mut rng);
        assert_eq!(gain, 8.0);
    }

    #[test]
    fn test_gain_non_negative_at_equilibrium_price() {
        let cases: Vec<(Vec<f64>, Vec<f64>)> = vec![
            (vec![7.0, 8.0, 9.0], vec![1.0, 2.0, 3.0]),
            (vec![10.0, 20.0], vec![5.0, 15.0]),
            (vec![2.0], vec![1.0, 2.0, 3.0]),
            (vec![100.0, 99.0, 3.0], vec![1.0, 98.0, 101.0]),
        ];
        let mut rng = StdRng::seed_from_u64(123);
        for (buyers, sellers) in cases {
            let price = equilibrium_price(&buyers, &sellers);
            assert!(equilibrium_interval(&buyers, &sellers).contains(price));
            for _ in 0..20 {
                let gain = gain_from_trade(&buyers, &sellers, price, &mut rng);
                assert!(gain >= 0.0, "negative gain {} at price {}", gain, price);
            }
        }
    }

    #[test]
    fn test_same_seed_same_gain() {
        let buyers: Vec<f64> = (0..20).map(|i| 50.0 + i as f64).collect();
        let sellers: Vec<f64> = (0..20).map(|i| 10.0 + i as f64).collect();
        let a = gain_from_trade(&buyers, &sellers, 45.0, &mut StdRng::seed_from_u64(9));
        let b = gain_from_trade(&buyers, &sellers, 45.0, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
