use crate::candidate::Weighted;
use rust_decimal::Decimal;

/// Exact probability of each candidate winning the first round, in input order.
///
/// A pool holding no tickets at all hands the whole probability to its first
/// candidate, mirroring what [`crate::select`] does.
pub fn first_round_odds<T: Weighted>(candidates: &[T]) -> Vec<Decimal> {
    let total = candidates
        .iter()
        .map(|c| Decimal::from(c.weight()))
        .sum::<Decimal>();

    if total.is_zero() {
        return candidates
            .iter()
            .enumerate()
            .map(|(i, _)| if i == 0 { Decimal::ONE } else { Decimal::ZERO })
            .collect();
    }

    candidates
        .iter()
        .map(|c| Decimal::from(c.weight()) / total)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{arbitrary_pool, Candidate};
    use rust_decimal_macros::dec;
    use test_strategy::proptest;

    fn are_close(a: Decimal, b: Decimal) -> bool {
        const DECIMAL_PRECISION: u32 = 10;
        a.round_dp(DECIMAL_PRECISION) == b.round_dp(DECIMAL_PRECISION)
    }

    #[test]
    fn proportional_to_tickets() {
        let candidates = vec![
            Candidate::new("a", 1),
            Candidate::new("b", 1),
            Candidate::new("c", 2),
        ];
        assert_eq!(
            first_round_odds(&candidates),
            vec![dec!(0.25), dec!(0.25), dec!(0.5)]
        );
    }

    #[test]
    fn zero_tickets_zero_odds() {
        let candidates = vec![Candidate::new("a", 0), Candidate::new("b", 4)];
        assert_eq!(first_round_odds(&candidates), vec![Decimal::ZERO, Decimal::ONE]);
    }

    #[test]
    fn all_zero_favours_first() {
        let candidates = vec![Candidate::new("a", 0), Candidate::new("b", 0)];
        assert_eq!(first_round_odds(&candidates), vec![Decimal::ONE, Decimal::ZERO]);
    }

    #[test]
    fn empty_pool_has_no_odds() {
        assert!(first_round_odds::<Candidate>(&[]).is_empty());
    }

    #[proptest]
    fn odds_sum_to_one(#[strategy(arbitrary_pool(32))] candidates: Vec<Candidate>) {
        let odds = first_round_odds(&candidates);
        assert_eq!(odds.len(), candidates.len());
        if !candidates.is_empty() {
            assert!(are_close(odds.iter().sum::<Decimal>(), Decimal::ONE));
        }
    }
}
