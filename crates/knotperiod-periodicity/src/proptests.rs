//! Property-based tests for the congruence checker and the bounded search.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        compute_bounds, search_space_size, BoundInterval, Bounds, KhBoundsIterator,
        PeriodicCongruenceChecker, QuotientDecomposition, SUPPORTED_PERIODS,
    };
    use knotperiod_poly::{invert_variable, LaurentMonomial, LaurentPoly};
    use knotperiod_rings::{Ring, Z};

    fn bivariate() -> impl Strategy<Value = LaurentPoly<Z>> {
        proptest::collection::vec((-3i32..=3i32, -30i32..=30i32, -9i64..=9i64), 0..=6).prop_map(
            |terms| {
                LaurentPoly::from_terms(terms.into_iter().map(|(a, b, c)| {
                    (LaurentMonomial::from_exponents([(1, a), (2, b)]), Z::new(c))
                }))
            },
        )
    }

    fn period() -> impl Strategy<Value = u32> {
        proptest::sample::select(SUPPORTED_PERIODS.to_vec())
    }

    proptest! {
        #[test]
        fn reduce_is_idempotent(p in bivariate(), prime in period()) {
            let cc = PeriodicCongruenceChecker::quantum(prime);
            let once = cc.reduce(&p);
            prop_assert_eq!(cc.reduce(&once), once.clone());
            let modulus = i32::try_from(2 * prime).unwrap();
            prop_assert!(once.terms().all(|(m, _)| (0..modulus).contains(&m.exponent(2))));
        }

        #[test]
        fn check_matches_representative(p in bivariate(), prime in period()) {
            let cc = PeriodicCongruenceChecker::quantum(prime);
            prop_assert_eq!(cc.check(&p), cc.representative(&p).is_zero());
        }

        #[test]
        fn symmetric_polynomials_pass(p in bivariate(), prime in period()) {
            let cc = PeriodicCongruenceChecker::quantum(prime);
            let symmetric = &p + &invert_variable(&p, 2);
            prop_assert!(cc.check(&symmetric));
        }

        #[test]
        fn full_period_shift_is_invisible(p in bivariate(), prime in period()) {
            let cc = PeriodicCongruenceChecker::quantum(prime);
            let shift = LaurentMonomial::var_pow(2, i32::try_from(2 * prime).unwrap());
            let shifted = p.mul_term(&shift, &Z::one());
            prop_assert_eq!(cc.reduce(&shifted), cc.reduce(&p));
        }

        #[test]
        fn iterator_length_matches_search_space(
            spans in proptest::collection::vec((-3i64..=0i64, 0i64..=3i64), 0..=3),
            prime in period(),
        ) {
            let p = i64::from(prime);
            let mut bounds = Bounds::new();
            for (k, (lo, hi)) in (1i32..).zip(spans) {
                bounds.insert(
                    LaurentPoly::var(Z::one(), 2, k),
                    BoundInterval { min: Z::new(lo * p), max: Z::new(hi * p) },
                );
            }
            let count = KhBoundsIterator::new(&bounds, prime).count();
            prop_assert_eq!(Z::new(i64::try_from(count).unwrap()), search_space_size(&bounds, prime));
        }

        #[test]
        fn bounds_contain_zero(q in bivariate(), prime in period()) {
            let decomposition = QuotientDecomposition {
                quotient: q,
                remainder: LaurentPoly::zero(),
                mul: "1 + tq^4".parse().unwrap(),
            };
            for interval in compute_bounds(&[decomposition], prime).values() {
                prop_assert!(interval.min <= Z::zero());
                prop_assert!(interval.max >= Z::zero());
                prop_assert!(interval.min < interval.max);
            }
        }
    }
}
