//! Property-based tests for Laurent polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{invert_variable, LaurentMonomial, LaurentPoly};
    use knotperiod_rings::{Ring, Q, Z, Z7};

    fn small_monomial() -> impl Strategy<Value = LaurentMonomial> {
        proptest::collection::vec((1u32..=3u32, -4i32..=4i32), 0..=3)
            .prop_map(LaurentMonomial::from_exponents)
    }

    // Sparse polynomials with up to five terms and small coefficients
    fn z_poly() -> impl Strategy<Value = LaurentPoly<Z>> {
        proptest::collection::vec((small_monomial(), -20i64..20i64), 0..=5).prop_map(|terms| {
            LaurentPoly::from_terms(terms.into_iter().map(|(m, c)| (m, Z::new(c))))
        })
    }

    fn q_poly() -> impl Strategy<Value = LaurentPoly<Q>> {
        proptest::collection::vec((small_monomial(), -20i64..20i64, 1i64..5i64), 0..=4)
            .prop_map(|terms| {
                LaurentPoly::from_terms(terms.into_iter().map(|(m, n, d)| (m, Q::new(n, d))))
            })
    }

    fn z7_poly() -> impl Strategy<Value = LaurentPoly<Z7>> {
        z_poly().prop_map(|p| p.map_coefficients(|c| Z7::from_integer(c.as_inner())))
    }

    proptest! {
        #[test]
        fn monomials_never_store_zero_exponents(a in small_monomial(), b in small_monomial()) {
            let ab = a.mul(&b);
            prop_assert!(ab.iter().all(|(_, e)| e != 0));
            prop_assert_eq!(ab.degree(), a.degree() + b.degree());
        }

        #[test]
        fn add_then_sub_is_identity(p in z_poly(), q in z_poly()) {
            prop_assert_eq!((p.clone() + q.clone()) - q, p);
        }

        #[test]
        fn coefficients_are_never_zero(p in z_poly(), q in z_poly()) {
            let r = &p * &q + p;
            prop_assert!(r.terms().all(|(_, c)| !c.is_zero()));
        }

        #[test]
        fn mul_associative_over_q(a in q_poly(), b in q_poly(), c in q_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn mul_associative_over_z7(a in z7_poly(), b in z7_poly(), c in z7_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn distributive(a in z_poly(), b in z_poly(), c in z_poly()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn invert_variable_is_an_involution(p in z_poly(), j in 1u32..=3u32) {
            prop_assert_eq!(invert_variable(&invert_variable(&p, j), j), p);
        }

        #[test]
        fn invert_variable_is_multiplicative(a in z_poly(), b in z_poly()) {
            prop_assert_eq!(
                invert_variable(&(&a * &b), 2),
                &invert_variable(&a, 2) * &invert_variable(&b, 2)
            );
        }

        #[test]
        fn evaluation_commutes(p in z_poly()) {
            let one_way = p.evaluate(&Z::new(-1), 1).evaluate(&Z::new(1), 2);
            let other_way = p.evaluate(&Z::new(1), 2).evaluate(&Z::new(-1), 1);
            prop_assert_eq!(one_way, other_way);
        }

        #[test]
        fn evaluation_is_a_homomorphism(a in z_poly(), b in z_poly()) {
            let v = Z::new(-1);
            prop_assert_eq!(
                (&a * &b).evaluate(&v, 1),
                &a.evaluate(&v, 1) * &b.evaluate(&v, 1)
            );
        }

        #[test]
        fn exact_division_recovers_factor(p in z_poly(), e in 1i32..4i32, f in -3i32..3i32) {
            let m = LaurentMonomial::from_exponents([(1, e), (2, 2 * f)]);
            let product = &p * &(LaurentPoly::one() + LaurentPoly::term(Z::one(), m.clone()));
            prop_assert_eq!(product.exact_div_one_plus(&m), Some(p));
        }

        #[test]
        fn display_round_trips(p in z_poly()) {
            let text = p.to_string();
            prop_assert_eq!(text.parse::<LaurentPoly<Z>>().unwrap(), p);
        }

        #[test]
        fn display_round_trips_over_q(p in q_poly()) {
            let text = p.to_string();
            prop_assert_eq!(text.parse::<LaurentPoly<Q>>().unwrap(), p);
        }
    }
}
