//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, ModInt, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::ratio(n, d))
    }

    proptest! {
        #[test]
        fn integer_ring_laws(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Integer::new(a), Integer::new(b), Integer::new(c));
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c
            );
            prop_assert!((a.clone() - a.clone()).is_zero());
            prop_assert_eq!(-(-a.clone()), a);
        }

        #[test]
        fn truncating_division_matches_primitive(a in small_int(), d in non_zero_int()) {
            let (q, r) = Integer::new(a).checked_div_rem(&Integer::new(d)).unwrap();
            prop_assert_eq!(q.to_i64(), Some(a / d));
            prop_assert_eq!(r.to_i64(), Some(a % d));
        }

        #[test]
        fn euclidean_division_matches_primitive(a in small_int(), d in non_zero_int()) {
            let (q, r) = Integer::new(a).div_rem_euclid(&Integer::new(d)).unwrap();
            prop_assert_eq!(q.to_i64(), Some(a.div_euclid(d)));
            prop_assert_eq!(r.to_i64(), Some(a.rem_euclid(d)));
        }

        #[test]
        fn bezout_coefficients(a in small_int(), b in small_int()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            let (d, s, t) = a.extended_gcd(&b);
            prop_assert_eq!(&(&s * &a) + &(&t * &b), d.clone());
            prop_assert!(d.divides(&a) && d.divides(&b));
            prop_assert_eq!(d, a.gcd(&b));
        }

        #[test]
        fn rational_field_laws(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c
            );
            if !a.is_zero() {
                prop_assert!((a.clone() * a.recip()).is_one());
                prop_assert_eq!(b.clone() * a.clone() / a, b);
            }
        }

        #[test]
        fn rational_display_round_trips(a in rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
        }

        #[test]
        fn modint_agrees_with_integers(a in small_int(), b in small_int()) {
            type F = ModInt<13>;
            let (x, y) = (F::from_signed(a), F::from_signed(b));
            prop_assert_eq!(x * y, F::from_signed(a * b));
            prop_assert_eq!(x - y, F::from_signed(a - b));
            prop_assert_eq!(x, F::from_integer(&Integer::new(a)));
            if !y.is_zero() {
                prop_assert_eq!(x / y * y, x);
            }
        }
    }
}
