//! Property-based tests for the ring axioms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Field, Ring, Q, Z, Z19, Z2, Z5};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn check_ring_axioms<R: Ring>(a: R, b: R, c: R) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        prop_assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
        prop_assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
        prop_assert_eq!(
            (a.clone() * b.clone()) * c.clone(),
            a.clone() * (b.clone() * c.clone())
        );
        prop_assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b.clone() + a.clone() * c.clone()
        );
        prop_assert_eq!(a.clone() + R::zero(), a.clone());
        prop_assert_eq!(a.clone() * R::one(), a.clone());
        prop_assert!((a.clone() - a.clone()).is_zero());
        prop_assert_eq!(-(-a.clone()), a.clone());

        let mut fused = c.clone();
        fused.muladdeq(&a, &b);
        prop_assert_eq!(fused, c + a * b);
        Ok(())
    }

    proptest! {
        #[test]
        fn z_ring_axioms(a in small_int(), b in small_int(), c in small_int()) {
            check_ring_axioms(Z::new(a), Z::new(b), Z::new(c))?;
        }

        #[test]
        fn q_ring_axioms(
            a in small_int(), da in non_zero_int(),
            b in small_int(), db in non_zero_int(),
            c in small_int(), dc in non_zero_int()
        ) {
            check_ring_axioms(Q::new(a, da), Q::new(b, db), Q::new(c, dc))?;
        }

        #[test]
        fn z2_ring_axioms(a in small_int(), b in small_int(), c in small_int()) {
            check_ring_axioms(Z2::from(a), Z2::from(b), Z2::from(c))?;
        }

        #[test]
        fn zp_ring_axioms(a in small_int(), b in small_int(), c in small_int()) {
            check_ring_axioms(Z5::from(a), Z5::from(b), Z5::from(c))?;
            check_ring_axioms(Z19::from(a), Z19::from(b), Z19::from(c))?;
        }

        #[test]
        fn field_inverse(a in non_zero_int(), d in non_zero_int()) {
            let q = Q::new(a, d);
            prop_assert!((q.clone() * q.recip()).is_one());

            let z = Z19::from(a);
            if !z.is_zero() {
                prop_assert!((z * z.recip()).is_one());
                prop_assert_eq!(z.inv(), Some(z.recip()));
            }
        }

        #[test]
        fn z_division_identity(a in small_int(), d in non_zero_int()) {
            let (a, d) = (Z::new(a), Z::new(d));
            let (q, r) = a.divide_with_remainder(&d).unwrap();
            prop_assert_eq!(q * d.clone() + r.clone(), a.clone());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());

            let (q, r) = a.div_rem_euclid(&d).unwrap();
            prop_assert_eq!(q * d + r.clone(), a);
            prop_assert!(!r.is_negative());
        }

        #[test]
        fn z_extended_gcd(a in small_int(), b in small_int()) {
            let (a, b) = (Z::new(a), Z::new(b));
            let (g, s, t) = a.extended_gcd(&b);
            prop_assert_eq!(s * a.clone() + t * b.clone(), g.clone());
            prop_assert_eq!(g, a.gcd(&b));
        }

        #[test]
        fn from_integer_is_a_homomorphism(a in small_int(), b in small_int()) {
            use knotperiod_integers::Integer;
            let (ia, ib) = (Integer::new(a), Integer::new(b));
            prop_assert_eq!(
                Z5::from_integer(&(ia.clone() * ib.clone())),
                Z5::from_integer(&ia) * Z5::from_integer(&ib)
            );
            prop_assert_eq!(
                Z2::from_integer(&(ia.clone() + ib.clone())),
                Z2::from_integer(&ia) + Z2::from_integer(&ib)
            );
        }
    }
}
