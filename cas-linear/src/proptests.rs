//! Property-based tests for the algebraic laws of linear expressions.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::HashMap;

    use crate::{Evaluated, Expression, Fraction, Term};

    const VARIABLES: [&str; 4] = ["w", "x", "y", "z"];

    // Strategy for generating small rationals
    fn small_fraction() -> impl Strategy<Value = Fraction> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    // Strategy for generating non-zero rationals
    fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
        (prop_oneof![(-50i64..=-1i64), (1i64..=50i64)], 1i64..20i64)
            .prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    // Strategy for generating expressions over a small pool of variables, so that like terms are
    // common
    fn expression() -> impl Strategy<Value = Expression> {
        (
            small_fraction(),
            prop::collection::vec((0..VARIABLES.len(), small_fraction()), 0..6),
        ).prop_map(|(constant, terms)| {
            terms.into_iter().fold(Expression::from(constant), |expr, (idx, coefficient)| {
                expr.add(Term::with_coefficient(coefficient, VARIABLES[idx]))
            })
        })
    }

    /// Checks that the expression is in canonical form.
    fn is_canonical(expr: &Expression) -> bool {
        let terms = expr.terms();
        terms.iter().all(|term| !term.coefficient().is_zero())
            && terms.iter().enumerate().all(|(i, term)| {
                terms[i + 1..].iter().all(|other| !term.has_the_same_variable_as(other))
            })
    }

    proptest! {
        #[test]
        fn add_commutative(a in expression(), b in expression()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in expression(), b in expression(), c in expression()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(b.add(&c)));
        }

        #[test]
        fn add_zero_identity(a in expression()) {
            prop_assert_eq!(a.add(Expression::new()), a.clone());
            prop_assert_eq!(a.add(0), a);
        }

        #[test]
        fn subtract_self_is_zero(a in expression()) {
            let zero = a.subtract(&a);
            prop_assert!(zero.is_constant());
            prop_assert_eq!(zero, Expression::new());
        }

        #[test]
        fn subtract_is_add_negated(a in expression(), b in expression()) {
            prop_assert_eq!(a.subtract(&b), a.add(-&b));
        }

        #[test]
        fn scaling_identity(a in expression(), k in non_zero_fraction()) {
            prop_assert_eq!(a.multiply(&k).unwrap().divide(&k).unwrap(), a);
        }

        #[test]
        fn multiply_distributes(a in expression(), b in expression(), k in small_fraction()) {
            prop_assert_eq!(
                a.add(&b).multiply(&k).unwrap(),
                a.multiply(&k).unwrap().add(b.multiply(&k).unwrap())
            );
        }

        #[test]
        fn operations_stay_canonical(a in expression(), b in expression(), k in small_fraction()) {
            prop_assert!(is_canonical(&a));
            prop_assert!(is_canonical(&a.add(&b)));
            prop_assert!(is_canonical(&a.subtract(&b)));
            prop_assert!(is_canonical(&a.multiply(&k).unwrap()));
        }

        #[test]
        fn opposite_terms_cancel(c in non_zero_fraction(), idx in 0..VARIABLES.len()) {
            let term = Term::with_coefficient(c.clone(), VARIABLES[idx]);
            let opposite = Term::with_coefficient(-c, VARIABLES[idx]);
            let sum = Expression::from(term).add(Expression::from(opposite));
            prop_assert!(sum.terms().is_empty());
        }

        #[test]
        fn full_evaluation_is_a_number(a in expression(), values in prop::collection::vec(small_fraction(), 4)) {
            let values = VARIABLES.iter().copied().zip(values).collect::<HashMap<_, _>>();
            let expected = a.terms().iter().fold(a.constant().clone(), |acc, term| {
                acc.add(term.coefficient().multiply(&values[term.variable()]))
            });
            prop_assert_eq!(a.evaluate_at(&values), Evaluated::Number(expected));
        }

        #[test]
        fn evaluation_is_additive(a in expression(), b in expression(), values in prop::collection::vec(small_fraction(), 4)) {
            let values = VARIABLES.iter().copied().zip(values).collect::<HashMap<_, _>>();
            let sum = a.add(&b).evaluate_at(&values).into_number().unwrap();
            let a = a.evaluate_at(&values).into_number().unwrap();
            let b = b.evaluate_at(&values).into_number().unwrap();
            prop_assert_eq!(sum, a.add(b));
        }
    }
}
