//! Property-based tests for the binary and unary engines

mod common;

use bigdecimal::BigDecimal;
use common::decimals;
use microflex_core::{MathContext, Policy, Well, WellSet, Window};
use microflex_math::*;
use proptest::prelude::*;

fn list() -> impl Strategy<Value = Vec<BigDecimal>> {
    prop::collection::vec(-1_000i64..1_000, 0..24)
        .prop_map(|values| values.into_iter().map(BigDecimal::from).collect())
}

proptest! {
    // Property: standard mode keeps the longer operand's length and tail
    #[test]
    fn prop_standard_preserves_length(a in list(), b in list()) {
        let ctx = MathContext::default();
        let result = Addition.calculate(&a, &b, &ctx).unwrap();

        prop_assert_eq!(result.len(), a.len().max(b.len()));
        let shared = a.len().min(b.len());
        for i in 0..shared {
            prop_assert_eq!(&result[i], &(&a[i] + &b[i]));
        }
        let longer = if a.len() >= b.len() { &a } else { &b };
        prop_assert_eq!(&result[shared..], &longer[shared..]);
    }

    // Property: strict mode truncates to the shorter operand
    #[test]
    fn prop_strict_truncates(a in list(), b in list()) {
        let ctx = MathContext::default();
        let result = Subtraction.calculate_strict(&a, &b, &ctx).unwrap();
        prop_assert_eq!(result.len(), a.len().min(b.len()));
        for (i, value) in result.iter().enumerate() {
            prop_assert_eq!(value, &(&a[i] - &b[i]));
        }
    }

    // Property: a ranged call equals the unranged call on the windows
    #[test]
    fn prop_range_is_window(
        a in list(),
        b in list(),
        begin in 0usize..12,
        length in 0usize..12,
    ) {
        let ctx = MathContext::default();
        let window = Window::new(begin, length);
        let fits = begin + length <= a.len().max(b.len());

        for policy in [Policy::Standard, Policy::Strict] {
            let ranged = Multiplication.calculate_with(&a, &b, policy, Some(window), &ctx);
            if fits {
                let expected = Multiplication
                    .calculate_with(window.apply(&a), window.apply(&b), policy, None, &ctx)
                    .unwrap();
                prop_assert_eq!(ranged.unwrap(), expected);
            } else {
                prop_assert!(ranged.is_err());
            }
        }
    }

    // Property: standard combine with an empty operand returns the other operand
    #[test]
    fn prop_empty_operand_is_identity(a in list()) {
        let ctx = MathContext::default();
        prop_assert_eq!(Division.calculate(&a, &[], &ctx).unwrap(), a.clone());
        prop_assert_eq!(Division.calculate(&[], &a, &ctx).unwrap(), a);
    }

    // Property: set results cover the union (standard) or intersection (strict)
    #[test]
    fn prop_set_identities(
        left in prop::collection::vec((0usize..3, 1usize..4), 0..10),
        right in prop::collection::vec((0usize..3, 1usize..4), 0..10),
    ) {
        let ctx = MathContext::default();
        let to_set = |ids: &[(usize, usize)]| -> WellSet {
            ids.iter().map(|&(r, c)| Well::with_data(r, c, decimals(&[1, 2]))).collect()
        };
        let set1 = to_set(&left);
        let set2 = to_set(&right);

        let standard = Addition.sets(&set1, &set2, Policy::Standard, None, &ctx).unwrap();
        let strict = Addition.sets(&set1, &set2, Policy::Strict, None, &ctx).unwrap();

        for well in set1.iter().chain(set2.iter()) {
            prop_assert!(standard.contains(well));
            prop_assert_eq!(strict.contains(well), set1.contains(well) && set2.contains(well));
        }
        prop_assert!(strict.len() <= standard.len());
    }

    // Property: unary ranged calls return exactly the transformed window
    #[test]
    fn prop_unary_range(a in list(), begin in 0usize..12, length in 0usize..12) {
        let window = Window::new(begin, length);
        let ranged = Negate.calculate_range(&a, window);
        if begin + length <= a.len() {
            let ranged = ranged.unwrap();
            prop_assert_eq!(ranged.len(), length);
            for (value, original) in ranged.iter().zip(window.apply(&a)) {
                prop_assert_eq!(value, &(-original.clone()));
            }
        } else {
            prop_assert!(ranged.is_err());
        }
    }
}

#[test]
fn test_well_example() {
    let ctx = MathContext::default();
    let a = Well::with_data(0, 1, decimals(&[1, 2, 3]));
    let b = Well::with_data(0, 1, decimals(&[10, 20]));

    assert_eq!(
        Addition.wells(&a, &b, Policy::Standard, None, &ctx).unwrap(),
        decimals(&[11, 22, 3])
    );
    assert_eq!(
        Addition.wells(&a, &b, Policy::Strict, None, &ctx).unwrap(),
        decimals(&[11, 22])
    );
}

#[test]
fn test_random_plates_standard_vs_strict() {
    let mut rng = common::rng();
    let ctx = MathContext::default();
    let plate1 = common::random_plate(&mut rng, 8, 12, "left");
    let plate2 = common::random_plate(&mut rng, 8, 12, "right");

    let standard = Subtraction
        .plates(&plate1, &plate2, Policy::Standard, None, &ctx)
        .unwrap();
    let strict = Subtraction
        .plates(&plate1, &plate2, Policy::Strict, None, &ctx)
        .unwrap();

    assert_eq!(standard.label(), "left");
    for well in &standard {
        let left = plate1.get(well.row(), well.column());
        let right = plate2.get(well.row(), well.column());
        let expected_len = match (left, right) {
            (Some(l), Some(r)) => l.len().max(r.len()),
            (Some(l), None) => l.len(),
            (None, Some(r)) => r.len(),
            (None, None) => unreachable!("result wells come from an operand"),
        };
        assert_eq!(well.len(), expected_len, "well {well}");
    }
    for well in &strict {
        let left = plate1.get(well.row(), well.column()).unwrap();
        let right = plate2.get(well.row(), well.column()).unwrap();
        assert_eq!(well.len(), left.len().min(right.len()), "well {well}");
    }
}

#[test]
fn test_random_stack_ranged() {
    let mut rng = common::rng();
    let ctx = MathContext::default();
    let mut stack1 = microflex_core::Stack::new(8, 12, "s1");
    let mut stack2 = microflex_core::Stack::new(8, 12, "s2");
    for i in 0..3 {
        stack1.add(common::uniform_plate(&mut rng, 6, &format!("a{i}"))).unwrap();
    }
    stack2.add(common::uniform_plate(&mut rng, 6, "b0")).unwrap();

    let window = Window::new(2, 4);
    let result = Addition
        .stacks(&stack1, &stack2, Policy::Standard, Some(window), &ctx)
        .unwrap();
    assert_eq!(result.len(), 3);
    for plate in &result {
        assert!(plate.iter().all(|well| well.len() == 4));
    }

    let constant = Multiplication
        .stacks_constant(&stack1, &BigDecimal::from(2), Some(window), &ctx)
        .unwrap();
    let source = stack1.get(1).unwrap().get(3, 7).unwrap();
    let doubled = constant.get(1).unwrap().get(3, 7).unwrap();
    for (value, original) in doubled.iter().zip(window.apply(source.data())) {
        assert_eq!(value, &(original * &BigDecimal::from(2)));
    }
}
