//! Linear and binary strategies side by side.

use summit_core::{
    NoTrace, PreconditionPolicy, Searcher, Sequence, Shape, Strategy, classify_shape,
    compare_strategies,
};

const SINGLE_PEAKED: &[&[i32]] = &[
    &[1, 2, 3, 4, 7, 8, 9, 3, 1],
    &[1],
    &[1, 1, 1],
    &[0, 5],
    &[5, 0],
    &[1, 2, 2, 2, 3, 1],
    &[-4, -2, -1, -3, -8],
    &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1],
];

#[test]
fn strategies_agree_on_strict_single_peaks() {
    for &values in SINGLE_PEAKED {
        let seq = Sequence::new(values).unwrap();
        assert!(classify_shape(seq).strategies_agree(), "{values:?}");

        let comparison =
            compare_strategies(values, PreconditionPolicy::Assume, &mut NoTrace).unwrap();
        assert!(comparison.agree(), "{values:?}: {comparison:?}");
    }
}

// A plateau after the peak still satisfies the single-peak precondition, but
// the descent predicate is no longer monotone. The binary strategy lands on a
// later descent than the linear scan. This is a known limitation, not a bug
// to paper over.
#[test]
fn descending_plateau_makes_strategies_diverge() {
    let values = [1, 3, 2, 2, 1];
    let seq = Sequence::new(&values).unwrap();
    assert!(matches!(
        classify_shape(seq),
        Shape::SinglePeak {
            strict_descent: false,
            ..
        }
    ));

    let comparison =
        compare_strategies(&values, PreconditionPolicy::Verify, &mut NoTrace).unwrap();
    assert_eq!(comparison.linear.value(), 1);
    assert_eq!(comparison.binary.value(), 3);
    assert!(!comparison.agree());
}

// Outside the precondition the binary result is unspecified. It is only
// checked for being some rising edge into a descent.
#[test]
fn several_peaks_give_unspecified_but_well_formed_binary_result() {
    let values = [1, 5, 2, 8, 3, 9, 4];
    let binary = Searcher::new(Strategy::Binary, PreconditionPolicy::Assume)
        .run(&values)
        .unwrap()
        .value();
    let linear = Searcher::new(Strategy::Linear, PreconditionPolicy::Assume)
        .run(&values)
        .unwrap()
        .value();

    assert_eq!(linear, 1);
    assert!(binary < values.len());
    assert!(binary == 0 || values[binary - 1] <= values[binary]);
    assert!(binary + 1 == values.len() || values[binary] > values[binary + 1]);
}

#[test]
fn verify_policy_refuses_several_peaks() {
    let values = [1, 5, 2, 8, 3, 9, 4];
    let err = Searcher::new(Strategy::Binary, PreconditionPolicy::Verify)
        .run(&values)
        .unwrap_err();
    assert!(err.to_string().contains("rises again at index 3"));
}
