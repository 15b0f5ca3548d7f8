//! The concrete input/output scenarios every strategy is held to.

use std::thread;

use summit_core::{
    BinarySearch, BoundarySearch, ErrorKind, LinearScan, Sequence, find_boundary_binary,
    find_boundary_linear,
};

use crate::common::SCENARIO;

#[test]
fn single_element_is_index_zero_for_both() {
    assert_eq!(find_boundary_linear(&[5]).unwrap().value(), 0);
    assert_eq!(find_boundary_binary(&[5]).unwrap().value(), 0);
}

#[test]
fn rise_then_fall_peaks_at_nine() {
    let seq = Sequence::new(&SCENARIO).unwrap();
    for index in [LinearScan.locate(seq), BinarySearch.locate(seq)] {
        assert_eq!(index.value(), 6);
        assert_eq!(seq.value_at(index), Some(&9));
    }
}

#[test]
fn strictly_increasing_ends_at_last_index() {
    let values = [1, 2, 3, 4, 5];
    assert_eq!(find_boundary_linear(&values).unwrap().value(), 4);
    // Not contractual for the binary strategy; this implementation treats the
    // last index as a descent and so lands on it too.
    assert_eq!(find_boundary_binary(&values).unwrap().value(), 4);
}

#[test]
fn strictly_decreasing_starts_at_zero() {
    let values = [5, 4, 3, 2, 1];
    assert_eq!(find_boundary_linear(&values).unwrap().value(), 0);
    assert_eq!(find_boundary_binary(&values).unwrap().value(), 0);
}

#[test]
fn empty_sequence_is_invalid_input() {
    let empty: [u8; 0] = [];
    assert_eq!(
        find_boundary_linear(&empty).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(
        find_boundary_binary(&empty).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
}

#[test]
fn repeated_calls_agree() {
    let first = find_boundary_binary(&SCENARIO).unwrap();
    let second = find_boundary_binary(&SCENARIO).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        find_boundary_linear(&SCENARIO).unwrap(),
        find_boundary_linear(&SCENARIO).unwrap()
    );
}

#[test]
fn shared_input_across_threads() {
    let values: Vec<i64> = (0..1_000).chain((0..1_000).rev()).collect();
    let seq = Sequence::new(&values).unwrap();

    thread::scope(|scope| {
        let linear = scope.spawn(|| LinearScan.locate(seq));
        let binary = scope.spawn(|| BinarySearch.locate(seq));
        let linear = linear.join().unwrap();
        let binary = binary.join().unwrap();
        assert_eq!(linear, binary);
        // The peak value appears twice; the first descent follows the second copy.
        assert_eq!(linear.value(), 1_000);
    });
}
