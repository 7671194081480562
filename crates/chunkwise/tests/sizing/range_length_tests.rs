use chunkwise::range_length;
use test_log::test;

#[test]
fn counts_match_iterator_step_by() {
    for start in -7i64..7 {
        for stop in -7i64..7 {
            for step in 1i64..5 {
                let expected = (start..stop).step_by(step as usize).count() as u64;
                assert_eq!(
                    range_length(start, stop, step).unwrap(),
                    expected,
                    "range_length({start}, {stop}, {step})"
                );
            }
        }
    }
}

#[test]
fn documented_vectors() {
    assert_eq!(range_length(0, 10, 1).unwrap(), 10);
    assert_eq!(range_length(0, 10, 3).unwrap(), 4);
    assert_eq!(range_length(5, 5, 1).unwrap(), 0);
    assert_eq!(range_length(10, 5, 1).unwrap(), 0);
}

#[test]
fn huge_step_counts_only_start() {
    assert_eq!(range_length(i64::MIN, i64::MAX, i64::MAX).unwrap(), 3);
    assert_eq!(range_length(0, i64::MAX, i64::MAX).unwrap(), 1);
}

#[test]
fn non_positive_step_is_rejected() {
    for step in [0, -1, i64::MIN] {
        let err = range_length(0, 10, step).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
