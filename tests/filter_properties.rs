use ranges::{Error, Filter, Interval, Reason};

fn probe() -> std::ops::RangeInclusive<i64> {
    -20..=40
}

fn filter(list: &str) -> Filter {
    list.parse().expect("valid list")
}

fn membership(f: &Filter) -> Vec<bool> {
    probe().map(|n| f.allows(n)).collect()
}

#[test]
fn applying_a_list_twice_changes_nothing() {
    for list in ["-3,7-,5", "2-5,4-6,9", "1,1,2-3", "-", "10-", "-0,3-4"] {
        let once = filter(list);
        let mut twice = filter(list);
        twice.update(list).unwrap();
        assert_eq!(membership(&once), membership(&twice), "list {list:?}");
    }
}

#[test]
fn token_order_does_not_change_membership() {
    let orders = ["1,2-4,-", "-,2-4,1", "2-4,1,-", "1,-,2-4"];
    for list in orders {
        let f = filter(list);
        assert!(probe().all(|n| f.allows(n)), "list {list:?}");
    }

    let orders = ["3,-2,9-,5-6,4", "9-,4,5-6,-2,3", "5-6,3,4,9-,-2", "-2,9-,4,3,5-6"];
    let expected = membership(&filter(orders[0]));
    for list in orders {
        assert_eq!(membership(&filter(list)), expected, "list {list:?}");
    }
}

#[test]
fn order_may_change_what_is_stored() {
    let early = filter("5,-10");
    let late = filter("-10,5");
    assert_eq!(early.singles(), &[5]);
    assert!(late.singles().is_empty());
    assert_eq!(membership(&early), membership(&late));
}

#[test]
fn nothing_changes_after_match_all() {
    let mut f = filter("-");
    let before = membership(&f);
    for list in ["100", "-3", "7-", "2-4", "1,2,3"] {
        f.update(list).unwrap();
        assert_eq!(membership(&f), before);
    }
    assert_eq!(f.evaluate(100), (true, Reason::AllMatch));
    assert!(f.singles().is_empty());
}

#[test]
fn up_to_keeps_the_larger_limit() {
    let f = filter("-5,-3");
    assert_eq!(f.up_to_limit(), Some(5));
}

#[test]
fn from_keeps_the_smaller_limit() {
    let f = filter("5-,7-");
    assert_eq!(f.from_limit(), Some(5));
}

#[test]
fn singles_are_stored_once() {
    let f = filter("3,3,3");
    assert_eq!(f.singles(), &[3]);
}

#[test]
fn empty_lists_are_errors() {
    let mut f = Filter::default();
    assert_eq!(f.update(""), Err(Error::EmptySpecification));
    assert_eq!(f.update(",,,"), Err(Error::EmptySpecification));
    assert_eq!(f, Filter::default());
}

#[test]
fn limits_and_single_scenario() {
    let f = filter("-3,7-,5");
    assert_eq!(f.up_to_limit(), Some(3));
    assert_eq!(f.from_limit(), Some(7));
    assert_eq!(f.singles(), &[5]);
    assert!(f.intervals().is_empty());

    assert_eq!(f.evaluate(2), (true, Reason::Below));
    assert_eq!(f.evaluate(5), (true, Reason::IsIndex));
    assert_eq!(f.evaluate(6), (false, Reason::NoMatch));
    assert_eq!(f.evaluate(8), (true, Reason::Above));
}

#[test]
fn match_all_then_index_scenario() {
    let mut f = filter("-");
    f.update("100").unwrap();
    assert_eq!(f.evaluate(100), (true, Reason::AllMatch));
    assert!(!f.singles().contains(&100));
}

#[test]
fn overlapping_intervals_scenario() {
    let f = filter("2-5,4-6");
    assert_eq!(f.intervals(), &[Interval::new(2, 5), Interval::new(4, 6)]);
    assert_eq!(f.evaluate(4), (true, Reason::InRange));
    assert!(!f.allows(0));
}

#[test]
fn malformed_tokens_leave_the_filter_alone() {
    for list in ["x-5", "5-x", "abc"] {
        let mut f = Filter::default();
        let err = f.update(list).unwrap_err();
        assert!(matches!(err, Error::MalformedToken { .. }), "list {list:?}: {err}");
        assert_eq!(err.token(), Some(list));
        assert!(err.to_string().contains(list));
        assert_eq!(f, Filter::default());
    }
}

#[test]
fn earlier_tokens_survive_a_failure() {
    let mut f = Filter::default();
    assert!(f.update("-2, 9, 5-x, 20-").is_err());
    assert_eq!(f.up_to_limit(), Some(2));
    assert_eq!(f.singles(), &[9]);
    assert_eq!(f.from_limit(), None);
}

#[test]
fn inverted_ranges_are_rejected() {
    let mut f = Filter::default();
    let err = f.update("7-3").unwrap_err();
    assert_eq!(
        err,
        Error::InvertedRange {
            token: "7-3".into(),
            start: 7,
            end: 3
        }
    );
    assert!(f.intervals().is_empty());
}
