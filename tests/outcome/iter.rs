use result_rail::Outcome;

#[test]
fn iterators_yield_only_success_value() {
    let ok = Outcome::<i32, &str>::new_ok(3);
    assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&3]);
    assert_eq!(ok.iter().len(), 1);

    let err = Outcome::<i32, &str>::new_err("e");
    assert_eq!(err.iter().next(), None);

    let blank = Outcome::<i32, &str>::default();
    assert_eq!(blank.into_iter().count(), 0);
}

#[test]
fn iter_mut_edits_success_value() {
    let mut o = Outcome::<i32, &str>::new_ok(3);
    if let Some(value) = o.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(o.unwrap(), 4);
}

#[test]
fn outcomes_flatten_into_success_values() {
    let outcomes = vec![
        Outcome::<i32, &str>::new_ok(1),
        Outcome::new_err("skip"),
        Outcome::default(),
        Outcome::new_ok(2),
    ];
    let values: Vec<i32> = outcomes.into_iter().flatten().collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn for_loop_over_reference() {
    let o = Outcome::<String, &str>::new_ok("x".to_string());
    let mut hits = 0;
    for value in &o {
        assert_eq!(value, "x");
        hits += 1;
    }
    assert_eq!(hits, 1);
}
