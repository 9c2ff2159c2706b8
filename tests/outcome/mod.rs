use result_rail::Outcome;

mod iter;

#[test]
fn ok_and_err_constructors_are_exclusive() {
    let ok = Outcome::<i32, String>::new_ok(42);
    assert!(ok.is_ok());
    assert!(!ok.is_err());

    let err = Outcome::<i32, String>::new_err("boom".to_string());
    assert!(err.is_err());
    assert!(!err.is_ok());
}

#[test]
fn unwrap_round_trips_the_held_value() {
    assert_eq!(Outcome::<i32, &str>::new_ok(42).unwrap(), 42);
    assert_eq!(Outcome::<i32, &str>::new_err("boom").unwrap_err(), "boom");
}

#[test]
fn example_scenario_for_ok_and_err() {
    let ok = Outcome::<i32, String>::new_ok(42);
    assert!(ok.is_ok());
    assert_eq!(ok.clone().unwrap(), 42);
    assert_eq!(ok.map_ok("x").unwrap(), "x");

    let err = Outcome::<i32, String>::new_err("boom".to_string());
    assert!(err.is_err());
    assert_eq!(err.clone().unwrap_err(), "boom");
    assert_eq!(err.unwrap_or(99), 99);
}

#[test]
fn default_outcome_is_uninit() {
    let blank: Outcome<i32, &str> = Outcome::default();
    assert!(blank.is_uninit());
    assert_eq!(blank, Outcome::Uninit);
}
