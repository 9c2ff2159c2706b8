use result_rail::scope::{scope, ResultScope};
use result_rail::Outcome;

#[derive(Debug, PartialEq)]
struct NotClone(u8);

#[test]
fn scope_delegates_to_sanctioned_constructors() {
    let r = scope::<i32, String>();
    assert_eq!(r.ok(42), Outcome::new_ok(42));
    assert_eq!(r.err("boom".to_string()), Outcome::new_err("boom".to_string()));
}

#[test]
fn scope_values_pass_presence_queries() {
    let r = ResultScope::<i32, &str>::new();
    assert!(r.ok(1).is_ok());
    assert!(r.err("e").is_err());
}

#[test]
fn scope_is_zero_sized_and_copy_without_bounds() {
    assert_eq!(std::mem::size_of::<ResultScope<NotClone, NotClone>>(), 0);

    let r: ResultScope<NotClone, NotClone> = ResultScope::default();
    let copy = r;
    assert_eq!(r.ok(NotClone(1)).unwrap(), NotClone(1));
    assert_eq!(copy.err(NotClone(2)).unwrap_err(), NotClone(2));
}

#[test]
fn within_runs_block_against_scope() {
    let parsed = ResultScope::<u16, String>::new().within(|r| {
        ["80", "x", "443"]
            .into_iter()
            .map(|raw| match raw.parse() {
                Ok(port) => r.ok(port),
                Err(_) => r.err(format!("bad port: {raw}")),
            })
            .collect::<Outcome<Vec<u16>, String>>()
    });
    assert_eq!(parsed.unwrap_err(), "bad port: x");
}

#[test]
fn debug_names_bound_types() {
    let rendered = format!("{:?}", scope::<u8, String>());
    assert!(rendered.contains("u8"));
    assert!(rendered.contains("String"));
}
