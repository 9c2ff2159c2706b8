use result_rail::prelude::*;

#[test]
fn trace_err_passes_error_through() {
    let o = Outcome::<i32, &str>::new_err("disk full").trace_err("writing snapshot");
    assert_eq!(o.unwrap_err(), "disk full");
}

#[test]
fn trace_err_passes_success_through() {
    let o = Outcome::<i32, &str>::new_ok(42).trace_err("never logged");
    assert_eq!(o.unwrap(), 42);
}

#[test]
fn trace_uninit_keeps_uninit() {
    let o = Outcome::<i32, &str>::default().trace_uninit();
    assert!(o.is_uninit());
}

#[test]
fn trace_calls_chain_with_combinators() {
    let o = scope::<i32, String>()
        .err("bad".to_string())
        .trace_uninit()
        .trace_err("validating")
        .map_err_and(|e| e.len());
    assert_eq!(o.unwrap_err(), 3);
}
