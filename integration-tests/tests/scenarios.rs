//! End-to-end scenarios mixing boxes, options, and results.

use carton_boxed::{Box, OptionUnboxed, box_option};
use carton_core::{Option, Result};

fn parse_port(raw: &str) -> Result<u16, String> {
    raw.trim()
        .parse::<u16>()
        .map_err(|err| format!("invalid port {raw:?}: {err}"))
        .into()
}

fn port_from_env(vars: &[(&str, &str)]) -> core::result::Result<Box<u16>, String> {
    let raw = vars
        .iter()
        .find(|(key, _)| *key == "PORT")
        .map(|(_, value)| *value);
    let port = Option::<&str>::from(raw).ok_or_else(|| String::from("PORT is unset"));
    let port = core::result::Result::from(port.and_then(parse_port))?;
    Ok(Box::from(port))
}

#[test]
fn question_mark_interop_through_std() {
    assert_eq!(port_from_env(&[("PORT", " 8080 ")]), Ok(Box::from(8080)));
    assert_eq!(
        port_from_env(&[("HOST", "localhost")]),
        Err(String::from("PORT is unset"))
    );
    assert!(port_from_env(&[("PORT", "99999")]).is_err());
}

#[test]
fn repeated_strings() {
    let some = Option::Some(String::from("233"));
    assert_eq!(some.map(|s| s.repeat(2)).unwrap(), "233233");

    let none: Option<String> = Option::None;
    assert_eq!(none.map_or_else(|| String::from("-"), |s| s.repeat(2)), "-");

    let err: Result<i32, String> = Result::Err("233".into());
    let text = err.map_or_else(|e| e.repeat(2), |n| n.to_string());
    assert_eq!(text, "233233");
}

#[test]
fn boxed_counter_in_an_option() {
    let mut slot = box_option(Some(0_u8));
    for _ in 0..3 {
        if let Option::Some(counter) = &mut *slot {
            *counter = counter.wrapping_add(100);
        }
    }
    assert_eq!(*slot, Option::Some(44), "300 wraps to 44 in a u8");

    let taken = slot.take();
    assert_eq!(taken, Option::Some(44));
    assert!(slot.is_none());
}

#[test]
fn unboxing_collected_results() {
    let inputs = ["1", "x", "3"];
    let parsed: Vec<Option<Box<i32>>> = inputs
        .iter()
        .map(|s| Result::from(s.parse::<i32>()).ok().map(Box::from))
        .collect();

    let values: Vec<i32> = parsed
        .into_iter()
        .flat_map(|boxed| boxed.unboxed())
        .collect();
    assert_eq!(values, [1, 3]);
}

#[test]
fn arithmetic_on_boxed_payloads() {
    let mut total = Box::from(0_i64);
    for n in [Box::from(5), Box::from(-2), Box::from(10)] {
        total += n;
    }
    assert_eq!(total, Box::from(13));
    assert_eq!(total.pow(Box::from(2_u32)), Box::from(169));
    assert!(!total.logical_not());

    let mut ticks = Box::from(1_u32);
    assert_eq!(ticks.post_inc(), Box::from(1));
    assert_eq!(*ticks.pre_inc(), Box::from(3));
}

#[test]
#[should_panic(expected = "Option: Unwrap None")]
fn unwrapping_missing_port_panics() {
    let raw: core::option::Option<&str> = None;
    let _ = Option::<&str>::from(raw).unwrap();
}

#[test]
#[should_panic(expected = "Result: Unwrap Ok")]
fn unwrapping_failed_parse_panics() {
    let _ = parse_port("not a port").unwrap();
}

#[test]
#[should_panic(expected = "Result: Unwrap Err")]
fn unwrapping_error_of_success_panics() {
    let _ = parse_port("80").unwrap_err();
}
