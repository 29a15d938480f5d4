use printloop::{environment::Environment, value::Value};
use proptest::prelude::*;

#[test]
fn test_bind_and_unbind() {
    let mut environment = Environment::new();
    assert!(environment.is_empty());

    environment.bind("i", Value::Integer(1));
    assert_eq!(environment.access("i"), Some(&Value::Integer(1)));

    environment.bind("i", Value::Integer(2));
    assert_eq!(environment.len(), 1);
    assert_eq!(environment.access("i"), Some(&Value::Integer(2)));

    assert_eq!(environment.unbind("i"), Some(Value::Integer(2)));
    assert_eq!(environment.unbind("i"), None);
    assert!(environment.is_empty());
}

#[test]
fn test_resolve_replaces_every_occurrence() {
    let mut environment = Environment::new();
    environment.bind("x", 7.into());
    environment.bind("name", "world".into());
    assert_eq!(environment.resolve("x+x=name"), "7+7=world");
    assert_eq!(environment.resolve("unrelated"), "unrelated");
}

#[test]
fn test_resolve_applies_bindings_in_first_bound_order() {
    let mut environment = Environment::new();
    environment.bind("a", "b".into());
    environment.bind("b", 1.into());
    assert_eq!(environment.resolve("a"), "1");

    // Rebinding keeps the original slot.
    environment.bind("a", "bb".into());
    assert_eq!(environment.resolve("a"), "11");

    let mut reversed = Environment::new();
    reversed.bind("b", 1.into());
    reversed.bind("a", "b".into());
    assert_eq!(reversed.resolve("a"), "b");
}

#[test]
fn test_resolve_is_case_sensitive() {
    let mut environment = Environment::new();
    environment.bind("i", 3.into());
    assert_eq!(environment.resolve("I-i"), "I-3");
}

proptest! {
    #[test]
    fn resolve_without_matching_names_is_identity(
        text in "[a-z0-9 ]{0,20}",
        names in prop::collection::vec("[A-Z]{1,4}", 0..5),
    ) {
        let mut environment = Environment::new();
        for (index, name) in names.iter().enumerate() {
            environment.bind(name, Value::Integer(index as i64));
        }
        let once = environment.resolve(&text);
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(environment.resolve(&once), text);
    }
}
