//! Integration tests for fluent single-value validation and argument dispatch.

use pretty_assertions::assert_eq;
use serde_json::json;
use souffle::prelude::*;

#[test]
fn donkey_chain() {
    let errors = Souffle::value("Donkey")
        .is_string()
        .length_between(5, 10)
        .exec()
        .unwrap();
    assert!(errors.is_empty());
}

#[test]
fn exact_length_mismatch_is_recorded() {
    let errors = Souffle::value("Donkey").is_string().length(5).exec().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Length must be exactly 5");
}

#[test]
fn generic_apply_matches_typed_helpers() {
    let typed = Souffle::value("not-an-email")
        .is_email()
        .min_length(20)
        .exec()
        .unwrap();
    let generic = Souffle::value("not-an-email")
        .call("isEmail")
        .apply("minLength", [20])
        .exec()
        .unwrap();
    assert_eq!(typed, generic);
}

#[test]
fn every_builtin_is_reachable() {
    let errors = Souffle::value(json!(null))
        .is_number()
        .is_string()
        .is_array()
        .is_email()
        .is_url()
        .matches(".*")
        .is_not_blank()
        .length(1)
        .min_length(1)
        .max_length(1)
        .min_keys(1)
        .contains("x")
        .exec()
        .unwrap();

    let codes: Vec<_> = errors.iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, souffle::rules::BUILTIN_NAMES.to_vec());
}

#[test]
fn unknown_rule_surfaces_from_exec() {
    let err = Souffle::value("x").call("isPalindrome").exec().unwrap_err();
    assert_eq!(
        err,
        SouffleError::UnknownRule {
            name: "isPalindrome".into()
        }
    );
}

#[test]
fn session_against_custom_registry() {
    let registry = RuleRegistry::new().with_rule(
        "isUpper",
        FnRule::new(
            |value, _| {
                let s = souffle::foundation::expect_str(value)?;
                Ok(s.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()))
            },
            |_, _| ValidationError::new("isUpper", "Must be uppercase"),
        ),
    );

    let ok = Session::new(&registry, "LOUD").call("isUpper").exec().unwrap();
    assert!(ok.is_empty());

    let faulted = Session::new(&registry, 3).call("isUpper").exec().unwrap();
    assert_eq!(faulted[0].message, "Must be uppercase");

    // Built-ins are not part of an empty registry.
    assert!(Session::new(&registry, "LOUD").is_string().exec().is_err());
}

#[test]
fn dispatch_objects_runs_tree_mode() {
    let values = json!({ "name": "" });
    let rules = json!({ "name": { "isNotBlank": true } });

    match Souffle::from_args(Some(&values), Some(&rules)).unwrap() {
        Validation::Errors(errors) => assert_eq!(errors.len(), 1),
        Validation::Session(_) => panic!("expected tree mode"),
    }
}

#[test]
fn dispatch_scalar_starts_a_session() {
    let value = json!("Donkey");
    match Souffle::from_args(Some(&value), None).unwrap() {
        Validation::Session(session) => {
            assert_eq!(session.value(), &json!("Donkey"));
            assert!(session.is_string().exec().unwrap().is_empty());
        }
        Validation::Errors(_) => panic!("expected a session"),
    }
}

#[test]
fn dispatch_object_without_rules_starts_a_session() {
    let value = json!({ "a": 1 });
    let outcome = Souffle::from_args(Some(&value), None).unwrap();
    assert!(matches!(outcome, Validation::Session(_)));
}

#[test]
fn dispatch_rules_without_value_starts_a_null_session() {
    let rules = json!({ "name": { "isNotBlank": true } });
    match Souffle::from_args(None, Some(&rules)).unwrap() {
        Validation::Session(session) => {
            assert_eq!(session.value(), &json!(null));
            let errors = session.is_not_blank().exec().unwrap();
            assert_eq!(errors[0].message, "Cannot be blank");
        }
        Validation::Errors(_) => panic!("expected a session"),
    }
}

#[test]
fn dispatch_requires_some_input() {
    assert_eq!(
        Souffle::from_args(None, None).unwrap_err(),
        SouffleError::MissingInput
    );
    assert_eq!(
        Souffle::from_args(Some(&json!(null)), None).unwrap_err(),
        SouffleError::MissingInput
    );
}

#[test]
fn missing_input_message_names_both_call_shapes() {
    let message = SouffleError::MissingInput.to_string();
    assert!(message.contains("Souffle::validate"));
    assert!(message.contains("Souffle::value"));
}
