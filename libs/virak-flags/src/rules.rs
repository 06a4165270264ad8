// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Declarative validation rules
//!
//! A [`Rule`] is a predicate over [`Values`]. Commands list the rules for
//! their flags and run them with [`validate`], which stops at the first
//! failure:
//!
//! ```ignore
//! validate(&flags, &[
//!     rules::required("name"),
//!     rules::one_of("policy", &["Private", "Public"]),
//! ])?;
//! ```

use crate::error::ValidationError;
use crate::ulid;
use crate::values::Values;

/// Value some commands use for "unset" int flags
const UNSET_SENTINEL: &str = "-1";

type Check = Box<dyn Fn(&dyn Values) -> Result<(), ValidationError> + Send + Sync>;

/// A validation predicate over flag values
pub struct Rule(Check);

impl Rule {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&dyn Values) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self(Box::new(check))
    }

    pub fn check(&self, values: &dyn Values) -> Result<(), ValidationError> {
        (self.0)(values)
    }
}

/// Run rules in order, returning the first failure
pub fn validate(values: &dyn Values, rules: &[Rule]) -> Result<(), ValidationError> {
    for rule in rules {
        if let Err(e) = rule.check(values) {
            tracing::debug!(error = %e, "flag validation failed");
            return Err(e);
        }
    }
    Ok(())
}

/// Presence as counted by [`mutually_exclusive`] and [`exactly_one`]: a true
/// bool, or a string value that is neither blank nor the unset sentinel.
fn is_set(values: &dyn Values, name: &str) -> bool {
    if values.get_bool(name) {
        return true;
    }
    let value = values.get_string(name);
    let value = value.trim();
    !value.is_empty() && value != UNSET_SENTINEL
}

/// The flag must be given explicitly, or resolve to a non-empty value
/// other than `-1`.
pub fn required(name: &'static str) -> Rule {
    Rule::new(move |v| {
        if v.changed(name) {
            return Ok(());
        }
        let value = v.get_string(name);
        let value = value.trim();
        if value.is_empty() || value == UNSET_SENTINEL {
            return Err(ValidationError::Required(name.to_string()));
        }
        Ok(())
    })
}

/// A non-empty value must be one of `allowed`
pub fn one_of(name: &'static str, allowed: &'static [&'static str]) -> Rule {
    Rule::new(move |v| {
        let value = v.get_string(name);
        if value.is_empty() || allowed.contains(&value.as_str()) {
            return Ok(());
        }
        Err(ValidationError::NotOneOf {
            flag: name.to_string(),
            value,
            allowed: allowed.iter().map(|s| (*s).to_string()).collect(),
        })
    })
}

/// When `predicate` holds, the flag must have been set explicitly.
/// The flag's value itself is not inspected.
pub fn required_if<P>(name: &'static str, predicate: P) -> Rule
where
    P: Fn(&dyn Values) -> bool + Send + Sync + 'static,
{
    Rule::new(move |v| {
        if predicate(v) && !v.changed(name) {
            return Err(ValidationError::RequiredIf(name.to_string()));
        }
        Ok(())
    })
}

/// At most one of the two flags may be set
pub fn mutually_exclusive(a: &'static str, b: &'static str) -> Rule {
    Rule::new(move |v| {
        if is_set(v, a) && is_set(v, b) {
            return Err(ValidationError::MutuallyExclusive(
                a.to_string(),
                b.to_string(),
            ));
        }
        Ok(())
    })
}

/// Exactly one flag of the group must be a non-empty string or a true bool
pub fn exactly_one(names: &'static [&'static str]) -> Rule {
    Rule::new(move |v| {
        let count = names.iter().filter(|name| is_set(v, name)).count();
        if count != 1 {
            return Err(ValidationError::ExactlyOne {
                flags: names.iter().map(|s| (*s).to_string()).collect(),
                count,
            });
        }
        Ok(())
    })
}

/// A non-empty value must parse as a ULID
pub fn is_ulid(name: &'static str) -> Rule {
    Rule::new(move |v| {
        let value = v.get_string(name);
        if value.is_empty() || ulid::is_valid(&value) {
            return Ok(());
        }
        Err(ValidationError::InvalidUlid {
            flag: name.to_string(),
            value,
        })
    })
}

/// A non-empty value must be at least `min` bytes long
pub fn min_length(name: &'static str, min: usize) -> Rule {
    Rule::new(move |v| {
        let value = v.get_string(name);
        if !value.is_empty() && value.len() < min {
            return Err(ValidationError::TooShort {
                flag: name.to_string(),
                min,
            });
        }
        Ok(())
    })
}

/// The value must be at most `max` bytes long
pub fn max_length(name: &'static str, max: usize) -> Rule {
    Rule::new(move |v| {
        let value = v.get_string(name);
        if value.len() > max {
            return Err(ValidationError::TooLong {
                flag: name.to_string(),
                max,
            });
        }
        Ok(())
    })
}

/// Predicate helper for [`required_if`]: the flag's string value equals `expected`
pub fn equals(
    name: &'static str,
    expected: &'static str,
) -> impl Fn(&dyn Values) -> bool + Send + Sync + 'static {
    move |v| v.get_string(name) == expected
}

/// Predicate helper for [`required_if`]: the bool flag is true
pub fn is_true(name: &'static str) -> impl Fn(&dyn Values) -> bool + Send + Sync + 'static {
    move |v| v.get_bool(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    #[derive(Default)]
    struct StubValues {
        strings: HashMap<&'static str, String>,
        bools: HashMap<&'static str, bool>,
        changed: Vec<&'static str>,
    }

    impl StubValues {
        fn with(mut self, name: &'static str, value: &str) -> Self {
            self.strings.insert(name, value.to_string());
            self
        }

        fn with_bool(mut self, name: &'static str, value: bool) -> Self {
            self.bools.insert(name, value);
            self
        }

        fn set(mut self, name: &'static str, value: &str) -> Self {
            self.changed.push(name);
            self.with(name, value)
        }
    }

    impl Values for StubValues {
        fn get_string(&self, name: &str) -> String {
            self.strings.get(name).cloned().unwrap_or_default()
        }

        fn get_bool(&self, name: &str) -> bool {
            self.bools.get(name).copied().unwrap_or(false)
        }

        fn changed(&self, name: &str) -> bool {
            self.changed.iter().any(|c| *c == name)
        }
    }

    #[test_case("" ; "empty default")]
    #[test_case("-1" ; "unset sentinel")]
    #[test_case("   " ; "whitespace only")]
    fn test_required_fails_when_unset(default: &str) {
        let v = StubValues::default().with("name", default);
        assert_eq!(
            required("name").check(&v),
            Err(ValidationError::Required("name".to_string()))
        );
    }

    #[test_case("" ; "empty value")]
    #[test_case("-1" ; "sentinel value")]
    #[test_case("web" ; "regular value")]
    fn test_required_passes_when_changed(value: &str) {
        let v = StubValues::default().set("name", value);
        assert!(required("name").check(&v).is_ok());
    }

    #[test]
    fn test_required_passes_on_non_empty_default() {
        let v = StubValues::default().with("policy", "Private");
        assert!(required("policy").check(&v).is_ok());
    }

    #[test_case("Private", true)]
    #[test_case("Public", true)]
    #[test_case("", true ; "empty is vacuous")]
    #[test_case("public", false ; "case sensitive")]
    #[test_case("Shared", false)]
    fn test_one_of(value: &str, ok: bool) {
        let v = StubValues::default().with("policy", value);
        assert_eq!(
            one_of("policy", &["Private", "Public"]).check(&v).is_ok(),
            ok
        );
    }

    #[test]
    fn test_one_of_error_lists_allowed() {
        let v = StubValues::default().with("policy", "Shared");
        let err = one_of("policy", &["Private", "Public"])
            .check(&v)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"Shared\" for --policy: must be one of Private, Public"
        );
    }

    #[test]
    fn test_required_if_ignores_value() {
        // A resolved value without an explicit set still fails
        let v = StubValues::default().with("weight", "10");
        assert_eq!(
            required_if("weight", |_| true).check(&v),
            Err(ValidationError::RequiredIf("weight".to_string()))
        );

        let v = StubValues::default().set("weight", "");
        assert!(required_if("weight", |_| true).check(&v).is_ok());
    }

    #[test]
    fn test_required_if_false_predicate_passes() {
        let v = StubValues::default();
        assert!(required_if("weight", |_| false).check(&v).is_ok());
    }

    #[test]
    fn test_required_if_equals_predicate() {
        let srv = StubValues::default().with("type", "SRV");
        let a = StubValues::default().with("type", "A");
        let rule = required_if("port", equals("type", "SRV"));
        assert!(rule.check(&srv).is_err());
        assert!(rule.check(&a).is_ok());
    }

    #[test]
    fn test_mutually_exclusive() {
        let rule = mutually_exclusive("name", "all");
        let both = StubValues::default()
            .with("name", "x")
            .with_bool("all", true);
        let one = StubValues::default().with("name", "x");
        assert_eq!(
            rule.check(&both),
            Err(ValidationError::MutuallyExclusive(
                "name".to_string(),
                "all".to_string()
            ))
        );
        assert!(rule.check(&one).is_ok());
        assert!(rule.check(&StubValues::default()).is_ok());
    }

    #[test_case(&[], 0)]
    #[test_case(&["a"], 1)]
    #[test_case(&["a", "b"], 2)]
    fn test_exactly_one(set: &[&'static str], count: usize) {
        let mut v = StubValues::default();
        for name in set {
            v = v.with(*name, "x");
        }
        let result = exactly_one(&["a", "b"]).check(&v);
        if count == 1 {
            assert!(result.is_ok());
        } else {
            assert_eq!(
                result,
                Err(ValidationError::ExactlyOne {
                    flags: vec!["a".to_string(), "b".to_string()],
                    count
                })
            );
        }
    }

    #[test]
    fn test_exactly_one_counts_true_bools() {
        let v = StubValues::default().with_bool("b", true);
        assert!(exactly_one(&["a", "b"]).check(&v).is_ok());
        let v = StubValues::default().with_bool("b", false);
        assert!(exactly_one(&["a", "b"]).check(&v).is_err());
    }

    #[test_case(StubValues::default().with_bool("all", true), true ; "true bool")]
    #[test_case(StubValues::default().with_bool("all", false), false ; "false bool")]
    #[test_case(StubValues::default().with("all", "x"), true ; "string")]
    #[test_case(StubValues::default().with("all", "  "), false ; "blank string")]
    #[test_case(StubValues::default().with("all", "-1"), false ; "int left at sentinel")]
    #[test_case(StubValues::default().with("all", "0"), true ; "int zero")]
    #[test_case(StubValues::default(), false ; "unknown flag")]
    fn test_is_set(v: StubValues, expected: bool) {
        assert_eq!(is_set(&v, "all"), expected);
    }

    #[test]
    fn test_exactly_one_ignores_int_defaults() {
        let v = StubValues::default().with("a", "x").with("size", "-1");
        assert!(exactly_one(&["a", "size"]).check(&v).is_ok());
        let v = StubValues::default().with("a", "x").with("size", "8");
        assert!(exactly_one(&["a", "size"]).check(&v).is_err());
    }

    #[test_case("01ARZ3NDEKTSV4RRFFQ69G5FAV", true)]
    #[test_case("", true ; "empty is vacuous")]
    #[test_case("01ARZ3NDEKTSV4RRFFQ69G5FA", false ; "too short")]
    #[test_case("01ARZ3NDEKTSV4RRFFQ69G5FAVX", false ; "too long")]
    #[test_case("01ARZ3NDEKTSV4RRFFQ69G5FAU", false ; "excluded letter")]
    #[test_case("not-a-ulid", false)]
    fn test_is_ulid(value: &str, ok: bool) {
        let v = StubValues::default().with("clusterId", value);
        assert_eq!(is_ulid("clusterId").check(&v).is_ok(), ok);
    }

    #[test_case("", true ; "empty is vacuous")]
    #[test_case("ab", false)]
    #[test_case("abc", true)]
    fn test_min_length(value: &str, ok: bool) {
        let v = StubValues::default().with("name", value);
        assert_eq!(min_length("name", 3).check(&v).is_ok(), ok);
    }

    #[test_case("", true ; "empty")]
    #[test_case("abcd", true)]
    #[test_case("abcde", false)]
    fn test_max_length(value: &str, ok: bool) {
        let v = StubValues::default().with("name", value);
        assert_eq!(max_length("name", 4).check(&v).is_ok(), ok);
    }

    #[test]
    fn test_length_counts_bytes() {
        // Two characters, four bytes
        let v = StubValues::default().with("name", "éé");
        assert!(max_length("name", 3).check(&v).is_err());
        assert!(min_length("name", 4).check(&v).is_ok());
    }

    #[test]
    fn test_validate_returns_first_failure() {
        let v = StubValues::default().with("policy", "Shared");
        let err = validate(
            &v,
            &[
                required("name"),
                one_of("policy", &["Private", "Public"]),
            ],
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::Required("name".to_string()));
    }

    #[test]
    fn test_validate_all_pass() {
        let v = StubValues::default()
            .set("name", "bucket")
            .with("policy", "Public");
        assert!(
            validate(
                &v,
                &[
                    required("name"),
                    one_of("policy", &["Private", "Public"]),
                    min_length("name", 3),
                ]
            )
            .is_ok()
        );
    }
}
