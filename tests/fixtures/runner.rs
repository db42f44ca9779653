use super::loader::{FixtureFailure, FixtureResult, TestCase, component_tests, setter_tests};
/// Fixture runner
///
/// Runs fixture tables against `UrlParser`
use spliceurl::{Component, UrlParser};

/// Run fixtures and return results
pub fn run_fixtures(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        match test {
            TestCase::Comment(_) => {}
            TestCase::Components { input, expected } => {
                test_num += 1;
                let url = UrlParser::new(input.as_str());
                let mut test_passed = true;

                for (field, expected) in expected {
                    let actual = match field.parse::<Component>() {
                        Ok(component) => url.get(component).into_owned(),
                        Err(err) => format!("<{err}>"),
                    };
                    if actual != expected {
                        result.failures.push(FixtureFailure {
                            test_num,
                            input: input.clone(),
                            field,
                            expected,
                            actual,
                        });
                        test_passed = false;
                    }
                }

                if test_passed {
                    result.passed += 1;
                } else {
                    result.failed += 1;
                }
            }
            TestCase::Setter {
                input,
                component,
                value,
                href,
            } => {
                test_num += 1;
                let mut url = UrlParser::new(input.as_str());
                let applied = component
                    .parse::<Component>()
                    .is_ok_and(|component| url.set(component, &value));

                if applied && url.href() == href {
                    result.passed += 1;
                } else {
                    result.failed += 1;
                    result.failures.push(FixtureFailure {
                        test_num,
                        input,
                        field: format!("{component} = {value:?}"),
                        expected: href,
                        actual: url.href().to_string(),
                    });
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_fixtures() {
        let result = run_fixtures(component_tests());
        assert!(result.passed > 0, "No fixtures ran");
        assert!(result.failures.is_empty(), "{}", result.summary());
    }

    #[test]
    fn test_setter_fixtures() {
        let result = run_fixtures(setter_tests());
        assert!(result.passed > 0, "No fixtures ran");
        assert!(result.failures.is_empty(), "{}", result.summary());
    }

    #[test]
    fn test_failures_are_reported() {
        let tests = vec![TestCase::Components {
            input: "http://a/".to_string(),
            expected: [("hostname".to_string(), "b".to_string())].into_iter().collect(),
        }];
        let result = run_fixtures(tests);
        assert_eq!(result.failed, 1);
        assert_eq!(result.failures[0].actual, "a");
    }
}
