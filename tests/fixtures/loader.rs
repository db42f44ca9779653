/// Fixture loader
///
/// Fixtures are JSON arrays mixing comment strings with test objects.
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// Expected getter values, keyed by component name
    Components {
        input: String,
        expected: BTreeMap<String, String>,
    },
    /// One setter call and the resulting href
    Setter {
        input: String,
        component: String,
        value: String,
        href: String,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        let mut summary = format!("Passed: {}, Failed: {}", self.passed, self.failed);
        for failure in &self.failures {
            summary.push_str(&format!(
                "\n  #{} {:?} {}: expected {:?}, got {:?}",
                failure.test_num, failure.input, failure.field, failure.expected, failure.actual
            ));
        }
        summary
    }
}

pub fn load(json: &str) -> Vec<TestCase> {
    serde_json::from_str(json).expect("fixture file is valid JSON")
}

pub fn component_tests() -> Vec<TestCase> {
    load(include_str!("components.json"))
}

pub fn setter_tests() -> Vec<TestCase> {
    load(include_str!("setters.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        let components = component_tests();
        assert!(
            components
                .iter()
                .any(|test| matches!(test, TestCase::Components { .. }))
        );
        let setters = setter_tests();
        assert!(
            setters
                .iter()
                .any(|test| matches!(test, TestCase::Setter { .. }))
        );
    }

    #[test]
    fn test_untagged_order() {
        let tests = load(
            r#"["a comment",
                {"input": "x", "expected": {"hostname": "x"}},
                {"input": "x", "component": "port", "value": "1", "href": "x:1"}]"#,
        );
        assert!(matches!(tests[0], TestCase::Comment(_)));
        assert!(matches!(tests[1], TestCase::Components { .. }));
        assert!(matches!(tests[2], TestCase::Setter { .. }));
    }
}
