/// Conformance test data loader
///
/// Each entry of a data file is either a comment string or an object with
/// an `input`, an optional `base` and the expected components. Components
/// that are absent from an entry are not checked.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest {
        input: String,
        #[serde(default)]
        base: Option<String>,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        protocol: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct ConformanceResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<ConformanceFailure>,
}

#[derive(Debug, Clone)]
pub struct ConformanceFailure {
    pub test_num: usize,
    pub input: String,
    pub base: Option<String>,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl ConformanceResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }

    /// One line per failure, for assertion messages.
    pub fn report(&self) -> String {
        self.failures
            .iter()
            .map(|f| {
                format!(
                    "#{} {} (base {:?}) {}: expected {:?}, got {:?}",
                    f.test_num, f.input, f.base, f.field, f.expected, f.actual
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn load(data: &str) -> Vec<TestCase> {
    serde_json::from_str(data).expect("Failed to parse conformance data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_cases() {
        let tests = load(r#"["a comment", {"input": "http://h/", "href": "http://h/"}]"#);
        assert_eq!(tests.len(), 2);
        assert!(matches!(&tests[0], TestCase::Comment(c) if c == "a comment"));
        assert!(matches!(
            &tests[1],
            TestCase::UrlTest { base: None, failure: None, href: Some(_), .. }
        ));
    }

    #[test]
    fn test_report_lists_failures() {
        let result = ConformanceResult {
            passed: 1,
            failed: 1,
            failures: vec![ConformanceFailure {
                test_num: 2,
                input: "x".to_string(),
                base: None,
                field: "href",
                expected: "a".to_string(),
                actual: "b".to_string(),
            }],
        };
        assert_eq!(result.summary(), "Passed: 1, Failed: 1");
        assert!(result.report().contains("#2 x"));
    }
}
