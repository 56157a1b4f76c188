/// Conformance runner
///
/// Parses (or resolves against `base`) every case and compares each
/// expected component with what `urlcanon` produces.
use super::loader::{ConformanceFailure, ConformanceResult, TestCase, load};
use urlcanon::Url;

fn url_for(input: &str, base: Option<&str>) -> Url {
    match base {
        Some(base) => Url::parse(base).resolve(input),
        None => Url::parse(input),
    }
}

pub fn run_conformance_tests(tests: Vec<TestCase>) -> ConformanceResult {
    let mut result = ConformanceResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlTest {
            input,
            base,
            href,
            protocol,
            host,
            port,
            path,
            query,
            fragment,
            failure,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let url = url_for(&input, base.as_deref());
        let port_text = url.port().map(|p| p.to_string()).unwrap_or_default();

        let mut checks: Vec<(&'static str, Option<String>, String)> = vec![
            ("href", href, url.as_str().to_string()),
            ("protocol", protocol, url.protocol().to_string()),
            ("host", host, url.host().to_string()),
            ("port", port, port_text),
            ("path", path, url.path().to_string()),
            ("query", query, url.query().unwrap_or_default().to_string()),
            ("fragment", fragment, url.fragment().unwrap_or_default().to_string()),
        ];

        // A failing case must come back invalid, holding its input verbatim
        if failure == Some(true) {
            checks = vec![
                ("valid", Some("false".to_string()), url.is_valid().to_string()),
                ("href", Some(input.clone()), url.as_str().to_string()),
            ];
        } else {
            checks.push(("valid", Some("true".to_string()), url.is_valid().to_string()));
        }

        let mut test_passed = true;
        for (field, expected, actual) in checks {
            let Some(expected) = expected else {
                continue;
            };
            if expected != actual {
                result.failures.push(ConformanceFailure {
                    test_num,
                    input: input.clone(),
                    base: base.clone(),
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

    result
}

fn assert_suite(name: &str, data: &str, minimum: usize) {
    let result = run_conformance_tests(load(data));
    assert_eq!(
        result.failed,
        0,
        "\n{name}: {}\n{}\n",
        result.summary(),
        result.report()
    );
    assert!(
        result.passed >= minimum,
        "{name}: expected at least {minimum} cases, ran {}",
        result.passed
    );
}

#[test]
fn test_canonicalization_suite() {
    assert_suite(
        "canonicalization",
        include_str!("./canonicalization.json"),
        35,
    );
}

#[test]
fn test_resolution_suite() {
    assert_suite("resolution", include_str!("./resolution.json"), 25);
}
