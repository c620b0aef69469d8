//! Integration tests for template validation and manifest checking

use std::path::{Path, PathBuf};

use tagbox::{
    check, check_file, template, BraceFault, CheckConfig, CheckError, ManifestError, Template,
    TemplateError,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Every literal template used in this crate's own docs and tests
const LITERALS: &[(&str, usize)] = &[
    ("{} and {}", 2),
    ("value: {}", 1),
    ("no placeholders", 0),
    ("x={} y={}", 2),
];

#[test]
fn test_literal_templates_validate() {
    for &(text, arity) in LITERALS {
        assert!(
            Template::new(text, arity).is_ok(),
            "template {:?} with arity {} should validate",
            text,
            arity
        );
    }
}

#[test]
fn test_macro_and_runtime_agree() {
    let compiled = template!("{} and {}", first, second);
    let runtime = Template::new("{} and {}", 2).unwrap();
    assert_eq!(compiled, runtime);
}

#[test]
fn test_arity_mismatch_cases() {
    for arity in [1, 3] {
        assert!(matches!(
            Template::new("{} and {}", arity),
            Err(TemplateError::ArityMismatch { placeholders: 2, .. })
        ));
    }
}

#[test]
fn test_unbalanced_cases() {
    assert!(matches!(
        Template::new("{ {}", 1),
        Err(TemplateError::UnbalancedBraces {
            fault: BraceFault::Unclosed,
            ..
        })
    ));
    assert!(matches!(
        Template::new("}{", 1),
        Err(TemplateError::UnbalancedBraces {
            fault: BraceFault::ExtraClosing,
            ..
        })
    ));
}

#[test]
fn test_fixture_manifest_passes() {
    let source = include_str!("fixtures/valid.toml");
    let summary = check(source).expect("Should validate");
    assert_eq!(summary.name.as_deref(), Some("fixture templates"));
    assert_eq!(summary.checked, 3);
    assert_eq!(summary.placeholders, 3);
}

#[test]
fn test_fixture_manifest_reports_each_failure() {
    let source = include_str!("fixtures/invalid.toml");
    let Err(CheckError::Templates(failures)) = check(source) else {
        panic!("expected template failures");
    };

    let errors: Vec<_> = failures.iter().map(|f| (f.name.as_str(), f.error)).collect();
    assert_eq!(
        errors,
        vec![
            (
                "unclosed",
                TemplateError::UnbalancedBraces {
                    position: 0,
                    fault: BraceFault::Unclosed
                }
            ),
            (
                "reversed",
                TemplateError::UnbalancedBraces {
                    position: 0,
                    fault: BraceFault::ExtraClosing
                }
            ),
            (
                "too_few_args",
                TemplateError::ArityMismatch {
                    placeholders: 2,
                    arguments: 1
                }
            ),
        ]
    );

    for failure in &failures {
        let report = failure.format();
        assert!(report.contains(&failure.name), "report: {}", report);
        assert!(report.contains(failure.error.message()), "report: {}", report);
    }
}

#[test]
fn test_check_file_loads_fixture() {
    let summary = check_file(&fixture("valid.toml"), &CheckConfig::new()).expect("Should validate");
    assert_eq!(summary.checked, 3);
    assert_eq!(summary.placeholders, 3);
}

#[test]
fn test_check_file_reports_failures() {
    let result = check_file(&fixture("invalid.toml"), &CheckConfig::new().with_fail_fast(true));
    let Err(CheckError::Templates(failures)) = result else {
        panic!("expected template failures");
    };
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].name, "unclosed");
}

#[test]
fn test_check_file_missing_is_manifest_error() {
    let result = check_file(&fixture("does-not-exist.toml"), &CheckConfig::new());
    assert!(matches!(
        result,
        Err(CheckError::Manifest(ManifestError::IoError(_)))
    ));
}

#[test]
fn test_multibyte_failures_keep_source_context() {
    let source = r#"
[[templates]]
name = "accents"
text = "ééé}{"
arity = 1

[[templates]]
name = "kanji"
text = "日本語 {} {}"
arity = 1
"#;
    let Err(CheckError::Templates(failures)) = check(source) else {
        panic!("expected template failures");
    };
    assert_eq!(failures.len(), 2);

    let accents = failures[0].format();
    assert!(accents.contains("accents"), "report: {}", accents);
    assert!(accents.contains("(byte 6)"), "report: {}", accents);

    let kanji = failures[1].format();
    assert!(kanji.contains("kanji"), "report: {}", kanji);
    assert!(
        kanji.contains("no argument for this placeholder"),
        "report: {}",
        kanji
    );
}
