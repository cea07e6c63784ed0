mod fixtures;

use seoscope::cli::Cli;
use seoscope::models::SeoCategory;
use seoscope::reporter::AnalysisReport;
use seoscope::run;
use std::fs;
use tempfile::tempdir;

fn args(input: &str) -> Cli {
    Cli {
        input: input.to_string(),
        url: None,
        output: "text".to_string(),
        save: None,
        category: None,
        done: vec![],
        verbose: false,
        config: None,
    }
}

#[test]
fn test_invalid_url_no_protocol() {
    let mut cli = args("tests/static/good-seo.html");
    cli.url = Some("example.com".to_string());

    let result = run(cli);
    assert!(
        result.is_err(),
        "Should return error for URL without protocol"
    );
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("URL must start with http:// or https://"),
        "Error message should mention URL protocol requirement"
    );
}

#[test]
fn test_invalid_url_ftp_scheme() {
    let mut cli = args("tests/static/good-seo.html");
    cli.url = Some("ftp://example.com".to_string());

    assert!(run(cli).is_err(), "Should return error for non-HTTP(S) protocol");
}

#[test]
fn test_text_output() {
    let mut cli = args("tests/static/medium-seo.html");
    cli.url = Some("https://example.com/medium-seo".to_string());
    cli.done = vec!["og-image-missing".to_string()];

    assert!(run(cli).is_ok(), "Should analyze with text output");
}

#[test]
fn test_json_output_with_category_filter() {
    let mut cli = args("tests/static/bad-seo.html");
    cli.output = "json".to_string();
    cli.category = Some(SeoCategory::Social);

    assert!(run(cli).is_ok(), "Should analyze with JSON output");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.html");

    let err = run(args(path.to_str().unwrap())).unwrap_err();
    assert!(
        format!("{:#}", err).contains("Failed to read"),
        "Unexpected error: {:#}",
        err
    );
}

#[test]
fn test_empty_document_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.html");
    fs::write(&path, "   ").unwrap();

    assert!(run(args(path.to_str().unwrap())).is_err());
}

#[test]
fn test_save_report_from_json_input() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("input.json");
    let report_path = dir.path().join("report.json");

    fs::write(
        &input_path,
        serde_json::to_string(&fixtures::bad_seo_input()).unwrap(),
    )
    .unwrap();

    let mut cli = args(input_path.to_str().unwrap());
    cli.save = Some(report_path.to_string_lossy().to_string());

    assert!(run(cli).is_ok());

    let report: AnalysisReport =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report.url, "https://example.com/bad-seo");
    assert_eq!(report.result.overall, 8);
}

#[test]
fn test_config_thresholds_apply() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("seoscope.toml");
    let report_path = dir.path().join("report.json");

    fs::write(&config_path, "[thresholds]\ntitle_min = 2\ntitle_max = 10\n").unwrap();

    let mut cli = args("tests/static/bad-seo.html");
    cli.config = Some(config_path.to_string_lossy().to_string());
    cli.save = Some(report_path.to_string_lossy().to_string());

    assert!(run(cli).is_ok());

    let report: AnalysisReport =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    // "Page" is within the configured 2-10 range
    assert_eq!(report.result.categories.meta_tags.passed, 1);
}

#[test]
fn test_invalid_config_thresholds_are_rejected() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("seoscope.json");
    fs::write(
        &config_path,
        r#"{"thresholds": {"description_min": 200, "description_max": 100}}"#,
    )
    .unwrap();

    let mut cli = args("tests/static/good-seo.html");
    cli.config = Some(config_path.to_string_lossy().to_string());

    let err = run(cli).unwrap_err();
    assert!(err.to_string().contains("description_min"));
}
