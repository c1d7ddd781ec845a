fn fixture_docs() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/docs")
}

fn run_cli(args: &[&str]) -> (String, String, bool) {
    // Disable colors for consistent test output
    colored::control::set_override(false);
    match implors::run_cli(args) {
        Ok(stdout) => (stdout, String::new(), true),
        Err(stderr) => (String::new(), stderr, false),
    }
}

#[test]
fn test_lists_all_traits() {
    let (stdout, stderr, success) = run_cli(&[fixture_docs()]);
    assert!(success, "CLI should succeed: {stderr}");

    insta::assert_snapshot!(stdout, @r"
    trait packline::codec::Decode
    ────────────────────────────────────────────────────────────────────────────────
      packline      impl Decode for Frame
      packline      impl Decode for Control
      packline_tls  impl Decode for TlsRecord
    ────────────────────────────────────────────────────────────────────────────────

    trait packline::codec::Encode
    ────────────────────────────────────────────────────────────────────────────────
      packline  impl Encode for Frame
    ────────────────────────────────────────────────────────────────────────────────
    ");
    insta::assert_snapshot!(stderr, @"");
}

#[test]
fn test_trait_filter() {
    let (stdout, _, success) = run_cli(&[fixture_docs(), "Encode"]);
    assert!(success);

    insta::assert_snapshot!(stdout, @r"
    trait packline::codec::Encode
    ────────────────────────────────────────────────────────────────────────────────
      packline  impl Encode for Frame
    ────────────────────────────────────────────────────────────────────────────────
    ");
}

#[test]
fn test_module_filter() {
    let (stdout, _, success) = run_cli(&[fixture_docs(), "--module", "packline_tls"]);
    assert!(success);

    // The Encode page has nothing from packline_tls and disappears entirely.
    insta::assert_snapshot!(stdout, @r"
    trait packline::codec::Decode
    ────────────────────────────────────────────────────────────────────────────────
      packline_tls  impl Decode for TlsRecord
    ────────────────────────────────────────────────────────────────────────────────
    ");
}

#[test]
fn test_json_output() {
    let (stdout, _, success) = run_cli(&[fixture_docs(), "Encode", "--json"]);
    assert!(success);

    insta::assert_snapshot!(stdout, @r#"
    [
      {
        "trait": "packline::codec::Encode",
        "modules": [
          {
            "module": "packline",
            "descriptors": [
              "impl <a class='trait' href='packline/codec/trait.Encode.html' title='packline::codec::Encode'>Encode</a> for <a class='struct' href='packline/frame/struct.Frame.html' title='packline::frame::Frame'>Frame</a>"
            ]
          }
        ]
      }
    ]
    "#);
}

#[test]
fn test_json_covers_every_page() {
    let (stdout, _, success) = run_cli(&[fixture_docs(), "--json"]);
    assert!(success);

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let pages = report.as_array().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["trait"], "packline::codec::Decode");
    assert_eq!(pages[0]["modules"].as_array().unwrap().len(), 2);
    assert_eq!(pages[1]["trait"], "packline::codec::Encode");
}

#[test]
fn test_no_match_message() {
    let (stdout, _, success) = run_cli(&[fixture_docs(), "Nonexistent"]);
    assert!(success);
    assert_eq!(stdout, "No implementor data modules matched.\n");
}

#[test]
fn test_missing_implementors_dir() {
    let docs_root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
    let (_, stderr, success) = run_cli(&[docs_root]);
    assert!(!success);
    assert!(
        stderr.contains("implementors/ directory"),
        "unexpected error: {stderr}"
    );
}

#[test]
fn test_help_shows_examples() {
    let (stdout, _, success) = run_cli(&["--help"]);
    assert!(success);
    assert!(stdout.contains("EXAMPLES:"));
    assert!(stdout.contains("--json"));
}
