use pretty_assertions::assert_eq;

use super::*;

const COPY: &str = r#"{
    "function": "copy",
    "params": [
        { "name": "from", "type": "string" },
        { "name": "to", "type": "string" },
        { "name": "flags", "type": "int", "variadic": true }
    ],
    "calls": [
        ["a.txt", "b.txt"],
        ["a.txt"],
        ["a.txt", "b.txt", 1, "x"]
    ]
}"#;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn run(source: &str, options: &CheckOptions) -> (CheckSummary, String) {
    let mut output = Vec::new();
    let summary = check_source(source, options, &mut output, false);
    (summary, String::from_utf8(output).unwrap())
}

fn text_options() -> CheckOptions {
    CheckOptions {
        color: ColorMode::Never,
        ..CheckOptions::default()
    }
}

#[test]
fn parses_path_and_flags() {
    let (path, options) = parse_check_args(
        &args(&["calls.json", "--lenient", "--strict-types", "--format=json", "--color=never"]),
        CheckConfig::default(),
    )
    .unwrap();

    assert_eq!(path, "calls.json");
    assert_eq!(options.config.arity, ArityPolicy::Lenient);
    assert!(!options.config.widen_int_to_float);
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.color, ColorMode::Never);
}

#[test]
fn flags_override_starting_config() {
    let from_env = CheckConfig::default().with_arity(ArityPolicy::Lenient);

    let (_, kept) = parse_check_args(&args(&["f.json"]), from_env).unwrap();
    assert_eq!(kept.config.arity, ArityPolicy::Lenient);

    let (_, overridden) = parse_check_args(&args(&["--strict", "f.json"]), from_env).unwrap();
    assert_eq!(overridden.config.arity, ArityPolicy::Strict);
}

#[test]
fn rejects_bad_arguments() {
    let config = CheckConfig::default();

    assert_eq!(
        parse_check_args(&args(&[]), config),
        Err(UsageError::MissingPath)
    );
    assert_eq!(
        parse_check_args(&args(&["a.json", "b.json"]), config),
        Err(UsageError::UnexpectedArgument("b.json".to_string()))
    );
    assert_eq!(
        parse_check_args(&args(&["a.json", "--verbose"]), config),
        Err(UsageError::UnknownOption("--verbose".to_string()))
    );
    assert_eq!(
        parse_check_args(&args(&["a.json", "--format=xml"]), config),
        Err(UsageError::InvalidValue {
            flag: "--format",
            value: "xml".to_string(),
        })
    );
}

#[test]
fn reports_each_error_with_call_and_signature_notes() {
    let (summary, text) = run(COPY, &text_options());

    assert_eq!(
        summary,
        CheckSummary {
            calls: 3,
            errors: 2,
            warnings: 0,
        }
    );
    assert!(text.contains("error[A0001]: missing required argument `to` at position 1"));
    assert!(text.contains("  = note: in call #2\n"));
    assert!(text.contains(
        "error[A0002]: argument `flags` at position 3 must be of type int, string given"
    ));
    assert!(text.contains("  = note: in call #3\n"));
    assert!(text.contains("  = note: signature: copy(from: string, to: string, ...flags: int)\n"));
    assert!(text.ends_with("error: 2 argument errors\n"));
}

#[test]
fn valid_calls_produce_no_output() {
    let source = r#"{ "params": [{ "name": "x" }], "args": [1] }"#;
    let (summary, text) = run(source, &text_options());

    assert!(!summary.has_errors());
    assert_eq!(summary.calls, 1);
    assert_eq!(text, "");
}

#[test]
fn extra_arguments_follow_arity_policy() {
    let source = r#"{ "params": [{ "name": "arg0" }], "args": ["arg0", "arg1"] }"#;

    let (strict, text) = run(source, &text_options());
    assert_eq!(strict.errors, 1);
    assert!(text.contains("error[A0003]"));

    let mut lenient = text_options();
    lenient.config.arity = ArityPolicy::Lenient;
    let (summary, text) = run(source, &lenient);
    assert_eq!(summary.errors, 0);
    assert!(!summary.has_errors());
    assert_eq!(summary.warnings, 1);
    assert!(text.starts_with(
        "warning[A0003]: unexpected extra argument at position 1; expected at most 1 argument\n"
    ));
    assert!(text.contains("  = note: ignored under the lenient arity policy\n"));
    assert!(text.ends_with("warning: 1 warning emitted\n"));
}

#[test]
fn lenient_policy_does_not_warn_for_variadic_signatures() {
    let source = r#"{
        "params": [{ "name": "head" }, { "name": "rest", "variadic": true }],
        "args": [1, 2, 3]
    }"#;
    let mut lenient = text_options();
    lenient.config.arity = ArityPolicy::Lenient;

    let (summary, text) = run(source, &lenient);
    assert_eq!(summary.warnings, 0);
    assert_eq!(text, "");
}

#[test]
fn lenient_warnings_appear_in_json_output() {
    let source = r#"{ "params": [], "args": [true, false] }"#;
    let options = CheckOptions {
        config: CheckConfig::default().with_arity(ArityPolicy::Lenient),
        format: OutputFormat::Json,
        ..CheckOptions::default()
    };

    let (summary, text) = run(source, &options);
    assert_eq!(summary.warnings, 2);

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed[0]["severity"], "warning");
    assert_eq!(parsed[1]["position"], 1);
}

#[test]
fn json_output_is_an_array_of_diagnostics() {
    let options = CheckOptions {
        format: OutputFormat::Json,
        ..CheckOptions::default()
    };
    let (summary, text) = run(COPY, &options);
    assert_eq!(summary.errors, 2);

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let codes: Vec<_> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, vec!["A0001", "A0002"]);
    assert_eq!(parsed[1]["position"], 3);
}

#[test]
fn invalid_input_is_a9001() {
    let (summary, text) = run("{ not json", &text_options());

    assert_eq!(
        summary,
        CheckSummary {
            calls: 0,
            errors: 1,
            warnings: 0,
        }
    );
    assert!(text.starts_with("error[A9001]: invalid call description:"));
}

#[test]
fn malformed_signature_uses_signature_code() {
    let source = r#"{ "params": [{ "name": "x" }, { "name": "x" }], "calls": [] }"#;
    let (summary, text) = run(source, &text_options());

    assert!(summary.has_errors());
    assert!(text.starts_with("error[A1003]: parameter `x` is declared more than once"));
}
