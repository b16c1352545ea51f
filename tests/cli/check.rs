use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const EN: &str = r#"{
  "greeting": "Hi $name$",
  "title": "<b>Welcome</b>"
}"#;

#[test]
fn test_clean_messages() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", EN),
        (
            "de",
            r#"{ "greeting": "Hallo $name$", "title": "<b>Willkommen</b>" }"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_reports_issues_grouped_by_locale() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", EN),
        (
            "de",
            r#"{
  "greeting": "Hallo $nom$",
  "title": "<b>Willkommen</i>"
}"#,
        ),
        (
            "fr",
            r#"{ "greeting": "Bonjour $name$", "title": "<b>Bienvenue</b>" }"#,
        ),
    ])?;

    assert_report_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    [de]
        mismatch in variables: Hi $name$ ⇒ Hallo $nom$
          --> ./messages/de.json:2 (placeholder-mismatch)
        starting and ending tags don't match: b, i: <b>Willkommen</i>
          --> ./messages/de.json:3 (unbalanced-markup)

    ✘ 2 problems in 1 locale
    ");

    Ok(())
}

#[test]
fn test_reference_locale_markup_is_checked() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{ "title": "<b>Welcome" }"#),
        ("de", r#"{ "title": "<b>Willkommen</b>" }"#),
    ])?;

    assert_report_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    [en]
        starting tag without ending tag: b: <b>Welcome
          --> ./messages/en.json:1 (unbalanced-markup)

    ✘ 1 problem in 1 locale
    ");

    Ok(())
}

#[test]
fn test_angle_brackets_in_plain_text() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{ "price": "Price < 5", "love": "I <3 you", "cmp": "a < b > c <>" }"#),
        ("de", r#"{ "price": "Preis < 5", "love": "Ich <3 dich", "cmp": "a < b > c <>" }"#),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_and_empty_translations_are_skipped() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{ "a": "Hi $name$", "b": "Bye $name$" }"#),
        ("de", r#"{ "a": "" }"#),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_select_single_rule() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", EN),
        (
            "de",
            r#"{ "greeting": "Hallo $name$", "title": "<b>Willkommen" }"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command().args(["--rule", "placeholders"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files - no issues found

    ----- stderr -----
    ");

    assert_report_snapshot!(test.check_command().args(["--rule", "markup"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    [de]
        starting tag without ending tag: b: <b>Willkommen
          --> ./messages/de.json:1 (unbalanced-markup)

    ✘ 1 problem in 1 locale
    ");

    Ok(())
}

#[test]
fn test_reference_locale_override() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("de", r#"{ "greeting": "Hallo $name$" }"#),
        ("en", r#"{ "greeting": "Hi $nom$" }"#),
    ])?;

    assert_report_snapshot!(test.check_command().args(["--reference-locale", "de"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    [en]
        mismatch in variables: Hallo $name$ ⇒ Hi $nom$
          --> ./messages/en.json:1 (placeholder-mismatch)

    ✘ 1 problem in 1 locale
    ");

    Ok(())
}

#[test]
fn test_messages_root_argument() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/en.json", r#"{ "a": "$x$" }"#)?;
    test.write_file("translations/fr.json", r#"{ "a": "x" }"#)?;

    assert_report_snapshot!(test.check_command().arg("translations"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    [fr]
        mismatch in variables: $x$ ⇒ x
          --> translations/fr.json:1 (placeholder-mismatch)

    ✘ 1 problem in 1 locale
    ");

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transcheckrc.json",
        r#"{
         "messagesRoot": "./locales",
         "placeholderMarker": "%"
     }"#,
    )?;
    test.write_file("locales/en.json", r#"{ "a": "Hi %name% and $x$" }"#)?;
    test.write_file("locales/fr.json", r#"{ "a": "Salut %nom% et $x$" }"#)?;

    assert_report_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    [fr]
        mismatch in variables: Hi %name% and $x$ ⇒ Salut %nom% et $x$
          --> ./locales/fr.json:1 (placeholder-mismatch)

    ✘ 1 problem in 1 locale
    ");

    Ok(())
}

#[test]
fn test_file_pattern_override() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{ "a": "$x$" }"#),
        ("pt-BR", r#"{ "a": "x" }"#),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 locale file - no issues found

    ----- stderr -----
    ");

    assert_report_snapshot!(test.check_command().args(["--file-pattern", "*.json"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    [pt-BR]
        mismatch in variables: $x$ ⇒ x
          --> ./messages/pt-BR.json:1 (placeholder-mismatch)

    ✘ 1 problem in 1 locale
    ");

    Ok(())
}

#[test]
fn test_missing_reference_locale() -> Result<()> {
    let test = CliTest::with_messages(&[("de", r#"{ "a": "A" }"#)])?;

    assert_report_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Cannot check './messages': Reference locale 'en' messages not found (available: de)
    ");

    Ok(())
}

#[test]
fn test_invalid_json_is_fatal() -> Result<()> {
    let test = CliTest::with_messages(&[("en", r#"{ "a": "A" }"#), ("de", "{ invalid json }")])?;

    assert_report_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse JSON file: "./messages/de.json": key must be a string at line 1 column 3
    "#);

    Ok(())
}

#[test]
fn test_non_string_value_is_fatal() -> Result<()> {
    let test = CliTest::with_messages(&[("en", r#"{ "a": { "nested": "A" } }"#)])?;

    assert_report_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Expected a string value for key "a" in "./messages/en.json", found an object
    "#);

    Ok(())
}

#[test]
fn test_missing_messages_dir() -> Result<()> {
    let test = CliTest::new()?;

    assert_report_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Messages directory './messages' does not exist.
    Hint: Pass the directory as an argument or set 'messagesRoot' in .transcheckrc.json.
    ");

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for checking placeholders and markup in translation files

    Usage: transcheck [COMMAND]

    Commands:
      check  Check locale files for broken placeholders and unbalanced markup
      init   Initialize a new .transcheckrc.json configuration file
      help   Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}
