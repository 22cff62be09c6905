use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_config_source_and_html() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keycountrc.json",
        r#"{ "source": "public/js/i18n.js", "html": "public/index.html" }"#,
    )?;
    test.write_file(
        "public/js/i18n.js",
        r#"const t = { en: {"title": "T"}, vi: {"title": "T"} };"#,
    )?;
    test.write_file(
        "public/index.html",
        r#"<h1 data-key="title">T</h1><p data-key="title">T</p>"#,
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("✅ Total data-key attributes in HTML: 2\n"));
    assert!(out.contains("✅ English translation keys: 1\n"));

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keycountrc.json", r#"{ "strategy": "ast" }"#)?;
    test.write_file(
        "web/i18n.js",
        r#"const t = { en: { a: "A", b: "B" }, vi: { a: "A" } };"#,
    )?;

    let output = test
        .command()
        .current_dir(test.root().join("web"))
        .arg("i18n.js")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Mismatch: English has 2 keys, Vietnamese has 1 keys"));

    Ok(())
}

#[test]
fn test_config_locales() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keycountrc.json",
        r#"{ "primaryLocale": "fr", "secondaryLocale": "de" }"#,
    )?;
    test.write_file("i18n.js", r#"fr: {"a":1,"b":2}, de: {"a":1,"b":2}"#)?;

    let output = test.run(&["i18n.js"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("✅ fr translation keys: 2\n"));
    assert!(out.contains("✅ de translation keys: 2\n"));

    Ok(())
}

#[test]
fn test_flag_overrides_config_strategy() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keycountrc.json", r#"{ "strategy": "ast" }"#)?;
    test.write_file("i18n.js", r#"en: {"a":1}, vi: {"a":1}"#)?;

    let output = test.run(&["i18n.js", "--strategy", "split"])?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".keycountrc.json", r#"{ "secondaryLocale": "en" }"#)?;
    test.write_file("i18n.js", r#"en: {"a":1}, vi: {"a":1}"#)?;

    let output = test.run(&["i18n.js"])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("must differ"));

    Ok(())
}
