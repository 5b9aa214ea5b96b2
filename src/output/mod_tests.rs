use super::OutputFormat;

#[test]
fn parses_known_formats() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!(
        "markdown".parse::<OutputFormat>().unwrap(),
        OutputFormat::Markdown
    );
    assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn unknown_format_is_rejected() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("Unknown output format"));
}

#[test]
fn default_format_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
