//! Reading and writing configuration directories.

use ndc_dynamodb_arp_configuration::configuration::{
    CONFIGURATION_FILENAME, CONFIGURATION_JSONSCHEMA_FILENAME,
};
use ndc_dynamodb_arp_configuration::error::ParseConfigurationError;
use ndc_dynamodb_arp_configuration::{
    parse_configuration, version1, version2, write_parsed_configuration, ParsedConfiguration,
    VersionTag,
};

fn structured() -> ParsedConfiguration {
    ParsedConfiguration::Version2(version2::ParsedConfiguration {
        host: "dynamodb.us-west-1.amazonaws.com".into(),
        access_key: "AKIAABC".into(),
        secret_key: "SECRET123".into(),
        region: "us-west-1".into(),
        allow_external_query: true,
    })
}

#[tokio::test]
async fn written_configuration_parses_back() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = structured();

    write_parsed_configuration(&config, dir.path()).await?;
    let parsed = parse_configuration(dir.path()).await?;

    assert_eq!(parsed, config);
    assert_eq!(
        parsed.render_connection_string()?,
        config.render_connection_string()?
    );
    Ok(())
}

#[tokio::test]
async fn written_configuration_keeps_field_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_parsed_configuration(&structured(), dir.path()).await?;

    let contents = tokio::fs::read_to_string(dir.path().join(CONFIGURATION_FILENAME)).await?;
    assert!(contents.ends_with('\n'));
    let positions: Vec<usize> = [
        "\"version\"",
        "\"host\"",
        "\"accessKey\"",
        "\"secretKey\"",
        "\"region\"",
        "\"allowExternalQuery\"",
    ]
    .iter()
    .map(|key| contents.find(key).expect("key is written"))
    .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    Ok(())
}

#[tokio::test]
async fn written_schema_accepts_both_versions() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write_parsed_configuration(&structured(), dir.path()).await?;

    let schema: serde_json::Value = serde_json::from_str(
        &tokio::fs::read_to_string(dir.path().join(CONFIGURATION_JSONSCHEMA_FILENAME)).await?,
    )?;
    let compiled = jsonschema::JSONSchema::compile(&schema).expect("schema compiles");

    let v1 = serde_json::to_value(ParsedConfiguration::Version1(
        version1::ParsedConfiguration::new("jdbc:dynamodb:Host=h;Region=r"),
    ))?;
    let v2 = serde_json::to_value(structured())?;
    assert!(compiled.is_valid(&v1));
    assert!(compiled.is_valid(&v2));
    assert!(!compiled.is_valid(&serde_json::json!({ "version": "2", "host": 7 })));
    Ok(())
}

#[tokio::test]
async fn version_1_file_is_read_and_upgraded() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    tokio::fs::write(
        dir.path().join(CONFIGURATION_FILENAME),
        r#"{
  "version": "1",
  "connectionString": "jdbc:dynamodb:Host=dynamodb.us-west-1.amazonaws.com;Region=us-west-1;AccessKey=AKIAABC;SecretKey=SECRET123"
}
"#,
    )
    .await?;

    let parsed = parse_configuration(dir.path()).await?;
    assert_eq!(parsed.version(), VersionTag::Version1);
    assert_eq!(parsed.pool_settings().max_idle_connections, 8);
    assert_eq!(parsed.pool_settings().idle_timeout_seconds, 60);

    let upgraded = parsed.upgrade()?;
    assert_eq!(upgraded.version(), VersionTag::Version2);
    assert_eq!(
        upgraded.render_connection_string()?,
        "jdbc:dynamodb:Host=dynamodb.us-west-1.amazonaws.com;AccessKey=AKIAABC;SecretKey=SECRET123;Region=us-west-1;"
    );
    Ok(())
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = parse_configuration(dir.path()).await.unwrap_err();
    assert!(matches!(
        error,
        ParseConfigurationError::IoErrorButStringified(_)
    ));
}

#[tokio::test]
async fn malformed_file_reports_its_position() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(
        dir.path().join(CONFIGURATION_FILENAME),
        "{\n  \"version\": \"2\",\n  \"host\": \n}\n",
    )
    .await
    .unwrap();

    match parse_configuration(dir.path()).await.unwrap_err() {
        ParseConfigurationError::ParseError {
            file_path, line, ..
        } => {
            assert_eq!(file_path, dir.path().join(CONFIGURATION_FILENAME));
            assert_eq!(line, 4);
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_fields_are_accepted_until_rendered() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    tokio::fs::write(
        dir.path().join(CONFIGURATION_FILENAME),
        r#"{ "version": "2", "host": "h", "accessKey": "" }"#,
    )
    .await?;

    let parsed = parse_configuration(dir.path()).await?;
    let error = parsed.render_connection_string().unwrap_err();
    assert_eq!(error.field, "accessKey");
    Ok(())
}
