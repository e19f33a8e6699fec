use std::env;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();

    assert!(toml_res.is_ok());
    assert!(res.contains("api-url = \"http://localhost:8000\""));
    assert!(res.contains("request-timeout = 30000"));
}

#[test]
fn it_returns_defaults() {
    assert_eq!(Config::default(ConfigKey::ApiURL), "http://localhost:8000");
    assert_eq!(Config::default(ConfigKey::RequestTimeout), "30000");
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let config_path = env::temp_dir().join("campfire-config-valid.toml");
    let mut file = fs::File::create(&config_path).await?;
    file.write_all(b"api-url = \"http://localhost:9999\"\n")
        .await?;

    let matches = cli::build().try_get_matches_from(vec![
        "campfire",
        "--config-file",
        config_path.to_str().unwrap(),
    ])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiURL), "http://localhost:9999");

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_a_broken_config_file() -> Result<()> {
    let config_path = env::temp_dir().join("campfire-config-broken.toml");
    let mut file = fs::File::create(&config_path).await?;
    file.write_all(b"api-url = [not toml").await?;

    let matches = cli::build().try_get_matches_from(vec![
        "campfire",
        "--config-file",
        config_path.to_str().unwrap(),
    ])?;
    let res = Config::load(cli::build(), vec![&matches]).await;

    assert!(res.is_err());

    return Ok(());
}
