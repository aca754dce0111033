use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["archbot", "-c", "./config.example.toml"])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::RequestTimeout), "600");
    assert_eq!(Config::get(ConfigKey::Username), "testuser");

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_a_bad_config_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["archbot", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());

    return Ok(());
}
