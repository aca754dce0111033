use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file commands.")
        .arg_required_else_help(true)
        .subcommand(Command::new("create").about("Creates a default config file."));
}

pub fn build() -> Command {
    return Command::new("archbot")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(
            Arg::new("config-file")
                .short('c')
                .long("config-file")
                .env("ARCHBOT_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to a configuration file. [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                )),
        )
        .arg(
            Arg::new("chat-endpoint")
                .long("chat-endpoint")
                .env("ARCHBOT_CHAT_ENDPOINT")
                .num_args(1)
                .help(format!(
                    "The chat endpoint of the conversation service. [default: {}]",
                    Config::default(ConfigKey::ChatEndpoint)
                )),
        )
        .arg(
            Arg::new("asset-base-url")
                .long("asset-base-url")
                .env("ARCHBOT_ASSET_BASE_URL")
                .num_args(1)
                .help(format!(
                    "The base origin used to resolve relative diagram URLs. [default: {}]",
                    Config::default(ConfigKey::AssetBaseUrl)
                )),
        )
        .arg(
            Arg::new("request-timeout")
                .long("request-timeout")
                .env("ARCHBOT_REQUEST_TIMEOUT")
                .num_args(1)
                .help(format!(
                    "How long to wait for an answer from the service, in seconds. [default: {}]",
                    Config::default(ConfigKey::RequestTimeout)
                )),
        )
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .env("ARCHBOT_USERNAME")
                .num_args(1)
                .help("Your name as displayed in chat bubbles. [default: your login user]"),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    if let Some(subcmd_matches) = matches.subcommand_matches("completions") {
        let shell = subcmd_matches.get_one::<Shell>("shell").unwrap();
        print_completions(*shell, &mut build());
        return Ok(false);
    }

    if let Some(subcmd_matches) = matches.subcommand_matches("config") {
        if subcmd_matches.subcommand_matches("create").is_some() {
            create_config_file().await?;
        }
        return Ok(false);
    }

    Config::load(vec![&matches]).await?;

    return Ok(true);
}
