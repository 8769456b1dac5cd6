//! Agora CLI entry point

use std::process::ExitCode;

use clap::Parser;

use agora::cli::{
    app::{load_merged_config, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    news_app::{run_news, NewsOptions},
    presenter::Presenter,
    vote_app::{run_vote, VoteOptions},
};
use agora::domain::config::AppConfig;
use agora::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::News {
            location,
            country,
            lang,
            max,
        } => {
            let cli_config = AppConfig {
                country,
                lang,
                max_results: max,
                ..Default::default()
            };
            let config = load_merged_config(cli_config).await;

            let options = NewsOptions {
                location,
                lang: config.lang_or_default().to_string(),
                country: config.country_or_default().to_string(),
                max_results: config.max_results_or_default(),
            };

            run_news(options).await
        }
        Commands::Vote {
            language,
            listen_secs,
        } => {
            let cli_config = AppConfig {
                listen_secs,
                ..Default::default()
            };
            let config = load_merged_config(cli_config).await;

            let options = VoteOptions {
                language: language.map(Into::into),
                listen_secs: config.listen_secs_or_default(),
                speech_api_key: config.speech_api_key.clone(),
            };

            run_vote(options).await
        }
    }
}
