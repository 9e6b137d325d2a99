pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;

use crate::config::Config;
use crate::services::{checker_service::CheckerService, quiz_service::QuizService};
use reqwest::Client;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub config_path: PathBuf,
    pub quiz_service: QuizService,
    pub checker_service: CheckerService,
}

impl AppState {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        // One shared client, no request timeout: a hung upstream parks the
        // handling request rather than failing it.
        let http_client = Client::new();

        let quiz_service = QuizService::new(
            http_client.clone(),
            config.quiz_url.clone(),
            config.quiz_list_url.clone(),
        );
        let checker_service =
            CheckerService::new(http_client, config.checker_service_url.clone());

        Self {
            config,
            config_path,
            quiz_service,
            checker_service,
        }
    }
}
