use crate::render;
use application::auth_service::{AuthService, DEV_ACCOUNTS};
use application::chat_service::{ChatService, SendStatus};
use application::matching_service::MatchingService;
use clap::Parser;
use colored::Colorize;
use domain::error::ApiError;
use domain::store::{KeyValueStore, SELECTED_SEEKER_KEY};
use infrastructure::auth_api::AuthApiClient;
use infrastructure::chat_api::ChatApiClient;
use infrastructure::config::Config;
use infrastructure::local_store::FileStore;
use infrastructure::matching_api::MatchingApiClient;
use infrastructure::seeker_directory::SeekerDirectory;
use shared::banner;
use shared::prompt::{ask_confirmation, ask_password, ask_text};
use shared::telemetry::Telemetry;
use shared::types::Result;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "talent-cli")]
#[command(about = "Recruiting match assistant for staffing operators")]
pub struct Cli {
    /// Log in as an operator
    #[arg(long)]
    pub login: bool,

    /// Log out and clear stored credentials
    #[arg(long)]
    pub logout: bool,

    /// Reset a forgotten password
    #[arg(long)]
    pub reset_password: bool,

    /// List registered job seekers
    #[arg(long)]
    pub seekers: bool,

    /// Run a matching pass for a seeker
    #[arg(long)]
    pub matching: bool,

    /// Enter interactive chat mode
    #[arg(long)]
    pub chat: bool,

    /// Seeker id or name for --matching
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

pub struct CliApp {
    config: Config,
    store: Arc<dyn KeyValueStore>,
    auth: AuthService,
    directory: SeekerDirectory,
}

impl CliApp {
    pub fn new() -> Self {
        let config = Config::load();
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.store_path.clone()));
        let auth = AuthService::new(
            Arc::new(AuthApiClient::new(config.api_base_url.clone())),
            store.clone(),
            config.dev_auth_enabled,
        );
        Self {
            config,
            store,
            auth,
            directory: SeekerDirectory::new(),
        }
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        let args_str = cli.args.join(" ");
        if cli.login {
            self.handle_login().await
        } else if cli.logout {
            self.handle_logout()
        } else if cli.reset_password {
            self.handle_reset_password().await
        } else if cli.seekers {
            self.handle_seekers().await
        } else if cli.matching {
            self.handle_matching(&args_str).await
        } else if cli.chat {
            self.handle_chat().await
        } else {
            self.handle_status();
            Ok(())
        }
    }

    fn handle_status(&self) {
        match self.auth.current_user() {
            Some(user) => println!(
                "Logged in as {} ({}). Try --seekers, --matching or --chat.",
                user.name, user.emp_id
            ),
            None if self.auth.is_authenticated() => {
                println!("Logged in. Try --seekers, --matching or --chat.")
            }
            None => println!("Not logged in. Start with --login."),
        }
    }

    fn require_login(&self) -> bool {
        if self.auth.is_authenticated() {
            return true;
        }
        banner::error("Please log in first (--login).");
        false
    }

    async fn handle_login(&self) -> Result<()> {
        if self.auth.dev_auth_enabled() {
            let mut lines = vec!["Dev auth is enabled. Test accounts:".to_string()];
            for account in &DEV_ACCOUNTS {
                lines.push(format!(
                    "  {} / {} ({})",
                    account.emp_id, account.password, account.name
                ));
            }
            banner::notice(&lines);
        }

        let emp_id = ask_text("Employee id")?;
        let password = ask_password("Password")?;

        match self.auth.login(emp_id.trim(), &password).await {
            Ok(()) => println!("{}", "Logged in.".green()),
            Err(err) => banner::error(&format!("Login failed: {err}")),
        }
        Ok(())
    }

    fn handle_logout(&self) -> Result<()> {
        if !ask_confirmation("Log out? Stored credentials will be cleared.", false)? {
            println!("{}", "Cancelled.".yellow());
            return Ok(());
        }
        self.auth.logout()?;
        println!("{}", "Logged out.".green());
        Ok(())
    }

    async fn handle_reset_password(&self) -> Result<()> {
        let emp_id = ask_text("Employee id")?;
        let name = ask_text("Full name")?;

        if let Err(err) = self.auth.verify_identity(emp_id.trim(), name.trim()).await {
            banner::error(&format!("Identity check failed: {err}"));
            return Ok(());
        }

        let new_password = ask_password("New password")?;
        let confirmation = ask_password("Confirm new password")?;
        match self
            .auth
            .reset_password(emp_id.trim(), &new_password, &confirmation)
            .await
        {
            Ok(()) => println!("{}", "Password updated.".green()),
            Err(err) => banner::error(&format!("Password reset failed: {err}")),
        }
        Ok(())
    }

    async fn handle_seekers(&self) -> Result<()> {
        if !self.require_login() {
            return Ok(());
        }
        let seekers = self.directory.fetch_all().await?;
        render::seeker_list(&seekers);
        Ok(())
    }

    async fn handle_matching(&self, query: &str) -> Result<()> {
        if !self.require_login() {
            return Ok(());
        }
        let query = query.trim();
        if query.is_empty() {
            banner::error("Pass a seeker id or name: --matching <seeker>");
            return Ok(());
        }

        let seekers = self.directory.fetch_all().await?;
        let Some(seeker) = seekers
            .iter()
            .find(|s| s.name == query || s.id.to_string() == query)
        else {
            banner::error(&format!("No seeker matches \"{query}\"."));
            return Ok(());
        };

        self.store
            .set(SELECTED_SEEKER_KEY, &seeker.id.to_string())?;

        println!("Matching {}...", seeker.name);
        let timer = Telemetry::new();
        let ranker = Arc::new(MatchingApiClient::new(self.config.api_base_url.clone()));
        let mut matching = MatchingService::new(Some(ranker));

        if let Some(outcome) = matching.run(seeker).await {
            render::profile(&outcome.profile);
            for job in &outcome.jobs {
                render::job_card(job);
            }
            println!(
                "\n{}",
                format!("Matching finished in {}.", timer.elapsed_secs()).green()
            );
        }
        Ok(())
    }

    async fn handle_chat(&self) -> Result<()> {
        if !self.require_login() {
            return Ok(());
        }

        let backend = Arc::new(ChatApiClient::new(self.config.api_base_url.clone()));
        let mut chat = ChatService::new(backend, self.store.clone());
        chat.restore().await;

        while chat.connection_problem().is_some() {
            banner::notice(&[
                "サーバーとの接続に問題があります".to_string(),
                "バックエンドサーバーが起動しているか確認してください".to_string(),
            ]);
            if !ask_confirmation("Retry fetching the history?", true)? {
                break;
            }
            chat.retry_history().await;
        }

        if chat.transcript().is_empty() {
            println!("こんにちは！");
            println!("商談や面談の記録について何でもお聞きください。");
        } else {
            for message in chat.transcript() {
                render::chat_message(message);
            }
        }
        println!(
            "{}",
            "Type 'new' for a fresh session, 'exit' to quit.".dimmed()
        );

        loop {
            let input = ask_text("You")?;
            match input.trim() {
                "exit" => break,
                "new" => {
                    chat.new_session()?;
                    println!("{}", "Started a new session.".green());
                    continue;
                }
                _ => {}
            }

            match chat.send_message(&input).await {
                Ok(SendStatus::Delivered) => {
                    if let Some(message) = chat.transcript().last() {
                        render::chat_message(message);
                    }
                }
                Ok(SendStatus::Ignored) => {}
                Err(err) => notify_send_failure(&err),
            }
        }
        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

fn notify_send_failure(err: &ApiError) {
    match err {
        ApiError::NetworkUnavailable { .. } => {
            banner::error("Could not reach the server. Check that the backend is running.");
        }
        ApiError::ServerRejected { status, detail } => {
            banner::error(&format!(
                "The server rejected the message (status {status}): {detail}"
            ));
        }
        ApiError::Unknown { detail } => {
            banner::error(&format!("Failed to send the message: {detail}"));
        }
    }
}
