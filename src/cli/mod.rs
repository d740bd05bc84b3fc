//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod ask;
pub mod conversation_list;
pub mod show;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::api::{HttpBackend, TutorBackend};
use crate::cli::ask::{run_ask, AskOptions};
use crate::cli::conversation_list::list_conversations;
use crate::cli::show::show_conversation;
use crate::core::config::data::Config;
use crate::ui::chat_loop::run_chat;
use crate::utils::diagnostics::{init_file_logging, init_stderr_logging};
use crate::utils::logging::LoggingState;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ")"
);

#[derive(Parser)]
#[command(name = "tutorchat")]
#[command(version = VERSION)]
#[command(about = "A terminal client for a programming-language tutoring server")]
#[command(
    long_about = "tutorchat talks to a tutoring chat server over HTTP. Pick a programming \
language, an orchestration type and a tutoring mode, start a session, and chat with the \
tutor. Previous conversations are listed in the sidebar and can be reopened.\n\n\
Controls:\n\
  Tab               Switch focus between the sidebar and the main pane\n\
  Up/Down           Change a value (settings) / scroll (chat) / select (sidebar)\n\
  Left/Right        Move between settings fields\n\
  Enter             Start a session / send the message / open a conversation\n\
  Esc               Back to the settings screen\n\
  PageUp/PageDown   Scroll the chat\n\
  F5                Refresh the conversation list\n\
  Ctrl+U            Clear the input\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tutoring server URL (overrides the configured server-url)
    #[arg(short = 's', long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Append the chat transcript to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<String>,

    /// Write diagnostic logs to the specified file (filtered by RUST_LOG)
    #[arg(long, global = true, value_name = "FILE")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// List stored conversations, most recent first
    Conversations,
    /// Print the transcript of a stored conversation
    Show {
        /// Conversation id as shown by `tutorchat conversations`
        id: String,
    },
    /// Start a session, send one message and print the tutor's reply
    Ask {
        /// Programming language (defaults to default-language)
        #[arg(long)]
        language: Option<String>,
        /// Orchestration type (defaults to default-orchestration)
        #[arg(long)]
        orchestration: Option<String>,
        /// Tutoring mode (defaults to default-mode)
        #[arg(long)]
        mode: Option<String>,
        /// The message to send
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset a configuration value
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Print the current configuration
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

fn build_backend(config: &Config, server: Option<&str>) -> Result<Arc<dyn TutorBackend>, Box<dyn Error>> {
    let base_url = config.server_url(server);
    debug!(%base_url, timeout = ?config.request_timeout(), "using tutoring server");
    Ok(Arc::new(HttpBackend::new(base_url, config.request_timeout())?))
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Chat);

    // The chat interface owns the terminal; its diagnostics go to a file or nowhere
    match (&args.debug_log, &command) {
        (Some(path), _) => init_file_logging(path)?,
        (None, Commands::Chat) => {}
        (None, _) => init_stderr_logging(),
    }

    match command {
        Commands::Chat => {
            let config = Config::load()?;
            let backend = build_backend(&config, args.server.as_deref())?;
            let logging = LoggingState::new(args.log)?;
            run_chat(config, backend, logging).await
        }
        Commands::Conversations => {
            let config = Config::load()?;
            let backend = build_backend(&config, args.server.as_deref())?;
            list_conversations(backend.as_ref()).await
        }
        Commands::Show { id } => {
            let config = Config::load()?;
            let backend = build_backend(&config, args.server.as_deref())?;
            let logging = LoggingState::new(args.log)?;
            show_conversation(backend.as_ref(), &id, &logging).await
        }
        Commands::Ask {
            language,
            orchestration,
            mode,
            message,
        } => {
            let config = Config::load()?;
            let backend = build_backend(&config, args.server.as_deref())?;
            let logging = LoggingState::new(args.log)?;
            let options = AskOptions {
                language,
                orchestration,
                mode,
            };
            let reply = run_ask(&config, backend.as_ref(), logging, options, &message.join(" ")).await?;
            println!("{reply}");
            Ok(())
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            let value = value.join(" ");
            config.set_key(&key, &value)?;
            config.save()?;
            println!("✅ Set {key} to: {}", value.trim());
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            config.unset_key(&key)?;
            config.save()?;
            println!("✅ Unset {key}");
            Ok(())
        }
        Commands::Config => {
            let config = Config::load()?;
            config.print_all();
            Ok(())
        }
    }
}
