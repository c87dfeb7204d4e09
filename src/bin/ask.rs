use anyhow::Context;
use clap::Parser;
use mistral_chat::ai::Resolver;
use mistral_chat::config::Config;
use mistral_chat::conversation::Conversation;
use mistral_chat::types::{ChatMessage, ModelId};

/// Ask the configured model one question and print its reply.
#[derive(Parser, Debug)]
#[command(name = "ask", version, about)]
struct Args {
    /// Question to send
    #[arg(default_value = "What is the capital of France?")]
    question: String,

    /// Model id; defaults to CHAT_MODEL or the first model in the list
    #[arg(long)]
    model: Option<ModelId>,

    /// Hugging Face token; overrides HF_API_TOKEN
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Read the local offset before the runtime spawns its workers.
    mistral_chat::types::capture_local_offset();
    let _ = dotenvy::dotenv();
    mistral_chat::logging::init_tracing();

    let args = Args::parse();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?
        .block_on(run(args))
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to read configuration")?;
    let model = args.model.unwrap_or(config.model);
    let token = args.token.or(config.api_token.clone());

    let mut conversation = Conversation::new();
    conversation
        .append(ChatMessage::user(args.question))
        .context("question must not be empty")?;

    let resolver = Resolver::from_config(&config);
    let reply = resolver
        .resolve(&conversation, model, token.as_deref())
        .await;
    println!("Model reply: {reply}");
    Ok(())
}
