//! Lifequest CLI - quest board and character sheet in your terminal
//!
//! Thin client for the Lifequest API server.

mod api;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use uuid::Uuid;

use api::{LifequestClient, QuestResponse};
use config::Config;

#[derive(Parser)]
#[command(name = "lifequest")]
#[command(about = "Lifequest CLI - quest board and character sheet", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the character sheet
    Status,

    /// Show the quest board
    Quests,

    /// Ask the mentor for new quests
    Generate {
        /// Free text about your day (defaults to a balanced-day request)
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Complete a quest
    Complete {
        /// Quest ID
        id: Uuid,
    },

    /// Sit by the campfire
    Campfire,

    /// Show or update the configuration
    Config {
        /// Set the server base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let client = LifequestClient::new(&config.base_url);

    match cli.command {
        Commands::Status => cmd_status(&client).await,
        Commands::Quests => cmd_quests(&client).await,
        Commands::Generate { context } => cmd_generate(&client, context).await,
        Commands::Complete { id } => cmd_complete(&client, id).await,
        Commands::Campfire => cmd_campfire(&client).await,
        Commands::Config { base_url } => cmd_config(base_url).await,
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_status(client: &LifequestClient) -> Result<()> {
    let character = client.character().await?;

    println!("{}", format!("Lv.{}", character.level).bold().cyan());
    println!("XP      {} / {}", character.current_xp, character.next_level_xp);
    println!("HP      {} / {}", character.hp, character.max_hp);
    println!("Streak  {} days", character.streak);
    println!();
    for attribute in &character.attributes {
        println!("{:4} {}", attribute.code.bold(), attribute.score);
    }

    Ok(())
}

async fn cmd_quests(client: &LifequestClient) -> Result<()> {
    let log = client.quests().await?;

    println!("{}", "수락 가능".bold());
    if log.active.is_empty() {
        println!("  {}", "현재 수행할 임무가 없습니다.".dimmed());
        println!("  {}", "`lifequest generate`로 새 임무를 받으세요.".dimmed());
    }
    for quest in &log.active {
        print_quest(quest);
    }

    if !log.completed.is_empty() {
        println!();
        println!("{}", "완료됨".bold());
        for quest in &log.completed {
            print_quest(quest);
        }
    }

    Ok(())
}

async fn cmd_generate(client: &LifequestClient, context: Option<String>) -> Result<()> {
    println!("{}", "새로운 임무를 수신 중입니다...".dimmed());
    let result = client.generate(context).await?;

    if let Some(reason) = &result.degraded {
        println!("{}", format!("(fallback: {})", reason).yellow());
    }
    println!("\"{}\"", result.analysis.italic());

    if !result.quests.is_empty() {
        println!();
        for quest in &result.quests {
            print_quest(quest);
        }
    }

    Ok(())
}

async fn cmd_complete(client: &LifequestClient, id: Uuid) -> Result<()> {
    let result = client.complete(id).await?;

    println!(
        "{} {} (+{} xp)",
        "✓".green(),
        result.quest.title.bold(),
        result.quest.xp
    );
    if result.leveled_up {
        println!(
            "{}",
            format!("LEVEL UP! Lv.{}", result.character.level)
                .bold()
                .magenta()
        );
    }
    println!(
        "XP {} / {}",
        result.character.current_xp, result.character.next_level_xp
    );

    Ok(())
}

async fn cmd_campfire(client: &LifequestClient) -> Result<()> {
    let campfire = client.campfire().await?;

    println!("{}", "고요한 모닥불".bold().yellow());
    println!("{} adventurers resting here", campfire.online_count);
    for message in &campfire.messages {
        println!("  {}", message.dimmed());
    }

    Ok(())
}

async fn cmd_config(base_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(base_url) = base_url {
        config.set_base_url(base_url);
        config.save()?;
        println!("{} Config saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("base_url = {}", config.base_url);

    let client = LifequestClient::new(&config.base_url);
    print!("Testing connection... ");
    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => println!("{}", "Failed".red()),
    }

    Ok(())
}

fn print_quest(quest: &QuestResponse) {
    let difficulty = quest.difficulty.as_str();
    let difficulty = match difficulty {
        "Hard" => difficulty.red(),
        "Medium" => difficulty.yellow(),
        _ => difficulty.green(),
    };
    let marker = if quest.completed {
        "✓".green()
    } else {
        "○".normal()
    };

    println!(
        "  {} {} [{} | {} | {} xp]",
        marker,
        quest.title.bold(),
        quest.attribute,
        difficulty,
        quest.xp
    );
    println!("    {}", quest.description.dimmed());
    println!("    {}", quest.id.to_string().dimmed());
}
