use bluebot::client::{BlueBotClient, CatFormat, Reply, Species};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bluebot-cli")]
#[command(about = "Demo client for the BlueBot server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the greeting
    Hello,
    /// Echo a cat back as text or JSON
    Cat {
        #[arg(short, long, value_enum, default_value = "string")]
        format: CatFormat,
        #[arg(short, long, default_value = "")]
        name: String,
        #[arg(short = 't', long = "type", default_value = "")]
        kind: String,
    },
    /// Post a pet record to one of the add endpoints
    Add {
        #[arg(value_enum)]
        species: Species,
        #[arg(short, long)]
        name: String,
        #[arg(short = 't', long = "type")]
        kind: String,
    },
    /// Open the admin page
    Admin {
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = BlueBotClient::new(&cli.url);

    let reply = match cli.command {
        Commands::Hello => client.hello().await?,
        Commands::Cat { format, name, kind } => client.cat(format, &name, &kind).await?,
        Commands::Add { species, name, kind } => client.add(species, &name, &kind).await?,
        Commands::Admin { user, password } => {
            client.admin(user.as_deref(), password.as_deref()).await?
        }
    };

    print_reply(&reply);
    Ok(())
}

fn print_reply(reply: &Reply) {
    if !reply.is_success() {
        eprintln!("Error: server returned status {}", reply.status);
        if !reply.body.is_empty() {
            eprintln!("Response: {}", reply.body);
        }
        return;
    }

    match serde_json::from_str::<serde_json::Value>(&reply.body) {
        Ok(json) => match serde_json::to_string_pretty(&json) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{}", reply.body),
        },
        Err(_) => println!("{}", reply.body.trim_end()),
    }
}
