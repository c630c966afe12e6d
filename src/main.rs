use clap::Parser;
use log::{debug, error};

use matchagen::{orchestrator_from_config, pantry, LabConfig, LabError, LabSession};

#[derive(Parser, Debug)]
#[command(name = "matchagen", version, about = "Generate a matcha drink recipe")]
struct Args {
    /// Pantry ingredients to include (see --list)
    ingredients: Vec<String>,

    /// Free-typed inspiration added after the pantry picks
    #[arg(short, long)]
    custom: Option<String>,

    /// Creativity between 0.5 and 1.5 (rejected outside that range)
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Generation endpoint, overrides the configuration
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Print the parsed recipe as JSON
    #[arg(long)]
    json: bool,

    /// List pantry ingredients and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    if args.list {
        for category in pantry::categories() {
            println!("{}", category.name);
            for item in category.items {
                println!("  {}", item);
            }
        }
        return Ok(());
    }

    let mut config = LabConfig::load()?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    debug!("{:?}", config);

    let mut session = LabSession::new();
    session.try_set_temperature(args.temperature.unwrap_or(config.temperature))?;
    for name in &args.ingredients {
        let item = pantry::find(name).ok_or_else(|| LabError::UnknownIngredient(name.clone()))?;
        if !session.is_selected(item) {
            session.toggle(item);
        }
    }
    if let Some(custom) = args.custom {
        session.set_custom_input(custom);
    }

    let orchestrator = orchestrator_from_config(&config)?;
    eprintln!("Synthesizing: {}", session.inspiration().unwrap_or_default());

    let outcome = session.generate(&orchestrator).await?;
    if let Some(recipe) = outcome.recipe() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        } else {
            print!("{}", recipe);
        }
        return Ok(());
    }

    let message = outcome.message().unwrap_or("Generation did not settle");
    error!("{}", message);
    Err(message.into())
}
