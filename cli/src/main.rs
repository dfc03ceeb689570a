mod builder;
mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillet_core::Recipe;

use builder::{IngredientList, RecipeSession};
use client::HttpGenerateClient;

#[derive(Parser)]
#[command(name = "skillet")]
#[command(about = "Skillet CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from a list of ingredients
    Ingredients {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Ingredients to cook with
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Generate a random recipe
    Random {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Ping the server (unauthenticated)
    Ping {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ingredients {
            server,
            ingredients,
        } => {
            let mut list = IngredientList::new();
            for raw in &ingredients {
                if let Err(e) = list.add(raw) {
                    eprintln!("Skipping ingredient: {}", e);
                }
            }

            let mut session = RecipeSession::new(HttpGenerateClient::new(server));
            match session.generate_from_ingredients(&list).await {
                Ok(recipe) => print_recipe(recipe),
                Err(e) => eprintln!("Failed to generate recipe: {}", e),
            }
        }
        Commands::Random { server } => {
            let mut session = RecipeSession::new(HttpGenerateClient::new(server));
            match session.generate_random().await {
                Ok(recipe) => print_recipe(recipe),
                Err(e) => eprintln!("Failed to generate recipe: {}", e),
            }
        }
        Commands::Ping { server } => {
            let client = HttpGenerateClient::new(server);
            println!("{}", client.ping().await?);
        }
    }

    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!();

    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    println!();

    println!("Instructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if let Some(nutrition) = &recipe.nutritional_info {
        println!();
        println!(
            "Per serving: {} kcal, {}g protein, {}g carbs, {}g fat",
            nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fat
        );
    }
}
