//! Recipe CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::Output;
use recipeshare_core::error::AppError;
use recipeshare_core::types::Recipe;
use recipeshare_service::{ClientContext, RecipeSorter, SortKey};

/// Arguments for recipe commands
#[derive(Debug, Args)]
pub struct RecipeArgs {
    /// Recipe subcommand
    #[command(subcommand)]
    pub command: RecipeCommand,
}

/// Recipe subcommands
#[derive(Debug, Subcommand)]
pub enum RecipeCommand {
    /// List recipes of a user (defaults to the logged-in user)
    List {
        /// Owner user ID
        #[arg(short, long)]
        user: Option<i64>,
    },
    /// Show one or more recipes
    Show {
        /// Recipe IDs
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Create a recipe
    Create {
        /// Title
        #[arg(short, long)]
        title: String,
        /// Ingredients
        #[arg(short, long)]
        ingredients: String,
        /// Instructions
        #[arg(long)]
        instructions: String,
        /// Short description
        #[arg(short, long)]
        description: Option<String>,
        /// Cook time in minutes
        #[arg(long)]
        cook_time: Option<u32>,
        /// Calories
        #[arg(long)]
        calories: Option<u32>,
    },
    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: i64,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// List the logged-in user's recipes in a chosen order
    Sort {
        /// Sort key: title, cook-time, or calories
        #[arg(short, long, default_value = "title")]
        by: SortKey,
    },
}

/// Recipe display row
#[derive(Debug, Serialize, Tabled)]
struct RecipeRow {
    /// Recipe ID
    id: String,
    /// Title
    title: String,
    /// Cook time
    cook_time: String,
    /// Calories
    calories: String,
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl From<&Recipe> for RecipeRow {
    fn from(r: &Recipe) -> Self {
        Self {
            id: optional(r.id),
            title: r.title.clone(),
            cook_time: optional(r.cook_time_minutes.map(|m| format!("{m} min"))),
            calories: optional(r.calories),
        }
    }
}

fn rows(recipes: &[Recipe]) -> Vec<RecipeRow> {
    recipes.iter().map(RecipeRow::from).collect()
}

/// Execute recipe commands
pub async fn execute(
    args: &RecipeArgs,
    ctx: &ClientContext,
    out: Output,
) -> Result<(), AppError> {
    match &args.command {
        RecipeCommand::List { user } => {
            let recipes = match user {
                Some(id) => ctx.recipes.get_by_user_id(*id).await?,
                None => ctx.facade.current_user_recipes().await?,
            };
            out.list(&rows(&recipes));
        }
        RecipeCommand::Show { ids } => {
            if let [id] = ids.as_slice() {
                let recipe = ctx.recipes.get_by_id(*id).await?;
                out.item(&RecipeRow::from(&recipe));
                let mut fields = Vec::with_capacity(3);
                if let Some(description) = &recipe.description {
                    fields.push(("Description", description.as_str()));
                }
                fields.push(("Ingredients", recipe.ingredients.as_str()));
                fields.push(("Instructions", recipe.instructions.as_str()));
                out.details(&fields);
            } else {
                let recipes = ctx.recipes.get_by_ids(ids).await;
                if recipes.len() < ids.len() {
                    out.warning(&format!(
                        "{} of {} recipes could not be loaded",
                        ids.len() - recipes.len(),
                        ids.len()
                    ));
                }
                out.list(&rows(&recipes));
            }
        }
        RecipeCommand::Create {
            title,
            ingredients,
            instructions,
            description,
            cook_time,
            calories,
        } => {
            let recipe = Recipe {
                description: description.clone(),
                cook_time_minutes: *cook_time,
                calories: *calories,
                ..Recipe::new(title.clone(), ingredients.clone(), instructions.clone())
            };
            let created = ctx.recipes.create(&recipe).await?;
            out.success(&format!("Recipe '{}' created", created.title));
            out.item(&RecipeRow::from(&created));
        }
        RecipeCommand::Delete { id, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete recipe {id}?"))
                    .default(false)
                    .interact()
                    .map_err(super::input_error)?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            ctx.recipes.delete(*id).await?;
            out.success(&format!("Recipe {id} deleted"));
        }
        RecipeCommand::Sort { by } => {
            let recipes = ctx.facade.current_user_recipes().await?;
            let sorter = RecipeSorter::new(by.strategy());
            out.list(&rows(&sorter.sort(&recipes)));
        }
    }

    Ok(())
}
