//! FitFuel command-line interface
//!
//! Browse exercises, search recipes, and estimate daily calories.
//!
//! Usage:
//! ```bash
//! # Estimate calories and macros
//! fitfuel calories --age 30 --gender male --weight 70 --height 175 --activity moderate --goal maintain
//!
//! # Same, entering pounds and inches
//! fitfuel calories --weight 155 --height 69 --imperial
//!
//! # Browse the exercise catalog
//! fitfuel exercises --search press --body-part chest --page 2
//!
//! # Exercise detail with similar exercises and videos
//! fitfuel exercise 0025
//!
//! # Search recipes
//! fitfuel recipes chicken --diet high-protein --meal-type dinner
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fitfuel_client::{
    config::AppConfig,
    services::{CalculatorService, ExerciseService, NutritionService},
    state::AppState,
};
use fitfuel_shared::{
    paginate, ActivityLevel, BodyMeasurements, CalculatorForm, CalorieResult, Exercise,
    ExerciseFilters, Gender, Goal, Page, Pagination, Recipe, RecipeQuery, CATALOG_PAGE_SIZE,
    DEFAULT_MAX_RESULTS,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "fitfuel",
    version,
    about = "FitFuel fitness toolkit",
    long_about = "Browse exercises, search recipes, and estimate daily calorie and macronutrient needs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate daily calories and macronutrients
    Calories(CaloriesArgs),

    /// Convert weight and height between metric and imperial (rounded)
    Convert(ConvertArgs),

    /// Browse the exercise catalog
    Exercises(ExercisesArgs),

    /// Show an exercise with similar exercises and videos
    Exercise {
        /// Exercise id
        id: String,
    },

    /// Search recipes
    Recipes(RecipesArgs),
}

#[derive(Args)]
struct CaloriesArgs {
    /// Age in years (15-80)
    #[arg(long, default_value_t = 30)]
    age: i32,

    /// male or female
    #[arg(long, default_value = "male")]
    gender: Gender,

    /// Weight in kg (lbs with --imperial)
    #[arg(long, default_value_t = 70.0)]
    weight: f64,

    /// Height in cm (inches with --imperial)
    #[arg(long, default_value_t = 175.0)]
    height: f64,

    /// sedentary, light, moderate, active or very
    #[arg(long, default_value = "moderate")]
    activity: ActivityLevel,

    /// maintain, lose or gain
    #[arg(long, default_value = "maintain")]
    goal: Goal,

    /// Interpret weight and height as pounds and inches
    #[arg(long)]
    imperial: bool,
}

#[derive(Args)]
struct ConvertArgs {
    weight: f64,
    height: f64,

    /// Values are imperial and should be converted to metric
    #[arg(long)]
    imperial: bool,
}

#[derive(Args)]
struct ExercisesArgs {
    /// Search exercise names
    #[arg(long, default_value = "")]
    search: String,

    #[arg(long, default_value = "")]
    body_part: String,

    #[arg(long, default_value = "")]
    equipment: String,

    /// Target muscle
    #[arg(long, default_value = "")]
    target: String,

    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Args)]
struct RecipesArgs {
    /// What to search for (e.g. chicken, pasta, salad)
    query: String,

    #[arg(long, default_value = "")]
    diet: String,

    /// Intolerance filter (e.g. dairy-free)
    #[arg(long, default_value = "")]
    health: String,

    #[arg(long, default_value = "")]
    meal_type: String,

    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: u32,

    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting FitFuel"
    );

    let state = AppState::new(config)?;

    match cli.command {
        Command::Calories(args) => run_calories(args, cli.json),
        Command::Convert(args) => run_convert(args, cli.json),
        Command::Exercises(args) => run_exercises(&state, args, cli.json).await,
        Command::Exercise { id } => run_exercise(&state, &id, cli.json).await,
        Command::Recipes(args) => run_recipes(&state, args, cli.json).await,
    }
}

/// Initialize tracing/logging on stderr so stdout stays clean
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "fitfuel_client=info".into()
        } else {
            "fitfuel_client=debug,fitfuel=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_calories(args: CaloriesArgs, json: bool) -> Result<()> {
    let measurements = if args.imperial {
        BodyMeasurements::imperial(args.weight, args.height)
    } else {
        BodyMeasurements::metric(args.weight, args.height)
    };
    let form = CalculatorForm {
        age: args.age,
        gender: args.gender,
        measurements,
        activity_level: args.activity,
        goal: args.goal,
    };

    let result = CalculatorService::calculate(&form)?;
    if json {
        return print_json(&result);
    }
    print_calorie_result(&result, args.goal);
    Ok(())
}

fn print_calorie_result(result: &CalorieResult, goal: Goal) {
    let breakdown = result.macro_breakdown();

    println!("BMR:          {:.0} calories", result.bmr);
    println!("Maintenance:  {:.0} calories", result.maintenance);
    println!("Goal ({}): {:.0} calories", goal, result.goal_calories);
    println!();
    for (name, share) in [
        ("Protein", breakdown.protein),
        ("Carbs", breakdown.carbs),
        ("Fat", breakdown.fat),
    ] {
        println!(
            "{:<8} {:>5.0}g ({:.0} cal, {:.0}%)",
            name, share.grams, share.calories, share.percent
        );
    }
}

fn run_convert(args: ConvertArgs, json: bool) -> Result<()> {
    let form = if args.imperial {
        BodyMeasurements::imperial(args.weight, args.height)
    } else {
        BodyMeasurements::metric(args.weight, args.height)
    };
    let converted = form.toggled();
    if json {
        return print_json(&converted);
    }
    println!("{} -> {}", form, converted);
    Ok(())
}

async fn run_exercises(state: &AppState, args: ExercisesArgs, json: bool) -> Result<()> {
    let catalog = ExerciseService::load_catalog(&state.exercises).await;
    let filters = ExerciseFilters {
        search: args.search,
        body_part: args.body_part,
        equipment: args.equipment,
        target_muscle: args.target,
    };
    let page = catalog.browse(&filters, Pagination::new(args.page, CATALOG_PAGE_SIZE));

    if json {
        return print_json(&page);
    }
    if page.is_empty() {
        println!("No exercises found. Try adjusting your filters or search term.");
        return Ok(());
    }
    println!("{}", page.summary("exercises"));
    for exercise in &page.items {
        print_exercise_line(exercise);
    }
    print_page_footer(&page);
    Ok(())
}

fn print_exercise_line(exercise: &Exercise) {
    println!(
        "  [{}] {} ({} / {} / {})",
        exercise.id, exercise.name, exercise.body_part, exercise.equipment, exercise.target
    );
}

fn print_page_footer<T>(page: &Page<T>) {
    if page.total_pages > 1 {
        println!("Page {} of {}", page.page, page.total_pages);
    }
}

async fn run_exercise(state: &AppState, id: &str, json: bool) -> Result<()> {
    let catalog = ExerciseService::load_catalog(&state.exercises).await;
    let exercise = catalog.find(id)?;
    let detail = ExerciseService::exercise_detail(&state.exercises, &state.videos, exercise).await;

    if json {
        return print_json(&detail);
    }
    print_exercise_line(&detail.exercise);
    println!("  {}", detail.exercise.gif_url);
    if !detail.similar.is_empty() {
        println!("\nSimilar exercises:");
        for similar in &detail.similar {
            print_exercise_line(similar);
        }
    }
    if !detail.videos.is_empty() {
        println!("\nVideos:");
        for video in &detail.videos {
            println!(
                "  {} ({}) https://www.youtube.com/watch?v={}",
                video.title, video.channel_name, video.id
            );
        }
    }
    Ok(())
}

async fn run_recipes(state: &AppState, args: RecipesArgs, json: bool) -> Result<()> {
    let query = RecipeQuery {
        query: args.query,
        diet: args.diet,
        health: args.health,
        meal_type: args.meal_type,
        max_results: args.max_results,
    };

    let recipes = NutritionService::search_recipes(&state.recipes, &query).await?;
    let page = paginate(&recipes, Pagination::new(args.page, CATALOG_PAGE_SIZE));

    if json {
        return print_json(&page);
    }
    if page.is_empty() {
        println!("No recipes found. Try a different search term or filters.");
        return Ok(());
    }
    println!("{}", page.summary("recipes"));
    for recipe in &page.items {
        print_recipe_line(recipe);
    }
    print_page_footer(&page);
    Ok(())
}

fn print_recipe_line(recipe: &Recipe) {
    let protein = recipe
        .total_nutrients
        .procnt
        .map(|n| n.quantity)
        .unwrap_or(0.0);
    println!(
        "  {} - {:.0} cal, {:.0}g protein, {} min, serves {}",
        recipe.label, recipe.calories, protein, recipe.total_time, recipe.servings
    );
    println!("    {}", recipe.url);
}
