//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 500 products (default)
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p catalog-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! ## Generated Products
//! Creates products across the closed category set, each with:
//! - A name drawn from the category's sample list
//! - A deterministic price in the $0.99 - $199.99 range
//! - Alternating availability

use rust_decimal::Decimal;
use std::env;

use catalog_core::{Category, Product};
use catalog_db::{Database, DbConfig};

/// Sample product names per category.
const CATALOG: &[(Category, &[&str])] = &[
    (
        Category::Cloths,
        &["Fedora", "Sneakers", "Shirt", "Jeans", "Scarf", "Gloves", "Raincoat", "Belt"],
    ),
    (
        Category::Food,
        &["Apple", "Banana", "Coffee", "Pasta", "Rice", "Honey", "Oatmeal", "Peanut Butter"],
    ),
    (
        Category::Housewares,
        &["Pots", "Towels", "Blender", "Kettle", "Cutting Board", "Lamp", "Vase", "Broom"],
    ),
    (
        Category::Automotive,
        &["Car Wax", "Motor Oil", "Wiper Blades", "Air Freshener", "Jump Starter", "Tire Gauge"],
    ),
    (
        Category::Tools,
        &["Hammer", "Toolbox", "Wrench", "Screwdriver", "Drill", "Saw", "Pliers", "Level"],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 500;
    let mut db_path = String::from("./catalog_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 500)");
                println!("  -d, --db <PATH>    Database file path (default: ./catalog_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Catalog Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("Connected, migrations applied");

    // Check existing products
    let repo = db.products();
    let existing = repo.count().await?;
    if existing > 0 {
        println!("Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Generate products
    println!();
    println!("Generating products...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    'outer: for variant in 0usize.. {
        for (category, names) in CATALOG {
            for (name_idx, name) in names.iter().enumerate() {
                if generated >= count {
                    break 'outer;
                }

                let mut product = generate_product(*category, name, name_idx + variant * 100);
                if let Err(e) = repo.create(&mut product).await {
                    eprintln!("Failed to insert {}: {}", product.name, e);
                    continue;
                }

                generated += 1;
                if generated % 100 == 0 {
                    println!("  Generated {} products...", generated);
                }
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("Generated {} products in {:?}", generated, elapsed);

    // Spot-check a filter path
    let available = repo.find_by_availability(None).await?;
    println!("  Available products: {}", available.len());

    println!();
    println!("Seed complete!");

    db.close().await;
    Ok(())
}

/// Generates a single product with deterministic sample data.
fn generate_product(category: Category, name: &str, seed: usize) -> Product {
    // Price in cents, $0.99 .. $199.99
    let price_cents = 99 + ((seed * 731) % 19_900) as i64;

    Product {
        id: None,
        name: name.to_string(),
        description: format!("{} ({})", name, category),
        price: Decimal::new(price_cents, 2),
        available: seed % 3 != 0,
        category,
    }
}
