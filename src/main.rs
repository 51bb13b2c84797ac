//! Game of Life CLI - Run simulations from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use game_of_life::{Driver, GenerationStats, Seed, SimulationConfig};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations to run (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config = SimulationConfig::from_json_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    let mut driver = Driver::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error creating engine: {}", e);
        std::process::exit(1);
    });
    if let Err(e) = seed.apply(driver.engine_mut()) {
        eprintln!("Error applying seed: {}", e);
        std::process::exit(1);
    }

    println!("Game of Life Simulation");
    println!("=======================");
    println!("Grid: {}x{}", config.grid.rows, config.grid.cols);
    println!("Delay: {} ms", config.driver.delay_ms);
    println!("Generations: {}", generations);
    println!();

    let initial_stats = GenerationStats::from_engine(driver.engine());
    println!("Initial state:");
    println!(
        "  Population: {} ({:.1}%)",
        initial_stats.population,
        initial_stats.density() * 100.0
    );
    println!();

    println!("Running simulation...");
    let start = Instant::now();
    let report_every = (generations / 10).max(1);

    let advanced = driver.run(Some(generations), |driver| {
        let stats = GenerationStats::from_engine(driver.engine());

        if stats.generation % report_every == 0 {
            let elapsed = start.elapsed().as_secs_f32();
            println!(
                "  Generation {}/{}: population={}, changed={}, {:.1} gen/s",
                stats.generation,
                generations,
                stats.population,
                stats.changed,
                stats.generation as f32 / elapsed
            );
        }

        // A step with no changes is a fixed point; nothing further will happen.
        if stats.changed == 0 {
            log::info!("Reached a fixed point at generation {}", stats.generation);
            driver.stop();
        }
    });

    let elapsed = start.elapsed();
    let final_stats = GenerationStats::from_engine(driver.engine());

    println!();
    println!("Final state:");
    println!("{}", serde_json::to_string_pretty(&final_stats).unwrap_or_default());
    println!();
    println!(
        "Time: {:.2}s ({} generations)",
        elapsed.as_secs_f32(),
        advanced
    );
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
