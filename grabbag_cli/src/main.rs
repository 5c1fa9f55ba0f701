use grabbag_core::config::GrabbagConfig;
use grabbag_core::feed::{apply_comment_limit, parse_comment_feed};
use grabbag_core::picker::{ExhaustiveRandomPicker, Picker};

use clap::Parser;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(short, long, value_parser)]
    config_file: Option<PathBuf>,
    #[clap(short, long)]
    draws: Option<u64>,
    #[clap(short, long)]
    seed: Option<u64>,
    #[clap(long)]
    comments_file: Option<PathBuf>,
    #[clap(long)]
    max_comments: Option<usize>,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let mut config = match cli.config_file {
        Some(config_path) => {
            println!("Reading settings from {config_path:?}");
            GrabbagConfig::load_from_file(&config_path)?
        }
        None => {
            // Without --config-file, try config.toml in the working
            // directory before falling back to the built-in defaults.
            let fallback_path = PathBuf::from("config.toml");
            if fallback_path.exists() {
                println!("Reading settings from {fallback_path:?} (no --config-file given)");
                GrabbagConfig::load_from_file(&fallback_path)?
            } else {
                println!("No settings file found, running with built-in defaults.");
                GrabbagConfig::default()
            }
        }
    };

    if let Some(draws) = cli.draws {
        config.picker.get_or_insert_with(Default::default).draws = draws;
    }
    if let Some(seed) = cli.seed {
        config.picker.get_or_insert_with(Default::default).seed = Some(seed);
    }
    if let Some(comments_file) = cli.comments_file {
        config
            .feed
            .get_or_insert_with(Default::default)
            .comments_path = Some(comments_file);
    }
    if let Some(max_comments) = cli.max_comments {
        config
            .feed
            .get_or_insert_with(Default::default)
            .max_comments = max_comments;
    }

    println!("Effective configuration: {config:#?}");

    let picker_settings = config.picker.unwrap_or_default();
    let seed = match picker_settings.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default(),
    };
    println!("Greeting seed: {seed} (pass --seed {seed} to replay this run)");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut picker: Box<dyn Picker<String>> = Box::new(
        ExhaustiveRandomPicker::from_items(picker_settings.phrases.clone())?,
    );

    let pool_size = picker_settings.phrases.len();
    println!(
        "Drawing {} greetings from a pool of {}...",
        picker_settings.draws, pool_size
    );
    for i in 0..picker_settings.draws {
        let greeting = picker.draw(&mut rng);
        let position_in_cycle = (i as usize % pool_size) + 1;
        println!("[{position_in_cycle}/{pool_size}] {greeting}");
    }

    if let Some(feed_settings) = config.feed {
        if let Some(comments_path) = &feed_settings.comments_path {
            println!("Rendering comment feed from {comments_path:?}...");
            let feed_json = std::fs::read_to_string(comments_path).map_err(|e| {
                anyhow::anyhow!("Failed to read comments file at {:?}: {}", comments_path, e)
            })?;
            let mut comments = parse_comment_feed(&feed_json)?;
            let total = comments.len();
            apply_comment_limit(&mut comments, feed_settings.max_comments);
            println!("Showing {} of {} comments:", comments.len(), total);
            for comment in &comments {
                let author = comment.email.as_deref().unwrap_or("anonymous");
                match &comment.timestamp {
                    Some(timestamp) => {
                        println!("  #{} {author} ({timestamp}): {}", comment.id, comment.text)
                    }
                    None => println!("  #{} {author}: {}", comment.id, comment.text),
                }
            }
        }
    }

    Ok(())
}
