//! Interactive word cloud generator.
//!
//! Reads `data.txt` from the working directory, prints the top word counts,
//! previews the rendered cloud in the system image viewer, and offers to
//! save it as a PNG.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use rapid_wordcloud::{config, CloudError, GeneratedCloud, WordCloud};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const INPUT_FILE: &str = "data.txt";
const DEFAULT_OUTPUT: &str = "wordcloud.png";
const TOP_WORDS: usize = 10;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::WARN)
        .init();

    println!("=== Word Cloud Generator ===");
    println!("Let's make a word cloud from your text!\n");

    let text = match std::fs::read_to_string(INPUT_FILE) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            println!("Sorry, couldn't find '{INPUT_FILE}' in this folder.");
            return Ok(());
        }
        Err(err) => {
            println!("Something went wrong reading '{INPUT_FILE}': {err}");
            return Ok(());
        }
    };
    if text.trim().is_empty() {
        println!("Looks like '{INPUT_FILE}' is empty.");
        return Ok(());
    }

    let settings = config::load_from_dir(Path::new("."));

    println!("Making your word cloud...");
    let cloud = match WordCloud::new().with_config(settings).generate_from_text(&text) {
        Ok(cloud) => cloud,
        Err(CloudError::EmptyVocabulary) => {
            println!("No countable words left after filtering stopwords.");
            return Ok(());
        }
        Err(err) => {
            println!("Couldn't generate the word cloud: {err}");
            return Ok(());
        }
    };

    print_word_table(&cloud);
    preview(&cloud);

    let choice = prompt("\nWant to save your word cloud? (y/n): ")?;
    if matches!(choice.to_lowercase().as_str(), "y" | "yes") {
        let mut filename = prompt("Enter a filename (or press Enter for default): ")?;
        if filename.is_empty() {
            filename = DEFAULT_OUTPUT.to_string();
        } else if !filename.ends_with(".png") {
            filename.push_str(".png");
        }
        match cloud.save(Path::new(&filename)) {
            Ok(()) => println!("Saved the word cloud as '{filename}'"),
            Err(err) => println!("Oops, couldn't save the file: {err}"),
        }
    }

    println!("\nThanks for trying the Word Cloud Generator!");
    Ok(())
}

fn print_word_table(cloud: &GeneratedCloud) {
    println!("\nTop {TOP_WORDS} words:");
    for entry in cloud.frequencies.top_n(TOP_WORDS) {
        println!("{:<15} {}", entry.word, entry.count);
    }
    println!(
        "\n{} words counted, {} distinct, {} placed on the canvas",
        cloud.frequencies.total(),
        cloud.frequencies.len(),
        cloud.placements.len()
    );
}

/// Hand a temp copy of the image to the platform viewer. Never fatal.
fn preview(cloud: &GeneratedCloud) {
    let path = std::env::temp_dir().join("rapid-wordcloud-preview.png");
    if let Err(err) = cloud.save(&path) {
        tracing::warn!(%err, "could not write the preview image");
        return;
    }
    println!("Showing your word cloud...");
    if let Err(err) = open::that(&path) {
        tracing::warn!(%err, "could not open the preview in the system viewer");
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
