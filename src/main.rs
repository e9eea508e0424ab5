use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use colored::*;
use std::time::Instant;

mod cli;
mod dictionary;
mod label;
mod models;
mod search;

use cli::{Args, Command};
use label::{get_label_rows, is_autosar_conformant_label};
use models::{Keyword, ValidationResult};
use search::{filter_data, validate_search, SearchOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let dict = dictionary::load_dictionary(&args.dictionary)
        .with_context(|| format!("loading dictionary {}", args.dictionary.display()))?;
    let json_output = args.format == "json";

    match args.command {
        Command::Search {
            query,
            no_fuzzy,
            no_spell_check,
            no_stemming,
            max_results,
        } => {
            let options = SearchOptions {
                use_fuzzy: !no_fuzzy,
                use_spell_check: !no_spell_check,
                use_stemming: !no_stemming,
            };
            handle_search(&dict, &query, &options, max_results, json_output)
        }
        Command::Validate { label } => handle_validate(&dict, &label, json_output),
        Command::Conform { label } => {
            let outcome = is_autosar_conformant_label(&label, &dict);
            if json_output {
                println!("{}", serde_json::to_string(outcome.as_str())?);
            } else {
                println!("{} {}", "Label:".bold().green(), label);
                println!("{} {}", "Conformance:".bold().green(), outcome);
            }
            Ok(())
        }
    }
}

fn handle_search(
    dict: &[Keyword],
    query: &str,
    options: &SearchOptions,
    max_results: Option<usize>,
    json_output: bool,
) -> Result<()> {
    let check = validate_search(query);
    if !check.is_valid {
        anyhow::bail!(check.message.unwrap_or_else(|| "invalid search".to_string()));
    }

    let start_time = Instant::now();
    let mut results = filter_data(dict, query, options);
    if let Some(max) = max_results {
        results.truncate(max);
    }
    let duration = start_time.elapsed();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{} {}", "Query:".bold().green(), query);

    let mut advanced_options = Vec::<String>::new();
    if !options.use_fuzzy {
        advanced_options.push("Fuzzy match disabled".to_string());
    }
    if !options.use_spell_check {
        advanced_options.push("Spell check disabled".to_string());
    }
    if !options.use_stemming {
        advanced_options.push("Stemming disabled".to_string());
    }
    if !advanced_options.is_empty() {
        println!(
            "{} {}",
            "Options:".bold().green(),
            advanced_options.join(", ")
        );
    }

    if results.is_empty() {
        println!("{}", "No results found.".yellow().bold());
        println!("Search completed in {:.2?}", duration);
        return Ok(());
    }

    println!("Search completed in {:.2?}", duration);
    println!();
    for entry in &results {
        let mut line = format!(
            "{}  {} / {}  [{}]  {}",
            entry.abbr_name.bold(),
            entry.long_name_en,
            entry.long_name_de,
            entry.rb_classifications.join(", "),
            entry.life_cycle_state
        );
        if entry.life_cycle_state.eq_ignore_ascii_case("obsolete") {
            if let Some(replacement) = &entry.use_instead_abbr_name {
                line.push_str(&format!("  use instead: {replacement}"));
            }
        }
        println!("{line}");
    }
    println!();
    println!("Found {} result(s)", results.len());
    Ok(())
}

fn handle_validate(dict: &[Keyword], label: &str, json_output: bool) -> Result<()> {
    let result: ValidationResult = get_label_rows(label, dict);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{} {}", "Label:".bold().green(), label);
    if result.rows.is_empty() {
        println!("{}", result.message.red().bold());
        return Ok(());
    }

    println!();
    for row in &result.rows {
        let mut line = format!(
            "{:<12} [{}]  {} / {}  {}",
            row.abbr_name,
            row.rb_classifications.join(", "),
            row.long_name_en,
            row.long_name_de,
            row.life_cycle_state
        );
        if let Some(replacement) = &row.use_instead_abbr_name {
            line.push_str(&format!("  use instead: {replacement}"));
        }
        println!("{line}");
    }
    println!();

    if result.message.is_empty() {
        println!("{}", "Label is valid.".green().bold());
    } else {
        for msg in &result.consolidated_messages {
            println!("{}", msg.text.red().bold());
        }
    }
    Ok(())
}
