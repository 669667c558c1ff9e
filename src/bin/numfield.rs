//! CLI tool for numeric input filtering.
//!
//! # Usage
//!
//! ```bash
//! # List policies
//! numfield policies
//!
//! # Type keystrokes into a field and show each state
//! numfield type --policy leading-zero 0 0 5
//!
//! # Apply one edit
//! numfield edit --policy currency --text '$1,234' --start 6 5
//!
//! # Run the post-edit normalizer over full texts
//! numfield normalize --policy rollback 42 1000000000000000000
//!
//! # Render a value as currency
//! numfield currency 1234567
//!
//! # Type into a field of the demo form (or a JSON form)
//! numfield demo --field "With Complex Delegate Filter" 0 0 5
//! ```
//!
//! Set `RUST_LOG=debug` to see rejected and rewritten edits.

use clap::{Parser, Subcommand, ValueEnum};
use numeric_field::currency::format_currency;
use numeric_field::form::{Form, FormConfig};
use numeric_field::stream::KeystrokeExt;
use numeric_field::{EditOutcome, InputField, Policy, WholeNumber};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "numfield")]
#[command(author, version, about = "Numeric text input filtering tool")]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available policies
    Policies,

    /// Type keystrokes into an empty field, showing the text after each
    Type {
        /// Policy attached to the field
        #[arg(short, long)]
        policy: Policy,

        /// Maximum for bounded policies
        #[arg(short, long)]
        maximum: Option<WholeNumber>,

        /// Keystrokes, appended to the end of the text in order
        keys: Vec<String>,
    },

    /// Apply a single edit to some text
    Edit {
        /// Policy attached to the field
        #[arg(short, long)]
        policy: Policy,

        /// Text before the edit
        #[arg(short, long, default_value = "")]
        text: String,

        /// Start of the edited range (chars)
        #[arg(short, long)]
        start: Option<usize>,

        /// Length of the edited range (chars)
        #[arg(short, long, default_value = "0")]
        length: usize,

        /// Replacement text
        #[arg(default_value = "")]
        replacement: String,
    },

    /// Run a post-edit normalizer over successive full texts
    Normalize {
        /// whole-number or rollback
        #[arg(short, long, default_value = "whole-number")]
        policy: Policy,

        /// Texts, as the field would hold them after each change
        texts: Vec<String>,
    },

    /// Render a whole number as currency
    Currency {
        /// Value (non-digits are ignored)
        value: String,
    },

    /// Type into a field of a form
    Demo {
        /// JSON form configuration (defaults to the built-in demo form)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Placeholder of the field to type into (all fields if omitted)
        #[arg(short, long)]
        field: Option<String>,

        /// Keystrokes
        keys: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = cli.output;

    match cli.command {
        Commands::Policies => cmd_policies(output),
        Commands::Type {
            policy,
            maximum,
            keys,
        } => cmd_type(policy, maximum, &keys, output),
        Commands::Edit {
            policy,
            text,
            start,
            length,
            replacement,
        } => cmd_edit(policy, &text, start, length, &replacement, output),
        Commands::Normalize { policy, texts } => cmd_normalize(policy, &texts, output),
        Commands::Currency { value } => cmd_currency(&value, output),
        Commands::Demo {
            config,
            field,
            keys,
        } => cmd_demo(config, field.as_deref(), &keys, output),
    }
}

fn cmd_policies(output: OutputFormat) -> ExitCode {
    match output {
        OutputFormat::Text => {
            for policy in Policy::ALL {
                println!("{:<14} {}", policy.name(), policy.description());
            }
        }
        OutputFormat::Json => {
            let list: Vec<_> = Policy::ALL
                .iter()
                .map(|p| json!({ "name": p.name(), "description": p.description() }))
                .collect();
            println!("{}", json!(list));
        }
    }
    ExitCode::SUCCESS
}

fn cmd_type(
    policy: Policy,
    maximum: Option<WholeNumber>,
    keys: &[String],
    output: OutputFormat,
) -> ExitCode {
    if maximum.is_some() && !policy.is_bounded() {
        eprintln!("Error: {} has no maximum", policy);
        return ExitCode::FAILURE;
    }
    let field = InputField::with_maximum(policy, maximum.unwrap_or_else(WholeNumber::max_accepted));
    let states: Vec<String> = keys.iter().replay_into(field).collect();

    match output {
        OutputFormat::Text => {
            for (key, state) in keys.iter().zip(&states) {
                println!("{:>8} -> {:?}", format!("{:?}", key), state);
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({ "policy": policy.name(), "keys": keys, "states": states })
            );
        }
    }
    ExitCode::SUCCESS
}

fn cmd_edit(
    policy: Policy,
    text: &str,
    start: Option<usize>,
    length: usize,
    replacement: &str,
    output: OutputFormat,
) -> ExitCode {
    let mut field = InputField::new(policy);
    field.set_text(text);
    let start = start.unwrap_or_else(|| field.len());

    let decision = field.preview(start, length, replacement);
    let outcome = field.replace_range(start, length, replacement);

    let outcome_name = match outcome {
        EditOutcome::Accepted => "accepted",
        EditOutcome::Rewritten => "rewritten",
        EditOutcome::Rejected => "rejected",
    };

    match output {
        OutputFormat::Text => {
            println!("Outcome: {}", outcome_name);
            println!("Accept: {}", decision.accepts());
            println!("Text: {:?}", field.text());
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    "outcome": outcome_name,
                    "accept": decision.accepts(),
                    "new_text": decision.new_text(),
                    "text": field.text(),
                })
            );
        }
    }

    if outcome == EditOutcome::Rejected {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn cmd_normalize(policy: Policy, texts: &[String], output: OutputFormat) -> ExitCode {
    let mut hooks = policy.hooks(WholeNumber::max_accepted());
    if !hooks.has_post_edit() {
        eprintln!("Error: {} has no post-edit normalizer", policy);
        return ExitCode::FAILURE;
    }

    let results: Vec<String> = texts
        .iter()
        .filter_map(|text| hooks.normalize(text))
        .collect();

    match output {
        OutputFormat::Text => {
            for (text, result) in texts.iter().zip(&results) {
                println!("{:?} -> {:?}", text, result);
            }
        }
        OutputFormat::Json => {
            println!("{}", json!({ "inputs": texts, "outputs": results }));
        }
    }
    ExitCode::SUCCESS
}

fn cmd_currency(value: &str, output: OutputFormat) -> ExitCode {
    match WholeNumber::parse_lenient(value) {
        Ok(number) => {
            let formatted = format_currency(&number);
            match output {
                OutputFormat::Text => println!("{}", formatted),
                OutputFormat::Json => {
                    println!("{}", json!({ "value": number.as_str(), "formatted": formatted }))
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_demo(
    config: Option<PathBuf>,
    field: Option<&str>,
    keys: &[String],
    output: OutputFormat,
) -> ExitCode {
    let config = match config {
        Some(path) => match FormConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => FormConfig::demo(),
    };

    let mut form = match Form::build(&config) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(fields = form.len(), "form ready");

    let placeholders: Vec<String> = match field {
        Some(name) => match form.field(name) {
            Some(f) => vec![f.placeholder_text().to_string()],
            None => {
                eprintln!("Error: no field named '{}'", name);
                return ExitCode::FAILURE;
            }
        },
        None => config.fields.iter().map(|f| f.placeholder.clone()).collect(),
    };

    let mut rows = Vec::with_capacity(placeholders.len());
    for placeholder in &placeholders {
        let Some(target) = form.field_mut(placeholder) else {
            continue;
        };
        for key in keys {
            if key.chars().count() == 1 {
                target.type_str(key);
            } else if let Err(e) = target.paste(key) {
                tracing::warn!(field = %placeholder, error = %e, "paste refused");
            }
        }
        rows.push((placeholder.clone(), target.policy(), target.text().to_string()));
    }

    match output {
        OutputFormat::Text => {
            for (placeholder, policy, text) in &rows {
                println!("{:<30} {:<14} {:?}", placeholder, policy.name(), text);
            }
        }
        OutputFormat::Json => {
            let list: Vec<_> = rows
                .iter()
                .map(|(placeholder, policy, text)| {
                    json!({ "field": placeholder, "policy": policy.name(), "text": text })
                })
                .collect();
            println!("{}", json!(list));
        }
    }
    ExitCode::SUCCESS
}
