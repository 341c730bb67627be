// Command line front end for the UAE identifier validators

use clap::{Parser, Subcommand};
use emirates_kit::{emirates_id, BatchEntry, IdentifierKind, IdentifierResult, Outcome};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(
    name = "emirates-kit",
    about = "Validate, normalize and mask UAE identifiers",
    version,
    long_about = "Validate, normalize and mask UAE identifiers.\n\nExamples:\n  emirates-kit validate -k emirates-id 784-1990-1234567-6\n  emirates-kit batch -k mobile +971501234567 0551234567 +971401234567\n  emirates-kit mask -k iban AE070331234567890123456\n  emirates-kit --json validate -k trn 100123456700003"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log every rejected input (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate one identifier and show its parsed fields
    Validate {
        /// emirates-id, iban, trn, mobile or passport
        #[arg(short, long)]
        kind: IdentifierKind,

        value: String,
    },

    /// Validate several identifiers of the same kind
    Batch {
        #[arg(short, long)]
        kind: IdentifierKind,

        values: Vec<String>,
    },

    /// Print a display-safe masked form
    Mask {
        #[arg(short, long)]
        kind: IdentifierKind,

        value: String,
    },

    /// Print the canonical form (emirates-id and mobile only)
    Sanitize {
        #[arg(short, long)]
        kind: IdentifierKind,

        value: String,
    },

    /// Check an Emirates ID holder against a minimum age
    MinAge {
        value: String,

        #[arg(short, long, allow_negative_numbers = true)]
        age: i32,
    },

    /// Compute the check digit for the first 14 digits of an Emirates ID
    CheckDigit { prefix: String },
}

fn print_report(kind: IdentifierKind, input: &str, result: &IdentifierResult) {
    println!("{} {}", kind, kind.mask(Some(input)));
    if !result.is_valid() {
        println!(
            "  INVALID [{}] {}",
            result.error_code().map(|c| c.as_str()).unwrap_or("-"),
            result.error_message().unwrap_or("")
        );
        return;
    }

    println!("  VALID");
    match result {
        IdentifierResult::EmiratesId(info) => {
            if let Some(fields) = &info.fields {
                println!("  Birth Year: {}", fields.birth_year);
                println!("  Approximate Age: {}", fields.approximate_age);
                println!("  Check Digit: {}", fields.check_digit);
            }
        }
        IdentifierResult::Iban(info) => {
            if let Some(fields) = &info.fields {
                println!("  Bank Code: {}", fields.bank_code);
                println!("  Bank: {}", fields.bank_name.as_deref().unwrap_or("Unknown"));
            }
        }
        IdentifierResult::Mobile(info) => {
            if let Some(fields) = &info.fields {
                println!("  Prefix: {}", fields.prefix);
                println!("  Carrier: {}", fields.carrier);
            }
        }
        IdentifierResult::Trn(_) | IdentifierResult::Passport(_) => {}
    }
}

fn print_batch(kind: IdentifierKind, entries: &[BatchEntry<IdentifierResult>]) {
    for entry in entries {
        print_report(kind, entry.input.as_deref().unwrap_or(""), &entry.result);
    }
    let valid = entries.iter().filter(|e| e.is_valid()).count();
    println!("\n{} of {} valid", valid, entries.len());
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Validate { kind, value } => {
            let result = kind.validate(Some(value.as_str()));
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(kind, &value, &result);
            }
        }
        Commands::Batch { kind, values } => {
            let entries = kind.parse_many(values.iter().map(Some));
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_batch(kind, &entries);
            }
        }
        Commands::Mask { kind, value } => {
            println!("{}", kind.mask(Some(value.as_str())));
        }
        Commands::Sanitize { kind, value } => match kind.sanitize(Some(value.as_str())) {
            Some(canonical) => println!("{}", canonical),
            None => return Err(format!("{} has no canonical form", kind).into()),
        },
        Commands::MinAge { value, age } => {
            let verdict = emirates_id::meets_minimum_age(Some(value.as_str()), age)?;
            if cli.json {
                println!("{}", serde_json::json!({ "meets_minimum_age": verdict }));
            } else {
                let text = match verdict {
                    Some(true) => "yes",
                    Some(false) => "no",
                    None => "indeterminate",
                };
                println!("{}", text);
            }
        }
        Commands::CheckDigit { prefix } => {
            println!("{}", emirates_id::compute_check_digit(&prefix)?);
        }
    }

    Ok(())
}
