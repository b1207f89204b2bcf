use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use mailcanon_core::EmailValidator;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Replace the configured samples (repeatable)
    #[arg(long = "sample")]
    pub samples: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct DemoEntryDto {
    input: String,
    valid: bool,
    normalized: Option<String>,
    error: Option<String>,
}

pub fn run_demo(ctx: &Context<'_>, args: DemoArgs) -> Result<()> {
    let samples = if args.samples.is_empty() {
        ctx.config.demo.samples.clone()
    } else {
        args.samples
    };
    debug!(count = samples.len(), "running demo samples");

    let entries: Vec<DemoEntryDto> = samples
        .into_iter()
        .map(|sample| evaluate(ctx.validator, sample))
        .collect();

    if ctx.json {
        return print_json(&entries);
    }

    for entry in entries {
        if !entry.valid {
            println!("Invalid: {}", entry.input);
            continue;
        }
        println!("Valid: {}", entry.input);
        if let Some(normalized) = entry.normalized {
            println!("Normalized: {}", normalized);
        }
        if let Some(error) = entry.error {
            println!("Error: {}", error);
        }
    }
    Ok(())
}

fn evaluate(validator: &EmailValidator, input: String) -> DemoEntryDto {
    if !validator.validate(&input) {
        return DemoEntryDto {
            input,
            valid: false,
            normalized: None,
            error: None,
        };
    }
    match validator.normalize(&input) {
        Ok(normalized) => DemoEntryDto {
            input,
            valid: true,
            normalized: Some(normalized),
            error: None,
        },
        Err(err) => DemoEntryDto {
            input,
            valid: true,
            normalized: None,
            error: Some(err.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, DemoEntryDto};
    use mailcanon_core::EmailValidator;

    #[test]
    fn evaluate_reports_normalized_form() {
        let validator = EmailValidator::new();
        let entry = evaluate(&validator, "bob.smith@example.com".to_string());
        assert_eq!(
            entry,
            DemoEntryDto {
                input: "bob.smith@example.com".to_string(),
                valid: true,
                normalized: Some("bobsmith@example.com".to_string()),
                error: None,
            }
        );
    }

    #[test]
    fn evaluate_marks_invalid_without_normalizing() {
        let validator = EmailValidator::new();
        let entry = evaluate(&validator, "invalid.email".to_string());
        assert!(!entry.valid);
        assert!(entry.normalized.is_none());
        assert!(entry.error.is_none());
    }

    #[test]
    fn evaluate_surfaces_normalize_errors() {
        let validator = EmailValidator::new();
        let entry = evaluate(&validator, "..@example.com".to_string());
        assert!(entry.valid);
        assert_eq!(
            entry.error.as_deref(),
            Some("cannot normalize an invalid email address")
        );
    }
}
