use crate::commands::{print_json, Context};
use crate::error::{invalid_input, rejected};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    pub email: String,
    /// Parse the argument as a JSON value instead of a plain string
    #[arg(long)]
    pub value_json: bool,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    pub email: String,
    /// Parse the argument as a JSON value instead of a plain string
    #[arg(long)]
    pub value_json: bool,
}

#[derive(Debug, Serialize)]
struct ValidateDto<'a> {
    input: &'a Value,
    valid: bool,
}

#[derive(Debug, Serialize)]
struct NormalizeDto<'a> {
    input: &'a Value,
    normalized: String,
}

pub fn validate(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    let input = read_input(&args.email, args.value_json)?;
    let valid = ctx.validator.validate_value(&input)?;
    debug!(valid, "validated input");

    if ctx.json {
        print_json(&ValidateDto {
            input: &input,
            valid,
        })?;
    } else if valid {
        println!("Valid: {}", display_input(&input));
    } else {
        println!("Invalid: {}", display_input(&input));
    }

    if !valid {
        return Err(rejected(display_input(&input)));
    }
    Ok(())
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let input = read_input(&args.email, args.value_json)?;
    let normalized = ctx.validator.normalize_value(&input)?;
    debug!(normalized = %normalized, "normalized input");

    if ctx.json {
        print_json(&NormalizeDto {
            input: &input,
            normalized,
        })?;
    } else {
        println!("Normalized: {}", normalized);
    }
    Ok(())
}

fn display_input(input: &Value) -> String {
    match input.as_str() {
        Some(text) => text.to_string(),
        None => input.to_string(),
    }
}

fn read_input(raw: &str, as_json: bool) -> Result<Value> {
    if !as_json {
        return Ok(Value::String(raw.to_string()));
    }
    serde_json::from_str(raw).map_err(|err| invalid_input(format!("value is not JSON: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{display_input, read_input};
    use serde_json::json;

    #[test]
    fn read_input_wraps_plain_text() {
        let value = read_input("42", false).expect("input");
        assert_eq!(value, json!("42"));
    }

    #[test]
    fn read_input_parses_json_values() {
        assert_eq!(read_input("42", true).expect("number"), json!(42));
        assert_eq!(read_input("null", true).expect("null"), json!(null));
        assert_eq!(
            read_input("\"a@b.co\"", true).expect("string"),
            json!("a@b.co")
        );
    }

    #[test]
    fn read_input_rejects_malformed_json() {
        let err = read_input("{oops", true).unwrap_err();
        assert!(err.to_string().contains("value is not JSON"));
    }

    #[test]
    fn display_input_unquotes_json_strings() {
        let value = read_input("\"a@b.co\"", true).expect("string");
        assert_eq!(display_input(&value), "a@b.co");
        assert_eq!(display_input(&json!(42)), "42");
    }
}
