use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::definitions;
use crate::error::{Error, Result};

/// Semantic type tag of a Deno option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Boolean,
    Number,
    Text,
    List,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Boolean => "boolean",
            OptionType::Number => "number",
            OptionType::Text => "string",
            OptionType::List => "string[]",
        }
    }
}

/// One Deno option value as written in config or supplied by a caller.
///
/// Untagged so that plain YAML/JSON scalars classify into the matching
/// variant at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
    Number(Number),
    Text(String),
    List(Vec<String>),
}

impl OptionValue {
    pub fn option_type(&self) -> OptionType {
        match self {
            OptionValue::Boolean(_) => OptionType::Boolean,
            OptionValue::Number(_) => OptionType::Number,
            OptionValue::Text(_) => OptionType::Text,
            OptionValue::List(_) => OptionType::List,
        }
    }
}

/// Ordered option name -> value entries. Iteration order is the order the
/// entries were declared, and it carries through to the rendered tokens.
pub type DenoOptions = IndexMap<String, OptionValue>;

/// One token of the rendered argument sequence.
///
/// Options declared `number` contribute their value as a separate numeric
/// token; the invocation layer stringifies at its own boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CliArgument {
    Text(String),
    Number(Number),
}

impl CliArgument {
    pub fn to_arg_string(&self) -> String {
        match self {
            CliArgument::Text(text) => text.clone(),
            CliArgument::Number(number) => number.to_string(),
        }
    }
}

impl std::fmt::Display for CliArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliArgument::Text(text) => write!(f, "{}", text),
            CliArgument::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Render an ordered option map into CLI argument tokens for `deno run`.
///
/// Each entry is validated against the option definitions table and rendered
/// independently; the results are concatenated in entry order. Any entry with
/// an unknown name or a value type the option does not declare fails the
/// whole call, so a partial argument list is never produced.
pub fn build_cli_options_args(options: &DenoOptions) -> Result<Vec<CliArgument>> {
    let mut args = Vec::new();

    for (name, value) in options {
        transform_option(name, value, &mut args)?;
    }

    Ok(args)
}

fn transform_option(name: &str, value: &OptionValue, out: &mut Vec<CliArgument>) -> Result<()> {
    let definition = definitions::definition(name)
        .ok_or_else(|| Error::unsupported_option_value(name, value.option_type().as_str(), None))?;

    if !definition.accepts(value.option_type()) {
        return Err(Error::unsupported_option_value(
            name,
            value.option_type().as_str(),
            Some(definition.type_names()),
        ));
    }

    let flag = format!("--{}", name);

    match value {
        // `false` suppresses the option entirely (validated above, so
        // `false` for a non-boolean option has already errored).
        OptionValue::Boolean(false) => {}
        OptionValue::Boolean(true) => out.push(CliArgument::Text(flag)),
        OptionValue::Number(number) if definition.is_numeric() => {
            out.push(CliArgument::Text(flag));
            out.push(CliArgument::Number(number.clone()));
        }
        other => out.push(CliArgument::Text(format!(
            "{}{}{}",
            flag,
            definition.spacer,
            normalize_value(other)
        ))),
    }

    Ok(())
}

/// Collapse a value to the string form used in combined `--name<spacer>value`
/// tokens. String arrays join into one comma-separated list.
fn normalize_value(value: &OptionValue) -> String {
    match value {
        OptionValue::Text(text) => text.clone(),
        OptionValue::List(items) => items.join(","),
        OptionValue::Number(number) => number.to_string(),
        OptionValue::Boolean(boolean) => boolean.to_string(),
    }
}
