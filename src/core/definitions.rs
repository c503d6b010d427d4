use crate::options::OptionType;

/// Declared shape of one Deno CLI option: the value types it accepts and the
/// separator used when flag and value combine into a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefinition {
    pub types: &'static [OptionType],
    pub spacer: &'static str,
}

impl OptionDefinition {
    pub fn accepts(&self, value_type: OptionType) -> bool {
        self.types.contains(&value_type)
    }

    /// True when the option is declared with the single type `number`.
    /// Those options render as a flag token followed by a numeric token.
    pub fn is_numeric(&self) -> bool {
        matches!(self.types, [OptionType::Number])
    }

    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.as_str().to_string()).collect()
    }
}

const BOOLEAN: &[OptionType] = &[OptionType::Boolean];
const NUMBER: &[OptionType] = &[OptionType::Number];
const TEXT: &[OptionType] = &[OptionType::Text];
const LIST: &[OptionType] = &[OptionType::List];
const BOOLEAN_OR_TEXT: &[OptionType] = &[OptionType::Boolean, OptionType::Text];
const BOOLEAN_OR_LIST: &[OptionType] = &[OptionType::Boolean, OptionType::List];

const EQUALS: &str = "=";
const SPACE: &str = " ";

/// Options accepted in `deno_options` blocks, mirroring the flags `deno run`
/// takes. Permission allowlists (`--allow-net=example.com`) accept either a
/// bare boolean or a list of entries.
pub const OPTION_DEFINITIONS: &[(&str, OptionDefinition)] = &[
    (
        "allow-all",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
    (
        "allow-env",
        OptionDefinition {
            types: BOOLEAN_OR_LIST,
            spacer: EQUALS,
        },
    ),
    (
        "allow-hrtime",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
    (
        "allow-net",
        OptionDefinition {
            types: BOOLEAN_OR_LIST,
            spacer: EQUALS,
        },
    ),
    (
        "allow-plugin",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
    (
        "allow-read",
        OptionDefinition {
            types: BOOLEAN_OR_LIST,
            spacer: EQUALS,
        },
    ),
    (
        "allow-run",
        OptionDefinition {
            types: BOOLEAN_OR_LIST,
            spacer: EQUALS,
        },
    ),
    (
        "allow-write",
        OptionDefinition {
            types: BOOLEAN_OR_LIST,
            spacer: EQUALS,
        },
    ),
    (
        "cached-only",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
    (
        "cert",
        OptionDefinition {
            types: TEXT,
            spacer: EQUALS,
        },
    ),
    (
        "config",
        OptionDefinition {
            types: TEXT,
            spacer: EQUALS,
        },
    ),
    (
        "import-map",
        OptionDefinition {
            types: TEXT,
            spacer: EQUALS,
        },
    ),
    (
        "inspect",
        OptionDefinition {
            types: BOOLEAN_OR_TEXT,
            spacer: EQUALS,
        },
    ),
    (
        "inspect-brk",
        OptionDefinition {
            types: BOOLEAN_OR_TEXT,
            spacer: EQUALS,
        },
    ),
    (
        "lock",
        OptionDefinition {
            types: TEXT,
            spacer: EQUALS,
        },
    ),
    (
        "lock-write",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
    (
        "log-level",
        OptionDefinition {
            types: TEXT,
            spacer: SPACE,
        },
    ),
    (
        "no-check",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
    (
        "no-remote",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
    (
        "quiet",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
    (
        "reload",
        OptionDefinition {
            types: BOOLEAN_OR_LIST,
            spacer: EQUALS,
        },
    ),
    (
        "seed",
        OptionDefinition {
            types: NUMBER,
            spacer: EQUALS,
        },
    ),
    (
        "unstable",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
    (
        "v8-flags",
        OptionDefinition {
            types: LIST,
            spacer: EQUALS,
        },
    ),
    (
        "watch",
        OptionDefinition {
            types: BOOLEAN,
            spacer: EQUALS,
        },
    ),
];

/// Look up the declaration for an option name. `None` means the option is
/// not one `deno run` accepts.
pub fn definition(name: &str) -> Option<&'static OptionDefinition> {
    OPTION_DEFINITIONS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, definition)| definition)
}
