//! Serializable reports printed by the probe commands.

use flagschema_core::{ArgValue, Args, ArgsError, ErrorCode, MarshalerRegistry, ValueKind};
use serde::Serialize;

use crate::config::OutputFormat;

/// Plain-text rendering for the `text` output format.
pub trait TextReport {
    fn to_text(&self) -> String;
}

/// Formats a report in the requested output format.
pub fn render<T: Serialize + TextReport>(report: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => Ok(report.to_text()),
    }
}

/// One declared flag after a parse.
#[derive(Debug, Serialize)]
pub struct FlagReport {
    pub id: char,
    pub kind: ValueKind,
    pub present: bool,
    pub value: ArgValue,
}

/// Outcome of a successful parse.
#[derive(Debug, Serialize)]
pub struct ParseReport {
    pub schema: String,
    pub usage: String,
    pub cardinality: usize,
    pub flags: Vec<FlagReport>,
}

impl ParseReport {
    pub fn from_args(args: &Args) -> Self {
        let flags = args
            .declared()
            .map(|(id, kind)| FlagReport {
                id,
                kind,
                present: args.has(id),
                value: args.get(id).unwrap_or_else(|| kind.zero()),
            })
            .collect();

        Self {
            schema: args.schema().to_string(),
            usage: args.usage(),
            cardinality: args.cardinality(),
            flags,
        }
    }
}

impl TextReport for ParseReport {
    fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("usage: {}\n", self.usage));
        out.push_str(&format!("found: {}\n", self.cardinality));
        for flag in &self.flags {
            let presence = if flag.present { "present" } else { "absent" };
            out.push_str(&format!(
                "  -{} {:<8} {:<8} {}\n",
                flag.id, flag.kind, presence, flag.value
            ));
        }
        out
    }
}

/// A declared flag and its kind.
#[derive(Debug, Serialize)]
pub struct DeclaredFlag {
    pub id: char,
    pub kind: ValueKind,
    pub takes_parameter: bool,
}

/// Outcome of compiling a schema without tokens.
#[derive(Debug, Serialize)]
pub struct SchemaReport {
    pub schema: String,
    pub usage: String,
    pub flags: Vec<DeclaredFlag>,
}

impl SchemaReport {
    pub fn from_args(args: &Args) -> Self {
        Self {
            schema: args.schema().to_string(),
            usage: args.usage(),
            flags: args
                .declared()
                .map(|(id, kind)| DeclaredFlag {
                    id,
                    kind,
                    takes_parameter: kind.takes_parameter(),
                })
                .collect(),
        }
    }
}

impl TextReport for SchemaReport {
    fn to_text(&self) -> String {
        let mut out = format!("usage: {}\n", self.usage);
        for flag in &self.flags {
            if flag.takes_parameter {
                out.push_str(&format!("  -{} <{}>\n", flag.id, flag.kind));
            } else {
                out.push_str(&format!("  -{}\n", flag.id));
            }
        }
        out
    }
}

/// A rejected schema or token list.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub argument_id: Option<char>,
    pub parameter: Option<String>,
    pub message: String,
}

impl From<&ArgsError> for ErrorReport {
    fn from(err: &ArgsError) -> Self {
        Self {
            code: err.code(),
            argument_id: err.argument_id(),
            parameter: err.parameter().map(String::from),
            message: err.to_string(),
        }
    }
}

impl TextReport for ErrorReport {
    fn to_text(&self) -> String {
        format!("rejected: {}\n", self.message)
    }
}

/// A registered type tag.
#[derive(Debug, Serialize)]
pub struct TagEntry {
    pub tag: String,
    pub kind: ValueKind,
}

/// Type tags known to a registry.
#[derive(Debug, Serialize)]
pub struct TagsReport {
    pub tags: Vec<TagEntry>,
}

impl TagsReport {
    pub fn from_registry(registry: &MarshalerRegistry) -> Self {
        let tags = registry
            .tags()
            .into_iter()
            .filter_map(|tag| {
                let factory = registry.lookup(tag)?;
                Some(TagEntry {
                    tag: tag.to_string(),
                    kind: factory().kind(),
                })
            })
            .collect();
        Self { tags }
    }
}

impl TextReport for TagsReport {
    fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.tags {
            let tag = if entry.tag.is_empty() {
                "(none)"
            } else {
                entry.tag.as_str()
            };
            out.push_str(&format!("{tag:<6} {}\n", entry.kind));
        }
        out
    }
}
