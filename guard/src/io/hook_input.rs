//! Parsing of the JSON payload a host sends before running a tool.

use std::io::{self, Read};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::types::{Operation, OperationKind};

/// Raw payload read from stdin. Extra fields sent by hosts are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    #[serde(alias = "operation_kind")]
    pub tool_name: String,
    #[serde(default, alias = "operation_input")]
    pub tool_input: Value,
}

/// What the gate should do with a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    /// A file operation subject to containment checks.
    Gated(Operation),
    /// A tool the gate does not apply to.
    NotGated { tool_name: String },
    /// Payload that could not be understood.
    Malformed { reason: String },
}

/// Read the whole payload from stdin as raw bytes.
pub fn read_stdin() -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    io::stdin()
        .read_to_end(&mut raw)
        .context("read hook input from stdin")?;
    Ok(raw)
}

/// Parse a raw byte payload. Invalid UTF-8 is malformed, not an error.
pub fn parse_hook_bytes(raw: &[u8]) -> ParsedInput {
    match std::str::from_utf8(raw) {
        Ok(raw) => parse_hook_input(raw),
        Err(err) => ParsedInput::Malformed {
            reason: format!("decode hook input: {err}"),
        },
    }
}

/// Parse a raw payload. Never fails; bad input becomes [`ParsedInput::Malformed`].
pub fn parse_hook_input(raw: &str) -> ParsedInput {
    let raw = raw.trim();
    if raw.is_empty() {
        return ParsedInput::Malformed {
            reason: "empty input".to_string(),
        };
    }
    let input: HookInput = match serde_json::from_str(raw) {
        Ok(input) => input,
        Err(err) => {
            return ParsedInput::Malformed {
                reason: format!("parse hook input: {err}"),
            };
        }
    };
    let Some(kind) = OperationKind::from_tool_name(&input.tool_name) else {
        return ParsedInput::NotGated {
            tool_name: input.tool_name,
        };
    };
    match parse_operation(kind, input.tool_input) {
        Ok(operation) => ParsedInput::Gated(operation),
        Err(err) => ParsedInput::Malformed {
            reason: format!("parse {kind} input: {err}"),
        },
    }
}

/// Decode kind-specific fields. A missing `tool_input` has no fields.
pub fn parse_operation(kind: OperationKind, tool_input: Value) -> serde_json::Result<Operation> {
    let tool_input = match tool_input {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    Ok(match kind {
        OperationKind::Read => Operation::Read(fields(tool_input)?),
        OperationKind::Write => Operation::Write(fields(tool_input)?),
        OperationKind::Edit => Operation::Edit(fields(tool_input)?),
        OperationKind::MultiEdit => Operation::MultiEdit(fields(tool_input)?),
        OperationKind::Glob => Operation::Glob(fields(tool_input)?),
        OperationKind::Grep => Operation::Grep(fields(tool_input)?),
    })
}

fn fields<T: DeserializeOwned>(value: Value) -> serde_json::Result<T> {
    serde_json::from_value(value)
}
