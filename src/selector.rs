// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Label selector representation and parsing.
//!
//! Parses kubectl-style selector expressions (`env=prod`, `tier in (web,api)`,
//! `!legacy`, ...) into the structured selector form carried on a placement.
//! An empty expression selects everything.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{BindError, Result};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_expressions: Vec<LabelSelectorRequirement>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelectorRequirement {
    pub key: String,
    pub operator: LabelSelectorOperator,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub enum LabelSelectorOperator {
    In,
    NotIn,
    Exists,
    DoesNotExist,
}

impl LabelSelector {
    /// The selector matching everything
    pub fn everything() -> Self {
        Self::default()
    }
}

/// Parse a kubectl-style label selector expression.
///
/// Supported requirements: `key=value`, `key==value`, `key in (v1,v2)`,
/// `key notin (v1,v2)`, `key` (exists) and `!key` (does not exist).
/// Inequality and ordering operators are rejected, as they cannot be
/// expressed in selector form.
pub fn parse(selector: &str) -> Result<LabelSelector> {
    let mut parsed = LabelSelector::default();
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Ok(parsed);
    }

    for requirement in split_requirements(trimmed) {
        let requirement = requirement.trim();
        if requirement.is_empty() {
            return Err(invalid(selector, "empty requirement"));
        }
        parse_requirement(selector, requirement, &mut parsed)?;
    }

    Ok(parsed)
}

/// Split on commas outside parentheses; commas inside `in (...)` value lists
/// do not terminate a requirement.
fn split_requirements(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in selector.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&selector[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&selector[start..]);
    parts
}

fn parse_requirement(selector: &str, requirement: &str, out: &mut LabelSelector) -> Result<()> {
    if let Some(key) = requirement.strip_prefix('!') {
        let key = key.trim();
        validate_key(selector, key)?;
        out.match_expressions.push(LabelSelectorRequirement {
            key: key.to_string(),
            operator: LabelSelectorOperator::DoesNotExist,
            values: Vec::new(),
        });
        return Ok(());
    }

    if let Some((key, values)) = split_set_requirement(requirement, " notin ") {
        let (key, values) = parse_set_values(selector, key, values)?;
        out.match_expressions.push(LabelSelectorRequirement {
            key,
            operator: LabelSelectorOperator::NotIn,
            values,
        });
        return Ok(());
    }

    if let Some((key, values)) = split_set_requirement(requirement, " in ") {
        let (key, values) = parse_set_values(selector, key, values)?;
        out.match_expressions.push(LabelSelectorRequirement {
            key,
            operator: LabelSelectorOperator::In,
            values,
        });
        return Ok(());
    }

    if requirement.contains("!=") {
        return Err(invalid(selector, "operator != is not supported"));
    }
    if requirement.contains('<') || requirement.contains('>') {
        return Err(invalid(selector, "ordering operators are not supported"));
    }

    if let Some((key, value)) = requirement.split_once("==").or_else(|| requirement.split_once('=')) {
        let key = key.trim();
        let value = value.trim();
        validate_key(selector, key)?;
        validate_value(selector, value)?;
        out.match_labels.insert(key.to_string(), value.to_string());
        return Ok(());
    }

    // Bare key means the label must exist
    validate_key(selector, requirement)?;
    out.match_expressions.push(LabelSelectorRequirement {
        key: requirement.to_string(),
        operator: LabelSelectorOperator::Exists,
        values: Vec::new(),
    });
    Ok(())
}

fn split_set_requirement<'a>(requirement: &'a str, op: &str) -> Option<(&'a str, &'a str)> {
    requirement.find(op).map(|i| (&requirement[..i], &requirement[i + op.len()..]))
}

fn parse_set_values(selector: &str, key: &str, values: &str) -> Result<(String, Vec<String>)> {
    let key = key.trim();
    validate_key(selector, key)?;

    let values = values.trim();
    let inner = values
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
        .ok_or_else(|| invalid(selector, "set values must be parenthesized"))?;

    let mut parsed = Vec::new();
    for value in inner.split(',') {
        let value = value.trim();
        validate_value(selector, value)?;
        parsed.push(value.to_string());
    }
    if parsed.is_empty() {
        return Err(invalid(selector, "set requirement needs at least one value"));
    }
    Ok((key.to_string(), parsed))
}

fn validate_key(selector: &str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(invalid(selector, "empty label key"));
    }
    let valid = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'));
    if !valid {
        return Err(invalid(selector, "label key contains invalid characters"));
    }
    Ok(())
}

fn validate_value(selector: &str, value: &str) -> Result<()> {
    let valid = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid {
        return Err(invalid(selector, "label value contains invalid characters"));
    }
    Ok(())
}

fn invalid(selector: &str, reason: &str) -> BindError {
    BindError::InvalidSelector {
        selector: selector.to_string(),
        reason: reason.to_string(),
    }
}
