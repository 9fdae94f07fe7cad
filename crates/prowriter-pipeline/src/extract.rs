// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pulls a JSON object out of free-form model output.
//!
//! Models wrap their JSON in prose, markdown fences or both. [`extract`] finds
//! the first balanced `{...}` region that parses as a JSON object. When no
//! balanced region parses it tries the greedy slice from the first `{` to the
//! last `}`. Anything else comes back as trimmed [`GenerationResult::RawText`].
//!
//! Extraction never fails: unusable output is a degraded result, not an error.

use prowriter_core::GenerationResult;
use serde_json::{Map, Value};

/// Total candidate bytes handed to the JSON parser, as a multiple of the
/// input length. Keeps extraction linear on deeply nested or truncated output.
const PARSE_BUDGET_FACTOR: usize = 4;

/// Interprets raw model output as a structured payload when possible.
pub fn extract(raw: &str) -> GenerationResult {
    let Some(first) = raw.find('{') else {
        return GenerationResult::RawText(raw.trim().to_string());
    };

    let mut regions = balanced_regions(raw, first);
    regions.sort_unstable_by_key(|&(start, _)| start);

    let mut budget = raw.len().saturating_mul(PARSE_BUDGET_FACTOR);
    for (start, end) in regions {
        let len = end - start + 1;
        if len > budget {
            break;
        }
        budget -= len;
        if let Some(map) = parse_object(&raw[start..=end]) {
            return GenerationResult::Structured(map);
        }
    }

    if let Some(last) = raw.rfind('}') {
        if last > first {
            if let Some(map) = parse_object(&raw[first..=last]) {
                return GenerationResult::Structured(map);
            }
        }
    }

    GenerationResult::RawText(raw.trim().to_string())
}

/// Byte ranges `(open, close)` of every balanced `{...}` region at or after
/// `from`, found in one forward pass.
///
/// Braces inside JSON string literals are ignored, honoring `\"` escapes.
/// Quotes only open a string while some brace is open, so prose between
/// objects does not hide the next one.
fn balanced_regions(raw: &str, from: usize) -> Vec<(usize, usize)> {
    let mut open = Vec::new();
    let mut regions = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in raw.as_bytes()[from..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' if !open.is_empty() => in_string = true,
            b'{' => open.push(from + offset),
            b'}' => {
                if let Some(start) = open.pop() {
                    regions.push((start, from + offset));
                }
            }
            _ => {}
        }
    }
    regions
}

fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
