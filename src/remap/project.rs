//! Conversion between [`ExternalRecord`] and the internal project shape.
//!
//! Reads are lenient about the wire encoding: the two schema variants store
//! the same logical field as either a plain value or a rich segment list,
//! so extraction accepts both. Missing fields fall back to the documented
//! defaults (`""`, `0`, `"未开始"` for status, `"中"` for priority).

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::client::types::ExternalRecord;
use crate::remap::schema::{FieldSchema, FieldSpec, ValueKind};

pub const DEFAULT_STATUS: &str = "未开始";
pub const DEFAULT_PRIORITY: &str = "中";

/// Internal project shape, derived transiently from one external record.
/// Never stored; the remote table is the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub start_date: String,
    pub end_date: String,
    pub progress: f64,
    pub owner: String,
    pub team: String,
    pub budget: f64,
    pub actual_cost: f64,
    pub tags: String,
    pub created_time: Option<i64>,
    pub last_modified_time: Option<i64>,
}

/// Inbound create/update payload. Unset fields are omitted from the
/// external write entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub progress: Option<f64>,
    pub owner: Option<String>,
    pub team: Option<String>,
    pub budget: Option<f64>,
    pub actual_cost: Option<f64>,
    pub tags: Option<String>,
}

pub fn to_project(schema: &FieldSchema, record: &ExternalRecord) -> Project {
    let fields = &record.fields;

    Project {
        id: record.record_id.clone(),
        name: read_string(fields, schema.name, ""),
        description: read_string(fields, schema.description, ""),
        status: read_string(fields, schema.status, DEFAULT_STATUS),
        priority: read_string(fields, schema.priority, DEFAULT_PRIORITY),
        start_date: read_string(fields, schema.start_date, ""),
        end_date: read_string(fields, schema.end_date, ""),
        progress: read_number(fields, schema.progress),
        owner: read_string(fields, schema.owner, ""),
        team: read_string(fields, schema.team, ""),
        budget: read_number(fields, schema.budget),
        actual_cost: read_number(fields, schema.actual_cost),
        tags: read_string(fields, schema.tags, ""),
        created_time: record.created_time,
        last_modified_time: record.last_modified_time,
    }
}

/// Build the external field map for a create/update, omitting fields the
/// caller did not set and fields the schema variant does not carry.
pub fn to_external_fields(schema: &FieldSchema, patch: &ProjectPatch) -> Map<String, Value> {
    let mut fields = Map::new();

    write_string(&mut fields, schema.name, patch.name.as_deref());
    write_string(&mut fields, schema.description, patch.description.as_deref());
    write_string(&mut fields, schema.status, patch.status.as_deref());
    write_string(&mut fields, schema.priority, patch.priority.as_deref());
    write_string(&mut fields, schema.start_date, patch.start_date.as_deref());
    write_string(&mut fields, schema.end_date, patch.end_date.as_deref());
    write_number(&mut fields, schema.progress, patch.progress);
    write_string(&mut fields, schema.owner, patch.owner.as_deref());
    write_string(&mut fields, schema.team, patch.team.as_deref());
    write_number(&mut fields, schema.budget, patch.budget);
    write_number(&mut fields, schema.actual_cost, patch.actual_cost);
    write_string(&mut fields, schema.tags, patch.tags.as_deref());

    fields
}

fn read_string(fields: &Map<String, Value>, spec: Option<FieldSpec>, default: &str) -> String {
    let Some(spec) = spec else {
        return default.to_string();
    };
    let Some(value) = fields.get(spec.external) else {
        return default.to_string();
    };

    let extracted = match spec.kind {
        ValueKind::Text | ValueKind::RichText | ValueKind::Date => scalar_text(value)
            .or_else(|| first_segment(value, "text").map(str::to_string)),
        ValueKind::Person => scalar_text(value)
            .or_else(|| first_segment(value, "name").map(str::to_string)),
        ValueKind::PersonList => joined_segments(value, "name").or_else(|| scalar_text(value)),
        ValueKind::TagList => joined_segments(value, "text").or_else(|| scalar_text(value)),
        ValueKind::Number => None,
    };

    extracted
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn read_number(fields: &Map<String, Value>, spec: Option<FieldSpec>) -> f64 {
    spec.and_then(|spec| fields.get(spec.external))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// Plain string, or a number rendered as text (date columns hold either).
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_segment<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.as_array()?.first()?.get(key)?.as_str()
}

fn joined_segments(value: &Value, key: &str) -> Option<String> {
    let items = value.as_array()?;
    let parts: Vec<&str> = items
        .iter()
        .filter_map(|item| item.get(key).and_then(Value::as_str))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn write_string(fields: &mut Map<String, Value>, spec: Option<FieldSpec>, value: Option<&str>) {
    let (Some(spec), Some(value)) = (spec, value) else {
        return;
    };

    let encoded = match spec.kind {
        ValueKind::Person => json!([{ "name": value }]),
        ValueKind::PersonList => segment_list(value, "name"),
        ValueKind::TagList => segment_list(value, "text"),
        // text columns accept plain strings on write
        _ => Value::String(value.to_string()),
    };
    fields.insert(spec.external.to_string(), encoded);
}

/// Split a ", "-joined value back into `[{key: ...}]` segments.
fn segment_list(value: &str, key: &str) -> Value {
    let segments: Vec<Value> = value
        .split(", ")
        .filter(|s| !s.is_empty())
        .map(|s| json!({ key: s }))
        .collect();
    Value::Array(segments)
}

fn write_number(fields: &mut Map<String, Value>, spec: Option<FieldSpec>, value: Option<f64>) {
    let (Some(spec), Some(value)) = (spec, value) else {
        return;
    };
    fields.insert(spec.external.to_string(), json!(value));
}
