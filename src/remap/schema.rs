//! Field-name tables for the external table schemas.
//!
//! The remote tables use Chinese field names; that is the external contract.
//! Two incompatible layouts exist for the same resource and neither is
//! authoritative, so remapping is parameterized by a per-variant table
//! instead of being duplicated per table.

use clap::ValueEnum;

/// How a field value is encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain JSON string
    Text,
    /// Rich text, `[{"text": ...}, ...]`; reads take the first segment
    RichText,
    /// Plain JSON number
    Number,
    /// Date, stored as a string or a millisecond timestamp
    Date,
    /// Person list `[{"name": ...}]`; reads take the first member
    Person,
    /// Person list joined with ", " on read
    PersonList,
    /// Tag list `[{"text": ...}]` joined with ", " on read
    TagList,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub external: &'static str,
    pub kind: ValueKind,
}

const fn spec(external: &'static str, kind: ValueKind) -> Option<FieldSpec> {
    Some(FieldSpec { external, kind })
}

/// Which external table layout to remap against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaVariant {
    /// Dedicated project table (rich-text cells, person columns)
    Project,
    /// Proposal summary table (plain-text cells, counters)
    Proposal,
}

/// Field-name table for one schema variant. Unmapped fields read as their
/// documented defaults and are never written.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub variant: SchemaVariant,
    pub name: Option<FieldSpec>,
    pub description: Option<FieldSpec>,
    pub status: Option<FieldSpec>,
    pub priority: Option<FieldSpec>,
    pub start_date: Option<FieldSpec>,
    pub end_date: Option<FieldSpec>,
    pub progress: Option<FieldSpec>,
    pub owner: Option<FieldSpec>,
    pub team: Option<FieldSpec>,
    pub budget: Option<FieldSpec>,
    pub actual_cost: Option<FieldSpec>,
    pub tags: Option<FieldSpec>,
}

impl FieldSchema {
    pub fn for_variant(variant: SchemaVariant) -> &'static FieldSchema {
        match variant {
            SchemaVariant::Project => &PROJECT_SCHEMA,
            SchemaVariant::Proposal => &PROPOSAL_SCHEMA,
        }
    }
}

static PROJECT_SCHEMA: FieldSchema = FieldSchema {
    variant: SchemaVariant::Project,
    name: spec("项目名称", ValueKind::RichText),
    description: spec("项目描述", ValueKind::RichText),
    status: spec("项目状态", ValueKind::RichText),
    priority: spec("优先级", ValueKind::RichText),
    start_date: spec("开始日期", ValueKind::Date),
    end_date: spec("结束日期", ValueKind::Date),
    progress: spec("完成进度", ValueKind::Number),
    owner: spec("负责人", ValueKind::Person),
    team: spec("团队成员", ValueKind::PersonList),
    budget: spec("预算", ValueKind::Number),
    actual_cost: spec("实际成本", ValueKind::Number),
    tags: spec("标签", ValueKind::TagList),
};

static PROPOSAL_SCHEMA: FieldSchema = FieldSchema {
    variant: SchemaVariant::Proposal,
    name: spec("项目", ValueKind::Text),
    description: spec("提案核心内容", ValueKind::Text),
    status: None,
    priority: None,
    start_date: None,
    end_date: None,
    progress: spec("进行中提案", ValueKind::Number),
    owner: spec("个人提案/团队提案", ValueKind::Text),
    team: spec("提案部门", ValueKind::Text),
    budget: None,
    actual_cost: None,
    tags: None,
};
