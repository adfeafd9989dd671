//! Record Validation
//!
//! Data-driven required-field rules, run synchronously before any
//! submission. Pure: no signals, no DOM, safe to call repeatedly.

use std::collections::BTreeMap;

use crate::models::{Field, Record};

/// One validation rule: a predicate over the field's raw value plus the
/// message shown when it fails.
pub struct Rule {
    pub field: Field,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

/// Strict emptiness test. Whitespace-only input counts as filled; the
/// receiving script applies its own normalization.
fn non_empty(value: &str) -> bool {
    !value.is_empty()
}

/// Required-field rules, one per string field. Adding a field to the form
/// means adding one row here, not touching control flow.
pub const RULES: &[Rule] = &[
    Rule { field: Field::Tag, check: non_empty, message: "Tag không được để trống" },
    Rule { field: Field::Code, check: non_empty, message: "Code không được để trống" },
    Rule { field: Field::Category, check: non_empty, message: "Category không được để trống" },
    Rule { field: Field::Title, check: non_empty, message: "Title không được để trống" },
    Rule { field: Field::Date, check: non_empty, message: "Ngày không được để trống" },
    Rule { field: Field::Description, check: non_empty, message: "Mô tả không được để trống" },
    Rule { field: Field::Content, check: non_empty, message: "Nội dung không được để trống" },
];

/// Check a record against [`RULES`].
///
/// Returns `Ok(())` when every rule passes, otherwise a map with exactly
/// one message per failing field. `id` is never checked.
pub fn validate(record: &Record) -> Result<(), BTreeMap<Field, String>> {
    let mut errors = BTreeMap::new();
    for rule in RULES {
        if !(rule.check)(record.get(rule.field)) {
            errors.insert(rule.field, rule.message.to_string());
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
