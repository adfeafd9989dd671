//! Frontend Models
//!
//! The record collected by the form, matching the wire shape the
//! remote script expects.

use serde::{Deserialize, Serialize};

/// One data record as submitted to the remote endpoint.
///
/// `id` is always 0 in this flow: the client assigns no identity,
/// the receiving script does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub tag: String,
    pub code: String,
    pub category: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub content: String,
}

/// The string fields of a [`Record`], in display order.
///
/// `id` deliberately has no variant: it is numeric, never user-edited,
/// and exempt from validation by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Tag,
    Code,
    Category,
    Title,
    Date,
    Description,
    Content,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Field::Tag,
        Field::Code,
        Field::Category,
        Field::Title,
        Field::Date,
        Field::Description,
        Field::Content,
    ];

    /// Wire/DOM name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Tag => "tag",
            Field::Code => "code",
            Field::Category => "category",
            Field::Title => "title",
            Field::Date => "date",
            Field::Description => "description",
            Field::Content => "content",
        }
    }

    /// Display label (UI locale).
    pub fn label(self) -> &'static str {
        match self {
            Field::Tag => "Tag",
            Field::Code => "Code",
            Field::Category => "Category",
            Field::Title => "Title",
            Field::Date => "Ngày",
            Field::Description => "Mô tả",
            Field::Content => "Nội dung",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Tag => "Nhập tag...",
            Field::Code => "Nhập code...",
            Field::Category => "Nhập category...",
            Field::Title => "Nhập title...",
            Field::Date => "",
            Field::Description => "Nhập mô tả...",
            Field::Content => "Nhập nội dung...",
        }
    }
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Tag => &self.tag,
            Field::Code => &self.code,
            Field::Category => &self.category,
            Field::Title => &self.title,
            Field::Date => &self.date,
            Field::Description => &self.description,
            Field::Content => &self.content,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Tag => self.tag = value,
            Field::Code => self.code = value,
            Field::Category => self.category = value,
            Field::Title => self.title = value,
            Field::Date => self.date = value,
            Field::Description => self.description = value,
            Field::Content => self.content = value,
        }
    }
}
