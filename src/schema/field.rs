//! Field declarations.
//!
//! A [`Field`] is plain data: the document pipeline reads it to apply
//! defaults, run hooks and validate values, and `sofra schema` serializes it.
//! `row` and `tabs` only group fields visually; their children are stored
//! directly in the enclosing object.

use serde::Serialize;
use serde_json::Value;

/// A single option in a select field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { label, value }
    }
}

/// Build select options from `(value, label)` pairs.
pub fn options(pairs: &[(&'static str, &'static str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|&(value, label)| SelectOption::new(value, label))
        .collect()
}

/// One tab of a `tabs` field.
#[derive(Debug, Clone, Serialize)]
pub struct Tab {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub fields: Vec<Field>,
}

impl Tab {
    pub fn new(label: &'static str, fields: Vec<Field>) -> Self {
        Self {
            label,
            description: None,
            fields,
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// The type of a field, which determines the shape of its value.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FieldKind {
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    Textarea {
        #[serde(skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    Email,
    /// Editor state; only presence is checked.
    RichText,
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Checkbox,
    Select {
        options: Vec<SelectOption>,
    },
    Date,
    /// Stores document ids of another collection.
    Relationship {
        relation_to: &'static str,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        has_many: bool,
    },
    /// Relationship to an upload collection.
    Upload {
        relation_to: &'static str,
    },
    Array {
        fields: Vec<Field>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_rows: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_rows: Option<usize>,
    },
    Group {
        fields: Vec<Field>,
    },
    Row {
        fields: Vec<Field>,
    },
    Tabs {
        tabs: Vec<Tab>,
    },
}

/// Built-in custom validators, run after the generic checks pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Validator {
    /// Letters, digits, space, `_` and `-`; not blank.
    CategoryName,
    /// Letters, digits, space and `_ . , ( ) -`; not blank, no double spaces.
    RecipeTitle,
    /// Absolute URL when present.
    Url,
    /// Uploaded image matches the selected aspect-ratio preset.
    AspectRatio,
}

/// Field-level before-validate hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "hook", rename_all = "camelCase")]
pub enum FieldHook {
    /// Derive a slug from the sibling field `from` when the value is empty;
    /// otherwise lowercase and trim the supplied value.
    DeriveSlug { from: &'static str },
    /// Sum of the sibling number fields, missing values counting as zero.
    Sum { of: Vec<&'static str> },
}

/// Show a field only while a sibling field holds a given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub sibling: &'static str,
    pub equals: &'static str,
}

/// Admin presentation hints.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Admin {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.placeholder.is_none()
            && self.width.is_none()
            && !self.read_only
            && self.condition.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Data key; `None` for `row` and `tabs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Admin::is_empty")]
    pub admin: Admin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate: Option<Validator>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<FieldHook>,
}

impl Field {
    fn new(name: Option<&'static str>, kind: FieldKind) -> Self {
        Self {
            name,
            label: None,
            kind,
            required: false,
            unique: false,
            default_value: None,
            admin: Admin::default(),
            validate: None,
            hooks: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // constructors
    // ------------------------------------------------------------------------

    pub fn text(name: &'static str) -> Self {
        Self::new(
            Some(name),
            FieldKind::Text {
                min_length: None,
                max_length: None,
            },
        )
    }

    pub fn textarea(name: &'static str) -> Self {
        Self::new(
            Some(name),
            FieldKind::Textarea {
                min_length: None,
                max_length: None,
            },
        )
    }

    pub fn email(name: &'static str) -> Self {
        Self::new(Some(name), FieldKind::Email)
    }

    pub fn rich_text(name: &'static str) -> Self {
        Self::new(Some(name), FieldKind::RichText)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(
            Some(name),
            FieldKind::Number {
                min: None,
                max: None,
            },
        )
    }

    pub fn checkbox(name: &'static str) -> Self {
        Self::new(Some(name), FieldKind::Checkbox)
    }

    pub fn select(name: &'static str, options: Vec<SelectOption>) -> Self {
        Self::new(Some(name), FieldKind::Select { options })
    }

    pub fn date(name: &'static str) -> Self {
        Self::new(Some(name), FieldKind::Date)
    }

    pub fn relationship(name: &'static str, relation_to: &'static str) -> Self {
        Self::new(
            Some(name),
            FieldKind::Relationship {
                relation_to,
                has_many: false,
            },
        )
    }

    /// Upload field pointing at the `media` collection.
    pub fn upload(name: &'static str) -> Self {
        Self::new(
            Some(name),
            FieldKind::Upload {
                relation_to: "media",
            },
        )
    }

    pub fn array(name: &'static str, fields: Vec<Field>) -> Self {
        Self::new(
            Some(name),
            FieldKind::Array {
                fields,
                min_rows: None,
                max_rows: None,
            },
        )
    }

    pub fn group(name: &'static str, fields: Vec<Field>) -> Self {
        Self::new(Some(name), FieldKind::Group { fields })
    }

    pub fn row(fields: Vec<Field>) -> Self {
        Self::new(None, FieldKind::Row { fields })
    }

    pub fn tabs(tabs: Vec<Tab>) -> Self {
        Self::new(None, FieldKind::Tabs { tabs })
    }

    // ------------------------------------------------------------------------
    // modifiers
    // ------------------------------------------------------------------------

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.admin.description = Some(description);
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.admin.placeholder = Some(placeholder);
        self
    }

    pub fn width(mut self, width: &'static str) -> Self {
        self.admin.width = Some(width);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.admin.read_only = true;
        self
    }

    /// Admin-only visibility rule; validation is unaffected.
    pub fn shown_when(mut self, sibling: &'static str, equals: &'static str) -> Self {
        self.admin.condition = Some(Condition { sibling, equals });
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn hook(mut self, hook: FieldHook) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Length bounds for `text` and `textarea`; no effect on other kinds.
    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        if let FieldKind::Text {
            min_length,
            max_length,
        }
        | FieldKind::Textarea {
            min_length,
            max_length,
        } = &mut self.kind
        {
            *min_length = min;
            *max_length = max;
        }
        self
    }

    pub fn max_length(self, max: usize) -> Self {
        self.length(None, Some(max))
    }

    /// Value bounds for `number`; no effect on other kinds.
    pub fn range(mut self, lo: Option<f64>, hi: Option<f64>) -> Self {
        if let FieldKind::Number { min, max } = &mut self.kind {
            *min = lo;
            *max = hi;
        }
        self
    }

    pub fn min(self, lo: f64) -> Self {
        let hi = match self.kind {
            FieldKind::Number { max, .. } => max,
            _ => None,
        };
        self.range(Some(lo), hi)
    }

    pub fn max(self, hi: f64) -> Self {
        let lo = match self.kind {
            FieldKind::Number { min, .. } => min,
            _ => None,
        };
        self.range(lo, Some(hi))
    }

    /// Allow several ids on a `relationship`; no effect on other kinds.
    pub fn has_many(mut self) -> Self {
        if let FieldKind::Relationship { has_many, .. } = &mut self.kind {
            *has_many = true;
        }
        self
    }

    /// Minimum row count for `array`; no effect on other kinds.
    pub fn min_rows(mut self, rows: usize) -> Self {
        if let FieldKind::Array { min_rows, .. } = &mut self.kind {
            *min_rows = Some(rows);
        }
        self
    }

    // ------------------------------------------------------------------------
    // queries
    // ------------------------------------------------------------------------

    /// `row` and `tabs` carry no data of their own.
    pub const fn is_presentational(&self) -> bool {
        matches!(self.kind, FieldKind::Row { .. } | FieldKind::Tabs { .. })
    }

    /// Collection slug this field points at, for relationship and upload.
    pub const fn relation(&self) -> Option<(&'static str, bool)> {
        match self.kind {
            FieldKind::Relationship {
                relation_to,
                has_many,
            } => Some((relation_to, has_many)),
            FieldKind::Upload { relation_to } => Some((relation_to, false)),
            _ => None,
        }
    }

    /// Fields stored in the same object as `self`'s children, i.e. the
    /// children of `row`, every tab of `tabs`; empty for data fields.
    pub fn inline_children(&self) -> Vec<&Field> {
        match &self.kind {
            FieldKind::Row { fields } => fields.iter().collect(),
            FieldKind::Tabs { tabs } => tabs.iter().flat_map(|tab| &tab.fields).collect(),
            _ => Vec::new(),
        }
    }
}

/// Every named field stored at this level, looking through `row` and `tabs`.
pub fn data_fields(fields: &[Field]) -> Vec<&Field> {
    let mut out = Vec::new();
    for field in fields {
        if field.is_presentational() {
            for child in field.inline_children() {
                out.extend(data_fields(std::slice::from_ref(child)));
            }
        } else {
            out.push(field);
        }
    }
    out
}
