//! Collection declarations.

use serde::Serialize;

use crate::media::{IMAGE_SIZES, ImageSize, MIME_TYPES};
use crate::schema::{Field, ReadAccess, data_fields};

/// Sidebar group a collection is listed under in the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AdminGroup {
    #[serde(rename = "Content Management")]
    ContentManagement,
    #[serde(rename = "Reference Data")]
    ReferenceData,
    #[serde(rename = "Geography")]
    Geography,
    #[serde(rename = "Media Management")]
    MediaManagement,
    #[serde(rename = "Admin")]
    Admin,
}

impl AdminGroup {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContentManagement => "Content Management",
            Self::ReferenceData => "Reference Data",
            Self::Geography => "Geography",
            Self::MediaManagement => "Media Management",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionAdmin {
    pub use_as_title: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_columns: Vec<&'static str>,
    pub group: AdminGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<usize>,
}

/// Upload settings of a media collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    pub static_dir: &'static str,
    pub mime_types: &'static [&'static str],
    pub image_sizes: &'static [ImageSize],
}

impl UploadConfig {
    pub const fn media() -> Self {
        Self {
            static_dir: "media",
            mime_types: MIME_TYPES,
            image_sizes: IMAGE_SIZES,
        }
    }
}

/// Document-level before-validate hook, run after the field hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "hook", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CollectionHook {
    /// Set `field` to the slug of `from` when `field` is empty.
    DeriveSlug {
        field: &'static str,
        from: &'static str,
    },
    /// Set `target` to the sum of `of` when every summand is set and non-zero.
    SumWhenSet {
        target: &'static str,
        of: Vec<&'static str>,
    },
    /// Stamp `target` with the current time when `status_field` equals
    /// `status` and `target` is empty.
    StampOnStatus {
        target: &'static str,
        status_field: &'static str,
        status: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    pub slug: &'static str,
    pub admin: CollectionAdmin,
    pub access: ReadAccess,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub auth: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub drafts: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<UploadConfig>,
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<CollectionHook>,
}

impl CollectionConfig {
    pub fn new(slug: &'static str, group: AdminGroup) -> Self {
        Self {
            slug,
            admin: CollectionAdmin {
                use_as_title: "id",
                default_columns: Vec::new(),
                group,
                default_limit: None,
            },
            access: ReadAccess::Public,
            auth: false,
            drafts: false,
            upload: None,
            fields: Vec::new(),
            hooks: Vec::new(),
        }
    }

    pub fn use_as_title(mut self, field: &'static str) -> Self {
        self.admin.use_as_title = field;
        self
    }

    pub fn default_columns(mut self, columns: &[&'static str]) -> Self {
        self.admin.default_columns = columns.to_vec();
        self
    }

    pub fn default_limit(mut self, limit: usize) -> Self {
        self.admin.default_limit = Some(limit);
        self
    }

    pub fn read(mut self, access: ReadAccess) -> Self {
        self.access = access;
        self
    }

    /// Authentication-enabled collection (adds nothing beyond the flag;
    /// credentials are out of scope).
    pub fn auth(mut self) -> Self {
        self.auth = true;
        self
    }

    pub fn drafts(mut self) -> Self {
        self.drafts = true;
        self
    }

    pub fn upload(mut self, upload: UploadConfig) -> Self {
        self.upload = Some(upload);
        self
    }

    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn hook(mut self, hook: CollectionHook) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Top-level fields stored on the document.
    pub fn data_fields(&self) -> Vec<&Field> {
        data_fields(&self.fields)
    }

    /// Top-level field by data key.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data_fields()
            .into_iter()
            .find(|field| field.name == Some(name))
    }

    /// Whether documents carry a URL slug.
    pub fn has_slug(&self) -> bool {
        self.field("slug").is_some()
    }
}
