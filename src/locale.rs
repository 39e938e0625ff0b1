//! Localized validation messages.
//!
//! The admin labels are Turkish, so Turkish is the default message locale.

use serde::{Deserialize, Serialize};

/// Message locale, set by the top-level `locale` key in `sofra.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

/// A validation failure, rendered per locale.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Required,
    NotText,
    NotNumber,
    NotBoolean,
    NotObject,
    NotArray,
    TooShort { min: usize },
    TooLong { max: usize },
    BelowMin { min: f64 },
    AboveMax { max: f64 },
    InvalidOption { value: String },
    InvalidDate,
    InvalidRelation,
    TooFewRows { min: usize },
    TooManyRows { max: usize },
    InvalidEmail,

    // dataset checks
    Duplicate { value: String, other: String },
    DanglingReference { collection: String, id: String },

    // custom validators
    CategoryNameNotText,
    CategoryNameBlank,
    CategoryNameCharset,
    RecipeTitleNotText,
    RecipeTitleBlank,
    RecipeTitleDoubleSpace,
    RecipeTitleCharset,
    UrlNotText,
    UrlInvalid,
    AspectRatioRequired,

    /// Already rendered (media rejections carry their own wording).
    Custom(String),
}

impl Message {
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::Tr => self.render_tr(),
            Locale::En => self.render_en(),
        }
    }

    fn render_tr(&self) -> String {
        match self {
            Self::Required => "Bu alan zorunludur.".into(),
            Self::NotText => "Bu alan metin olmalıdır.".into(),
            Self::NotNumber => "Bu alan sayı olmalıdır.".into(),
            Self::NotBoolean => "Bu alan evet/hayır değeri olmalıdır.".into(),
            Self::NotObject => "Bu alan bir nesne olmalıdır.".into(),
            Self::NotArray => "Bu alan bir liste olmalıdır.".into(),
            Self::TooShort { min } => format!("En az {min} karakter olmalıdır."),
            Self::TooLong { max } => format!("En fazla {max} karakter olabilir."),
            Self::BelowMin { min } => format!("{} veya daha büyük olmalıdır.", fmt_num(*min)),
            Self::AboveMax { max } => format!("{} veya daha küçük olmalıdır.", fmt_num(*max)),
            Self::InvalidOption { value } => format!("Geçersiz seçim: `{value}`."),
            Self::InvalidDate => "Geçerli bir tarih girin.".into(),
            Self::InvalidRelation => "Geçerli bir kayıt kimliği girin.".into(),
            Self::TooFewRows { min } => format!("En az {min} satır gereklidir."),
            Self::TooManyRows { max } => format!("En fazla {max} satır eklenebilir."),
            Self::InvalidEmail => "Geçerli bir e-posta adresi girin.".into(),
            Self::Duplicate { value, other } => {
                format!("`{value}` değeri {other} tarafından da kullanılıyor.")
            }
            Self::DanglingReference { collection, id } => {
                format!("{collection} koleksiyonunda `{id}` kimlikli kayıt yok.")
            }
            Self::CategoryNameNotText => "Kategori adı metin olmalıdır.".into(),
            Self::CategoryNameBlank => "Kategori adı sadece boşluk olamaz.".into(),
            Self::CategoryNameCharset => {
                "Kategori adı sadece harf, rakam, boşluk, tire ve alt çizgi içerebilir.".into()
            }
            Self::RecipeTitleNotText => "Tarif adı metin olmalıdır.".into(),
            Self::RecipeTitleBlank => "Tarif adı sadece boşluk olamaz.".into(),
            Self::RecipeTitleDoubleSpace => "Tarif adı ardışık boşluklar içeremez.".into(),
            Self::RecipeTitleCharset => "Tarif adı geçersiz karakterler içeriyor.".into(),
            Self::UrlNotText => "Video URL metin olmalıdır.".into(),
            Self::UrlInvalid => "Geçerli bir URL girin.".into(),
            Self::AspectRatioRequired => "Aspect ratio seçimi zorunludur.".into(),
            Self::Custom(text) => text.clone(),
        }
    }

    fn render_en(&self) -> String {
        match self {
            Self::Required => "This field is required.".into(),
            Self::NotText => "This field must be text.".into(),
            Self::NotNumber => "This field must be a number.".into(),
            Self::NotBoolean => "This field must be true or false.".into(),
            Self::NotObject => "This field must be an object.".into(),
            Self::NotArray => "This field must be a list.".into(),
            Self::TooShort { min } => format!("Must be at least {min} characters."),
            Self::TooLong { max } => format!("Must be at most {max} characters."),
            Self::BelowMin { min } => format!("Must be {} or greater.", fmt_num(*min)),
            Self::AboveMax { max } => format!("Must be {} or less.", fmt_num(*max)),
            Self::InvalidOption { value } => format!("Invalid option: `{value}`."),
            Self::InvalidDate => "Enter a valid date.".into(),
            Self::InvalidRelation => "Enter a valid document id.".into(),
            Self::TooFewRows { min } => format!("At least {min} rows are required."),
            Self::TooManyRows { max } => format!("At most {max} rows are allowed."),
            Self::InvalidEmail => "Enter a valid email address.".into(),
            Self::Duplicate { value, other } => format!("`{value}` is also used by {other}."),
            Self::DanglingReference { collection, id } => {
                format!("No {collection} document with id `{id}`.")
            }
            Self::CategoryNameNotText => "Category name must be text.".into(),
            Self::CategoryNameBlank => "Category name cannot be only whitespace.".into(),
            Self::CategoryNameCharset => {
                "Category name may only contain letters, digits, spaces, hyphens and underscores."
                    .into()
            }
            Self::RecipeTitleNotText => "Recipe title must be text.".into(),
            Self::RecipeTitleBlank => "Recipe title cannot be only whitespace.".into(),
            Self::RecipeTitleDoubleSpace => {
                "Recipe title cannot contain consecutive spaces.".into()
            }
            Self::RecipeTitleCharset => "Recipe title contains invalid characters.".into(),
            Self::UrlNotText => "Video URL must be text.".into(),
            Self::UrlInvalid => "Enter a valid URL.".into(),
            Self::AspectRatioRequired => "Selecting an aspect ratio is required.".into(),
            Self::Custom(text) => text.clone(),
        }
    }
}

/// Print whole numbers without a trailing `.0`.
#[allow(clippy::cast_possible_truncation)]
fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_turkish() {
        assert_eq!(Locale::default(), Locale::Tr);
        assert_eq!(
            Message::CategoryNameBlank.render(Locale::default()),
            "Kategori adı sadece boşluk olamaz."
        );
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(
            Message::AboveMax { max: 50.0 }.render(Locale::En),
            "Must be 50 or less."
        );
        assert_eq!(
            Message::BelowMin { min: 0.5 }.render(Locale::En),
            "Must be 0.5 or greater."
        );
    }

    #[test]
    fn test_custom_passes_through() {
        let msg = Message::Custom("as is".into());
        assert_eq!(msg.render(Locale::Tr), "as is");
        assert_eq!(msg.render(Locale::En), "as is");
    }
}
