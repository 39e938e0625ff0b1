//! Field groups shared by most collections.

use crate::schema::{Field, FieldHook, Tab};

pub const GENERAL_TAB: &str = "Genel Bilgiler";
pub const MEDIA_TAB: &str = "Media";
pub const MANAGEMENT_TAB: &str = "Yönetim";
pub const SEO_TAB: &str = "SEO";

pub const LIST_ORDER: &str = "Listeleme sırası (düşük sayılar önce görünür)";
const SLUG_DESCRIPTION: &str = "URL için benzersiz kimlik";

/// Unique `slug` derived from the sibling field `from`.
pub fn slug(from: &'static str) -> Field {
    Field::text("slug")
        .label("URL Slug")
        .unique()
        .description(SLUG_DESCRIPTION)
        .hook(FieldHook::DeriveSlug { from })
}

pub fn sort_order(description: &'static str) -> Field {
    Field::number("sortOrder")
        .label("Sıralama")
        .default_value(0)
        .description(description)
}

pub fn is_active(description: &'static str) -> Field {
    flag("isActive", "Aktif", true, description)
}

pub fn flag(
    name: &'static str,
    label: &'static str,
    default: bool,
    description: &'static str,
) -> Field {
    Field::checkbox(name)
        .label(label)
        .default_value(default)
        .description(description)
}

pub fn is_featured() -> Field {
    flag(
        "isFeatured",
        "Öne Çıkarılsın mı?",
        false,
        "Ana sayfada öne çıkarılsın mı?",
    )
}

/// Read-only number maintained outside the admin form.
pub fn counter(name: &'static str, label: &'static str, description: &'static str) -> Field {
    Field::number(name)
        .label(label)
        .read_only()
        .description(description)
}

pub fn admin_notes() -> Field {
    Field::textarea("adminNotes")
        .label("Yönetici Notları")
        .description("Sadece yöneticiler için notlar (kullanıcılara görünmez)")
}

// ============================================================================
// media
// ============================================================================

pub fn image(name: &'static str, label: &'static str, description: &'static str) -> Field {
    Field::upload(name).label(label).description(description)
}

pub fn icon(description: &'static str) -> Field {
    image("icon", "İkon", description)
}

pub fn featured_image(description: &'static str) -> Field {
    image("featuredImage", "Öne Çıkan Görsel", description)
}

/// `image16x9`, `image1x1` and `image1x2`.
pub fn image_variants(square_required: bool) -> Vec<Field> {
    let square = image(
        "image1x1",
        "1:1 Görsel",
        "Kare görsel (1080x1080) - Kart, grid kullanımı için (zorunlu)",
    );
    vec![
        image(
            "image16x9",
            "16:9 Görsel",
            "Yatay görsel (1920x1080) - Hero, banner kullanımı için",
        ),
        if square_required {
            square.required()
        } else {
            square
        },
        image(
            "image1x2",
            "1:2 Görsel",
            "Dikey görsel (1080x2160) - Mobile, story kullanımı için",
        ),
    ]
}

pub fn theme_color(placeholder: &'static str, description: &'static str) -> Field {
    Field::text("color")
        .label("Tema Rengi")
        .placeholder(placeholder)
        .description(description)
}

/// Captioned image rows, plus any extra row fields.
pub fn gallery(label: &'static str, description: &'static str, extra: Vec<Field>) -> Field {
    let mut fields = vec![
        Field::upload("image").required(),
        Field::text("caption")
            .label("Açıklama")
            .placeholder("Bu görselin açıklaması"),
    ];
    fields.extend(extra);
    Field::array("gallery", fields)
        .label(label)
        .description(description)
}

// ============================================================================
// lists and groups
// ============================================================================

/// Array of single-text rows, e.g. tags or characteristics.
pub fn text_list(
    name: &'static str,
    label: &'static str,
    item: &'static str,
    placeholder: &'static str,
    description: &'static str,
) -> Field {
    Field::array(name, vec![Field::text(item).placeholder(placeholder)])
        .label(label)
        .description(description)
}

/// Group of `min` and `max` numbers sharing the same bounds.
pub fn range_group(
    name: &'static str,
    label: &'static str,
    description: &'static str,
    lo: Option<f64>,
    hi: Option<f64>,
) -> Field {
    Field::group(
        name,
        vec![
            Field::number("min").label("Minimum").range(lo, hi),
            Field::number("max").label("Maksimum").range(lo, hi),
        ],
    )
    .label(label)
    .description(description)
}

// ============================================================================
// seo
// ============================================================================

/// Placeholders of the SEO tab.
pub struct Seo {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

/// `seoTitle`, `seoDescription` and `seoKeywords`.
pub fn seo_fields(seo: Seo) -> Vec<Field> {
    vec![
        Field::text("seoTitle")
            .label("SEO Başlık")
            .max_length(60)
            .placeholder(seo.title)
            .description("Arama motorlarında görünecek başlık (60 karakter)"),
        Field::textarea("seoDescription")
            .label("SEO Açıklama")
            .max_length(160)
            .placeholder(seo.description)
            .description("Arama motorlarında görünecek açıklama (160 karakter)"),
        text_list(
            "seoKeywords",
            "SEO Anahtar Kelimeler",
            "keyword",
            seo.keywords,
            "Arama motorları için anahtar kelimeler",
        ),
    ]
}

pub fn seo_image() -> Field {
    image(
        "seoImage",
        "SEO Görseli",
        "Sosyal medyada paylaşılırken kullanılacak görsel",
    )
}

/// SEO tab, optionally with an `seoImage` upload.
pub fn seo_tab(seo: Seo, with_image: bool) -> Tab {
    let mut fields = seo_fields(seo);
    if with_image {
        fields.push(seo_image());
    }
    Tab::new(SEO_TAB, fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    #[test]
    fn test_seo_limits() {
        let tab = seo_tab(
            Seo {
                title: "t",
                description: "d",
                keywords: "k",
            },
            true,
        );
        let names: Vec<_> = tab.fields.iter().filter_map(|f| f.name).collect();
        assert_eq!(names, ["seoTitle", "seoDescription", "seoKeywords", "seoImage"]);
        assert!(matches!(
            tab.fields[0].kind,
            FieldKind::Text {
                max_length: Some(60),
                ..
            }
        ));
        assert!(matches!(
            tab.fields[1].kind,
            FieldKind::Textarea {
                max_length: Some(160),
                ..
            }
        ));
    }

    #[test]
    fn test_image_variants() {
        let optional = image_variants(false);
        assert!(optional.iter().all(|f| !f.required));

        let required = image_variants(true);
        let required: Vec<_> = required
            .iter()
            .filter(|f| f.required)
            .filter_map(|f| f.name)
            .collect();
        assert_eq!(required, ["image1x1"]);
    }

    #[test]
    fn test_slug_hook() {
        let field = slug("name");
        assert!(field.unique);
        assert_eq!(field.hooks, [FieldHook::DeriveSlug { from: "name" }]);
    }
}
