use crate::schema::common::{self, GENERAL_TAB, MANAGEMENT_TAB, SEO_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, CollectionHook, Field, Tab, Validator};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("categories", AdminGroup::ContentManagement)
        .use_as_title("name")
        .default_columns(&["name", "slug", "parent", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Kategori Adı")
                        .required()
                        .length(Some(2), Some(50))
                        .placeholder("Örn: Ana Yemek, Tatlı, Çorba")
                        .description("Kategorinin görünür adı")
                        .validate(Validator::CategoryName),
                    Field::textarea("description")
                        .label("Açıklama")
                        .max_length(500)
                        .placeholder("Bu kategori hakkında kısa bir açıklama")
                        .description("Kategorinin açıklaması (SEO için önemli)"),
                    Field::relationship("parent", "categories")
                        .label("Üst Kategori")
                        .description("Bu kategori bir alt kategori ise üst kategorisini seçin"),
                ],
            ),
            Tab::new(
                "Images",
                vec![
                    format_group(
                        "JPG",
                        [
                            ("jpg16x9", "Yatay (16:9 - 1920x1080 - JPG)"),
                            ("jpg1x1", "Kare (1:1 - 1080x1080 - JPG)"),
                            ("jpg1x2", "Dikey (1:2 - 1080x2160 - JPG)"),
                        ],
                    ),
                    format_group(
                        "PNG",
                        [
                            ("png16x9", "Yatay (16:9 - 1920x1080 - PNG)"),
                            ("png1x1", "Kare (1:1 - 1080x1080 - PNG)"),
                            ("png1x2", "Dikey (1:2 - 1080x2160 - PNG)"),
                        ],
                    ),
                ],
            ),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name")
                        .placeholder("ana-yemek, tatli, corba")
                        .description("URL'de kullanılacak benzersiz kimlik"),
                    common::sort_order(
                        "Kategorilerin sıralanma düzeni (düşük sayılar önce görünür)",
                    ),
                    common::is_active("Kategorinin sitede görünür olup olmayacağı"),
                ],
            ),
            Tab::new(SEO_TAB, {
                let mut fields = common::seo_fields(Seo {
                    title: "Ana Yemek Tarifleri | Site Adı",
                    description: "Nefis ana yemek tarifleri, kolay ve pratik tarifler...",
                    keywords: "yemek tarifi, ana yemek",
                });
                fields.push(
                    Field::text("canonicalUrl")
                        .label("Canonical URL")
                        .placeholder("https://example.com/kategori/ana-yemek")
                        .description("Bu sayfa için canonical URL (opsiyonel)"),
                );
                fields
            }),
        ])])
        .hook(CollectionHook::DeriveSlug {
            field: "slug",
            from: "name",
        })
}

/// Group of the three aspect-ratio uploads of one file format.
fn format_group(name: &'static str, uploads: [(&'static str, &'static str); 3]) -> Field {
    Field::group(
        name,
        uploads
            .into_iter()
            .map(|(name, label)| Field::upload(name).label(label))
            .collect(),
    )
    .label(name)
}
