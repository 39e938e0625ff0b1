use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab, options};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("ingredients", AdminGroup::ReferenceData)
        .use_as_title("name")
        .default_columns(&["name", "category", "defaultUnit", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Malzeme Adı")
                        .required()
                        .unique()
                        .placeholder("Örn: Domates, Zeytinyağı, Kırmızı Mercimek")
                        .description("Malzemenin adı"),
                    Field::textarea("description")
                        .label("Kısa Açıklama")
                        .description("Malzeme hakkında kısa bilgi"),
                    Field::rich_text("content")
                        .label("Detaylı Bilgi")
                        .description("Malzemenin kullanımı, besin değeri ve kökeni"),
                    Field::relationship("category", "ingredientCategories")
                        .label("Kategori")
                        .required()
                        .description("Malzemenin ait olduğu kategori"),
                    Field::relationship("defaultUnit", "ingredientUnits")
                        .label("Varsayılan Birim")
                        .required()
                        .description("Tariflerde önerilecek ölçü birimi"),
                    Field::relationship("seasons", "seasons")
                        .label("Mevsimler")
                        .has_many()
                        .description("Malzemenin bol bulunduğu mevsimler"),
                    Field::textarea("storageInstructions")
                        .label("Saklama Talimatları")
                        .description("Malzemenin nasıl saklanması gerektiği"),
                ],
            ),
            Tab::new(MEDIA_TAB, {
                let mut fields = common::image_variants(false);
                fields.push(common::icon("Malzeme için ikon"));
                fields
            }),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif malzemeler tariflerde kullanılabilir"),
                    common::flag(
                        "isOrganic",
                        "Organik",
                        false,
                        "Bu malzeme organik olarak mı öneriliyor?",
                    ),
                    Field::number("avgPrice")
                        .label("Ortalama Fiyat (TL)")
                        .min(0.0)
                        .description("Birim başına yaklaşık fiyat"),
                    Field::select(
                        "availability",
                        options(&[
                            ("common", "Yaygın"),
                            ("moderate", "Orta"),
                            ("rare", "Nadir"),
                            ("imported", "İthal"),
                        ]),
                    )
                    .label("Bulunabilirlik")
                    .default_value("common")
                    .description("Malzemenin piyasada ne kadar kolay bulunduğu"),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Domates ile Tarifler | Site Adı",
                    description: "Domates ile hazırlanan en lezzetli tarifler...",
                    keywords: "domates tarifleri, domatesli yemekler",
                },
                false,
            ),
        ])])
}
