use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab, options};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("dietaryTypes", AdminGroup::ReferenceData)
        .use_as_title("name")
        .default_columns(&["name", "category", "isHealthBased", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Beslenme Türü")
                        .required()
                        .unique()
                        .placeholder("Örn: Vegan, Glutensiz, Keto")
                        .description("Beslenme türünün adı"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu beslenme türünün detaylı açıklaması"),
                    Field::select(
                        "category",
                        options(&[
                            ("dietary-restriction", "Beslenme Kısıtlaması"),
                            ("health-diet", "Sağlık Diyeti"),
                            ("lifestyle", "Yaşam Tarzı"),
                            ("allergy-intolerance", "Alerji/İntolerans"),
                            ("religious-cultural", "Dini/Kültürel"),
                        ]),
                    )
                    .label("Kategori")
                    .description("Beslenme türünün kategorisi"),
                    common::text_list(
                        "allowedIngredients",
                        "İzin Verilen Malzemeler",
                        "ingredient",
                        "sebze, meyve, tahıl",
                        "Bu beslenme türünde tüketilebilen malzemeler",
                    ),
                    common::text_list(
                        "forbiddenIngredients",
                        "Yasak Malzemeler",
                        "ingredient",
                        "et, süt ürünleri, yumurta",
                        "Bu beslenme türünde tüketilmeyen malzemeler",
                    ),
                    common::text_list(
                        "benefits",
                        "Faydalar",
                        "benefit",
                        "kalp sağlığını destekler",
                        "Bu beslenme türünün sağlık faydaları",
                    ),
                    common::flag(
                        "isHealthBased",
                        "Sağlık Odaklı",
                        false,
                        "Bu beslenme türü sağlık amaçlı mı?",
                    ),
                    common::flag(
                        "isAllergyBased",
                        "Alerji Kaynaklı",
                        false,
                        "Bu beslenme türü alerji/intolerans kaynaklı mı?",
                    ),
                ],
            ),
            Tab::new(
                MEDIA_TAB,
                vec![
                    common::featured_image("Bu beslenme türünü temsil eden görsel"),
                    common::icon("Beslenme türü için ikon"),
                ],
            ),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif beslenme türleri tariflerde kullanılabilir"),
                    common::is_featured(),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Vegan Tarifler | Site Adı",
                    description: "Tamamen bitkisel, lezzetli vegan tarifler...",
                    keywords: "vegan tarifler, bitkisel beslenme",
                },
                false,
            ),
        ])])
}
