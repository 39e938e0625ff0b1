use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab, options};

/// Primary location: one relationship per scope, shown for the matching `type`.
fn primary_location() -> Field {
    Field::group(
        "primaryLocation",
        vec![
            Field::select(
                "type",
                options(&[
                    ("continent", "Kıta"),
                    ("country", "Ülke"),
                    ("region", "Bölge"),
                    ("city", "Şehir"),
                ]),
            )
            .label("Konum Türü")
            .required()
            .description("Bu mutfağın ana konum türü"),
            Field::relationship("continent", "continents")
                .label("Kıta")
                .shown_when("type", "continent"),
            Field::relationship("country", "countries")
                .label("Ülke")
                .shown_when("type", "country"),
            Field::relationship("region", "regions")
                .label("Bölge")
                .shown_when("type", "region"),
            Field::relationship("city", "cities")
                .label("Şehir")
                .shown_when("type", "city"),
        ],
    )
    .label("Ana Konum")
    .description("Bu mutfağın en çok ilişkilendirildiği konum")
}

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("cuisines", AdminGroup::ReferenceData)
        .use_as_title("name")
        .default_columns(&["name", "region", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Mutfak Adı")
                        .required()
                        .unique()
                        .placeholder("Örn: Türk Mutfağı, İtalyan Mutfağı")
                        .description("Mutfağın tam adı"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu mutfak hakkında genel bilgiler ve özellikleri"),
                    Field::group(
                        "geographicScope",
                        vec![
                            Field::relationship("continent", "continents")
                                .label("Kıta")
                                .description("Bu mutfağın ait olduğu kıta"),
                            Field::relationship("countries", "countries")
                                .label("Ülkeler")
                                .has_many()
                                .description("Bu mutfağın yaygın olduğu ülkeler"),
                            Field::relationship("regions", "regions")
                                .label("Bölgeler")
                                .has_many()
                                .description("Bu mutfağın yaygın olduğu bölgeler"),
                            Field::relationship("cities", "cities")
                                .label("Şehirler")
                                .has_many()
                                .description("Bu mutfağın özdeşleştiği şehirler"),
                        ],
                    )
                    .label("Coğrafi Kapsam")
                    .description("Bu mutfağın coğrafi yayılımı"),
                    primary_location(),
                    common::text_list(
                        "characteristics",
                        "Karakteristik Özellikler",
                        "characteristic",
                        "baharatlı, zeytinyağlı, et ağırlıklı",
                        "Bu mutfağın karakteristik özellikleri",
                    ),
                    common::text_list(
                        "popularIngredients",
                        "Popüler Malzemeler",
                        "ingredient",
                        "domates, biber, zeytinyağı",
                        "Bu mutfakta sık kullanılan malzemeler",
                    ),
                ],
            ),
            Tab::new(MEDIA_TAB, {
                let mut fields = common::image_variants(false);
                fields.extend([
                    common::icon("Mutfak için ikon"),
                    common::image(
                        "flag",
                        "Bayrak/Simge",
                        "Mutfağı temsil eden bayrak veya simge",
                    ),
                ]);
                fields
            }),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif mutfaklar tariflerde kullanılabilir"),
                    common::is_featured(),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Türk Mutfağı Tarifleri | Site Adı",
                    description: "Geleneksel Türk mutfağının en lezzetli tarifleri...",
                    keywords: "türk mutfağı, geleneksel tarifler",
                },
                false,
            ),
        ])])
}
