use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("countries", AdminGroup::Geography)
        .use_as_title("name")
        .default_columns(&["name", "code", "continent", "capital", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Ülke Adı")
                        .required()
                        .unique()
                        .placeholder("Örn: Türkiye, İtalya, Fransa")
                        .description("Ülkenin tam adı"),
                    Field::text("code")
                        .label("Ülke Kodu")
                        .required()
                        .unique()
                        .max_length(3)
                        .placeholder("TR, IT, FR")
                        .description("ISO 3166-1 alfa-2 ülke kodu"),
                    Field::relationship("continent", "continents")
                        .label("Kıta")
                        .required()
                        .description("Bu ülkenin bulunduğu kıta"),
                    Field::text("capital")
                        .label("Başkent")
                        .required()
                        .placeholder("Ankara, Roma, Paris")
                        .description("Ülkenin başkenti"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu ülke hakkında genel bilgiler"),
                ],
            ),
            Tab::new(MEDIA_TAB, {
                let mut fields = common::image_variants(true);
                fields.extend([
                    common::image("flag", "Bayrak", "Ülkenin bayrağı"),
                    common::icon("Ülke için ikon"),
                    common::theme_color(
                        "#E74C3C, #27AE60, #3498DB",
                        "Ülke için tema rengi (hex kod)",
                    ),
                    common::gallery("Galeri", "Ülke ile ilgili görseller", Vec::new()),
                ]);
                fields
            }),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif ülkeler sistemde kullanılabilir"),
                    common::flag(
                        "isIndependent",
                        "Bağımsız Ülke",
                        true,
                        "Bu ülke bağımsız bir devlet mi?",
                    ),
                    common::counter(
                        "regionCount",
                        "Bölge Sayısı",
                        "Bu ülkedeki bölge sayısı (otomatik hesaplanır)",
                    ),
                    common::admin_notes(),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Türk Mutfağı Tarifleri | Site Adı",
                    description: "Türk mutfağının en lezzetli geleneksel yemek tarifleri...",
                    keywords: "türk mutfağı, türk yemekleri, türk tarifleri",
                },
                true,
            ),
        ])])
}
