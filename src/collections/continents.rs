use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("continents", AdminGroup::Geography)
        .use_as_title("name")
        .default_columns(&["name", "code", "countryCount", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Kıta Adı")
                        .required()
                        .unique()
                        .placeholder("Örn: Avrupa, Asya, Afrika")
                        .description("Kıtanın tam adı"),
                    Field::text("code")
                        .label("Kıta Kodu")
                        .required()
                        .unique()
                        .max_length(3)
                        .placeholder("EU, AS, AF")
                        .description("Kıta için 2-3 harflik kod"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu kıta hakkında genel bilgiler"),
                ],
            ),
            Tab::new(MEDIA_TAB, {
                let mut fields = common::image_variants(true);
                fields.extend([
                    common::icon("Kıta için ikon"),
                    common::theme_color(
                        "#2196F3, #4CAF50, #FF5722",
                        "Kıta için tema rengi (hex kod)",
                    ),
                ]);
                fields
            }),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif kıtalar sistemde kullanılabilir"),
                    common::counter(
                        "countryCount",
                        "Ülke Sayısı",
                        "Bu kıtadaki ülke sayısı (otomatik hesaplanır)",
                    ),
                    common::admin_notes(),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Avrupa Mutfağı Tarifleri | Site Adı",
                    description: "Avrupa'nın en lezzetli geleneksel yemek tarifleri...",
                    keywords: "avrupa mutfağı, avrupa yemekleri",
                },
                true,
            ),
        ])])
}
