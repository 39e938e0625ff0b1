use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab, options};

const MONTHS: &[(&str, &str)] = &[
    ("january", "Ocak"),
    ("february", "Şubat"),
    ("march", "Mart"),
    ("april", "Nisan"),
    ("may", "Mayıs"),
    ("june", "Haziran"),
    ("july", "Temmuz"),
    ("august", "Ağustos"),
    ("september", "Eylül"),
    ("october", "Ekim"),
    ("november", "Kasım"),
    ("december", "Aralık"),
];

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("seasons", AdminGroup::ReferenceData)
        .use_as_title("name")
        .default_columns(&["name", "months", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Mevsim Adı")
                        .required()
                        .unique()
                        .placeholder("Örn: İlkbahar, Yaz, Sonbahar, Kış")
                        .description("Mevsimin adı"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu mevsimin mutfak açısından özellikleri"),
                    Field::array(
                        "months",
                        vec![Field::select("month", options(MONTHS)).label("Ay")],
                    )
                    .label("Aylar")
                    .description("Bu mevsime ait aylar"),
                    common::text_list(
                        "characteristics",
                        "Özellikler",
                        "characteristic",
                        "sıcak, yağışlı, hasat zamanı",
                        "Bu mevsimin karakteristik özellikleri",
                    ),
                    common::text_list(
                        "popularIngredients",
                        "Mevsim Malzemeleri",
                        "ingredient",
                        "domates, kabak, karpuz",
                        "Bu mevsimde bol bulunan malzemeler",
                    ),
                    Field::rich_text("cookingTips")
                        .label("Mutfak İpuçları")
                        .description("Bu mevsime özel pişirme önerileri"),
                ],
            ),
            Tab::new(
                MEDIA_TAB,
                vec![
                    common::featured_image("Bu mevsimi temsil eden görsel"),
                    common::icon("Mevsim için ikon"),
                    common::image(
                        "backgroundImage",
                        "Arka Plan Görseli",
                        "Mevsim sayfası için arka plan görseli",
                    ),
                ],
            ),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif mevsimler tariflerde kullanılabilir"),
                    common::flag(
                        "isCurrent",
                        "Şu Anki Mevsim",
                        false,
                        "Bu mevsim şu anda aktif mi?",
                    ),
                    common::range_group(
                        "temperatureRange",
                        "Sıcaklık Aralığı (°C)",
                        "Bu mevsimin ortalama sıcaklık aralığı",
                        None,
                        None,
                    ),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Yaz Tarifleri | Site Adı",
                    description: "Yaz mevsimine özel serinletici ve hafif tarifler...",
                    keywords: "yaz tarifleri, mevsim yemekleri",
                },
                true,
            ),
        ])])
}
