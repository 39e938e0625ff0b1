use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab, options};

/// Difficulty levels are addressed by `level`, so they carry no slug.
pub fn collection() -> CollectionConfig {
    CollectionConfig::new("difficultyLevels", AdminGroup::ReferenceData)
        .use_as_title("name")
        .default_columns(&["name", "level", "skillRequired", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Zorluk Seviyesi")
                        .required()
                        .unique()
                        .placeholder("Örn: Kolay, Orta, Zor")
                        .description("Zorluk seviyesinin adı"),
                    Field::number("level")
                        .label("Seviye")
                        .required()
                        .range(Some(1.0), Some(10.0))
                        .description("1-10 arası sayısal zorluk değeri"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu zorluk seviyesinin açıklaması"),
                    Field::rich_text("skillRequired")
                        .label("Gerekli Beceriler")
                        .description("Bu seviye için gereken mutfak becerileri"),
                    common::range_group(
                        "estimatedTime",
                        "Tahmini Süre (dakika)",
                        "Bu seviyedeki tariflerin tipik hazırlık süresi",
                        Some(0.0),
                        None,
                    ),
                    common::text_list(
                        "prerequisites",
                        "Ön Koşullar",
                        "prerequisite",
                        "temel bıçak kullanımı",
                        "Bu seviyeye başlamadan önce bilinmesi gerekenler",
                    ),
                ],
            ),
            Tab::new(
                MEDIA_TAB,
                vec![
                    common::featured_image("Bu zorluk seviyesini temsil eden görsel"),
                    common::icon("Zorluk seviyesi için ikon"),
                    common::image("badge", "Rozet", "Zorluk seviyesi rozeti"),
                ],
            ),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif zorluk seviyeleri tariflerde kullanılabilir"),
                    common::flag(
                        "isVisible",
                        "Görünür",
                        true,
                        "Bu seviye kullanıcılara gösterilsin mi?",
                    ),
                    Field::select(
                        "recommendedFor",
                        options(&[
                            ("beginners", "Yeni Başlayanlar"),
                            ("intermediate", "Orta Seviye"),
                            ("advanced", "İleri Seviye"),
                            ("professionals", "Profesyoneller"),
                        ]),
                    )
                    .label("Önerilen Kitle")
                    .description("Bu seviyenin önerildiği kullanıcı kitlesi"),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Kolay Tarifler | Site Adı",
                    description: "Yeni başlayanlar için kolay ve pratik tarifler...",
                    keywords: "kolay tarifler, pratik yemekler",
                },
                true,
            ),
        ])])
}
