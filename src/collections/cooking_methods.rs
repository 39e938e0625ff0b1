use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab, options};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("cookingMethods", AdminGroup::ReferenceData)
        .use_as_title("name")
        .default_columns(&["name", "category", "averageTime", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Pişirme Yöntemi")
                        .required()
                        .unique()
                        .placeholder("Örn: Fırında, Izgara, Haşlama")
                        .description("Pişirme yönteminin adı"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu pişirme yönteminin detaylı açıklaması"),
                    Field::select(
                        "category",
                        options(&[
                            ("hot-cooking", "Sıcak Pişirme"),
                            ("cold-preparation", "Soğuk Hazırlama"),
                            ("mixed-method", "Karma Yöntem"),
                        ]),
                    )
                    .label("Kategori")
                    .description("Pişirme yönteminin kategorisi"),
                    Field::number("averageTime")
                        .label("Ortalama Süre (dakika)")
                        .min(0.0)
                        .description("Bu yöntemle ortalama pişirme süresi"),
                    common::range_group(
                        "temperature",
                        "Sıcaklık Aralığı (°C)",
                        "Pişirme sıcaklığı aralığı",
                        Some(0.0),
                        Some(300.0),
                    ),
                    common::text_list(
                        "equipment",
                        "Gerekli Ekipmanlar",
                        "item",
                        "fırın, tava, tencere",
                        "Bu yöntem için gerekli mutfak ekipmanları",
                    ),
                    Field::rich_text("tips")
                        .label("İpuçları")
                        .description("Bu pişirme yöntemi için önemli ipuçları"),
                ],
            ),
            Tab::new(
                MEDIA_TAB,
                vec![
                    common::featured_image("Bu pişirme yöntemini temsil eden görsel"),
                    common::icon("Pişirme yöntemi için ikon"),
                    Field::text("instructionalVideo")
                        .label("Eğitim Videosu URL")
                        .placeholder("https://youtube.com/watch?v=...")
                        .description("Bu yöntemi anlatan video linki"),
                ],
            ),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif pişirme yöntemleri tariflerde kullanılabilir"),
                    common::is_featured(),
                    Field::relationship("difficultyRequired", "difficultyLevels")
                        .label("Gerekli Zorluk Seviyesi")
                        .description("Bu yöntem için minimum zorluk seviyesi"),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Fırında Pişirme Yöntemi | Site Adı",
                    description: "Fırında pişirme yöntemi ile hazırlanan en lezzetli tarifler...",
                    keywords: "fırında pişirme, fırın tarifleri",
                },
                false,
            ),
        ])])
}
