use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab, options};

/// Units are referenced by symbol in recipes, so they carry no slug.
pub fn collection() -> CollectionConfig {
    CollectionConfig::new("ingredientUnits", AdminGroup::ReferenceData)
        .use_as_title("name")
        .default_columns(&["name", "symbol", "category", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Birim Adı")
                        .required()
                        .unique()
                        .placeholder("Örn: Gram, Su Bardağı, Adet")
                        .description("Ölçü biriminin tam adı"),
                    Field::text("symbol")
                        .label("Sembol")
                        .required()
                        .placeholder("g, ml, adet")
                        .description("Birimin kısaltması"),
                    Field::select(
                        "category",
                        options(&[
                            ("weight", "Ağırlık"),
                            ("volume", "Hacim"),
                            ("piece", "Adet"),
                            ("measure", "Ölçek"),
                        ]),
                    )
                    .label("Kategori")
                    .required()
                    .description("Birimin ölçtüğü büyüklük"),
                    Field::textarea("description")
                        .label("Açıklama")
                        .description("Bu birimin kullanımı hakkında notlar"),
                    Field::number("conversionRate")
                        .label("Dönüşüm Oranı")
                        .placeholder("1000")
                        .description("Temel birime (g veya ml) dönüşüm katsayısı"),
                ],
            ),
            Tab::new(
                MEDIA_TAB,
                vec![
                    common::icon("Birim için ikon"),
                    common::image(
                        "exampleImage",
                        "Örnek Görsel",
                        "Bu ölçünün görsel örneği (ör. dolu bir su bardağı)",
                    ),
                ],
            ),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif birimler tariflerde kullanılabilir"),
                    common::flag(
                        "isPrecise",
                        "Hassas Ölçü",
                        false,
                        "Bu birim hassas bir ölçü mü? (ör. gram evet, tutam hayır)",
                    ),
                    common::admin_notes(),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Ölçü Birimleri | Site Adı",
                    description: "Tariflerde kullanılan ölçü birimleri ve dönüşümleri...",
                    keywords: "ölçü birimleri, mutfak ölçüleri",
                },
                true,
            ),
        ])])
}
