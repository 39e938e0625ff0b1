use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab, options};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("cities", AdminGroup::Geography)
        .use_as_title("name")
        .default_columns(&["name", "country", "region", "population", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Şehir Adı")
                        .required()
                        .placeholder("Örn: İstanbul, Roma, Paris")
                        .description("Şehrin tam adı"),
                    Field::relationship("country", "countries")
                        .label("Ülke")
                        .required()
                        .description("Bu şehrin ait olduğu ülke"),
                    Field::relationship("region", "regions")
                        .label("Bölge")
                        .description("Bu şehrin ait olduğu bölge (opsiyonel)"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu şehir hakkında detaylı bilgiler"),
                    Field::group(
                        "coordinates",
                        vec![
                            Field::number("latitude")
                                .label("Enlem")
                                .placeholder("41.0082"),
                            Field::number("longitude")
                                .label("Boylam")
                                .placeholder("28.9784"),
                        ],
                    )
                    .label("Koordinatlar")
                    .description("Şehrin GPS koordinatları"),
                ],
            ),
            Tab::new(MEDIA_TAB, {
                let mut fields = common::image_variants(true);
                fields.extend([
                    common::image(
                        "skylineImage",
                        "Silüet Görseli",
                        "Şehrin silüet/panorama görseli",
                    ),
                    common::icon("Şehir için ikon"),
                    common::theme_color(
                        "#E74C3C, #2ECC71, #F39C12",
                        "Şehir için tema rengi (hex kod)",
                    ),
                    common::gallery(
                        "Galeri",
                        "Şehir ile ilgili ek görseller",
                        vec![
                            Field::text("location")
                                .label("Konum")
                                .placeholder("Sultanahmet, Colosseum, Eiffel Tower"),
                        ],
                    ),
                ]);
                fields
            }),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif şehirler sistemde kullanılabilir"),
                    common::flag(
                        "isCapital",
                        "Başkent mi?",
                        false,
                        "Bu şehir ülkenin başkenti mi?",
                    ),
                    common::flag(
                        "isMajorCity",
                        "Büyük Şehir",
                        false,
                        "Bu şehir büyük bir metropol mü?",
                    ),
                    common::flag(
                        "isTouristDestination",
                        "Turist Destinasyonu",
                        false,
                        "Bu şehir popüler bir turist destinasyonu mu?",
                    ),
                    Field::select(
                        "economicActivity",
                        options(&[
                            ("commerce", "Ticaret"),
                            ("tourism", "Turizm"),
                            ("industry", "Sanayi"),
                            ("services", "Hizmet"),
                            ("agriculture", "Tarım"),
                            ("fishing", "Balıkçılık"),
                            ("technology", "Teknoloji"),
                            ("finance", "Finans"),
                        ]),
                    )
                    .label("Ana Ekonomik Faaliyet")
                    .description("Şehrin ana ekonomik faaliyeti"),
                    common::admin_notes(),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "İstanbul Yemekleri | Site Adı",
                    description: "İstanbul'un en lezzetli sokak lezzetleri ve geleneksel yemek tarifleri...",
                    keywords: "istanbul yemekleri, istanbul mutfağı, balık ekmek",
                },
                true,
            ),
        ])])
}
