use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab, options};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("regions", AdminGroup::Geography)
        .use_as_title("name")
        .default_columns(&["name", "country", "type", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Bölge Adı")
                        .required()
                        .placeholder("Örn: Ege Bölgesi, Toskana, Andalusia")
                        .description("Bölgenin tam adı"),
                    Field::relationship("country", "countries")
                        .label("Ülke")
                        .required()
                        .description("Bu bölgenin ait olduğu ülke"),
                    Field::select(
                        "type",
                        options(&[
                            ("geographic", "Coğrafi Bölge"),
                            ("administrative", "İdari Bölge/Eyalet"),
                            ("cultural", "Kültürel Bölge"),
                            ("economic", "Ekonomik Bölge"),
                        ]),
                    )
                    .label("Bölge Türü")
                    .required()
                    .description("Bu bölgenin kategorisi"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu bölge hakkında detaylı bilgiler"),
                    Field::text("capital")
                        .label("Merkez Şehir")
                        .placeholder("İzmir, Floransa, Sevilla")
                        .description("Bölgenin merkez şehri (varsa)"),
                    common::text_list(
                        "characteristics",
                        "Özellikler",
                        "characteristic",
                        "deniz kıyısı, dağlık, tarım bölgesi",
                        "Bölgenin karakteristik özellikleri",
                    ),
                    Field::select(
                        "climate",
                        options(&[
                            ("mediterranean", "Akdeniz İklimi"),
                            ("continental", "Karasal İklim"),
                            ("oceanic", "Okyanus İklimi"),
                            ("tropical", "Tropik İklim"),
                            ("desert", "Çöl İklimi"),
                            ("polar", "Kutup İklimi"),
                        ]),
                    )
                    .label("İklim")
                    .description("Bölgenin hakim iklim türü"),
                ],
            ),
            Tab::new(MEDIA_TAB, {
                let mut fields = common::image_variants(false);
                fields.extend([
                    common::icon("Bölge için ikon"),
                    common::theme_color(
                        "#3498DB, #E67E22, #9B59B6",
                        "Bölge için tema rengi (hex kod)",
                    ),
                    common::gallery("Galeri", "Bölge ile ilgili ek görseller", Vec::new()),
                ]);
                fields
            }),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif bölgeler sistemde kullanılabilir"),
                    common::flag(
                        "isTouristDestination",
                        "Turist Bölgesi",
                        false,
                        "Bu bölge popüler bir turist destinasyonu mu?",
                    ),
                    common::counter(
                        "cityCount",
                        "Şehir Sayısı",
                        "Bu bölgedeki şehir sayısı (otomatik hesaplanır)",
                    ),
                    Field::select(
                        "economicActivity",
                        options(&[
                            ("agriculture", "Tarım"),
                            ("tourism", "Turizm"),
                            ("industry", "Sanayi"),
                            ("services", "Hizmet"),
                            ("fishing", "Balıkçılık"),
                            ("mining", "Madencilik"),
                        ]),
                    )
                    .label("Ana Ekonomik Faaliyet")
                    .description("Bölgenin ana ekonomik faaliyeti"),
                    common::admin_notes(),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Ege Bölgesi Yemekleri | Site Adı",
                    description:
                        "Ege bölgesinin taze deniz ürünleri ile hazırlanan nefis tarifleri...",
                    keywords: "ege mutfağı, ege yemekleri, deniz ürünleri",
                },
                true,
            ),
        ])])
}
