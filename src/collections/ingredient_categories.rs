use crate::schema::common::{self, GENERAL_TAB, LIST_ORDER, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{AdminGroup, CollectionConfig, Field, Tab};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("ingredientCategories", AdminGroup::ReferenceData)
        .use_as_title("name")
        .default_columns(&["name", "parent", "isActive"])
        .fields(vec![Field::tabs(vec![
            Tab::new(
                GENERAL_TAB,
                vec![
                    Field::text("name")
                        .label("Kategori Adı")
                        .required()
                        .unique()
                        .placeholder("Örn: Sebzeler, Baharatlar, Süt Ürünleri")
                        .description("Malzeme kategorisinin adı"),
                    Field::rich_text("description")
                        .label("Açıklama")
                        .description("Bu kategori hakkında genel bilgiler"),
                    Field::relationship("parent", "ingredientCategories")
                        .label("Üst Kategori")
                        .description("Alt kategori ise üst kategoriyi seçin"),
                    Field::rich_text("storageInstructions")
                        .label("Saklama Talimatları")
                        .description("Bu kategorideki malzemelerin genel saklama koşulları"),
                    Field::rich_text("nutritionalInfo")
                        .label("Besin Değerleri")
                        .description("Bu kategorinin genel besin özellikleri"),
                    Field::array(
                        "seasonality",
                        vec![Field::relationship("season", "seasons").label("Mevsim")],
                    )
                    .label("Mevsimsellik")
                    .description("Bu kategorideki malzemelerin bol olduğu mevsimler"),
                ],
            ),
            Tab::new(
                MEDIA_TAB,
                vec![
                    common::featured_image("Bu kategoriyi temsil eden görsel"),
                    common::icon("Kategori için ikon"),
                    common::theme_color("#4CAF50, #FF9800", "Kategori için tema rengi (hex kod)"),
                    common::gallery("Galeri", "Kategori ile ilgili ek görseller", Vec::new()),
                ],
            ),
            Tab::new(
                MANAGEMENT_TAB,
                vec![
                    common::slug("name"),
                    common::sort_order(LIST_ORDER),
                    common::is_active("Aktif kategoriler malzemelerde kullanılabilir"),
                    common::is_featured(),
                    common::admin_notes(),
                ],
            ),
            common::seo_tab(
                Seo {
                    title: "Sebzeler | Site Adı",
                    description: "Sebzelerle hazırlanan sağlıklı ve lezzetli tarifler...",
                    keywords: "sebze tarifleri, sebze yemekleri",
                },
                true,
            ),
        ])])
}
