//! Recipes: the main content type, with drafts and published-only public
//! reads.

use crate::schema::common::{self, GENERAL_TAB, MANAGEMENT_TAB, MEDIA_TAB, Seo};
use crate::schema::{
    AdminGroup, CollectionConfig, CollectionHook, Field, FieldHook, ReadAccess, Tab, Validator,
    options,
};

pub const STATUS_PUBLISHED: &str = "published";

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("recipes", AdminGroup::ContentManagement)
        .use_as_title("title")
        .default_columns(&[
            "title",
            "category",
            "difficulty",
            "cookingTime",
            "status",
            "publishedAt",
        ])
        .default_limit(20)
        .read(ReadAccess::WhenEquals {
            field: "status",
            value: STATUS_PUBLISHED,
        })
        .drafts()
        .fields(vec![Field::tabs(vec![
            general_tab(),
            media_tab(),
            details_tab(),
            ingredients_tab(),
            instructions_tab(),
            nutrition_tab(),
            common::seo_tab(
                Seo {
                    title: "Klasik Mercimek Çorbası Tarifi | Site Adı",
                    description: "Evde kolayca yapabileceğiniz nefis mercimek çorbası tarifi...",
                    keywords: "mercimek çorbası, çorba tarifi",
                },
                false,
            ),
            management_tab(),
        ])])
        .hook(CollectionHook::DeriveSlug {
            field: "slug",
            from: "title",
        })
        .hook(CollectionHook::SumWhenSet {
            target: "totalTime",
            of: vec!["prepTime", "cookingTime"],
        })
        .hook(CollectionHook::StampOnStatus {
            target: "publishedAt",
            status_field: "status",
            status: STATUS_PUBLISHED,
        })
}

fn general_tab() -> Tab {
    Tab::new(
        GENERAL_TAB,
        vec![
            Field::text("title")
                .label("Tarif Adı")
                .required()
                .length(Some(3), Some(100))
                .placeholder("Örn: Klasik Mercimek Çorbası")
                .description("Tarifin ana başlığı")
                .validate(Validator::RecipeTitle),
            Field::rich_text("description")
                .label("Kısa Açıklama")
                .required()
                .description("Tarifin özet açıklaması (arama sonuçlarında görünür)"),
            Field::relationship("category", "categories")
                .label("Kategori")
                .required()
                .description("Tarifin ait olduğu ana kategori"),
            common::text_list(
                "tags",
                "Etiketler",
                "tag",
                "vegetarian, glutensiz, kolay",
                "Tarif için etiketler (vegetarian, glutensiz, vs.)",
            ),
        ],
    )
}

fn media_tab() -> Tab {
    let mut fields = common::image_variants(false);
    fields.extend([
        common::gallery(
            "Galeri Görselleri",
            "Tarif için ek görseller (adım adım fotoğraflar, vs.)",
            vec![common::flag(
                "isStepImage",
                "Adım Görseli mi?",
                false,
                "Bu görsel pişirme adımlarından biri mi?",
            )],
        ),
        Field::text("videoUrl")
            .label("Video URL")
            .placeholder("https://youtube.com/watch?v=...")
            .description("YouTube, Vimeo veya diğer video platformu linki")
            .validate(Validator::Url),
        common::image(
            "thumbnailImage",
            "Video Küçük Resmi",
            "Video için özel küçük resim (opsiyonel)",
        ),
    ]);
    Tab::new(MEDIA_TAB, fields)
}

fn minutes(name: &'static str, label: &'static str, description: &'static str) -> Field {
    Field::number(name)
        .label(label)
        .required()
        .range(Some(0.0), Some(1440.0))
        .width("25%")
        .description(description)
}

fn details_tab() -> Tab {
    Tab::new(
        "Tarif Detayları",
        vec![
            Field::row(vec![
                Field::number("servings")
                    .label("Kaç Kişilik")
                    .required()
                    .range(Some(1.0), Some(50.0))
                    .default_value(4)
                    .width("25%")
                    .description("Bu tarif kaç kişi için?"),
                minutes("prepTime", "Hazırlık Süresi (dakika)", "Hazırlık süresi"),
                minutes("cookingTime", "Pişirme Süresi (dakika)", "Pişirme süresi"),
                Field::number("totalTime")
                    .label("Toplam Süre (dakika)")
                    .width("25%")
                    .read_only()
                    .description("Otomatik hesaplanır")
                    .hook(FieldHook::Sum {
                        of: vec!["prepTime", "cookingTime"],
                    }),
            ]),
            Field::row(vec![
                Field::relationship("difficulty", "difficultyLevels")
                    .label("Zorluk Seviyesi")
                    .required()
                    .width("25%")
                    .description("Tarifin zorluk derecesi"),
                Field::relationship("cuisine", "cuisines")
                    .label("Mutfak")
                    .width("25%")
                    .description("Hangi mutfağa ait?"),
                Field::relationship("cookingMethod", "cookingMethods")
                    .label("Pişirme Yöntemi")
                    .width("25%")
                    .description("Ana pişirme yöntemi"),
                Field::relationship("season", "seasons")
                    .label("Mevsim")
                    .width("25%")
                    .description("Hangi mevsimde ideal?"),
            ]),
            Field::array(
                "dietaryInfo",
                vec![Field::relationship("diet", "dietaryTypes")],
            )
            .label("Diyet Bilgileri")
            .description("Özel diyet gereksinimlerine uygunluk"),
        ],
    )
}

fn ingredients_tab() -> Tab {
    Tab::new(
        "Malzemeler",
        vec![
            Field::array(
                "ingredients",
                vec![
                    Field::row(vec![
                        Field::relationship("ingredient", "ingredients")
                            .label("Malzeme")
                            .required()
                            .width("40%")
                            .description("Listeden malzeme seçin veya yeni ekleyin"),
                        Field::text("amount")
                            .label("Miktar")
                            .required()
                            .width("20%")
                            .placeholder("2, 1/2, 300"),
                        Field::relationship("unit", "ingredientUnits")
                            .label("Birim")
                            .required()
                            .width("20%"),
                        Field::text("notes")
                            .label("Not")
                            .width("20%")
                            .placeholder("ince doğranmış, büyük boy"),
                    ]),
                    common::flag(
                        "isOptional",
                        "İsteğe Bağlı",
                        false,
                        "Bu malzeme opsiyonel mi?",
                    ),
                    Field::relationship("category", "ingredientCategories")
                        .label("Malzeme Kategorisi")
                        .description("Malzeme gruplama için"),
                ],
            )
            .label("Malzemeler")
            .required()
            .min_rows(1)
            .description("Tarif için gerekli tüm malzemeler"),
        ],
    )
}

fn instructions_tab() -> Tab {
    Tab::new(
        "Hazırlanış",
        vec![
            Field::array(
                "instructions",
                vec![
                    Field::rich_text("step")
                        .label("Adım")
                        .required()
                        .description("Bu adımda yapılacakları detaylı şekilde açıklayın"),
                    common::image(
                        "image",
                        "Adım Görseli",
                        "Bu adım için görsel (opsiyonel)",
                    ),
                    Field::number("duration")
                        .label("Süre (dakika)")
                        .min(0.0)
                        .description("Bu adımın süresi (opsiyonel)"),
                    Field::number("temperature")
                        .label("Sıcaklık (°C)")
                        .range(Some(0.0), Some(300.0))
                        .description("Fırın sıcaklığı vs. (opsiyonel)"),
                    Field::textarea("tips")
                        .label("İpuçları")
                        .placeholder("Bu adım için özel ipuçları...")
                        .description("Bu adım için öneriler ve ipuçları"),
                ],
            )
            .label("Pişirme Adımları")
            .required()
            .min_rows(1)
            .description("Tarifin adım adım hazırlanışı"),
            Field::rich_text("chefsTips")
                .label("Şefin Önerileri")
                .description("Genel ipuçları, alternatifler ve öneriler"),
        ],
    )
}

fn nutrient(name: &'static str, label: &'static str) -> Field {
    Field::number(name).label(label).min(0.0).width("25%")
}

fn nutrition_tab() -> Tab {
    Tab::new(
        "Besin Değerleri",
        vec![
            Field::group(
                "nutrition",
                vec![
                    Field::row(vec![
                        nutrient("calories", "Kalori").description("Kalori (kcal)"),
                        nutrient("protein", "Protein (g)"),
                        nutrient("carbs", "Karbonhidrat (g)"),
                        nutrient("fat", "Yağ (g)"),
                    ]),
                    Field::row(vec![
                        nutrient("fiber", "Lif (g)"),
                        nutrient("sugar", "Şeker (g)"),
                        nutrient("sodium", "Sodyum (mg)"),
                        nutrient("cholesterol", "Kolesterol (mg)"),
                    ]),
                ],
            )
            .label("Besin Değerleri (Porsiyon Başına)")
            .description("Besin değerleri bilgileri (opsiyonel)"),
        ],
    )
}

fn management_tab() -> Tab {
    Tab::new(
        MANAGEMENT_TAB,
        vec![
            common::slug("title")
                .placeholder("klasik-mercimek-corbasi")
                .description("URL'de kullanılacak benzersiz kimlik"),
            Field::row(vec![
                Field::select(
                    "status",
                    options(&[
                        ("draft", "Taslak"),
                        (STATUS_PUBLISHED, "Yayında"),
                        ("archived", "Arşivlendi"),
                    ]),
                )
                .label("Durum")
                .required()
                .default_value("draft")
                .width("25%")
                .description("Tarifin yayın durumu"),
                common::flag(
                    "featured",
                    "Öne Çıkarılsın mı?",
                    false,
                    "Ana sayfada öne çıkarılsın mı?",
                )
                .width("25%"),
                common::flag(
                    "allowComments",
                    "Yorumlara İzin Ver",
                    true,
                    "Kullanıcılar yorum yapabilsin mi?",
                )
                .width("25%"),
                common::flag(
                    "allowRating",
                    "Puanlamaya İzin Ver",
                    true,
                    "Kullanıcılar puan verebilsin mi?",
                )
                .width("25%"),
            ]),
            Field::row(vec![
                Field::date("publishedAt")
                    .label("Yayın Tarihi")
                    .width("50%")
                    .description("Tarifin yayınlanma tarihi"),
                Field::relationship("author", "users")
                    .label("Yazar")
                    .width("50%")
                    .description("Tarifi yazan kişi"),
            ]),
            Field::textarea("notes")
                .label("Editör Notları")
                .description("Sadece editörler için notlar (kullanıcılara görünmez)"),
        ],
    )
}

/// Smallest recipe document that passes validation, given existing ids.
#[cfg(test)]
pub fn sample() -> serde_json::Value {
    serde_json::json!({
        "title": "Klasik Mercimek Çorbası",
        "description": { "root": { "children": [] } },
        "category": "cat-1",
        "prepTime": 10,
        "cookingTime": 30,
        "difficulty": "easy",
        "ingredients": [
            { "ingredient": "lentil", "amount": "1", "unit": "cup" }
        ],
        "instructions": [
            { "step": { "root": { "children": [] } } }
        ]
    })
}
