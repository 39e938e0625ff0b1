use crate::media::AspectRatio;
use crate::schema::{AdminGroup, CollectionConfig, Field, SelectOption, UploadConfig, Validator};

pub fn collection() -> CollectionConfig {
    CollectionConfig::new("media", AdminGroup::MediaManagement)
        .use_as_title("filename")
        .upload(UploadConfig::media())
        .fields(vec![
            Field::select("aspectRatio", ratio_options())
                .label("Görsel Oranı")
                .required()
                .description("Yüklenecek görselin aspect ratio'sunu seçin")
                .validate(Validator::AspectRatio),
            Field::text("alt")
                .label("Alt Text")
                .placeholder("Görselin kısa açıklaması")
                .description("Görsel için açıklama metni (kullanıcılara gösterilir)"),
            // written by the upload step
            Field::text("filename").unique().read_only(),
            Field::text("mimeType").read_only(),
            Field::number("filesize").min(0.0).read_only(),
            Field::number("width").min(0.0).read_only(),
            Field::number("height").min(0.0).read_only(),
        ])
}

fn ratio_options() -> Vec<SelectOption> {
    AspectRatio::ALL
        .into_iter()
        .map(|ratio| SelectOption {
            label: ratio_label(ratio),
            value: ratio.value(),
        })
        .collect()
}

const fn ratio_label(ratio: AspectRatio) -> &'static str {
    match ratio {
        AspectRatio::Landscape => "16:9 Yatay (1920×1080)",
        AspectRatio::Square => "1:1 Kare (1920×1920)",
        AspectRatio::Portrait => "9:16 Dikey (1920×3413)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_labels_match_presets() {
        for ratio in AspectRatio::ALL {
            let expected = format!(
                "{} ({})",
                ratio.display_name(crate::locale::Locale::Tr),
                ratio.recommended()
            );
            assert_eq!(ratio_label(ratio), expected);
        }
    }
}
