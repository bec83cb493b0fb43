use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Gravity anchor used when cropping or embedding.
///
/// Serializes as the integer code the service expects, never the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    Centre,
    North,
    East,
    South,
    West,
    Smart,
}

impl Gravity {
    /// Integer code understood by the service.
    pub fn code(self) -> i32 {
        match self {
            Gravity::Centre => 0,
            Gravity::North => 1,
            Gravity::East => 2,
            Gravity::South => 3,
            Gravity::West => 4,
            Gravity::Smart => 5,
        }
    }
}

impl Serialize for Gravity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

/// Output image format.
///
/// Serializes as the integer code the service expects, never the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Webp,
    Png,
    Tiff,
    Gif,
    Pdf,
    Svg,
    Magick,
    Heif,
    Avif,
}

impl ImageType {
    /// Integer code understood by the service.
    pub fn code(self) -> i32 {
        match self {
            ImageType::Jpeg => 1,
            ImageType::Webp => 2,
            ImageType::Png => 3,
            ImageType::Tiff => 4,
            ImageType::Gif => 5,
            ImageType::Pdf => 6,
            ImageType::Svg => 7,
            ImageType::Magick => 8,
            ImageType::Heif => 9,
            ImageType::Avif => 10,
        }
    }
}

impl Serialize for ImageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

/// Transform parameters for a proxied image.
///
/// Every field is independently optional; unset fields never reach the
/// query string or the request body. The service is the sole interpreter of
/// the values, this type only serializes them: numbers render dot-decimal,
/// booleans render lowercase, enums render as their integer code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransformOptions {
    // Geometry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(rename = "areaheight", skip_serializing_if = "Option::is_none")]
    pub area_height: Option<i32>,
    #[serde(rename = "areawidth", skip_serializing_if = "Option::is_none")]
    pub area_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<i32>,

    // Encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<i32>,
    /// Output format; defaults to the source format when unset.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interlace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lossless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<bool>,

    // Layout toggles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enlarge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(rename = "noautorotate", skip_serializing_if = "Option::is_none")]
    pub no_auto_rotate: Option<bool>,
    #[serde(rename = "noprofile", skip_serializing_if = "Option::is_none")]
    pub no_profile: Option<bool>,
    #[serde(rename = "stripmetadata", skip_serializing_if = "Option::is_none")]
    pub strip_metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<Gravity>,

    // Free-form knobs passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<String>,
    #[serde(rename = "watermarkimage", skip_serializing_if = "Option::is_none")]
    pub watermark_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    #[serde(rename = "gaussianblur", skip_serializing_if = "Option::is_none")]
    pub gaussian_blur: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpen: Option<String>,
    #[serde(rename = "outputicc", skip_serializing_if = "Option::is_none")]
    pub output_icc: Option<String>,
    #[serde(rename = "inputicc", skip_serializing_if = "Option::is_none")]
    pub input_icc: Option<String>,

    // Tone adjustments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
}

fn push<T: Display>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<T>) {
    if let Some(v) = value {
        pairs.push((key, v.to_string()));
    }
}

impl TransformOptions {
    /// Flatten the set fields into `(key, value)` pairs.
    ///
    /// Keys are the lowercase parameter names the service expects. No
    /// ordering is guaranteed here; canonical ordering is imposed when the
    /// query string is assembled.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "height", &self.height);
        push(&mut pairs, "width", &self.width);
        push(&mut pairs, "areaheight", &self.area_height);
        push(&mut pairs, "areawidth", &self.area_width);
        push(&mut pairs, "top", &self.top);
        push(&mut pairs, "left", &self.left);
        push(&mut pairs, "zoom", &self.zoom);
        push(&mut pairs, "quality", &self.quality);
        push(&mut pairs, "compression", &self.compression);
        push(&mut pairs, "type", &self.image_type.map(ImageType::code));
        push(&mut pairs, "interlace", &self.interlace);
        push(&mut pairs, "lossless", &self.lossless);
        push(&mut pairs, "palette", &self.palette);
        push(&mut pairs, "crop", &self.crop);
        push(&mut pairs, "enlarge", &self.enlarge);
        push(&mut pairs, "embed", &self.embed);
        push(&mut pairs, "flip", &self.flip);
        push(&mut pairs, "flop", &self.flop);
        push(&mut pairs, "force", &self.force);
        push(&mut pairs, "noautorotate", &self.no_auto_rotate);
        push(&mut pairs, "noprofile", &self.no_profile);
        push(&mut pairs, "stripmetadata", &self.strip_metadata);
        push(&mut pairs, "trim", &self.trim);
        push(&mut pairs, "gravity", &self.gravity.map(Gravity::code));
        push(&mut pairs, "extend", &self.extend);
        push(&mut pairs, "rotate", &self.rotate);
        push(&mut pairs, "background", &self.background);
        push(&mut pairs, "watermark", &self.watermark);
        push(&mut pairs, "watermarkimage", &self.watermark_image);
        push(&mut pairs, "interpolator", &self.interpolator);
        push(&mut pairs, "interpretation", &self.interpretation);
        push(&mut pairs, "gaussianblur", &self.gaussian_blur);
        push(&mut pairs, "sharpen", &self.sharpen);
        push(&mut pairs, "outputicc", &self.output_icc);
        push(&mut pairs, "inputicc", &self.input_icc);
        push(&mut pairs, "threshold", &self.threshold);
        push(&mut pairs, "gamma", &self.gamma);
        push(&mut pairs, "brightness", &self.brightness);
        push(&mut pairs, "contrast", &self.contrast);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_options_serialize_to_nothing() {
        assert!(TransformOptions::default().to_query_pairs().is_empty());
        assert_eq!(
            serde_json::to_string(&TransformOptions::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_only_set_fields_appear() {
        let options = TransformOptions {
            height: Some(100),
            width: Some(100),
            image_type: Some(ImageType::Webp),
            ..Default::default()
        };

        let pairs = options.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("height", "100".to_string()),
                ("width", "100".to_string()),
                ("type", "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_enums_serialize_as_integer_codes() {
        let options = TransformOptions {
            gravity: Some(Gravity::Smart),
            image_type: Some(ImageType::Avif),
            ..Default::default()
        };

        let pairs = options.to_query_pairs();
        assert!(pairs.contains(&("gravity", "5".to_string())));
        assert!(pairs.contains(&("type", "10".to_string())));

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"type":10,"gravity":5}"#);
    }

    #[test]
    fn test_booleans_render_lowercase() {
        let options = TransformOptions {
            crop: Some(true),
            enlarge: Some(false),
            ..Default::default()
        };

        let pairs = options.to_query_pairs();
        assert!(pairs.contains(&("crop", "true".to_string())));
        assert!(pairs.contains(&("enlarge", "false".to_string())));
    }

    #[test]
    fn test_doubles_render_dot_decimal() {
        let options = TransformOptions {
            gamma: Some(2.2),
            brightness: Some(-0.5),
            ..Default::default()
        };

        let pairs = options.to_query_pairs();
        assert!(pairs.contains(&("gamma", "2.2".to_string())));
        assert!(pairs.contains(&("brightness", "-0.5".to_string())));
    }

    #[test]
    fn test_multiword_fields_use_collapsed_keys() {
        let options = TransformOptions {
            area_height: Some(10),
            no_auto_rotate: Some(true),
            strip_metadata: Some(true),
            watermark_image: Some("https://example.com/mark.png".to_string()),
            gaussian_blur: Some("0.8".to_string()),
            output_icc: Some("srgb".to_string()),
            ..Default::default()
        };

        let keys: Vec<&str> = options.to_query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "areaheight",
                "noautorotate",
                "stripmetadata",
                "watermarkimage",
                "gaussianblur",
                "outputicc",
            ]
        );
    }
}
