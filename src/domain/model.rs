use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Brickset 匯出的一筆樂高套組
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoSet {
    pub number: String,
    pub name: String,
    pub year: i32,
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_group: Option<String>,
    pub packaging_type: PackagingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    // None 與空集合不同：None 表示來源沒有這個欄位
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
    pub pieces: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minifigs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackagingType {
    BlisterPack,
    Box,
    BoxWithBackingCard,
    Bucket,
    Canister,
    FoilPack,
    NotSpecified,
    Other,
    PlasticBox,
    Polybag,
    ShrinkWrapped,
    Tub,
    ZipLockBag,
}

impl PackagingType {
    /// 與序列化格式相同的文字表示
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagingType::BlisterPack => "BLISTER_PACK",
            PackagingType::Box => "BOX",
            PackagingType::BoxWithBackingCard => "BOX_WITH_BACKING_CARD",
            PackagingType::Bucket => "BUCKET",
            PackagingType::Canister => "CANISTER",
            PackagingType::FoilPack => "FOIL_PACK",
            PackagingType::NotSpecified => "NOT_SPECIFIED",
            PackagingType::Other => "OTHER",
            PackagingType::PlasticBox => "PLASTIC_BOX",
            PackagingType::Polybag => "POLYBAG",
            PackagingType::ShrinkWrapped => "SHRINK_WRAPPED",
            PackagingType::Tub => "TUB",
            PackagingType::ZipLockBag => "ZIP_LOCK_BAG",
        }
    }
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(value: Option<f64>) -> String {
            value.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
        }
        write!(
            f,
            "{}x{}x{}",
            part(self.height),
            part(self.width),
            part(self.depth)
        )?;
        if let Some(weight) = self.weight {
            write!(f, " {}kg", weight)?;
        }
        Ok(())
    }
}

/// 單行的完整表示，供年份查詢輸出使用
impl fmt::Display for LegoSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) theme={}",
            self.number, self.name, self.year, self.theme
        )?;
        if let Some(subtheme) = &self.subtheme {
            write!(f, "/{}", subtheme)?;
        }
        write!(f, " pieces={} packaging={}", self.pieces, self.packaging_type)?;
        if let Some(minifigs) = self.minifigs {
            write!(f, " minifigs={}", minifigs)?;
        }
        if let Some(tags) = &self.tags {
            let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
            write!(f, " tags=[{}]", tags.join(", "))?;
        }
        if let Some(dimensions) = &self.dimensions {
            write!(f, " dimensions={}", dimensions)?;
        }
        Ok(())
    }
}
