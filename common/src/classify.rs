//! ファイル種別・店舗名ラベル

use serde::{Deserialize, Serialize};

/// アップロードファイルの種別（処理パスの選択）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    BookCapital,
    MySiswa,
    Erp,
}

impl FileType {
    pub const ALL: [FileType; 3] = [FileType::BookCapital, FileType::MySiswa, FileType::Erp];

    /// 出力ファイル名の接頭辞
    pub fn output_prefix(&self) -> String {
        format!("Processed_{}", self)
    }

    /// マスタ照合を行う種別か（現状 BookCapital のみ）
    pub fn has_matching(&self) -> bool {
        matches!(self, FileType::BookCapital)
    }
}

impl std::str::FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bookcapital" | "book-capital" | "book_capital" => Ok(FileType::BookCapital),
            "mysiswa" | "my-siswa" | "my_siswa" => Ok(FileType::MySiswa),
            "erp" => Ok(FileType::Erp),
            _ => Err(format!("Unknown file type: {}. Use BookCapital, MySiswa, or ERP", s)),
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::BookCapital => write!(f, "BookCapital"),
            FileType::MySiswa => write!(f, "MySiswa"),
            FileType::Erp => write!(f, "ERP"),
        }
    }
}

/// 店舗名
///
/// どの処理パスもこの値で分岐しない。将来の振り分けルール用に受け取って記録だけする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShopName {
    #[default]
    Bookcafe,
    ImanOffline,
    Fixi,
}

impl ShopName {
    pub const ALL: [ShopName; 3] = [ShopName::Bookcafe, ShopName::ImanOffline, ShopName::Fixi];
}

impl std::str::FromStr for ShopName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_uppercase()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();
        match normalized.as_str() {
            "BOOKCAFE" => Ok(ShopName::Bookcafe),
            "IMAN OFFLINE" => Ok(ShopName::ImanOffline),
            "FIXI" => Ok(ShopName::Fixi),
            _ => Err(format!("Unknown shop: {}. Use BOOKCAFE, IMAN OFFLINE, or FIXI", s)),
        }
    }
}

impl std::fmt::Display for ShopName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShopName::Bookcafe => write!(f, "BOOKCAFE"),
            ShopName::ImanOffline => write!(f, "IMAN OFFLINE"),
            ShopName::Fixi => write!(f, "FIXI"),
        }
    }
}
