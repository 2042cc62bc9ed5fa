//! レコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Record: 受賞レストラン1件分のデータ（読み込み後は不変）
//! - RecordSet: id重複を検査済みのレコード列
//! - SortField / SortDirection / StatusFilter: 表示条件の列挙型

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// 受賞レストラン1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// セッションをまたいで安定な識別子（数値IDは10進文字列として保持）
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub restaurant: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub country: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub award: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub wine_director: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub sommelier: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub general_manager: String,
}

impl Record {
    /// 指定フィールドの値
    pub fn field(&self, field: SortField) -> &str {
        match field {
            SortField::Restaurant => &self.restaurant,
            SortField::City => &self.city,
            SortField::State => &self.state,
            SortField::Country => &self.country,
            SortField::Award => &self.award,
            SortField::WineDirector => &self.wine_director,
            SortField::Sommelier => &self.sommelier,
            SortField::GeneralManager => &self.general_manager,
        }
    }

    /// 検索対象テキスト（スペース区切りで連結）
    pub fn search_text(&self) -> String {
        [
            self.restaurant.as_str(),
            self.city.as_str(),
            self.wine_director.as_str(),
            self.sommelier.as_str(),
            self.general_manager.as_str(),
        ]
        .join(" ")
    }

    /// 所在地の表示（州があれば "city, state"）
    pub fn location(&self) -> String {
        if self.state.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.state)
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// id重複検査済みのレコード列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// id の一意性を検査して作成
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// 国の一覧（空を除き重複除去、昇順）
    pub fn countries(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| !r.country.is_empty())
            .map(|r| r.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// ソート対象フィールド
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Restaurant,
    City,
    State,
    Country,
    Award,
    WineDirector,
    Sommelier,
    GeneralManager,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::Restaurant,
        SortField::City,
        SortField::State,
        SortField::Country,
        SortField::Award,
        SortField::WineDirector,
        SortField::Sommelier,
        SortField::GeneralManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Restaurant => "restaurant",
            SortField::City => "city",
            SortField::State => "state",
            SortField::Country => "country",
            SortField::Award => "award",
            SortField::WineDirector => "wine_director",
            SortField::Sommelier => "sommelier",
            SortField::GeneralManager => "general_manager",
        }
    }

    /// 表の見出し
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Restaurant => "Restaurant",
            SortField::City => "Location",
            SortField::State => "State",
            SortField::Country => "Country",
            SortField::Award => "Award",
            SortField::WineDirector => "Wine Director",
            SortField::Sommelier => "Sommelier",
            SortField::GeneralManager => "GM",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized)
            .or(match normalized.as_str() {
                "location" => Some(SortField::City),
                "gm" => Some(SortField::GeneralManager),
                _ => None,
            })
            .ok_or_else(|| {
                format!(
                    "Unknown sort field: {}. Use one of: {}",
                    s,
                    SortField::ALL.map(|f| f.as_str()).join(", ")
                )
            })
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ソート方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// 見出しに付ける矢印
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!("Unknown sort direction: {}. Use asc or desc", s)),
        }
    }
}

/// レビュー状態フィルタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// 条件なし
    #[default]
    All,
    /// レビュー済みのみ
    Seen,
    /// 未レビューのみ
    Unseen,
}

impl StatusFilter {
    /// 保存・フォーム値としての表現（"" | "seen" | "unseen"）
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Seen => "seen",
            StatusFilter::Unseen => "unseen",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "seen" | "reviewed" => Ok(StatusFilter::Seen),
            "unseen" | "not-reviewed" | "unreviewed" => Ok(StatusFilter::Unseen),
            _ => Err(format!("Unknown status: {}. Use seen or unseen", s)),
        }
    }
}
