use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データファイルが指定されていません。`--data FILE` を付けるか `somm config --set-data FILE` で設定してください")]
    MissingDataPath,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("レコードが見つかりません: {0}")]
    UnknownRecord(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] somm_directory_common::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
