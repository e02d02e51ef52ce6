//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。

use std::{env, path::PathBuf};

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が設定されていない
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// 実行環境
///
/// 本番環境では内部エラーの詳細をクライアントに返さない。
/// テスト環境ではトレーシングを初期化しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl AppEnv {
    /// 未知の値は開発環境として扱う
    pub fn parse(s: &str) -> Self {
        match s {
            "production" => Self::Production,
            "test" => Self::Test,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Todo Service サーバーの設定
#[derive(Debug, Clone)]
pub struct TodoConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
    /// 実行環境
    pub app_env:      AppEnv,
    /// 静的ファイルの配信ディレクトリ
    pub static_dir:   PathBuf,
}

impl TodoConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("APP_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid {
                    name: "APP_PORT",
                    value,
                })?,
            None => 8000,
        };

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            app_env: lookup("APP_ENV")
                .map(|value| AppEnv::parse(&value))
                .unwrap_or_default(),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_必須項目のみでデフォルト値が使われる() {
        let config =
            TodoConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/todos")]))
                .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database_url, "postgres://localhost/todos");
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_全項目を指定できる() {
        let config = TodoConfig::from_lookup(lookup_from(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "3000"),
            ("DATABASE_URL", "postgres://db/todos"),
            ("APP_ENV", "production"),
            ("STATIC_DIR", "/srv/public"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.app_env, AppEnv::Production);
        assert_eq!(config.static_dir, PathBuf::from("/srv/public"));
    }

    #[test]
    fn test_database_urlがなければエラー() {
        let result = TodoConfig::from_lookup(lookup_from(&[]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_ポート番号が不正ならエラー() {
        let result = TodoConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/todos"),
            ("APP_PORT", "eighty"),
        ]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid {
                name:  "APP_PORT",
                value: "eighty".to_string(),
            }
        );
    }

    #[test]
    fn test_app_envのパース() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("test"), AppEnv::Test);
        assert_eq!(AppEnv::parse("development"), AppEnv::Development);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
    }
}
