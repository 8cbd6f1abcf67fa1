//! config.rs
//! Codec configuration as supplied by the file writer.
//!
//! Every field has a default, so `{}` is a valid config. Values are only
//! checked when turned into options, through the same setters callers use.

use serde::Deserialize;

use crate::compression::constants::{
    DEFAULT_POOL_MAX_PER_KIND, DEFAULT_WINDOW_LOG, DEFAULT_ZLIB_LEVEL, DEFAULT_ZSTD_LEVEL,
};
use crate::compression::options::{CodecOptions, ZlibOptions, ZstdOptions};
use crate::compression::types::CompressionKind;
use crate::types::CodecError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ZstdConfig {
    pub level: i32,
    pub window_log: u32,
}

impl Default for ZstdConfig {
    fn default() -> Self {
        Self { level: DEFAULT_ZSTD_LEVEL, window_log: DEFAULT_WINDOW_LOG }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ZlibConfig {
    pub level: u32,
}

impl Default for ZlibConfig {
    fn default() -> Self {
        Self { level: DEFAULT_ZLIB_LEVEL }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_per_kind: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { max_per_kind: DEFAULT_POOL_MAX_PER_KIND }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub zstd: ZstdConfig,
    pub zlib: ZlibConfig,
    pub pool: PoolConfig,
}

impl CodecConfig {
    pub fn from_json(raw: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Options for `kind` with the configured values applied.
    ///
    /// # Errors
    /// - `InvalidArgument` if a configured value is out of range.
    /// - `UnsupportedKind` for `CompressionKind::None`.
    pub fn options_for(&self, kind: CompressionKind) -> Result<CodecOptions, CodecError> {
        match kind {
            CompressionKind::Zstd => {
                let mut options = ZstdOptions::default();
                options
                    .set_level(self.zstd.level)?
                    .set_window_log(self.zstd.window_log)?;
                Ok(options.into())
            }
            CompressionKind::Zlib => {
                let mut options = ZlibOptions::default();
                options.set_level(self.zlib.level)?;
                Ok(options.into())
            }
            CompressionKind::Lz4 => Ok(CodecOptions::Lz4),
            CompressionKind::None => Err(CodecError::UnsupportedKind(kind.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = CodecConfig::from_json("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.pool.max_per_kind, DEFAULT_POOL_MAX_PER_KIND);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = CodecConfig::from_json(r#"{"zstd": {"level": 9}}"#).unwrap();
        assert_eq!(config.zstd.level, 9);
        assert_eq!(config.zstd.window_log, DEFAULT_WINDOW_LOG);
        assert_eq!(config.zlib.level, DEFAULT_ZLIB_LEVEL);

        let options = config.options_for(CompressionKind::Zstd).unwrap();
        assert_eq!(options.as_zstd().unwrap().level(), 9);
    }

    #[test]
    fn out_of_range_values_fail_when_applied() {
        let config = CodecConfig::from_json(r#"{"zstd": {"window_log": 5}}"#).unwrap();
        assert!(matches!(
            config.options_for(CompressionKind::Zstd),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(CodecConfig::from_json("{"), Err(CodecError::Config(_))));
    }
}
