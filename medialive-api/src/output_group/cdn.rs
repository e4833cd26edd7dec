use crate::common::{check_min, check_range};
use crate::*;

api_enum! {
    pub enum HlsAkamaiHttpTransferMode {
        Chunked => "CHUNKED",
        NonChunked => "NON_CHUNKED",
    }
}

api_enum! {
    pub enum HlsWebdavHttpTransferMode {
        Chunked => "CHUNKED",
        NonChunked => "NON_CHUNKED",
    }
}

api_enum! {
    pub enum HlsMediaStoreStorageClass {
        Temporal => "TEMPORAL",
    }
}

api_model! {
    pub struct HlsAkamaiSettings {
        /// Number of seconds to wait before retrying connection to the CDN if
        /// the connection is lost.
        connection_retry_interval: i32,
        /// Size in seconds of file cache for streaming outputs.
        filecache_duration: i32,
        /// Specify whether or not to use chunked transfer encoding to Akamai.
        http_transfer_mode: HlsAkamaiHttpTransferMode,
        /// Number of retry attempts that will be made before the channel is
        /// put into an error state.
        num_retries: i32,
        /// If a streaming output fails, number of seconds to wait until a
        /// restart is initiated.
        restart_delay: i32,
        /// Salt for authenticated Akamai.
        salt: String,
        /// Token parameter for authenticated akamai. If not specified, _gda_
        /// is used.
        token: String,
    }
}

api_model! {
    pub struct HlsBasicPutSettings {
        connection_retry_interval: i32,
        filecache_duration: i32,
        num_retries: i32,
        restart_delay: i32,
    }
}

api_model! {
    pub struct HlsMediaStoreSettings {
        connection_retry_interval: i32,
        filecache_duration: i32,
        /// When set to temporal, output files are stored in non-persistent
        /// memory for faster reading and writing.
        media_store_storage_class: HlsMediaStoreStorageClass,
        num_retries: i32,
        restart_delay: i32,
    }
}

api_model! {
    pub struct HlsWebdavSettings {
        connection_retry_interval: i32,
        filecache_duration: i32,
        http_transfer_mode: HlsWebdavHttpTransferMode,
        num_retries: i32,
        restart_delay: i32,
    }
}

api_model! {
    /// Parameters that control interactions with the CDN. At most one of the
    /// variants is expected to be set.
    pub struct HlsCdnSettings {
        hls_akamai_settings: HlsAkamaiSettings,
        hls_basic_put_settings: HlsBasicPutSettings,
        hls_media_store_settings: HlsMediaStoreSettings,
        hls_webdav_settings: HlsWebdavSettings,
    }
}

api_model! {
    pub struct StaticKeySettings {
        /// The URL of the license server used for protecting content.
        key_provider_server: InputLocation,
        /// Static key value as a 32 character hexadecimal string.
        static_key_value: String,
    }
}

api_model! {
    pub struct KeyProviderSettings {
        static_key_settings: StaticKeySettings,
    }
}

/// Connection settings shared by every CDN flavour.
macro_rules! impl_connection_validate {
    ($($name:ident),*) => {
        $(
            impl Validate for $name {
                fn validate(&self) -> Result<(), ModelError> {
                    check_min(
                        concat!(stringify!($name), ".connectionRetryInterval"),
                        self.connection_retry_interval,
                        0,
                    )?;
                    check_range(
                        concat!(stringify!($name), ".filecacheDuration"),
                        self.filecache_duration,
                        0..=600,
                    )?;
                    check_min(
                        concat!(stringify!($name), ".numRetries"),
                        self.num_retries,
                        0,
                    )?;
                    check_range(
                        concat!(stringify!($name), ".restartDelay"),
                        self.restart_delay,
                        0..=15,
                    )
                }
            }
        )*
    };
}

impl_connection_validate!(
    HlsAkamaiSettings,
    HlsBasicPutSettings,
    HlsMediaStoreSettings,
    HlsWebdavSettings
);

impl Validate for HlsCdnSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.hls_akamai_settings.validate()?;
        self.hls_basic_put_settings.validate()?;
        self.hls_media_store_settings.validate()?;
        self.hls_webdav_settings.validate()
    }
}

impl Validate for StaticKeySettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_hex128("StaticKeySettings.staticKeyValue", self.static_key_value.as_deref())
    }
}

impl Validate for KeyProviderSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.static_key_settings.validate()
    }
}

/// 128-bit values such as keys and IVs are written as 32 hex characters.
pub(crate) fn check_hex128(field: &'static str, value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(value) if value.len() != 32 || !value.chars().all(|c| c.is_ascii_hexdigit()) => Err(
            ModelError::invalid(field, "expected a 32 character hexadecimal string"),
        ),
        _ => Ok(()),
    }
}
