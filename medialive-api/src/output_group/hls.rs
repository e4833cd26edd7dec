use super::cdn::check_hex128;
use crate::common::{check_min, check_range};
use crate::*;

api_enum! {
    pub enum HlsAdMarkers {
        Adobe => "ADOBE",
        Elemental => "ELEMENTAL",
        ElementalScte35 => "ELEMENTAL_SCTE35",
    }
}

api_enum! {
    pub enum HlsCaptionLanguageSetting {
        Insert => "INSERT",
        None => "NONE",
        Omit => "OMIT",
    }
}

api_enum! {
    pub enum HlsClientCache {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum HlsCodecSpecification {
        Rfc4281 => "RFC_4281",
        Rfc6381 => "RFC_6381",
    }
}

api_enum! {
    pub enum HlsDirectoryStructure {
        SingleDirectory => "SINGLE_DIRECTORY",
        SubdirectoryPerStream => "SUBDIRECTORY_PER_STREAM",
    }
}

api_enum! {
    pub enum HlsEncryptionType {
        Aes128 => "AES128",
        SampleAes => "SAMPLE_AES",
    }
}

api_enum! {
    pub enum HlsId3SegmentTaggingState {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum IFrameOnlyPlaylistType {
        Disabled => "DISABLED",
        Standard => "STANDARD",
    }
}

api_enum! {
    pub enum InputLossActionForHlsOut {
        EmitOutput => "EMIT_OUTPUT",
        PauseOutput => "PAUSE_OUTPUT",
    }
}

api_enum! {
    pub enum HlsIvInManifest {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

api_enum! {
    pub enum HlsIvSource {
        Explicit => "EXPLICIT",
        FollowsSegmentNumber => "FOLLOWS_SEGMENT_NUMBER",
    }
}

api_enum! {
    pub enum HlsManifestCompression {
        Gzip => "GZIP",
        None => "NONE",
    }
}

api_enum! {
    pub enum HlsManifestDurationFormat {
        FloatingPoint => "FLOATING_POINT",
        Integer => "INTEGER",
    }
}

api_enum! {
    pub enum HlsMode {
        Live => "LIVE",
        Vod => "VOD",
    }
}

api_enum! {
    pub enum HlsOutputSelection {
        ManifestsAndSegments => "MANIFESTS_AND_SEGMENTS",
        SegmentsOnly => "SEGMENTS_ONLY",
    }
}

api_enum! {
    pub enum HlsProgramDateTime {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

api_enum! {
    pub enum HlsRedundantManifest {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

api_enum! {
    pub enum HlsSegmentationMode {
        UseInputSegmentation => "USE_INPUT_SEGMENTATION",
        UseSegmentDuration => "USE_SEGMENT_DURATION",
    }
}

api_enum! {
    pub enum HlsStreamInfResolution {
        Exclude => "EXCLUDE",
        Include => "INCLUDE",
    }
}

api_enum! {
    pub enum HlsTimedMetadataId3Frame {
        None => "NONE",
        Priv => "PRIV",
        Tdrl => "TDRL",
    }
}

api_enum! {
    pub enum HlsTsFileMode {
        SegmentedFiles => "SEGMENTED_FILES",
        SingleFile => "SINGLE_FILE",
    }
}

api_enum! {
    pub enum HlsH265PackagingType {
        Hev1 => "HEV1",
        Hvc1 => "HVC1",
    }
}

api_model! {
    /// Apple HLS output group.
    pub struct HlsGroupSettings {
        /// Choose one or more ad marker types to pass SCTE35 signals through
        /// to this group of Apple HLS outputs.
        ad_markers: Vec<HlsAdMarkers>,
        /// A partial URI prefix that will be prepended to each output in the
        /// media .m3u8 file. Can be used if base manifest is delivered from a
        /// different URL than the main .m3u8 file.
        base_url_content: String,
        /// Base URL content for pipeline 1, when its media files live in a
        /// different location than those of pipeline 0.
        base_url_content1: String,
        /// A partial URI prefix that will be prepended to each output in the
        /// media .m3u8 file.
        base_url_manifest: String,
        /// Base URL manifest for pipeline 1.
        base_url_manifest1: String,
        /// Mapping of up to 4 caption channels to caption languages. Is only
        /// meaningful if captionLanguageSetting is set to "insert".
        caption_language_mappings: Vec<CaptionLanguageMapping>,
        /// Applies only to 608 Embedded output captions. insert: include
        /// CLOSED-CAPTIONS lines in the manifest, one for each language code.
        /// none: include CLOSED-CAPTIONS=NONE line in the manifest. omit: omit
        /// any CLOSED-CAPTIONS line from the manifest.
        caption_language_setting: HlsCaptionLanguageSetting,
        /// When set to "disabled", sets the #EXT-X-ALLOW-CACHE:no tag in the
        /// manifest, which prevents clients from saving media segments for
        /// later replay.
        client_cache: HlsClientCache,
        /// Specification to use (RFC-6381 or the default RFC-4281) during m3u8
        /// playlist generation.
        codec_specification: HlsCodecSpecification,
        /// For use with encryptionType. This is a 128-bit, 16-byte hex value
        /// represented by a 32-character text string. If ivSource is set to
        /// "explicit" then this parameter is required and is used as the IV
        /// for encryption.
        constant_iv: String,
        /// A directory or HTTP destination for the HLS segments, manifest
        /// files, and encryption keys (if enabled).
        destination: OutputLocationRef,
        /// Place segments in subdirectories.
        directory_structure: HlsDirectoryStructure,
        /// Encrypts the segments with the given encryption scheme. Exclude
        /// this parameter if no encryption is desired.
        encryption_type: HlsEncryptionType,
        /// Parameters that control interactions with the CDN.
        hls_cdn_settings: HlsCdnSettings,
        /// State of HLS ID3 Segment Tagging.
        hls_id3_segment_tagging: HlsId3SegmentTaggingState,
        /// DISABLED: do not create an I-frame-only manifest. STANDARD: create
        /// an I-frame-only manifest for each output that contains video.
        i_frame_only_playlists: IFrameOnlyPlaylistType,
        /// Applies only if Mode field is LIVE. Specifies the maximum number of
        /// segments in the media manifest file. This number must be less than
        /// or equal to the Keep Segments field.
        index_n_segments: i32,
        /// Parameter that control output group behavior on input loss.
        input_loss_action: InputLossActionForHlsOut,
        /// For use with encryptionType. If set to "include", IV is listed in
        /// the manifest, otherwise the IV is not in the manifest.
        iv_in_manifest: HlsIvInManifest,
        /// For use with encryptionType. "followsSegmentNumber" changes the IV
        /// every segment. "explicit" requires a constantIv value.
        iv_source: HlsIvSource,
        /// Applies only if Mode field is LIVE. Specifies the number of media
        /// segments (.ts files) to retain in the destination directory.
        keep_segments: i32,
        /// How the key is represented in the resource identified by the URI.
        /// If absent, an implicit value of "identity" is used.
        key_format: String,
        /// Either a single positive integer version value or a slash delimited
        /// list of version values (1/2/3).
        key_format_versions: String,
        /// The key provider settings.
        key_provider_settings: KeyProviderSettings,
        /// When set to gzip, compresses HLS playlist.
        manifest_compression: HlsManifestCompression,
        /// Indicates whether the output manifest should use floating point or
        /// integer values for segment duration.
        manifest_duration_format: HlsManifestDurationFormat,
        /// When set, minimumSegmentLength is enforced by looking ahead and
        /// back within the specified range for a nearby avail and extending
        /// the segment size if needed.
        min_segment_length: i32,
        /// If "vod", all segments are indexed and kept permanently in the
        /// destination and manifest. If "live", only the number of segments
        /// specified in keepSegments and indexNSegments are kept.
        mode: HlsMode,
        /// MANIFESTS_AND_SEGMENTS generates manifests for this output group.
        /// SEGMENTS_ONLY does not generate any manifests.
        output_selection: HlsOutputSelection,
        /// Includes or excludes EXT-X-PROGRAM-DATE-TIME tag in .m3u8 manifest
        /// files.
        program_date_time: HlsProgramDateTime,
        /// Period of insertion of EXT-X-PROGRAM-DATE-TIME entry, in seconds.
        program_date_time_period: i32,
        /// ENABLED: the master manifest for each pipeline references the media
        /// files of both pipelines. DISABLED: it references its own pipeline
        /// only.
        redundant_manifest: HlsRedundantManifest,
        /// Length of MPEG-2 Transport Stream segments to create (in seconds).
        segment_length: i32,
        /// useInputSegmentation has been deprecated. The configured segment
        /// size is always used.
        segmentation_mode: HlsSegmentationMode,
        /// Number of segments to write to a subdirectory before starting a new
        /// one. directoryStructure must be subdirectoryPerStream for this
        /// setting to have an effect.
        segments_per_subdirectory: i32,
        /// Include or exclude RESOLUTION attribute for video in
        /// EXT-X-STREAM-INF tag of variant manifest.
        stream_inf_resolution: HlsStreamInfResolution,
        /// Indicates ID3 frame that has the timecode.
        timed_metadata_id3_frame: HlsTimedMetadataId3Frame,
        /// Timed Metadata interval in seconds.
        timed_metadata_id3_period: i32,
        /// Provides an extra millisecond delta offset to fine tune the
        /// timestamps.
        timestamp_delta_milliseconds: i32,
        /// SEGMENTED_FILES emits the program as multiple .ts media files.
        /// SINGLE_FILE applies only if Mode field is VOD and emits a single
        /// .ts media file indexed with #EXT-X-BYTERANGE tags.
        ts_file_mode: HlsTsFileMode,
    }
}

impl Validate for HlsGroupSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_min("HlsGroupSettings.indexNSegments", self.index_n_segments, 3)?;
        check_min("HlsGroupSettings.keepSegments", self.keep_segments, 1)?;
        check_min("HlsGroupSettings.minSegmentLength", self.min_segment_length, 0)?;
        check_range(
            "HlsGroupSettings.programDateTimePeriod",
            self.program_date_time_period,
            0..=3600,
        )?;
        check_min("HlsGroupSettings.segmentLength", self.segment_length, 1)?;
        check_min(
            "HlsGroupSettings.segmentsPerSubdirectory",
            self.segments_per_subdirectory,
            1,
        )?;
        check_min(
            "HlsGroupSettings.timedMetadataId3Period",
            self.timed_metadata_id3_period,
            0,
        )?;
        check_min(
            "HlsGroupSettings.timestampDeltaMilliseconds",
            self.timestamp_delta_milliseconds,
            0,
        )?;

        if let (Some(index), Some(keep)) = (self.index_n_segments, self.keep_segments)
            && index > keep
        {
            return Err(ModelError::invalid(
                "HlsGroupSettings.indexNSegments",
                format!("{index} is greater than keepSegments ({keep})"),
            ));
        }

        check_hex128("HlsGroupSettings.constantIv", self.constant_iv.as_deref())?;
        if self.iv_source == Some(HlsIvSource::Explicit) && self.constant_iv.is_none() {
            return Err(ModelError::invalid(
                "HlsGroupSettings.constantIv",
                "required when ivSource is EXPLICIT",
            ));
        }

        if let Some(mappings) = &self.caption_language_mappings {
            if mappings.len() > 4 {
                return Err(ModelError::invalid(
                    "HlsGroupSettings.captionLanguageMappings",
                    "at most 4 caption channels can be mapped",
                ));
            }
            mappings.validate()?;
        }

        self.hls_cdn_settings.validate()?;
        self.key_provider_settings.validate()
    }
}

api_model! {
    pub struct StandardHlsSettings {
        /// List all the audio groups that are used with the video output
        /// stream. Input all the audio GROUP-IDs that are associated to the
        /// video, separate by ','.
        audio_rendition_sets: String,
        m3u8_settings: M3u8Settings,
    }
}

api_model! {
    pub struct HlsSettings {
        standard_hls_settings: StandardHlsSettings,
    }
}

api_model! {
    pub struct HlsOutputSettings {
        /// Only applicable when this output is referencing an H.265 video
        /// description. Specifies whether MP4 segments should be packaged as
        /// HEV1 or HVC1.
        h265_packaging_type: HlsH265PackagingType,
        /// Settings regarding the underlying stream. These settings are
        /// different for audio-only outputs.
        hls_settings: HlsSettings,
        /// String concatenated to the end of the destination filename. Accepts
        /// "Format Identifiers".
        name_modifier: String,
        /// String concatenated to end of segment filenames.
        segment_modifier: String,
    }
}

impl Validate for HlsOutputSettings {
    fn validate(&self) -> Result<(), ModelError> {
        if let Some(modifier) = &self.name_modifier
            && modifier.is_empty()
        {
            return Err(ModelError::invalid(
                "HlsOutputSettings.nameModifier",
                "must not be empty",
            ));
        }
        let m3u8 = self
            .hls_settings
            .as_ref()
            .and_then(|settings| settings.standard_hls_settings.as_ref())
            .and_then(|settings| settings.m3u8_settings.as_ref());
        m3u8.map_or(Ok(()), Validate::validate)
    }
}
