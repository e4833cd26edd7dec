use serde_json::json;

use crate::*;

fn live_group() -> HlsGroupSettings {
    HlsGroupSettings::default()
        .destination(OutputLocationRef::default().destination_ref_id("hls-origin"))
        .mode(HlsMode::Live)
        .segment_length(6)
        .index_n_segments(10)
        .keep_segments(21)
        .ad_markers(vec![HlsAdMarkers::ElementalScte35])
}

#[test]
fn test_list_wither_accepts_array_and_vec() {
    let from_array = HlsGroupSettings::default().ad_markers([
        HlsAdMarkers::Adobe,
        HlsAdMarkers::Elemental,
    ]);
    let from_vec = HlsGroupSettings::default().ad_markers(vec![
        HlsAdMarkers::Adobe,
        HlsAdMarkers::Elemental,
    ]);
    assert_eq!(from_array, from_vec);
}

#[test]
fn test_live_group_is_valid() {
    assert_eq!(live_group().validate(), Ok(()));
}

#[test]
fn test_segment_ranges() {
    assert!(matches!(
        live_group().index_n_segments(2).validate(),
        Err(ModelError::OutOfRange {
            field: "HlsGroupSettings.indexNSegments",
            ..
        })
    ));
    assert!(live_group().segment_length(0).validate().is_err());
    assert!(live_group().program_date_time_period(3601).validate().is_err());
    assert!(matches!(
        live_group().keep_segments(5).validate(),
        Err(ModelError::Invalid {
            field: "HlsGroupSettings.indexNSegments",
            ..
        })
    ));
}

#[test]
fn test_explicit_iv() {
    let group = live_group()
        .encryption_type(HlsEncryptionType::Aes128)
        .iv_source(HlsIvSource::Explicit);
    assert!(group.validate().is_err());
    assert!(group.clone().constant_iv("0123").validate().is_err());
    assert_eq!(
        group
            .constant_iv("00112233445566778899aabbccddeeff")
            .validate(),
        Ok(())
    );
}

#[test]
fn test_cdn_settings_validated() {
    let group = live_group().hls_cdn_settings(
        HlsCdnSettings::default()
            .hls_webdav_settings(HlsWebdavSettings::default().restart_delay(16)),
    );
    assert!(matches!(
        group.validate(),
        Err(ModelError::OutOfRange {
            field: "HlsWebdavSettings.restartDelay",
            ..
        })
    ));
}

#[test]
fn test_group_json() {
    let group = OutputGroup::default()
        .name("hls_main")
        .output_group_settings(OutputGroupSettings::default().hls_group_settings(live_group()))
        .outputs([Output::default()
            .output_name("720p")
            .video_description_name("video_720p")
            .audio_description_names(["audio_1".to_owned()])
            .output_settings(
                OutputSettings::default().hls_output_settings(
                    HlsOutputSettings::default().name_modifier("_720p").hls_settings(
                        HlsSettings::default().standard_hls_settings(
                            StandardHlsSettings::default()
                                .m3u8_settings(M3u8Settings::default().video_pid("481")),
                        ),
                    ),
                ),
            )]);

    assert_eq!(group.validate(), Ok(()));
    assert_eq!(
        serde_json::to_value(&group).unwrap(),
        json!({
            "name": "hls_main",
            "outputGroupSettings": {
                "hlsGroupSettings": {
                    "adMarkers": ["ELEMENTAL_SCTE35"],
                    "destination": { "destinationRefId": "hls-origin" },
                    "indexNSegments": 10,
                    "keepSegments": 21,
                    "mode": "LIVE",
                    "segmentLength": 6
                }
            },
            "outputs": [{
                "audioDescriptionNames": ["audio_1"],
                "outputName": "720p",
                "outputSettings": {
                    "hlsOutputSettings": {
                        "hlsSettings": {
                            "standardHlsSettings": {
                                "m3u8Settings": { "videoPid": "481" }
                            }
                        },
                        "nameModifier": "_720p"
                    }
                },
                "videoDescriptionName": "video_720p"
            }]
        })
    );
}

#[test]
fn test_group_name_rules() {
    assert!(OutputGroup::default().name("bad name").validate().is_err());
    assert!(OutputGroup::default().name("a".repeat(33)).validate().is_err());
    assert!(OutputGroup::default().name("udp_1").validate().is_ok());
}

#[test]
fn test_ms_smooth_ranges() {
    let group = MsSmoothGroupSettings::default()
        .fragment_length(2)
        .send_delay_ms(10000);
    assert_eq!(group.validate(), Ok(()));
    assert!(group.clone().send_delay_ms(10001).validate().is_err());
    assert!(group.clone().fragment_length(0).validate().is_err());
    assert!(
        group
            .event_id_mode(SmoothGroupEventIdMode::UseConfigured)
            .validate()
            .is_err()
    );
}
