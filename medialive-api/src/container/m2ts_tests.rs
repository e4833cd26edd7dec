use serde_json::json;

use crate::*;

fn dvb_settings() -> M2tsSettings {
    M2tsSettings::default()
        .audio_pids("482-492")
        .video_pid("0x1e1")
        .pmt_pid("480")
        .pat_interval(100)
        .pmt_interval(0)
        .rate_mode(M2tsRateMode::Cbr)
        .dvb_sdt_settings(
            DvbSdtSettings::default()
                .output_sdt(DvbSdtOutputSdt::SdtManual)
                .service_name("news")
                .rep_interval(500),
        )
}

#[test]
fn test_valid_transport_stream() {
    assert_eq!(dvb_settings().validate(), Ok(()));
}

#[test]
fn test_pid_out_of_range() {
    let settings = dvb_settings().video_pid("8191");
    assert!(matches!(
        settings.validate(),
        Err(ModelError::OutOfRange {
            field: "M2tsSettings.videoPid",
            ..
        })
    ));

    let settings = dvb_settings().audio_pids("482, 20");
    assert!(matches!(
        settings.validate(),
        Err(ModelError::OutOfRange {
            field: "M2tsSettings.audioPids",
            ..
        })
    ));
}

#[test]
fn test_table_interval() {
    assert!(dvb_settings().pat_interval(0).validate().is_ok());
    assert!(dvb_settings().pat_interval(1000).validate().is_ok());
    assert!(dvb_settings().pat_interval(5).validate().is_err());
    assert!(dvb_settings().pmt_interval(1001).validate().is_err());
}

#[test]
fn test_segmentation_time_required_with_markers() {
    let settings = dvb_settings().segmentation_markers(M2tsSegmentationMarkers::Ebp);
    assert!(matches!(
        settings.validate(),
        Err(ModelError::Invalid {
            field: "M2tsSettings.segmentationTime",
            ..
        })
    ));
    assert!(settings.segmentation_time(2.0).validate().is_ok());
    assert!(
        dvb_settings()
            .segmentation_markers("NONE")
            .validate()
            .is_ok()
    );
}

#[test]
fn test_nested_dvb_tables_are_validated() {
    let settings = dvb_settings().dvb_tdt_settings(DvbTdtSettings::default().rep_interval(10));
    assert!(matches!(
        settings.validate(),
        Err(ModelError::OutOfRange {
            field: "DvbTdtSettings.repInterval",
            ..
        })
    ));

    let settings =
        dvb_settings().dvb_nit_settings(DvbNitSettings::default().network_name("n".repeat(257)));
    assert!(settings.validate().is_err());
}

#[test]
fn test_json_wire_format() {
    let value = serde_json::to_value(dvb_settings()).unwrap();
    assert_eq!(
        value,
        json!({
            "audioPids": "482-492",
            "dvbSdtSettings": {
                "outputSdt": "SDT_MANUAL",
                "repInterval": 500,
                "serviceName": "news"
            },
            "patInterval": 100,
            "pmtInterval": 0,
            "pmtPid": "480",
            "rateMode": "CBR",
            "videoPid": "0x1e1"
        })
    );

    let parsed: M2tsSettings = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, dvb_settings());
}

#[test]
fn test_m3u8_pids() {
    let settings = M3u8Settings::default()
        .audio_pids("492-498")
        .scte35_pid("500")
        .pat_interval(0);
    assert_eq!(settings.validate(), Ok(()));
    assert!(settings.clone().pcr_pid("0x10").validate().is_err());
    assert!(settings.pcr_period(501).validate().is_err());
}
