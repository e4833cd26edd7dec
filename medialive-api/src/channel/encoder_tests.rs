use std::collections::HashSet;

use serde_json::json;

use crate::*;

fn encoder_settings() -> EncoderSettings {
    EncoderSettings::default()
        .audio_descriptions([AudioDescription::default()
            .name("audio_1")
            .audio_selector_name("default")
            .codec_settings(
                AudioCodecSettings::default().aac_settings(
                    AacSettings::default()
                        .bitrate(128000)
                        .coding_mode(AacCodingMode::CodingMode2_0),
                ),
            )])
        .video_descriptions([VideoDescription::default()
            .name("video_720p")
            .width(1280)
            .height(720)
            .codec_settings(
                VideoCodecSettings::default().h264_settings(
                    H264Settings::default()
                        .rate_control_mode(H264RateControlMode::Cbr)
                        .bitrate(3_000_000)
                        .framerate_numerator(30)
                        .framerate_denominator(1),
                ),
            )])
        .output_groups([OutputGroup::default()
            .name("udp_group")
            .output_group_settings(OutputGroupSettings::default().udp_group_settings(
                UdpGroupSettings::default().input_loss_action(InputLossActionForUdpOut::EmitProgram),
            ))
            .outputs([Output::default()
                .output_name("udp_720p")
                .audio_description_names(["audio_1".to_owned()])
                .video_description_name("video_720p")
                .output_settings(
                    OutputSettings::default().udp_output_settings(
                        UdpOutputSettings::default()
                            .destination(OutputLocationRef::default().destination_ref_id("udp_dest"))
                            .container_settings(
                                UdpContainerSettings::default()
                                    .m2ts_settings(M2tsSettings::default().video_pid("481")),
                            ),
                    ),
                )])])
        .timecode_config(TimecodeConfig::default().source(TimecodeConfigSource::Systemclock))
}

fn udp_destination(urls: &[&str]) -> OutputDestination {
    OutputDestination::default().id("udp_dest").settings(
        urls.iter()
            .map(|url| OutputDestinationSettings::default().url(*url))
            .collect::<Vec<_>>(),
    )
}

fn create_request() -> CreateChannelRequest {
    CreateChannelRequest::default()
        .name("news-channel")
        .channel_class(ChannelClass::Standard)
        .role_arn("arn:aws:iam::123456789012:role/MediaLiveAccessRole")
        .input_attachments([InputAttachment::default()
            .input_id("1234")
            .input_attachment_name("primary")])
        .input_specification(
            InputSpecification::default()
                .codec(InputCodec::Avc)
                .resolution(InputResolution::Hd)
                .maximum_bitrate(InputMaximumBitrate::Max20Mbps),
        )
        .destinations([udp_destination(&[
            "udp://10.0.0.1:5000",
            "udp://10.0.0.2:5000",
        ])])
        .encoder_settings(encoder_settings())
}

#[test]
fn test_create_request_is_valid() {
    assert_eq!(create_request().validate(), Ok(()));
}

#[test]
fn test_equal_copies_hash_equal() {
    let mut first = create_request();
    first.add_tags_entry("owner", "news").unwrap();
    let mut second = create_request();
    second.add_tags_entry("owner", "news").unwrap();
    assert_eq!(first, second);

    let requests: HashSet<CreateChannelRequest> = [first.clone(), second].into_iter().collect();
    assert_eq!(requests.len(), 1);
    assert!(!requests.contains(&first.clone().name("other")));

    let device = InputDeviceHdSettings::default().framerate(f64::NAN).width(1920);
    assert_eq!(device, device.clone());
    let devices: HashSet<_> = [device.clone(), device].into_iter().collect();
    assert_eq!(devices.len(), 1);
}

#[test]
fn test_tags_are_lazy() {
    let mut request = create_request();
    assert_eq!(request.tags, None);

    request.add_tags_entry("owner", "news").unwrap();
    assert_eq!(
        request.tags,
        Some(Tags::from([("owner".to_owned(), "news".to_owned())]))
    );

    assert!(matches!(
        request.add_tags_entry("owner", "sports"),
        Err(ModelError::DuplicateTagKey(key)) if key == "owner"
    ));
    assert_eq!(
        request.tags,
        Some(Tags::from([("owner".to_owned(), "news".to_owned())]))
    );
    assert_eq!(request.name.as_deref(), Some("news-channel"));

    let cleared = request.clear_tags_entries();
    assert_eq!(cleared.tags, None);
    assert_eq!(cleared, create_request());
}

#[test]
fn test_unknown_description_reference() {
    let mut settings = encoder_settings();
    if let Some(groups) = &mut settings.output_groups {
        for output in groups.iter_mut().flat_map(|g| g.outputs.iter_mut().flatten()) {
            output.video_description_name = Some("video_1080p".to_owned());
        }
    }

    assert!(matches!(
        create_request().encoder_settings(settings).validate(),
        Err(ModelError::Invalid {
            field: "Output.videoDescriptionName",
            ..
        })
    ));
}

#[test]
fn test_destination_checks() {
    let single_url = create_request().destinations([udp_destination(&["udp://10.0.0.1:5000"])]);
    assert!(matches!(
        single_url.validate(),
        Err(ModelError::Invalid {
            field: "OutputDestination.settings",
            ..
        })
    ));
    assert_eq!(
        single_url
            .channel_class(ChannelClass::SinglePipeline)
            .validate(),
        Ok(())
    );

    let missing = create_request().destinations(Vec::<OutputDestination>::new());
    assert!(matches!(
        missing.validate(),
        Err(ModelError::Invalid {
            field: "OutputLocationRef.destinationRefId",
            ..
        })
    ));

    let duplicated = create_request().destinations([
        udp_destination(&["udp://a:1", "udp://b:1"]),
        udp_destination(&["udp://c:1", "udp://d:1"]),
    ]);
    assert!(duplicated.validate().is_err());
}

#[test]
fn test_update_may_keep_destinations() {
    let update = UpdateChannelRequest::default()
        .channel_id("1234")
        .encoder_settings(encoder_settings());
    assert_eq!(update.validate(), Ok(()));
}

#[test]
fn test_nested_validation_reaches_codecs() {
    let mut settings = encoder_settings();
    if let Some(videos) = &mut settings.video_descriptions {
        videos[0].width = Some(1279);
    }
    assert!(create_request().encoder_settings(settings).validate().is_err());

    let request = create_request().input_attachments([InputAttachment::default()
        .input_id("1234")
        .input_settings(InputSettings::default().filter_strength(9))]);
    assert!(matches!(
        request.validate(),
        Err(ModelError::OutOfRange {
            field: "InputSettings.filterStrength",
            ..
        })
    ));
}

#[test]
fn test_channel_json() {
    let channel: Channel = serde_json::from_value(json!({
        "arn": "arn:aws:medialive:us-west-2:123456789012:channel:1234",
        "channelClass": "STANDARD",
        "id": "1234",
        "name": "news-channel",
        "state": "RUNNING",
        "pipelinesRunningCount": 2,
        "egressEndpoints": [{ "sourceIp": "203.0.113.1" }],
        "logLevel": "VERBOSE",
        "encoderSettings": {
            "timecodeConfig": { "source": "SYSTEMCLOCK" }
        }
    }))
    .unwrap();

    assert_eq!(channel.state, Some(ChannelState::Running));
    assert_eq!(channel.log_level, Some(LogLevel::Unknown("VERBOSE".to_owned())));
    assert_eq!(
        channel
            .encoder_settings
            .as_ref()
            .and_then(|settings| settings.timecode_config.clone()),
        Some(TimecodeConfig::default().source("SYSTEMCLOCK"))
    );

    let value = serde_json::to_value(&channel).unwrap();
    assert_eq!(value["logLevel"], json!("VERBOSE"));
    assert_eq!(value["egressEndpoints"][0]["sourceIp"], json!("203.0.113.1"));
    assert!(value.get("destinations").is_none());
}
