//! SCTE-35 splice signals scheduled on a running channel.

use crate::common::check_range;
use crate::*;

/// `segmentation_event_id` and `splice_event_id` are 32-bit on the wire.
const EVENT_ID_RANGE: std::ops::RangeInclusive<i64> = 0..=4_294_967_295;

/// splice_insert `duration` is a 33-bit tick count.
const SPLICE_DURATION_RANGE: std::ops::RangeInclusive<i64> = 0..=8_589_934_591;

const TICKS_PER_SECOND: f64 = 90_000.0;

api_enum! {
    pub enum Scte35ArchiveAllowedFlag {
        ArchiveNotAllowed => "ARCHIVE_NOT_ALLOWED",
        ArchiveAllowed => "ARCHIVE_ALLOWED",
    }
}

api_enum! {
    pub enum Scte35DeviceRestrictions {
        None => "NONE",
        RestrictGroup0 => "RESTRICT_GROUP0",
        RestrictGroup1 => "RESTRICT_GROUP1",
        RestrictGroup2 => "RESTRICT_GROUP2",
    }
}

api_enum! {
    pub enum Scte35NoRegionalBlackoutFlag {
        RegionalBlackout => "REGIONAL_BLACKOUT",
        NoRegionalBlackout => "NO_REGIONAL_BLACKOUT",
    }
}

api_enum! {
    pub enum Scte35WebDeliveryAllowedFlag {
        WebDeliveryNotAllowed => "WEB_DELIVERY_NOT_ALLOWED",
        WebDeliveryAllowed => "WEB_DELIVERY_ALLOWED",
    }
}

api_enum! {
    pub enum Scte35SegmentationCancelIndicator {
        SegmentationEventNotCanceled => "SEGMENTATION_EVENT_NOT_CANCELED",
        SegmentationEventCanceled => "SEGMENTATION_EVENT_CANCELED",
    }
}

api_model! {
    /// Corresponds to SCTE-35 delivery_not_restricted_flag parameter. To
    /// declare delivery restrictions, include this element and its four
    /// "restriction" flags.
    pub struct Scte35DeliveryRestrictions {
        /// Corresponds to SCTE-35 archive_allowed_flag.
        archive_allowed_flag: Scte35ArchiveAllowedFlag,
        /// Corresponds to SCTE-35 device_restrictions parameter.
        device_restrictions: Scte35DeviceRestrictions,
        /// Corresponds to SCTE-35 no_regional_blackout_flag parameter.
        no_regional_blackout_flag: Scte35NoRegionalBlackoutFlag,
        /// Corresponds to SCTE-35 web_delivery_allowed_flag parameter.
        web_delivery_allowed_flag: Scte35WebDeliveryAllowedFlag,
    }
}

api_model! {
    /// Corresponds to SCTE-35 segmentation_descriptor.
    pub struct Scte35SegmentationDescriptor {
        /// Holds the four SCTE-35 delivery restriction parameters.
        delivery_restrictions: Scte35DeliveryRestrictions,
        /// Corresponds to SCTE-35 segment_num.
        segment_num: i32,
        /// Corresponds to SCTE-35 segmentation_event_cancel_indicator.
        segmentation_cancel_indicator: Scte35SegmentationCancelIndicator,
        /// Corresponds to SCTE-35 segmentation_duration, in 90 KHz ticks.
        segmentation_duration: i64,
        /// Corresponds to SCTE-35 segmentation_event_id.
        segmentation_event_id: i64,
        /// Corresponds to SCTE-35 segmentation_type_id. One of the
        /// segmentation_type_id values listed in the SCTE-35 specification.
        segmentation_type_id: i32,
        /// Corresponds to SCTE-35 segmentation_upid, entered as hexadecimal
        /// digits.
        segmentation_upid: String,
        /// Corresponds to SCTE-35 segmentation_upid_type.
        segmentation_upid_type: i32,
        /// Corresponds to SCTE-35 segments_expected.
        segments_expected: i32,
        /// Corresponds to SCTE-35 sub_segment_num.
        sub_segment_num: i32,
        /// Corresponds to SCTE-35 sub_segments_expected.
        sub_segments_expected: i32,
    }
}

impl Validate for Scte35SegmentationDescriptor {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("Scte35SegmentationDescriptor.segmentNum", self.segment_num, 0..=255)?;
        check_range(
            "Scte35SegmentationDescriptor.segmentationDuration",
            self.segmentation_duration,
            0..=1_099_511_627_775,
        )?;
        check_range(
            "Scte35SegmentationDescriptor.segmentationEventId",
            self.segmentation_event_id,
            EVENT_ID_RANGE,
        )?;
        check_range(
            "Scte35SegmentationDescriptor.segmentationTypeId",
            self.segmentation_type_id,
            0..=255,
        )?;
        check_range(
            "Scte35SegmentationDescriptor.segmentationUpidType",
            self.segmentation_upid_type,
            0..=255,
        )?;
        check_range(
            "Scte35SegmentationDescriptor.segmentsExpected",
            self.segments_expected,
            0..=255,
        )?;
        check_range(
            "Scte35SegmentationDescriptor.subSegmentNum",
            self.sub_segment_num,
            0..=255,
        )?;
        check_range(
            "Scte35SegmentationDescriptor.subSegmentsExpected",
            self.sub_segments_expected,
            0..=255,
        )?;

        if let Some(upid) = &self.segmentation_upid
            && !upid.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ModelError::invalid(
                "Scte35SegmentationDescriptor.segmentationUpid",
                "expected hexadecimal digits",
            ));
        }
        Ok(())
    }
}

api_model! {
    pub struct Scte35DescriptorSettings {
        /// SCTE-35 Segmentation Descriptor.
        segmentation_descriptor_scte35_descriptor_settings: Scte35SegmentationDescriptor,
    }
}

api_model! {
    pub struct Scte35Descriptor {
        scte35_descriptor_settings: Scte35DescriptorSettings,
    }
}

impl Validate for Scte35Descriptor {
    fn validate(&self) -> Result<(), ModelError> {
        self.scte35_descriptor_settings
            .as_ref()
            .and_then(|settings| {
                settings
                    .segmentation_descriptor_scte35_descriptor_settings
                    .as_ref()
            })
            .map_or(Ok(()), Validate::validate)
    }
}

api_model! {
    /// Emits a time_signal carrying one or more descriptors.
    pub struct Scte35TimeSignalScheduleActionSettings {
        /// The list of SCTE-35 descriptors accompanying the SCTE-35
        /// time_signal.
        scte35_descriptors: Vec<Scte35Descriptor>,
    }
}

impl Validate for Scte35TimeSignalScheduleActionSettings {
    fn validate(&self) -> Result<(), ModelError> {
        match &self.scte35_descriptors {
            Some(descriptors) if descriptors.is_empty() => Err(ModelError::invalid(
                "Scte35TimeSignalScheduleActionSettings.scte35Descriptors",
                "at least one descriptor is required",
            )),
            descriptors => descriptors.validate(),
        }
    }
}

api_model! {
    /// Emits a splice_insert starting an avail.
    pub struct Scte35SpliceInsertScheduleActionSettings {
        /// Optional, the duration for the splice_insert, in 90 KHz ticks. To
        /// convert seconds to ticks, multiple the seconds by 90,000. If you
        /// enter a duration, there is an expectation that the downstream
        /// system can read the duration and cue in at that time. If you do not
        /// enter a duration, the splice_insert will continue indefinitely and
        /// there is an expectation that you will enter a return_to_network to
        /// end the splice_insert at the appropriate time.
        duration: i64,
        /// The splice_event_id for the SCTE-35 splice_insert, as defined in
        /// SCTE-35.
        splice_event_id: i64,
    }
}

impl Validate for Scte35SpliceInsertScheduleActionSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range(
            "Scte35SpliceInsertScheduleActionSettings.duration",
            self.duration,
            SPLICE_DURATION_RANGE,
        )?;
        check_range(
            "Scte35SpliceInsertScheduleActionSettings.spliceEventId",
            self.splice_event_id,
            EVENT_ID_RANGE,
        )
    }
}

api_model! {
    /// Ends a splice_insert that was started without a duration.
    pub struct Scte35ReturnToNetworkScheduleActionSettings {
        /// The splice_event_id for the SCTE-35 splice_insert, as defined in
        /// SCTE-35.
        splice_event_id: i64,
    }
}

impl Validate for Scte35ReturnToNetworkScheduleActionSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range(
            "Scte35ReturnToNetworkScheduleActionSettings.spliceEventId",
            self.splice_event_id,
            EVENT_ID_RANGE,
        )
    }
}

/// Converts a duration in seconds to 90 kHz SCTE-35 ticks, rounded to the
/// nearest tick.
///
/// Fails for NaN, infinite or negative input and for durations that do not
/// fit the 33-bit splice_insert tick count.
pub fn seconds_to_ticks(seconds: f64) -> Result<i64, ModelError> {
    let ticks = (seconds * TICKS_PER_SECOND).round();
    let max = *SPLICE_DURATION_RANGE.end() as f64;
    if !(0.0..=max).contains(&ticks) {
        return Err(ModelError::OutOfRange {
            field: "seconds",
            value: seconds.to_string(),
            expected: format!("a duration in [0, {}] seconds", max / TICKS_PER_SECOND),
        });
    }
    Ok(ticks as i64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_time_signal_json() {
        let signal = Scte35TimeSignalScheduleActionSettings::default().scte35_descriptors([
            Scte35Descriptor::default().scte35_descriptor_settings(
                Scte35DescriptorSettings::default()
                    .segmentation_descriptor_scte35_descriptor_settings(
                        Scte35SegmentationDescriptor::default()
                            .segmentation_event_id(1)
                            .segmentation_type_id(0x34)
                            .segmentation_cancel_indicator(
                                Scte35SegmentationCancelIndicator::SegmentationEventNotCanceled,
                            )
                            .delivery_restrictions(
                                Scte35DeliveryRestrictions::default()
                                    .device_restrictions(Scte35DeviceRestrictions::None),
                            ),
                    ),
            ),
        ]);

        assert_eq!(signal.validate(), Ok(()));
        assert_eq!(
            serde_json::to_value(&signal).unwrap(),
            json!({
                "scte35Descriptors": [{
                    "scte35DescriptorSettings": {
                        "segmentationDescriptorScte35DescriptorSettings": {
                            "deliveryRestrictions": { "deviceRestrictions": "NONE" },
                            "segmentationCancelIndicator": "SEGMENTATION_EVENT_NOT_CANCELED",
                            "segmentationEventId": 1,
                            "segmentationTypeId": 52
                        }
                    }
                }]
            })
        );
    }

    #[test]
    fn test_descriptor_ranges() {
        let descriptor = Scte35SegmentationDescriptor::default().segment_num(256);
        assert!(matches!(
            descriptor.validate(),
            Err(ModelError::OutOfRange {
                field: "Scte35SegmentationDescriptor.segmentNum",
                ..
            })
        ));

        let descriptor = Scte35SegmentationDescriptor::default().segmentation_upid("0x12");
        assert!(descriptor.validate().is_err());

        let signal = Scte35TimeSignalScheduleActionSettings::default()
            .scte35_descriptors(Vec::<Scte35Descriptor>::new());
        assert!(signal.validate().is_err());
    }

    #[test]
    fn test_splice_insert() {
        let splice = Scte35SpliceInsertScheduleActionSettings::default()
            .duration(seconds_to_ticks(30.0).unwrap())
            .splice_event_id(4_294_967_295_i64);
        assert_eq!(splice.duration, Some(2_700_000));
        assert_eq!(splice.validate(), Ok(()));
        assert!(splice.splice_event_id(4_294_967_296_i64).validate().is_err());

        let back = Scte35ReturnToNetworkScheduleActionSettings::default().splice_event_id(-1);
        assert!(back.validate().is_err());
    }

    #[test]
    fn test_seconds_to_ticks() {
        assert_eq!(seconds_to_ticks(0.0), Ok(0));
        assert_eq!(seconds_to_ticks(1.5), Ok(135_000));
        assert_eq!(seconds_to_ticks(95_443.717_677), Ok(8_589_934_591));

        for seconds in [f64::NAN, f64::INFINITY, -1.0, 95_443.8, 1e300] {
            assert!(
                matches!(
                    seconds_to_ticks(seconds),
                    Err(ModelError::OutOfRange { field: "seconds", .. })
                ),
                "{seconds} should be rejected"
            );
        }
    }
}
