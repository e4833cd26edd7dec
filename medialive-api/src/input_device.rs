//! Hardware encoders (Elemental Link) registered as input devices.

use crate::common::{check_min, check_range};
use crate::*;

api_enum! {
    pub enum InputDeviceActiveInput {
        Hdmi => "HDMI",
        Sdi => "SDI",
    }
}

api_enum! {
    pub enum InputDeviceConfiguredInput {
        Auto => "AUTO",
        Hdmi => "HDMI",
        Sdi => "SDI",
    }
}

api_enum! {
    pub enum InputDeviceState {
        Idle => "IDLE",
        Streaming => "STREAMING",
    }
}

api_enum! {
    pub enum InputDeviceScanType {
        Interlaced => "INTERLACED",
        Progressive => "PROGRESSIVE",
    }
}

api_enum! {
    pub enum InputDeviceIpScheme {
        Static => "STATIC",
        Dhcp => "DHCP",
    }
}

api_enum! {
    pub enum InputDeviceConnectionState {
        Disconnected => "DISCONNECTED",
        Connected => "CONNECTED",
    }
}

api_enum! {
    pub enum DeviceSettingsSyncState {
        Synced => "SYNCED",
        Syncing => "SYNCING",
    }
}

api_enum! {
    pub enum InputDeviceType {
        Hd => "HD",
    }
}

api_model! {
    /// Configurable settings for the input device.
    pub struct InputDeviceConfigurableSettings {
        /// The input source that you want to use. If the device has a source
        /// connected to only one of its input ports, or if you don't care
        /// which source the device sends, specify Auto.
        configured_input: InputDeviceConfiguredInput,
        /// The maximum bitrate in bits per second. Set a value here to
        /// throttle the bitrate of the source video.
        max_bitrate: i32,
    }
}

impl Validate for InputDeviceConfigurableSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_min("InputDeviceConfigurableSettings.maxBitrate", self.max_bitrate, 0)
    }
}

api_model! {
    /// Settings that describe the active source from the input device, and the
    /// video characteristics of that source.
    pub struct InputDeviceHdSettings {
        /// If you specified Auto as the configured input, specifies which of
        /// the sources is currently active (SDI or HDMI).
        active_input: InputDeviceActiveInput,
        /// The source at the input device that is currently active.
        configured_input: InputDeviceConfiguredInput,
        /// The state of the input device.
        device_state: InputDeviceState,
        /// The frame rate of the video source.
        framerate: f64,
        /// The height of the video source, in pixels.
        height: i32,
        /// The current maximum bitrate for ingesting this source, in bits per
        /// second.
        max_bitrate: i32,
        /// The scan type of the video source.
        scan_type: InputDeviceScanType,
        /// The width of the video source, in pixels.
        width: i32,
    }
}

api_model! {
    /// The network settings for the input device.
    pub struct InputDeviceNetworkSettings {
        /// The DNS addresses of the input device.
        dns_addresses: Vec<String>,
        /// The network gateway IP address.
        gateway: String,
        /// The IP address of the input device.
        ip_address: String,
        /// Specifies whether the input device has been configured (outside of
        /// MediaLive) to use a dynamic IP address assignment (DHCP) or a static
        /// IP address.
        ip_scheme: InputDeviceIpScheme,
        /// The subnet mask of the input device.
        subnet_mask: String,
    }
}

api_model! {
    /// Details of the input device.
    pub struct InputDeviceSummary {
        /// The unique ARN of the input device.
        arn: String,
        /// The state of the connection between the input device and AWS.
        connection_state: InputDeviceConnectionState,
        /// The status of the action to synchronize the device configuration.
        /// If you change the configuration of the input device (for example,
        /// the maximum bitrate), MediaLive sends the new data to the device.
        /// The device might not update itself immediately. SYNCED means the
        /// device has updated its configuration. SYNCING means that it has not
        /// updated its configuration.
        device_settings_sync_state: DeviceSettingsSyncState,
        /// Settings that describe an input device that is type HD.
        hd_device_settings: InputDeviceHdSettings,
        /// The unique ID of the input device.
        id: String,
        /// The network MAC address of the input device.
        mac_address: String,
        /// A name that you specify for the input device.
        name: String,
        /// Network settings for the input device.
        network_settings: InputDeviceNetworkSettings,
        /// The unique serial number of the input device.
        serial_number: String,
        /// The type of the input device.
        #[serde(rename = "type")]
        device_type: InputDeviceType,
    }
}

api_model! {
    pub struct DescribeInputDeviceRequest {
        /// The unique ID of this input device. For example, hd-123456789abcdef.
        input_device_id: String,
    }
}

pub type DescribeInputDeviceResult = InputDeviceSummary;

api_model! {
    /// A request to update an input device.
    pub struct UpdateInputDeviceRequest {
        /// The settings that you want to apply to the input device.
        hd_device_settings: InputDeviceConfigurableSettings,
        /// The unique ID of the input device. Sent in the request path.
        input_device_id: String,
        /// The name that you assigned to this input device (not the unique ID).
        name: String,
    }
}

impl Validate for UpdateInputDeviceRequest {
    fn validate(&self) -> Result<(), ModelError> {
        self.hd_device_settings.validate()
    }
}

/// The update response describes the device after the change was accepted.
pub type UpdateInputDeviceResult = InputDeviceSummary;

api_model! {
    pub struct ListInputDevicesRequest {
        max_results: i32,
        next_token: String,
    }
}

impl Validate for ListInputDevicesRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("ListInputDevicesRequest.maxResults", self.max_results, 0..=1000)
    }
}

api_model! {
    pub struct ListInputDevicesResult {
        /// The list of input devices.
        input_devices: Vec<InputDeviceSummary>,
        /// A token to get additional list results.
        next_token: String,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_update_result() {
        let result: UpdateInputDeviceResult = serde_json::from_value(json!({
            "arn": "arn:aws:medialive:us-west-2:123456789012:inputDevice:hd-1",
            "connectionState": "CONNECTED",
            "deviceSettingsSyncState": "SYNCING",
            "hdDeviceSettings": {
                "activeInput": "HDMI",
                "configuredInput": "AUTO",
                "deviceState": "STREAMING",
                "framerate": 59.94,
                "height": 1080,
                "maxBitrate": 20000000,
                "scanType": "PROGRESSIVE",
                "width": 1920
            },
            "id": "hd-1",
            "networkSettings": {
                "dnsAddresses": ["10.0.0.2"],
                "ipScheme": "DHCP"
            },
            "type": "HD"
        }))
        .unwrap();

        assert_eq!(result.device_type, Some(InputDeviceType::Hd));
        let hd = result.hd_device_settings.clone().unwrap_or_default();
        assert_eq!(hd.framerate, Some(59.94));
        assert_eq!(hd.configured_input, Some(InputDeviceConfiguredInput::Auto));
        assert_eq!(
            result.network_settings.and_then(|network| network.ip_scheme),
            Some(InputDeviceIpScheme::Dhcp)
        );
    }

    #[test]
    fn test_update_request() {
        let request = UpdateInputDeviceRequest::default()
            .input_device_id("hd-1")
            .name("stage-left")
            .hd_device_settings(
                InputDeviceConfigurableSettings::default()
                    .configured_input(InputDeviceConfiguredInput::Sdi)
                    .max_bitrate(10_000_000),
            );
        assert_eq!(request.validate(), Ok(()));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "hdDeviceSettings": { "configuredInput": "SDI", "maxBitrate": 10000000 },
                "inputDeviceId": "hd-1",
                "name": "stage-left"
            })
        );
    }
}
