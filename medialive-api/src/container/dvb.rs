use crate::common::check_range;
use crate::*;

api_enum! {
    pub enum DvbSdtOutputSdt {
        SdtFollow => "SDT_FOLLOW",
        SdtFollowIfPresent => "SDT_FOLLOW_IF_PRESENT",
        SdtManual => "SDT_MANUAL",
        SdtNone => "SDT_NONE",
    }
}

api_model! {
    /// DVB Network Information Table (NIT).
    pub struct DvbNitSettings {
        /// The numeric value placed in the Network Information Table (NIT).
        network_id: i32,
        /// The network name text placed in the networkNameDescriptor inside
        /// the Network Information Table. Maximum length is 256 characters.
        network_name: String,
        /// The number of milliseconds between instances of this table in the
        /// output transport stream.
        rep_interval: i32,
    }
}

api_model! {
    /// DVB Service Description Table (SDT).
    pub struct DvbSdtSettings {
        /// Selects method of inserting SDT information into output stream.
        /// The sdtFollow setting copies SDT information from input stream to
        /// output stream. The sdtFollowIfPresent setting copies SDT
        /// information from input stream to output stream if SDT information
        /// is present in the input, otherwise it will fall back on the
        /// user-defined values. The sdtManual setting means user will enter
        /// the SDT information. The sdtNone setting means output stream will
        /// not contain SDT information.
        output_sdt: DvbSdtOutputSdt,
        /// The number of milliseconds between instances of this table in the
        /// output transport stream.
        rep_interval: i32,
        /// The service name placed in the serviceDescriptor in the Service
        /// Description Table. Maximum length is 256 characters.
        service_name: String,
        /// The service provider name placed in the serviceDescriptor in the
        /// Service Description Table. Maximum length is 256 characters.
        service_provider_name: String,
    }
}

api_model! {
    /// DVB Time and Date Table (TDT).
    pub struct DvbTdtSettings {
        /// The number of milliseconds between instances of this table in the
        /// output transport stream.
        rep_interval: i32,
    }
}

impl Validate for DvbNitSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("DvbNitSettings.networkId", self.network_id, 0..=65536)?;
        check_range("DvbNitSettings.repInterval", self.rep_interval, 25..=10000)?;
        check_max_len("DvbNitSettings.networkName", self.network_name.as_deref())
    }
}

impl Validate for DvbSdtSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("DvbSdtSettings.repInterval", self.rep_interval, 25..=2000)?;
        check_max_len("DvbSdtSettings.serviceName", self.service_name.as_deref())?;
        check_max_len(
            "DvbSdtSettings.serviceProviderName",
            self.service_provider_name.as_deref(),
        )
    }
}

impl Validate for DvbTdtSettings {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("DvbTdtSettings.repInterval", self.rep_interval, 1000..=30000)
    }
}

const MAX_DESCRIPTOR_TEXT_LEN: usize = 256;

fn check_max_len(field: &'static str, value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(value) if value.chars().count() > MAX_DESCRIPTOR_TEXT_LEN => {
            Err(ModelError::invalid(
                field,
                format!("longer than {MAX_DESCRIPTOR_TEXT_LEN} characters"),
            ))
        }
        _ => Ok(()),
    }
}
