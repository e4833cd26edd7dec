use crate::common::check_range;
use crate::*;

api_model! {
    /// A request to create a multiplex.
    pub struct CreateMultiplexRequest {
        /// A list of availability zones for the multiplex. You must specify
        /// exactly two.
        availability_zones: Vec<String>,
        /// Configuration for a multiplex event.
        multiplex_settings: MultiplexSettings,
        /// Name of multiplex.
        name: String,
        /// Unique request ID. This prevents retries from creating multiple
        /// resources.
        request_id: String,
        /// A collection of key-value pairs.
        tags: Tags,
    }
}

impl_tags!(CreateMultiplexRequest);

impl Validate for CreateMultiplexRequest {
    fn validate(&self) -> Result<(), ModelError> {
        if let Some(zones) = &self.availability_zones
            && zones.len() != 2
        {
            return Err(ModelError::invalid(
                "CreateMultiplexRequest.availabilityZones",
                format!("expected exactly 2 availability zones, got {}", zones.len()),
            ));
        }
        self.multiplex_settings.validate()
    }
}

api_model! {
    pub struct CreateMultiplexResult {
        /// The newly created multiplex.
        multiplex: Multiplex,
    }
}

api_model! {
    pub struct DescribeMultiplexRequest {
        /// The ID of the multiplex.
        multiplex_id: String,
    }
}

/// Describe returns the multiplex itself, not a wrapper.
pub type DescribeMultiplexResult = Multiplex;

api_model! {
    /// A request to update a multiplex.
    pub struct UpdateMultiplexRequest {
        /// ID of the multiplex to update. Sent in the request path.
        multiplex_id: String,
        /// The new settings for a multiplex.
        multiplex_settings: MultiplexSettings,
        /// Name of the multiplex.
        name: String,
    }
}

impl Validate for UpdateMultiplexRequest {
    fn validate(&self) -> Result<(), ModelError> {
        self.multiplex_settings.validate()
    }
}

api_model! {
    pub struct UpdateMultiplexResult {
        /// The updated multiplex.
        multiplex: Multiplex,
    }
}

api_model! {
    pub struct DeleteMultiplexRequest {
        /// The ID of the multiplex.
        multiplex_id: String,
    }
}

pub type DeleteMultiplexResult = Multiplex;

api_model! {
    pub struct StartMultiplexRequest {
        /// The ID of the multiplex.
        multiplex_id: String,
    }
}

pub type StartMultiplexResult = Multiplex;

api_model! {
    pub struct StopMultiplexRequest {
        /// The ID of the multiplex.
        multiplex_id: String,
    }
}

pub type StopMultiplexResult = Multiplex;

api_model! {
    pub struct ListMultiplexesRequest {
        /// The maximum number of items to return.
        max_results: i32,
        /// The token to retrieve the next page of results.
        next_token: String,
    }
}

impl Validate for ListMultiplexesRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("ListMultiplexesRequest.maxResults", self.max_results, 1..=100)
    }
}

api_model! {
    pub struct ListMultiplexesResult {
        /// List of multiplexes.
        multiplexes: Vec<MultiplexSummary>,
        /// Token for the next ListMultiplexes request.
        next_token: String,
    }
}

api_model! {
    /// A request to create a program in a multiplex.
    pub struct CreateMultiplexProgramRequest {
        /// ID of the multiplex where the program is to be created. Sent in
        /// the request path.
        multiplex_id: String,
        /// The settings for this multiplex program.
        multiplex_program_settings: MultiplexProgramSettings,
        /// Name of multiplex program.
        program_name: String,
        /// Unique request ID. This prevents retries from creating multiple
        /// resources.
        request_id: String,
    }
}

impl Validate for CreateMultiplexProgramRequest {
    fn validate(&self) -> Result<(), ModelError> {
        self.multiplex_program_settings.validate()
    }
}

api_model! {
    pub struct CreateMultiplexProgramResult {
        /// The newly created multiplex program.
        multiplex_program: MultiplexProgram,
    }
}

api_model! {
    pub struct DescribeMultiplexProgramRequest {
        /// The ID of the multiplex that the program belongs to.
        multiplex_id: String,
        /// The name of the program.
        program_name: String,
    }
}

pub type DescribeMultiplexProgramResult = MultiplexProgram;

api_model! {
    /// A request to update a program in a multiplex.
    pub struct UpdateMultiplexProgramRequest {
        /// The ID of the multiplex of the program to update. Sent in the
        /// request path.
        multiplex_id: String,
        /// The new settings for a multiplex program.
        multiplex_program_settings: MultiplexProgramSettings,
        /// The name of the program to update. Sent in the request path.
        program_name: String,
    }
}

impl Validate for UpdateMultiplexProgramRequest {
    fn validate(&self) -> Result<(), ModelError> {
        self.multiplex_program_settings.validate()
    }
}

api_model! {
    pub struct UpdateMultiplexProgramResult {
        /// The updated multiplex program.
        multiplex_program: MultiplexProgram,
    }
}

api_model! {
    pub struct DeleteMultiplexProgramRequest {
        /// The ID of the multiplex that the program belongs to.
        multiplex_id: String,
        /// The multiplex program name.
        program_name: String,
    }
}

pub type DeleteMultiplexProgramResult = MultiplexProgram;

api_model! {
    pub struct ListMultiplexProgramsRequest {
        /// The maximum number of items to return.
        max_results: i32,
        /// The ID of the multiplex that the programs belong to. Sent in the
        /// request path.
        multiplex_id: String,
        /// The token to retrieve the next page of results.
        next_token: String,
    }
}

impl Validate for ListMultiplexProgramsRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_range(
            "ListMultiplexProgramsRequest.maxResults",
            self.max_results,
            1..=100,
        )
    }
}

api_model! {
    /// Program entry returned by ListMultiplexPrograms.
    pub struct MultiplexProgramSummary {
        /// The MediaLive Channel associated with the program.
        channel_id: String,
        /// The name of the multiplex program.
        program_name: String,
    }
}

api_model! {
    pub struct ListMultiplexProgramsResult {
        /// List of multiplex programs.
        multiplex_programs: Vec<MultiplexProgramSummary>,
        /// Token for the next ListMultiplexProgram request.
        next_token: String,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_request_tags() {
        let mut request = CreateMultiplexRequest::default().name("mux");
        request
            .add_tags_entry("team", "sports")
            .unwrap()
            .add_tags_entry("env", "prod")
            .unwrap();
        assert_eq!(request.tags.as_ref().map(|tags| tags.len()), Some(2));

        let before = request.clone();
        assert_eq!(
            request.add_tags_entry("env", "dev").map(|_| ()),
            Err(ModelError::DuplicateTagKey("env".to_owned()))
        );
        assert_eq!(request, before);
        assert_eq!(
            request.tags.as_ref().and_then(|tags| tags.get("env")).map(String::as_str),
            Some("prod")
        );
        assert_eq!(request.clear_tags_entries().tags, None);
    }

    #[test]
    fn test_availability_zones() {
        let request = CreateMultiplexRequest::default()
            .availability_zones(["us-west-2a".to_owned(), "us-west-2b".to_owned()])
            .multiplex_settings(
                MultiplexSettings::default()
                    .transport_stream_bitrate(10_000_000)
                    .transport_stream_id(1),
            );
        assert_eq!(request.validate(), Ok(()));
        assert!(
            request
                .availability_zones(vec!["us-west-2a".to_owned()])
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_describe_result_is_flat() {
        let result: DescribeMultiplexResult = serde_json::from_value(json!({
            "arn": "arn:aws:medialive:us-west-2:123456789012:multiplex:1234",
            "id": "1234",
            "state": "IDLE",
            "programCount": 0,
            "multiplexSettings": { "transportStreamBitrate": 1000000 },
            "tags": { "team": "sports" }
        }))
        .unwrap();

        assert_eq!(result.state, Some(MultiplexState::Idle));
        assert_eq!(result.program_count, Some(0));
        assert_eq!(
            result.tags.as_ref().and_then(|tags| tags.get("team")),
            Some(&"sports".to_owned())
        );
    }

    #[test]
    fn test_program_requests() {
        let settings = MultiplexProgramSettings::default()
            .program_number(1)
            .preferred_channel_pipeline(PreferredChannelPipeline::CurrentlyActive);
        let request = CreateMultiplexProgramRequest::default()
            .multiplex_id("1234")
            .program_name("program-a")
            .multiplex_program_settings(settings.clone());
        assert_eq!(request.validate(), Ok(()));
        assert!(matches!(
            request
                .multiplex_program_settings(settings.program_number(70_000))
                .validate(),
            Err(ModelError::OutOfRange {
                field: "MultiplexProgramSettings.programNumber",
                ..
            })
        ));

        let result: ListMultiplexProgramsResult = serde_json::from_value(json!({
            "multiplexPrograms": [{ "channelId": "42", "programName": "program-a" }],
            "nextToken": "t1"
        }))
        .unwrap();
        assert_eq!(
            result.multiplex_programs,
            Some(vec![
                MultiplexProgramSummary::default()
                    .channel_id("42")
                    .program_name("program-a")
            ])
        );
    }
}
