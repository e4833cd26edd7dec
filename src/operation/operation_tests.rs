use medialive_api::*;
use reqwest::Method;
use serde_json::json;

use super::{HttpRequest, Operation};
use crate::error::ClientError;

fn route<O: Operation>(operation: &O) -> (Method, String) {
    let request = operation.http_request().unwrap();
    (request.method, format!("/{}", request.path.join("/")))
}

#[test]
fn test_channel_routes() {
    assert_eq!(
        route(&CreateChannelRequest::default()),
        (Method::POST, "/prod/channels".to_owned())
    );
    assert_eq!(
        route(&DescribeChannelRequest::default().channel_id("1234")),
        (Method::GET, "/prod/channels/1234".to_owned())
    );
    assert_eq!(
        route(&UpdateChannelRequest::default().channel_id("1234")),
        (Method::PUT, "/prod/channels/1234".to_owned())
    );
    assert_eq!(
        route(&DeleteChannelRequest::default().channel_id("1234")),
        (Method::DELETE, "/prod/channels/1234".to_owned())
    );
    assert_eq!(
        route(&StartChannelRequest::default().channel_id("1234")),
        (Method::POST, "/prod/channels/1234/start".to_owned())
    );
    assert_eq!(
        route(&StopChannelRequest::default().channel_id("1234")),
        (Method::POST, "/prod/channels/1234/stop".to_owned())
    );
    assert_eq!(
        route(&ListChannelsRequest::default()),
        (Method::GET, "/prod/channels".to_owned())
    );
}

#[test]
fn test_input_and_device_routes() {
    assert_eq!(
        route(&CreateInputRequest::default()),
        (Method::POST, "/prod/inputs".to_owned())
    );
    assert_eq!(
        route(&DescribeInputRequest::default().input_id("42")),
        (Method::GET, "/prod/inputs/42".to_owned())
    );
    assert_eq!(
        route(&UpdateInputRequest::default().input_id("42")),
        (Method::PUT, "/prod/inputs/42".to_owned())
    );
    assert_eq!(
        route(&DeleteInputRequest::default().input_id("42")),
        (Method::DELETE, "/prod/inputs/42".to_owned())
    );
    assert_eq!(
        route(&ListInputsRequest::default()),
        (Method::GET, "/prod/inputs".to_owned())
    );
    assert_eq!(
        route(&DescribeInputDeviceRequest::default().input_device_id("hd-1")),
        (Method::GET, "/prod/inputDevices/hd-1".to_owned())
    );
    assert_eq!(
        route(&UpdateInputDeviceRequest::default().input_device_id("hd-1")),
        (Method::PUT, "/prod/inputDevices/hd-1".to_owned())
    );
    assert_eq!(
        route(&ListInputDevicesRequest::default()),
        (Method::GET, "/prod/inputDevices".to_owned())
    );
}

#[test]
fn test_multiplex_routes() {
    assert_eq!(
        route(&CreateMultiplexRequest::default()),
        (Method::POST, "/prod/multiplexes".to_owned())
    );
    assert_eq!(
        route(&DescribeMultiplexRequest::default().multiplex_id("m1")),
        (Method::GET, "/prod/multiplexes/m1".to_owned())
    );
    assert_eq!(
        route(&UpdateMultiplexRequest::default().multiplex_id("m1")),
        (Method::PUT, "/prod/multiplexes/m1".to_owned())
    );
    assert_eq!(
        route(&DeleteMultiplexRequest::default().multiplex_id("m1")),
        (Method::DELETE, "/prod/multiplexes/m1".to_owned())
    );
    assert_eq!(
        route(&StartMultiplexRequest::default().multiplex_id("m1")),
        (Method::POST, "/prod/multiplexes/m1/start".to_owned())
    );
    assert_eq!(
        route(&StopMultiplexRequest::default().multiplex_id("m1")),
        (Method::POST, "/prod/multiplexes/m1/stop".to_owned())
    );
    assert_eq!(
        route(&ListMultiplexesRequest::default()),
        (Method::GET, "/prod/multiplexes".to_owned())
    );
}

#[test]
fn test_multiplex_program_routes() {
    assert_eq!(
        route(&CreateMultiplexProgramRequest::default().multiplex_id("m1")),
        (Method::POST, "/prod/multiplexes/m1/programs".to_owned())
    );
    assert_eq!(
        route(
            &DescribeMultiplexProgramRequest::default()
                .multiplex_id("m1")
                .program_name("sports")
        ),
        (Method::GET, "/prod/multiplexes/m1/programs/sports".to_owned())
    );
    assert_eq!(
        route(
            &UpdateMultiplexProgramRequest::default()
                .multiplex_id("m1")
                .program_name("sports")
        ),
        (Method::PUT, "/prod/multiplexes/m1/programs/sports".to_owned())
    );
    assert_eq!(
        route(
            &DeleteMultiplexProgramRequest::default()
                .multiplex_id("m1")
                .program_name("sports")
        ),
        (Method::DELETE, "/prod/multiplexes/m1/programs/sports".to_owned())
    );
    assert_eq!(
        route(&ListMultiplexProgramsRequest::default().multiplex_id("m1")),
        (Method::GET, "/prod/multiplexes/m1/programs".to_owned())
    );

    let request = UpdateMultiplexProgramRequest::default().multiplex_id("m1");
    assert!(matches!(
        request.http_request(),
        Err(ClientError::MissingParameter("programName"))
    ));

    let request = CreateMultiplexProgramRequest::default()
        .multiplex_id("m1")
        .program_name("sports")
        .request_id("req-1");
    let body = request.http_request().unwrap().body.unwrap();
    assert_eq!(body, json!({"programName": "sports", "requestId": "req-1"}));
}

#[test]
fn test_schedule_routes() {
    assert_eq!(
        route(&BatchUpdateScheduleRequest::default().channel_id("1234")),
        (Method::PUT, "/prod/channels/1234/schedule".to_owned())
    );
    assert_eq!(
        route(&DescribeScheduleRequest::default().channel_id("1234")),
        (Method::GET, "/prod/channels/1234/schedule".to_owned())
    );
    assert_eq!(
        route(&DeleteScheduleRequest::default().channel_id("1234")),
        (Method::DELETE, "/prod/channels/1234/schedule".to_owned())
    );

    let request = BatchUpdateScheduleRequest::default()
        .channel_id("1234")
        .deletes(BatchScheduleActionDeleteRequest::default().action_names(["old".to_owned()]));
    let body = request.http_request().unwrap().body.unwrap();
    assert_eq!(body, json!({"deletes": {"actionNames": ["old"]}}));

    let request = DescribeScheduleRequest::default()
        .channel_id("1234")
        .max_results(25)
        .http_request()
        .unwrap();
    assert_eq!(request.query, vec![("maxResults".to_owned(), "25".to_owned())]);
    assert_eq!(request.body, None);
}

#[test]
fn test_update_body_omits_path_parameter() {
    let request = UpdateChannelRequest::default()
        .channel_id("1234")
        .name("renamed")
        .log_level(LogLevel::Debug);
    let body = request.http_request().unwrap().body.unwrap();
    assert_eq!(body, json!({"name": "renamed", "logLevel": "DEBUG"}));

    let request = UpdateInputDeviceRequest::default()
        .input_device_id("hd-1")
        .name("lobby");
    let body = request.http_request().unwrap().body.unwrap();
    assert_eq!(body, json!({"name": "lobby"}));
}

#[test]
fn test_get_and_delete_have_no_body() {
    let request = DescribeChannelRequest::default()
        .channel_id("1234")
        .http_request()
        .unwrap();
    assert_eq!(request.body, None);

    let request = DeleteInputRequest::default()
        .input_id("42")
        .http_request()
        .unwrap();
    assert_eq!(request.body, None);
}

#[test]
fn test_create_body_is_whole_request() {
    let request = CreateMultiplexRequest::default()
        .name("mux")
        .availability_zones(["us-west-2a".to_owned(), "us-west-2b".to_owned()])
        .request_id("req-1");
    let body = request.http_request().unwrap().body.unwrap();
    assert_eq!(
        body,
        json!({
            "availabilityZones": ["us-west-2a", "us-west-2b"],
            "name": "mux",
            "requestId": "req-1",
        })
    );
}

#[test]
fn test_list_query() {
    let request = ListChannelsRequest::default()
        .max_results(20)
        .next_token("abc")
        .http_request()
        .unwrap();
    assert_eq!(
        request.query,
        vec![
            ("maxResults".to_owned(), "20".to_owned()),
            ("nextToken".to_owned(), "abc".to_owned()),
        ]
    );

    let request = ListInputsRequest::default().http_request().unwrap();
    assert!(request.query.is_empty());
}

#[test]
fn test_tags_requests() {
    let arn = "arn:aws:medialive:us-west-2:123456789012:channel:1";
    let mut request = CreateTagsRequest::default().resource_arn(arn);
    request.add_tags_entry("team", "news").unwrap();
    let request = request.http_request().unwrap();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, vec!["prod", "tags", arn]);
    assert_eq!(request.body, Some(json!({"tags": {"team": "news"}})));

    let request = DeleteTagsRequest::default()
        .resource_arn(arn)
        .add_tag_key("team")
        .add_tag_key("env")
        .http_request()
        .unwrap();
    assert_eq!(
        request,
        HttpRequest {
            method: Method::DELETE,
            path: vec!["prod".to_owned(), "tags".to_owned(), arn.to_owned()],
            query: vec![
                ("tagKeys".to_owned(), "team".to_owned()),
                ("tagKeys".to_owned(), "env".to_owned()),
            ],
            body: None,
        }
    );

    assert_eq!(
        route(&ListTagsForResourceRequest::default().resource_arn(arn)),
        (Method::GET, format!("/prod/tags/{arn}"))
    );
}

#[test]
fn test_missing_path_parameter() {
    let err = DescribeChannelRequest::default().http_request().unwrap_err();
    assert!(matches!(err, ClientError::MissingParameter("channelId")));

    let err = StopMultiplexRequest::default()
        .multiplex_id("")
        .http_request()
        .unwrap_err();
    assert!(matches!(err, ClientError::MissingParameter("multiplexId")));

    let err = DeleteTagsRequest::default().http_request().unwrap_err();
    assert!(matches!(err, ClientError::MissingParameter("resourceArn")));
}

#[test]
fn test_dot_segments_are_rejected() {
    let err = DescribeChannelRequest::default()
        .channel_id("..")
        .http_request()
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidParameter("channelId", value) if value == ".."));

    let err = DeleteInputRequest::default()
        .input_id(".")
        .http_request()
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidParameter("inputId", _)));

    let request = DescribeChannelRequest::default()
        .channel_id("...")
        .http_request()
        .unwrap();
    assert_eq!(request.path, vec!["prod", "channels", "..."]);
}

#[test]
fn test_empty_response_for_tags() {
    let request = CreateTagsRequest::default();
    assert!(request.parse_response(b"").is_ok());
    assert!(DeleteTagsRequest::default().parse_response(b"").is_ok());
}

#[test]
fn test_parse_flat_describe_response() {
    let body = br#"{"id": "1234", "state": "RUNNING", "pipelinesRunningCount": 2}"#;
    let channel = DescribeChannelRequest::default()
        .parse_response(body)
        .unwrap();
    assert_eq!(channel.id.as_deref(), Some("1234"));
    assert_eq!(channel.state, Some(ChannelState::Running));
    assert_eq!(channel.pipelines_running_count, Some(2));

    let err = DescribeChannelRequest::default()
        .parse_response(b"not json")
        .unwrap_err();
    assert!(matches!(err, ClientError::BodyParsingError("DescribeChannel", _)));
}
