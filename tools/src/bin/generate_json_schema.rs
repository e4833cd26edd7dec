use std::{fs, io, path::Path};

use anyhow::{Context, Result, bail};
use medialive_api::*;
use schemars::{JsonSchema, schema::RootSchema, schema_for};
use serde::{Deserialize, Serialize};

const ROOT_DIR: &str = env!("CARGO_MANIFEST_DIR");
const SCHEMA_PATH: &str = "../schemas/api_types.schema.json";

fn main() -> Result<()> {
    let check_flag = std::env::args().any(|arg| &arg == "--check");
    let action = match check_flag {
        true => SchemaAction::CheckIfChanged,
        false => SchemaAction::Update,
    };
    let schema_path = Path::new(ROOT_DIR).join(SCHEMA_PATH);
    generate_schema(schema_for!(ApiTypes), &schema_path, action)
}

/// This enum is used to generate JSON schema for all request and result types.
/// This prevents repeating types in generated schema.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
#[allow(dead_code)]
enum ApiTypes {
    CreateChannelRequest(Box<CreateChannelRequest>),
    CreateChannelResult(Box<CreateChannelResult>),
    DescribeChannelRequest(DescribeChannelRequest),
    UpdateChannelRequest(Box<UpdateChannelRequest>),
    UpdateChannelResult(Box<UpdateChannelResult>),
    DeleteChannelRequest(DeleteChannelRequest),
    StartChannelRequest(StartChannelRequest),
    StopChannelRequest(StopChannelRequest),
    ListChannelsRequest(ListChannelsRequest),
    ListChannelsResult(ListChannelsResult),
    Channel(Box<Channel>),

    CreateInputRequest(CreateInputRequest),
    CreateInputResult(CreateInputResult),
    DescribeInputRequest(DescribeInputRequest),
    UpdateInputRequest(UpdateInputRequest),
    UpdateInputResult(UpdateInputResult),
    DeleteInputRequest(DeleteInputRequest),
    DeleteInputResult(DeleteInputResult),
    ListInputsRequest(ListInputsRequest),
    ListInputsResult(ListInputsResult),
    Input(Input),

    DescribeInputDeviceRequest(DescribeInputDeviceRequest),
    UpdateInputDeviceRequest(UpdateInputDeviceRequest),
    ListInputDevicesRequest(ListInputDevicesRequest),
    ListInputDevicesResult(ListInputDevicesResult),
    InputDeviceSummary(InputDeviceSummary),

    CreateMultiplexRequest(CreateMultiplexRequest),
    CreateMultiplexResult(CreateMultiplexResult),
    DescribeMultiplexRequest(DescribeMultiplexRequest),
    UpdateMultiplexRequest(UpdateMultiplexRequest),
    UpdateMultiplexResult(UpdateMultiplexResult),
    DeleteMultiplexRequest(DeleteMultiplexRequest),
    StartMultiplexRequest(StartMultiplexRequest),
    StopMultiplexRequest(StopMultiplexRequest),
    ListMultiplexesRequest(ListMultiplexesRequest),
    ListMultiplexesResult(ListMultiplexesResult),
    Multiplex(Multiplex),
    MultiplexProgram(MultiplexProgram),
    CreateMultiplexProgramRequest(CreateMultiplexProgramRequest),
    CreateMultiplexProgramResult(CreateMultiplexProgramResult),
    DescribeMultiplexProgramRequest(DescribeMultiplexProgramRequest),
    UpdateMultiplexProgramRequest(UpdateMultiplexProgramRequest),
    UpdateMultiplexProgramResult(UpdateMultiplexProgramResult),
    DeleteMultiplexProgramRequest(DeleteMultiplexProgramRequest),
    ListMultiplexProgramsRequest(ListMultiplexProgramsRequest),
    ListMultiplexProgramsResult(ListMultiplexProgramsResult),

    BatchUpdateScheduleRequest(BatchUpdateScheduleRequest),
    BatchUpdateScheduleResult(BatchUpdateScheduleResult),
    DescribeScheduleRequest(DescribeScheduleRequest),
    DescribeScheduleResult(DescribeScheduleResult),
    DeleteScheduleRequest(DeleteScheduleRequest),
    DeleteScheduleResult(DeleteScheduleResult),

    CreateTagsRequest(CreateTagsRequest),
    ListTagsForResourceRequest(ListTagsForResourceRequest),
    ListTagsForResourceResult(ListTagsForResourceResult),
    DeleteTagsRequest(DeleteTagsRequest),

    Scte35SpliceInsertScheduleActionSettings(Scte35SpliceInsertScheduleActionSettings),
    Scte35TimeSignalScheduleActionSettings(Scte35TimeSignalScheduleActionSettings),
    Scte35ReturnToNetworkScheduleActionSettings(Scte35ReturnToNetworkScheduleActionSettings),
}

fn generate_schema(
    current_schema: RootSchema,
    schema_path: &Path,
    action: SchemaAction,
) -> Result<()> {
    let json_from_disk = match fs::read_to_string(schema_path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err).context("Failed to read schema from disk"),
    };
    let json_current = serde_json::to_string_pretty(&current_schema)? + "\n";

    if json_current != json_from_disk {
        match action {
            SchemaAction::Update => {
                if let Some(parent) = schema_path.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                fs::write(schema_path, &json_current)
                    .with_context(|| format!("Failed to write {}", schema_path.display()))?
            }
            SchemaAction::CheckIfChanged => {
                bail!("Schema changed. Rerun without --check arg to regenerate it.")
            }
        };
    }
    Ok(())
}

enum SchemaAction {
    Update,
    CheckIfChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn check_does_not_create_output_dir() {
        let dir = scratch_dir("medialive-schema-check");
        let schema_path = dir.join("api_types.schema.json");

        let result = generate_schema(
            schema_for!(ApiTypes),
            &schema_path,
            SchemaAction::CheckIfChanged,
        );
        assert!(result.is_err());
        assert!(!dir.exists());
    }

    #[test]
    fn update_creates_output_dir_then_check_passes() {
        let dir = scratch_dir("medialive-schema-update");
        let schema_path = dir.join("api_types.schema.json");

        generate_schema(schema_for!(ApiTypes), &schema_path, SchemaAction::Update).unwrap();
        assert!(schema_path.exists());
        generate_schema(
            schema_for!(ApiTypes),
            &schema_path,
            SchemaAction::CheckIfChanged,
        )
        .unwrap();

        fs::remove_dir_all(&dir).unwrap();
    }
}
