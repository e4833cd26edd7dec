//! Channel schedule: timed actions such as SCTE-35 splices.

use crate::common::check_range;
use crate::*;

api_enum! {
    /// Point of the reference action that a follow-mode action starts from.
    pub enum FollowPoint {
        End => "END",
        Start => "START",
    }
}

api_model! {
    /// Start the action at a fixed time.
    pub struct FixedModeScheduleActionStartSettings {
        /// Start time for the action to start in the channel. (Not the time
        /// for the action to be added to the schedule: actions are always
        /// added to the schedule immediately.) UTC format:
        /// yyyy-mm-ddThh:mm:ss.nnnZ. All the letters are digits (for example,
        /// mm might be 01) except for the two constants "T" for time and "Z"
        /// for "UTC format".
        time: String,
    }
}

api_model! {
    /// Start the action relative to the start or end of another action.
    pub struct FollowModeScheduleActionStartSettings {
        /// Identifies whether this action starts relative to the start or
        /// relative to the end of the reference action.
        follow_point: FollowPoint,
        /// The action name of another action that this one refers to.
        reference_action_name: String,
    }
}

api_model! {
    /// Start the action as soon as it is added to the schedule.
    pub struct ImmediateModeScheduleActionStartSettings {}
}

api_model! {
    /// When the action takes effect.
    pub struct ScheduleActionStartSettings {
        fixed_mode_schedule_action_start_settings: FixedModeScheduleActionStartSettings,
        follow_mode_schedule_action_start_settings: FollowModeScheduleActionStartSettings,
        immediate_mode_schedule_action_start_settings: ImmediateModeScheduleActionStartSettings,
    }
}

api_model! {
    /// What the action does.
    pub struct ScheduleActionSettings {
        /// Action to insert SCTE-35 return_to_network message.
        scte35_return_to_network_settings: Scte35ReturnToNetworkScheduleActionSettings,
        /// Action to insert SCTE-35 splice_insert message.
        scte35_splice_insert_settings: Scte35SpliceInsertScheduleActionSettings,
        /// Action to insert SCTE-35 time_signal message.
        scte35_time_signal_settings: Scte35TimeSignalScheduleActionSettings,
    }
}

impl Validate for ScheduleActionSettings {
    fn validate(&self) -> Result<(), ModelError> {
        self.scte35_return_to_network_settings.validate()?;
        self.scte35_splice_insert_settings.validate()?;
        self.scte35_time_signal_settings.validate()
    }
}

api_model! {
    /// A single entry of a channel schedule.
    pub struct ScheduleAction {
        /// The name of the action, must be unique within the schedule. This
        /// name provides the main reference to an action once it is added to
        /// the schedule. A name is unique if it is no longer in the schedule.
        /// The schedule is automatically cleaned up to remove actions with a
        /// start time of more than 1 hour ago (approximately) so at that point
        /// a name can be reused.
        action_name: String,
        /// Settings for this schedule action.
        schedule_action_settings: ScheduleActionSettings,
        /// The time for the action to start in the channel.
        schedule_action_start_settings: ScheduleActionStartSettings,
    }
}

impl Validate for ScheduleAction {
    fn validate(&self) -> Result<(), ModelError> {
        self.schedule_action_settings.validate()
    }
}

api_model! {
    /// A list of schedule actions to create.
    pub struct BatchScheduleActionCreateRequest {
        schedule_actions: Vec<ScheduleAction>,
    }
}

api_model! {
    /// A list of schedule actions to delete, by name.
    pub struct BatchScheduleActionDeleteRequest {
        action_names: Vec<String>,
    }
}

api_model! {
    /// Adds and removes schedule actions in one call.
    pub struct BatchUpdateScheduleRequest {
        /// ID of the channel whose schedule is being updated. Sent in the
        /// request path.
        channel_id: String,
        /// Schedule actions to create in the schedule.
        creates: BatchScheduleActionCreateRequest,
        /// Schedule actions to delete from the schedule.
        deletes: BatchScheduleActionDeleteRequest,
    }
}

impl Validate for BatchUpdateScheduleRequest {
    fn validate(&self) -> Result<(), ModelError> {
        match &self.creates {
            Some(creates) => creates.schedule_actions.validate(),
            None => Ok(()),
        }
    }
}

api_model! {
    pub struct BatchScheduleActionCreateResult {
        /// List of actions that have been created in the schedule.
        schedule_actions: Vec<ScheduleAction>,
    }
}

api_model! {
    pub struct BatchScheduleActionDeleteResult {
        /// List of actions that have been deleted from the schedule.
        schedule_actions: Vec<ScheduleAction>,
    }
}

api_model! {
    pub struct BatchUpdateScheduleResult {
        /// Schedule actions created in the schedule.
        creates: BatchScheduleActionCreateResult,
        /// Schedule actions deleted from the schedule.
        deletes: BatchScheduleActionDeleteResult,
    }
}

api_model! {
    pub struct DescribeScheduleRequest {
        /// Id of the channel whose schedule is being requested.
        channel_id: String,
        /// The maximum number of items to return.
        max_results: i32,
        /// The token to retrieve the next page of results.
        next_token: String,
    }
}

impl Validate for DescribeScheduleRequest {
    fn validate(&self) -> Result<(), ModelError> {
        check_range("DescribeScheduleRequest.maxResults", self.max_results, 1..=1000)
    }
}

api_model! {
    pub struct DescribeScheduleResult {
        /// The next token; for use in pagination.
        next_token: String,
        /// The list of actions in the schedule.
        schedule_actions: Vec<ScheduleAction>,
    }
}

api_model! {
    pub struct DeleteScheduleRequest {
        /// Id of the channel whose schedule is being deleted.
        channel_id: String,
    }
}

api_model! {
    pub struct DeleteScheduleResult {}
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn splice_insert(name: &str, duration: i64) -> ScheduleAction {
        ScheduleAction::default()
            .action_name(name)
            .schedule_action_start_settings(
                ScheduleActionStartSettings::default().fixed_mode_schedule_action_start_settings(
                    FixedModeScheduleActionStartSettings::default()
                        .time("2026-10-19T12:00:00.000Z"),
                ),
            )
            .schedule_action_settings(
                ScheduleActionSettings::default().scte35_splice_insert_settings(
                    Scte35SpliceInsertScheduleActionSettings::default()
                        .splice_event_id(7)
                        .duration(duration),
                ),
            )
    }

    #[test]
    fn test_batch_update_json() {
        let request = BatchUpdateScheduleRequest::default()
            .channel_id("1234")
            .creates(
                BatchScheduleActionCreateRequest::default()
                    .schedule_actions([splice_insert("avail-1", 2_700_000)]),
            )
            .deletes(BatchScheduleActionDeleteRequest::default().action_names(["old".to_owned()]));

        assert_eq!(request.validate(), Ok(()));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "channelId": "1234",
                "creates": {
                    "scheduleActions": [{
                        "actionName": "avail-1",
                        "scheduleActionSettings": {
                            "scte35SpliceInsertSettings": {
                                "duration": 2700000,
                                "spliceEventId": 7
                            }
                        },
                        "scheduleActionStartSettings": {
                            "fixedModeScheduleActionStartSettings": {
                                "time": "2026-10-19T12:00:00.000Z"
                            }
                        }
                    }]
                },
                "deletes": { "actionNames": ["old"] }
            })
        );
    }

    #[test]
    fn test_nested_splice_is_validated() {
        let request = BatchUpdateScheduleRequest::default().creates(
            BatchScheduleActionCreateRequest::default()
                .schedule_actions([splice_insert("avail-1", 1 << 34)]),
        );
        assert!(matches!(
            request.validate(),
            Err(ModelError::OutOfRange {
                field: "Scte35SpliceInsertScheduleActionSettings.duration",
                ..
            })
        ));
    }

    #[test]
    fn test_immediate_start_is_empty_object() {
        let start = ScheduleActionStartSettings::default().immediate_mode_schedule_action_start_settings(
            ImmediateModeScheduleActionStartSettings::default(),
        );
        assert_eq!(
            serde_json::to_value(&start).unwrap(),
            json!({ "immediateModeScheduleActionStartSettings": {} })
        );
    }
}
