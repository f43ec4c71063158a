#[cfg(test)]
mod tests {
    use crate::error::ZoomError;
    use crate::logic::{
        build_webinar_payload, CreateWebinarRequest, RecurrenceInput, WebinarSettingsInput,
    };
    use serde_json::json;

    fn base_request() -> CreateWebinarRequest {
        CreateWebinarRequest {
            topic: Some("Demo".to_string()),
            start_time: Some("2026-01-01T10:00:00Z".to_string()),
            ..CreateWebinarRequest::default()
        }
    }

    fn daily_recurrence() -> RecurrenceInput {
        RecurrenceInput {
            recurrence_type: Some(1),
            repeat_interval: Some(1),
            end_times: Some(5),
            ..RecurrenceInput::default()
        }
    }

    fn recurring_request(recurrence: RecurrenceInput) -> CreateWebinarRequest {
        CreateWebinarRequest {
            webinar_type: Some(9),
            recurrence: Some(recurrence),
            ..base_request()
        }
    }

    fn validation_message(result: Result<impl std::fmt::Debug, ZoomError>) -> String {
        match result.expect_err("builder should reject the request") {
            ZoomError::ValidationError(message) => message,
            other => panic!("expected a validation error, got: {:?}", other),
        }
    }

    // --- Required field rules, in validation order ---

    #[test]
    fn test_missing_topic_fails_first() {
        let request = CreateWebinarRequest {
            topic: None,
            // Also invalid, but topic must win
            start_time: None,
            ..CreateWebinarRequest::default()
        };
        assert_eq!(validation_message(build_webinar_payload(request)), "topic required");
    }

    #[test]
    fn test_empty_topic_rejected() {
        let request = CreateWebinarRequest {
            topic: Some(String::new()),
            ..base_request()
        };
        assert_eq!(validation_message(build_webinar_payload(request)), "topic required");
    }

    #[test]
    fn test_missing_start_time_rejected() {
        let request = CreateWebinarRequest {
            start_time: None,
            ..base_request()
        };
        assert_eq!(
            validation_message(build_webinar_payload(request)),
            "start_time required"
        );
    }

    #[test]
    fn test_recurring_without_recurrence_rejected() {
        let request = CreateWebinarRequest {
            webinar_type: Some(9),
            recurrence: None,
            ..base_request()
        };
        assert_eq!(
            validation_message(build_webinar_payload(request)),
            "recurrence required"
        );
    }

    #[test]
    fn test_recurring_without_recurrence_type_rejected() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: None,
            ..daily_recurrence()
        });
        assert_eq!(
            validation_message(build_webinar_payload(request)),
            "recurrence required"
        );
    }

    #[test]
    fn test_missing_repeat_interval_rejected() {
        let request = recurring_request(RecurrenceInput {
            repeat_interval: None,
            ..daily_recurrence()
        });
        assert_eq!(
            validation_message(build_webinar_payload(request)),
            "repeat_interval required"
        );
    }

    #[test]
    fn test_missing_end_condition_rejected() {
        let request = recurring_request(RecurrenceInput {
            end_times: None,
            end_date_time: None,
            ..daily_recurrence()
        });
        assert_eq!(
            validation_message(build_webinar_payload(request)),
            "end condition required"
        );
    }

    #[test]
    fn test_both_end_conditions_rejected() {
        let request = recurring_request(RecurrenceInput {
            end_times: Some(5),
            end_date_time: Some("2026-06-01T10:00:00Z".to_string()),
            ..daily_recurrence()
        });
        assert_eq!(
            validation_message(build_webinar_payload(request)),
            "end condition required"
        );
    }

    #[test]
    fn test_weekly_without_weekly_days_rejected() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: Some(2),
            ..daily_recurrence()
        });
        let message = validation_message(build_webinar_payload(request));
        assert!(
            message.contains("weekly_days"),
            "weekly error should name the missing field, got: {}",
            message
        );
    }

    #[test]
    fn test_weekly_with_weekly_days_succeeds() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: Some(2),
            weekly_days: Some("2,4".to_string()),
            ..daily_recurrence()
        });
        let payload = build_webinar_payload(request).expect("weekly rule should be accepted");
        let recurrence = payload.recurrence.expect("recurrence should be attached");
        assert_eq!(recurrence.weekly_days.as_deref(), Some("2,4"));
        assert!(recurrence.monthly_day.is_none());
    }

    #[test]
    fn test_monthly_day_alone_succeeds() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: Some(3),
            monthly_day: Some(15),
            ..daily_recurrence()
        });
        let payload = build_webinar_payload(request).expect("monthly_day alone should be accepted");
        let recurrence = payload.recurrence.expect("recurrence should be attached");
        assert_eq!(recurrence.monthly_day, Some(15));
        assert!(recurrence.monthly_week.is_none());
        assert!(recurrence.monthly_week_day.is_none());
    }

    #[test]
    fn test_monthly_week_pair_succeeds() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: Some(3),
            monthly_week: Some(2),
            monthly_week_day: Some(3),
            ..daily_recurrence()
        });
        let payload = build_webinar_payload(request).expect("week/weekday pair should be accepted");
        let recurrence = payload.recurrence.expect("recurrence should be attached");
        assert_eq!(recurrence.monthly_week, Some(2));
        assert_eq!(recurrence.monthly_week_day, Some(3));
        assert!(recurrence.monthly_day.is_none());
    }

    #[test]
    fn test_monthly_week_without_week_day_rejected() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: Some(3),
            monthly_week: Some(2),
            ..daily_recurrence()
        });
        let message = validation_message(build_webinar_payload(request));
        assert!(
            message.contains("monthly"),
            "monthly error should name the missing fields, got: {}",
            message
        );
    }

    #[test]
    fn test_monthly_week_day_without_week_rejected() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: Some(3),
            monthly_week_day: Some(3),
            ..daily_recurrence()
        });
        assert_eq!(
            validation_message(build_webinar_payload(request)),
            "monthly_day or monthly_week and monthly_week_day required"
        );
    }

    #[test]
    fn test_monthly_day_wins_over_week_pair() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: Some(3),
            monthly_day: Some(15),
            monthly_week: Some(2),
            monthly_week_day: Some(3),
            ..daily_recurrence()
        });
        let payload = build_webinar_payload(request).expect("monthly_day should be preferred");
        let recurrence = payload.recurrence.expect("recurrence should be attached");
        assert_eq!(recurrence.monthly_day, Some(15));
        assert!(
            recurrence.monthly_week.is_none() && recurrence.monthly_week_day.is_none(),
            "week pair should not be emitted alongside monthly_day"
        );
    }

    #[test]
    fn test_unknown_recurrence_type_rejected() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: Some(4),
            ..daily_recurrence()
        });
        assert_eq!(
            validation_message(build_webinar_payload(request)),
            "invalid recurrence type"
        );
    }

    // --- Defaults and assembly ---

    #[test]
    fn test_minimal_request_gets_documented_defaults() {
        let payload = build_webinar_payload(base_request()).expect("minimal request is valid");

        assert_eq!(payload.webinar_type, 5, "type should default to scheduled");
        assert_eq!(payload.duration, 60);
        assert_eq!(payload.timezone, "Asia/Kolkata");
        assert!(payload.recurrence.is_none(), "non-recurring payload must not carry recurrence");

        let settings = &payload.settings;
        assert!(settings.host_video);
        assert!(settings.panelists_video);
        assert!(settings.practice_session);
        assert!(settings.registrants_email_notification);
        assert_eq!(settings.approval_type, 0);
        assert_eq!(settings.registration_type, 1);
        assert!(settings.meeting_authentication);
        assert!(settings.alternative_hosts.is_none());
        assert!(settings.q_and_a);
        assert!(settings.enable_chat);
        assert!(!settings.allow_multiple_devices);
        assert_eq!(settings.auto_recording, "none");
        assert!(!settings.on_demand);
    }

    #[test]
    fn test_daily_recurrence_serializes_without_extraneous_fields() {
        let payload = build_webinar_payload(recurring_request(daily_recurrence()))
            .expect("daily recurrence is valid");

        let value = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(
            value["recurrence"],
            json!({"type": 1, "repeat_interval": 1, "end_times": 5}),
            "recurrence object should carry exactly type, interval and end condition"
        );
    }

    #[test]
    fn test_end_date_time_condition_serialized() {
        let request = recurring_request(RecurrenceInput {
            end_times: None,
            end_date_time: Some("2026-06-01T10:00:00Z".to_string()),
            ..daily_recurrence()
        });
        let payload = build_webinar_payload(request).expect("end_date_time condition is valid");

        let value = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(
            value["recurrence"],
            json!({
                "type": 1,
                "repeat_interval": 1,
                "end_date_time": "2026-06-01T10:00:00Z"
            })
        );
    }

    #[test]
    fn test_recurrence_dropped_for_non_recurring_type() {
        let request = CreateWebinarRequest {
            webinar_type: Some(5),
            recurrence: Some(daily_recurrence()),
            ..base_request()
        };
        let payload = build_webinar_payload(request).expect("request is valid");
        assert!(
            payload.recurrence.is_none(),
            "recurrence supplied for a non-recurring type is ignored"
        );

        let value = serde_json::to_value(&payload).expect("payload serializes");
        assert!(
            value.get("recurrence").is_none(),
            "no recurrence key should be emitted at all"
        );
    }

    #[test]
    fn test_invalid_recurrence_ignored_for_non_recurring_type() {
        // The rule checks never run when the type is not 9
        let request = CreateWebinarRequest {
            recurrence: Some(RecurrenceInput {
                recurrence_type: Some(42),
                ..RecurrenceInput::default()
            }),
            ..base_request()
        };
        let payload = build_webinar_payload(request).expect("recurrence is not validated here");
        assert!(payload.recurrence.is_none());
    }

    #[test]
    fn test_co_hosts_mapped_to_alternative_hosts() {
        let request = CreateWebinarRequest {
            co_hosts: Some("cohost@example.com".to_string()),
            ..base_request()
        };
        let payload = build_webinar_payload(request).expect("request is valid");
        assert_eq!(
            payload.settings.alternative_hosts.as_deref(),
            Some("cohost@example.com")
        );
    }

    #[test]
    fn test_alternative_hosts_omitted_from_json_when_absent() {
        let payload = build_webinar_payload(base_request()).expect("request is valid");
        let value = serde_json::to_value(&payload).expect("payload serializes");
        assert!(
            value["settings"].get("alternative_hosts").is_none(),
            "alternative_hosts must be omitted, not set to an empty string"
        );
    }

    #[test]
    fn test_caller_setting_overrides_win() {
        let request = CreateWebinarRequest {
            settings: Some(WebinarSettingsInput {
                host_video: Some(false),
                auto_recording: Some("cloud".to_string()),
                ..WebinarSettingsInput::default()
            }),
            ..base_request()
        };
        let payload = build_webinar_payload(request).expect("request is valid");
        assert!(!payload.settings.host_video);
        assert_eq!(payload.settings.auto_recording, "cloud");
        // Untouched fields keep their defaults
        assert!(payload.settings.panelists_video);
    }

    #[test]
    fn test_registration_policy_is_fixed() {
        // Callers cannot turn registration off; the policy fields are not
        // part of the settings input at all.
        let request = CreateWebinarRequest {
            settings: Some(WebinarSettingsInput::default()),
            ..base_request()
        };
        let payload = build_webinar_payload(request).expect("request is valid");
        assert_eq!(payload.settings.approval_type, 0);
        assert_eq!(payload.settings.registration_type, 1);
    }

    #[test]
    fn test_caller_values_preserved() {
        let request = CreateWebinarRequest {
            topic: Some("All Hands".to_string()),
            start_time: Some("2026-03-01T09:30:00Z".to_string()),
            webinar_type: Some(5),
            duration: Some(45),
            timezone: Some("Europe/Zurich".to_string()),
            ..CreateWebinarRequest::default()
        };
        let payload = build_webinar_payload(request).expect("request is valid");
        assert_eq!(payload.topic, "All Hands");
        assert_eq!(payload.start_time, "2026-03-01T09:30:00Z");
        assert_eq!(payload.duration, 45);
        assert_eq!(payload.timezone, "Europe/Zurich");
    }

    #[test]
    fn test_builder_is_deterministic() {
        let request = recurring_request(RecurrenceInput {
            recurrence_type: Some(2),
            weekly_days: Some("2,4".to_string()),
            ..daily_recurrence()
        });

        let first = build_webinar_payload(request.clone()).expect("request is valid");
        let second = build_webinar_payload(request).expect("request is valid");
        assert_eq!(first, second, "identical input must produce identical payloads");
    }

    #[test]
    fn test_payload_top_level_shape() {
        let payload = build_webinar_payload(base_request()).expect("request is valid");
        let value = serde_json::to_value(&payload).expect("payload serializes");

        assert_eq!(value["topic"], "Demo");
        assert_eq!(value["type"], 5);
        assert_eq!(value["start_time"], "2026-01-01T10:00:00Z");
        assert_eq!(value["duration"], 60);
        assert_eq!(value["timezone"], "Asia/Kolkata");
        assert_eq!(value["settings"]["approval_type"], 0);
        assert_eq!(value["settings"]["registration_type"], 1);
    }
}
