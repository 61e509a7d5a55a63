use super::*;

const SCENARIO_PASS_1: &str = r#"{"topic1":["a","b"],"topic2":["c"],"other":["d","e"]}"#;
const SCENARIO_PASS_2: &str = r#"{"topic3":["d"],"other":["e"]}"#;

#[tokio::test]
async fn scenario_refines_then_consolidates() {
    let model = ScriptedModel::new([SCENARIO_PASS_1, SCENARIO_PASS_2, r#"{"other":["e"]}"#]);
    let classifier = classifier(model, quick_config().batch_size(5));
    let texts = strings(&["a", "b", "c", "d", "e"]);

    let refined = classifier.refine(&texts).await.unwrap();
    assert_eq!(
        to_json(&refined),
        r#"{"topic1":["a","b"],"topic2":["c"],"topic3":["d"],"other":["e"]}"#
    );
    let prompts = classifier.client.generator.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[1].contains(&serde_json::to_string_pretty(&strings(&["d", "e"])).unwrap()));

    let final_partition = consolidate(refined, "other");
    assert_eq!(
        to_json(&final_partition),
        r#"{"other":["c","d","e"],"topic1":["a","b"]}"#
    );
}

#[tokio::test]
async fn run_stops_at_max_iterations() {
    for (max_iterations, responses) in [
        (Some(2), vec![SCENARIO_PASS_1, SCENARIO_PASS_2]),
        (Some(1), vec![SCENARIO_PASS_1]),
    ] {
        let expected_calls = responses.len();
        let model = ScriptedModel::new(responses);
        let config = quick_config().batch_size(5).max_iterations(max_iterations);
        let classifier = classifier(model, config);

        let partition = classifier.run(&strings(&["a", "b", "c", "d", "e"])).await.unwrap();
        assert_eq!(
            to_json(&partition),
            r#"{"other":["c","d","e"],"topic1":["a","b"]}"#
        );
        assert_eq!(classifier.client.generator.calls(), expected_calls);
    }
}

#[tokio::test]
async fn all_other_converges_after_one_pass() {
    let model = ScriptedModel::new([r#"{"other":["a","b","c"]}"#]);
    let config = quick_config().max_iterations(Some(10));
    let classifier = classifier(model, config);

    let partition = classifier.run(&strings(&["a", "b", "c"])).await.unwrap();
    assert_eq!(to_json(&partition), r#"{"other":["a","b","c"]}"#);
    assert_eq!(classifier.client.generator.calls(), 1);
}

#[tokio::test]
async fn empty_input_makes_no_requests() {
    let classifier = classifier(ScriptedModel::new(Vec::<String>::new()), quick_config());
    let partition = classifier.run(&[]).await.unwrap();
    assert_eq!(to_json(&partition), r#"{"other":[]}"#);
    assert_eq!(classifier.client.generator.calls(), 0);
}

#[tokio::test]
async fn every_text_is_accounted_for() {
    let texts = strings(&["a", "b", "c", "d", "e", "f", "g"]);
    let model = ScriptedModel::new([
        // Pass 1, batches of 3.
        r#"{"x":["a","b"],"other":["c"]}"#,
        r#"{"y":["d"],"other":["e","f"]}"#,
        r#"{"x":["g"]}"#,
        // Pass 2 on ["c","e","f"].
        r#"{"z":["c","e"],"other":["f"]}"#,
        // Pass 3 on ["f"].
        r#"{"other":["f"]}"#,
    ]);
    let classifier = classifier(model, quick_config().batch_size(3));

    let partition = classifier.run(&texts).await.unwrap();
    assert_eq!(partition.total_items(), texts.len());
    let mut seen: Vec<String> = partition.iter().flat_map(|(_, v)| v.clone()).collect();
    seen.sort();
    assert_eq!(seen, texts);
    assert_eq!(
        to_json(&partition),
        r#"{"other":["d","f"],"x":["a","b","g"],"z":["c","e"]}"#
    );
}

#[tokio::test]
async fn catalog_follows_previous_batch() {
    let model = ScriptedModel::new([r#"{"t1":["a","b"]}"#, r#"{"t1":["c"]}"#]);
    let classifier = classifier(model, quick_config().batch_size(2));

    let partition = classifier.classify_pass(&strings(&["a", "b", "c"])).await.unwrap();
    assert_eq!(to_json(&partition), r#"{"t1":["a","b","c"]}"#);

    let prompts = classifier.client.generator.prompts();
    assert!(!prompts[0].contains("Use only these category labels"));
    assert!(prompts[1].contains(r#""t1" and "other""#));
}

#[tokio::test]
async fn catalog_propagation_can_be_disabled() {
    let model = ScriptedModel::new([r#"{"t1":["a"]}"#, r#"{"t2":["b"]}"#]);
    let config = quick_config().batch_size(1).catalog_propagation(false);
    let classifier = classifier(model, config);

    classifier.classify_pass(&strings(&["a", "b"])).await.unwrap();
    let prompts = classifier.client.generator.prompts();
    assert!(prompts
        .iter()
        .all(|p| !p.contains("Use only these category labels")));
}

#[tokio::test]
async fn labels_outside_catalog_are_kept() {
    let model = ScriptedModel::new([r#"{"t1":["a"]}"#, r#"{"surprise":["b"]}"#]);
    let classifier = classifier(model, quick_config().batch_size(1));

    let partition = classifier.classify_pass(&strings(&["a", "b"])).await.unwrap();
    assert_eq!(to_json(&partition), r#"{"t1":["a"],"surprise":["b"]}"#);
}

#[tokio::test(start_paused = true)]
async fn unusable_output_is_retried_in_place() {
    let model = ScriptedModel::new([
        "Sure! Here are your groups.",
        r#"{"t1":["a"]}"#,
        "```json\n{\"t1\":[\"a\"],\"t2\":[\"b\"]}\n```",
    ]);
    let config = quick_config().batch_size(2).retry_delay(Duration::from_secs(3));
    let classifier = classifier(model, config);

    let start = tokio::time::Instant::now();
    let partition = classifier.classify_pass(&strings(&["a", "b"])).await.unwrap();
    assert_eq!(to_json(&partition), r#"{"t1":["a"],"t2":["b"]}"#);

    let prompts = classifier.client.generator.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts.iter().all(|p| p == &prompts[0]));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(6) && elapsed < Duration::from_secs(7));
}

#[tokio::test]
async fn content_retries_exhaust_with_every_error() {
    let model = ScriptedModel::new(["not json", r#"{"t1":["a"]}"#]);
    let config = quick_config().batch_size(2).retry_after_fail_n_times(1);
    let classifier = classifier(model, config);

    match classifier.classify_pass(&strings(&["a", "b"])).await {
        Err(ClassifyError::ExceededRetryCount { errors, .. }) => {
            assert_eq!(errors.len(), 2);
            assert!(matches!(errors[0], ResponseError::Parse(_)));
            assert!(matches!(
                errors[1],
                ResponseError::SizeMismatch {
                    expected: 2,
                    actual: 1
                }
            ));
        }
        other => panic!("expected ExceededRetryCount, got {other:?}"),
    }
    assert_eq!(classifier.client.generator.calls(), 2);
}

#[tokio::test]
async fn content_retry_budget_spans_the_whole_pass() {
    let model = ScriptedModel::new(["bad", r#"{"t":["a"]}"#, "bad again", r#"{"t":["b"]}"#]);
    let config = quick_config().batch_size(1).retry_after_fail_n_times(1);
    let classifier = classifier(model, config);

    let err = classifier.classify_pass(&strings(&["a", "b"])).await.unwrap_err();
    match err {
        ClassifyError::ExceededRetryCount { errors, .. } => assert_eq!(errors.len(), 2),
        other => panic!("expected ExceededRetryCount, got {other:?}"),
    }
    assert_eq!(classifier.client.generator.calls(), 3);
}

#[tokio::test]
async fn zero_content_budget_fails_on_first_rejection() {
    let model = ScriptedModel::new([r#"{"t":[]}"#]);
    let config = quick_config().retry_after_fail_n_times(0);
    let classifier = classifier(model, config);

    let err = classifier.run(&strings(&["a"])).await.unwrap_err();
    assert!(err.to_string().contains("expected 1 items, got 0"));
    assert_eq!(classifier.client.generator.calls(), 1);
}

#[tokio::test]
async fn transport_failures_are_not_content_retried() {
    let failure = || ClientError::GenericError {
        message: "unreachable".to_string(),
    };
    let model = ScriptedModel::from_results([Err(failure()), Err(failure()), Err(failure())]);
    let client = RetryingClient::new(model)
        .retry_after_fail_n_times(2)
        .retry_delay(Duration::ZERO);
    let classifier = TopicClassifier::new(client, quick_config()).unwrap();

    match classifier.run(&strings(&["a"])).await {
        Err(ClassifyError::Completion(CompletionError::ExceededRetryCount { errors, .. })) => {
            assert_eq!(errors.len(), 3);
        }
        other => panic!("expected transport ExceededRetryCount, got {other:?}"),
    }
    assert_eq!(classifier.client.generator.calls(), 3);
}

#[tokio::test]
async fn transport_retry_recovers() {
    let model = ScriptedModel::from_results([
        Err(ClientError::GenericError {
            message: "overloaded".to_string(),
        }),
        Ok(r#"{"t":["a","b"]}"#.to_string()),
    ]);
    let client = RetryingClient::new(model)
        .retry_after_fail_n_times(1)
        .retry_delay(Duration::ZERO);
    let classifier = TopicClassifier::new(client, quick_config()).unwrap();

    let partition = classifier.run(&strings(&["a", "b"])).await.unwrap();
    assert_eq!(to_json(&partition), r#"{"other":[],"t":["a","b"]}"#);
}

#[tokio::test(start_paused = true)]
async fn waits_between_batches() {
    let model = ScriptedModel::new([r#"{"t":["a"]}"#, r#"{"t":["b"]}"#, r#"{"t":["c"]}"#]);
    let config = quick_config()
        .batch_size(1)
        .request_delay(Duration::from_secs(2));
    let classifier = classifier(model, config);

    let start = tokio::time::Instant::now();
    classifier.classify_pass(&strings(&["a", "b", "c"])).await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(4) && elapsed < Duration::from_secs(5));
}

#[test]
fn invalid_config_is_rejected() {
    let client = RetryingClient::new(ScriptedModel::new(Vec::<String>::new()));
    assert!(matches!(
        TopicClassifier::new(client, ClassifyConfig::new().batch_size(0)),
        Err(ClassifyError::InvalidConfig(_))
    ));
}
