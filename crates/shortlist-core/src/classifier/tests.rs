use super::*;

#[test]
fn test_severity_approval_cutoff() {
    let clean = SeverityScores::default();
    assert!(clean.is_approved());
    assert_eq!(clean.max_severity(), 0);

    let borderline = SeverityScores {
        hate: 1,
        sexual: 0,
        violence: 1,
        self_harm: 0,
    };
    assert!(borderline.is_approved());

    let flagged = SeverityScores {
        hate: 0,
        sexual: 0,
        violence: 2,
        self_harm: 0,
    };
    assert!(!flagged.is_approved());
    assert_eq!(flagged.max_severity(), 2);
}

#[test]
fn test_from_settings_selects_variant_once() {
    let mock = TextClassifier::from_settings(None, None).unwrap();
    assert_eq!(mock.mode(), ClassifierMode::Mock);

    let mock = TextClassifier::from_settings(Some("https://example.test"), None).unwrap();
    assert_eq!(mock.mode(), ClassifierMode::Mock);

    let real =
        TextClassifier::from_settings(Some("https://example.test"), Some("key")).unwrap();
    assert_eq!(real.mode(), ClassifierMode::Real);
}

#[test]
fn test_real_classifier_rejects_blank_credentials() {
    let err = RealClassifier::new("", "key").unwrap_err();
    assert!(matches!(err, ClassifierError::InvalidConfig { .. }));

    let err = RealClassifier::new("https://example.test", "").unwrap_err();
    assert!(matches!(err, ClassifierError::InvalidConfig { .. }));
}

#[tokio::test]
async fn test_mock_approves_everything() {
    let classifier = TextClassifier::from_settings(None, None).unwrap();
    let scores = classifier.analyze("any marketing copy").await.unwrap();
    assert!(scores.is_approved());
}

#[tokio::test]
async fn test_validate_messages_aggregates_batch() {
    let classifier = TextClassifier::from_settings(None, None).unwrap();
    let messages = vec![
        "Buy one get one free this weekend".to_string(),
        "Join our enterprise webinar".to_string(),
    ];

    let report = classifier.validate_messages(&messages).await;

    assert_eq!(report.total_checked, 2);
    assert!(report.all_approved);
    assert_eq!(report.mode, ClassifierMode::Mock);
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].message_id, 0);
    assert_eq!(report.results[1].message_id, 1);
    assert!(report.results.iter().all(|v| v.approved));
    assert!(report.results.iter().all(|v| v.categories.is_some()));
    assert!(report.results.iter().all(|v| v.confidence == 1.0));
}

#[tokio::test]
async fn test_validate_messages_empty_batch() {
    let classifier = TextClassifier::from_settings(None, None).unwrap();
    let report = classifier.validate_messages(&[]).await;

    assert_eq!(report.total_checked, 0);
    assert!(report.all_approved);
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn test_real_classifier_error_becomes_unapproved_verdict() {
    // Unroutable endpoint: the request fails and the verdict carries the error.
    let classifier =
        TextClassifier::from_settings(Some("http://127.0.0.1:1"), Some("key")).unwrap();
    let report = classifier
        .validate_messages(&["some text".to_string()])
        .await;

    assert_eq!(report.total_checked, 1);
    assert!(!report.all_approved);
    assert!(!report.results[0].approved);
    assert!(report.results[0].categories.is_none());
    assert_eq!(report.results[0].confidence, 0.0);
    assert!(report.results[0].reason.contains("classifier error"));
}

#[test]
fn test_classifier_mode_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ClassifierMode::Real).unwrap(),
        "\"real\""
    );
    assert_eq!(
        serde_json::to_string(&ClassifierMode::Mock).unwrap(),
        "\"mock\""
    );
}
