use std::error::Error;

use u25match_core::errors::{ExError, ExErrorKind, ProfileError, SAVE_FAILED_MESSAGE};

#[test]
fn test_profile_not_found_verifiable_by_kind() {
    let err = ProfileError::ProfileNotFound {
        uid: "unknown".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::ProfileNotFound);
    assert_eq!(ex_err.code(), "ERR_PROFILE_NOT_FOUND");
    assert_eq!(ex_err.uid(), Some("unknown"));
}

#[test]
fn test_tag_errors_carry_tag_id_as_field() {
    let dup: ExError = ProfileError::DuplicateTag {
        tag_id: "t1".to_string(),
    }
    .into();
    let missing: ExError = ProfileError::TagNotFound {
        tag_id: "t9".to_string(),
    }
    .into();

    assert_eq!(dup.kind(), ExErrorKind::DuplicateTag);
    assert_eq!(dup.field(), Some("t1"));
    assert_eq!(missing.kind(), ExErrorKind::TagNotFound);
    assert_eq!(missing.field(), Some("t9"));
}

#[test]
fn test_invalid_profile_maps_to_invalid_input() {
    let ex_err: ExError = ProfileError::InvalidProfile {
        reason: "duplicate tag id: t1".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert!(ex_err.message().contains("t1"));
}

#[test]
fn test_serde_error_becomes_serialization() {
    let err: ProfileError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}

// ---------------------------------------------------------------------------
// User-facing text
// ---------------------------------------------------------------------------

#[test]
fn test_service_failures_share_generic_message() {
    for kind in [
        ExErrorKind::Persistence,
        ExErrorKind::ExternalService,
        ExErrorKind::Timeout,
        ExErrorKind::Io,
        ExErrorKind::ProfileNotFound,
    ] {
        let err = ExError::new(kind).with_message("connection refused on 10.0.0.3");
        assert_eq!(err.user_message(), SAVE_FAILED_MESSAGE, "kind {:?}", kind);
    }
}

#[test]
fn test_validation_errors_keep_their_message() {
    let err: ExError = ProfileError::DuplicateTag {
        tag_id: "t1".to_string(),
    }
    .into();
    assert!(!err.kind().is_service_failure());
    assert_ne!(err.user_message(), SAVE_FAILED_MESSAGE);
}

#[test]
fn test_source_chain_is_exposed() {
    let inner = ExError::new(ExErrorKind::Io).with_message("disk full");
    let outer = ExError::new(ExErrorKind::Persistence)
        .with_op("update_profile")
        .with_source(inner);

    let source = outer.source().expect("source should be set");
    assert!(source.to_string().contains("ERR_IO"));
    assert_eq!(outer.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
}
