use persona_core::errors::{ExError, ExErrorKind, PersonaError};

#[test]
fn test_unknown_discriminator_maps_to_its_own_kind() {
    let err = PersonaError::UnknownDiscriminator {
        value: "X".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidDiscriminator);
    assert_eq!(ex_err.code(), "ERR_INVALID_DISCRIMINATOR");
    assert!(ex_err.message().contains("\"X\""));
}

#[test]
fn test_query_errors_share_query_kind() {
    let errors = vec![
        PersonaError::MalformedQuery {
            query: "select *".to_string(),
            reason: "expected 'from'".to_string(),
        },
        PersonaError::UnknownEntity {
            name: "Supplier".to_string(),
        },
        PersonaError::QueryTypeMismatch {
            query: "from Person".to_string(),
            expected: "Customer".to_string(),
        },
    ];

    for err in errors {
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), ExErrorKind::Query);
        assert_eq!(ex_err.code(), "ERR_QUERY");
    }
}

#[test]
fn test_unknown_entity_carries_entity_name() {
    let ex_err: ExError = PersonaError::UnknownEntity {
        name: "Supplier".to_string(),
    }
    .into();

    assert_eq!(ex_err.entity_id(), Some("Supplier"));
    assert_eq!(ex_err.op(), Some("parse_query"));
}

#[test]
fn test_discriminator_config_errors_are_config_kind() {
    let ex_err: ExError = PersonaError::DuplicateDiscriminator {
        value: "F".to_string(),
    }
    .into();
    assert_eq!(ex_err.kind(), ExErrorKind::Config);

    let ex_err: ExError = PersonaError::EmptyDiscriminator {
        entity: "Customer".to_string(),
    }
    .into();
    assert_eq!(ex_err.kind(), ExErrorKind::Config);
}

#[test]
fn test_field_rule_errors_are_invalid_input() {
    let ex_err: ExError = PersonaError::JobTitleTooLong { len: 61, max: 60 }.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert!(ex_err.message().contains("61"));
}

#[test]
fn test_error_kind_codes_are_unique() {
    let kinds = [
        ExErrorKind::InvalidInput,
        ExErrorKind::InvalidDiscriminator,
        ExErrorKind::Query,
        ExErrorKind::Connection,
        ExErrorKind::SessionClosed,
        ExErrorKind::Config,
        ExErrorKind::Io,
        ExErrorKind::Serialization,
        ExErrorKind::Persistence,
        ExErrorKind::Internal,
    ];

    let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}
