//! Integration tests for common optpipes workflows.
//!
//! These tests drive the pipes through the facade crate the way a request
//! handler would: one pipe per argument, absent arguments passed through.

use optpipes::prelude::*;
use serde_json::json;

// =============================================================================
// Handler-style argument parsing
// =============================================================================

#[derive(Debug, PartialEq)]
struct ListQuery {
    page: Option<i64>,
    min_price: Option<f64>,
    archived: Option<bool>,
    sort: Option<Value>,
}

async fn parse_list_query(raw: &Value) -> Result<ListQuery, Error> {
    let sort = EnumDefinition::new().member("Asc", "asc").member("Desc", "desc");

    Ok(ListQuery {
        page: ParseIntOptionalPipe::default()
            .transform(raw.get("page").cloned(), &ArgumentMetadata::query("page"))
            .await?,
        min_price: ParseFloatOptionalPipe::default()
            .transform(
                raw.get("minPrice").cloned(),
                &ArgumentMetadata::query("minPrice"),
            )
            .await?,
        archived: ParseBoolOptionalPipe::default()
            .transform(
                raw.get("archived").cloned(),
                &ArgumentMetadata::query("archived"),
            )
            .await?,
        sort: ParseEnumOptionalPipe::new(sort, PipeOptions::default())
            .map_err(|e| Error::InternalServerError(e.to_string()))?
            .transform(raw.get("sort").cloned(), &ArgumentMetadata::query("sort"))
            .await?,
    })
}

#[tokio::test]
async fn test_all_arguments_present() {
    let query = parse_list_query(&json!({
        "page": "2",
        "minPrice": "9.5",
        "archived": "false",
        "sort": "desc",
    }))
    .await
    .unwrap();

    assert_eq!(
        query,
        ListQuery {
            page: Some(2),
            min_price: Some(9.5),
            archived: Some(false),
            sort: Some(json!("desc")),
        }
    );
}

#[tokio::test]
async fn test_missing_and_null_arguments() {
    let query = parse_list_query(&json!({ "page": null })).await.unwrap();

    assert_eq!(
        query,
        ListQuery {
            page: None,
            min_price: None,
            archived: None,
            sort: None,
        }
    );
}

#[tokio::test]
async fn test_first_bad_argument_short_circuits() {
    let err = parse_list_query(&json!({ "page": "two", "sort": "sideways" }))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(
        err.to_json(),
        json!({
            "statusCode": 400,
            "message": "Validation failed (numeric string is expected)",
            "error": "Bad Request",
        })
    );
}

// =============================================================================
// Route parameters
// =============================================================================

#[tokio::test]
async fn test_route_uuid_not_found() {
    let pipe = ParseUuidOptionalPipe::new(
        ParseUuidOptionalPipeOptions::new()
            .version(UuidVersion::V4)
            .error_http_status_code(ErrorHttpStatus::NotFound),
    );
    let metadata = ArgumentMetadata::param("id");

    assert_eq!(
        pipe.transform(
            Some(json!("9f1c2b7e-3d4a-4e5f-8a6b-7c8d9e0f1a2b")),
            &metadata
        )
        .await,
        Ok(Some("9f1c2b7e-3d4a-4e5f-8a6b-7c8d9e0f1a2b".to_string()))
    );

    let err = pipe.transform(Some(json!("42")), &metadata).await.unwrap_err();
    assert_eq!(err.status(), ErrorHttpStatus::NotFound);
}

#[tokio::test]
async fn test_shared_exception_factory() {
    let factory = exception_factory(|message| Error::UnprocessableEntity(message.to_uppercase()));
    let bools = ParseBoolOptionalPipe::new(PipeOptions::new().exception_factory({
        let factory = factory.clone();
        move |message| factory(message)
    }));
    let ints = ParseIntOptionalPipe::new(
        PipeOptions::new().exception_factory(move |message| factory(message)),
    );
    let metadata = ArgumentMetadata::body();

    let err = bools.transform(Some(json!("yes")), &metadata).await.unwrap_err();
    assert_eq!(
        err,
        Error::UnprocessableEntity("VALIDATION FAILED (BOOLEAN STRING IS EXPECTED)".to_string())
    );

    let err = ints.transform(Some(json!("1.5")), &metadata).await.unwrap_err();
    assert_eq!(err.status_code(), 422);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_options_from_config_json() {
    let options = PipeOptions::from_json(json!({ "errorHttpStatusCode": 409 })).unwrap();
    let pipe = ParseFloatOptionalPipe::new(options);
    assert_eq!(pipe.error_status(), ErrorHttpStatus::Conflict);

    let err = PipeOptions::from_json(json!({ "errorHttpStatusCode": 200 })).unwrap_err();
    assert!(matches!(err, PipeConfigError::InvalidOptions(_)));
}
