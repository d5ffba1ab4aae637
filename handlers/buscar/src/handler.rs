use amigo_secreto_sdk::prelude::*;

use crate::store::{Datastore, StoreError};

/// The only method the lookup endpoint accepts
pub const ALLOWED_METHOD: &str = "POST";

/// Body field carrying the caller's access code
pub const CODE_FIELD: &str = "codigo";

const MISSING_CODE: &str = "missing code";
const NOT_FOUND: &str = "not found";

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Internal(err.to_string())
    }
}

/// Render a JSON number the way JavaScript's `String(n)` does for the
/// values a caller can realistically send: integral values print without a
/// fraction (`1e3` -> `"1000"`, `1.0` -> `"1"`), everything else uses the
/// shortest round-trip form (`1.5` -> `"1.5"`).
///
/// Zero (`0`, `-0`, `0.0`) is falsy and yields `None`.
pub fn number_to_code(number: &serde_json::Number) -> Option<String> {
    if let Some(i) = number.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = number.as_u64() {
        return Some(u.to_string());
    }

    let f = number.as_f64()?;
    if f == 0.0 || !f.is_finite() {
        return None;
    }
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some((f as i64).to_string())
    } else {
        Some(f.to_string())
    }
}

/// Turn the caller's `codigo` into a lookup key.
///
/// Strings are uppercased as-is. Numbers go through [`number_to_code`].
/// Empty strings, zero and every other JSON type count as no code at all.
pub fn normalize_code(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(code) if !code.is_empty() => Some(code.to_uppercase()),
        JsonValue::Number(number) => number_to_code(number),
        _ => None,
    }
}

/// Look up a record by access code.
///
/// Expects `POST` with a JSON body like `{"codigo": "xyz9"}` and answers with
/// the full matching record. The dataset is reloaded on every call.
pub async fn handle(store: &Datastore, req: Request) -> Result<Response, HandlerError> {
    if req.method != ALLOWED_METHOD {
        return Err(HandlerError::MethodNotAllowed {
            allow: ALLOWED_METHOD.to_string(),
        });
    }

    // An unreadable body carries no code.
    let body: JsonValue = req.json().unwrap_or_else(|e| {
        tracing::debug!(request_id = %req.request_id, "Ignoring request body: {}", e);
        JsonValue::Null
    });

    let key = body
        .get(CODE_FIELD)
        .and_then(normalize_code)
        .ok_or_else(|| HandlerError::BadRequest(MISSING_CODE.to_string()))?;

    match store.lookup(&key).await? {
        Some(record) => Ok(Response::ok(&record)),
        None => Err(HandlerError::NotFound(NOT_FOUND.to_string())),
    }
}

/// Run [`handle`] and flatten any error into its response.
///
/// Internal failures are logged with full detail; the caller only ever sees
/// the generic error body.
pub async fn respond(store: &Datastore, req: Request) -> Response {
    let request_id = req.request_id.clone();
    match handle(store, req).await {
        Ok(response) => response,
        Err(err) => {
            if err.is_internal() {
                tracing::error!(request_id = %request_id, error = %err, "Error reading DB");
            } else {
                tracing::debug!(request_id = %request_id, status = err.status_code(), "Lookup rejected: {}", err);
            }
            err.to_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DATASET: &str = r#"[
        {"codigo_acceso":"AB12","nombre_participante":"Emilio","nombre_amigo_secreto":"Karol"},
        {"nombre_participante":"Sin codigo"},
        {"codigo_acceso":"XYZ9","nombre":"Ana"},
        {"codigo_acceso":"xyz9","nombre":"Duplicada"}
    ]"#;

    fn store_with(contents: &str) -> (tempfile::NamedTempFile, Datastore) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let store = Datastore::new(file.path());
        (file, store)
    }

    fn post(body: &str) -> Request {
        Request::new("POST", "/api/buscar")
            .with_header("Content-Type", "application/json")
            .with_body(body)
    }

    #[tokio::test]
    async fn test_match_returns_full_record() {
        let (_file, store) = store_with(r#"[{"codigo_acceso":"XYZ9","nombre":"Ana"}]"#);
        let response = respond(&store, post(r#"{"codigo":"xyz9"}"#)).await;
        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_deref(), Some(r#"{"codigo_acceso":"XYZ9","nombre":"Ana"}"#));
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let (_file, store) = store_with(DATASET);
        let response = respond(&store, post(r#"{"codigo":"Xyz9"}"#)).await;
        assert_eq!(response.status, 200);
        assert_eq!(response.json_body().unwrap()["nombre"], json!("Ana"));
    }

    #[tokio::test]
    async fn test_no_match_is_not_found() {
        let (_file, store) = store_with(r#"[{"codigo_acceso":"XYZ9","nombre":"Ana"}]"#);
        let response = respond(&store, post(r#"{"codigo":"ZZZZ"}"#)).await;
        assert_eq!(response.status, 404);
        assert_eq!(response.json_body().unwrap(), json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn test_missing_code_is_bad_request() {
        let (_file, store) = store_with(DATASET);
        for body in [
            r#"{}"#,
            r#"{"codigo":""}"#,
            r#"{"codigo":null}"#,
            r#"{"codigo":false}"#,
            r#"{"codigo":0}"#,
            r#"{"codigo":0.0}"#,
            r#"{"codigo":-0}"#,
            "[]",
            "not json",
        ] {
            let response = respond(&store, post(body)).await;
            assert_eq!(response.status, 400, "{body}");
            assert_eq!(response.json_body().unwrap(), json!({"error": "missing code"}));
        }

        let response = respond(&store, Request::new("POST", "/api/buscar")).await;
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn test_missing_code_checked_before_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = Datastore::new(dir.path().join("absent.json"));
        let response = respond(&store, post("{}")).await;
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let (_file, store) = store_with(DATASET);
        for method in ["GET", "PUT", "DELETE", "OPTIONS", "post", "Post"] {
            let req = Request::new(method, "/api/buscar").with_body(r#"{"codigo":"AB12"}"#);
            let response = respond(&store, req).await;
            assert_eq!(response.status, 405, "{method}");
            assert_eq!(response.header("Allow").map(String::as_str), Some("POST"));
            assert_eq!(response.json_body().unwrap(), json!({"error": "Method not allowed"}));
        }
    }

    #[tokio::test]
    async fn test_missing_store_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Datastore::new(dir.path().join("db_amigo_secreto.json"));
        let response = respond(&store, post(r#"{"codigo":"AB12"}"#)).await;
        assert_eq!(response.status, 500);
        assert_eq!(response.body.as_deref(), Some(r#"{"error":"internal error"}"#));
    }

    #[tokio::test]
    async fn test_corrupt_store_is_internal_error() {
        let (_file, store) = store_with("[{\"codigo_acceso\":\"AB12\"");
        let response = respond(&store, post(r#"{"codigo":"AB12"}"#)).await;
        assert_eq!(response.status, 500);
        assert_eq!(response.json_body().unwrap(), json!({"error": "internal error"}));
    }

    #[tokio::test]
    async fn test_numeric_code_is_coerced() {
        let (_file, store) = store_with(r#"[{"codigo_acceso":"1234","nombre":"Num"}]"#);
        let response = respond(&store, post(r#"{"codigo":1234}"#)).await;
        assert_eq!(response.status, 200);
        assert_eq!(response.json_body().unwrap()["nombre"], json!("Num"));
    }

    #[tokio::test]
    async fn test_integral_float_code_matches_integer_record() {
        let (_file, store) = store_with(
            r#"[{"codigo_acceso":"0","n":"zero"},{"codigo_acceso":"1000","n":"mil"},{"codigo_acceso":"1","n":"uno"}]"#,
        );

        for body in [r#"{"codigo":1e3}"#, r#"{"codigo":1000.0}"#, r#"{"codigo":1000}"#] {
            let response = respond(&store, post(body)).await;
            assert_eq!(response.status, 200, "{body}");
            assert_eq!(response.json_body().unwrap()["n"], json!("mil"));
        }

        let response = respond(&store, post(r#"{"codigo":1.0}"#)).await;
        assert_eq!(response.status, 200);
        assert_eq!(response.json_body().unwrap()["n"], json!("uno"));

        let response = respond(&store, post(r#"{"codigo":0}"#)).await;
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn test_handle_reports_typed_errors() {
        let (_file, store) = store_with(DATASET);
        let err = handle(&store, post(r#"{"codigo":"NOPE"}"#)).await.unwrap_err();
        assert!(matches!(err, HandlerError::NotFound(_)));

        let err = handle(&store, Request::new("GET", "/")).await.unwrap_err();
        assert!(matches!(err, HandlerError::MethodNotAllowed { .. }));
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(&json!("ab12")), Some("AB12".to_string()));
        assert_eq!(normalize_code(&json!(" ab ")), Some(" AB ".to_string()));
        assert_eq!(normalize_code(&json!(42)), Some("42".to_string()));
        assert_eq!(normalize_code(&json!(-7)), Some("-7".to_string()));
        assert_eq!(normalize_code(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(normalize_code(&json!(1e3)), Some("1000".to_string()));
        assert_eq!(normalize_code(&json!(2.0)), Some("2".to_string()));
        assert_eq!(normalize_code(&json!(0)), None);
        assert_eq!(normalize_code(&json!(0.0)), None);
        assert_eq!(normalize_code(&json!(-0.0)), None);
        assert_eq!(normalize_code(&json!("")), None);
        assert_eq!(normalize_code(&json!(true)), None);
        assert_eq!(normalize_code(&json!({"a": 1})), None);
    }
}
