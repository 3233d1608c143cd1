pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::ingest::handlers as documents;
use crate::job_search::handlers as jobs;
use crate::state::AppState;
use crate::store::handlers as saved;

/// Uploads above this are rejected before extraction.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/analysis/report", post(analysis::handle_report))
        // Job search
        .route("/api/v1/jobs/search", post(jobs::handle_search))
        // Saved analyses
        .route(
            "/api/v1/saved",
            get(saved::handle_list).post(saved::handle_save),
        )
        .route(
            "/api/v1/saved/:id",
            get(saved::handle_get).delete(saved::handle_delete),
        )
        .route("/api/v1/saved/:id/report", get(saved::handle_report))
        // Document ingestion
        .route(
            "/api/v1/documents/resume",
            post(documents::handle_resume_upload),
        )
        .route(
            "/api/v1/documents/job-description",
            post(documents::handle_job_description_upload),
        )
        .layer(axum::extract::DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::ingest::{DocumentExtractor, TesseractCli};
    use crate::store::{IdGenerator, JsonFileStore};
    use crate::test_support::{
        ScriptedLlm, ANALYSIS_PAYLOAD, JOB_DESCRIPTION, RESUME, SEARCH_REPLY,
    };

    struct Harness {
        router: Router,
        _dir: tempfile::TempDir,
    }

    fn harness(llm: ScriptedLlm) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState {
            llm: Arc::new(llm),
            store: Arc::new(JsonFileStore::new(dir.path().join("saved.json"))),
            ids: Arc::new(IdGenerator::default()),
            extractor: DocumentExtractor::new(Arc::new(TesseractCli::new("tesseract"))),
        };
        Harness {
            router: build_router(state),
            _dir: dir,
        }
    }

    async fn send(router: &Router, request: Request<Body>) -> Response {
        router.clone().oneshot(request).await.unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn text_body(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn multipart_upload(uri: &str, file_name: &str, content: &[u8]) -> Request<Body> {
        let boundary = "XBOUNDARYX";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let h = harness(ScriptedLlm::reply(""));
        let response = send(&h.router, get("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_analysis_end_to_end() {
        let h = harness(ScriptedLlm::reply(ANALYSIS_PAYLOAD));
        let response = send(
            &h.router,
            post_json(
                "/api/v1/analysis",
                json!({
                    "jobDescription": "Vaga de Analista de Dados...",
                    "resume": "Experiência com SQL e Python..."
                }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let payload: Value = serde_json::from_str(ANALYSIS_PAYLOAD).unwrap();
        assert_eq!(body["compatibility"]["totalScore"], 72);
        assert_eq!(
            body["compatibility"]["breakdown"].as_array().unwrap().len(),
            payload["compatibility"]["breakdown"].as_array().unwrap().len()
        );
    }

    #[tokio::test]
    async fn test_analysis_rejects_blank_inputs() {
        let h = harness(ScriptedLlm::reply(ANALYSIS_PAYLOAD));
        let response = send(
            &h.router,
            post_json(
                "/api/v1/analysis",
                json!({ "jobDescription": "   ", "resume": RESUME }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unparseable_request_body_uses_error_envelope() {
        let h = harness(ScriptedLlm::reply(ANALYSIS_PAYLOAD));
        let request = Request::post("/api/v1/analysis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"jobDescription\": "))
            .unwrap();
        let response = send(&h.router, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_content_type_uses_error_envelope() {
        let h = harness(ScriptedLlm::reply(SEARCH_REPLY));
        let request = Request::post("/api/v1/jobs/search")
            .body(Body::from(json!({ "resume": RESUME }).to_string()))
            .unwrap();
        let response = send(&h.router, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_save_without_analysis_result_uses_error_envelope() {
        let h = harness(ScriptedLlm::reply(ANALYSIS_PAYLOAD));
        let response = send(
            &h.router,
            post_json(
                "/api/v1/saved",
                json!({ "jobDescription": JOB_DESCRIPTION, "resume": RESUME }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analysis_malformed_reply_is_bad_gateway() {
        let h = harness(ScriptedLlm::reply("isso não é JSON"));
        let response = send(
            &h.router,
            post_json(
                "/api/v1/analysis",
                json!({ "jobDescription": JOB_DESCRIPTION, "resume": RESUME }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"]["code"], "MALFORMED_RESPONSE");
    }

    #[tokio::test]
    async fn test_analysis_transport_failure_is_request_failed() {
        let h = harness(ScriptedLlm::failing(503));
        let response = send(
            &h.router,
            post_json(
                "/api/v1/analysis",
                json!({ "jobDescription": JOB_DESCRIPTION, "resume": RESUME }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"]["code"], "REQUEST_FAILED");
    }

    #[tokio::test]
    async fn test_job_search_end_to_end() {
        let h = harness(ScriptedLlm::reply(SEARCH_REPLY));
        let response = send(
            &h.router,
            post_json(
                "/api/v1/jobs/search",
                json!({ "resume": RESUME, "jobDescription": JOB_DESCRIPTION }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "found");
        assert_eq!(
            body["jobs"],
            json!([
                {"title": "Analista de Dados Jr", "company": "Empresa X", "platform": "LinkedIn", "url": "https://example.com/1"},
                {"title": "Cientista de Dados", "company": "Empresa Y", "platform": "Gupy", "url": "https://example.com/2"}
            ])
        );
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_job_search_zero_matches_is_not_an_error() {
        let h = harness(ScriptedLlm::reply("Não encontrei vagas abertas no momento."));
        let response = send(
            &h.router,
            post_json("/api/v1/jobs/search", json!({ "resume": RESUME })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "noMatches");
        assert_eq!(body["jobs"], json!([]));
        assert!(body["message"].as_str().unwrap().starts_with("Nenhuma vaga"));
    }

    #[tokio::test]
    async fn test_job_search_requires_resume() {
        let h = harness(ScriptedLlm::reply(SEARCH_REPLY));
        let response = send(
            &h.router,
            post_json("/api/v1/jobs/search", json!({ "jobDescription": JOB_DESCRIPTION })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_saved_analysis_lifecycle() {
        let h = harness(ScriptedLlm::reply(""));
        let analysis: Value = serde_json::from_str(ANALYSIS_PAYLOAD).unwrap();

        let first = send(
            &h.router,
            post_json(
                "/api/v1/saved",
                json!({ "analysisResult": analysis, "jobDescription": JOB_DESCRIPTION, "resume": RESUME }),
            ),
        )
        .await;
        assert_eq!(first.status(), StatusCode::CREATED);
        let first = json_body(first).await;

        let second = send(
            &h.router,
            post_json(
                "/api/v1/saved",
                json!({ "analysisResult": analysis, "jobDescription": "Outra vaga", "resume": RESUME }),
            ),
        )
        .await;
        let second = json_body(second).await;
        assert_ne!(first["id"], second["id"]);

        let list = json_body(send(&h.router, get("/api/v1/saved")).await).await;
        assert_eq!(list.as_array().unwrap().len(), 2);
        assert_eq!(list[0], second);

        let id = first["id"].as_str().unwrap();
        let loaded = send(&h.router, get(&format!("/api/v1/saved/{id}"))).await;
        assert_eq!(loaded.status(), StatusCode::OK);
        let loaded = json_body(loaded).await;
        assert_eq!(loaded["jobDescription"], JOB_DESCRIPTION);
        assert_eq!(loaded["analysisResult"]["compatibility"]["totalScore"], 72);

        let deleted = send(
            &h.router,
            Request::delete(format!("/api/v1/saved/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let list = json_body(send(&h.router, get("/api/v1/saved")).await).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["id"], second["id"]);

        let missing = send(&h.router, get(&format!("/api/v1/saved/{id}"))).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_saved_report_download() {
        let h = harness(ScriptedLlm::reply(""));
        let analysis: Value = serde_json::from_str(ANALYSIS_PAYLOAD).unwrap();
        let saved = json_body(
            send(
                &h.router,
                post_json(
                    "/api/v1/saved",
                    json!({ "analysisResult": analysis, "jobDescription": JOB_DESCRIPTION, "resume": RESUME }),
                ),
            )
            .await,
        )
        .await;

        let id = saved["id"].as_str().unwrap();
        let response = send(&h.router, get(&format!("/api/v1/saved/{id}/report"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"relatorio-joule-academy.txt\""
        );
        let report = text_body(response).await;
        assert!(report.starts_with("Relatório de Análise - Joule Academy\n"));
        assert!(report.contains("COMPATIBILIDADE GERAL: 72%"));
    }

    #[tokio::test]
    async fn test_report_from_posted_result() {
        let h = harness(ScriptedLlm::reply(""));
        let analysis: Value = serde_json::from_str(ANALYSIS_PAYLOAD).unwrap();
        let response = send(
            &h.router,
            post_json("/api/v1/analysis/report", json!({ "analysisResult": analysis })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text_body(response).await.contains("HABILIDADES EM COMUM"));
    }

    #[tokio::test]
    async fn test_txt_resume_upload_is_unsupported_and_returns_no_text() {
        let h = harness(ScriptedLlm::reply(""));
        let response = send(
            &h.router,
            multipart_upload("/api/v1/documents/resume", "curriculo.txt", b"SQL e Python"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
        assert!(body.get("text").is_none());
    }

    #[tokio::test]
    async fn test_pdf_upload_rejected_for_job_description() {
        let h = harness(ScriptedLlm::reply(""));
        let response = send(
            &h.router,
            multipart_upload("/api/v1/documents/job-description", "vaga.pdf", b"%PDF-1.4"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_broken_pdf_upload_is_extraction_failure() {
        let h = harness(ScriptedLlm::reply(""));
        let response = send(
            &h.router,
            multipart_upload("/api/v1/documents/resume", "curriculo.pdf", b"not really a pdf"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["error"]["code"], "EXTRACTION_FAILURE");
    }
}
