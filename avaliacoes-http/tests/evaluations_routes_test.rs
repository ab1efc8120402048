use std::collections::HashSet;

use avaliacoes_core::{Evaluation, Student};
use avaliacoes_http::{
    handlers::test_helpers::{create_test_state, setup},
    models::{CreateEvaluationRequest, ErrorMessages, ListEvaluationsResponse},
    routes,
    server::AppState,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use regex::Regex;
use serde_json::json;
use tower::ServiceExt;

fn test_state() -> AppState {
    create_test_state().with_public_url("http://localhost")
}

fn app(state: &AppState) -> Router {
    routes::create_api_router().with_state(state.clone())
}

fn post_evaluation(student_id: impl std::fmt::Display, body: String) -> Request<Body> {
    Request::builder()
        .uri(format!("/students/{}/evaluations", student_id))
        .method("POST")
        .header(header::HOST, "localhost")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn post_evaluation_with_language(
    student_id: impl std::fmt::Display,
    body: String,
    language: &str,
) -> Request<Body> {
    let mut request = post_evaluation(student_id, body);
    request
        .headers_mut()
        .insert(header::ACCEPT_LANGUAGE, language.parse().unwrap());
    request
}

fn blank_payload() -> String {
    json!({ "title": "", "subjectReference": null }).to_string()
}

async fn read_messages(response: Response) -> HashSet<String> {
    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let errors: ErrorMessages = serde_json::from_slice(&body).unwrap();
    let count = errors.mensagens.len();
    let messages: HashSet<String> = errors.mensagens.into_iter().collect();
    assert_eq!(messages.len(), count, "messages must not repeat");
    messages
}

async fn evaluation_count(state: &AppState) -> usize {
    state.service.evaluations().find_all().await.unwrap().len()
}

#[tokio::test]
async fn test_create_evaluation_for_student() {
    let state = test_state();
    let student: Student = setup(&state).await.unwrap();

    let payload = json!(CreateEvaluationRequest::new(
        "Primeira avaliação",
        "Bootcamp de Aceleração Acadêmica"
    ))
    .to_string();

    let response = app(&state)
        .oneshot(post_evaluation(student.id, payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let pattern = Regex::new(r"^http://localhost/students/(\d+)/evaluations/(\d+)$").unwrap();
    let captures = pattern.captures(&location).unwrap();
    assert_eq!(captures[1].parse::<u64>().unwrap(), student.id);

    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let created: Evaluation = serde_json::from_slice(&body).unwrap();
    assert_eq!(captures[2].parse::<u64>().unwrap(), created.id);

    let evaluations = state.service.evaluations().find_all().await.unwrap();
    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].student_id, student.id);
    assert_eq!(evaluations[0].title, "Primeira avaliação");
    assert_eq!(
        evaluations[0].subject_reference,
        "Bootcamp de Aceleração Acadêmica"
    );
}

#[tokio::test]
async fn test_create_evaluation_for_unknown_student() {
    let state = test_state();
    setup(&state).await.unwrap();

    let payload =
        json!(CreateEvaluationRequest::new("Primeira avaliação", "Bootcamp")).to_string();

    let response = app(&state)
        .oneshot(post_evaluation(i32::MAX, payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(evaluation_count(&state).await, 0);
}

#[tokio::test]
async fn test_unknown_student_wins_over_invalid_payload() {
    let state = test_state();
    setup(&state).await.unwrap();
    let app = app(&state);

    for body in [blank_payload(), "{not json".to_string()] {
        let response = app
            .clone()
            .oneshot(post_evaluation_with_language(i32::MAX, body, "pt-BR"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let response = app
        .oneshot(post_evaluation("not-a-number", blank_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(evaluation_count(&state).await, 0);
}

#[tokio::test]
async fn test_create_evaluation_with_blank_fields() {
    let state = test_state();
    let student = setup(&state).await.unwrap();

    let response = app(&state)
        .oneshot(post_evaluation_with_language(
            student.id,
            blank_payload(),
            "pt-br",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let messages = read_messages(response).await;
    let expected: HashSet<String> = [
        "O campo subjectReference não deve estar em branco",
        "O campo title não deve estar em branco",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(messages, expected);
    assert_eq!(evaluation_count(&state).await, 0);
}

#[tokio::test]
async fn test_missing_fields_are_blank() {
    let state = test_state();
    let student = setup(&state).await.unwrap();

    let response = app(&state)
        .oneshot(post_evaluation_with_language(
            student.id,
            "{}".to_string(),
            "en",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let messages = read_messages(response).await;
    assert_eq!(messages.len(), 2);
    assert!(messages.contains("The field title must not be blank"));
    assert!(messages.contains("The field subjectReference must not be blank"));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let state = test_state();
    let student = setup(&state).await.unwrap();

    let response = app(&state)
        .oneshot(post_evaluation_with_language(
            student.id,
            "{\"title\": ".to_string(),
            "pt-BR",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let messages = read_messages(response).await;
    assert_eq!(
        messages,
        HashSet::from(["O corpo da requisição é inválido".to_string()])
    );
    assert_eq!(evaluation_count(&state).await, 0);
}

#[tokio::test]
async fn test_messages_follow_accept_language() {
    let state = test_state();
    let student = setup(&state).await.unwrap();
    let app = app(&state);

    let mut rendered = Vec::new();
    for language in ["pt-BR", "en-US", "es", "fr-FR"] {
        let response = app
            .clone()
            .oneshot(post_evaluation_with_language(
                student.id,
                blank_payload(),
                language,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        rendered.push(read_messages(response).await);
    }

    assert_ne!(rendered[0], rendered[1]);
    assert_ne!(rendered[0], rendered[2]);
    assert_ne!(rendered[1], rendered[2]);
    // unknown language falls back to the default (en)
    assert_eq!(rendered[3], rendered[1]);

    let response = app
        .oneshot(post_evaluation(student.id, blank_payload()))
        .await
        .unwrap();
    assert_eq!(read_messages(response).await, rendered[1]);
}

#[tokio::test]
async fn test_repeated_invalid_request_is_stable() {
    let state = test_state();
    let student = setup(&state).await.unwrap();
    let app = app(&state);

    let mut first = None;
    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(post_evaluation_with_language(
                student.id,
                blank_payload(),
                "pt-BR",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let messages = read_messages(response).await;
        match &first {
            None => first = Some(messages),
            Some(expected) => assert_eq!(&messages, expected),
        }
    }

    assert_eq!(evaluation_count(&state).await, 0);
}

#[tokio::test]
async fn test_student_count_is_unchanged() {
    let state = test_state();
    let student = setup(&state).await.unwrap();
    let app = app(&state);

    for i in 0..3 {
        let payload = json!(CreateEvaluationRequest::new(format!("Prova {i}"), "Rust")).to_string();
        let response = app
            .clone()
            .oneshot(post_evaluation(student.id, payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    assert_eq!(state.service.students().count().await.unwrap(), 1);
    assert_eq!(
        state
            .service
            .students()
            .find_by_id(student.id)
            .await
            .unwrap(),
        Some(student)
    );
    assert_eq!(evaluation_count(&state).await, 3);
}

#[tokio::test]
async fn test_location_can_be_followed() {
    let state = test_state();
    let student = setup(&state).await.unwrap();
    let app = app(&state);

    let payload = json!(CreateEvaluationRequest::new("Prova", "Rust")).to_string();
    let response = app
        .clone()
        .oneshot(post_evaluation(student.id, payload))
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .trim_start_matches("http://localhost")
        .to_string();

    let request = Request::builder()
        .uri(&location)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let fetched: Evaluation = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched.title, "Prova");
    assert_eq!(fetched.student_id, student.id);

    let request = Request::builder()
        .uri(format!("/students/{}/evaluations", student.id))
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let listed: ListEvaluationsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(listed.evaluations, vec![fetched]);
}

#[tokio::test]
async fn test_evaluation_of_another_student_is_not_found() {
    let state = test_state();
    let owner = setup(&state).await.unwrap();
    let other = state
        .service
        .register_student(avaliacoes_core::StudentDraft::new(
            "Maria",
            "maria@email.com",
            "Junior",
        ))
        .await
        .unwrap();
    let evaluation = state
        .service
        .create_evaluation(
            &owner.id.to_string(),
            avaliacoes_core::EvaluationDraft::new("Prova", "Rust"),
        )
        .await
        .unwrap();

    for uri in [
        format!("/students/{}/evaluations/{}", other.id, evaluation.id),
        format!("/students/{}/evaluations/9999", owner.id),
        format!("/students/9999/evaluations/{}", evaluation.id),
    ] {
        let request = Request::builder()
            .uri(uri)
            .method("GET")
            .body(Body::empty())
            .unwrap();
        let response = app(&state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_location_uses_stored_ids() {
    let state = test_state();
    let student = setup(&state).await.unwrap();
    assert_eq!(student.id, 1);
    let app = app(&state);

    for raw_id in ["01", "+1", "%201"] {
        let payload = json!(CreateEvaluationRequest::new("Prova", "Rust")).to_string();
        let response = app
            .clone()
            .oneshot(post_evaluation(raw_id, payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body = axum::body::to_bytes(response.into_body(), 10_000)
            .await
            .unwrap();
        let created: Evaluation = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            location,
            format!("http://localhost/students/1/evaluations/{}", created.id)
        );
    }
}

#[tokio::test]
async fn test_location_ignores_host_header() {
    let state = create_test_state();
    let student = setup(&state).await.unwrap();

    let payload = json!(CreateEvaluationRequest::new("Prova", "Rust")).to_string();
    let mut request = post_evaluation(student.id, payload);
    request
        .headers_mut()
        .insert(header::HOST, "attacker.example".parse().unwrap());
    request
        .headers_mut()
        .insert("x-forwarded-proto", "https".parse().unwrap());

    let response = app(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers().get(header::LOCATION).unwrap();
    assert_eq!(
        location.to_str().unwrap(),
        format!("/students/{}/evaluations/1", student.id)
    );
}
