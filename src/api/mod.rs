use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{
        Json, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::core::{
    AnswerOption, Catalog, Objective, ProfileReport, ProfileTier, QuestionSet, Session,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliProfileTier {
    Conservative,
    Moderate,
    Aggressive,
}

impl From<CliProfileTier> for ProfileTier {
    fn from(value: CliProfileTier) -> Self {
        match value {
            CliProfileTier::Conservative => ProfileTier::Conservative,
            CliProfileTier::Moderate => ProfileTier::Moderate,
            CliProfileTier::Aggressive => ProfileTier::Aggressive,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiProfileTier {
    #[serde(alias = "CONSERVADOR", alias = "conservador")]
    Conservative,
    #[serde(alias = "MODERADO", alias = "moderado")]
    Moderate,
    #[serde(alias = "AGRESSIVO", alias = "agressivo")]
    Aggressive,
}

impl From<ApiProfileTier> for ProfileTier {
    fn from(value: ApiProfileTier) -> Self {
        match value {
            ApiProfileTier::Conservative => ProfileTier::Conservative,
            ApiProfileTier::Moderate => ProfileTier::Moderate,
            ApiProfileTier::Aggressive => ProfileTier::Aggressive,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "investor-profile",
    about = "Adaptive investor-profile questionnaire and portfolio recommendation"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "RUST_LOG",
        default_value = "info,investor_profile=debug",
        help = "tracing filter directive"
    )]
    pub log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API.
    Serve {
        #[arg(long, env = "INVESTOR_PROFILE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "INVESTOR_PROFILE_PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Replay answer scores and print the recommendation report.
    Recommend {
        #[arg(
            long,
            value_delimiter = ',',
            required = true,
            help = "Answer scores in question order, e.g. 1,3,5,3"
        )]
        answers: Vec<i32>,
        #[arg(long, allow_negative_numbers = true)]
        age: i32,
        #[arg(long, help = "Objective key; defaults to the first one for the profile")]
        objective: Option<String>,
    },
    /// Print the question bank.
    Questions,
    /// List the objectives available for a profile.
    Objectives {
        #[arg(long, value_enum)]
        profile: CliProfileTier,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswersField {
    Scores(Vec<i32>),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct QuizPayload {
    answers: Option<AnswersField>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RecommendPayload {
    answers: Option<AnswersField>,
    age: Option<i32>,
    objective: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ObjectivesQuery {
    profile: Option<ApiProfileTier>,
}

#[derive(Debug, Serialize)]
struct ProgressResponse {
    current: usize,
    total: usize,
}

#[derive(Debug, Serialize)]
struct QuestionView<'a> {
    index: usize,
    prompt: &'static str,
    options: &'a [AnswerOption],
}

#[derive(Debug, Serialize)]
struct ObjectiveView {
    key: Objective,
    label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileSummary {
    tier: ProfileTier,
    label: &'static str,
    description: &'static str,
    objectives: Vec<ObjectiveView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizResponse<'a> {
    answers: Vec<i32>,
    progress: ProgressResponse,
    complete: bool,
    follow_up: Option<ProfileTier>,
    current_question: Option<QuestionView<'a>>,
    total_score: i32,
    profile: Option<ProfileSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionsResponse<'a> {
    base: &'a QuestionSet,
    follow_ups: FollowUpsResponse<'a>,
}

#[derive(Debug, Serialize)]
struct FollowUpsResponse<'a> {
    conservative: &'a QuestionSet,
    moderate: &'a QuestionSet,
    aggressive: &'a QuestionSet,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn run(cli: Cli, catalog: Catalog) -> Result<(), String> {
    match cli.command {
        Command::Serve { host, port } => {
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .map_err(|e| format!("invalid listen address {host}:{port}: {e}"))?;
            run_http_server(addr, Arc::new(catalog))
                .await
                .map_err(|e| format!("Server error: {e}"))
        }
        Command::Recommend {
            answers,
            age,
            objective,
        } => {
            let report = build_report(&catalog, &answers, Some(age), objective.as_deref())?;
            print_json(&report)
        }
        Command::Questions => print_json(&build_questions_response(&catalog)),
        Command::Objectives { profile } => {
            print_json(&objective_views(&catalog, profile.into()))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

pub async fn run_http_server(addr: SocketAddr, catalog: Arc<Catalog>) -> std::io::Result<()> {
    let app = router(catalog);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "investor profile HTTP API listening");

    axum::serve(listener, app).await
}

fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/api/questions", get(questions_handler))
        .route("/api/quiz", get(quiz_get_handler).post(quiz_post_handler))
        .route("/api/objectives", get(objectives_handler))
        .route(
            "/api/recommend",
            get(recommend_get_handler).post(recommend_post_handler),
        )
        .fallback(not_found_handler)
        .with_state(catalog)
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn questions_handler(State(catalog): State<Arc<Catalog>>) -> Response {
    json_response(StatusCode::OK, build_questions_response(&catalog))
}

async fn objectives_handler(
    State(catalog): State<Arc<Catalog>>,
    query: Result<Query<ObjectivesQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match query.profile {
        Some(profile) => json_response(StatusCode::OK, objective_views(&catalog, profile.into())),
        None => error_response(StatusCode::BAD_REQUEST, "profile is required"),
    }
}

async fn quiz_get_handler(
    State(catalog): State<Arc<Catalog>>,
    payload: Result<Query<QuizPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => quiz_handler_impl(&catalog, payload),
        Err(rejection) => rejection_response(rejection.body_text()),
    }
}

async fn quiz_post_handler(
    State(catalog): State<Arc<Catalog>>,
    payload: Result<Json<QuizPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => quiz_handler_impl(&catalog, payload),
        Err(rejection) => rejection_response(rejection.body_text()),
    }
}

fn quiz_handler_impl(catalog: &Catalog, payload: QuizPayload) -> Response {
    let result = answers_from_field(payload.answers)
        .and_then(|answers| build_quiz_response(catalog, &answers));
    match result {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn recommend_get_handler(
    State(catalog): State<Arc<Catalog>>,
    payload: Result<Query<RecommendPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => recommend_handler_impl(&catalog, payload),
        Err(rejection) => rejection_response(rejection.body_text()),
    }
}

async fn recommend_post_handler(
    State(catalog): State<Arc<Catalog>>,
    payload: Result<Json<RecommendPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => recommend_handler_impl(&catalog, payload),
        Err(rejection) => rejection_response(rejection.body_text()),
    }
}

fn recommend_handler_impl(catalog: &Catalog, payload: RecommendPayload) -> Response {
    let result = answers_from_field(payload.answers).and_then(|answers| {
        build_report(
            catalog,
            &answers,
            payload.age,
            payload.objective.as_deref(),
        )
    });
    match result {
        Ok(report) => json_response(StatusCode::OK, report),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

/// Extractor failures (bad query strings, malformed or mistyped JSON bodies)
/// are reported through the same JSON error shape as engine errors.
fn rejection_response(body_text: String) -> Response {
    debug!(error = %body_text, "request rejected by extractor");
    error_response(StatusCode::BAD_REQUEST, &body_text)
}

fn answers_from_field(field: Option<AnswersField>) -> Result<Vec<i32>, String> {
    match field {
        None => Ok(Vec::new()),
        Some(AnswersField::Scores(scores)) => Ok(scores),
        Some(AnswersField::Text(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i32>()
                    .map_err(|_| format!("answers must be comma-separated integers, got '{part}'"))
            })
            .collect(),
    }
}

fn objective_views(catalog: &Catalog, tier: ProfileTier) -> Vec<ObjectiveView> {
    catalog
        .portfolios()
        .available_objectives(tier)
        .into_iter()
        .map(|objective| ObjectiveView {
            key: objective,
            label: objective.label(),
        })
        .collect()
}

fn build_questions_response(catalog: &Catalog) -> QuestionsResponse<'_> {
    let bank = catalog.questions();
    QuestionsResponse {
        base: bank.base_questions(),
        follow_ups: FollowUpsResponse {
            conservative: bank.follow_up_set(ProfileTier::Conservative),
            moderate: bank.follow_up_set(ProfileTier::Moderate),
            aggressive: bank.follow_up_set(ProfileTier::Aggressive),
        },
    }
}

fn build_quiz_response<'a>(
    catalog: &'a Catalog,
    answers: &[i32],
) -> Result<QuizResponse<'a>, String> {
    let session = Session::replay(catalog.questions(), answers).map_err(|e| e.to_string())?;
    let (current, total) = session.progress();
    let profile = session.profile().ok().map(|tier| ProfileSummary {
        tier,
        label: tier.label(),
        description: tier.description(),
        objectives: objective_views(catalog, tier),
    });
    let current_question = session.current_question().map(|question| QuestionView {
        index: session.answered_count(),
        prompt: question.display_prompt(),
        options: &question.options,
    });

    Ok(QuizResponse {
        answers: session.scores().to_vec(),
        progress: ProgressResponse { current, total },
        complete: session.is_complete(),
        follow_up: session.follow_up(),
        current_question,
        total_score: session.total_score(),
        profile,
    })
}

fn build_report<'a>(
    catalog: &'a Catalog,
    answers: &[i32],
    age: Option<i32>,
    objective: Option<&str>,
) -> Result<ProfileReport<'a>, String> {
    let age = age.ok_or_else(|| "age is required".to_string())?;
    let session = Session::replay(catalog.questions(), answers).map_err(|e| e.to_string())?;
    let tier = session.profile().map_err(|e| e.to_string())?;

    let objective_key = match objective {
        Some(key) => key.to_string(),
        None => catalog
            .portfolios()
            .available_objectives(tier)
            .first()
            .map(|objective| objective.key().to_string())
            .ok_or_else(|| format!("no objectives registered for {}", tier.key()))?,
    };

    catalog
        .portfolios()
        .report(tier, session.total_score(), &objective_key, age)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderMap, Request};
    use std::fs;
    use std::path::Path;
    use tower::ServiceExt;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("built-in catalog must be valid")
    }

    fn assert_golden_snapshot(path: &str, actual: &str) {
        let update = matches!(
            std::env::var("UPDATE_GOLDEN").as_deref(),
            Ok("1") | Ok("true") | Ok("TRUE")
        );
        let snapshot_path = Path::new(path);

        if update {
            if let Some(parent) = snapshot_path.parent() {
                fs::create_dir_all(parent).expect("failed to create snapshot directory");
            }
            fs::write(snapshot_path, actual).expect("failed to write golden snapshot");
            return;
        }

        let expected = fs::read_to_string(snapshot_path).unwrap_or_else(|_| {
            panic!("missing golden snapshot at {path}; run with UPDATE_GOLDEN=1 to generate")
        });
        assert_eq!(
            actual, expected,
            "snapshot mismatch for {path}; run with UPDATE_GOLDEN=1 to refresh if expected"
        );
    }

    #[test]
    fn answers_parse_from_query_text_and_json_arrays() {
        let payload: QuizPayload =
            serde_json::from_str(r#"{"answers":[1,3,5]}"#).expect("valid JSON");
        assert_eq!(answers_from_field(payload.answers), Ok(vec![1, 3, 5]));

        let payload: QuizPayload =
            serde_json::from_str(r#"{"answers":"5, 5,3"}"#).expect("valid JSON");
        assert_eq!(answers_from_field(payload.answers), Ok(vec![5, 5, 3]));

        let payload: QuizPayload = serde_json::from_str("{}").expect("valid JSON");
        assert_eq!(answers_from_field(payload.answers), Ok(Vec::new()));

        let err = answers_from_field(Some(AnswersField::Text("1,x".to_string())))
            .expect_err("non-numeric answer");
        assert!(err.contains("'x'"));
    }

    #[test]
    fn profile_query_accepts_catalog_names() {
        let query: ObjectivesQuery =
            serde_json::from_str(r#"{"profile":"AGRESSIVO"}"#).expect("valid JSON");
        assert_eq!(query.profile.map(ProfileTier::from), Some(ProfileTier::Aggressive));
        let query: ObjectivesQuery =
            serde_json::from_str(r#"{"profile":"moderate"}"#).expect("valid JSON");
        assert_eq!(query.profile.map(ProfileTier::from), Some(ProfileTier::Moderate));
        let query: ObjectivesQuery = serde_json::from_str("{}").expect("valid JSON");
        assert!(query.profile.is_none());
    }

    #[test]
    fn quiz_response_extends_progress_after_branch_point() {
        let catalog = catalog();
        let response = build_quiz_response(&catalog, &[3]).expect("valid answers");
        assert_eq!(response.progress.current, 2);
        assert_eq!(response.progress.total, 2);
        assert!(response.follow_up.is_none());

        let response = build_quiz_response(&catalog, &[3, 3]).expect("valid answers");
        assert_eq!(response.progress.current, 3);
        assert_eq!(response.progress.total, 4);
        assert_eq!(response.follow_up, Some(ProfileTier::Moderate));
        let question = response.current_question.expect("follow-up question");
        assert_eq!(question.index, 2);
        assert_eq!(question.prompt, "Onde está seu maior volume de investimento?");
        assert!(response.profile.is_none());
    }

    #[test]
    fn quiz_response_lists_objectives_once_complete() {
        let catalog = catalog();
        let response = build_quiz_response(&catalog, &[5, 5, 5, 5]).expect("valid answers");
        assert!(response.complete);
        assert!(response.current_question.is_none());
        assert_eq!(response.total_score, 20);

        let profile = response.profile.expect("profile once complete");
        assert_eq!(profile.tier, ProfileTier::Aggressive);
        let keys: Vec<_> = profile.objectives.iter().map(|view| view.key.key()).collect();
        assert_eq!(keys, ["objetivo_crescimento_maximo", "objetivo_especulacao"]);

        let response = build_quiz_response(&catalog, &[5, 5, 5, 5]).expect("valid answers");
        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"followUp\":\"aggressive\""));
        assert!(json.contains("\"currentQuestion\":null"));
        assert!(json.contains("\"totalScore\":20"));
    }

    #[test]
    fn quiz_rejects_unanswered_sentinel() {
        let catalog = catalog();
        let err = build_quiz_response(&catalog, &[3, 0]).expect_err("zero is unanswered");
        assert!(err.contains("no answer selected"));
    }

    #[test]
    fn quiz_rejects_scores_that_overflow_the_total() {
        let catalog = catalog();
        let err = build_quiz_response(&catalog, &[i32::MAX, 1]).expect_err("total overflows");
        assert!(err.contains("overflow"));

        let err = build_report(&catalog, &[i32::MAX, 1, 1, 1], Some(30), None)
            .expect_err("total overflows");
        assert!(err.contains("overflow"));
    }

    #[test]
    fn report_defaults_to_first_objective() {
        let catalog = catalog();
        let report = build_report(&catalog, &[1, 1, 1, 1], Some(25), None).expect("complete");
        assert_eq!(report.objective, Objective::MonthlyIncome);
        assert_eq!(report.age_bracket.as_str(), "20-30");
    }

    #[test]
    fn report_rejects_incomplete_answers_and_missing_age() {
        let catalog = catalog();
        let err = build_report(&catalog, &[1, 1, 1], Some(40), None).expect_err("incomplete");
        assert!(err.contains("3 of 4"));

        let err = build_report(&catalog, &[1, 1, 1, 1], None, None).expect_err("no age");
        assert_eq!(err, "age is required");
    }

    #[test]
    fn report_rejects_objective_from_other_profile() {
        let catalog = catalog();
        let err = build_report(
            &catalog,
            &[5, 5, 5, 5],
            Some(30),
            Some("objetivo_seguranca"),
        )
        .expect_err("safety is conservative-only");
        assert!(err.contains("AGRESSIVO"));
    }

    #[test]
    fn questions_response_exposes_every_set() {
        let catalog = catalog();
        let json = serde_json::to_string(&build_questions_response(&catalog))
            .expect("response should serialize");
        assert!(json.contains("\"followUps\""));
        assert!(json.contains("\"conservative\""));
        assert!(json.contains("A quanto tempo você investe no mercado de ações?"));
    }

    #[test]
    fn golden_snapshot_conservative_safety_report_json() {
        let catalog = catalog();
        let report = build_report(
            &catalog,
            &[1, 1, 1, 1],
            Some(70),
            Some("objetivo_seguranca"),
        )
        .expect("complete");
        let json = format!(
            "{}\n",
            serde_json::to_string(&report).expect("report should serialize")
        );

        assert_golden_snapshot("tests/golden/conservative_safety_report.json", &json);
    }

    async fn send(request: Request<Body>) -> (StatusCode, HeaderMap, serde_json::Value) {
        let response = router(Arc::new(catalog()))
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body = serde_json::from_slice(&bytes).expect("body should be JSON");
        (status, headers, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }

    fn post_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request")
    }

    fn assert_json_no_store(headers: &HeaderMap) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        assert_eq!(content_type, Some("application/json"));
        let cache_control = headers
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok());
        assert_eq!(cache_control, Some("no-store"));
    }

    fn error_text(body: &serde_json::Value) -> &str {
        body["error"].as_str().expect("error field should be a string")
    }

    #[tokio::test]
    async fn objectives_route_lists_keys_for_profile() {
        let request = get_request("/api/objectives?profile=CONSERVADOR");
        let (status, headers, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_json_no_store(&headers);
        assert_eq!(body[0]["key"], "objetivo_renda_mensal");
        assert_eq!(body[1]["label"], "Objetivo Seguranca");
    }

    #[tokio::test]
    async fn objectives_route_rejects_unknown_or_missing_profile_as_json() {
        let (status, headers, body) = send(get_request("/api/objectives?profile=bogus")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_no_store(&headers);
        assert!(error_text(&body).contains("bogus"));

        let (status, headers, body) = send(get_request("/api/objectives")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_no_store(&headers);
        assert_eq!(error_text(&body), "profile is required");
    }

    #[tokio::test]
    async fn malformed_json_bodies_get_json_errors() {
        for uri in ["/api/quiz", "/api/recommend"] {
            let (status, headers, body) = send(post_request(uri, r#"{"answers": [1,"#)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_json_no_store(&headers);
            assert!(!error_text(&body).is_empty());
        }

        let (status, headers, _) = send(post_request("/api/recommend", r#"{"age":"old"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_no_store(&headers);
    }

    #[tokio::test]
    async fn malformed_query_strings_get_json_errors() {
        let request = get_request("/api/recommend?answers=1,1,1,1&age=x");
        let (status, headers, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_no_store(&headers);
        assert!(!error_text(&body).is_empty());
    }

    #[tokio::test]
    async fn overflowing_answers_are_a_bad_request() {
        let uri = format!("/api/quiz?answers={},1", i32::MAX);
        let (status, headers, body) = send(get_request(&uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_no_store(&headers);
        assert!(error_text(&body).contains("overflow"));
    }

    #[tokio::test]
    async fn quiz_and_recommend_routes_accept_post_bodies() {
        let (status, headers, body) = send(post_request("/api/quiz", r#"{"answers":[3,3]}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_json_no_store(&headers);
        assert_eq!(body["followUp"], "moderate");

        let (status, _, body) = send(post_request(
            "/api/recommend",
            r#"{"answers":"1,1,1,1","age":70,"objective":"objetivo_seguranca"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["objective"], "objetivo_seguranca");
    }

    #[tokio::test]
    async fn unknown_routes_fall_back_to_json_not_found() {
        let (status, headers, body) = send(get_request("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_json_no_store(&headers);
        assert_eq!(error_text(&body), "Not found");
    }
}
