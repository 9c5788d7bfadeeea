//! Wiki team page to rendered report, against in-process fake servers

use std::collections::HashMap;

use axum::extract::Query;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use thesis_attribution::{
    clients, fetch_team, render_report, AttributionConfig, AttributionError, Resolver,
    RosterParser,
};

const TEAM_PAGE: &str = "== BS, MS Students ==
{{Team|
{{TeamMember | jsmith| Jane Smith   |student}}
{{TeamMember|hsaul|Heikki Saul|student (computer engineering)}}
}}

== Staff ==
{{Team|
{{TeamMember|jdoe|John Doe|professor}}
}}
";

async fn wiki_api(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    assert_eq!(params.get("action").map(String::as_str), Some("parse"));
    assert_eq!(params.get("prop").map(String::as_str), Some("wikitext"));

    if params.get("page").map(String::as_str) == Some("Team") {
        Json(json!({"parse": {"title": "Team", "pageid": 7, "wikitext": TEAM_PAGE}}))
    } else {
        Json(json!({"error": {"code": "missingtitle", "info": "The page you specified doesn't exist."}}))
    }
}

async fn find_by_metadata(Json(query): Json<Value>) -> Json<Value> {
    match query["value"].as_str() {
        Some("Smith, Jane") => Json(json!([
            {
                "uuid": "a1",
                "name": "Conference paper",
                "metadata": [
                    {"key": "dc.type", "value": "Article"},
                    {"key": "dc.contributor.advisor", "value": "Doe, John"}
                ]
            },
            {
                "uuid": "t1",
                "name": "Soft actuators",
                "metadata": [
                    {"key": "dc.type", "value": "Thesis"},
                    {"key": "dc.contributor.advisor", "value": "Doe, John (supervisor)"},
                    {"key": "dc.identifier.uri", "value": "http://hdl.handle.net/10062/1"},
                    {"key": "dc.date.issued", "value": "2018-05-30"}
                ]
            }
        ])),
        Some("Saul, Heikki") => Json(json!([
            {
                "uuid": "t2",
                "name": "Elsewhere",
                "metadata": [
                    {"key": "dc.type", "value": "Thesis"},
                    {"key": "dc.contributor.advisor", "value": "Roe, Richard"}
                ]
            }
        ])),
        _ => Json(json!([])),
    }
}

async fn spawn_servers() -> String {
    let router = Router::new()
        .route("/wiki/api.php", get(wiki_api))
        .route("/rest/items/find-by-metadata-field", post(find_by_metadata));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn config_for(base: &str, page: &str) -> AttributionConfig {
    let toml = format!(
        r#"
        [repository]
        base_url = "{base}"
        timeout_secs = 5

        [wiki]
        api_url = "{base}/wiki/api.php"
        page = "{page}"
        subject_sections = ["BS, MS Students"]
        advisor_sections = ["Staff"]
        "#
    );
    AttributionConfig::from_toml_str(&toml).unwrap()
}

#[tokio::test]
async fn test_team_page_to_report() {
    let base = spawn_servers().await;
    let config = config_for(&base, "Team");
    let (repository, wiki) = clients(&config).unwrap();

    let team = fetch_team(&wiki, &RosterParser::new(), &config.wiki)
        .await
        .unwrap();
    assert_eq!(team.subjects.len(), 2);
    assert_eq!(team.advisors.len(), 1);

    let resolver = Resolver::with_fields(repository, config.fields.clone());
    let results = resolver
        .resolve_all(&team.subjects, &team.advisors)
        .await
        .unwrap();

    assert!(results[0].attribution.is_matched());
    assert!(!results[1].attribution.is_matched());
    assert_eq!(
        render_report(&results),
        "* Jane Smith: [http://hdl.handle.net/10062/1 Soft actuators] (2018)\n"
    );
}

#[tokio::test]
async fn test_missing_page_is_not_found() {
    let base = spawn_servers().await;
    let config = config_for(&base, "No such page");
    let (_, wiki) = clients(&config).unwrap();

    let err = fetch_team(&wiki, &RosterParser::new(), &config.wiki)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_missing_section_is_not_found() {
    let base = spawn_servers().await;
    let mut config = config_for(&base, "Team");
    config.wiki.subject_sections.push("Alumni".to_string());
    let (_, wiki) = clients(&config).unwrap();

    let err = fetch_team(&wiki, &RosterParser::new(), &config.wiki)
        .await
        .unwrap_err();
    assert!(matches!(err, AttributionError::NotFound(ref what) if what.contains("Alumni")));
}

#[tokio::test]
async fn test_unreachable_wiki_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = config_for(&format!("http://{}", addr), "Team");
    let (_, wiki) = clients(&config).unwrap();

    let err = fetch_team(&wiki, &RosterParser::new(), &config.wiki)
        .await
        .unwrap_err();
    assert!(matches!(err, AttributionError::Transport(_)));
}
