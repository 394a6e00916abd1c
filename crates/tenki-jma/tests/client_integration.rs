//! Integration tests for JmaClient using wiremock.
//!
//! The fixtures are trimmed copies of the real `area.json` and
//! `forecast/130000.json` documents.

use tenki_jma::{render_report, ClientSettings, JmaClient, JmaError, WeatherStyle};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AREA_FIXTURE: &str = include_str!("fixtures/area.json");
const FORECAST_FIXTURE: &str = include_str!("fixtures/forecast_130000.json");

const AREA_PATH: &str = "/bosai/common/const/area.json";
const FORECAST_PATH: &str = "/bosai/forecast/data/forecast/130000.json";

fn client_for(server: &MockServer) -> JmaClient {
    JmaClient::new(ClientSettings {
        area_url: format!("{}{}", server.uri(), AREA_PATH),
        forecast_base_url: format!("{}/bosai/forecast/data/forecast/", server.uri()),
        ..Default::default()
    })
    .unwrap()
}

async fn mount_json(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_catalog_success() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, AREA_PATH, AREA_FIXTURE).await;

    let catalog = client_for(&mock_server).fetch_catalog().await.unwrap();

    let centers: Vec<_> = catalog.centers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(centers, vec!["北海道地方", "関東甲信地方", "近畿地方"]);

    let kanto = &catalog.centers[1];
    let offices: Vec<_> = kanto.offices.iter().map(|o| (o.code.as_str(), o.name.as_str())).collect();
    assert_eq!(
        offices,
        vec![("080000", "茨城県"), ("130000", "東京都"), ("140000", "神奈川県")]
    );
    assert_eq!(catalog.office_count(), 6);
}

#[tokio::test]
async fn test_fetch_catalog_skips_unknown_office() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, AREA_PATH, AREA_FIXTURE).await;

    let catalog = client_for(&mock_server).fetch_catalog().await.unwrap();

    assert!(catalog.find_office("139999").is_none());
    assert_eq!(catalog.skipped().len(), 1);
    assert_eq!(catalog.skipped()[0].center_code, "010300");
    assert_eq!(catalog.skipped()[0].office_code, "139999");
}

#[tokio::test]
async fn test_fetch_catalog_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AREA_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch_catalog().await;

    match result {
        Err(JmaError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_forecast_renders_cards() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, FORECAST_PATH, FORECAST_FIXTURE).await;

    let report = client_for(&mock_server).fetch_forecast("130000").await.unwrap();
    assert_eq!(report.publishing_office.as_deref(), Some("気象庁"));

    let cards = render_report(&report).unwrap();
    let titles: Vec<_> = cards.iter().map(|c| c.title()).collect();
    assert_eq!(
        titles,
        vec![
            "東京地方 の予報",
            "伊豆諸島北部 の予報",
            "伊豆諸島南部 の予報",
            "小笠原諸島 の予報"
        ]
    );

    let tokyo = &cards[0];
    assert_eq!(tokyo.days.len(), 3);
    assert_eq!(tokyo.days[0].date_label(), "01/01 (今日)");
    assert_eq!(tokyo.days[1].date_label(), "01/02 (明日)");
    assert_eq!(tokyo.days[2].date_label(), "01/03 (明後日)");
    assert_eq!(tokyo.days[0].text, "晴れ 、時々 くもり");
    assert_eq!(tokyo.days[2].style, WeatherStyle::Rain);

    let izu_north = &cards[1];
    assert_eq!(izu_north.days[1].style, WeatherStyle::Thunder);
    assert_eq!(izu_north.days[2].style, WeatherStyle::Snow);

    assert_eq!(cards[2].days.len(), 2);
    assert_eq!(cards[3].days[2].style, WeatherStyle::Fallback);
}

#[tokio::test]
async fn test_fetch_forecast_text_is_stable() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, FORECAST_PATH, FORECAST_FIXTURE).await;
    let client = client_for(&mock_server);

    let mut rendered = Vec::new();
    for _ in 0..2 {
        let report = client.fetch_forecast("130000").await.unwrap();
        let cards = render_report(&report).unwrap();
        let text: Vec<_> = cards.iter().map(|c| c.to_text()).collect();
        rendered.push(text.join("\n\n"));
    }

    assert_eq!(rendered[0], rendered[1]);
    assert!(rendered[0].starts_with(
        "東京地方 の予報\n☁️ 01/01 (今日) 晴れ 、時々 くもり\n☁️ 01/02 (明日) くもり\n🌧️ 01/03 (明後日) くもり のち 雨"
    ));
}

#[tokio::test]
async fn test_fetch_forecast_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch_forecast("130000").await;

    assert!(matches!(result, Err(JmaError::Status { status: 500, .. })));
}

#[tokio::test]
async fn test_fetch_forecast_malformed_json() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, FORECAST_PATH, "[{\"timeSeries\": ").await;

    let result = client_for(&mock_server).fetch_forecast("130000").await;

    let err = result.unwrap_err();
    assert!(matches!(err, JmaError::Parse(_)));
    assert!(err.is_shape_error());
}

#[tokio::test]
async fn test_fetch_forecast_empty_array() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, FORECAST_PATH, "[]").await;

    let result = client_for(&mock_server).fetch_forecast("130000").await;

    assert!(matches!(result, Err(JmaError::EmptyResponse)));
}

#[tokio::test]
async fn test_fetch_forecast_rejects_code_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch_forecast("../area").await;

    assert!(matches!(result, Err(JmaError::InvalidOfficeCode(_))));
}
