use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::planet::{get_planet, get_planets};

use super::*;

/// Expect planets with nullable population and size
#[tokio::test]
async fn lists_planets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    test.galaxy()
        .insert_planet("Tatooine", Some(200000), Some(10465))
        .await?;
    test.galaxy().insert_planet("Hoth", None, None).await?;

    let resp = get_planets(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "This is the list of planets");
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["name"], "Tatooine");
    assert_eq!(results[0]["population"], 200000);
    assert_eq!(results[0]["size"], 10465);
    assert!(results[1]["population"].is_null());
    assert!(results[1]["size"].is_null());

    Ok(())
}

/// Expect the requested planet under `result`
#[tokio::test]
async fn gets_planet_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = get_planet(State(test.to_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    assert_eq!(body["msg"], "This is one planet");
    assert_eq!(body["result"]["name"], "Tatooine");

    Ok(())
}

/// Expect 404 for a missing planet
#[tokio::test]
async fn not_found_for_missing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = get_planet(State(test.to_app_state()), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
