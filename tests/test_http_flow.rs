use mockito::Matcher;
use std::sync::Arc;

use recipe_box::config::ApiConfig;
use recipe_box::view::ViewEvent;
use recipe_box::{
    fetch_recipe_with_config, search_recipes_with_config, App, AppConfig, AppError, Intent,
    MemoryStore, RecordingView,
};

const SEARCH_BODY: &str = r#"{
    "count": 3,
    "recipes": [
        {"publisher": "Closet Cooking", "title": "Pizza Dip", "source_url": "http://closetcooking.com/pizza-dip", "recipe_id": "35477", "image_url": "http://img/35477.jpg", "social_rank": 99.99, "publisher_url": "http://closetcooking.com"},
        {"publisher": "101 Cookbooks", "title": "Best Pizza Dough Ever", "source_url": "http://www.101cookbooks.com/archives/001199.html", "recipe_id": "47746", "image_url": "http://img/47746.jpg", "social_rank": 100.0, "publisher_url": "http://www.101cookbooks.com"},
        {"publisher": "The Pioneer Woman", "title": "Deep Dish Fruit Pizza", "source_url": "http://thepioneerwoman.com/fruit-pizza", "recipe_id": "46956", "image_url": "http://img/46956.jpg", "social_rank": 100.0, "publisher_url": "http://thepioneerwoman.com"}
    ]
}"#;

const RECIPE_BODY: &str = r#"{"recipe": {
    "publisher": "101 Cookbooks",
    "f2f_url": "http://food2fork.com/view/47746",
    "ingredients": [
        "4 1/2 cups (20.25 ounces) unbleached high-gluten, bread, or all-purpose flour, chilled",
        "1 3/4 teaspoons salt",
        "1 teaspoon instant yeast",
        "1/4 cup (2 ounces) olive oil (optional)",
        "1 3/4 cups (14 ounces) water, ice cold (40F)",
        "Semolina flour OR cornmeal for dusting"
    ],
    "source_url": "http://www.101cookbooks.com/archives/001199.html",
    "recipe_id": "47746",
    "image_url": "http://img/47746.jpg",
    "social_rank": 100,
    "publisher_url": "http://www.101cookbooks.com",
    "title": "Best Pizza Dough Ever"
}}"#;

fn config_for(server: &mockito::Server) -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: server.url(),
            timeout: 5,
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn test_search_then_open_recipe_over_http() {
    let mut server = mockito::Server::new_async().await;
    let search_mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("q".into(), "pizza".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_BODY)
        .create_async()
        .await;
    let get_mock = server
        .mock("GET", "/api/get")
        .match_query(Matcher::UrlEncoded("rId".into(), "47746".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RECIPE_BODY)
        .create_async()
        .await;

    let mut app = App::builder()
        .config(config_for(&server))
        .store(Arc::new(MemoryStore::new()))
        .view(RecordingView::new())
        .build()
        .unwrap();

    app.dispatch(Intent::Search("pizza".to_string())).await;
    app.dispatch(Intent::Navigate("#47746".to_string())).await;

    search_mock.assert_async().await;
    get_mock.assert_async().await;
    assert_eq!(app.view().alerts().count(), 0);
    assert!(app.view().events.contains(&ViewEvent::Results {
        ids: vec!["35477".to_string(), "47746".to_string(), "46956".to_string()],
        page: 1,
    }));

    let recipe = app.state().recipe.as_ref().unwrap();
    assert_eq!(recipe.author, "101 Cookbooks");
    assert_eq!(recipe.ingredients.len(), 6);
    assert_eq!(recipe.ingredients[0].count, Some(4.5));
    assert_eq!(recipe.ingredients[0].unit, "cup");
    assert_eq!(recipe.ingredients[1].count, Some(1.75));
    assert_eq!(recipe.ingredients[1].unit, "tsp");
    assert_eq!(recipe.ingredients[1].ingredient, "salt");
    assert_eq!(recipe.ingredients[3].ingredient, "olive oil");
    assert_eq!(recipe.ingredients[5].count, None);
    assert_eq!(recipe.time, 30);
}

#[tokio::test]
async fn test_missing_recipe_over_http_alerts() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/get")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Couldn't find recipe with ID 1"}"#)
        .create_async()
        .await;

    let mut app = App::builder()
        .config(config_for(&server))
        .store(Arc::new(MemoryStore::new()))
        .view(RecordingView::new())
        .build()
        .unwrap();
    app.dispatch(Intent::Navigate("1".to_string())).await;

    let alerts: Vec<&str> = app.view().alerts().collect();
    assert_eq!(alerts, ["Error processing recipe!"]);
    assert!(app.state().recipe.is_none());
}

#[tokio::test]
async fn test_convenience_functions() {
    let mut server = mockito::Server::new_async().await;
    let _s = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(SEARCH_BODY)
        .create_async()
        .await;
    let _g = server
        .mock("GET", "/api/get")
        .match_query(Matcher::UrlEncoded("rId".into(), "47746".into()))
        .with_status(200)
        .with_body(RECIPE_BODY)
        .create_async()
        .await;
    let config = config_for(&server);

    let results = search_recipes_with_config("pizza", &config).await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[1].title, "Best Pizza Dough Ever");

    let recipe = fetch_recipe_with_config("47746", &config).await.unwrap();
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.source_servings, 4);
    assert_eq!(recipe.url, "http://www.101cookbooks.com/archives/001199.html");
}

#[tokio::test]
async fn test_malformed_search_payload_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let result = search_recipes_with_config("pizza", &config_for(&server)).await;
    assert!(matches!(result, Err(AppError::ApiError(_))));
}
