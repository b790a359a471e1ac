//! E2E tests using the mock Pewn server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use pewnapi::mock_server::{
    Fixtures, MockServer, MockState, ACCESS_TOKEN, CLIENT_ID, CLIENT_SECRET, REFRESH_TOKEN,
};
use pewnapi::{
    fetch_image, Activity, Credentials, FeaturedProject, Get, ImageSize, Order, PewnClient,
    Project, ProjectScoped, Rating, Status, Team, Token, User, UserData, UserScoped,
};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await.unwrap();
    let server2 = MockServer::start().await.unwrap();

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    server.shutdown().await;

    let result = Status::get(&client).await;
    assert!(result.is_err());
}

// =============================================================================
// Project Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_shooter_reloaded_scenario() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    let project = Project::get(&client, 8568).await.unwrap();

    assert_eq!(project.name, "Shooter Reloaded");
    assert_eq!(project.author.as_ref().map(|a| a.name.as_str()), Some("damios"));
    assert_eq!(
        project.creation_date.map(|d| d.to_string()).as_deref(),
        Some("2014-08-09 14:45:50.0")
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_all_orders_return_every_project() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    for order in Order::ALL {
        let projects = Project::all(&client, order).await.unwrap();
        assert_eq!(projects.len(), 2, "order {order}");
    }

    let by_rating = Project::all(&client, Order::Rating).await.unwrap();
    assert_eq!(by_rating[0].name, "Puzzler");

    let newest = Project::latest(&client).await.unwrap();
    assert_eq!(newest.id, 9001);

    server.shutdown().await;
}

#[tokio::test]
async fn test_follow_project_relations() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    let project = Project::get(&client, 8568).await.unwrap();

    let ratings = project.ratings(&client).await.unwrap();
    assert_eq!(ratings.len(), 1);
    let rater = ratings[0].author.as_ref().map(|a| a.id);
    assert_eq!(rater, Some(2));

    let images = project.fetch_images(&client).await.unwrap();
    assert_eq!(images[0].file_name, "title.png");

    let img = images[0]
        .download(&client, project.id, ImageSize::new(120, 80))
        .await
        .unwrap()
        .expect("decodable image");
    assert_eq!((img.width(), img.height()), (120, 80));

    let releases = project.releases(&client).await.unwrap();
    assert_eq!(releases[0].total_downloads(), 42);

    let recs = project.recommendations(&client).await.unwrap();
    assert_eq!(recs[0].project.name, "Puzzler");

    server.shutdown().await;
}

#[tokio::test]
async fn test_original_size_image() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    let img = fetch_image(&client, 8568, "title.png", ImageSize::new(-1, -1))
        .await
        .unwrap()
        .expect("decodable image");
    assert_eq!((img.width(), img.height()), (64, 48));

    let err = fetch_image(&client, 8568, "missing.png", None)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_project_collection_is_not_found() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    let err = Rating::for_project(&client, 1).await.unwrap_err();
    assert!(err.is_not_found());

    server.shutdown().await;
}

#[tokio::test]
async fn test_content_boxes() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    let top = FeaturedProject::top(&client).await.unwrap();
    assert_eq!(top[0].project.name, "Puzzler");
    assert_eq!(Project::most_viewed(&client).await.unwrap().len(), 2);
    assert_eq!(Project::recently_updated(&client).await.unwrap().len(), 2);

    server.shutdown().await;
}

// =============================================================================
// User and Team Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_user_lookup_and_relations() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    let by_name = User::get_by_name(&client, "damios").await.unwrap();
    let by_id = User::get(&client, by_name.id).await.unwrap();
    assert_eq!(by_name, by_id);

    let projects = by_id.projects(&client).await.unwrap();
    assert_eq!(projects.iter().map(|p| p.id).collect::<Vec<_>>(), vec![8568]);

    let ratings = Rating::for_user(&client, by_id.id).await.unwrap();
    assert_eq!(ratings[0].text.as_deref(), Some("Great puzzles"));

    let posts = by_id.blog_posts(&client).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert!(by_id.news(&client).await.unwrap().is_empty());

    let avatar = by_id.avatar_image(&client).await.unwrap();
    assert!(avatar.is_some());

    server.shutdown().await;
}

#[tokio::test]
async fn test_team_workflow() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    let teams = Team::for_user(&client, 2).await.unwrap();
    assert_eq!(teams.len(), 1);

    let team = Team::get(&client, teams[0].id).await.unwrap();
    assert_eq!(team.founder(&client).await.unwrap().name, "damios");
    assert_eq!(team.members(&client).await.unwrap().len(), 2);
    assert_eq!(team.projects(&client).await.unwrap()[0].id, 8568);

    let err = Team::get(&client, 404).await.unwrap_err();
    assert!(err.is_not_found());

    server.shutdown().await;
}

#[tokio::test]
async fn test_activity_feed() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    let feed = Activity::latest(&client, 5).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].author().map(|a| a.name.as_str()), Some("damios"));

    server.shutdown().await;
}

// =============================================================================
// OAuth Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_authorize_then_read_private_data() {
    let server = MockServer::start().await.unwrap();
    let anonymous = PewnClient::new(server.url()).unwrap();

    let refresh = anonymous
        .authorize_first_time(CLIENT_ID, CLIENT_SECRET, "one-time-code", "http://localhost/cb")
        .await
        .unwrap();
    assert_eq!(refresh, REFRESH_TOKEN);

    let client = anonymous.with_credentials(Credentials::new(CLIENT_ID, CLIENT_SECRET, refresh));
    let token = Token::refresh(&client).await.unwrap();
    assert_eq!(token.access_token, ACCESS_TOKEN);

    let me = UserData::get(&client).await.unwrap();
    assert_eq!(me.username, "damios");

    server.shutdown().await;
}

#[tokio::test]
async fn test_wrong_client_secret_is_rejected() {
    let server = MockServer::start().await.unwrap();
    let client = PewnClient::new(server.url())
        .unwrap()
        .with_credentials(Credentials::new(CLIENT_ID, "wrong", REFRESH_TOKEN));

    let err = UserData::get(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "Pewn API error: invalid_client");

    server.shutdown().await;
}

// =============================================================================
// State Manipulation Tests
// =============================================================================

#[tokio::test]
async fn test_custom_state() {
    let author = Fixtures::user(7, "solo");
    let state = MockState::new()
        .with_user(author.clone())
        .with_project(Fixtures::project(42, "Solo Game", &author));

    let server = MockServer::with_state(state).await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    let project = Project::get(&client, 42).await.unwrap();
    assert_eq!(project.name, "Solo Game");
    assert!(Status::get(&client).await.unwrap_err().is_not_found());

    server.shutdown().await;
}

#[tokio::test]
async fn test_state_changes_are_visible() {
    let server = MockServer::start_empty().await.unwrap();
    let client = PewnClient::new(server.url()).unwrap();

    assert!(Project::get(&client, 1).await.unwrap_err().is_not_found());

    {
        let author = Fixtures::user(1, "late");
        let state = server.state();
        let mut state = state.write().await;
        state.projects.insert(1, Fixtures::project(1, "Late Game", &author));
    }

    let project = Project::get(&client, 1).await.unwrap();
    assert_eq!(project.name, "Late Game");

    server.shutdown().await;
}
