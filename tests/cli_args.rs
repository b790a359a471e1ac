//! CLI argument parsing tests.

use clap::Parser;
use pewnapi::cli::{Cli, Collection, Command, Entity, SortOrder};
use pewnapi::Order;

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["pewnapi", "get", "project", "8568"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::Project);
            assert_eq!(id, "8568");
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_game_is_an_alias_for_project() {
    let cli = Cli::parse_from(["pewnapi", "get", "game", "8568"]);

    match cli.command {
        Command::Get { entity, .. } => assert_eq!(entity, Entity::Project),
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_get_user_by_name() {
    let cli = Cli::parse_from(["pewnapi", "get", "user", "damios"]);

    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::User);
            assert_eq!(id, "damios");
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_list_subcommand() {
    let cli = Cli::parse_from(["pewnapi", "list", "ratings", "--project", "8568"]);

    match cli.command {
        Command::List {
            collection,
            project,
            user,
            order,
        } => {
            assert_eq!(collection, Collection::Ratings);
            assert_eq!(project, Some(8568));
            assert_eq!(user, None);
            assert_eq!(order, SortOrder::Creation);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_order_maps_to_api_order() {
    let cli = Cli::parse_from(["pewnapi", "list", "projects", "--order", "rating"]);

    match cli.command {
        Command::List { order, .. } => assert_eq!(Order::from(order), Order::Rating),
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_collection_names_are_kebab_case() {
    let cli = Cli::parse_from(["pewnapi", "list", "most-viewed"]);

    match cli.command {
        Command::List { collection, .. } => {
            assert_eq!(collection, Collection::MostViewed);
            assert_eq!(collection.to_string(), "most-viewed");
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_global_flags() {
    // --json before subcommand
    let cli = Cli::parse_from(["pewnapi", "--json", "status"]);
    assert!(cli.json);

    // flags after subcommand (global)
    let cli = Cli::parse_from(["pewnapi", "status", "--json", "-v"]);
    assert!(cli.json);
    assert!(cli.verbose);

    let cli = Cli::parse_from(["pewnapi", "--host", "http://localhost:8080", "status"]);
    assert_eq!(cli.host.as_deref(), Some("http://localhost:8080"));
}

#[test]
fn test_activities_default_size() {
    let cli = Cli::parse_from(["pewnapi", "activities"]);

    match cli.command {
        Command::Activities { size } => assert_eq!(size, 10),
        _ => panic!("Expected Activities command"),
    }
}

#[test]
fn test_image_accepts_negative_dimensions() {
    let cli = Cli::parse_from([
        "pewnapi", "image", "8568", "title.png", "--width", "-1", "--height", "90", "-o",
        "out.png",
    ]);

    match cli.command {
        Command::Image {
            project,
            file_name,
            width,
            height,
            output,
        } => {
            assert_eq!(project, 8568);
            assert_eq!(file_name, "title.png");
            assert_eq!(width, Some(-1));
            assert_eq!(height, Some(90));
            assert_eq!(output.to_str(), Some("out.png"));
        }
        _ => panic!("Expected Image command"),
    }
}

#[test]
fn test_invalid_entity_rejected() {
    let result = Cli::try_parse_from(["pewnapi", "get", "revision", "1"]);
    assert!(result.is_err());
}

#[test]
fn test_image_requires_output() {
    let result = Cli::try_parse_from(["pewnapi", "image", "8568", "title.png"]);
    assert!(result.is_err());
}
