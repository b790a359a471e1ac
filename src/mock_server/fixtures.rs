//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::NaiveDate;
use url::Url;

use crate::{
    BlogPost, Download, Hashtag, Image, Profile, Project, Rating, Recommendation, Release, Status,
    Team, Timestamp, User, UserData,
};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Build a timestamp; `None` for out-of-range components.
    pub fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Option<Timestamp> {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .map(Timestamp::from)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Create a user without profile.
    pub fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            profile: None,
            level: 1,
            xp: 0,
            registration_date: None,
        }
    }

    /// Create a user with an avatar.
    pub fn user_with_avatar(id: u64, name: &str, avatar: &str) -> User {
        let mut user = Self::user(id, name);
        user.profile = Some(Profile {
            avatar: Some(avatar.to_string()),
            ..Profile::default()
        });
        user
    }

    // =========================================================================
    // Projects
    // =========================================================================

    /// Create a minimal project.
    pub fn project(id: u64, name: &str, author: &User) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: None,
            creation_date: None,
            last_update_date: None,
            author: Some(author.clone()),
            rating: 0,
            download_windows: None,
            download_linux: None,
            download_mac_os: None,
            download_android: None,
            download_ios: None,
            download_windows_phone: None,
            download_web: None,
            version: None,
            images: vec![],
            hashtags: vec![],
            team: None,
            advertisement: None,
        }
    }

    /// Create a project with creation date, rating and a web download.
    pub fn dated_project(
        id: u64,
        name: &str,
        author: &User,
        created: Option<Timestamp>,
        rating: i32,
    ) -> Project {
        let mut project = Self::project(id, name, author);
        project.creation_date = created;
        project.last_update_date = created;
        project.rating = rating;
        project.download_web = Url::parse(&format!("http://pewn.de/play/{id}")).ok();
        project
    }

    // =========================================================================
    // Project content
    // =========================================================================

    /// Create a rating by `author`.
    pub fn rating(id: u64, value: i32, author: &User, text: &str) -> Rating {
        Rating {
            id,
            rating: value,
            date: None,
            author: Some(author.clone()),
            text: Some(text.to_string()),
            comment: None,
            rated_version: None,
            curated: false,
        }
    }

    /// Create image metadata.
    pub fn image(id: u64, file_name: &str, author: &User) -> Image {
        Image {
            id,
            file_name: file_name.to_string(),
            file_size: 0,
            upload_date: None,
            author: Some(author.clone()),
        }
    }

    /// Create a hashtag.
    pub fn hashtag(id: u64, name: &str, usage_count: u32) -> Hashtag {
        Hashtag {
            id,
            name: name.to_string(),
            usage_count,
            category: None,
            metatag: None,
        }
    }

    /// Create a release with a single download file.
    pub fn release(id: u64, project_id: u64, title: &str, downloads: u64) -> Release {
        Release {
            id,
            author: None,
            title: title.to_string(),
            description: None,
            release_date: None,
            last_update_date: None,
            project_id: Some(project_id),
            downloads: vec![Download {
                id,
                title: format!("{title}.zip"),
                creation_date: None,
                count: downloads,
            }],
        }
    }

    /// Create a recommendation pointing at `project`.
    pub fn recommendation(id: u64, sort: i32, project: &Project) -> Recommendation {
        Recommendation {
            id,
            sort,
            project: project.clone(),
        }
    }

    /// Create a blog post.
    pub fn blog_post(id: u64, title: &str, author: &User, created: Option<Timestamp>) -> BlogPost {
        BlogPost {
            id,
            text: None,
            title: title.to_string(),
            creation_date: created,
            last_update_date: None,
            author: Some(author.clone()),
            hashtags: vec![],
            project_id: None,
        }
    }

    /// Create a team.
    pub fn team(id: u64, name: &str, founder: u64, members: &[u64], projects: &[u64]) -> Team {
        Team {
            id,
            name: name.to_string(),
            description: None,
            creation_date: None,
            last_update_date: None,
            founder_id: founder,
            member_ids: members.to_vec(),
            project_ids: projects.to_vec(),
        }
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub ratings: Vec<(u64, Rating)>,
    pub images: Vec<(u64, Image)>,
    pub hashtags: Vec<(u64, Hashtag)>,
    pub releases: Vec<Release>,
    pub recommendations: Vec<(u64, Recommendation)>,
    pub teams: Vec<Team>,
    pub blog_posts: Vec<BlogPost>,
    pub status: Status,
    pub account: UserData,
}

impl DefaultScenario {
    fn new() -> Self {
        let damios = Fixtures::user_with_avatar(1, "damios", "avatar.png");
        let player = Fixtures::user(2, "player");

        let shooter = Fixtures::dated_project(
            8568,
            "Shooter Reloaded",
            &damios,
            Fixtures::timestamp(2014, 8, 9, 14, 45, 50),
            4,
        );
        let puzzler = Fixtures::dated_project(
            9001,
            "Puzzler",
            &player,
            Fixtures::timestamp(2015, 3, 1, 9, 0, 0),
            5,
        );

        let recommendations = vec![(8568, Fixtures::recommendation(1, 0, &puzzler))];
        let devlog = Fixtures::blog_post(
            30,
            "Shooter Reloaded devlog",
            &damios,
            Fixtures::timestamp(2014, 8, 10, 12, 0, 0),
        );

        Self {
            users: vec![damios.clone(), player.clone()],
            projects: vec![shooter, puzzler],
            ratings: vec![
                (8568, Fixtures::rating(1, 4, &player, "Fun shooter")),
                (9001, Fixtures::rating(2, 5, &damios, "Great puzzles")),
            ],
            images: vec![(8568, Fixtures::image(77, "title.png", &damios))],
            hashtags: vec![(8568, Fixtures::hashtag(3, "shooter", 12))],
            releases: vec![Fixtures::release(10, 8568, "v1.0", 42)],
            recommendations,
            teams: vec![Fixtures::team(5, "damios games", 1, &[1, 2], &[8568])],
            blog_posts: vec![devlog],
            status: Status {
                status: "ok".to_string(),
                last_updated: Fixtures::timestamp(2016, 1, 1, 0, 0, 0),
            },
            account: UserData {
                id: 1,
                username: "damios".to_string(),
                email: Some("damios@example.com".to_string()),
            },
        }
    }
}
