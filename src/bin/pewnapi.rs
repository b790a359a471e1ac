//! Pewn API CLI binary.
//!
//! A command-line interface for browsing the Pewn API.

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use pewnapi::cli::{Cli, Collection, Command, Entity};
use pewnapi::{
    fetch_image, Activity, BlogPost, Design, FeaturedProject, Get, Hashtag, Image, ImageSize,
    News, PewnClient, PewnError, PrettyPrint, Project, ProjectScoped, Rating, Recommendation,
    Release, Status, Team, User, UserScoped,
};
use serde::Serialize;
use tabled::{Table, Tabled};
use tracing::Level;

type CliResult = Result<(), Box<dyn Error>>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let client = match build_client(cli.host.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Check PEWN_HOST and the PEWN_CLIENT_* environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(host: Option<&str>) -> pewnapi::Result<PewnClient> {
    let client = PewnClient::from_env()?;
    match host {
        Some(h) if h != client.host().as_str() => {
            let rebuilt = PewnClient::new(h)?;
            Ok(match client.credentials() {
                Some(c) => rebuilt.with_credentials(c.clone()),
                None => rebuilt,
            })
        }
        _ => Ok(client),
    }
}

async fn run(client: &PewnClient, cli: Cli) -> CliResult {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, &id, cli.json).await,
        Command::List {
            collection,
            project,
            user,
            order,
        } => {
            let scope = Scope { project, user };
            handle_list(client, collection, scope, order.into(), cli.json).await
        }
        Command::Activities { size } => {
            let activities = Activity::latest(client, size).await?;
            output_list(&activities, cli.json, |a| ActivityRow::from(a))
        }
        Command::Status => {
            let status = Status::get(client).await?;
            output_single(&status, cli.json)
        }
        Command::Image {
            project,
            file_name,
            width,
            height,
            output,
        } => {
            let size = match (width, height) {
                (Some(w), Some(h)) => ImageSize::new(w, h),
                _ => None,
            };
            match fetch_image(client, project, &file_name, size).await? {
                Some(img) => {
                    img.save(&output)?;
                    println!(
                        "Saved {}x{} image to {}",
                        img.width(),
                        img.height(),
                        output.display()
                    );
                    Ok(())
                }
                None => Err(format!("'{file_name}' is not a decodable image").into()),
            }
        }
    }
}

async fn handle_get(client: &PewnClient, entity: Entity, id: &str, json: bool) -> CliResult {
    match entity {
        Entity::Project => {
            let project = Project::get(client, parse_id(id)?).await?;
            output_single(&project, json)
        }
        Entity::User => {
            let user = match id.parse::<u64>() {
                Ok(numeric) => User::get(client, numeric).await?,
                Err(_) => User::get_by_name(client, id).await?,
            };
            output_single(&user, json)
        }
        Entity::Team => {
            let team = Team::get(client, parse_id(id)?).await?;
            output_single(&team, json)
        }
    }
}

/// Optional scoping arguments of `list`.
struct Scope {
    project: Option<u64>,
    user: Option<u64>,
}

impl Scope {
    fn project(&self, collection: Collection) -> Result<u64, PewnError> {
        self.project.ok_or_else(|| {
            PewnError::ConfigMissing(format!("--project is required for listing {collection}"))
        })
    }

    fn user(&self, collection: Collection) -> Result<u64, PewnError> {
        self.user.ok_or_else(|| {
            PewnError::ConfigMissing(format!("--user is required for listing {collection}"))
        })
    }
}

async fn handle_list(
    client: &PewnClient,
    collection: Collection,
    scope: Scope,
    order: pewnapi::Order,
    json: bool,
) -> CliResult {
    match collection {
        Collection::Projects => {
            let projects = match scope.user {
                Some(user) => Project::for_user(client, user).await?,
                None => Project::all(client, order).await?,
            };
            output_list(&projects, json, |p| ProjectRow::from(p))
        }
        Collection::Ratings => {
            let ratings = match (scope.project, scope.user) {
                (Some(project), _) => Rating::for_project(client, project).await?,
                (None, Some(user)) => Rating::for_user(client, user).await?,
                (None, None) => {
                    return Err(PewnError::ConfigMissing(
                        "--project or --user is required for listing ratings".to_string(),
                    )
                    .into())
                }
            };
            output_list(&ratings, json, |r| RatingRow::from(r))
        }
        Collection::Images => {
            let images = Image::for_project(client, scope.project(collection)?).await?;
            output_list(&images, json, |i| ImageRow::from(i))
        }
        Collection::Hashtags => {
            let hashtags = Hashtag::for_project(client, scope.project(collection)?).await?;
            output_list(&hashtags, json, |h| HashtagRow::from(h))
        }
        Collection::Releases => {
            let releases = Release::for_project(client, scope.project(collection)?).await?;
            output_list(&releases, json, |r| ReleaseRow::from(r))
        }
        Collection::Recommendations => {
            let recs = Recommendation::for_project(client, scope.project(collection)?).await?;
            output_list(&recs, json, |r| ProjectRow::from(&r.project))
        }
        Collection::Teams => {
            let teams = Team::for_user(client, scope.user(collection)?).await?;
            output_list(&teams, json, |t| TeamRow::from(t))
        }
        Collection::Blogs => {
            let posts = BlogPost::for_user(client, scope.user(collection)?).await?;
            output_list(&posts, json, |p| ContentRow::new(p.id, &p.title, p.creation_date))
        }
        Collection::News => {
            let news = News::for_user(client, scope.user(collection)?).await?;
            output_list(&news, json, |n| ContentRow::new(n.id, &n.title, n.creation_date))
        }
        Collection::Designs => {
            let designs = Design::for_user(client, scope.user(collection)?).await?;
            output_list(&designs, json, |d| ContentRow::new(d.id, &d.title, d.creation_date))
        }
        Collection::Featured => {
            let featured = FeaturedProject::top(client).await?;
            output_list(&featured, json, |f| ProjectRow::from(&f.project))
        }
        Collection::MostViewed => {
            let projects = Project::most_viewed(client).await?;
            output_list(&projects, json, |p| ProjectRow::from(p))
        }
        Collection::Updated => {
            let projects = Project::recently_updated(client).await?;
            output_list(&projects, json, |p| ProjectRow::from(p))
        }
    }
}

fn parse_id(id: &str) -> Result<u64, String> {
    id.parse()
        .map_err(|_| format!("'{id}' is not a numeric ID"))
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> CliResult {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> CliResult
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} entries", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

fn author_name(author: Option<&User>) -> String {
    author.map(|a| a.name.clone()).unwrap_or_default()
}

#[derive(Tabled)]
struct ProjectRow {
    id: u64,
    name: String,
    author: String,
    rating: i32,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            author: author_name(p.author.as_ref()),
            rating: p.rating,
        }
    }
}

#[derive(Tabled)]
struct RatingRow {
    id: u64,
    rating: i32,
    author: String,
    version: String,
}

impl From<&Rating> for RatingRow {
    fn from(r: &Rating) -> Self {
        Self {
            id: r.id,
            rating: r.rating,
            author: author_name(r.author.as_ref()),
            version: r.rated_version.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct ImageRow {
    id: u64,
    #[tabled(rename = "file")]
    file_name: String,
    #[tabled(rename = "bytes")]
    file_size: u64,
}

impl From<&Image> for ImageRow {
    fn from(i: &Image) -> Self {
        Self {
            id: i.id,
            file_name: i.file_name.clone(),
            file_size: i.file_size,
        }
    }
}

#[derive(Tabled)]
struct HashtagRow {
    id: u64,
    name: String,
    #[tabled(rename = "used in")]
    usage_count: u32,
}

impl From<&Hashtag> for HashtagRow {
    fn from(h: &Hashtag) -> Self {
        Self {
            id: h.id,
            name: h.canonical_name().to_string(),
            usage_count: h.usage_count,
        }
    }
}

#[derive(Tabled)]
struct ReleaseRow {
    id: u64,
    title: String,
    downloads: u64,
}

impl From<&Release> for ReleaseRow {
    fn from(r: &Release) -> Self {
        Self {
            id: r.id,
            title: r.title.clone(),
            downloads: r.total_downloads(),
        }
    }
}

#[derive(Tabled)]
struct TeamRow {
    id: u64,
    name: String,
    members: usize,
}

impl From<&Team> for TeamRow {
    fn from(t: &Team) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            members: t.member_ids.len(),
        }
    }
}

#[derive(Tabled)]
struct ContentRow {
    id: u64,
    title: String,
    created: String,
}

impl ContentRow {
    fn new(id: u64, title: &str, created: Option<pewnapi::Timestamp>) -> Self {
        Self {
            id,
            title: title.to_string(),
            created: created.map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "type")]
    kind: String,
    author: String,
}

impl From<&Activity> for ActivityRow {
    fn from(a: &Activity) -> Self {
        Self {
            kind: a.kind.clone(),
            author: author_name(a.author()),
        }
    }
}
