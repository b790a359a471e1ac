//! Basic example demonstrating the Pewn API client.
//!
//! Run with:
//! ```
//! cargo run --example basic
//! ```
//!
//! Set `PEWN_HOST` to talk to another server, and the `PEWN_CLIENT_*`
//! variables to also read the authenticated user's private data.

use pewnapi::{
    fetch_image, Activity, Get, ImageSize, Order, PewnClient, Platform, Project, UserData,
};

#[tokio::main]
async fn main() -> pewnapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Pewn client...");
    let client = PewnClient::from_env()?;
    println!("Connected to: {}", client.host());

    // Best rated projects
    println!("\n--- Top 5 Projects by Rating ---");
    let projects = Project::all(&client, Order::Rating).await?;
    println!("Found {} projects", projects.len());
    for project in projects.iter().take(5) {
        println!("  - {} (#{}, rated {})", project.name, project.id, project.rating);
    }

    // A well-known project and its relations
    println!("\n--- Project Details ---");
    let project = Project::get(&client, 8568).await?;
    println!("Project: {}", project.name);
    if let Some(ref author) = project.author {
        println!("  Author: {} (level {})", author.name, author.level);
    }
    if let Some(created) = project.creation_date {
        println!("  Created: {created}");
    }
    for platform in Platform::ALL {
        if let Some(url) = project.download_url(platform) {
            println!("  {platform}: {url}");
        }
    }

    let ratings = project.ratings(&client).await?;
    println!("\n{} ratings", ratings.len());
    for rating in ratings.iter().take(3) {
        let by = rating.author.as_ref().map_or("?", |a| a.name.as_str());
        println!("  {} by {}: {}", rating.rating, by, rating.text.as_deref().unwrap_or(""));
    }

    // Download the first screenshot as a thumbnail
    let images = project.fetch_images(&client).await?;
    if let Some(first) = images.first() {
        match fetch_image(&client, project.id, &first.file_name, ImageSize::new(160, 90)).await? {
            Some(img) => println!("\nThumbnail {}: {}x{}", first.file_name, img.width(), img.height()),
            None => println!("\n{} is not a decodable image", first.file_name),
        }
    }

    // Community feed
    println!("\n--- Latest Activities ---");
    for activity in Activity::latest(&client, 5).await? {
        let by = activity.author().map_or("?", |a| a.name.as_str());
        println!("  {} by {}", activity.kind, by);
    }

    // Private data needs OAuth credentials
    if client.credentials().is_some() {
        let me = UserData::get(&client).await?;
        println!("\nLogged in as {} <{}>", me.username, me.email.unwrap_or_default());
    }

    Ok(())
}
