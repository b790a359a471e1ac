//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the pewnapi binary.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::Order;

/// Pewn API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "pewnapi", about = "Pewn API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log requests to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Pewn host to talk to (defaults to http://pewn.de/).
    #[arg(long, global = true, env = "PEWN_HOST")]
    pub host: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID (users also by name).
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The numeric ID, or a user name.
        id: String,
    },

    /// List a collection, scoped by project or user where required.
    List {
        /// The collection to list.
        collection: Collection,

        /// Project ID (ratings, images, hashtags, releases, recommendations).
        #[arg(long)]
        project: Option<u64>,

        /// User ID (projects, ratings, teams, blogs, news, designs).
        #[arg(long)]
        user: Option<u64>,

        /// Sort order when listing all projects.
        #[arg(long, value_enum, default_value = "creation")]
        order: SortOrder,
    },

    /// Show the latest community activities.
    Activities {
        /// Number of entries.
        #[arg(long, default_value_t = 10)]
        size: u32,
    },

    /// Show the API status.
    Status,

    /// Download a project image and save it.
    Image {
        /// The project ID.
        project: u64,

        /// The image file name.
        file_name: String,

        /// Target width; ignored unless height is given too.
        #[arg(long, allow_negative_numbers = true)]
        width: Option<i64>,

        /// Target height; ignored unless width is given too.
        #[arg(long, allow_negative_numbers = true)]
        height: Option<i64>,

        /// Where to write the decoded image (format taken from the extension).
        #[arg(long, short)]
        output: PathBuf,
    },
}

/// Entity types that can be fetched individually.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A project (game).
    #[value(alias = "game")]
    Project,
    /// A user, by ID or name.
    User,
    /// A team.
    Team,
}

/// Collections that can be listed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    /// Projects of a user, or all projects.
    #[value(alias = "games")]
    Projects,
    /// Ratings of a project or by a user.
    Ratings,
    /// Image metadata of a project.
    Images,
    /// Hashtags of a project.
    Hashtags,
    /// Releases of a project.
    Releases,
    /// Recommendations for a project.
    Recommendations,
    /// Teams of a user.
    Teams,
    /// Blog posts of a user.
    Blogs,
    /// News of a user.
    News,
    /// Designs of a user.
    Designs,
    /// Projects in the "top" box.
    Featured,
    /// Projects in the "most viewed" box.
    MostViewed,
    /// Projects in the "recently updated" box.
    Updated,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.to_possible_value().ok_or(fmt::Error)?;
        f.write_str(value.get_name())
    }
}

/// Sort order accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first.
    Creation,
    /// Most recently updated first.
    Update,
    /// Best rated first.
    Rating,
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Creation => Order::CreationDate,
            SortOrder::Update => Order::UpdateDate,
            SortOrder::Rating => Order::Rating,
        }
    }
}
