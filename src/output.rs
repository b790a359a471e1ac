//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Project, Status, Team, User};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Project {
    fn pretty_print(&self) -> String {
        let header = format!("Project #{}: {}", self.id, self.name);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        if let Some(ref author) = self.author {
            lines.push(format!("Author:         {}", author.name));
        }

        if let Some(ref team) = self.team {
            lines.push(format!("Team:           {}", team.name));
        }

        if let Some(ref version) = self.version {
            lines.push(format!("Version:        {}", version));
        }

        lines.push(format!("Rating:         {}", self.rating));

        if let Some(ref created) = self.creation_date {
            lines.push(format!("Created:        {}", created.naive().format(DATE_FORMAT)));
        }

        if let Some(ref updated) = self.last_update_date {
            lines.push(format!("Updated:        {}", updated.naive().format(DATE_FORMAT)));
        }

        if !self.hashtags.is_empty() {
            let tags: Vec<String> = self.hashtags.iter().map(|h| format!("#{}", h.name)).collect();
            lines.push(format!("Hashtags:       {}", tags.join(" ")));
        }

        for (platform, url) in self.downloads() {
            lines.push(format!("Download:       {} ({})", url, platform));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for User {
    fn pretty_print(&self) -> String {
        let header = format!("User #{}: {}", self.id, self.name);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Level:          {} ({} XP)", self.level, self.xp),
        ];

        if let Some(ref registered) = self.registration_date {
            lines.push(format!(
                "Registered:     {}",
                registered.naive().format(DATE_FORMAT)
            ));
        }

        if let Some(ref profile) = self.profile {
            if let Some(ref website) = profile.website {
                lines.push(format!("Website:        {}", website));
            }
            if let Some(ref about) = profile.about {
                lines.push(format!("About:          {}", about));
            }
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Team {
    fn pretty_print(&self) -> String {
        let header = format!("Team #{}: {}", self.id, self.name);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Founder:        user #{}", self.founder_id),
            format!("Members:        {}", self.member_ids.len()),
            format!("Projects:       {}", self.project_ids.len()),
        ];

        if let Some(ref description) = self.description {
            lines.push(format!("Description:    {}", description));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Status {
    fn pretty_print(&self) -> String {
        match self.last_updated {
            Some(ref ts) => format!(
                "Status:         {} (as of {})",
                self.status,
                ts.naive().format(DATE_FORMAT)
            ),
            None => format!("Status:         {}", self.status),
        }
    }
}
