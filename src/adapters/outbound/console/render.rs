use crate::compatibility::domain::{CompatibilityResult, Component};
use crate::ports::outbound::{CatalogFetch, GitHubRepo, GitHubUser};
use owo_colors::OwoColorize;

/// Renders a verdict for terminal display: the rule message(s), a colored
/// verdict line, and the itemized issues when present.
pub fn verdict(result: &CompatibilityResult) -> String {
    let mut out = String::new();

    if result.message.is_empty() {
        out.push_str("No component pairs selected; nothing to check.\n");
    } else {
        out.push_str(&result.message);
        out.push('\n');
    }

    if result.is_compatible {
        out.push_str(&format!("Verdict: {}\n", "COMPATIBLE".green().bold()));
    } else {
        out.push_str(&format!("Verdict: {}\n", "INCOMPATIBLE".red().bold()));
    }

    if !result.issues.is_empty() {
        out.push_str("Problems:\n");
        for issue in &result.issues {
            out.push_str(&format!("- {}\n", issue));
        }
    }

    out
}

/// Renders the catalog as a fixed-width table, one row per component.
pub fn catalog_table(fetch: &CatalogFetch) -> String {
    let mut out = String::new();

    if fetch.fell_back() {
        out.push_str("(catalog unavailable - showing built-in reference dataset)\n\n");
    }

    out.push_str(&format!(
        "{:<4} {:<34} {:<12} {:<12} {:<9} {:<6} {:<7} {}\n",
        "ID", "NAME", "KIND", "MAKER", "SOCKET", "MEM", "CORES", "VRAM"
    ));

    for component in fetch.components() {
        out.push_str(&component_row(component));
    }

    out
}

fn component_row(c: &Component) -> String {
    let cores = if c.cores > 0 {
        format!("{}c/{}t", c.cores, c.threads)
    } else {
        String::new()
    };
    format!(
        "{:<4} {:<34} {:<12} {:<12} {:<9} {:<6} {:<7} {}\n",
        c.id,
        c.name,
        c.kind.to_string(),
        c.manufacturer,
        c.socket,
        c.memory_type,
        cores,
        c.vram
    )
}

/// Renders a GitHub account summary.
pub fn user_card(user: &GitHubUser) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", user.login.bold()));
    if let Some(name) = &user.name {
        out.push_str(&format!("Name:      {}\n", name));
    }
    if let Some(company) = &user.company {
        out.push_str(&format!("Company:   {}\n", company));
    }
    if let Some(location) = &user.location {
        out.push_str(&format!("Location:  {}\n", location));
    }
    if let Some(bio) = &user.bio {
        out.push_str(&format!("Bio:       {}\n", bio));
    }
    out.push_str(&format!(
        "Repos: {}  Followers: {}  Following: {}\n",
        user.public_repos, user.followers, user.following
    ));
    out
}

/// Renders a repository list, one repository per block.
pub fn repo_list(repos: &[GitHubRepo]) -> String {
    let mut out = String::new();
    for repo in repos {
        out.push_str(&format!(
            "{}  ⭐ {}  🍴 {}\n",
            repo.full_name.bold(),
            repo.stars,
            repo.forks
        ));
        if let Some(language) = &repo.language {
            out.push_str(&format!("  Language: {}\n", language));
        }
        if let Some(description) = &repo.description {
            out.push_str(&format!("  {}\n", description));
        }
        out.push_str(&format!("  {}\n", repo.html_url));
    }
    if repos.is_empty() {
        out.push_str("No repositories found.\n");
    }
    out
}
