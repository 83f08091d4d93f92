use anyhow::{bail, Context, Result};
use tracing::info;

use crate::portfolio::models::Portfolio;

/// Site content, embedded into the binary at compile time.
const EMBEDDED_DATA: &str = include_str!("../../data/portfolio.json");

/// Parses and validates the embedded portfolio data.
pub fn load_embedded() -> Result<Portfolio> {
    let portfolio = parse(EMBEDDED_DATA).context("Embedded portfolio data is invalid")?;
    info!(
        "Loaded portfolio for {}: {} projects, {} awards, {} education, {} experience",
        portfolio.profile.name,
        portfolio.projects.len(),
        portfolio.awards.len(),
        portfolio.education.len(),
        portfolio.experience.len()
    );
    Ok(portfolio)
}

/// Parses portfolio JSON and checks the fields every page relies on.
pub fn parse(raw: &str) -> Result<Portfolio> {
    let portfolio: Portfolio = serde_json::from_str(raw).context("Failed to parse portfolio JSON")?;
    validate(&portfolio)?;
    Ok(portfolio)
}

fn validate(portfolio: &Portfolio) -> Result<()> {
    let profile = &portfolio.profile;
    if profile.name.trim().is_empty() {
        bail!("profile.name must not be empty");
    }
    if profile.email.trim().is_empty() {
        bail!("profile.email must not be empty");
    }
    for (i, project) in portfolio.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            bail!("projects[{i}].title must not be empty");
        }
        if project.tech.iter().any(|t| t.trim().is_empty()) {
            bail!("projects[{i}] ('{}') has a blank tech tag", project.title);
        }
    }
    Ok(())
}
