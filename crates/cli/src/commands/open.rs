// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::process::{Command, Stdio};

use crate::cli::ConnectionArgs;
use crate::config::{self, Config};
use crate::error::Result;

/// Opens the work item's web page in a browser. No remote call is made.
pub fn run(id: u32, browser: Option<String>, connection: &ConnectionArgs) -> Result<()> {
    let config = Config::load()?;
    let organization = config::require(
        connection.org.clone(),
        config.organization.as_ref(),
        "organization",
    )?;
    let project = config::require(connection.project.clone(), config.project.as_ref(), "project")?;

    let url = format!(
        "https://dev.azure.com/{}/{}/_workitems/edit/{}",
        organization, project, id
    );
    println!("OPEN {} {}", id, url);

    let browser = config::prefer(browser, config.browser.as_ref());
    launch(browser.as_deref(), &url)
}

#[cfg(windows)]
fn launch(browser: Option<&str>, url: &str) -> Result<()> {
    let mut args = vec!["/C", "start"];
    if let Some(browser) = browser {
        args.push(browser);
    }
    args.push(url);
    Command::new("cmd")
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(not(windows))]
fn launch(browser: Option<&str>, url: &str) -> Result<()> {
    let browser = browser.unwrap_or("xdg-open");
    Command::new(browser)
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
