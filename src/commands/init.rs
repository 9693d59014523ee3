//! Initialize a new blog

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::CONFIG_FILE;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        bail!("{:?} already exists", config_path);
    }

    let defaults = SiteConfig::default();
    let source_dir = target_dir.join(&defaults.source_dir);
    let posts_dir = source_dir.join(&defaults.posts_dir);
    fs::create_dir_all(&posts_dir)?;
    fs::create_dir_all(source_dir.join(&defaults.static_dir))?;

    let config_content = r#"# Site
title: JocoBlog
description: ''
author: John Doe
language: en

# URL
root: /

# Directory
source_dir: src
posts_dir: posts
static_dir: static
public_dir: public

# Writing
date_format: MMMM DD, YYYY
excerpt_length: 250
render_drafts: true
highlight:
  enable: true
  theme: InspiredGitHub
  line_number: false

# Layout
menu:
  - name: Home
    path: /
# copyright: John Doe

# Web app manifest
manifest:
  enable: true
  start_url: /
  background_color: '#04f'
  theme_color: '#04f'
  display: minimal-ui
"#;
    fs::write(&config_path, config_content)?;

    let hello = posts_dir.join("hello-world.md");
    if !hello.exists() {
        let today = chrono::Local::now().format("%Y-%m-%d");
        fs::write(
            &hello,
            format!(
                "---\npath: \"/hello-world\"\ntitle: \"Hello World\"\nauthor: \"John Doe\"\ndate: {}\n---\n\nWelcome! This is your first post.\n\n<!-- more -->\n\n```rust\nfn main() {{\n    println!(\"Hello, world!\");\n}}\n```\n",
                today
            ),
        )?;
    }

    tracing::debug!("Initialized blog in {:?}", target_dir);
    Ok(())
}
