//! Page chrome: header with brand and navigation menu, footer

use chrono::{DateTime, Datelike, Local};
use serde::Serialize;

use super::Seo;
use crate::config::SiteConfig;
use crate::content::TrustedHtml;
use crate::error::Result;
use crate::helpers::url_for;
use crate::templates::{TemplateRenderer, STYLESHEET_PATH};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock stopped at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Whether the navigation menu is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavToggle {
    Open,
    #[default]
    Closed,
}

/// User interactions that move the navigation toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The menu toggle was selected
    ToggleActivated,
    /// The brand link or a menu entry was selected
    LinkActivated,
}

impl NavToggle {
    /// State after `event`; activating any link always collapses the menu
    pub fn next(self, event: NavEvent) -> Self {
        match (self, event) {
            (NavToggle::Open, NavEvent::ToggleActivated) => NavToggle::Closed,
            (NavToggle::Closed, NavEvent::ToggleActivated) => NavToggle::Open,
            (_, NavEvent::LinkActivated) => NavToggle::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == NavToggle::Open
    }
}

#[derive(Serialize)]
struct NavData<'a> {
    open: bool,
    brand: &'a str,
    brand_href: String,
    items: Vec<NavItemData<'a>>,
}

#[derive(Serialize)]
struct NavItemData<'a> {
    name: &'a str,
    href: String,
}

#[derive(Serialize)]
struct LayoutData<'a> {
    language: &'a str,
    generator_version: &'static str,
    head: &'a str,
    stylesheet_href: String,
    nav: &'a str,
    content: &'a str,
    footer: String,
}

/// Header, navigation and footer wrapped around one page's content
///
/// Each shell owns its own toggle state; nothing outside the shell reads
/// or writes it.
pub struct LayoutShell<'a, C: Clock = SystemClock> {
    config: &'a SiteConfig,
    clock: C,
    nav: NavToggle,
}

impl<'a> LayoutShell<'a, SystemClock> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<'a, C: Clock> LayoutShell<'a, C> {
    pub fn with_clock(config: &'a SiteConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            nav: NavToggle::default(),
        }
    }

    pub fn nav_state(&self) -> NavToggle {
        self.nav
    }

    /// Apply a user interaction to the navigation toggle
    pub fn handle(&mut self, event: NavEvent) -> NavToggle {
        self.nav = self.nav.next(event);
        tracing::trace!("nav {:?} -> {:?}", event, self.nav);
        self.nav
    }

    /// Footer text, e.g. "© 2024, Joshua Cooper"
    pub fn footer_text(&self) -> String {
        format!(
            "\u{a9} {}, {}",
            self.clock.current_year(),
            self.config.attribution()
        )
    }

    /// Render the navigation menu for the current toggle state
    pub fn render_nav(&self, renderer: &TemplateRenderer) -> Result<TrustedHtml> {
        let data = NavData {
            open: self.nav.is_open(),
            brand: &self.config.title,
            brand_href: url_for(self.config, "/"),
            items: self
                .config
                .menu
                .iter()
                .map(|item| NavItemData {
                    name: &item.name,
                    href: url_for(self.config, &item.path),
                })
                .collect(),
        };

        Ok(TrustedHtml::new(
            renderer.render_data("partials/nav.html", &data)?,
        ))
    }

    /// Wrap `content` in a complete HTML document
    pub fn render(
        &self,
        renderer: &TemplateRenderer,
        seo: &Seo<'_>,
        content: &TrustedHtml,
    ) -> Result<String> {
        let head = seo.render(renderer, self.config)?;
        let nav = self.render_nav(renderer)?;

        let data = LayoutData {
            language: &self.config.language,
            generator_version: env!("CARGO_PKG_VERSION"),
            head: head.as_str(),
            stylesheet_href: url_for(self.config, STYLESHEET_PATH),
            nav: nav.as_str(),
            content: content.as_str(),
            footer: self.footer_text(),
        };

        renderer.render_data("layout.html", &data)
    }
}
