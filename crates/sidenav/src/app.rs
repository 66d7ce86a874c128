use std::cell::Cell;
use std::rc::Rc;

use html::Node;

use crate::config::NavConfig;
use crate::error::InitError;
use crate::fetch::Fetcher;
use crate::highlight::{HighlightReport, highlight};
use crate::page::Page;
use crate::render::render_into;
use crate::tree::parse;
use crate::wiring::{toggle_nav_state, wire};

/// The side-nav component. Built once by the page entry point and shared
/// (`Rc`) with the listeners it registers.
pub struct SideNav {
    config: NavConfig,
    fetcher: Box<dyn Fetcher>,
    initialized: Cell<bool>,
}

impl SideNav {
    pub fn new(config: NavConfig, fetcher: impl Fetcher + 'static) -> Rc<Self> {
        Rc::new(Self {
            config,
            fetcher: Box::new(fetcher),
            initialized: Cell::new(false),
        })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Runs fetch, parse, render, wire and the first highlight, in that
    /// order, once per component. The first failing step stops the chain;
    /// its error is logged and returned, and nothing is retried.
    pub fn init(self: &Rc<Self>, page: &mut Page) -> Result<(), InitError> {
        if self.initialized.replace(true) {
            return Err(InitError::AlreadyInitialized);
        }
        let result = self.run(page);
        match &result {
            Ok(()) => log::debug!(target: "sidenav.init", "side nav ready"),
            Err(err) => log::warn!(target: "sidenav.init", "startup aborted: {err}"),
        }
        result
    }

    fn run(self: &Rc<Self>, page: &mut Page) -> Result<(), InitError> {
        let uri = net::resolve_url(Some(page.location().href()), &self.config.json_uri)?;
        log::debug!(target: "sidenav.fetch", "loading nav data from {uri}");
        let raw = self.fetcher.fetch(&uri)?;
        let tree = parse(&raw)?;
        render_into(page, &tree, &self.config)?;
        wire(self, page)?;
        let hash = page.location().hash().to_string();
        self.highlight(page.document_mut(), &hash);
        Ok(())
    }

    pub fn highlight(&self, document: &mut Node, fragment: &str) -> HighlightReport {
        highlight(document, fragment, &self.config)
    }

    pub fn toggle_nav_state(&self, document: &mut Node) -> bool {
        toggle_nav_state(document, &self.config.open_target, &self.config.open_class)
    }
}
