//! Host document and mount anchors.
//!
//! The host document is the page the application is attached to. It carries
//! one or more anchor elements addressed by `#id`; mounting replaces an
//! anchor's content with the rendered tree and records the owner so a second
//! application cannot take the same anchor.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use uuid::Uuid;

use crate::errors::{ShellError, ShellResult};

/// An anchor element of the host document.
#[derive(Debug, Clone)]
pub struct Element {
    id: String,
    content: String,
    owner: Option<Uuid>,
}

impl Element {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rendered inner HTML.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Instance id of the application mounted here, if any.
    pub fn owner(&self) -> Option<Uuid> {
        self.owner
    }
}

/// The host page.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    elements: Vec<Element>,
}

impl Document {
    /// A page with a single empty anchor, as served before bootstrap.
    pub fn host(title: impl Into<String>, anchor_id: impl Into<String>) -> Self {
        Self::with_anchors(title, [anchor_id.into()])
    }

    pub fn with_anchors<I, S>(title: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            elements: ids
                .into_iter()
                .map(|id| Element {
                    id: id.into(),
                    content: String::new(),
                    owner: None,
                })
                .collect(),
        }
    }

    /// Look up an element by `#id` selector.
    pub fn select(&self, selector: &str) -> ShellResult<&Element> {
        let id = parse_selector(selector)?;
        self.elements
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ShellError::MountTargetMissing(selector.to_string()))
    }

    /// Attach an application to an anchor, replacing its content.
    pub fn mount(&mut self, selector: &str, owner: Uuid, content: String) -> ShellResult<()> {
        let element = self.select_mut(selector)?;
        if element.owner.is_some() {
            return Err(ShellError::AlreadyMounted(selector.to_string()));
        }
        element.owner = Some(owner);
        element.content = content;
        Ok(())
    }

    /// Re-render a mounted anchor. Only its owner may do so.
    pub fn update(&mut self, selector: &str, owner: Uuid, content: String) -> ShellResult<()> {
        let element = self.select_mut(selector)?;
        if element.owner != Some(owner) {
            return Err(ShellError::AlreadyMounted(selector.to_string()));
        }
        element.content = content;
        Ok(())
    }

    /// Whole page as HTML.
    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width,initial-scale=1.0";
                    title { (self.title) }
                }
                body {
                    noscript { strong { "This page needs to be served by the wallet shell." } }
                    @for element in &self.elements {
                        div id=(element.id) { (PreEscaped(&element.content)) }
                    }
                }
            }
        }
    }

    fn select_mut(&mut self, selector: &str) -> ShellResult<&mut Element> {
        let id = parse_selector(selector)?;
        self.elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ShellError::MountTargetMissing(selector.to_string()))
    }
}

fn parse_selector(selector: &str) -> ShellResult<&str> {
    match selector.strip_prefix('#') {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ShellError::InvalidSelector(selector.to_string())),
    }
}
