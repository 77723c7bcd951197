//! Reusable visual widgets.
//!
//! Every widget returns `maud::Markup` and carries a `wl-` class so the
//! stylesheet can target it. Views never build raw form controls themselves.

use maud::{html, Markup};

use crate::app::plugin::{Plugin, PluginSet};
use crate::errors::ShellResult;

/// Visual emphasis of a button or alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Default,
    Danger,
    Info,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Default => "default",
            Tone::Danger => "danger",
            Tone::Info => "info",
        }
    }
}

/// One labelled input of a form.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub kind: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    pub fn text(name: &'a str, label: &'a str) -> Self {
        Self {
            name,
            label,
            kind: "text",
            placeholder: "",
            value: "",
        }
    }

    pub fn password(name: &'a str, label: &'a str) -> Self {
        Self {
            kind: "password",
            ..Self::text(name, label)
        }
    }

    /// Carried with the form but not shown.
    pub fn hidden(name: &'a str, value: &'a str) -> Self {
        Self {
            kind: "hidden",
            value,
            ..Self::text(name, "")
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// The widget set views render with.
#[derive(Debug, Clone, Default)]
pub struct ComponentLibrary;

impl ComponentLibrary {
    pub fn button(&self, label: &str, tone: Tone) -> Markup {
        html! {
            button type="submit" class={ "wl-button wl-button--" (tone.class()) } { (label) }
        }
    }

    /// An anchor styled as a button.
    pub fn link_button(&self, href: &str, label: &str, tone: Tone) -> Markup {
        html! {
            a href=(href) class={ "wl-button wl-button--" (tone.class()) } { (label) }
        }
    }

    pub fn card(&self, title: &str, body: Markup) -> Markup {
        html! {
            section class="wl-card" {
                header class="wl-card__header" { h2 { (title) } }
                div class="wl-card__body" { (body) }
            }
        }
    }

    pub fn input(&self, field: &Field<'_>) -> Markup {
        if field.kind == "hidden" {
            return html! { input type="hidden" name=(field.name) value=(field.value); };
        }
        let id = format!("field-{}", field.name);
        let value = (!field.value.is_empty()).then_some(field.value);
        html! {
            div class="wl-form-item" {
                label class="wl-form-item__label" for=(id) { (field.label) }
                input id=(id) class="wl-input" type=(field.kind) name=(field.name)
                    placeholder=(field.placeholder) value=[value];
            }
        }
    }

    /// A form posting to `action` with one input per field.
    pub fn form(&self, action: &str, fields: &[Field<'_>], submit: &str) -> Markup {
        html! {
            form class="wl-form" method="post" action=(action) {
                @for field in fields {
                    (self.input(field))
                }
                div class="wl-form__actions" { (self.button(submit, Tone::Primary)) }
            }
        }
    }

    pub fn alert(&self, tone: Tone, message: &str) -> Markup {
        html! {
            div class={ "wl-alert wl-alert--" (tone.class()) } role="alert" { (message) }
        }
    }

    /// Horizontal menu; the item whose href equals `active` is highlighted.
    pub fn menu(&self, items: &[(String, String)], active: Option<&str>) -> Markup {
        html! {
            nav class="wl-menu" {
                @for (href, label) in items {
                    @if Some(href.as_str()) == active {
                        a class="wl-menu__item is-active" href=(href) aria-current="page" { (label) }
                    } @else {
                        a class="wl-menu__item" href=(href) { (label) }
                    }
                }
            }
        }
    }
}

/// Installs the widget set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentLibraryPlugin;

impl Plugin for ComponentLibraryPlugin {
    fn name(&self) -> &'static str {
        "component-library"
    }

    fn install(self: Box<Self>, plugins: &mut PluginSet) -> ShellResult<()> {
        plugins.provide_components(self.name(), ComponentLibrary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_renders_fields_and_submit() {
        let widgets = ComponentLibrary;
        let html = widgets
            .form(
                "/api/register",
                &[Field::text("name", "Name"), Field::password("str", "Secret")],
                "Create",
            )
            .into_string();

        assert!(html.contains(r#"action="/api/register""#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains("Create"));
    }

    #[test]
    fn test_hidden_field_has_no_label() {
        let widgets = ComponentLibrary;
        let html = widgets.input(&Field::hidden("x", "5f<")).into_string();
        assert_eq!(html, r#"<input type="hidden" name="x" value="5f&lt;">"#);
    }

    #[test]
    fn test_menu_marks_active_item() {
        let widgets = ComponentLibrary;
        let items = vec![
            ("/".to_string(), "Home".to_string()),
            ("/Newwallet".to_string(), "New".to_string()),
        ];
        let html = widgets.menu(&items, Some("/Newwallet")).into_string();
        assert!(html.contains(r#"class="wl-menu__item is-active" href="/Newwallet""#));
        assert!(html.contains(r#"class="wl-menu__item" href="/""#));
    }

    #[test]
    fn test_widgets_escape_text() {
        let widgets = ComponentLibrary;
        let html = widgets.alert(Tone::Danger, "<script>").into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("wl-alert--danger"));
    }
}
