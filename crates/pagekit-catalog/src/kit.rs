//! Shared building blocks.
//!
//! Every archetype is assembled from these pieces so the emitted pages share
//! one layout vocabulary: a full-height shell, a `max-w-7xl` content column,
//! `py-24` section rhythm, and the same heading, button, and field styles.

use pagekit_core::{element, Element, Node};

use crate::context::BodyContext;

/// Outline icon paths (24x24 viewBox).
pub mod icons {
    pub const CHECK: &str = "M5 13l4 4L19 7";
    pub const ARROW_RIGHT: &str = "M13 7l5 5m0 0l-5 5m5-5H6";
    pub const BOLT: &str = "M13 10V3L4 14h7v7l9-11h-7z";
    pub const SHIELD: &str = "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z";
    pub const CHART: &str = "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z";
    pub const USERS: &str = "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z";
    pub const HOME: &str = "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6";
    pub const COG: &str = "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065z";
    pub const SEARCH: &str = "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z";
    pub const PLUS: &str = "M12 4v16m8-8H4";
    pub const PENCIL: &str = "M15.232 5.232l3.536 3.536M9 11l6.536-6.536a2.5 2.5 0 113.536 3.536L12.536 14.536 9 16H8v-1l1-4z";
    pub const TRASH: &str = "M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16";
}

/// An outline icon.
pub fn icon(path: &str, size: &str) -> Element {
    element("svg")
        .class(size)
        .attr("fill", "none")
        .attr("viewBox", "0 0 24 24")
        .attr("stroke", "currentColor")
        .attr("aria-hidden", "true")
        .child(element("path").stroke("2").attr("d", path))
}

/// Full-height page shell every archetype renders inside.
pub fn page_shell(ctx: &BodyContext, children: Vec<Node>) -> Element {
    element("div")
        .class(ctx.cls(
            "min-h-screen bg-white text-gray-900 antialiased",
            "dark:bg-gray-950 dark:text-gray-100",
        ))
        .children(children)
}

/// Centered content column.
pub fn container() -> Element {
    element("div").class("mx-auto max-w-7xl px-6 lg:px-8")
}

/// Top navigation bar carrying the application name.
pub fn site_header(ctx: &BodyContext, links: &[&str]) -> Element {
    let nav = element("nav").class("hidden gap-8 md:flex").children(links.iter().map(|label| {
        element("a")
            .attr("href", "#")
            .class(ctx.cls(
                "text-sm font-medium text-gray-600 hover:text-gray-900",
                "dark:text-gray-300 dark:hover:text-white",
            ))
            .text(*label)
    }));

    element("header")
        .class(ctx.cls(
            "border-b border-gray-200",
            "dark:border-gray-800",
        ))
        .child(
            container().child(
                element("div")
                    .class("flex h-16 items-center justify-between")
                    .child(brand(ctx))
                    .child(nav)
                    .child(primary_button(ctx, "Get started")),
            ),
        )
}

/// Application name rendered as the brand mark.
pub fn brand(ctx: &BodyContext) -> Element {
    element("a")
        .attr("href", "/")
        .class("text-xl font-bold tracking-tight text-indigo-600")
        .text(ctx.app_name.clone())
}

/// Footer with the copyright line.
pub fn site_footer(ctx: &BodyContext) -> Element {
    element("footer")
        .class(ctx.cls("border-t border-gray-200", "dark:border-gray-800"))
        .child(
            container().child(
                element("p")
                    .class(ctx.cls(
                        "py-8 text-center text-sm text-gray-500",
                        "dark:text-gray-400",
                    ))
                    .text(format!("© {}. All rights reserved.", ctx.app_name)),
            ),
        )
}

/// Section heading block: eyebrow, `h2` title, and lead paragraph.
pub fn section_heading(ctx: &BodyContext, eyebrow: &str, title: &str, lead: &str) -> Element {
    element("div")
        .class("mx-auto max-w-2xl text-center")
        .child(
            element("p")
                .class("text-sm font-semibold uppercase tracking-wide text-indigo-600")
                .text(eyebrow),
        )
        .child(
            element("h2")
                .class("mt-2 text-3xl font-bold tracking-tight sm:text-4xl")
                .text(title),
        )
        .child(
            element("p")
                .class(ctx.cls("mt-4 text-lg text-gray-600", "dark:text-gray-300"))
                .text(lead),
        )
}

/// Filled call-to-action button.
pub fn primary_button(ctx: &BodyContext, label: &str) -> Element {
    element("button")
        .attr("type", "button")
        .class(ctx.cls(
            "inline-flex items-center justify-center rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white shadow-sm hover:bg-indigo-500 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2",
            "dark:bg-indigo-500 dark:hover:bg-indigo-400 dark:focus:ring-offset-gray-950",
        ))
        .text(label)
}

/// Outlined secondary button.
pub fn secondary_button(ctx: &BodyContext, label: &str) -> Element {
    element("button")
        .attr("type", "button")
        .class(ctx.cls(
            "inline-flex items-center justify-center rounded-md border border-gray-300 bg-white px-4 py-2 text-sm font-semibold text-gray-700 shadow-sm hover:bg-gray-50",
            "dark:border-gray-700 dark:bg-gray-900 dark:text-gray-200 dark:hover:bg-gray-800",
        ))
        .text(label)
}

/// Surface used for cards and panels.
pub fn card(ctx: &BodyContext) -> Element {
    card_with(ctx, "")
}

/// Card surface with extra layout classes.
pub fn card_with(ctx: &BodyContext, extra: &str) -> Element {
    let base = format!("rounded-xl border border-gray-200 bg-white p-6 shadow-sm {extra}");
    element("div").class(ctx.cls(base.trim_end(), "dark:border-gray-800 dark:bg-gray-900"))
}

/// Labelled form field.
pub fn field(ctx: &BodyContext, id: &str, label: &str, kind: &str, placeholder: &str) -> Element {
    element("div")
        .child(
            element("label")
                .label_for(id)
                .class(ctx.cls(
                    "block text-sm font-medium text-gray-700",
                    "dark:text-gray-200",
                ))
                .text(label),
        )
        .child(
            element("input")
                .attr("id", id)
                .attr("name", id)
                .attr("type", kind)
                .attr("placeholder", placeholder)
                .class(ctx.cls(
                    "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-indigo-500 focus:outline-none focus:ring-1 focus:ring-indigo-500",
                    "dark:border-gray-700 dark:bg-gray-900 dark:text-white",
                ))
                .flag("required"),
        )
}

/// Checkbox with an inline label.
pub fn checkbox(ctx: &BodyContext, id: &str, label: &str) -> Element {
    element("div")
        .class("flex items-center gap-2")
        .child(
            element("input")
                .attr("id", id)
                .attr("name", id)
                .attr("type", "checkbox")
                .class("h-4 w-4 rounded border-gray-300 text-indigo-600 focus:ring-indigo-500"),
        )
        .child(
            element("label")
                .label_for(id)
                .class(ctx.cls("text-sm text-gray-600", "dark:text-gray-300"))
                .text(label),
        )
}

/// Small status pill.
pub fn badge(label: &str, tone: &str) -> Element {
    element("span")
        .class(format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {tone}"
        ))
        .text(label)
}

/// List item with a leading check mark.
pub fn check_item(ctx: &BodyContext, label: &str) -> Element {
    element("li")
        .class("flex items-start gap-3")
        .child(icon(icons::CHECK, "h-5 w-5 flex-none text-indigo-600"))
        .child(
            element("span")
                .class(ctx.cls("text-sm text-gray-600", "dark:text-gray-300"))
                .text(label),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_follow_dark_mode() {
        let light = BodyContext::new("Acme", false);
        let dark = BodyContext::new("Acme", true);
        for button in [primary_button, secondary_button] {
            let light_classes = button(&light, "Go").classes().map(str::to_string);
            let dark_el = button(&dark, "Go");
            let dark_classes = dark_el.classes().unwrap_or_default();
            assert!(dark_classes.contains("dark:"));
            let stripped: Vec<&str> = dark_classes
                .split(' ')
                .filter(|t| !t.starts_with("dark:"))
                .collect();
            assert_eq!(Some(stripped.join(" ")), light_classes);
        }
    }
}
