//! One body producer per archetype.

mod auth;
mod blog_list;
mod crud_table;
mod dashboard;
mod landing;
mod not_found;
mod onboarding;
mod pricing;
mod settings;

use pagekit_core::{element, to_display_title, Archetype, Node};

use crate::context::BodyContext;
use crate::kit;

/// Body for a known archetype.
pub fn produce(archetype: Archetype, ctx: &BodyContext) -> Node {
    match archetype {
        Archetype::Landing => landing::body(ctx),
        Archetype::Dashboard => dashboard::body(ctx),
        Archetype::AuthLogin => auth::login(ctx),
        Archetype::AuthSignup => auth::signup(ctx),
        Archetype::Pricing => pricing::body(ctx),
        Archetype::Settings => settings::body(ctx),
        Archetype::CrudTable => crud_table::body(ctx),
        Archetype::BlogList => blog_list::body(ctx),
        Archetype::Onboarding => onboarding::body(ctx),
        Archetype::Error404 => not_found::body(ctx),
    }
}

/// Minimal body for an archetype outside the catalog.
///
/// Echoes the requested name so a typo is visible in the generated page.
pub fn placeholder(name: &str, ctx: &BodyContext) -> Node {
    kit::page_shell(
        ctx,
        vec![element("main")
            .class("mx-auto max-w-3xl px-6 py-24 text-center")
            .child(
                element("h1")
                    .class("text-2xl font-bold tracking-tight")
                    .text(to_display_title(name)),
            )
            .child(
                element("p")
                    .class(ctx.cls("mt-4 text-gray-600", "dark:text-gray-400"))
                    .text(format!("Template \"{name}\" is not available in {}.", ctx.app_name)),
            )
            .into()],
    )
    .into()
}
