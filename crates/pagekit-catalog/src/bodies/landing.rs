//! Marketing landing page.

use pagekit_core::{element, Node};

use crate::context::BodyContext;
use crate::kit::{self, icons};

const FEATURES: [(&str, &str, &str); 3] = [
    (
        icons::BOLT,
        "Fast by default",
        "Pages load instantly with a lean bundle and server rendering out of the box.",
    ),
    (
        icons::SHIELD,
        "Secure foundations",
        "Authentication, roles, and audit logs are wired in from the very first deploy.",
    ),
    (
        icons::CHART,
        "Insightful analytics",
        "Track the metrics that matter with dashboards your whole team understands.",
    ),
];

pub fn body(ctx: &BodyContext) -> Node {
    let hero = element("section")
        .class("py-24 sm:py-32")
        .child(
            kit::container().child(
                element("div")
                    .class("mx-auto max-w-3xl text-center")
                    .child(kit::badge(
                        "New release",
                        "bg-indigo-50 text-indigo-700 ring-1 ring-inset ring-indigo-600/20",
                    ))
                    .child(
                        element("h1")
                            .class("mt-6 text-4xl font-extrabold tracking-tight sm:text-6xl")
                            .text(format!("Build faster with {}", ctx.app_name)),
                    )
                    .child(
                        element("p")
                            .class(ctx.cls("mt-6 text-lg leading-8 text-gray-600", "dark:text-gray-300"))
                            .text("Everything your team needs to ship polished products, from the first prototype to global scale."),
                    )
                    .child(
                        element("div")
                            .class("mt-10 flex items-center justify-center gap-4")
                            .child(kit::primary_button(ctx, "Start free trial"))
                            .child(kit::secondary_button(ctx, "Book a demo")),
                    ),
            ),
        );

    let features = element("section")
        .attr("id", "features")
        .class(ctx.cls("bg-gray-50 py-24", "dark:bg-gray-900"))
        .child(
            kit::container()
                .child(kit::section_heading(
                    ctx,
                    "Features",
                    "Everything you need to launch",
                    "A complete toolkit that grows with your product.",
                ))
                .child(
                    element("div")
                        .class("mt-16 grid gap-8 md:grid-cols-3")
                        .children(FEATURES.iter().map(|(path, title, copy)| {
                            kit::card(ctx)
                                .child(
                                    element("div")
                                        .class("flex h-10 w-10 items-center justify-center rounded-lg bg-indigo-600 text-white")
                                        .child(kit::icon(path, "h-6 w-6")),
                                )
                                .child(element("h3").class("mt-4 text-lg font-semibold").text(*title))
                                .child(
                                    element("p")
                                        .class(ctx.cls("mt-2 text-sm text-gray-600", "dark:text-gray-300"))
                                        .text(*copy),
                                )
                        })),
                ),
        );

    let testimonial = element("section").class("py-24").child(
        kit::container().child(
            element("figure")
                .class("mx-auto max-w-2xl text-center")
                .child(
                    element("blockquote")
                        .class("text-xl font-medium leading-8")
                        .child(element("p").text(format!(
                            "“{} replaced three tools for us and cut our release cycle in half.”",
                            ctx.app_name
                        ))),
                )
                .child(
                    element("figcaption")
                        .class(ctx.cls("mt-6 text-sm text-gray-600", "dark:text-gray-400"))
                        .text("Jordan Lee, Head of Product at Northwind"),
                ),
        ),
    );

    let cta = element("section")
        .class("bg-indigo-600 py-16")
        .child(
            kit::container().child(
                element("div")
                    .class("flex flex-col items-center justify-between gap-6 md:flex-row")
                    .child(
                        element("h2")
                            .class("text-2xl font-bold tracking-tight text-white")
                            .text("Ready to get started?"),
                    )
                    .child(
                        element("a")
                            .attr("href", "#")
                            .class("inline-flex items-center gap-2 rounded-md bg-white px-5 py-3 text-sm font-semibold text-indigo-600 hover:bg-indigo-50")
                            .text("Create your account")
                            .child(kit::icon(icons::ARROW_RIGHT, "h-4 w-4")),
                    ),
            ),
        );

    kit::page_shell(
        ctx,
        vec![
            kit::site_header(ctx, &["Features", "Pricing", "Customers", "Docs"]).into(),
            element("main")
                .comment("Hero")
                .child(hero)
                .comment("Features")
                .child(features)
                .comment("Testimonial")
                .child(testimonial)
                .comment("Call to action")
                .child(cta)
                .into(),
            kit::site_footer(ctx).into(),
        ],
    )
    .into()
}
