//! Blog index with article cards.

use pagekit_core::{element, Element, Node};

use crate::context::BodyContext;
use crate::kit;

struct Post {
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    date: &'static str,
    author: &'static str,
}

const POSTS: [Post; 3] = [
    Post {
        title: "Designing for clarity at scale",
        excerpt: "How we rebuilt our component library so every screen feels like part of one product.",
        category: "Design",
        date: "Mar 16, 2024",
        author: "Michael Foster",
    },
    Post {
        title: "Shipping weekly without breaking things",
        excerpt: "The release checklist, preview environments, and feature flags behind our cadence.",
        category: "Engineering",
        date: "Mar 10, 2024",
        author: "Lindsay Walton",
    },
    Post {
        title: "What our customers taught us this quarter",
        excerpt: "Three patterns from hundreds of interviews and what we changed because of them.",
        category: "Product",
        date: "Feb 12, 2024",
        author: "Tom Cook",
    },
];

fn post_card(ctx: &BodyContext, post: &Post) -> Element {
    element("article")
        .class("flex flex-col items-start")
        .child(
            element("div")
                .class("flex items-center gap-3 text-xs")
                .child(
                    element("time")
                        .class(ctx.cls("text-gray-500", "dark:text-gray-400"))
                        .text(post.date),
                )
                .child(kit::badge(post.category, "bg-gray-100 text-gray-700")),
        )
        .child(
            element("h3")
                .class("mt-3 text-lg font-semibold leading-6 hover:text-indigo-600")
                .child(element("a").attr("href", "#").text(post.title)),
        )
        .child(
            element("p")
                .class(ctx.cls("mt-3 line-clamp-3 text-sm leading-6 text-gray-600", "dark:text-gray-300"))
                .text(post.excerpt),
        )
        .child(
            element("p")
                .class("mt-4 text-sm font-medium")
                .text(format!("By {}", post.author)),
        )
}

pub fn body(ctx: &BodyContext) -> Node {
    kit::page_shell(
        ctx,
        vec![
            kit::site_header(ctx, &["Blog", "Changelog", "About"]).into(),
            element("main")
                .class("py-24")
                .child(
                    kit::container()
                        .child(
                            element("div")
                                .class("mx-auto max-w-2xl text-center")
                                .child(
                                    element("h1")
                                        .class("text-4xl font-bold tracking-tight sm:text-5xl")
                                        .text(format!("The {} Blog", ctx.app_name)),
                                )
                                .child(
                                    element("p")
                                        .class(ctx.cls("mt-4 text-lg text-gray-600", "dark:text-gray-300"))
                                        .text("Stories, guides, and updates from the team."),
                                ),
                        )
                        .comment("Posts")
                        .child(
                            element("div")
                                .class(ctx.cls(
                                    "mx-auto mt-16 grid gap-x-8 gap-y-16 border-t border-gray-200 pt-16 lg:grid-cols-3",
                                    "dark:border-gray-800",
                                ))
                                .children(POSTS.iter().map(|post| post_card(ctx, post))),
                        )
                        .child(
                            element("div")
                                .class("mt-16 flex justify-center")
                                .child(kit::secondary_button(ctx, "Load more posts")),
                        ),
                )
                .into(),
            kit::site_footer(ctx).into(),
        ],
    )
    .into()
}
