//! 404 error page.

use pagekit_core::{element, Node};

use crate::context::BodyContext;
use crate::kit::{self, icons};

pub fn body(ctx: &BodyContext) -> Node {
    kit::page_shell(
        ctx,
        vec![element("main")
            .class("flex min-h-screen flex-col items-center justify-center px-6 py-24 text-center")
            .child(element("p").class("text-base font-semibold text-indigo-600").text("404"))
            .child(
                element("h1")
                    .class("mt-4 text-4xl font-bold tracking-tight sm:text-5xl")
                    .text("Page not found"),
            )
            .child(
                element("p")
                    .class(ctx.cls("mt-6 text-base leading-7 text-gray-600", "dark:text-gray-400"))
                    .text("Sorry, we could not find the page you are looking for."),
            )
            .child(
                element("div")
                    .class("mt-10 flex items-center justify-center gap-6")
                    .child(
                        element("a")
                            .attr("href", "/")
                            .class("inline-flex items-center gap-2 rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-500")
                            .text(format!("Back to {}", ctx.app_name))
                            .child(kit::icon(icons::ARROW_RIGHT, "h-4 w-4")),
                    )
                    .child(
                        element("a")
                            .attr("href", "#")
                            .class(ctx.cls("text-sm font-semibold text-gray-900", "dark:text-white"))
                            .text("Contact support"),
                    ),
            )
            .into()],
    )
    .into()
}
