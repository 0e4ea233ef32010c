//! Analytics dashboard with sidebar navigation.

use pagekit_core::{element, Element, Node};

use crate::context::BodyContext;
use crate::kit::{self, icons};

const NAV: [(&str, &str); 4] = [
    (icons::HOME, "Overview"),
    (icons::CHART, "Reports"),
    (icons::USERS, "Customers"),
    (icons::COG, "Settings"),
];

const STATS: [(&str, &str, &str); 4] = [
    ("Total revenue", "$48,290", "+12.5%"),
    ("Active users", "2,841", "+4.1%"),
    ("Conversion rate", "3.6%", "+0.8%"),
    ("Open tickets", "17", "-3"),
];

const ACTIVITY: [(&str, &str, &str); 4] = [
    ("Olivia Martin", "Upgraded to Pro", "2 minutes ago"),
    ("Liam Johnson", "Created a new project", "1 hour ago"),
    ("Emma Brown", "Invited 3 teammates", "Yesterday"),
    ("Noah Davis", "Exported a report", "2 days ago"),
];

fn sidebar(ctx: &BodyContext) -> Element {
    element("aside")
        .class(ctx.cls(
            "hidden w-64 flex-none border-r border-gray-200 bg-gray-50 px-4 py-6 lg:block",
            "dark:border-gray-800 dark:bg-gray-900",
        ))
        .child(element("div").class("px-2").child(kit::brand(ctx)))
        .child(
            element("nav")
                .class("mt-8 space-y-1")
                .children(NAV.iter().enumerate().map(|(i, (path, label))| {
                    let tone = if i == 0 {
                        ctx.cls("bg-indigo-50 text-indigo-700", "dark:bg-gray-800 dark:text-white")
                    } else {
                        ctx.cls(
                            "text-gray-600 hover:bg-gray-100 hover:text-gray-900",
                            "dark:text-gray-300 dark:hover:bg-gray-800",
                        )
                    };
                    element("a")
                        .attr("href", "#")
                        .class(format!(
                            "flex items-center gap-3 rounded-md px-3 py-2 text-sm font-medium {tone}"
                        ))
                        .child(kit::icon(path, "h-5 w-5"))
                        .text(*label)
                })),
        )
}

fn stat_card(ctx: &BodyContext, label: &str, value: &str, delta: &str) -> Element {
    let tone = if delta.starts_with('-') {
        "text-red-600"
    } else {
        "text-green-600"
    };
    kit::card(ctx)
        .child(
            element("p")
                .class(ctx.cls("text-sm font-medium text-gray-500", "dark:text-gray-400"))
                .text(label),
        )
        .child(
            element("p")
                .class("mt-2 flex items-baseline gap-2")
                .child(element("span").class("text-3xl font-semibold").text(value))
                .child(element("span").class(format!("text-sm font-medium {tone}")).text(delta)),
        )
}

fn activity_panel(ctx: &BodyContext) -> Element {
    kit::card(ctx)
        .child(element("h2").class("text-lg font-semibold").text("Recent activity"))
        .child(
            element("ul")
                .class(ctx.cls(
                    "mt-4 divide-y divide-gray-200",
                    "dark:divide-gray-800",
                ))
                .children(ACTIVITY.iter().map(|(who, what, when)| {
                    element("li")
                        .class("flex items-center justify-between py-3")
                        .child(
                            element("div")
                                .child(element("p").class("text-sm font-medium").text(*who))
                                .child(
                                    element("p")
                                        .class(ctx.cls("text-sm text-gray-500", "dark:text-gray-400"))
                                        .text(*what),
                                ),
                        )
                        .child(
                            element("time")
                                .class(ctx.cls("text-xs text-gray-400", "dark:text-gray-500"))
                                .text(*when),
                        )
                })),
        )
}

fn chart_panel(ctx: &BodyContext) -> Element {
    kit::card_with(ctx, "lg:col-span-2")
        .child(element("h2").class("text-lg font-semibold").text("Revenue"))
        .child(
            element("div")
                .class(ctx.cls(
                    "mt-4 flex h-64 items-end gap-2 rounded-lg bg-gray-50 p-4",
                    "dark:bg-gray-800",
                ))
                .children([40, 65, 50, 80, 55, 90, 70, 95].map(|h| {
                    element("div").class(format!("w-full rounded-t bg-indigo-500 h-[{h}%]"))
                })),
        )
}

pub fn body(ctx: &BodyContext) -> Node {
    let main = element("main")
        .class("flex-1 px-6 py-8 lg:px-10")
        .child(
            element("div")
                .class("flex items-center justify-between")
                .child(
                    element("div")
                        .child(
                            element("h1")
                                .class("text-2xl font-bold tracking-tight")
                                .text(format!("Welcome back to {}", ctx.app_name)),
                        )
                        .child(
                            element("p")
                                .class(ctx.cls("mt-1 text-sm text-gray-500", "dark:text-gray-400"))
                                .text("Here is what happened across your workspace this week."),
                        ),
                )
                .child(kit::primary_button(ctx, "New report")),
        )
        .comment("Key metrics")
        .child(
            element("section")
                .class("mt-8 grid gap-6 sm:grid-cols-2 xl:grid-cols-4")
                .children(STATS.iter().map(|(label, value, delta)| stat_card(ctx, label, value, delta))),
        )
        .child(
            element("section")
                .class("mt-8 grid gap-6 lg:grid-cols-3")
                .child(chart_panel(ctx))
                .child(activity_panel(ctx)),
        );

    kit::page_shell(
        ctx,
        vec![element("div")
            .class("flex min-h-screen")
            .child(sidebar(ctx))
            .child(main)
            .into()],
    )
    .into()
}
