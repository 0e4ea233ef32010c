//! Searchable record table with row actions.

use pagekit_core::{element, Element, Node};

use crate::context::BodyContext;
use crate::kit::{self, icons};

const COLUMNS: [&str; 5] = ["Name", "Email", "Role", "Status", "Actions"];

const ROWS: [(&str, &str, &str, bool); 4] = [
    ("Lindsay Walton", "lindsay@example.com", "Admin", true),
    ("Courtney Henry", "courtney@example.com", "Editor", true),
    ("Tom Cook", "tom@example.com", "Viewer", false),
    ("Whitney Francis", "whitney@example.com", "Editor", true),
];

fn icon_button(ctx: &BodyContext, path: &str, label: &str) -> Element {
    element("button")
        .attr("type", "button")
        .attr("aria-label", label)
        .class(ctx.cls(
            "rounded-md p-1.5 text-gray-500 hover:bg-gray-100 hover:text-gray-900",
            "dark:text-gray-400 dark:hover:bg-gray-800 dark:hover:text-white",
        ))
        .child(kit::icon(path, "h-4 w-4"))
}

fn row(ctx: &BodyContext, name: &str, email: &str, role: &str, active: bool) -> Element {
    let cell = || element("td").class("whitespace-nowrap px-4 py-3 text-sm");
    let status = if active {
        kit::badge("Active", "bg-green-100 text-green-800")
    } else {
        kit::badge("Invited", "bg-yellow-100 text-yellow-800")
    };
    element("tr")
        .child(cell().class("font-medium").text(name))
        .child(cell().text(email))
        .child(cell().text(role))
        .child(cell().child(status))
        .child(
            cell().child(
                element("div")
                    .class("flex gap-1")
                    .child(icon_button(ctx, icons::PENCIL, &format!("Edit {name}")))
                    .child(icon_button(ctx, icons::TRASH, &format!("Delete {name}"))),
            ),
        )
}

pub fn body(ctx: &BodyContext) -> Node {
    let toolbar = element("div")
        .class("mt-8 flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between")
        .child(
            element("div")
                .class("relative w-full sm:max-w-xs")
                .child(
                    element("label")
                        .label_for("search")
                        .class("sr-only")
                        .text("Search records"),
                )
                .child(
                    element("div")
                        .class("pointer-events-none absolute inset-y-0 left-0 flex items-center pl-3 text-gray-400")
                        .child(kit::icon(icons::SEARCH, "h-4 w-4")),
                )
                .child(
                    element("input")
                        .attr("id", "search")
                        .attr("type", "search")
                        .attr("placeholder", "Search by name or email")
                        .class(ctx.cls(
                            "block w-full rounded-md border border-gray-300 py-2 pl-9 pr-3 text-sm focus:border-indigo-500 focus:outline-none focus:ring-1 focus:ring-indigo-500",
                            "dark:border-gray-700 dark:bg-gray-900",
                        )),
                ),
        )
        .child(
            element("button")
                .attr("type", "button")
                .class("inline-flex items-center gap-2 rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white shadow-sm hover:bg-indigo-500")
                .child(kit::icon(icons::PLUS, "h-4 w-4"))
                .text("Add record"),
        );

    let table = element("div")
        .class(ctx.cls(
            "mt-6 overflow-x-auto rounded-lg border border-gray-200",
            "dark:border-gray-800",
        ))
        .child(
            element("table")
                .class(ctx.cls("min-w-full divide-y divide-gray-200", "dark:divide-gray-800"))
                .child(
                    element("thead")
                        .class(ctx.cls("bg-gray-50", "dark:bg-gray-900"))
                        .child(element("tr").children(COLUMNS.iter().map(|col| {
                            element("th")
                                .attr("scope", "col")
                                .class("px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-gray-500")
                                .text(*col)
                        }))),
                )
                .child(
                    element("tbody")
                        .class(ctx.cls("divide-y divide-gray-200", "dark:divide-gray-800"))
                        .children(
                            ROWS.iter()
                                .map(|(name, email, role, active)| row(ctx, name, email, role, *active)),
                        ),
                ),
        );

    let pagination = element("nav")
        .attr("aria-label", "Pagination")
        .class("mt-4 flex items-center justify-between")
        .child(
            element("p")
                .class(ctx.cls("text-sm text-gray-600", "dark:text-gray-400"))
                .text("Showing 1 to 4 of 24 records"),
        )
        .child(
            element("div")
                .class("flex gap-2")
                .child(kit::secondary_button(ctx, "Previous"))
                .child(kit::secondary_button(ctx, "Next")),
        );

    kit::page_shell(
        ctx,
        vec![
            kit::site_header(ctx, &["Dashboard", "Users", "Reports"]).into(),
            element("main")
                .child(
                    kit::container()
                        .class("py-12")
                        .child(element("h1").class("text-2xl font-bold tracking-tight").text("Users"))
                        .child(
                            element("p")
                                .class(ctx.cls("mt-1 text-sm text-gray-600", "dark:text-gray-400"))
                                .text(format!("Everyone with access to {}.", ctx.app_name)),
                        )
                        .child(toolbar)
                        .comment("Records")
                        .child(table)
                        .child(pagination),
                )
                .into(),
        ],
    )
    .into()
}
