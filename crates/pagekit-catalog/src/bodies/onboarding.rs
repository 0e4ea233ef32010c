//! Multi-step onboarding wizard, shown on its second step.

use pagekit_core::{element, Element, Node};

use crate::context::BodyContext;
use crate::kit::{self, icons};

const STEPS: [&str; 3] = ["Create account", "Set up workspace", "Invite team"];
const CURRENT_STEP: usize = 1;
const TEAM_SIZES: [&str; 4] = ["Just me", "2 to 10", "11 to 50", "More than 50"];

fn step_indicator(ctx: &BodyContext, index: usize, label: &str) -> Element {
    let marker = if index < CURRENT_STEP {
        element("span")
            .class("flex h-8 w-8 items-center justify-center rounded-full bg-indigo-600 text-white")
            .child(kit::icon(icons::CHECK, "h-4 w-4"))
    } else if index == CURRENT_STEP {
        element("span")
            .class("flex h-8 w-8 items-center justify-center rounded-full border-2 border-indigo-600 text-sm font-semibold text-indigo-600")
            .text((index + 1).to_string())
    } else {
        element("span")
            .class(ctx.cls(
                "flex h-8 w-8 items-center justify-center rounded-full border-2 border-gray-300 text-sm text-gray-500",
                "dark:border-gray-700 dark:text-gray-400",
            ))
            .text((index + 1).to_string())
    };
    let mut item = element("li").class("flex items-center gap-3").child(marker).child(
        element("span")
            .class("text-sm font-medium")
            .text(label),
    );
    if index == CURRENT_STEP {
        item = item.attr("aria-current", "step");
    }
    item
}

pub fn body(ctx: &BodyContext) -> Node {
    let form = element("form")
        .class("space-y-6")
        .child(kit::field(ctx, "workspace", "Workspace name", "text", "Acme Inc"))
        .child(
            element("div")
                .child(
                    element("label")
                        .label_for("team-size")
                        .class(ctx.cls("block text-sm font-medium text-gray-700", "dark:text-gray-200"))
                        .text("Team size"),
                )
                .child(
                    element("select")
                        .attr("id", "team-size")
                        .attr("name", "team-size")
                        .class(ctx.cls(
                            "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-indigo-500 focus:outline-none focus:ring-1 focus:ring-indigo-500",
                            "dark:border-gray-700 dark:bg-gray-900",
                        ))
                        .children(TEAM_SIZES.map(|size| element("option").attr("value", size).text(size))),
                ),
        )
        .child(
            element("div")
                .class("flex items-center justify-between pt-4")
                .child(kit::secondary_button(ctx, "Back"))
                .child(kit::primary_button(ctx, "Continue")),
        );

    kit::page_shell(
        ctx,
        vec![element("main")
            .class("mx-auto max-w-2xl px-6 py-16")
            .child(kit::brand(ctx))
            .child(
                element("h1")
                    .class("mt-8 text-3xl font-bold tracking-tight")
                    .text(format!("Welcome to {}", ctx.app_name)),
            )
            .child(
                element("p")
                    .class(ctx.cls("mt-2 text-gray-600", "dark:text-gray-400"))
                    .text("A few quick steps and your workspace will be ready."),
            )
            .comment("Progress")
            .child(
                element("ol")
                    .class("mt-10 flex flex-col gap-4 sm:flex-row sm:gap-8")
                    .children(STEPS.iter().enumerate().map(|(i, label)| step_indicator(ctx, i, label))),
            )
            .child(
                kit::card_with(ctx, "mt-10")
                    .child(
                        element("h2")
                            .class("text-lg font-semibold")
                            .text(STEPS[CURRENT_STEP]),
                    )
                    .child(form),
            )
            .into()],
    )
    .into()
}
