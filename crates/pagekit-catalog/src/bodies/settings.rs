//! Account settings page.

use pagekit_core::{element, Element, Node};

use crate::context::BodyContext;
use crate::kit;

const NOTIFICATIONS: [(&str, &str); 3] = [
    ("notify-comments", "Email me when someone comments on my work"),
    ("notify-mentions", "Email me when I am mentioned"),
    ("notify-digest", "Send me a weekly product digest"),
];

fn settings_section(ctx: &BodyContext, title: &str, lead: &str, content: Element) -> Element {
    element("section")
        .class(ctx.cls(
            "grid gap-6 border-b border-gray-200 py-10 md:grid-cols-3",
            "dark:border-gray-800",
        ))
        .child(
            element("div")
                .child(element("h2").class("text-base font-semibold").text(title))
                .child(
                    element("p")
                        .class(ctx.cls("mt-1 text-sm text-gray-500", "dark:text-gray-400"))
                        .text(lead),
                ),
        )
        .child(element("div").class("md:col-span-2").child(content))
}

pub fn body(ctx: &BodyContext) -> Node {
    let profile = element("form")
        .class("space-y-6")
        .child(
            element("div")
                .class("grid gap-6 sm:grid-cols-2")
                .child(kit::field(ctx, "first-name", "First name", "text", "Jane"))
                .child(kit::field(ctx, "last-name", "Last name", "text", "Cooper")),
        )
        .child(kit::field(ctx, "email", "Email address", "email", "jane@example.com"))
        .child(
            element("div")
                .class("flex justify-end")
                .child(kit::primary_button(ctx, "Save changes")),
        );

    let notifications = element("fieldset")
        .class("space-y-4")
        .child(element("legend").class("sr-only").text("Notifications"))
        .children(
            NOTIFICATIONS
                .iter()
                .map(|(id, label)| kit::checkbox(ctx, id, label)),
        );

    let danger = element("div")
        .class(ctx.cls(
            "rounded-lg border border-red-200 bg-red-50 p-4",
            "dark:border-red-900 dark:bg-red-950",
        ))
        .child(
            element("p")
                .class(ctx.cls("text-sm text-red-700", "dark:text-red-300"))
                .text("Deleting your account removes all projects and data permanently."),
        )
        .child(
            element("button")
                .attr("type", "button")
                .class("mt-4 rounded-md bg-red-600 px-4 py-2 text-sm font-semibold text-white hover:bg-red-500")
                .text("Delete account"),
        );

    kit::page_shell(
        ctx,
        vec![
            kit::site_header(ctx, &["Dashboard", "Projects", "Settings"]).into(),
            element("main")
                .class("mx-auto max-w-5xl px-6 py-12")
                .child(element("h1").class("text-3xl font-bold tracking-tight").text("Settings"))
                .child(
                    element("p")
                        .class(ctx.cls("mt-2 text-sm text-gray-600", "dark:text-gray-400"))
                        .text(format!("Manage your {} account and preferences.", ctx.app_name)),
                )
                .comment("Profile")
                .child(settings_section(
                    ctx,
                    "Profile",
                    "This information is visible to your teammates.",
                    profile,
                ))
                .comment("Notifications")
                .child(settings_section(
                    ctx,
                    "Notifications",
                    "Choose what we contact you about.",
                    notifications,
                ))
                .comment("Danger zone")
                .child(settings_section(
                    ctx,
                    "Danger zone",
                    "Irreversible and destructive actions.",
                    danger,
                ))
                .into(),
        ],
    )
    .into()
}
