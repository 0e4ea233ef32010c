//! Three-tier pricing table.

use pagekit_core::{element, Element, Node};

use crate::context::BodyContext;
use crate::kit;

struct Tier {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Starter",
        price: "$0",
        blurb: "For individuals exploring the basics.",
        features: &["1 project", "Community support", "Basic analytics"],
        featured: false,
    },
    Tier {
        name: "Pro",
        price: "$29",
        blurb: "For growing teams that need more power.",
        features: &[
            "Unlimited projects",
            "Priority support",
            "Advanced analytics",
            "Custom domains",
        ],
        featured: true,
    },
    Tier {
        name: "Enterprise",
        price: "$99",
        blurb: "For organizations with advanced needs.",
        features: &[
            "Everything in Pro",
            "Single sign-on",
            "Audit logs",
            "Dedicated success manager",
        ],
        featured: false,
    },
];

fn tier_card(ctx: &BodyContext, tier: &Tier) -> Element {
    let ring = if tier.featured {
        "relative ring-2 ring-indigo-600"
    } else {
        "relative"
    };
    let mut card = kit::card_with(ctx, ring);
    if tier.featured {
        card = card.child(
            element("div")
                .class("absolute -top-3 left-1/2 -translate-x-1/2")
                .child(kit::badge("Most popular", "bg-indigo-600 text-white")),
        );
    }
    let button = if tier.featured {
        kit::primary_button(ctx, "Get started")
    } else {
        kit::secondary_button(ctx, "Get started")
    };
    card.child(element("h3").class("text-lg font-semibold").text(tier.name))
        .child(
            element("p")
                .class(ctx.cls("mt-2 text-sm text-gray-600", "dark:text-gray-400"))
                .text(tier.blurb),
        )
        .child(
            element("p")
                .class("mt-6 flex items-baseline gap-1")
                .child(element("span").class("text-4xl font-bold tracking-tight").text(tier.price))
                .child(
                    element("span")
                        .class(ctx.cls("text-sm text-gray-500", "dark:text-gray-400"))
                        .text("/month"),
                ),
        )
        .child(
            element("ul")
                .class("mt-6 space-y-3")
                .children(tier.features.iter().map(|f| kit::check_item(ctx, f))),
        )
        .child(element("div").class("mt-8 grid").child(button))
}

pub fn body(ctx: &BodyContext) -> Node {
    kit::page_shell(
        ctx,
        vec![
            kit::site_header(ctx, &["Product", "Pricing", "Docs"]).into(),
            element("main")
                .child(
                    element("section").class("py-24").child(
                        kit::container()
                            .child(
                                element("div")
                                    .class("mx-auto max-w-2xl text-center")
                                    .child(
                                        element("h1")
                                            .class("text-4xl font-extrabold tracking-tight sm:text-5xl")
                                            .text(format!("{} pricing", ctx.app_name)),
                                    )
                                    .child(
                                        element("p")
                                            .class(ctx.cls("mt-4 text-lg text-gray-600", "dark:text-gray-300"))
                                            .text("Simple, transparent plans. Upgrade or cancel any time."),
                                    ),
                            )
                            .comment("Plans")
                            .child(
                                element("div")
                                    .class("mt-16 grid gap-8 lg:grid-cols-3")
                                    .children(TIERS.iter().map(|tier| tier_card(ctx, tier))),
                            ),
                    ),
                )
                .child(
                    element("section")
                        .class(ctx.cls("bg-gray-50 py-16", "dark:bg-gray-900"))
                        .child(
                            kit::container().child(kit::section_heading(
                                ctx,
                                "FAQ",
                                "Questions about billing?",
                                "Every plan includes a 14-day free trial, and annual billing saves two months.",
                            )),
                        ),
                )
                .into(),
            kit::site_footer(ctx).into(),
        ],
    )
    .into()
}
