//! Sign-in and sign-up forms.

use pagekit_core::{element, Element, Node};

use crate::context::BodyContext;
use crate::kit;

fn auth_layout(ctx: &BodyContext, title: String, lead: &str, form: Element, footer: Element) -> Node {
    kit::page_shell(
        ctx,
        vec![element("main")
            .class("flex min-h-screen flex-col items-center justify-center px-6 py-12")
            .child(
                element("div")
                    .class("w-full max-w-md")
                    .child(element("div").class("text-center").child(kit::brand(ctx)))
                    .child(
                        element("h1")
                            .class("mt-6 text-center text-2xl font-bold tracking-tight")
                            .text(title),
                    )
                    .child(
                        element("p")
                            .class(ctx.cls("mt-2 text-center text-sm text-gray-600", "dark:text-gray-400"))
                            .text(lead),
                    )
                    .child(kit::card_with(ctx, "mt-8").child(form))
                    .child(footer),
            )
            .into()],
    )
    .into()
}

fn submit_button(label: &str) -> Element {
    element("button")
        .attr("type", "submit")
        .class("flex w-full justify-center rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white shadow-sm hover:bg-indigo-500 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2")
        .text(label)
}

fn switch_prompt(ctx: &BodyContext, prompt: &str, link: &str, href: &str) -> Element {
    element("p")
        .class(ctx.cls("mt-6 text-center text-sm text-gray-600", "dark:text-gray-400"))
        .text(format!("{prompt} "))
        .child(
            element("a")
                .attr("href", href)
                .class("font-semibold text-indigo-600 hover:text-indigo-500")
                .text(link),
        )
}

pub fn login(ctx: &BodyContext) -> Node {
    let form = element("form")
        .class("space-y-6")
        .attr("action", "#")
        .attr("method", "post")
        .child(kit::field(ctx, "email", "Email address", "email", "you@example.com"))
        .child(kit::field(ctx, "password", "Password", "password", "••••••••"))
        .child(
            element("div")
                .class("flex items-center justify-between")
                .child(kit::checkbox(ctx, "remember", "Remember me"))
                .child(
                    element("a")
                        .attr("href", "#")
                        .class("text-sm font-medium text-indigo-600 hover:text-indigo-500")
                        .text("Forgot password?"),
                ),
        )
        .child(submit_button("Sign in"));

    auth_layout(
        ctx,
        format!("Sign in to {}", ctx.app_name),
        "Welcome back. Enter your details to continue.",
        form,
        switch_prompt(ctx, "Not a member?", "Create an account", "/signup"),
    )
}

pub fn signup(ctx: &BodyContext) -> Node {
    let form = element("form")
        .class("space-y-6")
        .attr("action", "#")
        .attr("method", "post")
        .child(kit::field(ctx, "name", "Full name", "text", "Jane Cooper"))
        .child(kit::field(ctx, "email", "Email address", "email", "you@example.com"))
        .child(kit::field(ctx, "password", "Password", "password", "At least 8 characters"))
        .child(kit::field(
            ctx,
            "confirm-password",
            "Confirm password",
            "password",
            "Repeat your password",
        ))
        .child(kit::checkbox(ctx, "terms", "I agree to the terms of service and privacy policy"))
        .child(submit_button("Create account"));

    auth_layout(
        ctx,
        format!("Create your {} account", ctx.app_name),
        "Start your free 14-day trial. No credit card required.",
        form,
        switch_prompt(ctx, "Already have an account?", "Sign in", "/login"),
    )
}
