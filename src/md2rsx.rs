//! Markdown to RSX conversion for helper responses.
//!
//! Responses are written in a small Markdown dialect (bold headings, numbered
//! steps, bullet lists). This walks the pulldown-cmark event stream and builds
//! the matching Dioxus element tree.

use dioxus::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Converts a Markdown string to a Dioxus element.
///
/// Keeps a stack of child vectors, one per open container. Ordered lists
/// remember their start number so "3." items render as such.
pub fn markdown_to_rsx(md: &str) -> Element {
    let parser = Parser::new(md);

    let mut stack: Vec<Vec<Element>> = vec![vec![]];
    // Start number of each open list, `None` for bullet lists.
    let mut lists: Vec<Option<u64>> = vec![];

    for ev in parser {
        match ev {
            Event::Start(tag) => {
                if let Tag::List(start) = tag {
                    lists.push(start);
                }
                stack.push(vec![]);
            }
            Event::End(tag) => {
                let children = stack.pop().unwrap_or_default().into_iter();
                let node = match tag {
                    TagEnd::Paragraph => rsx! {
                        p { {children} }
                    },
                    TagEnd::Heading(level) => match level {
                        HeadingLevel::H1 => rsx! { h1 { {children} } },
                        HeadingLevel::H2 => rsx! { h2 { {children} } },
                        HeadingLevel::H3 => rsx! { h3 { {children} } },
                        HeadingLevel::H4 => rsx! { h4 { {children} } },
                        HeadingLevel::H5 => rsx! { h5 { {children} } },
                        _ => rsx! { h6 { {children} } },
                    },
                    TagEnd::BlockQuote(_) => rsx! {
                        blockquote { {children} }
                    },
                    TagEnd::CodeBlock => rsx! {
                        pre {
                            code { {children} }
                        }
                    },
                    TagEnd::List(_) => match lists.pop().flatten() {
                        Some(start) => rsx! {
                            ol { start: "{start}", {children} }
                        },
                        None => rsx! {
                            ul { {children} }
                        },
                    },
                    TagEnd::Item => rsx! {
                        li { {children} }
                    },
                    TagEnd::Emphasis => rsx! {
                        em { {children} }
                    },
                    TagEnd::Strong => rsx! {
                        strong { {children} }
                    },
                    _ => rsx! {
                        span { {children} }
                    },
                };
                push(&mut stack, node);
            }
            Event::Text(text) => push(&mut stack, rsx! { "{text}" }),
            Event::Code(code) => push(&mut stack, rsx! {
                code { "{code}" }
            }),
            Event::Rule => push(&mut stack, rsx! {
                hr {}
            }),
            Event::SoftBreak | Event::HardBreak => push(&mut stack, rsx! {
                br {}
            }),
            // Raw HTML is never rendered.
            _ => {}
        }
    }

    let children = stack.into_iter().flatten();
    rsx! {
        div { class: "markdown", {children} }
    }
}

fn push(stack: &mut Vec<Vec<Element>>, node: Element) {
    if let Some(level) = stack.last_mut() {
        level.push(node);
    }
}
