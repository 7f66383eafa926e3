#![allow(
    clippy::unwrap_used,
    clippy::tests_outside_test_module,
    clippy::let_underscore_must_use,
    reason = "integration tests assert by unwrapping"
)]
//! Breakpoint selection, mobile layout toggling and spacing derivation.

use smart_css::responsive::{MOBILE_LAYOUT_CLASS, auto_breakpoints, content_length};
use smart_css::spacing::MOBILE_SPACING_CLASS;
use smart_css::{Breakpoint, SmartCss, SmartCssConfig};
use style_host::{Capability, Document as _, Environment, HostError, MemoryDocument, StaticViewport};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn env_with_width(width: f32) -> Environment {
    Environment::new(MemoryDocument::with_body()).with_viewport(StaticViewport::uniform(width))
}

#[test]
fn breakpoints_follow_content_length() {
    let config = SmartCssConfig::default();
    assert!(auto_breakpoints(&config, "").is_empty());
    assert!(auto_breakpoints(&config, &"a".repeat(1000)).is_empty());
    assert_eq!(auto_breakpoints(&config, &"a".repeat(1001)), vec![Breakpoint::Md]);
    assert_eq!(auto_breakpoints(&config, &"a".repeat(5000)), vec![Breakpoint::Md]);
    assert_eq!(
        auto_breakpoints(&config, &"a".repeat(5001)),
        vec![Breakpoint::Md, Breakpoint::Lg]
    );
    let labels: Vec<String> = auto_breakpoints(&config, &"a".repeat(6000))
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, vec!["md", "lg"]);
}

#[test]
fn content_length_counts_utf16_units() {
    assert_eq!(content_length("abc"), 3);
    assert_eq!(content_length("é"), 1);
    // Astral characters take two UTF-16 code units.
    assert_eq!(content_length("🎨"), 2);
    let config = SmartCssConfig::default();
    assert_eq!(auto_breakpoints(&config, &"🎨".repeat(501)), vec![Breakpoint::Md]);
}

#[test]
fn mobile_layout_toggles_on_body_width() {
    init_logging();
    let css = SmartCss::default();
    let mut env = env_with_width(480.0);
    let body = env.body().unwrap();

    assert!(css.adjust_layout_based_on_content(&mut env).unwrap());
    assert!(css.adjust_layout_based_on_content(&mut env).unwrap());
    assert_eq!(env.document().class_list(body), vec![MOBILE_LAYOUT_CLASS]);

    env.set_viewport(StaticViewport::uniform(600.0));
    assert!(!css.adjust_layout_based_on_content(&mut env).unwrap());
    assert!(!env.document().has_class(body, MOBILE_LAYOUT_CLASS));
}

#[test]
fn mobile_layout_requires_viewport() {
    let css = SmartCss::default();
    let mut env = Environment::new(MemoryDocument::with_body());
    assert_eq!(
        css.adjust_layout_based_on_content(&mut env),
        Err(HostError::CapabilityMissing(Capability::Viewport))
    );
    let mut bodiless = Environment::new(MemoryDocument::new()).with_viewport(StaticViewport::uniform(300.0));
    assert_eq!(
        css.adjust_layout_based_on_content(&mut bodiless),
        Err(HostError::CapabilityMissing(Capability::DocumentBody))
    );
}

#[test]
fn auto_spacing_halves_font_size() {
    init_logging();
    let mut doc = MemoryDocument::with_body();
    let body = doc.body().unwrap();
    let title = doc.append_element(body, "h1");
    let para = doc.append_element(body, "p");
    let odd = doc.append_element(body, "p");
    let broken = doc.append_element(body, "p");
    doc.set_computed_style(title, "font-size", "32px");
    doc.set_computed_style(odd, "font-size", "17px");
    doc.set_computed_style(broken, "font-size", "larger");
    let mut env = Environment::new(doc);

    let css = SmartCss::default();
    let applied = css.auto_spacing(&mut env, &[title, para, odd, broken]).unwrap();
    assert_eq!(applied, 3);

    let document = env.document();
    assert_eq!(document.inline_style(title, "margin-bottom").as_deref(), Some("16px"));
    // Inherits the 16px initial font size.
    assert_eq!(document.inline_style(para, "margin-bottom").as_deref(), Some("8px"));
    assert_eq!(document.inline_style(odd, "margin-bottom").as_deref(), Some("8.5px"));
    assert_eq!(document.inline_style(broken, "margin-bottom"), None);
}

#[test]
fn auto_spacing_skips_unknown_nodes() {
    let mut env = Environment::new(MemoryDocument::with_body());
    let ghost = style_host::NodeKey(4242);
    // Unknown nodes have no computed style and are skipped.
    assert_eq!(SmartCss::default().auto_spacing(&mut env, &[ghost]), Ok(0));
}

#[test]
fn responsive_spacing_toggles_every_spacing_element() {
    let mut doc = MemoryDocument::with_body();
    let body = doc.body().unwrap();
    let first = doc.append_element(body, "div");
    let second = doc.append_element(body, "section");
    let other = doc.append_element(body, "div");
    doc.set_attribute(first, "class", "spacing").unwrap();
    doc.set_attribute(second, "class", "card spacing").unwrap();
    let mut env = Environment::new(doc).with_viewport(StaticViewport {
        body_offset_width: Some(1024.0),
        inner_width: Some(375.0),
    });

    let css = SmartCss::default();
    assert_eq!(css.optimize_spacing_for_responsive(&mut env).unwrap(), 2);
    assert_eq!(css.optimize_spacing_for_responsive(&mut env).unwrap(), 2);
    let document = env.document();
    assert_eq!(document.class_list(first), vec!["spacing", MOBILE_SPACING_CLASS]);
    assert_eq!(document.class_list(second), vec!["card", "spacing", MOBILE_SPACING_CLASS]);
    assert!(!document.has_class(other, MOBILE_SPACING_CLASS));

    env.set_viewport(StaticViewport::uniform(1280.0));
    css.optimize_spacing_for_responsive(&mut env).unwrap();
    assert_eq!(env.document().class_list(second), vec!["card", "spacing"]);
}

#[test]
fn responsive_spacing_without_matches_is_a_no_op() {
    // No `.spacing` elements: succeeds even without a viewport.
    let mut env = Environment::new(MemoryDocument::with_body());
    assert_eq!(SmartCss::default().optimize_spacing_for_responsive(&mut env), Ok(0));
}

#[test]
fn custom_thresholds_apply_through_the_facade() {
    let config = SmartCssConfig {
        mobile_max_width: 800.0,
        md_content_threshold: 10,
        lg_content_threshold: 20,
        ..SmartCssConfig::default()
    };
    let css = SmartCss::new(config);
    assert_eq!(css.auto_breakpoints(&"x".repeat(21)), vec![Breakpoint::Md, Breakpoint::Lg]);
    let mut env = env_with_width(700.0);
    assert!(css.adjust_layout_based_on_content(&mut env).unwrap());
}

#[test]
fn inverted_thresholds_never_yield_lg_alone() {
    let config = SmartCssConfig {
        md_content_threshold: 100,
        lg_content_threshold: 10,
        ..SmartCssConfig::default()
    };
    assert!(auto_breakpoints(&config, &"a".repeat(50)).is_empty());
    assert_eq!(
        auto_breakpoints(&config, &"a".repeat(101)),
        vec![Breakpoint::Md, Breakpoint::Lg]
    );
}
