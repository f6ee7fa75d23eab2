use selector_builder::{SelectorBuilder, combine, element, id};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn id_class_chain_worked_example() -> selector_builder::Result<()> {
    init_logger();
    let selector = id("main").class("container")?.class("editable")?;
    assert_eq!(selector.stringify(), "#main.container.editable");
    Ok(())
}

#[test]
fn attribute_focus_worked_example() -> selector_builder::Result<()> {
    init_logger();
    let selector = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
    Ok(())
}

#[test]
fn three_level_combine_worked_example() -> selector_builder::Result<()> {
    init_logger();
    let builder = SelectorBuilder::new();
    let compound = builder.combine(
        builder
            .element("div")
            .id("main")?
            .class("container")?
            .class("draggable")?,
        "+",
        builder.combine(
            builder.element("table").id("data")?,
            "~",
            builder.combine(
                builder.element("tr").pseudo_class("nth-of-type(even)")?,
                " ",
                builder.element("td").pseudo_class("nth-of-type(even)")?,
            )?,
        )?,
    )?;
    assert_eq!(
        compound.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
    Ok(())
}

#[test]
fn sibling_combine_worked_example() {
    init_logger();
    assert_eq!(
        combine(element("div"), "+", element("span")).stringify(),
        "div + span"
    );
}

#[test]
fn violations_surface_at_the_offending_call() {
    init_logger();
    assert!(matches!(
        selector_builder::class("x").element("y"),
        Err(selector_builder::Error::OrderViolation { .. })
    ));
    assert!(matches!(
        id("a").id("b"),
        Err(selector_builder::Error::DuplicateViolation { .. })
    ));
}
