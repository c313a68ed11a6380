//! Public API behaviour of the column and bar renderers.

use spark_widgets::{
    ColorScheme, ColumnOptions, Item, Overline, RenderedSegment, Renderer, RuleSpec,
    SchemeDescriptor, SchemeRegistry, SparkError, Style, Underline, items, normalize, render_bar,
    render_column,
};

#[test]
fn column_emits_one_segment_per_item() {
    for n in [1, 2, 7, 50] {
        let data = items(0..n);
        let s = render_column(&data, "rotate_256".into(), &ColumnOptions::default()).unwrap();
        assert_eq!(s.len(), data.len());
    }
}

#[test]
fn column_rotation_restarts_per_call() {
    let data = items([1, 2, 3]);
    let a = render_column(&data, "rotate_true".into(), &ColumnOptions::default()).unwrap();
    let b = render_column(&data, "rotate_true".into(), &ColumnOptions::default()).unwrap();
    assert_eq!(a, b);
    let first: Vec<_> = a.pairs().map(|(t, _)| t.unwrap().to_string()).collect();
    assert_eq!(first, ["#ff0000", "#008c00", "#0000ff"]);
}

#[test]
fn column_with_inline_rules_and_marks() {
    let scheme = SchemeDescriptor::rules(
        vec![RuleSpec::new(">=", 10.0, "hot"), RuleSpec::otherwise("cold")],
        Default::default(),
    );
    let opts = ColumnOptions::builder()
        .underline(Underline::Min)
        .overline(Overline::Max)
        .build()
        .unwrap();
    let s = render_column(&items([1, 10, 5]), (&scheme).into(), &opts).unwrap();
    let tags: Vec<_> = s.pairs().map(|(t, _)| t.unwrap().to_string()).collect();
    assert_eq!(tags, ["cold", "hot", "cold"]);
    assert!(s[0].glyph.ends_with('\u{20E8}'));
    assert!(s[1].glyph.ends_with('\u{20DB}'));
}

#[test]
fn normalize_stays_on_ramp() {
    for v in [-1e9, -1.0, 0.0, 0.5, 1.0, 2.0, 1e9] {
        assert!(normalize(v, 0.0, 1.0, 8) <= 7);
    }
    assert_eq!(normalize(42.0, 3.0, 3.0, 8), 7);
}

#[test]
fn bar_examples_fill_width() {
    let s = render_bar(&items([40, 30, 20, 10]), 20, "rotate_true".into()).unwrap();
    assert_eq!(s.len(), 20);
    assert_eq!(s.text(), "█".repeat(20));

    let s = render_bar(&items([3, 2, 1]), 28, "rotate_true".into()).unwrap();
    assert_eq!(s.len(), 28);

    let s = render_bar(&[Item::Plain(0.01), Item::Plain(100.0)], 10, "rotate_16".into()).unwrap();
    assert_eq!(s.len(), 10);
    assert!(
        s.pairs()
            .all(|(t, g)| g == "█" && t.unwrap().as_str() == "dark red:dark red")
    );
}

#[test]
fn bar_is_idempotent() {
    let data = items([19, 42, 17]);
    let a = render_bar(&data, 9, "rotate_true".into()).unwrap();
    let b = render_bar(&data, 9, "rotate_true".into()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn errors_surface_before_output() {
    let none = ColumnOptions::default();
    assert!(matches!(
        render_column(&[], "mono".into(), &none),
        Err(SparkError::EmptyInput)
    ));
    assert!(matches!(
        render_column(&items([1]), "plaid".into(), &none),
        Err(SparkError::UnknownScheme(_))
    ));
    assert!(matches!(
        render_bar(&items([1]), 0, "mono".into()),
        Err(SparkError::InvalidWidth)
    ));
    assert!(matches!(
        render_bar(&items([0, 0]), 5, "mono".into()),
        Err(SparkError::InvalidTotal(_))
    ));

    let broken = SchemeDescriptor::rules(vec![RuleSpec::new("<", 0.0, "neg")], Default::default());
    assert!(matches!(
        render_column(&items([1]), (&broken).into(), &none),
        Err(SparkError::InvalidScheme { .. })
    ));
}

#[test]
fn custom_registry_via_renderer() {
    let reg = SchemeRegistry::from_toml_str(
        r#"
        [schemes.pair]
        mode = "rotate"
        colors = ["left", "right"]
        "#,
    )
    .unwrap();
    let r = Renderer::new(&reg);
    let s = r.bar(&items([1, 1]), 4, "pair".into()).unwrap();
    let tags: Vec<_> = s.pairs().map(|(t, _)| t.unwrap().to_string()).collect();
    assert_eq!(tags, ["left:left", "left:left", "right:right", "right:right"]);
}

#[test]
fn rotating_scheme_wraps() {
    let mut s =
        ColorScheme::from_descriptor("abc", &SchemeDescriptor::rotate(["A", "B", "C"])).unwrap();
    let got: Vec<_> = (0..4).filter_map(|_| s.next_color()).map(|t| t.to_string()).collect();
    assert_eq!(got, ["A", "B", "C", "A"]);
}

#[test]
fn segments_can_be_taken_by_value() {
    let s = render_bar(&items([1, 1]), 2, "rotate_16".into()).unwrap();
    let text = s.text();
    let segs: Vec<RenderedSegment> = s.into_segments();
    assert_eq!(segs.len(), 2);
    let glyphs: String = segs.iter().map(|seg| seg.glyph.as_str()).collect();
    assert_eq!(glyphs, text);
    assert!(matches!(&segs[0].style, Style::Split { fg, bg } if fg == bg));
}
