use hostdom::{to_html, Element};

#[test]
fn test_nested_markup() {
    let el = Element::ul()
        .class("items")
        .child(Element::li().text("one"))
        .child(Element::li().text("two"));
    assert_eq!(to_html(&el), r#"<ul class="items"><li>one</li><li>two</li></ul>"#);
}

#[test]
fn test_checkbox_is_void_and_checked() {
    let el = Element::checkbox().id("c1").attr("value", "1").checked(true);
    assert_eq!(to_html(&el), r#"<input id="c1" type="checkbox" value="1" checked>"#);
}

#[test]
fn test_text_input_value() {
    let el = Element::text_input("abc").placeholder("Search");
    assert_eq!(
        to_html(&el),
        r#"<input placeholder="Search" type="text" value="abc">"#
    );
}

#[test]
fn test_open_is_boolean_attribute() {
    let el = Element::details().child(Element::summary().text("Title"));
    assert_eq!(to_html(&el), "<details open><summary>Title</summary></details>");
}

#[test]
fn test_text_and_attributes_are_escaped() {
    let el = Element::span().attr("title", "\"x\" & y").text("<b>'hi'</b>");
    assert_eq!(
        to_html(&el),
        r#"<span title="&quot;x&quot; &amp; y">&lt;b&gt;&#39;hi&#39;&lt;/b&gt;</span>"#
    );
}
