use facet::Facet;
use tagcopy::{Error, Tagged, copy, copy_owned, view};

#[derive(Debug, Clone, Default, PartialEq, Facet, Tagged)]
struct A {
    #[tagcopy("string,safe")]
    one: String,
    #[tagcopy("string,other")]
    two: String,
    #[tagcopy("int,safe")]
    my_int: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Tagged)]
struct B {
    #[tagcopy("string,safe")]
    one: String,
    #[tagcopy("string,other")]
    two: String,
    #[tagcopy("int,safe")]
    my_int: i64,
}

fn a(one: &str, two: &str, my_int: i64) -> A {
    A {
        one: one.into(),
        two: two.into(),
        my_int,
    }
}

fn dst() -> A {
    a("A One", "A Two", 1)
}

fn src() -> A {
    a("B One", "B Two", 5)
}

#[test]
fn copy_with_string_tag() {
    let mut d = dst();
    copy(&mut d, &src(), "string").unwrap();
    assert_eq!(d, a("B One", "B Two", 1));
}

#[test]
fn copy_with_safe_tag_spans_types() {
    let mut d = dst();
    copy(&mut d, &src(), "safe").unwrap();
    assert_eq!(d, a("B One", "A Two", 5));
}

#[test]
fn copy_with_single_field_tag() {
    let mut d = dst();
    copy(&mut d, &src(), "other").unwrap();
    assert_eq!(d, a("A One", "B Two", 1));
}

#[test]
fn unknown_tag_is_a_noop() {
    let mut d = dst();
    copy(&mut d, &src(), "admin").unwrap();
    assert_eq!(d, dst());
}

#[test]
fn empty_tag_leaves_declared_fields_alone() {
    let mut d = dst();
    copy(&mut d, &src(), "").unwrap();
    assert_eq!(d, dst());
}

#[test]
fn source_is_not_mutated() {
    let s = src();
    let mut d = dst();
    copy(&mut d, &s, "string").unwrap();
    assert_eq!(s, src());
}

#[test]
fn copying_twice_is_idempotent() {
    let mut once = dst();
    copy(&mut once, &src(), "safe").unwrap();
    let mut twice = once.clone();
    copy(&mut twice, &src(), "safe").unwrap();
    assert_eq!(once, twice);
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Tagged)]
struct Exported {
    #[tagcopy("export")]
    name: String,
    #[tagcopy("export")]
    children: Vec<A>,
}

#[test]
fn nested_list_is_copied_whole() {
    let n1 = Exported {
        name: "n1".into(),
        children: vec![dst(), src()],
    };
    let mut n2 = Exported::default();
    copy(&mut n2, &n1, "export").unwrap();
    assert_eq!(n2, n1);
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Tagged)]
struct AdminNamed {
    #[tagcopy("admin")]
    name: String,
    #[tagcopy("export")]
    children: Vec<A>,
}

#[test]
fn nested_list_ignores_inner_tags() {
    let n1 = AdminNamed {
        name: "n1".into(),
        children: vec![dst(), src()],
    };
    let mut n2 = AdminNamed::default();
    copy(&mut n2, &n1, "export").unwrap();
    assert_eq!(
        n2,
        AdminNamed {
            name: String::new(),
            children: vec![dst(), src()],
        }
    );
}

#[test]
fn distinct_shapes_with_same_fields_mismatch() {
    let mut d = dst();
    let b = B {
        one: "B One".into(),
        two: "B Two".into(),
        my_int: 5,
    };
    let err = copy(&mut d, &b, "string").unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
    assert_eq!(d, dst());
}

#[test]
fn owned_source_moves_selected_fields() {
    let mut d = dst();
    copy_owned(&mut d, src(), "string").unwrap();
    assert_eq!(d, a("B One", "B Two", 1));
}

#[test]
fn owned_source_of_other_shape_mismatches() {
    let mut d = dst();
    let err = copy_owned(&mut d, B::default(), "string").unwrap_err();
    assert_eq!(err.code(), "shape_mismatch");
    assert_eq!(d, dst());
}

#[test]
fn view_fills_only_tagged_fields() {
    assert_eq!(view(&src(), "int"), a("", "", 5));
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Tagged)]
struct Row {
    #[tagcopy("user,admin")]
    username: String,
    #[tagcopy("admin")]
    password_hash: String,
    cache_key: u64,
}

#[test]
fn undeclared_fields_only_follow_the_empty_tag() {
    let internal = Row {
        username: "ada".into(),
        password_hash: "x".into(),
        cache_key: 9,
    };

    let user = view(&internal, "user");
    assert_eq!(
        user,
        Row {
            username: "ada".into(),
            ..Row::default()
        }
    );

    let empty = view(&internal, "");
    assert_eq!(
        empty,
        Row {
            cache_key: 9,
            ..Row::default()
        }
    );
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Tagged)]
struct Pair(#[tagcopy("left")] String, #[tagcopy("right")] u32);

#[test]
fn tuple_structs_copy_by_position() {
    let mut d = Pair("keep".into(), 0);
    copy(&mut d, &Pair("new".into(), 7), "right").unwrap();
    assert_eq!(d, Pair("keep".into(), 7));
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Tagged)]
struct Inner {
    #[tagcopy("secret")]
    token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Tagged)]
struct Outer {
    #[tagcopy("public")]
    inner: Inner,
    #[tagcopy("public")]
    label: Option<String>,
}

#[test]
fn nested_record_is_carried_as_a_unit() {
    let s = Outer {
        inner: Inner {
            token: "t0k3n".into(),
        },
        label: Some("x".into()),
    };
    let out = view(&s, "public");
    assert_eq!(out.inner.token, "t0k3n");
    assert_eq!(out.label.as_deref(), Some("x"));
}
