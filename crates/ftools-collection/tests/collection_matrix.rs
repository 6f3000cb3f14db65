use ftools_collection::{
    branches, delitem, getitem, hasitem, leaves, omit, pick, setitem, to_path, update,
    CollectionError, Path, PathStep, ValueKind,
};
use serde_json::{json, Value};

#[test]
fn getitem_matrix() {
    let cases: Vec<(Path, Value, Option<Value>)> = vec![
        (to_path("key"), json!({"key": 4}), Some(json!(4))),
        (to_path(("key", "subkey")), json!({"key": {"subkey": 4}}), Some(json!(4))),
        (to_path("key"), json!({}), None),
        (to_path(("key", "subkey")), json!({"key": {}}), None),
        (to_path(("key", 0usize)), json!({"key": ["item"]}), Some(json!("item"))),
        (to_path(("key", 0usize)), json!({"key": []}), None),
        (
            to_path(("key", "subkey", 0usize)),
            json!({"key": {"subkey": ["item"]}}),
            Some(json!("item")),
        ),
        (
            to_path(("key", 0usize, "subkey")),
            json!({"key": [{"subkey": "item"}]}),
            Some(json!("item")),
        ),
        (to_path(("key", 0usize)), json!({"key": "text"}), None),
        (to_path("key"), json!({"key": null}), Some(json!(null))),
    ];

    for (path, doc, expected) in cases {
        assert_eq!(getitem(&path, &doc), expected.as_ref(), "getitem {path:?} in {doc}");
        assert_eq!(hasitem(&path, &doc), expected.is_some(), "hasitem {path:?} in {doc}");
    }
}

#[test]
fn setitem_matrix() {
    let cases: Vec<(Path, Value, Value, Value)> = vec![
        (to_path("key"), json!(4), json!({}), json!({"key": 4})),
        (to_path(("key", "subkey")), json!(4), json!({}), json!({"key": {"subkey": 4}})),
        (to_path(("key", 0usize)), json!(4), json!({}), json!({"key": [4]})),
        (to_path(("key", 1usize)), json!(4), json!({}), json!({"key": [null, 4]})),
        (to_path(("key", 1usize)), json!(4), json!({"key": [1, 2]}), json!({"key": [1, 4]})),
        (to_path(("a", 0usize)), json!("x"), json!({}), json!({"a": ["x"]})),
        (to_path(("a", "b")), json!("x"), json!({}), json!({"a": {"b": "x"}})),
        (to_path(("k", 2usize)), json!("x"), json!({"k": ["y"]}), json!({"k": ["y", null, "x"]})),
        (
            to_path(("a", 0usize, "b", 1usize)),
            json!(true),
            json!({}),
            json!({"a": [{"b": [null, true]}]}),
        ),
    ];

    for (path, value, doc, expected) in cases {
        let before = doc.clone();
        let next = setitem(&path, value, &doc).expect("setitem ok");
        assert_eq!(next, expected, "setitem {path:?}");
        assert_eq!(doc, before, "input changed by setitem {path:?}");
    }
}

#[test]
fn delitem_matrix() {
    assert_eq!(delitem("key", &json!({"key": 4})).unwrap(), json!({}));
    assert_eq!(
        delitem(("key", "subkey"), &json!({"key": {"subkey": 4}})).unwrap(),
        json!({"key": {}})
    );
    assert_eq!(
        delitem(("key", 1usize, "x"), &json!({"key": [0, {"x": 1, "y": 2}]})).unwrap(),
        json!({"key": [0, {"y": 2}]})
    );
    assert_eq!(
        delitem("missing", &json!({"key": 4})),
        Err(CollectionError::MissingKey {
            path: to_path("missing")
        })
    );
}

#[test]
fn update_matrix() {
    let doc = json!({"count": 1, "nested": {"list": [1, 2]}});
    let incr = |v: Option<&Value>| json!(v.and_then(Value::as_i64).unwrap_or(0) + 1);

    assert_eq!(
        update("count", incr, &doc).unwrap(),
        json!({"count": 2, "nested": {"list": [1, 2]}})
    );
    assert_eq!(
        update(("nested", "list", 3usize), incr, &doc).unwrap(),
        json!({"count": 1, "nested": {"list": [1, 2, null, 1]}})
    );
    assert_eq!(
        update(("nested", "list", 0usize), incr, &doc).unwrap(),
        setitem(
            ("nested", "list", 0usize),
            incr(getitem(("nested", "list", 0usize), &doc)),
            &doc
        )
        .unwrap()
    );
}

#[test]
fn write_errors_report_location() {
    let doc = json!({"a": {"b": [1, 2]}});
    let err = setitem(("a", "b", "c"), json!(0), &doc).unwrap_err();
    assert_eq!(
        err,
        CollectionError::TypeMismatch {
            path: to_path(("a", "b")),
            step: PathStep::from("c"),
            kind: ValueKind::Sequence,
        }
    );
    assert_eq!(err.to_string(), "cannot address `c` in sequence at /a/b");

    let err = setitem(("a", "b", 0usize, "x"), json!(0), &doc).unwrap_err();
    assert_eq!(err.to_string(), "cannot address `x` in number at /a/b/0");
}

#[test]
fn traversal_matrix() {
    let doc = json!({"a": {"b": 1}});
    let all: Vec<(Path, &Value)> = branches(&doc).collect();
    assert_eq!(
        all,
        vec![
            (to_path("a"), &json!({"b": 1})),
            (to_path(("a", "b")), &json!(1)),
        ]
    );
    let only_leaves: Vec<(Path, &Value)> = leaves(&doc).collect();
    assert_eq!(only_leaves, vec![(to_path(("a", "b")), &json!(1))]);

    let doc = json!({"list": [{"x": "s"}, 2], "text": "abc"});
    let paths: Vec<Path> = leaves(&doc).map(|(p, _)| p).collect();
    assert_eq!(
        paths,
        vec![
            to_path(("list", 0usize, "x")),
            to_path(("list", 1usize)),
            to_path("text"),
        ]
    );
}

#[test]
fn projection_matrix() {
    assert_eq!(
        pick([("a", "b")], &json!({"a": {"b": 1, "c": 2}})).unwrap(),
        json!({"a": {"b": 1}})
    );

    let doc = json!({"users": [{"name": "a", "age": 1}, {"name": "b", "age": 2}], "meta": {}});
    assert_eq!(
        pick(
            [
                to_path(("users", 0usize, "name")),
                to_path(("users", 1usize, "name")),
            ],
            &doc
        )
        .unwrap(),
        json!({"users": [{"name": "a"}, {"name": "b"}]})
    );

    assert_eq!(omit(["meta"], &doc).unwrap(), json!({"users": doc["users"].clone()}));
}
