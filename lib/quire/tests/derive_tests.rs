//! `#[derive(Query)]` field tags, nesting, inlining and embedding.

#![allow(missing_docs)]

use std::collections::BTreeMap;

use assert2::{check, let_assert};
use quire::prelude::*;

fn query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> QueryValues {
    pairs.into_iter().collect()
}

#[derive(Query)]
pub struct Pages {
    pub a: u32,
    pub b: u32,
}

#[derive(Query)]
pub struct Inner {
    #[query("value")]
    pub value: String,
}

#[derive(Query)]
pub struct Key {
    #[query("key")]
    pub key: String,
}

#[derive(Query)]
pub struct KeyHolder {
    #[query(",inline")]
    pub key: Key,
}

#[test]
fn omitempty_drops_zero_values() {
    #[derive(Query)]
    pub struct Search {
        #[query("q,omitempty")]
        pub q: String,
        #[query("page,omitempty")]
        pub page: u32,
        #[query("tags,omitempty")]
        pub tags: Vec<String>,
        #[query("exact,omitempty")]
        pub exact: bool,
        #[query("cursor,omitempty")]
        pub cursor: Option<String>,
        #[query("kept,omitempty")]
        pub kept: Option<String>,
        #[query("filters,omitempty")]
        pub filters: BTreeMap<String, String>,
    }

    let values = encode(&Search {
        q: String::new(),
        page: 0,
        tags: Vec::new(),
        exact: false,
        cursor: None,
        kept: Some(String::new()),
        filters: BTreeMap::new(),
    })
    .unwrap();
    check!(values == query([("kept", "")]));
}

#[test]
fn tag_names() {
    #[derive(Query)]
    pub struct Names {
        #[query("-")]
        pub skipped: String,
        #[query(skip)]
        pub also_skipped: String,
        #[query("-,")]
        pub dash: String,
        #[query("omitempty")]
        pub literally: String,
        #[query(",omitempty")]
        pub unnamed: String,
        pub plain: u8,
        hidden: u8,
    }

    let names = Names {
        skipped: "x".into(),
        also_skipped: "x".into(),
        dash: "d".into(),
        literally: String::new(),
        unnamed: String::new(),
        plain: 1,
        hidden: 2,
    };
    check!(names.hidden == 2);

    let values = encode(&names).unwrap();
    check!(values == query([("-", "d"), ("omitempty", ""), ("plain", "1")]));
}

#[test]
fn rename_all() {
    #[derive(Query)]
    #[query(rename_all = "camelCase")]
    pub struct Paging {
        pub page_size: u32,
        #[query("offset")]
        pub start_offset: u32,
        pub r#type: &'static str,
    }

    let values = encode(&Paging {
        page_size: 10,
        start_offset: 20,
        r#type: "all",
    })
    .unwrap();
    check!(values == query([("pageSize", "10"), ("offset", "20"), ("type", "all")]));
}

#[test]
fn nested_structs_are_scoped() {
    #[derive(Query)]
    pub struct Outer {
        #[query("a")]
        pub a: Inner,
        #[query("deep")]
        pub deep: Option<Box<Outer>>,
    }

    let values = encode(&Outer {
        a: Inner { value: "x".into() },
        deep: Some(Box::new(Outer {
            a: Inner { value: "y".into() },
            deep: None,
        })),
    })
    .unwrap();

    check!(values.get_all("a[value]") == ["x"]);
    check!(values.get_all("deep[a][value]") == ["y"]);
    check!(values.get_all("deep[deep]") == [""]);
}

#[test]
fn dots_scope_join() {
    #[derive(Query)]
    pub struct Outer {
        #[query("a")]
        pub a: Inner,
        #[query("m")]
        pub m: BTreeMap<&'static str, u8>,
    }

    let encoder = Encoder::new(EncoderConfig::builder().scope_join(ScopeJoin::Dots).build());
    let values = encoder
        .encode(&Outer {
            a: Inner { value: "x".into() },
            m: BTreeMap::from([("k", 1)]),
        })
        .unwrap();
    check!(values == query([("a.value", "x"), ("m.k", "1")]));
}

#[test]
fn inline_struct_shares_the_parent_scope() {
    #[derive(Query)]
    pub struct Listing {
        pub name: String,
        #[query(",inline")]
        pub pages: Pages,
    }

    let values = encode(&Listing {
        name: String::new(),
        pages: Pages { a: 1, b: 2 },
    })
    .unwrap();
    check!(values == query([("name", ""), ("a", "1"), ("b", "2")]));
}

#[test]
fn named_inline_is_scoped() {
    #[derive(Query)]
    pub struct Listing {
        #[query("pages,inline")]
        pub pages: Pages,
    }

    let values = encode(&Listing {
        pages: Pages { a: 1, b: 2 },
    })
    .unwrap();
    check!(values == query([("pages[a]", "1"), ("pages[b]", "2")]));
}

#[test]
fn inline_inside_containers() {
    #[derive(Query)]
    pub struct Holder {
        #[query(",inline")]
        pub inline: BTreeMap<&'static str, KeyHolder>,
        #[query("out")]
        pub out: KeyHolder,
        #[query("ins")]
        pub ins: Vec<KeyHolder>,
        #[query(",inline,omitempty")]
        pub missing: Option<Box<KeyHolder>>,
    }

    let holder = |key: &str| KeyHolder {
        key: Key { key: key.into() },
    };

    let values = encode(&Holder {
        inline: BTreeMap::from([("inline", holder("1"))]),
        out: holder("2"),
        ins: vec![holder("3"), holder("4")],
        missing: None,
    })
    .unwrap();

    check!(
        values
            == query([
                ("inline[key]", "1"),
                ("out[key]", "2"),
                ("ins[key]", "3"),
                ("ins[key]", "4"),
            ])
    );
}

#[test]
fn present_inline_pointer_is_encoded() {
    #[derive(Query)]
    pub struct Holder {
        #[query("key")]
        pub key: &'static str,
        #[query(",inline,omitempty")]
        pub extra: Option<Key>,
    }

    let values = encode(&Holder {
        key: "1",
        extra: Some(Key { key: String::new() }),
    })
    .unwrap();
    check!(values.get_all("key") == ["1", ""]);
}

#[test]
fn embedded_structs_follow_direct_fields() {
    #[derive(Query)]
    pub struct Base {
        pub v: &'static str,
    }

    #[derive(Query)]
    pub struct Mixed {
        #[query(flatten)]
        pub base: Base,
        pub v: &'static str,
    }

    #[derive(Query)]
    pub struct Hidden {
        #[query(flatten)]
        mixed: Mixed,
    }

    #[derive(Query)]
    pub struct Pointer {
        #[query(flatten)]
        pub base: Box<Base>,
    }

    let mixed = || Mixed {
        base: Base { v: "a" },
        v: "b",
    };

    check!(encode(&mixed()).unwrap().get_all("v") == ["b", "a"]);
    check!(encode(&Hidden { mixed: mixed() }).unwrap().get_all("v") == ["b", "a"]);
    check!(
        encode(&Pointer {
            base: Box::new(Base { v: "c" })
        })
        .unwrap()
            == query([("v", "c")])
    );
}

#[test]
fn named_embedded_struct_is_nested() {
    #[derive(Query)]
    pub struct Wrapper {
        #[query("inner", flatten)]
        pub inner: Inner,
    }

    let values = encode(&Wrapper {
        inner: Inner { value: "x".into() },
    })
    .unwrap();
    check!(values == query([("inner[value]", "x")]));
}

#[test]
fn sequence_join_styles() {
    #[derive(Query)]
    pub struct Brackets {
        #[query("V,brackets")]
        pub v: Vec<u8>,
    }

    #[derive(Query)]
    pub struct Numbered {
        #[query("V,numbered")]
        pub v: Vec<u8>,
    }

    #[derive(Query)]
    pub struct Comma {
        #[query("V,comma")]
        pub v: Vec<u8>,
    }

    let v = vec![1, 2];
    check!(encode(&Brackets { v: v.clone() }).unwrap() == query([("V[]", "1"), ("V[]", "2")]));
    check!(encode(&Numbered { v: v.clone() }).unwrap() == query([("V0", "1"), ("V1", "2")]));
    check!(encode(&Comma { v }).unwrap() == query([("V", "1,2")]));
}

#[test]
fn map_fields_use_the_field_sequence_layout() {
    #[derive(Query)]
    pub struct Tagged {
        #[query("m,comma")]
        pub m: BTreeMap<&'static str, Vec<&'static str>>,
        #[query("b,brackets")]
        pub b: BTreeMap<&'static str, Vec<&'static str>>,
        #[query("n,idx")]
        pub n: BTreeMap<&'static str, BTreeMap<&'static str, Vec<u8>>>,
        #[query("r")]
        pub r: BTreeMap<&'static str, Vec<&'static str>>,
    }

    let values = encode(&Tagged {
        m: BTreeMap::from([("x", vec!["1", "2"])]),
        b: BTreeMap::from([("x", vec!["1", "2"])]),
        n: BTreeMap::from([("x", BTreeMap::from([("y", vec![3, 4])]))]),
        r: BTreeMap::from([("x", vec!["1", "2"])]),
    })
    .unwrap();

    check!(
        values
            == query([
                ("m[x]", "1,2"),
                ("b[x][]", "1"),
                ("b[x][]", "2"),
                ("n[x][y][0]", "3"),
                ("n[x][y][1]", "4"),
                ("r[x]", "1"),
                ("r[x]", "2"),
            ])
    );
}

#[test]
fn generic_structs() {
    #[derive(Query)]
    pub struct Envelope<T> {
        #[query("data")]
        pub data: T,
        #[query("n")]
        pub n: u8,
    }

    let values = encode(&Envelope {
        data: Pages { a: 3, b: 4 },
        n: 1,
    })
    .unwrap();
    check!(values == query([("data[a]", "3"), ("data[b]", "4"), ("n", "1")]));

    let values = encode(&Envelope { data: "x", n: 2 }).unwrap();
    check!(values == query([("data", "x"), ("n", "2")]));
}

#[test]
fn root_sequence_of_structs() {
    let items = vec![Pages { a: 1, b: 2 }, Pages { a: 3, b: 4 }];
    let values = encode(&items).unwrap();
    check!(values.get_all("a") == ["1", "3"]);
    check!(values.get_all("b") == ["2", "4"]);
}

#[test]
fn depth_limit() {
    #[derive(Query)]
    pub struct Node {
        #[query("v")]
        pub v: u32,
        #[query("c,omitempty")]
        pub c: Option<Box<Node>>,
    }

    fn chain(len: u32) -> Node {
        (1..len).fold(Node { v: len, c: None }, |child, n| Node {
            v: len - n,
            c: Some(Box::new(child)),
        })
    }

    let encoder = Encoder::new(EncoderConfig::builder().max_depth(3).build());
    check!(encoder.encode(&chain(4)).unwrap().get_all("c[c][c][v]") == ["4"]);

    let mut values = QueryValues::new();
    let err = encoder.encode_into(&chain(6), &mut values).unwrap_err();
    let_assert!(Error::DepthLimitExceeded { key, max_depth: 3 } = err);
    check!(key == "c[c][c][c]");
    check!(values.get_all("c[c][c][v]") == ["4"]);
    check!(!values.contains_key("c[c][c][c][v]"));
}

#[test]
fn build_url_and_set_query() {
    #[derive(Query)]
    pub struct Search {
        #[query("q")]
        pub q: &'static str,
        #[query("tag,brackets")]
        pub tags: Vec<&'static str>,
    }

    let search = Search {
        q: "rust lang",
        tags: vec!["a"],
    };

    let url = build_url("https://api.example.com/search?page=1", &search).unwrap();
    check!(url.as_str() == "https://api.example.com/search?page=1&q=rust+lang&tag%5B%5D=a");

    let mut url = quire::url::Url::parse("https://api.example.com/search").unwrap();
    set_query(&mut url, &search).unwrap();
    check!(url.query() == Some("q=rust+lang&tag%5B%5D=a"));

    let_assert!(Err(Error::InvalidUrl(_)) = build_url("::", &search));
}
