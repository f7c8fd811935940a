use serde::{Deserialize, Serialize};
use serde_luaml::{
    decode, from_str, from_value, to_string, to_string_with_options, to_value, EncodeOptions,
    Mode, Value,
};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
    note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Status {
    Active,
    Inactive,
    Suspended { reason: String },
    Retry(u8),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Account {
    id: u32,
    status: Status,
}

fn sample_order() -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
        note: None,
    }
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let text = to_string(&user).unwrap();
    assert_eq!(
        text,
        "id = 123\nname = \"Alice\"\nactive = true\ntags = {\n    \"admin\",\n    \"developer\",\n}\n"
    );

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = sample_order();

    let text = to_string(&order).unwrap();
    assert!(text.contains("note = nil\n"));
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);

    let text = to_string_with_options(&order, &EncodeOptions::table()).unwrap();
    assert!(text.starts_with("{\n    order_id = 12345,\n"));
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_handwritten_document() {
    let text = r#"
        -- order placed through the web shop
        order_id = 0x3039
        customer = {
            id = 123,
            name = Alice,           -- bare words read as strings
            active = true,
            tags = { 'vip', },
        }
        items = {
            { sku = "WIDGET-001", price = 29.99, quantity = 2 },
            { sku = "GADGET-002", price = 49.99, quantity = 1 },
        }
        total = 109.97
    "#;

    let order: Order = from_str(text).unwrap();
    assert_eq!(order, sample_order());
}

#[test]
fn test_enums() {
    let statuses = vec![
        Status::Active,
        Status::Inactive,
        Status::Suspended {
            reason: "Policy violation".to_string(),
        },
        Status::Retry(3),
    ];

    for status in statuses {
        let account = Account { id: 9, status };
        let text = to_string(&account).unwrap();
        let account_back: Account = from_str(&text).unwrap();
        assert_eq!(account, account_back);
    }

    // unit variants are plain strings
    let account: Account = from_str("id = 1\nstatus = Inactive").unwrap();
    assert_eq!(account.status, Status::Inactive);

    let status: Status = from_str("{ Suspended = { reason = late } }").unwrap();
    assert_eq!(
        status,
        Status::Suspended {
            reason: "late".to_string()
        }
    );
}

#[test]
fn test_sequences_at_the_root() {
    let numbers = vec![1, 2, 3, 4, 5];
    let text = to_string(&numbers).unwrap();
    assert_eq!(text, "1\n2\n3\n4\n5\n");
    let numbers_back: Vec<i32> = from_str(&text).unwrap();
    assert_eq!(numbers, numbers_back);

    let empty: Vec<i32> = vec![];
    let text = to_string(&empty).unwrap();
    assert_eq!(text, "");
    let empty_back: Vec<i32> = from_str(&text).unwrap();
    assert!(empty_back.is_empty());

    let products = sample_order().items;
    let text = to_string_with_options(&products, &EncodeOptions::table()).unwrap();
    let products_back: Vec<Product> = from_str(&text).unwrap();
    assert_eq!(products, products_back);
}

#[test]
fn test_maps_and_tuples() {
    let mut map = BTreeMap::new();
    map.insert("alpha".to_string(), (1u8, true));
    map.insert("beta".to_string(), (2u8, false));

    let text = to_string(&map).unwrap();
    let map_back: BTreeMap<String, (u8, bool)> = from_str(&text).unwrap();
    assert_eq!(map, map_back);
}

#[test]
fn test_non_string_map_keys_fail() {
    let mut map = BTreeMap::new();
    map.insert(1, "one");
    let err = to_value(&map).unwrap_err();
    assert!(err.to_string().contains("map keys must be strings"), "{}", err);
}

#[test]
fn test_special_strings() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Texts {
        empty: String,
        quoted: String,
        backslash: String,
        multiline: String,
        tabbed: String,
        keyword: String,
        unicode: String,
    }

    let texts = Texts {
        empty: String::new(),
        quoted: "say \"hi\" and 'bye'".to_string(),
        backslash: "C:\\temp\\n".to_string(),
        multiline: "line one\nline two\n".to_string(),
        tabbed: "a\tb".to_string(),
        keyword: "nil".to_string(),
        unicode: "héllo wörld ✓".to_string(),
    };

    let text = to_string(&texts).unwrap();
    let texts_back: Texts = from_str(&text).unwrap();
    assert_eq!(texts, texts_back);
}

#[test]
fn test_numbers() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Numbers {
        small: i8,
        big: i64,
        unsigned: u64,
        float: f64,
        tiny: f64,
        negative_zero: f64,
    }

    let numbers = Numbers {
        small: -128,
        big: -9_007_199_254_740_992,
        unsigned: 9_007_199_254_740_992,
        float: 1.0 / 3.0,
        tiny: 5e-324,
        negative_zero: -0.0,
    };

    let text = to_string(&numbers).unwrap();
    let numbers_back: Numbers = from_str(&text).unwrap();
    assert_eq!(numbers, numbers_back);

    assert!(from_str::<Numbers>("small = 200\nbig = 0\nunsigned = 0\nfloat = 0\ntiny = 0\nnegative_zero = 0").is_err());
}

#[test]
fn test_value_to_json() {
    let value = decode("name = demo\ncount = 3\nratio = 0.5\nlist = { 1, nil, true }\nmeta = { k = v }").unwrap();
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "demo",
            "count": 3,
            "ratio": 0.5,
            "list": [1, null, true],
            "meta": { "k": "v" }
        })
    );
}

#[test]
fn test_json_to_value() {
    let json = r#"{"id": 7, "tags": ["a", "b"], "owner": {"name": "Bo"}, "gone": null}"#;
    let value: Value = serde_json::from_str(json).unwrap();

    assert_eq!(value["id"], Value::from(7));
    assert_eq!(value["tags"][1], Value::from("b"));
    assert_eq!(value["owner"]["name"], Value::from("Bo"));
    assert!(value["gone"].is_nil());

    let text = serde_luaml::encode(&value, Mode::Global);
    assert_eq!(decode(&text).unwrap(), value);
}

#[test]
fn test_from_value_and_to_value() {
    let value = decode("{ id = 1, name = Bob, active = false, tags = {} }").unwrap();
    let user: User = from_value(value.clone()).unwrap();
    assert_eq!(
        user,
        User {
            id: 1,
            name: "Bob".to_string(),
            active: false,
            tags: vec![],
        }
    );
    assert_eq!(to_value(&user).unwrap(), value);
}

#[test]
fn test_type_mismatch_errors() {
    assert!(from_str::<User>("id = one\nname = x\nactive = true\ntags = {}").is_err());
    assert!(from_str::<User>("id = 1\nname = x\nactive = true").is_err());
    assert!(from_str::<Vec<u8>>("{ a = 1 }").is_err());
    assert!(from_str::<User>("{ 1, 2 }").is_err());
}
