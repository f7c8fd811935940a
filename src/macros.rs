/// Builds a [`Value`](crate::Value) with LuaML-flavoured literal syntax.
///
/// - `nil`, `true`, `false` map to the matching scalars
/// - `[a, b, ...]` builds an array-shaped table
/// - `{ "key": value, ... }` builds an object-shaped table
/// - any other expression goes through [`to_value`](crate::to_value)
///
/// ```rust
/// use serde_luaml::{luaml, Value};
///
/// let value = luaml!({
///     "name": "server",
///     "ports": [80, 443],
///     "debug": nil
/// });
/// assert_eq!(value["ports"][1], Value::from(443));
/// ```
#[macro_export]
macro_rules! luaml {
    (nil) => {
        $crate::Value::Nil
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Table($crate::Table::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::from(vec![$($crate::luaml!($elem)),*])
    };

    ({}) => {
        $crate::Value::Table($crate::Table::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::Table::new();
        $(
            table.insert($key, $crate::luaml!($value));
        )*
        $crate::Value::Table(table)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Nil)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Table, Value};

    #[test]
    fn test_luaml_macro_primitives() {
        assert_eq!(luaml!(nil), Value::Nil);
        assert_eq!(luaml!(true), Value::Bool(true));
        assert_eq!(luaml!(false), Value::Bool(false));
        assert_eq!(luaml!(42), Value::Number(42.0));
        assert_eq!(luaml!(3.5), Value::Number(3.5));
        assert_eq!(luaml!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_luaml_macro_arrays() {
        assert_eq!(luaml!([]), Value::Table(Table::new()));

        let list = luaml!([1, "two", [3]]);
        let table = list.as_table().unwrap();
        assert!(table.is_array());
        assert_eq!(table.len(), 3);
        assert_eq!(list[2][0], Value::from(3));
    }

    #[test]
    fn test_luaml_macro_objects() {
        let obj = luaml!({
            "name": "Alice",
            "age": 30,
            "nested": { "ok": true }
        });

        let table = obj.as_table().unwrap();
        assert!(table.is_object());
        assert_eq!(table.get("name"), Some(&Value::from("Alice")));
        assert_eq!(obj["nested"]["ok"], Value::Bool(true));
    }
}
