#![allow(dead_code)]

use rmpv::Value;

pub fn function(name: &str, ret: &str, params: &[(&str, &str)], can_fail: bool) -> Value {
    let params = params
        .iter()
        .map(|(t, n)| Value::Array(vec![Value::from(*t), Value::from(*n)]))
        .collect();
    Value::Map(vec![
        (Value::from("name"), Value::from(name)),
        (Value::from("return_type"), Value::from(ret)),
        (Value::from("parameters"), Value::Array(params)),
        (Value::from("can_fail"), Value::from(can_fail)),
    ])
}

pub fn document(functions: Vec<Value>) -> Vec<u8> {
    let doc = Value::Map(vec![
        (
            Value::from("version"),
            Value::Map(vec![(Value::from("api_level"), Value::from(3u64))]),
        ),
        (Value::from("functions"), Value::Array(functions)),
    ]);
    let mut buf = Vec::new();
    rmpv::encode::write_value(&mut buf, &doc).unwrap();
    buf
}

/// `nvim_strwidth` and `nvim_list_bufs`, preceded by the bootstrap call the
/// generator drops.
pub fn sample_metadata() -> Vec<u8> {
    document(vec![
        function("vim_get_api_info", "Array", &[], false),
        function("nvim_strwidth", "Integer", &[("String", "text")], true),
        function("nvim_list_bufs", "ArrayOf(Buffer)", &[], false),
    ])
}
