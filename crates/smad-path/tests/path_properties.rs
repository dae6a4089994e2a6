use proptest::prelude::*;
use serde_json::{json, Value};
use smad_path::{extract_value, Filter, PathExpr, Step};

fn component_types() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(
        prop_oneof![
            Just("payload"),
            Just("power"),
            Just("adcs"),
            Just("thermal"),
        ],
        0..12,
    )
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_map(Step::Field),
        "[a-z]{1,4}-[a-z]{1,4}".prop_map(Step::Field),
        (0..64usize).prop_map(Step::Index),
        ("[a-z]{1,6}", "[a-zA-Z0-9 ']{0,8}")
            .prop_map(|(field, literal)| Step::Filter(Filter::new(field, literal))),
    ]
}

proptest! {
    #[test]
    fn prop_find_returns_first_matching_component(types in component_types()) {
        let components: Vec<Value> = types
            .iter()
            .enumerate()
            .map(|(i, ty)| json!({ "type": ty, "slot": i }))
            .collect();
        let doc = json!({ "components": components });

        let result = extract_value(&doc, "components.find(c => c.type === 'payload').slot");
        match types.iter().position(|ty| *ty == "payload") {
            Some(first) => prop_assert_eq!(result.unwrap(), &json!(first)),
            None => prop_assert!(result.unwrap_err().is_not_found()),
        }
    }

    #[test]
    fn prop_canonical_rendering_parses_back(steps in proptest::collection::vec(step(), 1..6)) {
        let path = PathExpr::new(steps);
        let reparsed: PathExpr = path.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn prop_extraction_never_panics(text in "[a-z.\\[\\]()'=>@? 0-9]{0,24}") {
        let doc = json!({ "a": [ { "b": 1 } ] });
        let _ = extract_value(&doc, &text);
    }
}

#[test]
fn jsonpath_and_arrow_spellings_resolve_identically() {
    let doc = json!({
        "spacecraft": {
            "components": [
                { "type": "power", "mass": 50 },
                { "type": "payload", "mass": 20 }
            ]
        }
    });
    let arrow =
        extract_value(&doc, "spacecraft.components.find(c => c.type === 'payload').mass").unwrap();
    let jsonpath =
        extract_value(&doc, "$.spacecraft.components[?(@.type=='payload')].mass").unwrap();
    assert_eq!(arrow, jsonpath);
    assert_eq!(arrow, &json!(20));
}
