use minirules::prelude::*;


#[test]
fn tree_and_rules_survive_json() {
    let structure = Structure::new(vec![
        Column::categorical("A", 0, ["young", "old"]),
        Column::numeric("Age", 1),
        Column::categorical("class", 2, ["no", "yes"]),
    ]).unwrap();
    let data = vec![
        vec!["young".to_string(), "13".to_string(), "no".to_string()],
        vec!["old".to_string(), "71".to_string(), "yes".to_string()],
    ];

    let json = serde_json::to_string(&structure).unwrap();
    let restored: Structure = serde_json::from_str(&json).unwrap();
    assert_eq!(structure, restored);

    let tree = Id3Builder::new()
        .build()
        .tree(&data, &structure)
        .unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: DecisionTree = serde_json::from_str(&json).unwrap();
    assert_eq!(tree.rules(), restored.rules());

    let rules = parse_rules(&tree.rules()).unwrap();
    let json = serde_json::to_string(&rules).unwrap();
    let restored: Vec<Rule> = serde_json::from_str(&json).unwrap();
    assert_eq!(rules, restored);
}


#[test]
fn structure_serializes_as_columns() {
    let structure = Structure::new(vec![
        Column::numeric("Age", 0),
        Column::categorical("class", 1, ["no"]),
    ]).unwrap();

    let json = serde_json::to_string(&structure).unwrap();
    let expected = concat!(
        r#"[{"name":"Age","position":0,"domain":"Numeric"},"#,
        r#"{"name":"class","position":1,"domain":{"Categorical":["no"]}}]"#,
    );
    assert_eq!(expected, json);
}


#[test]
fn invalid_structure_is_rejected() {
    let invalid = [
        // The class column points past the last position.
        r#"[{"name":"A","position":0,"domain":{"Categorical":["x"]}},
            {"name":"class","position":7,"domain":{"Categorical":["no"]}}]"#,
        // The class column has no value.
        r#"[{"name":"A","position":0,"domain":{"Categorical":["x"]}},
            {"name":"class","position":1,"domain":{"Categorical":[]}}]"#,
        // No class column.
        r#"[{"name":"A","position":0,"domain":{"Categorical":["x"]}}]"#,
        // Two columns named `A`.
        r#"[{"name":"A","position":0,"domain":"Numeric"},
            {"name":"A","position":1,"domain":"Numeric"},
            {"name":"class","position":2,"domain":{"Categorical":["no"]}}]"#,
    ];

    for json in invalid {
        let result = serde_json::from_str::<Structure>(json);
        assert!(result.is_err(), "expected an error, got {result:?}.");
    }
}
