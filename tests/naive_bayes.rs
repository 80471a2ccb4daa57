use minirules::prelude::*;
use minirules::naive_bayes::{combinations, token};


const TEST_TOLERANCE: f64 = 1e-9;


fn row(cells: &[&str]) -> Row {
    cells.iter().map(|cell| cell.to_string()).collect()
}


#[test]
fn numeric_columns_are_ignored() {
    let structure = Structure::new(vec![
        Column::categorical("Outlook", 0, ["sunny", "overcast", "rain"]),
        Column::numeric("Temperature", 1),
        Column::categorical("Windy", 2, ["true", "false"]),
        Column::categorical("class", 3, ["play", "stay"]),
    ]).unwrap();
    let data = vec![
        row(&["sunny",    "30", "false", "stay"]),
        row(&["sunny",    "27", "true",  "stay"]),
        row(&["overcast", "24", "false", "play"]),
        row(&["rain",     "18", "false", "play"]),
        row(&["rain",     "12", "true",  "stay"]),
    ];

    assert_eq!(3 * 2, combinations(&structure).len());

    let rules = NaiveBayes::new().produce(&data, &structure).unwrap();
    assert_eq!(3 * 2, rules.len());
    for rule in rules.iter() {
        assert!(
            !rule.contains("Temperature"),
            "expected no numeric column, got {rule}.",
        );
        assert!(rule.parse::<Rule>().is_ok(), "failed to parse {rule}.");
    }
}


// Toy example
//
//        A      B   class
//    young    low      no
//    young   high      no
//      old    low     yes
//
// P(no)  = (2 + 1) / (3 + 2) = 0.6
// P(yes) = (1 + 1) / (3 + 2) = 0.4
// P(old | yes) = 2 / 3, P(high | yes) = 1 / 3
// P(old | no)  = 1 / 4, P(high | no)  = 2 / 4
#[test]
fn posteriors_by_hand() {
    let structure = Structure::new(vec![
        Column::categorical("A", 0, ["young", "old"]),
        Column::categorical("B", 1, ["low", "high"]),
        Column::categorical("class", 2, ["no", "yes"]),
    ]).unwrap();
    let data = vec![
        row(&["young", "low",  "no"]),
        row(&["young", "high", "no"]),
        row(&["old",   "low",  "yes"]),
    ];

    let table = ProbabilityTable::build(&structure, &data).unwrap();
    let nb = NaiveBayes::new();
    let combination = [token("A", "old"), token("B", "high")];

    let p_yes = nb.posterior(&combination, &table, "yes");
    // round(round(2/3) * 1/3) = round(0.667 * 0.3333) = 0.222
    let expected = 0.222 * 0.4;
    assert!(
        (expected - p_yes).abs() < TEST_TOLERANCE,
        "expected {expected}, got {p_yes}.",
    );

    let p_no = nb.posterior(&combination, &table, "no");
    let expected = 0.125 * 0.6;
    assert!(
        (expected - p_no).abs() < TEST_TOLERANCE,
        "expected {expected}, got {p_no}.",
    );

    let rules = nb.produce(&data, &structure).unwrap();
    assert_eq!("A == old, B == high => class == yes", rules[3]);
}


#[test]
fn dispatch_by_name() {
    let structure = Structure::new(vec![
        Column::categorical("A", 0, ["young", "old"]),
        Column::categorical("class", 1, ["no", "yes"]),
    ]).unwrap();
    let data = vec![
        row(&["young", "no"]),
        row(&["old",   "yes"]),
    ];

    let kind = "naive bayes".parse::<ClassifierKind>().unwrap();
    let rules = build_rules(kind, &data, &structure, InOrder).unwrap();
    let expected = vec![
        "A == young => class == no",
        "A == old => class == yes",
    ];
    assert_eq!(expected, rules);

    let kind = "Random Forest".parse::<ClassifierKind>();
    assert!(matches!(kind, Err(InductionError::UnknownClassifier(_))));
}


// Toy example
//
// 48 rows labeled `no`, all with `A == a`, six of them with `B == b1`.
//
// P(b | no)  = (0 + 1) / (48 + 2) = 1 / 50
// P(b1 | no) = (6 + 1) / (48 + 8) = 1 / 8
//
// 0.02 * 0.125 is 0.0025000000000000000520... as a double,
// which rounds up to 0.003 on three digits.
#[test]
fn per_step_rounding_is_decimal() {
    let structure = Structure::new(vec![
        Column::categorical("A", 0, ["a", "b"]),
        Column::categorical("B", 1, ["b0", "b1", "b2", "b3", "b4", "b5", "b6", "b7"]),
        Column::categorical("class", 2, ["no", "yes"]),
    ]).unwrap();
    let mut data = vec![row(&["a", "b1", "no"]); 6];
    data.extend(vec![row(&["a", "b0", "no"]); 42]);
    data.push(row(&["b", "b0", "yes"]));

    let table = ProbabilityTable::build(&structure, &data).unwrap();
    let combination = [token("A", "b"), token("B", "b1")];

    let p = table.likelihood(&combination, "no", 3);
    assert!((0.003 - p).abs() < TEST_TOLERANCE, "expected 0.003, got {p}.");

    let p = table.likelihood(&combination, "no", 400);
    let expected = 0.02 * 0.125;
    assert!(
        (expected - p).abs() < TEST_TOLERANCE,
        "expected {expected}, got {p}.",
    );
}
