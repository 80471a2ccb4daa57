use minirules::prelude::*;


const TEST_TOLERANCE: f64 = 1e-9;


fn row(cells: &[&str]) -> Row {
    cells.iter().map(|cell| cell.to_string()).collect()
}


fn weather() -> (Vec<&'static str>, Vec<Row>) {
    let header = vec!["Outlook", "Humidity", "Windy", "class"];
    let rows = vec![
        row(&["sunny",    "high",   "false", "no"]),
        row(&["sunny",    "high",   "true",  "no"]),
        row(&["overcast", "high",   "false", "yes"]),
        row(&["rain",     "high",   "false", "yes"]),
        row(&["rain",     "normal", "false", "yes"]),
        row(&["rain",     "normal", "true",  "no"]),
        row(&["overcast", "normal", "true",  "yes"]),
        row(&["sunny",    "normal", "false", "yes"]),
    ];
    (header, rows)
}


#[test]
fn inferred_structure() {
    let (header, rows) = weather();
    let structure = Structure::infer(&header, &rows).unwrap();

    let outlook = structure.column("Outlook").unwrap();
    assert_eq!(&Domain::from_values(["sunny", "overcast", "rain"]), outlook.domain());
    assert_eq!(&["no".to_string(), "yes".to_string()], structure.class_values());
}


#[test]
fn rules_reproduce_training_data() {
    let (header, rows) = weather();
    let structure = Structure::infer(&header, &rows).unwrap();

    let rules = Id3Builder::new()
        .pruning(false)
        .build()
        .produce(&rows, &structure)
        .unwrap();
    let rules = parse_rules(&rules).unwrap();

    let predicted = classify_all(&rows, &structure, &rules).unwrap();
    let acc = accuracy(&predicted, &rows);
    assert!((100f64 - acc).abs() < TEST_TOLERANCE, "expected 100, got {acc}.");
}


#[test]
fn accuracy_of_identical_rows() {
    let (_, rows) = weather();
    let predicted = rows.iter().cloned().map(Some).collect::<Vec<_>>();

    let acc = accuracy(&predicted, &rows);
    assert!((100f64 - acc).abs() < TEST_TOLERANCE, "expected 100, got {acc}.");

    let acc = accuracy(&[], &[]);
    assert!((100f64 - acc).abs() < TEST_TOLERANCE, "expected 100, got {acc}.");
}


#[test]
fn first_matching_rule_wins() {
    let (header, rows) = weather();
    let structure = Structure::infer(&header, &rows).unwrap();
    let rules = parse_rules(&[
        "Outlook == sunny , Humidity == high => class == no",
        "Outlook == sunny => class == yes",
        "Windy == true => class == no",
    ]).unwrap();

    let label = classify(&row(&["sunny", "high", "true", "?"]), &structure, &rules);
    assert_eq!(Ok(Some("no")), label);

    let label = classify(&row(&["sunny", "normal", "true", "?"]), &structure, &rules);
    assert_eq!(Ok(Some("yes")), label);

    let label = classify(&row(&["rain", "normal", "false", "?"]), &structure, &rules);
    assert_eq!(Ok(None), label);
}


#[test]
fn report_runs_both_learners() {
    let (header, rows) = weather();
    let structure = Structure::infer(&header, &rows).unwrap();
    let (train, test) = rows.split_at(6);

    let id3 = Id3Builder::new().build();
    let outcome = Report::new(&id3, &structure, train, test)
        .verbose(false)
        .run()
        .unwrap();
    assert!(!outcome.rules.is_empty());
    assert!((0f64..=100f64).contains(&outcome.accuracy));

    let nb = NaiveBayes::new();
    let outcome = Report::new(&nb, &structure, train, test)
        .verbose(false)
        .run()
        .unwrap();
    // 3 outlooks x 2 humidities x 2 winds.
    assert_eq!(12, outcome.rules.len());
}
